//! Lazily compiled text patterns.
//!
//! Generated text types hold one `static CompiledPattern` each. The regex is
//! compiled on first use and shared afterwards. Patterns are checked at
//! generation time, so the error path only exists to stay panic-free.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ConstraintViolation, Violation};

/// A pattern source and its compiled form.
#[derive(Debug)]
pub struct CompiledPattern {
    source: &'static str,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl CompiledPattern {
    pub const fn new(source: &'static str) -> Self {
        CompiledPattern {
            source,
            compiled: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    fn regex(&self) -> Result<&Regex, &regex::Error> {
        self.compiled
            .get_or_init(|| {
                tracing::trace!(pattern = self.source, "compiling pattern");
                Regex::new(self.source)
            })
            .as_ref()
    }

    /// Unanchored search: anchors, if wanted, are part of the pattern.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_ok_and(|regex| regex.is_match(text))
    }

    /// Check `text` on behalf of `type_name`.
    pub fn check(&self, type_name: &'static str, text: &str) -> Result<(), ConstraintViolation> {
        match self.regex() {
            Ok(regex) if regex.is_match(text) => Ok(()),
            Ok(_) => Err(ConstraintViolation::new(
                type_name,
                Violation::Pattern {
                    pattern: self.source,
                },
            )),
            Err(err) => Err(ConstraintViolation::new(
                type_name,
                Violation::PatternUnavailable {
                    pattern: self.source,
                    reason: err.to_string(),
                },
            )),
        }
    }
}
