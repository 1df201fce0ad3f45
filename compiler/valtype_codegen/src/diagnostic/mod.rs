//! Pass diagnostics.
//!
//! Every rejected declaration produces one [`Diagnostic`] anchored at the
//! offending source span. The macro renders them as spanned
//! `compile_error!` invocations next to the code that did generate.

mod error_code;

use std::fmt;

use proc_macro2::{Span, TokenStream};

pub use error_code::ErrorCode;

/// A pass-level error tied to a source location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Start an error diagnostic with the given code at `span`.
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Render as a `compile_error!` invocation spanned at the source location.
    pub fn to_compile_error(&self) -> TokenStream {
        syn::Error::new(self.span, self.to_string()).to_compile_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for help in &self.help {
            write!(f, "\n  = help: {help}")?;
        }
        Ok(())
    }
}

impl From<syn::Error> for Diagnostic {
    /// Syntax errors in directive arguments.
    fn from(err: syn::Error) -> Self {
        Diagnostic::error(ErrorCode::V1004, err.span()).with_message(err.to_string())
    }
}
