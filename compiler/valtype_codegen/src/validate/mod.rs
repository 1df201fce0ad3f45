//! Directive validator.
//!
//! Binds directive arguments to the kind's parameters, interprets the
//! literals, and checks the cross-argument constraints (bound ordering,
//! pattern syntax). Pure: a failure describes the problem and where it is,
//! and the caller decides what to do with it.

use proc_macro2::Span;
use thiserror::Error;

use crate::declaration::ValueDeclaration;
use crate::diagnostic::{Diagnostic, ErrorCode};
use crate::directive::{ArgValue, Directive, DirectiveArg};
use crate::kind::{KindParams, ParamType, Parameter, ValueKind};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationErrorKind {
    #[error("invalid bounds: {detail}")]
    InvalidBounds { detail: String },

    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("missing required argument `{parameter}` for `#[{directive}]`")]
    MissingArgument {
        parameter: &'static str,
        directive: &'static str,
    },

    #[error("unknown argument `{name}` for `#[{directive}]`")]
    UnknownArgument {
        name: String,
        directive: &'static str,
    },

    #[error("argument `{parameter}` is given more than once")]
    DuplicateArgument { parameter: &'static str },

    #[error("`#[{directive}]` takes at most {expected} argument(s), found {found}")]
    TooManyArguments {
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`{parameter}` expects {expected}")]
    InvalidLiteral {
        parameter: &'static str,
        expected: &'static str,
    },
}

/// A rejected directive configuration and the span it applies to.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ConfigurationError {
    pub kind: ConfigurationErrorKind,
    pub span: Span,
}

impl ConfigurationError {
    fn new(kind: ConfigurationErrorKind, span: Span) -> Self {
        ConfigurationError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ConfigurationErrorKind::InvalidBounds { .. } => ErrorCode::V2001,
            ConfigurationErrorKind::InvalidPattern { .. } => ErrorCode::V2002,
            ConfigurationErrorKind::MissingArgument { .. } => ErrorCode::V2003,
            ConfigurationErrorKind::UnknownArgument { .. } => ErrorCode::V2004,
            ConfigurationErrorKind::DuplicateArgument { .. } => ErrorCode::V2005,
            ConfigurationErrorKind::TooManyArguments { .. } => ErrorCode::V2006,
            ConfigurationErrorKind::InvalidLiteral { .. } => ErrorCode::V2007,
        }
    }

    pub fn into_diagnostic(self, declaration: &ValueDeclaration) -> Diagnostic {
        Diagnostic::error(self.code(), self.span)
            .with_message(self.to_string())
            .with_note(format!(
                "no value type is generated for `{}`",
                declaration.qualified_name()
            ))
    }
}

/// A declaration whose directive arguments passed validation.
#[derive(Clone, Debug)]
pub struct ValidatedDeclaration<'a> {
    pub declaration: &'a ValueDeclaration,
    pub params: KindParams,
}

/// Check a declaration's directive and produce its kind parameters.
pub fn validate(
    declaration: &ValueDeclaration,
) -> Result<ValidatedDeclaration<'_>, ConfigurationError> {
    let params = validate_directive(&declaration.directive)?;
    Ok(ValidatedDeclaration {
        declaration,
        params,
    })
}

/// Interpret a directive on its own, without the surrounding declaration.
pub fn validate_directive(directive: &Directive) -> Result<KindParams, ConfigurationError> {
    let bound = bind(directive)?;
    let span = directive.span;

    match directive.kind {
        ValueKind::Identifier => Ok(KindParams::Identifier),
        ValueKind::BoundedText => {
            let min_length = length(required(&bound, 0, directive)?)?;
            let max_length = length(required(&bound, 1, directive)?)?;
            let pattern = bound[2].map(pattern_source).transpose()?;
            if min_length > max_length {
                return Err(ConfigurationError::new(
                    ConfigurationErrorKind::InvalidBounds {
                        detail: format!(
                            "`min_length` ({min_length}) must not exceed `max_length` ({max_length})"
                        ),
                    },
                    span,
                ));
            }
            Ok(KindParams::BoundedText {
                min_length,
                max_length,
                pattern,
            })
        }
        ValueKind::BoundedInteger => {
            let min = int32(required(&bound, 0, directive)?)?;
            let max = int32(required(&bound, 1, directive)?)?;
            if min > max {
                return Err(ConfigurationError::new(
                    ConfigurationErrorKind::InvalidBounds {
                        detail: format!("`min` ({min}) must not exceed `max` ({max})"),
                    },
                    span,
                ));
            }
            Ok(KindParams::BoundedInteger { min, max })
        }
        ValueKind::BoundedReal => {
            let min = real(required(&bound, 0, directive)?)?;
            let max = real(required(&bound, 1, directive)?)?;
            if min > max {
                return Err(ConfigurationError::new(
                    ConfigurationErrorKind::InvalidBounds {
                        detail: format!("`min` ({min:?}) must not exceed `max` ({max:?})"),
                    },
                    span,
                ));
            }
            Ok(KindParams::BoundedReal { min, max })
        }
    }
}

/// An argument matched to the parameter it fills.
#[derive(Clone, Copy)]
struct BoundArg<'d> {
    parameter: &'static Parameter,
    arg: &'d DirectiveArg,
}

/// Assign each argument to a parameter slot: the n-th positional argument
/// fills the n-th parameter, named arguments fill the parameter of that name.
fn bind(directive: &Directive) -> Result<Vec<Option<BoundArg<'_>>>, ConfigurationError> {
    let parameters = directive.kind.parameters();
    let directive_name = directive.kind.directive_name();
    let mut slots: Vec<Option<BoundArg<'_>>> = vec![None; parameters.len()];
    let mut positional = 0;

    for arg in &directive.args {
        let index = match &arg.name {
            Some(name) => parameters
                .iter()
                .position(|p| name == p.name)
                .ok_or_else(|| {
                    ConfigurationError::new(
                        ConfigurationErrorKind::UnknownArgument {
                            name: name.to_string(),
                            directive: directive_name,
                        },
                        name.span(),
                    )
                })?,
            None => {
                let index = positional;
                positional += 1;
                if index >= parameters.len() {
                    return Err(ConfigurationError::new(
                        ConfigurationErrorKind::TooManyArguments {
                            directive: directive_name,
                            expected: parameters.len(),
                            found: directive.args.len(),
                        },
                        arg.span(),
                    ));
                }
                index
            }
        };

        let parameter = &parameters[index];
        if slots[index].is_some() {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::DuplicateArgument {
                    parameter: parameter.name,
                },
                arg.span(),
            ));
        }
        slots[index] = Some(BoundArg { parameter, arg });
    }

    for (slot, parameter) in slots.iter().zip(parameters) {
        if slot.is_none() && parameter.required {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::MissingArgument {
                    parameter: parameter.name,
                    directive: directive_name,
                },
                directive.span,
            ));
        }
    }

    Ok(slots)
}

fn required<'d>(
    slots: &[Option<BoundArg<'d>>],
    index: usize,
    directive: &Directive,
) -> Result<BoundArg<'d>, ConfigurationError> {
    slots.get(index).copied().flatten().ok_or_else(|| {
        let parameter = directive
            .kind
            .parameters()
            .get(index)
            .map_or("?", |p| p.name);
        ConfigurationError::new(
            ConfigurationErrorKind::MissingArgument {
                parameter,
                directive: directive.kind.directive_name(),
            },
            directive.span,
        )
    })
}

fn invalid_literal(bound: BoundArg<'_>) -> ConfigurationError {
    ConfigurationError::new(
        ConfigurationErrorKind::InvalidLiteral {
            parameter: bound.parameter.name,
            expected: bound.parameter.ty.describe(),
        },
        bound.arg.value.span(),
    )
}

fn length(bound: BoundArg<'_>) -> Result<usize, ConfigurationError> {
    debug_assert_eq!(bound.parameter.ty, ParamType::Length);
    let ArgValue::Int { negative, lit } = &bound.arg.value else {
        return Err(invalid_literal(bound));
    };
    let value: usize = lit.base10_parse().map_err(|_| invalid_literal(bound))?;
    if *negative && value != 0 {
        return Err(ConfigurationError::new(
            ConfigurationErrorKind::InvalidBounds {
                detail: format!(
                    "`{}` must not be negative (found -{value})",
                    bound.parameter.name
                ),
            },
            bound.arg.value.span(),
        ));
    }
    Ok(value)
}

fn int32(bound: BoundArg<'_>) -> Result<i32, ConfigurationError> {
    debug_assert_eq!(bound.parameter.ty, ParamType::Int32);
    let ArgValue::Int { negative, lit } = &bound.arg.value else {
        return Err(invalid_literal(bound));
    };
    let magnitude: i64 = lit.base10_parse().map_err(|_| invalid_literal(bound))?;
    let value = if *negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| invalid_literal(bound))
}

fn real(bound: BoundArg<'_>) -> Result<f64, ConfigurationError> {
    debug_assert_eq!(bound.parameter.ty, ParamType::Real);
    let (negative, magnitude) = match &bound.arg.value {
        ArgValue::Float { negative, lit } => (*negative, lit.base10_parse::<f64>()),
        ArgValue::Int { negative, lit } => (*negative, lit.base10_parse::<f64>()),
        ArgValue::Str(_) => return Err(invalid_literal(bound)),
    };
    let magnitude = magnitude.map_err(|_| invalid_literal(bound))?;
    let value = if negative { -magnitude } else { magnitude };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_literal(bound))
    }
}

fn pattern_source(bound: BoundArg<'_>) -> Result<String, ConfigurationError> {
    debug_assert_eq!(bound.parameter.ty, ParamType::Pattern);
    let ArgValue::Str(lit) = &bound.arg.value else {
        return Err(invalid_literal(bound));
    };
    let source = lit.value();
    match regex::Regex::new(&source) {
        Ok(_) => Ok(source),
        Err(err) => Err(ConfigurationError::new(
            ConfigurationErrorKind::InvalidPattern {
                pattern: source,
                reason: pattern_error_reason(&err),
            },
            lit.span(),
        )),
    }
}

/// Last line of a regex error. Syntax errors render the pattern with a
/// caret above it, which a diagnostic spanned at the literal already shows.
fn pattern_error_reason(err: &regex::Error) -> String {
    let text = err.to_string();
    let last = text.lines().next_back().unwrap_or_default();
    last.strip_prefix("error: ").unwrap_or(last).to_owned()
}
