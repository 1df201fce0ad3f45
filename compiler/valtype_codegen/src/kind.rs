//! The closed set of value kinds and their directive parameters.

use std::fmt;

/// Semantic category a declaration is generated as.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ValueKind {
    Identifier,
    BoundedText,
    BoundedInteger,
    BoundedReal,
}

impl ValueKind {
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Identifier,
        ValueKind::BoundedText,
        ValueKind::BoundedInteger,
        ValueKind::BoundedReal,
    ];

    /// Attribute name selecting this kind, e.g. `bounded_text`.
    pub fn directive_name(self) -> &'static str {
        match self {
            ValueKind::Identifier => "identifier",
            ValueKind::BoundedText => "bounded_text",
            ValueKind::BoundedInteger => "bounded_integer",
            ValueKind::BoundedReal => "bounded_real",
        }
    }

    /// Look up the kind for a directive attribute name.
    pub fn from_directive(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.directive_name() == name)
    }

    /// Parameters accepted by this kind's directive, in positional order.
    pub fn parameters(self) -> &'static [Parameter] {
        match self {
            ValueKind::Identifier => &[],
            ValueKind::BoundedText => &TEXT_PARAMETERS,
            ValueKind::BoundedInteger => &INTEGER_PARAMETERS,
            ValueKind::BoundedReal => &REAL_PARAMETERS,
        }
    }

    /// Name of the runtime `ValueKind` variant generated code refers to.
    pub fn runtime_variant(self) -> &'static str {
        match self {
            ValueKind::Identifier => "Identifier",
            ValueKind::BoundedText => "BoundedText",
            ValueKind::BoundedInteger => "BoundedInteger",
            ValueKind::BoundedReal => "BoundedReal",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive_name())
    }
}

/// Literal type a directive parameter accepts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamType {
    /// Non-negative length, stored as `usize`.
    Length,
    /// 32-bit signed integer bound.
    Int32,
    /// Finite 64-bit float bound; integer literals are accepted.
    Real,
    /// Regular expression source text.
    Pattern,
}

impl ParamType {
    pub fn describe(self) -> &'static str {
        match self {
            ParamType::Length => "a non-negative integer literal",
            ParamType::Int32 => "an integer literal within the `i32` range",
            ParamType::Real => "a finite numeric literal",
            ParamType::Pattern => "a string literal",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Parameter {
    pub name: &'static str,
    pub ty: ParamType,
    pub required: bool,
}

const TEXT_PARAMETERS: [Parameter; 3] = [
    Parameter {
        name: "min_length",
        ty: ParamType::Length,
        required: true,
    },
    Parameter {
        name: "max_length",
        ty: ParamType::Length,
        required: true,
    },
    Parameter {
        name: "pattern",
        ty: ParamType::Pattern,
        required: false,
    },
];

const INTEGER_PARAMETERS: [Parameter; 2] = [
    Parameter {
        name: "min",
        ty: ParamType::Int32,
        required: true,
    },
    Parameter {
        name: "max",
        ty: ParamType::Int32,
        required: true,
    },
];

const REAL_PARAMETERS: [Parameter; 2] = [
    Parameter {
        name: "min",
        ty: ParamType::Real,
        required: true,
    },
    Parameter {
        name: "max",
        ty: ParamType::Real,
        required: true,
    },
];

/// Validated, kind-specific configuration.
///
/// The template engine matches exhaustively over this type; adding a kind
/// means adding a variant here and a body in every emitter.
#[derive(Clone, PartialEq, Debug)]
pub enum KindParams {
    Identifier,
    BoundedText {
        min_length: usize,
        max_length: usize,
        pattern: Option<String>,
    },
    BoundedInteger {
        min: i32,
        max: i32,
    },
    BoundedReal {
        min: f64,
        max: f64,
    },
}

impl KindParams {
    pub fn kind(&self) -> ValueKind {
        match self {
            KindParams::Identifier => ValueKind::Identifier,
            KindParams::BoundedText { .. } => ValueKind::BoundedText,
            KindParams::BoundedInteger { .. } => ValueKind::BoundedInteger,
            KindParams::BoundedReal { .. } => ValueKind::BoundedReal,
        }
    }
}
