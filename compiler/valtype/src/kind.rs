//! Value kinds as seen by generated code.

use std::fmt;

/// The semantic category of a generated value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ValueKind {
    /// Opaque 128-bit identifier.
    Identifier,
    /// Text with an inclusive length range and an optional pattern.
    BoundedText,
    /// 32-bit integer with an inclusive range.
    BoundedInteger,
    /// Finite 64-bit float with an inclusive range.
    BoundedReal,
}

impl ValueKind {
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Identifier,
        ValueKind::BoundedText,
        ValueKind::BoundedInteger,
        ValueKind::BoundedReal,
    ];

    /// The directive that declares this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Identifier => "identifier",
            ValueKind::BoundedText => "bounded_text",
            ValueKind::BoundedInteger => "bounded_integer",
            ValueKind::BoundedReal => "bounded_real",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
