//! Error codes for generation-pass diagnostics.

use std::fmt;

/// Error codes for all generation-pass diagnostics.
///
/// Format: V#### where the first digit indicates the phase:
/// - V1xxx: Declaration scanning
/// - V2xxx: Directive and option validation
/// - V3xxx: Aggregation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Scanning (V1xxx)
    /// Directive on something other than a plain unit struct
    V1001,
    /// More than one directive on the same declaration
    V1002,
    /// Nested declaration the registration cannot name
    V1003,
    /// Directive arguments are not syntactically well formed
    V1004,

    // Validation (V2xxx)
    /// Bounds out of order or negative length
    V2001,
    /// Pattern is not a valid regular expression
    V2002,
    /// Required directive argument missing
    V2003,
    /// Unknown directive argument name
    V2004,
    /// Directive argument given twice
    V2005,
    /// More positional arguments than parameters
    V2006,
    /// Literal of the wrong type or out of range
    V2007,
    /// Invalid `#[value_types(...)]` option
    V2008,

    // Aggregation (V3xxx)
    /// Same declaration name appears more than once in a pass
    V3001,
    /// Declaration name collides with a generated item
    V3002,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::V1001,
        ErrorCode::V1002,
        ErrorCode::V1003,
        ErrorCode::V1004,
        ErrorCode::V2001,
        ErrorCode::V2002,
        ErrorCode::V2003,
        ErrorCode::V2004,
        ErrorCode::V2005,
        ErrorCode::V2006,
        ErrorCode::V2007,
        ErrorCode::V2008,
        ErrorCode::V3001,
        ErrorCode::V3002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::V1001 => "V1001",
            ErrorCode::V1002 => "V1002",
            ErrorCode::V1003 => "V1003",
            ErrorCode::V1004 => "V1004",
            ErrorCode::V2001 => "V2001",
            ErrorCode::V2002 => "V2002",
            ErrorCode::V2003 => "V2003",
            ErrorCode::V2004 => "V2004",
            ErrorCode::V2005 => "V2005",
            ErrorCode::V2006 => "V2006",
            ErrorCode::V2007 => "V2007",
            ErrorCode::V2008 => "V2008",
            ErrorCode::V3001 => "V3001",
            ErrorCode::V3002 => "V3002",
        }
    }

    /// Check if this is a scanning error (V1xxx range).
    pub fn is_scan_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::V1001 | ErrorCode::V1002 | ErrorCode::V1003 | ErrorCode::V1004
        )
    }

    /// Check if this is a configuration error (V2xxx range).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::V2001
                | ErrorCode::V2002
                | ErrorCode::V2003
                | ErrorCode::V2004
                | ErrorCode::V2005
                | ErrorCode::V2006
                | ErrorCode::V2007
                | ErrorCode::V2008
        )
    }

    /// Check if this is an aggregation error (V3xxx range).
    pub fn is_aggregation_error(&self) -> bool {
        matches!(self, ErrorCode::V3001 | ErrorCode::V3002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"V2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
