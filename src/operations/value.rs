//! Operation values
//!
//! Every operation stores one of a handful of value shapes. Geometry is kept
//! as validated [`Number`] tokens so the caller's textual form survives into
//! the generated path untouched.

use std::fmt;
use std::str::FromStr;

use crate::error::RezizerError;

/// A numeric geometry argument
///
/// Holds the trimmed text of a value that passed the numeric check, so
/// `"010"` encodes as `010` and `1.5` as `1.5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Validate any displayable value as a number
    ///
    /// Returns `None` when the rendered value is not numeric.
    pub fn parse_display(value: impl fmt::Display) -> Option<Self> {
        value.to_string().parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Number {
    type Err = RezizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_numeric(trimmed) {
            Ok(Number(trimmed.to_string()))
        } else {
            Err(RezizerError::invalid_argument(
                "number",
                format!("'{}' is not numeric", s),
            ))
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decimal number check: optional sign, digits with an optional fraction,
/// optional exponent. Rejects `inf`, `NaN` and hex literals that
/// `f64::from_str` would otherwise let through.
fn is_numeric(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    let allowed = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !allowed || !s.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    s.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Value stored against an operation name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationValue {
    /// Flag operations (`fit-in`, `tile`, `face`, ...)
    Bool(bool),
    /// Free-form argument (`blur:5`, `overlay:<url>:center`, ...)
    Text(String),
    /// `resize` geometry, width first
    NumPair(Number, Number),
    /// `crop` geometry: top, left, bottom, right
    NumQuad(Number, Number, Number, Number),
}

impl OperationValue {
    pub fn text(value: impl Into<String>) -> Self {
        OperationValue::Text(value.into())
    }

    /// Whether the value counts as "empty" when deciding to emit an argument
    ///
    /// `false`, `""` and `"0"` are empty; so is `true`, which marks a bare flag.
    pub fn is_blank(&self) -> bool {
        match self {
            OperationValue::Bool(_) => true,
            OperationValue::Text(text) => text.is_empty() || text == "0",
            OperationValue::NumPair(..) | OperationValue::NumQuad(..) => false,
        }
    }
}

impl fmt::Display for OperationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationValue::Bool(true) => f.write_str("1"),
            OperationValue::Bool(false) => Ok(()),
            OperationValue::Text(text) => f.write_str(text),
            OperationValue::NumPair(a, b) => write!(f, "{},{}", a, b),
            OperationValue::NumQuad(a, b, c, d) => write!(f, "{},{},{},{}", a, b, c, d),
        }
    }
}

impl From<bool> for OperationValue {
    fn from(value: bool) -> Self {
        OperationValue::Bool(value)
    }
}

impl From<&str> for OperationValue {
    fn from(value: &str) -> Self {
        OperationValue::Text(value.to_string())
    }
}

impl From<String> for OperationValue {
    fn from(value: String) -> Self {
        OperationValue::Text(value)
    }
}
