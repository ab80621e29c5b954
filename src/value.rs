//! Value Coercion Module
//!
//! Best-effort numeric coercion for score, weight and percent cells.
//! The exports this crate reads come from hand-maintained spreadsheets:
//! decimal commas, percent signs and stray whitespace are all expected.

/// Outcome of coercing one cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Coerced {
    /// Cell was empty (or whitespace only).
    Empty,

    /// Cell parsed as a number after cleanup.
    Number(f64),

    /// Cell was non-empty but not numeric.
    Invalid,
}

impl Coerced {
    /// Lenient view: empty and invalid cells both degrade to 0.
    pub fn or_zero(&self) -> f64 {
        match self {
            Coerced::Number(n) => *n,
            Coerced::Empty | Coerced::Invalid => 0.0,
        }
    }
}

/// Coerce a raw cell into a number.
///
/// Cleanup applied before parsing: surrounding whitespace is trimmed, a
/// trailing percent sign is stripped, and a decimal comma is treated as a
/// decimal point.
pub(crate) fn coerce_decimal(cell: &str) -> Coerced {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Coerced::Empty;
    }

    let cleaned = trimmed.trim_end_matches('%').trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(n) => Coerced::Number(n),
        Err(_) => Coerced::Invalid,
    }
}

/// Parse a display percentage ("84.1%", "84,1 %") for ranking purposes.
/// Anything unparsable ranks as 0.
pub(crate) fn percent_value(display: &str) -> f64 {
    coerce_decimal(display).or_zero()
}
