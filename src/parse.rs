use super::*;
use std::cmp::Ordering;

/// A raw attribute or value string read according to a control's category.
///
/// Invalid input is kept as a value (`Number(NaN)`, `Date(None)`) so the
/// validator can decide what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Number(f64),
    /// UTC epoch milliseconds, `None` when the string is not a date.
    Date(Option<i64>),
    Text(String),
}

impl ParsedValue {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Number(value) => !value.is_nan(),
            Self::Date(value) => value.is_some(),
            Self::Text(_) => true,
        }
    }

    /// Ordering of two parsed values of the same kind. Invalid values and
    /// text are unordered, like NaN.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs.partial_cmp(rhs),
            (Self::Date(Some(lhs)), Self::Date(Some(rhs))) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }

    pub fn is_less_than(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    /// The text written back into a control when it is clamped to this value.
    pub fn to_input_value(&self) -> Option<String> {
        match self {
            Self::Number(value) if !value.is_nan() => Some(format_number(*value)),
            Self::Date(Some(timestamp_ms)) => Some(format_date_input(*timestamp_ms)),
            Self::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Absent attributes parse the same way as an empty string.
pub fn parse_value(raw: Option<&str>, category: Category) -> ParsedValue {
    let raw = raw.unwrap_or_default();
    match category {
        Category::Numeric => ParsedValue::Number(parse_number(raw)),
        Category::Date => ParsedValue::Date(parse_date_to_epoch_ms(raw)),
        Category::Other => ParsedValue::Text(raw.to_string()),
    }
}

/// Reads a `maxlength` attribute. Blank, non-numeric and negative values are
/// `None`; blank is never zero.
pub fn parse_maxlength(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_number(raw);
    if parsed.is_nan() || parsed < 0.0 {
        None
    } else {
        Some(parsed)
    }
}
