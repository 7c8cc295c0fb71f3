use super::*;

/// Whether `parsed` is the kind of value a `category` bound must be.
///
/// `Other` controls never have range bounds, so nothing qualifies.
pub fn is_expected_type(parsed: &ParsedValue, category: Category) -> bool {
    match (category, parsed) {
        (Category::Numeric, ParsedValue::Number(value)) => !value.is_nan(),
        (Category::Date, ParsedValue::Date(value)) => value.is_some(),
        _ => false,
    }
}

/// `min <= max`, or one of them is not a usable bound. A broken bound never
/// blocks clamping against the other one.
pub fn order_consistent(min: &ParsedValue, max: &ParsedValue, category: Category) -> bool {
    if !is_expected_type(min, category) || !is_expected_type(max, category) {
        return true;
    }
    !min.is_greater_than(max)
}

/// Gate for the range clamper: the bound that just changed must be valid and
/// the pair must be order-consistent.
pub fn is_usable(
    changed: &ParsedValue,
    min: &ParsedValue,
    max: &ParsedValue,
    category: Category,
) -> bool {
    is_expected_type(changed, category) && order_consistent(min, max, category)
}
