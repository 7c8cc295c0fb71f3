//! Number parsing and printing with the same text forms a browser uses for
//! numeric input values.

const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Parses `src` like `Number(src)` does, except that an empty or
/// whitespace-only string is NaN rather than zero.
pub fn parse_number(src: &str) -> f64 {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    if trimmed == "Infinity" || trimmed == "+Infinity" {
        return f64::INFINITY;
    }
    if trimmed == "-Infinity" {
        return f64::NEG_INFINITY;
    }

    if trimmed.starts_with('+') || trimmed.starts_with('-') {
        let rest = &trimmed[1..];
        if has_radix_prefix(rest) {
            return f64::NAN;
        }
    }

    if let Some(digits) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return parse_prefixed_radix(digits, 16);
    }
    if let Some(digits) = trimmed
        .strip_prefix("0o")
        .or_else(|| trimmed.strip_prefix("0O"))
    {
        return parse_prefixed_radix(digits, 8);
    }
    if let Some(digits) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        return parse_prefixed_radix(digits, 2);
    }

    // `str::parse::<f64>` also takes "inf", "nan" and friends.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn has_radix_prefix(src: &str) -> bool {
    ["0x", "0X", "0o", "0O", "0b", "0B"]
        .iter()
        .any(|prefix| src.starts_with(prefix))
}

fn parse_prefixed_radix(src: &str, radix: u32) -> f64 {
    if src.is_empty() {
        return f64::NAN;
    }
    let mut out = 0.0f64;
    for ch in src.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        out = out * (radix as f64) + (digit as f64);
    }
    out
}

/// Prints `value` the way `String(value)` would.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exact integers print without a fraction.
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        return (value as i64).to_string();
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        return normalize_exponential(format!("{value:e}"));
    }
    format!("{value}")
}

fn normalize_exponential(raw: String) -> String {
    let Some(exp_idx) = raw.find('e') else {
        return raw;
    };
    let mantissa = &raw[..exp_idx];
    let exponent = raw[exp_idx + 1..].parse::<i32>().unwrap_or(0);
    format!("{mantissa}e{exponent:+}")
}
