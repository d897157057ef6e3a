//! Decimal formatting helpers.
//!
//! Formatting starts from the shortest decimal representation that round-trips
//! the `f64` (Rust's `Display`), then adds trailing zeros until exactly the
//! requested number of fractional digits is present. Only
//! [`round_half_up`] ever reduces precision; formatting never truncates
//! digits.

/// `10^exp` as a float.
pub fn pow10(exp: i32) -> f64 {
    10f64.powi(exp)
}

/// Round to `decimals` places: multiply by `10^decimals`, add 0.5, floor,
/// divide back. Halves round toward positive infinity.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let shift = pow10(decimals_exp(decimals));
    let rounded = (value * shift + 0.5).floor() / shift;
    // Collapse -0.0 so it never formats as "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format `value` with exactly `decimals` fractional digits.
///
/// With `decimals == 0` there is no decimal point at all.
pub fn format_decimal(value: f64, decimals: u32) -> String {
    let mut text = if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    };
    let dot = text.find('.');

    if decimals == 0 {
        if let Some(dot) = dot {
            text.truncate(dot);
        }
        return text;
    }

    let current = match dot {
        Some(dot) => text.len() - dot - 1,
        None => {
            text.push('.');
            0
        }
    };
    let wanted = decimals as usize;
    if current < wanted {
        text.push_str(&"0".repeat(wanted - current));
    }
    text
}

/// Zero-pad a formatted decimal: the integer digits on the left up to
/// `integer_width`, the fractional digits on the right up to
/// `fraction_width`. A leading `-` stays in front. Padding only adds.
///
/// Text without a decimal point gets no fractional part.
pub fn pad_decimal(text: &str, integer_width: usize, fraction_width: usize) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut padded = String::with_capacity(text.len() + integer_width + fraction_width);
    padded.push_str(sign);
    if integer.len() < integer_width {
        padded.push_str(&"0".repeat(integer_width - integer.len()));
    }
    padded.push_str(integer);
    if let Some(fraction) = fraction {
        padded.push('.');
        padded.push_str(fraction);
        if fraction.len() < fraction_width {
            padded.push_str(&"0".repeat(fraction_width - fraction.len()));
        }
    }
    padded
}

fn decimals_exp(decimals: u32) -> i32 {
    i32::try_from(decimals).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_rounds_halves_upward() {
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-2.5, 0), -2.0);
        assert_eq!(round_half_up(0.125, 2), 0.13);
    }

    #[test]
    fn negative_zero_is_collapsed() {
        assert_eq!(format_decimal(round_half_up(-0.0001, 2), 2), "0.00");
    }

    #[test]
    fn format_adds_trailing_zeros() {
        assert_eq!(format_decimal(24.1, 3), "24.100");
        assert_eq!(format_decimal(24.0, 2), "24.00");
        assert_eq!(format_decimal(24.0, 0), "24");
    }

    #[test]
    fn pad_keeps_sign_in_front() {
        assert_eq!(pad_decimal("-24.163", 4, 4), "-0024.1630");
        assert_eq!(pad_decimal("0", 2, 3), "00");
    }
}
