/// Significant digits used when rendering floating-point results.
pub const DEFAULT_PRECISION: usize = 6;

/// Digits beyond this carry no information for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Format a number in `%g` style with six significant digits.
pub fn format_general(value: f64) -> String {
    format_general_with_precision(value, DEFAULT_PRECISION)
}

/// Format `value` in general notation with `precision` significant digits.
///
/// Fixed notation is used when the decimal exponent is in `-4..precision`,
/// scientific notation otherwise. Trailing zeros are always stripped.
/// `precision` is clamped to `1..=MAX_PRECISION`.
pub fn format_general_with_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let rendered = if value.is_sign_negative() { "-inf" } else { "inf" };
        return rendered.to_string();
    }
    if value == 0.0 {
        let rendered = if value.is_sign_negative() { "-0" } else { "0" };
        return rendered.to_string();
    }

    let precision = precision.clamp(1, MAX_PRECISION);

    // Rounding to `precision` digits first gives the exponent after carry (9.999995 -> 1e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
