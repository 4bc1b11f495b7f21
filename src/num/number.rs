use std::str::FromStr;

use num_bigint::BigInt;

use crate::types::Scalar;

/// Parse a token already known to match `^-?\d+$`.
///
/// Values outside the `i64` range fall back to [`BigInt`]. `None` means the
/// token could not be represented at all and the caller should keep looking.
pub fn parse_integer(token: &str) -> Option<Scalar> {
    if let Ok(value) = token.parse::<i64>() {
        return Some(Scalar::Integer(value));
    }
    match BigInt::from_str(token) {
        Ok(value) => {
            log::debug!("integer token {token} exceeds i64, using arbitrary precision");
            Some(Scalar::BigInteger(value))
        }
        Err(err) => {
            log::warn!("failed to parse integer token {token}: {err}");
            None
        }
    }
}

/// Parse a token already known to match `^-?\d+\.\d+$`.
pub fn parse_double(token: &str) -> Option<Scalar> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(Scalar::Double(value)),
        Ok(value) => {
            log::warn!("double token {token} is out of range ({value}), keeping it as a string");
            None
        }
        Err(err) => {
            log::warn!("failed to parse double token {token}: {err}");
            None
        }
    }
}

/// Render a double in plain decimal notation with at least one fractional
/// digit, so the output is read back as a double rather than an integer.
/// Non-finite values render as `null`.
pub fn format_double(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0.0".to_string()
        } else {
            "0.0".to_string()
        };
    }
    let mut buffer = ryu::Buffer::new();
    let raw = buffer.format_finite(value);
    let plain = if raw.contains('e') {
        expand_exponent(raw)
    } else {
        raw.to_string()
    };
    ensure_fraction(plain)
}

pub fn format_integer(value: i64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_string()
}

/// Rewrite ryu's `<mantissa>e<exponent>` output as plain decimal digits.
fn expand_exponent(raw: &str) -> String {
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{whole}{fraction}");
    let point = whole.len() as i32 + exponent;

    let mut out = String::with_capacity(digits.len() + point.unsigned_abs() as usize + 3);
    out.push_str(sign);
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else if point as usize >= digits.len() {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', point as usize - digits.len()));
    } else {
        let (int_digits, frac_digits) = digits.split_at(point as usize);
        out.push_str(int_digits);
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

fn ensure_fraction(mut value: String) -> String {
    match value.find('.') {
        Some(dot) => {
            let mut end = value.len();
            while end > dot + 2 && value.as_bytes()[end - 1] == b'0' {
                end -= 1;
            }
            value.truncate(end);
            if value.ends_with('.') {
                value.push('0');
            }
        }
        None => value.push_str(".0"),
    }
    value
}
