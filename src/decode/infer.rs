use std::sync::LazyLock;

use regex::Regex;

use crate::constants::NULL_LITERAL;
use crate::num::number::{parse_double, parse_integer};
use crate::types::Scalar;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("invalid integer pattern"));

static DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").expect("invalid double pattern"));

static BOOLEAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(true|false)$").expect("invalid boolean pattern"));

/// Classify an unquoted token. Rules are tried in order: integer, double,
/// boolean, null. Anything else, including numbers that fail to convert, is
/// kept as the original string.
pub fn infer_scalar(token: &str) -> Scalar {
    if INTEGER.is_match(token) {
        if let Some(scalar) = parse_integer(token) {
            return scalar;
        }
    }
    if DOUBLE.is_match(token) {
        if let Some(scalar) = parse_double(token) {
            return scalar;
        }
    }
    if BOOLEAN.is_match(token) {
        return Scalar::Boolean(token.eq_ignore_ascii_case("true"));
    }
    if token.eq_ignore_ascii_case(NULL_LITERAL) {
        return Scalar::Null;
    }
    Scalar::String(token.to_string())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use num_bigint::BigInt;

    use super::*;

    #[rstest::rstest]
    #[case("42", Scalar::Integer(42))]
    #[case("-17", Scalar::Integer(-17))]
    #[case("007", Scalar::Integer(7))]
    #[case("42.5", Scalar::Double(42.5))]
    #[case("-0.25", Scalar::Double(-0.25))]
    #[case("true", Scalar::Boolean(true))]
    #[case("TRUE", Scalar::Boolean(true))]
    #[case("False", Scalar::Boolean(false))]
    #[case("null", Scalar::Null)]
    #[case("NULL", Scalar::Null)]
    #[case("42x", Scalar::from("42x"))]
    #[case("1e5", Scalar::from("1e5"))]
    #[case(".5", Scalar::from(".5"))]
    #[case("5.", Scalar::from("5."))]
    #[case("+5", Scalar::from("+5"))]
    #[case("truey", Scalar::from("truey"))]
    #[case("nil", Scalar::from("nil"))]
    fn test_infer_scalar(#[case] token: &str, #[case] expected: Scalar) {
        assert_eq!(infer_scalar(token), expected);
    }

    #[rstest::rstest]
    fn test_integer_overflow_falls_back_to_big_integer() {
        let token = "123456789012345678901234567890";
        assert_eq!(
            infer_scalar(token),
            Scalar::BigInteger(BigInt::from_str(token).unwrap())
        );
    }

    #[rstest::rstest]
    fn test_out_of_range_double_degrades_to_string() {
        let token = format!("1{}.5", "0".repeat(400));
        assert_eq!(infer_scalar(&token), Scalar::String(token.clone()));
    }
}
