//! Parsers from raw environment strings into typed values.
//!
//! Responsibilities:
//! - Convert a raw string into an integer, float, boolean, delimited
//!   list, or JSON value.
//! - Attach the variable name and a fixed reason code to every failure.
//!
//! Does NOT handle:
//! - Environment lookup or defaulting (see env.rs).
//!
//! Invariants:
//! - Parsers are pure: same input, same output, no environment access.
//! - Numeric parsers tolerate surrounding whitespace; the boolean parser
//!   does not.
//! - List parsing never fails; an empty or all-separator input yields an
//!   empty vector.

use serde_json::Value;

use crate::error::{EnvError, Reason};

pub(crate) fn parse_int(key: &str, raw: &str) -> Result<i64, EnvError> {
    raw.trim()
        .parse()
        .map_err(|_| EnvError::new(key, Reason::ExpectedInt))
}

pub(crate) fn parse_float(key: &str, raw: &str) -> Result<f64, EnvError> {
    raw.trim()
        .parse()
        .map_err(|_| EnvError::new(key, Reason::ExpectedFloat))
}

/// Accepts, case-insensitively, "1"/"true"/"yes"/"on" as true and
/// "0"/"false"/"no"/"off" as false.
pub(crate) fn parse_bool(key: &str, raw: &str) -> Result<bool, EnvError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EnvError::new(key, Reason::ExpectedBool)),
    }
}

/// Splits on `sep`, trims each fragment, and drops fragments that are
/// empty after trimming.
pub(crate) fn parse_list(raw: &str, sep: &str) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
        .collect()
}

pub(crate) fn parse_json(key: &str, raw: &str) -> Result<Value, EnvError> {
    serde_json::from_str(raw).map_err(|_| EnvError::new(key, Reason::ExpectedJson))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_int_accepts_surrounding_whitespace() {
        assert_eq!(parse_int("N", "10").unwrap(), 10);
        assert_eq!(parse_int("N", " -3 ").unwrap(), -3);
        assert_eq!(parse_int("N", "+7").unwrap(), 7);
    }

    #[test]
    fn test_parse_int_rejects_non_integers() {
        for raw in ["", "ten", "1.5", "0x10"] {
            let err = parse_int("N", raw).unwrap_err();
            assert_eq!(err.reason, Reason::ExpectedInt);
            assert_eq!(err.key, "N");
        }
    }

    #[test]
    fn test_parse_float_accepts_common_forms() {
        assert_eq!(parse_float("F", "1.5").unwrap(), 1.5);
        assert_eq!(parse_float("F", " 2 ").unwrap(), 2.0);
        assert_eq!(parse_float("F", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        let err = parse_float("F", "fast").unwrap_err();
        assert_eq!(err.reason, Reason::ExpectedFloat);
    }

    #[test]
    fn test_parse_bool_truthy_and_falsy_sets_case_insensitive() {
        for raw in ["1", "true", "TRUE", "Yes", "on", "ON"] {
            assert!(parse_bool("B", raw).unwrap(), "{raw} should be true");
        }
        for raw in ["0", "false", "False", "NO", "off", "OFF"] {
            assert!(!parse_bool("B", raw).unwrap(), "{raw} should be false");
        }
    }

    #[test]
    fn test_parse_bool_rejects_anything_else() {
        for raw in ["", "2", "t", "enabled", " true "] {
            let err = parse_bool("B", raw).unwrap_err();
            assert_eq!(err.reason, Reason::ExpectedBool);
        }
    }

    #[test]
    fn test_parse_list_trims_and_drops_empty_fragments() {
        assert_eq!(parse_list("a, b ,c", ","), vec!["a", "b", "c"]);
        assert_eq!(parse_list("a,,c", ","), vec!["a", "c"]);
        assert_eq!(parse_list("a b; c", ";"), vec!["a b", "c"]);
    }

    #[test]
    fn test_parse_list_empty_input_yields_empty_vec() {
        assert!(parse_list("", ",").is_empty());
        assert!(parse_list(" , , ", ",").is_empty());
    }

    #[test]
    fn test_parse_json_values() {
        assert_eq!(parse_json("J", r#"{"a":1}"#).unwrap(), json!({"a": 1}));
        assert_eq!(parse_json("J", "[1,2]").unwrap(), json!([1, 2]));
        assert_eq!(parse_json("J", "null").unwrap(), Value::Null);
        assert_eq!(parse_json("J", r#""hi""#).unwrap(), json!("hi"));
    }

    #[test]
    fn test_parse_json_rejects_malformed_input() {
        let err = parse_json("J", "not json").unwrap_err();
        assert_eq!(err.reason, Reason::ExpectedJson);
        assert_eq!(err.key, "J");
    }

    proptest! {
        #[test]
        fn prop_int_round_trips(n in any::<i64>()) {
            prop_assert_eq!(parse_int("N", &n.to_string()).unwrap(), n);
        }

        #[test]
        fn prop_float_round_trips(x in any::<f64>().prop_filter("NaN never compares equal", |x| !x.is_nan())) {
            prop_assert_eq!(parse_float("F", &x.to_string()).unwrap(), x);
        }

        #[test]
        fn prop_bool_round_trips(b in any::<bool>()) {
            prop_assert_eq!(parse_bool("B", &b.to_string()).unwrap(), b);
        }
    }
}
