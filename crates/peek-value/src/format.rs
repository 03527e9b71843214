//! Canonical scalar formatting.
//!
//! Renders a terminal value to a locale-independent string. Composite
//! values get a non-recursive fallback rendering: an identity-based
//! `<type> 0x<hex>` for reference-bearing kinds, `<type> value` for the
//! rest.

use crate::Value;

/// Format a value without inspecting its internal structure.
///
/// Numeric renderings are exact and round-trippable: decimal for
/// integers, shortest scientific notation for floats. Text is quoted
/// with escape sequences for control characters.
pub fn format_scalar(v: &Value) -> String {
    match v {
        Value::Invalid => "invalid".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::I8(n) => n.to_string(),
        Value::I16(n) => n.to_string(),
        Value::I32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        Value::U8(n) => n.to_string(),
        Value::U16(n) => n.to_string(),
        Value::U32(n) => n.to_string(),
        Value::U64(n) => n.to_string(),
        Value::F32(x) => format!("{x:E}"),
        Value::F64(x) => format!("{x:E}"),
        Value::C32(c) => {
            format_complex(format!("{:E}", c.re), c.im > 0.0, format!("{:E}", c.im.abs()))
        }
        Value::C64(c) => {
            format_complex(format!("{:E}", c.re), c.im > 0.0, format!("{:E}", c.im.abs()))
        }
        Value::Str(s) => format!("{s:?}"),
        Value::RawPtr(addr) => format!("{} 0x{addr:016x}", v.type_name()),
        Value::Channel { .. }
        | Value::Func { .. }
        | Value::Ptr { .. }
        | Value::Seq(_)
        | Value::Map(_) => {
            // Identity-based rendering: the node's own address stands in
            // for the handle it represents.
            format!("{} 0x{:x}", v.type_name(), v as *const Value as usize)
        }
        Value::Struct(_) | Value::Any(_) => format!("{} value", v.type_name()),
    }
}

/// `(re)` followed by a sign-correct `+i(|im|)` / `-i(|im|)` wrapper.
fn format_complex(re: String, im_positive: bool, im_magnitude: String) -> String {
    let sign = if im_positive { '+' } else { '-' };
    format!("({re}){sign}i({im_magnitude})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complex32, Complex64, MapValue, StructValue};

    #[test]
    fn test_integer_round_trip_at_boundaries() {
        for n in [0i64, -1, i64::MIN, i64::MAX] {
            let s = format_scalar(&Value::I64(n));
            assert_eq!(s.parse::<i64>().unwrap(), n);
        }
        for n in [0u64, u64::MAX] {
            let s = format_scalar(&Value::U64(n));
            assert_eq!(s.parse::<u64>().unwrap(), n);
        }
        for n in [i8::MIN, -1, 0, i8::MAX] {
            let s = format_scalar(&Value::I8(n));
            assert_eq!(s.parse::<i8>().unwrap(), n);
        }
    }

    #[test]
    fn test_float_scientific_round_trip() {
        for x in [0.0f64, -1.5, 3.14159, f64::MAX, f64::MIN_POSITIVE] {
            let s = format_scalar(&Value::F64(x));
            assert!(s.contains('E'), "not scientific: {s}");
            assert_eq!(s.parse::<f64>().unwrap(), x);
        }
        for x in [0.25f32, -3.0e30, f32::MAX] {
            let s = format_scalar(&Value::F32(x));
            assert_eq!(s.parse::<f32>().unwrap(), x);
        }
    }

    #[test]
    fn test_bool_literals_round_trip() {
        for b in [true, false] {
            let s = format_scalar(&Value::Bool(b));
            assert_eq!(s.parse::<bool>().unwrap(), b);
        }
        assert_eq!(format_scalar(&Value::Bool(true)), "true");
        assert_eq!(format_scalar(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_complex_sign_rule() {
        let pos = format_scalar(&Value::C64(Complex64::new(10.0, 4.0)));
        assert_eq!(pos, "(1E1)+i(4E0)");
        let neg = format_scalar(&Value::C64(Complex64::new(10.0, -4.0)));
        assert_eq!(neg, "(1E1)-i(4E0)");
        let narrow = format_scalar(&Value::C32(Complex32::new(1.5, -0.5)));
        assert!(narrow.contains("-i(5E-1)"), "got {narrow}");
    }

    #[test]
    fn test_string_quoting_and_escapes() {
        assert_eq!(format_scalar(&Value::from("hi")), "\"hi\"");
        let s = format_scalar(&Value::from("a\nb\"c"));
        assert_eq!(s, "\"a\\nb\\\"c\"");
    }

    #[test]
    fn test_invalid_marker() {
        assert_eq!(format_scalar(&Value::Invalid), "invalid");
    }

    #[test]
    fn test_rawptr_fixed_width_hex() {
        let s = format_scalar(&Value::RawPtr(0xdead_beef));
        assert_eq!(s, "rawptr 0x00000000deadbeef");
    }

    #[test]
    fn test_reference_fallback_is_identity_based() {
        let p = Value::nil_ptr("i64");
        let s = format_scalar(&p);
        assert!(s.starts_with("*i64 0x"), "got {s}");
        // Same node renders the same identity twice.
        assert_eq!(s, format_scalar(&p));
    }

    #[test]
    fn test_aggregate_fallback() {
        let sv = Value::Struct(StructValue::new("Point", vec![]));
        assert_eq!(format_scalar(&sv), "Point value");
        assert_eq!(format_scalar(&Value::nil_any()), "any value");
        let m = Value::Map(MapValue::new("string", "i64", vec![]));
        assert!(format_scalar(&m).starts_with("map[string]i64 0x"));
    }
}
