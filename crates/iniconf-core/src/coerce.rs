//! Primitive coercion for stored string values
//!
//! Every value in a config is stored as a string. The typed getters on
//! [`Config`](crate::Config), [`Section`](crate::Section), and
//! [`FlatMap`](crate::FlatMap) run the stored string through [`Coerce`]
//! and fall back to the caller-supplied default when coercion returns
//! `None`. Coercion never fails loudly.
//!
//! Narrower integer widths parse through the widest native type (`i64`,
//! `u64`) and truncate with `as`. There is no overflow detection: reading
//! `"300"` as a `u8` yields `44`, not an error.

/// Best-effort conversion of a stored string into a primitive type.
pub trait Coerce: Sized {
    /// Parse `raw` into `Self`, or `None` if the value does not fit the
    /// type's grammar.
    fn coerce(raw: &str) -> Option<Self>;
}

impl Coerce for String {
    fn coerce(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Boolean grammar: case-insensitive `"true"` / `"false"`, nothing else.
impl Coerce for bool {
    fn coerce(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl Coerce for i64 {
    fn coerce(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl Coerce for i32 {
    fn coerce(raw: &str) -> Option<Self> {
        i64::coerce(raw).map(|n| n as i32)
    }
}

impl Coerce for i16 {
    fn coerce(raw: &str) -> Option<Self> {
        i64::coerce(raw).map(|n| n as i16)
    }
}

impl Coerce for i8 {
    fn coerce(raw: &str) -> Option<Self> {
        i64::coerce(raw).map(|n| n as i8)
    }
}

impl Coerce for u64 {
    fn coerce(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl Coerce for u32 {
    fn coerce(raw: &str) -> Option<Self> {
        u64::coerce(raw).map(|n| n as u32)
    }
}

impl Coerce for u16 {
    fn coerce(raw: &str) -> Option<Self> {
        u64::coerce(raw).map(|n| n as u16)
    }
}

impl Coerce for u8 {
    fn coerce(raw: &str) -> Option<Self> {
        u64::coerce(raw).map(|n| n as u8)
    }
}

impl Coerce for f64 {
    fn coerce(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl Coerce for f32 {
    fn coerce(raw: &str) -> Option<Self> {
        f64::coerce(raw).map(|f| f as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(i64::coerce("42"), Some(42));
        assert_eq!(i64::coerce("-7"), Some(-7));
        assert_eq!(u64::coerce("42"), Some(42));
        assert_eq!(i64::coerce("not a number"), None);
        assert_eq!(i64::coerce("4.2"), None);
    }

    #[test]
    fn test_negative_into_unsigned_fails() {
        assert_eq!(u64::coerce("-1"), None);
        assert_eq!(u8::coerce("-1"), None);
    }

    #[test]
    fn test_narrowing_truncates_without_overflow_check() {
        // 300 does not fit a u8; the wide parse succeeds and the cast
        // wraps. 300 = 0x12C, so the low byte is 0x2C = 44.
        assert_eq!(u8::coerce("300"), Some(44));
        assert_eq!(i8::coerce("300"), Some(44));
        assert_eq!(i8::coerce("128"), Some(-128));
        assert_eq!(u16::coerce("65536"), Some(0));
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(f64::coerce("2.5"), Some(2.5));
        assert_eq!(f64::coerce("3"), Some(3.0));
        assert_eq!(f32::coerce("2.5"), Some(2.5));
        assert_eq!(f64::coerce("two"), None);
    }

    #[test]
    fn test_bool_grammar() {
        assert_eq!(bool::coerce("true"), Some(true));
        assert_eq!(bool::coerce("TRUE"), Some(true));
        assert_eq!(bool::coerce("False"), Some(false));
        assert_eq!(bool::coerce("yes"), None);
        assert_eq!(bool::coerce("1"), None);
        assert_eq!(bool::coerce(""), None);
    }

    #[test]
    fn test_string_coercion_is_identity() {
        assert_eq!(String::coerce("anything at all"), Some("anything at all".into()));
    }
}
