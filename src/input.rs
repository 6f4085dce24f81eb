//! Untyped input handling.
//!
//! Conversion functions accept anything that can be turned into a
//! [`RawInput`], so callers holding loosely typed data (JSON values,
//! optional strings) get the same validation as callers holding `&str`.

use crate::error::{InputKind, InvalidInputError};
use serde_json::Value;

/// A borrowed input value of unconstrained type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    Absent,
    Text(&'a str),
    Number,
    Boolean,
    Object,
    Array,
}

impl RawInput<'_> {
    pub fn kind(&self) -> InputKind {
        match self {
            RawInput::Absent => InputKind::Absent,
            RawInput::Text(_) => InputKind::Text,
            RawInput::Number => InputKind::Number,
            RawInput::Boolean => InputKind::Boolean,
            RawInput::Object => InputKind::Object,
            RawInput::Array => InputKind::Array,
        }
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(s: &'a str) -> Self {
        RawInput::Text(s)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(s: &'a String) -> Self {
        RawInput::Text(s.as_str())
    }
}

impl<'a, T: Into<RawInput<'a>>> From<Option<T>> for RawInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}

impl From<bool> for RawInput<'_> {
    fn from(_: bool) -> Self {
        RawInput::Boolean
    }
}

macro_rules! number_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawInput<'_> {
                fn from(_: $ty) -> Self {
                    RawInput::Number
                }
            }
        )*
    };
}

number_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<'a> From<&'a Value> for RawInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => RawInput::Absent,
            Value::String(s) => RawInput::Text(s),
            Value::Number(_) => RawInput::Number,
            Value::Bool(_) => RawInput::Boolean,
            Value::Object(_) => RawInput::Object,
            Value::Array(_) => RawInput::Array,
        }
    }
}

/// Accept text, reject everything else. The string is returned untouched.
pub fn validate(input: RawInput<'_>) -> Result<&str, InvalidInputError> {
    match input {
        RawInput::Text(s) => Ok(s),
        other => {
            tracing::debug!(received = %other.kind(), "rejecting non-string input");
            Err(InvalidInputError::new(other.kind()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_passes_unchanged() {
        assert_eq!(validate("  padded  ".into()), Ok("  padded  "));
        assert_eq!(validate("".into()), Ok(""));

        let owned = String::from("owned");
        assert_eq!(validate((&owned).into()), Ok("owned"));
        assert_eq!(validate(Some("some").into()), Ok("some"));
    }

    #[test]
    fn test_absent_is_rejected() {
        let err = validate(None::<&str>.into()).unwrap_err();
        assert_eq!(err.received(), InputKind::Absent);

        let null = json!(null);
        assert!(validate((&null).into()).is_err());
    }

    #[test]
    fn test_non_text_is_rejected() {
        assert_eq!(
            validate(42_i32.into()).unwrap_err().received(),
            InputKind::Number
        );
        assert_eq!(
            validate(1.5_f64.into()).unwrap_err().received(),
            InputKind::Number
        );
        assert_eq!(
            validate(true.into()).unwrap_err().received(),
            InputKind::Boolean
        );

        let object = json!({});
        let array = json!([]);
        assert_eq!(
            validate((&object).into()).unwrap_err().received(),
            InputKind::Object
        );
        assert_eq!(
            validate((&array).into()).unwrap_err().received(),
            InputKind::Array
        );
    }

    #[test]
    fn test_json_string() {
        let value = json!("user_id");
        assert_eq!(validate((&value).into()), Ok("user_id"));
    }
}
