use crate::errors::{ListItemError, Result};

/// Returns `true` if `value` represents a finite number.
///
/// Surrounding whitespace is ignored. Integers, decimals, signs, exponents
/// and unsigned `0x`/`0o`/`0b` literals are accepted; empty strings, `NaN`
/// and infinities are not.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Parses `value` as a finite number using the grammar `is_numeric` accepts.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    let number = match radix {
        Some(radix) => {
            let digits = &trimmed[2..];
            // from_str_radix tolerates a sign, which prefixed literals do not allow
            if digits.starts_with(&['+', '-'][..]) {
                return None;
            }
            u128::from_str_radix(digits, radix).ok()? as f64
        }
        None => trimmed.parse::<f64>().ok()?,
    };
    number.is_finite().then_some(number)
}

/// Conversion of a caller-supplied nesting level into an integer level.
///
/// Fractional values are truncated toward zero. Integers outside the `i64`
/// range saturate.
pub trait IntoLevel {
    fn into_level(self) -> Result<i64>;
}

fn invalid_level(value: impl ToString) -> ListItemError {
    ListItemError::InvalidArgument {
        message: "list-item level must be a number".to_string(),
        value: value.to_string(),
    }
}

macro_rules! lossless_level {
    ($($t:ty),*) => {
        $(
            impl IntoLevel for $t {
                fn into_level(self) -> Result<i64> {
                    Ok(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! saturating_level {
    ($($t:ty),*) => {
        $(
            impl IntoLevel for $t {
                #[allow(unused_comparisons)]
                fn into_level(self) -> Result<i64> {
                    Ok(i64::try_from(self).unwrap_or(if self < 0 { i64::MIN } else { i64::MAX }))
                }
            }
        )*
    };
}

lossless_level!(i8, i16, i32, i64, u8, u16, u32);
saturating_level!(isize, i128, u64, usize, u128);

impl IntoLevel for f64 {
    fn into_level(self) -> Result<i64> {
        if !self.is_finite() {
            return Err(invalid_level(self));
        }
        Ok(self.trunc() as i64)
    }
}

impl IntoLevel for f32 {
    fn into_level(self) -> Result<i64> {
        f64::from(self).into_level()
    }
}

impl IntoLevel for &str {
    fn into_level(self) -> Result<i64> {
        parse_number(self)
            .ok_or_else(|| invalid_level(self))?
            .into_level()
    }
}

impl IntoLevel for &String {
    fn into_level(self) -> Result<i64> {
        self.as_str().into_level()
    }
}

impl IntoLevel for String {
    fn into_level(self) -> Result<i64> {
        self.as_str().into_level()
    }
}
