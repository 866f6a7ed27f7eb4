//! Fixed-precision decimal arithmetic for conversions.
//!
//! Values are arbitrary-precision [`BigDecimal`]s. Parsing is exact; every
//! arithmetic result is rounded to [`WORKING_PRECISION`] significant digits,
//! half away from zero, so the whole conversion pipeline shares one
//! precision and rounding rule. No step touches binary floating point.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ConversionError;

/// Significant digits kept after every arithmetic step.
pub const WORKING_PRECISION: u32 = 18;

/// Largest decimal exponent (in either direction) a value may carry.
/// Anything further out is reported as [`ConversionError::Overflow`].
pub const EXPONENT_LIMIT: i64 = 9_999;

const PRECISION: NonZeroU64 = NonZeroU64::MIN.saturating_add(WORKING_PRECISION as u64 - 1);

const ROUNDING: RoundingMode = RoundingMode::HalfUp;

/// An exact decimal. Arithmetic results carry at most
/// [`WORKING_PRECISION`] significant digits.
///
/// Equality is numeric: `1.50` and `1.5` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DecimalValue(BigDecimal);

impl DecimalValue {
    #[must_use]
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self(BigDecimal::one())
    }

    /// Parse a signed decimal numeral, optionally with an exponent.
    ///
    /// Accepts `12`, `-12.5`, `+.5`, `5.`, `1e3`, `2.5E-4`. Rejects the empty
    /// string, a lone sign or point, embedded whitespace, and anything else
    /// that is not a numeral. The value is kept exactly as written.
    ///
    /// # Errors
    /// Returns [`ConversionError::Parse`] for malformed text and
    /// [`ConversionError::Overflow`] when the exponent is beyond
    /// [`EXPONENT_LIMIT`].
    pub fn parse(text: &str) -> Result<Self, ConversionError> {
        let invalid = || ConversionError::Parse {
            input: text.to_string(),
        };

        let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&text[..at], Some(&text[at + 1..])),
            None => (text, None),
        };

        let (negative, unsigned) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (integral, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integral) || !all_digits(fraction) {
            return Err(invalid());
        }
        if integral.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let exponent = match exponent {
            None => 0,
            Some(exp) => parse_exponent(exp).ok_or_else(invalid)?,
        };

        let integral = if integral.is_empty() { "0" } else { integral };
        let sign = if negative { "-" } else { "" };
        let canonical = format!("{sign}{integral}.{fraction}0e{exponent}");

        let value = BigDecimal::from_str(&canonical).map_err(|_| invalid())?;
        Self::checked(value)
    }

    /// `self + rhs` at working precision.
    ///
    /// # Errors
    /// Returns [`ConversionError::Overflow`] when the sum is out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Self) -> Result<Self, ConversionError> {
        Self::rounded(&self.0 + &rhs.0)
    }

    /// `self - rhs` at working precision.
    ///
    /// # Errors
    /// Returns [`ConversionError::Overflow`] when the difference is out of range.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, ConversionError> {
        Self::rounded(&self.0 - &rhs.0)
    }

    /// `self × rhs` at working precision.
    ///
    /// # Errors
    /// Returns [`ConversionError::Overflow`] when the product is out of range.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, ConversionError> {
        Self::rounded(&self.0 * &rhs.0)
    }

    /// `self ÷ rhs` at working precision.
    ///
    /// # Errors
    /// Returns [`ConversionError::DivisionByZero`] when `rhs` is zero and
    /// [`ConversionError::Overflow`] when the quotient is out of range.
    pub fn divide(&self, rhs: &Self) -> Result<Self, ConversionError> {
        if rhs.is_zero() {
            return Err(ConversionError::DivisionByZero);
        }
        Self::rounded(&self.0 / &rhs.0)
    }

    /// True if the value is zero (of either sign).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The backing decimal.
    #[must_use]
    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Canonical text: plain notation, no trailing fractional zeros, no
    /// trailing point, and `0` for negative zero.
    #[must_use]
    pub fn to_normalized_string(&self) -> String {
        if self.0.is_zero() {
            return "0".to_string();
        }
        let (digits, scale) = self.0.normalized().as_bigint_and_exponent();
        let text = digits.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };

        if scale <= 0 {
            let zeros = usize::try_from(-scale).unwrap_or(0);
            return format!("{sign}{digits}{}", "0".repeat(zeros));
        }
        let scale = usize::try_from(scale).unwrap_or(0);
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            format!("{sign}{int}.{frac}")
        } else {
            format!("{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }

    fn rounded(value: BigDecimal) -> Result<Self, ConversionError> {
        Self::checked(value.with_precision_round(PRECISION, ROUNDING))
    }

    fn checked(value: BigDecimal) -> Result<Self, ConversionError> {
        if value.is_zero() {
            return Ok(Self::zero());
        }
        let (digits, scale) = value.as_bigint_and_exponent();
        let len = i64::try_from(digits.to_string().trim_start_matches('-').len())
            .map_err(|_| ConversionError::Overflow)?;
        // Exponent of the leading digit.
        let adjusted = len - 1 - scale;
        if adjusted.abs() > EXPONENT_LIMIT {
            return Err(ConversionError::Overflow);
        }
        Ok(Self(value))
    }
}

/// Exponent digits with an optional sign. `None` when malformed.
fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Clamp absurd exponents; the range check reports them as overflow.
    let magnitude: i64 = digits.parse().unwrap_or(i64::from(u32::MAX));
    let magnitude = magnitude.min(i64::from(u32::MAX));
    Some(if text.starts_with('-') {
        -magnitude
    } else {
        magnitude
    })
}

/// Exact conversion from the fixed-scale constants used in unit tables.
impl From<Decimal> for DecimalValue {
    fn from(value: Decimal) -> Self {
        Self(BigDecimal::new(
            BigInt::from(value.mantissa()),
            i64::from(value.scale()),
        ))
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl FromStr for DecimalValue {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_normalized_string())
    }
}

impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_normalized_string())
    }
}

/// Accepts numerals as strings or integers. Floats are refused so no value
/// passes through binary floating point on its way in.
impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = DecimalValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal numeral as a string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        DecimalValue::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DecimalValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DecimalValue(BigDecimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::custom(format!(
            "floating-point number {v} is not accepted; quote it as a string"
        )))
    }
}
