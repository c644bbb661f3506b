use serde::Serialize;

use crate::{prelude::*, quantity::energy::KilowattHours};

/// Monthly consumption in whole kilowatt-hours, never negative.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[must_use]
pub struct UsageInput(u64);

impl UsageInput {
    pub const ZERO: Self = Self(0);

    /// Parse the raw user input like an integer form field does.
    ///
    /// Leading whitespace and an optional sign are accepted, then the longest run of digits is
    /// taken and the rest is ignored. No digits or a negative value result in zero.
    /// Values beyond `u64` saturate.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (is_negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .map_or(unsigned, |end| &unsigned[..end]);

        if digits.is_empty() {
            if !trimmed.is_empty() {
                warn!(raw, "usage is not a number, assuming zero");
            }
            return Self::ZERO;
        }

        let value = digits.bytes().fold(0_u64, |value, digit| {
            value.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        });
        if is_negative && value != 0 {
            warn!(raw, "usage is negative, assuming zero");
            return Self::ZERO;
        }
        Self(value)
    }

    /// Non-finite and negative values become zero, fractions are dropped.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            Self(value.trunc() as u64)
        } else {
            warn!(value, "usage is negative or not finite, assuming zero");
            Self::ZERO
        }
    }

    /// Negative values become zero.
    pub fn from_signed(value: i64) -> Self {
        u64::try_from(value).map_or_else(
            |_| {
                warn!(value, "usage is negative, assuming zero");
                Self::ZERO
            },
            Self,
        )
    }

    pub fn energy(self) -> KilowattHours {
        #[expect(clippy::cast_precision_loss)]
        KilowattHours(self.0 as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(UsageInput::parse("300"), UsageInput(300));
        assert_eq!(UsageInput::parse("0"), UsageInput::ZERO);
        assert_eq!(UsageInput::parse("+42"), UsageInput(42));
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(UsageInput::parse("  12abc"), UsageInput(12));
        assert_eq!(UsageInput::parse("3.7"), UsageInput(3));
        assert_eq!(UsageInput::parse("1e3"), UsageInput(1));
        assert_eq!(UsageInput::parse("250 kWh"), UsageInput(250));
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(UsageInput::parse(""), UsageInput::ZERO);
        assert_eq!(UsageInput::parse("   "), UsageInput::ZERO);
        assert_eq!(UsageInput::parse("abc"), UsageInput::ZERO);
        assert_eq!(UsageInput::parse("-"), UsageInput::ZERO);
        assert_eq!(UsageInput::parse("NaN"), UsageInput::ZERO);
    }

    #[test]
    fn test_parse_negative_is_zero() {
        assert_eq!(UsageInput::parse("-5"), UsageInput::ZERO);
        assert_eq!(UsageInput::parse("-0"), UsageInput::ZERO);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(UsageInput::parse("99999999999999999999999"), UsageInput(u64::MAX));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(UsageInput::from_f64(300.0), UsageInput(300));
        assert_eq!(UsageInput::from_f64(3.7), UsageInput(3));
        assert_eq!(UsageInput::from_f64(-5.0), UsageInput::ZERO);
        assert_eq!(UsageInput::from_f64(f64::NAN), UsageInput::ZERO);
        assert_eq!(UsageInput::from_f64(f64::INFINITY), UsageInput::ZERO);
        assert_eq!(UsageInput::from_f64(f64::NEG_INFINITY), UsageInput::ZERO);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(UsageInput::from_signed(300), UsageInput(300));
        assert_eq!(UsageInput::from_signed(-5), UsageInput::ZERO);
    }

    #[test]
    fn test_energy() {
        assert_eq!(UsageInput(300).energy(), KilowattHours(300.0));
    }
}
