use std::fmt::{Display, Formatter};

use enumset::EnumSet;
use serde::Serialize;

use crate::{prelude::*, quantity::price::YenPerKilowattHour};

/// Promotional per-kWh discount, selected by the meter reading month.
///
/// There is no calendar logic behind it: the period is just a label picked by the user.
#[derive(Debug, Default, Serialize, enumset::EnumSetType)]
#[must_use]
pub enum DiscountPeriod {
    #[default]
    #[serde(rename = "none")]
    None,

    /// August 2025 meter reading.
    #[serde(rename = "aug")]
    AugustReading,

    /// September 2025 meter reading.
    #[serde(rename = "sep")]
    SeptemberReading,
}

impl DiscountPeriod {
    /// Resolve the selector key, unknown keys fall back to [`DiscountPeriod::None`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "none" => Self::None,
            "aug" => Self::AugustReading,
            "sep" => Self::SeptemberReading,
            _ => {
                warn!(key, "unknown discount key, assuming none");
                Self::None
            }
        }
    }

    #[must_use]
    pub fn all() -> EnumSet<Self> {
        EnumSet::all()
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AugustReading => "aug",
            Self::SeptemberReading => "sep",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "なし",
            Self::AugustReading => "2025年8月検針分 ― 2円/kWh 値引",
            Self::SeptemberReading => "2025年9月検針分 ― 2.4円/kWh 値引",
        }
    }

    pub const fn rate(self) -> YenPerKilowattHour {
        match self {
            Self::None => YenPerKilowattHour::ZERO,
            Self::AugustReading => YenPerKilowattHour(2.0),
            Self::SeptemberReading => YenPerKilowattHour(2.4),
        }
    }
}

impl Display for DiscountPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(DiscountPeriod::from_key("none"), DiscountPeriod::None);
        assert_eq!(DiscountPeriod::from_key("aug"), DiscountPeriod::AugustReading);
        assert_eq!(DiscountPeriod::from_key("sep"), DiscountPeriod::SeptemberReading);
    }

    #[test]
    fn test_from_unknown_key() {
        assert_eq!(DiscountPeriod::from_key("unknown"), DiscountPeriod::None);
        assert_eq!(DiscountPeriod::from_key(""), DiscountPeriod::None);
        assert_eq!(DiscountPeriod::from_key("AUG"), DiscountPeriod::None);
    }

    #[test]
    fn test_key_round_trips() {
        for period in DiscountPeriod::all() {
            assert_eq!(DiscountPeriod::from_key(period.key()), period);
        }
    }

    #[test]
    fn test_all_in_selector_order() {
        assert_eq!(
            DiscountPeriod::all().iter().collect_vec(),
            [
                DiscountPeriod::None,
                DiscountPeriod::AugustReading,
                DiscountPeriod::SeptemberReading,
            ],
        );
    }

    #[test]
    fn test_rates() {
        assert_eq!(DiscountPeriod::None.rate(), YenPerKilowattHour::ZERO);
        assert_eq!(DiscountPeriod::AugustReading.rate(), YenPerKilowattHour(2.0));
        assert_eq!(DiscountPeriod::SeptemberReading.rate(), YenPerKilowattHour(2.4));
    }

    #[test]
    fn test_serialize_as_key() {
        assert_eq!(serde_json::to_string(&DiscountPeriod::AugustReading).unwrap(), r#""aug""#);
    }
}
