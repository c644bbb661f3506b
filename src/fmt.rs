use std::fmt::{Debug, Display, Formatter, Write};

use crate::quantity::{currency::Yen, price::YenPerKilowattHour};

/// Whole yen with comma thousands grouping: `9,174 円`.
#[derive(Copy, Clone)]
pub struct FormattedYen(pub i128);

impl From<Yen> for FormattedYen {
    fn from(yen: Yen) -> Self {
        Self(yen.round_to_whole())
    }
}

impl Display for FormattedYen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            f.write_char('-')?;
        }
        let digits = self.0.unsigned_abs().to_string();
        for (i, digit) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(digit)?;
        }
        f.write_str(" 円")
    }
}

impl Debug for FormattedYen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Per-kWh rate in its shortest form: `25.3 円`, `2 円`.
#[derive(Copy, Clone)]
pub struct FormattedRate(pub YenPerKilowattHour);

impl Display for FormattedRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} 円", self.0.0)
    }
}
