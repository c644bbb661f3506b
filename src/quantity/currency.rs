use crate::quantity::{energy::KilowattHours, price::YenPerKilowattHour};

quantity!(Yen, via: f64, suffix: "円", precision: 0);

implement_mul!(YenPerKilowattHour, KilowattHours, Yen);

impl Yen {
    /// Round to the nearest whole yen, halves away from zero.
    ///
    /// `f64::round` is used on purpose: it never rounds half to even.
    /// `i128` holds any bill up to `u64::MAX` kilowatt-hours.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn round_to_whole(self) -> i128 {
        self.0.round() as i128
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_whole_halves_away_from_zero() {
        assert_eq!(Yen(0.5).round_to_whole(), 1);
        assert_eq!(Yen(2.5).round_to_whole(), 3);
        assert_eq!(Yen(9173.5).round_to_whole(), 9174);
        assert_eq!(Yen(-2.5).round_to_whole(), -3);
    }

    #[test]
    fn test_round_to_whole_nearest() {
        assert_eq!(Yen(1194.49).round_to_whole(), 1194);
        assert_eq!(Yen(7590.000_000_000_001).round_to_whole(), 7590);
    }

    #[test]
    fn test_round_to_whole_beyond_i64() {
        assert_eq!(Yen(3.0e19).round_to_whole(), 30_000_000_000_000_000_000);
    }

    #[test]
    fn test_mul_both_orders() {
        let usage = KilowattHours(300.0);
        let price = YenPerKilowattHour(3.98);
        assert_abs_diff_eq!((usage * price).0, 1194.0, epsilon = 1e-9);
        assert_abs_diff_eq!((price * usage).0, 1194.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ordering_and_neg() {
        assert!(Yen(-0.5) < Yen::ZERO);
        assert_eq!(-Yen(600.0), Yen(-600.0));
        assert_eq!(Yen(720.0).max(Yen(600.0)), Yen(720.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Yen(7590.000_000_000_001).to_string(), "7590 円");
        assert_eq!(format!("{:?}", Yen(390.0)), "390.0円");
    }
}
