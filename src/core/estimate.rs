use serde::{Serialize, Serializer};

use crate::{
    core::{
        discount::DiscountPeriod,
        tariff::{TARIFF, Tariff},
        usage::UsageInput,
    },
    prelude::*,
    quantity::currency::Yen,
};

/// Itemized monthly bill.
///
/// The line items are kept unrounded, only the total is rounded to whole yen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[must_use]
pub struct BillBreakdown {
    /// Energy charge («電力量料金»).
    pub energy_cost: Yen,

    /// Renewable energy surcharge («再エネ賦課金»).
    pub renewable_cost: Yen,

    /// Discount («値引額»), subtracted from the bill.
    pub discount_amount: Yen,

    /// Whole yen.
    #[serde(serialize_with = "serialize_whole_yen")]
    pub total: i128,
}

/// Whole yen as a plain integer when it fits into `i64`, which is the limit of TOML.
pub fn serialize_whole_yen<S: Serializer>(
    yen: &i128,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match i64::try_from(*yen) {
        Ok(yen) => serializer.serialize_i64(yen),
        Err(_) => serializer.serialize_i128(*yen),
    }
}

impl BillBreakdown {
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_amount > Yen::ZERO
    }
}

impl Tariff {
    pub fn estimate(&self, usage: UsageInput, discount: DiscountPeriod) -> BillBreakdown {
        let energy = usage.energy();
        let energy_cost = self.unit_price * energy;
        let renewable_cost = self.surcharge_rate * energy;
        let discount_amount = discount.rate() * energy;
        let total =
            (self.base_fee + energy_cost + renewable_cost - discount_amount).round_to_whole();
        debug!(%usage, ?discount, total, "estimated");
        BillBreakdown { energy_cost, renewable_cost, discount_amount, total }
    }
}

/// Estimate the bill with the plan's [`TARIFF`].
pub fn estimate(usage: UsageInput, discount: DiscountPeriod) -> BillBreakdown {
    TARIFF.estimate(usage, discount)
}
