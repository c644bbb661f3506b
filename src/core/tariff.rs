use serde::Serialize;

use crate::quantity::{currency::Yen, price::YenPerKilowattHour};

/// Tokyo Electric Power area rates of the enひかり plan.
pub const TARIFF: Tariff = Tariff {
    base_fee: Yen(390.0),
    unit_price: YenPerKilowattHour(25.3),
    surcharge_rate: YenPerKilowattHour(3.98),
};

#[derive(Copy, Clone, Debug, Serialize)]
pub struct Tariff {
    /// Monthly charge independent of the usage.
    pub base_fee: Yen,

    /// Energy charge per kilowatt-hour.
    pub unit_price: YenPerKilowattHour,

    /// Renewable energy surcharge («再エネ賦課金») per kilowatt-hour.
    pub surcharge_rate: YenPerKilowattHour,
}
