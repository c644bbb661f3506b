pub mod discount;
pub mod estimate;
pub mod tariff;
pub mod usage;
