#[macro_use]
pub mod macros;

pub mod currency;
pub mod energy;
pub mod price;
