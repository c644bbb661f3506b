mod compare;
mod estimate;
mod format;

use clap::{Parser, Subcommand};
use tracing::Level;

pub use self::{compare::compare_discounts, estimate::estimate_bill};
use crate::{
    cli::{compare::CompareArgs, estimate::EstimateArgs},
    core::{discount::DiscountPeriod, usage::UsageInput},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Maximum log level, logs go to stderr.
    #[clap(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the monthly bill with an itemized breakdown.
    #[clap(name = "estimate")]
    Estimate(EstimateArgs),

    /// Estimate the bill for every discount period side by side.
    #[clap(name = "compare")]
    Compare(CompareArgs),

    /// List the available discount periods.
    #[clap(name = "options")]
    Options,

    /// Interactive estimator: change the usage or the discount and see the bill update.
    #[clap(name = "session")]
    Session,
}

#[derive(Parser)]
pub struct UsageArgs {
    /// Monthly usage in kilowatt-hours, invalid or negative input counts as zero.
    #[clap(env = "USAGE_KWH", default_value = "300", allow_hyphen_values = true)]
    usage: String,
}

impl UsageArgs {
    pub fn usage(&self) -> UsageInput {
        UsageInput::parse(&self.usage)
    }
}

#[derive(Parser)]
pub struct DiscountArgs {
    /// Discount period: `none`, `aug` (August 2025 reading), or `sep` (September 2025 reading).
    ///
    /// Unknown keys mean no discount.
    #[clap(short, long, env = "DISCOUNT", default_value = "none")]
    discount: String,
}

impl DiscountArgs {
    pub fn discount(&self) -> DiscountPeriod {
        DiscountPeriod::from_key(&self.discount)
    }
}
