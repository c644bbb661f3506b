use std::io::Write;

use clap::Parser;

use crate::{
    cli::{DiscountArgs, UsageArgs, format::OutputFormat},
    prelude::*,
    report::Report,
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(flatten)]
    pub discount: DiscountArgs,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,
}

#[instrument(skip_all)]
pub fn estimate_bill(args: &EstimateArgs, output: &mut impl Write) -> Result {
    let report = Report::new(args.usage.usage(), args.discount.discount());
    info!(
        usage = %report.usage,
        discount = report.discount.key(),
        total = report.breakdown.total,
        "estimated"
    );
    args.format.write(output, &report)
}
