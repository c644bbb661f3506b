use std::io::Write;

use clap::Parser;

use crate::{
    cli::{UsageArgs, format::OutputFormat},
    prelude::*,
    report::Comparison,
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,
}

#[instrument(skip_all)]
pub fn compare_discounts(args: &CompareArgs, output: &mut impl Write) -> Result {
    let comparison = Comparison::new(args.usage.usage());
    info!(usage = %comparison.usage, n_periods = comparison.rows.len(), "compared");
    args.format.write(output, &comparison)
}
