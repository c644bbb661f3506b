#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod report;
mod session;
mod tables;

use std::io::{stdin, stdout};

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, compare_discounts, estimate_bill},
    prelude::*,
    session::Session,
    tables::build_options_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();
    info!(version = crate_version!(), "starting…");

    match args.command {
        Command::Estimate(args) => {
            estimate_bill(&args, &mut stdout().lock())?;
        }
        Command::Compare(args) => {
            compare_discounts(&args, &mut stdout().lock())?;
        }
        Command::Options => {
            println!("{}", build_options_table());
        }
        Command::Session => {
            Session::default().run(stdin().lock(), &mut stdout().lock())?;
        }
    }

    info!("done!");
    Ok(())
}
