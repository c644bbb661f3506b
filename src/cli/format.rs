use std::{fmt::Display, io::Write};

use serde::Serialize;

use crate::prelude::*;

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable breakdown.
    #[default]
    Table,

    Json,

    Toml,
}

impl OutputFormat {
    pub fn write(self, output: &mut impl Write, value: &(impl Display + Serialize)) -> Result {
        match self {
            Self::Table => writeln!(output, "{value}")?,
            Self::Json => writeln!(
                output,
                "{}",
                serde_json::to_string_pretty(value).context("failed to serialize into JSON")?,
            )?,
            Self::Toml => write!(
                output,
                "{}",
                toml::to_string_pretty(value).context("failed to serialize into TOML")?,
            )?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{discount::DiscountPeriod, usage::UsageInput},
        report::Report,
    };

    fn render(format: OutputFormat) -> String {
        let report = Report::new(UsageInput::from(300), DiscountPeriod::SeptemberReading);
        let mut output = Vec::new();
        format.write(&mut output, &report).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["discount"], "sep");
        assert_eq!(value["breakdown"]["total"], 8454);
    }

    #[test]
    fn test_toml() {
        let value: toml::Table = render(OutputFormat::Toml).parse().unwrap();
        assert_eq!(value["usage"].as_integer(), Some(300));
        assert_eq!(value["breakdown"]["total"].as_integer(), Some(8454));
    }

    #[test]
    fn test_table() {
        assert!(render(OutputFormat::Table).contains("推定料金: 8,454 円"));
    }
}
