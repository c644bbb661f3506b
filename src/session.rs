use std::io::{BufRead, Write};

use crate::{
    core::{discount::DiscountPeriod, usage::UsageInput},
    prelude::*,
    report::Report,
};

const HELP: &str = "commands: `kwh <value>`, `discount <none|aug|sep>`, `show`, `quit`";

/// Form state of the interactive estimator, re-rendered on every change.
#[must_use]
pub struct Session {
    usage: UsageInput,
    discount: DiscountPeriod,
}

impl Default for Session {
    fn default() -> Self {
        Self { usage: UsageInput::from(300), discount: DiscountPeriod::None }
    }
}

#[derive(Debug, Eq, PartialEq)]
enum Event {
    Usage(UsageInput),
    Discount(DiscountPeriod),
    Show,
    Quit,
    Unknown(String),
}

impl Event {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (command, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let argument = argument.trim();
        let event = match command {
            "kwh" | "usage" => Self::Usage(UsageInput::parse(argument)),
            "discount" => Self::Discount(DiscountPeriod::from_key(argument)),
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(command.to_string()),
        };
        Some(event)
    }
}

impl Session {
    pub fn report(&self) -> Report {
        Report::new(self.usage, self.discount)
    }

    /// Render the initial state, then apply the input line by line until `quit` or EOF.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> Result {
        writeln!(output, "{}", self.report())?;
        writeln!(output, "{HELP}")?;

        for line in input.lines() {
            let line = line.context("failed to read the input")?;
            let Some(event) = Event::parse(&line) else {
                continue;
            };
            debug!(?event, "received");
            match event {
                Event::Usage(usage) => {
                    self.usage = usage;
                }
                Event::Discount(discount) => {
                    self.discount = discount;
                }
                Event::Show => {}
                Event::Quit => break,
                Event::Unknown(command) => {
                    warn!(command = command.as_str(), "unknown command");
                    writeln!(output, "unknown command `{command}`, {HELP}")?;
                    continue;
                }
            }
            writeln!(output, "{}", self.report())?;
        }

        info!(usage = %self.usage, discount = ?self.discount, "session ended");
        Ok(())
    }
}
