use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{
        discount::DiscountPeriod,
        estimate::{BillBreakdown, estimate, serialize_whole_yen},
        tariff::{TARIFF, Tariff},
        usage::UsageInput,
    },
    fmt::{FormattedRate, FormattedYen},
    tables::{build_breakdown_table, build_comparison_table},
};

pub const TITLE: &str = "enひかり 電気料金シミュレーター";

pub const DISCLAIMER: [&str; 3] = [
    "※ 本シミュレーターは非公式であり、計算結果の正確性は保証しません。",
    "※ 東京電力管内の料金単価をもとに試算しています。",
    "詳細は enひかり公式サイトをご確認ください：https://enhikari.jp/denki.html",
];

/// Single rendered line of the bill breakdown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineItem {
    pub label: &'static str,

    /// For example, `25.3 円 × 300 kWh`.
    pub calculation: Option<String>,

    /// Rounded for display, independently from the total.
    pub amount: String,

    pub is_discount: bool,
}

impl Display for LineItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.calculation {
            Some(calculation) => write!(f, "{}: {calculation} = {}", self.label, self.amount),
            None => write!(f, "{}: {}", self.label, self.amount),
        }
    }
}

/// Everything the presentation needs for one estimate.
#[derive(Copy, Clone, Debug, Serialize)]
#[must_use]
pub struct Report {
    pub usage: UsageInput,
    pub discount: DiscountPeriod,
    pub tariff: Tariff,
    pub breakdown: BillBreakdown,
}

impl Report {
    pub fn new(usage: UsageInput, discount: DiscountPeriod) -> Self {
        Self { usage, discount, tariff: TARIFF, breakdown: estimate(usage, discount) }
    }

    /// Breakdown lines, the discount line only appears when there is something to subtract.
    #[must_use]
    pub fn line_items(&self) -> Vec<LineItem> {
        let usage = self.usage;
        let mut items = vec![
            LineItem {
                label: "基本料金",
                calculation: None,
                amount: FormattedYen::from(self.tariff.base_fee).to_string(),
                is_discount: false,
            },
            LineItem {
                label: "電力量料金",
                calculation: Some(format!(
                    "{} × {usage} kWh",
                    FormattedRate(self.tariff.unit_price),
                )),
                amount: FormattedYen::from(self.breakdown.energy_cost).to_string(),
                is_discount: false,
            },
            LineItem {
                label: "再エネ賦課金",
                calculation: Some(format!(
                    "{} × {usage} kWh",
                    FormattedRate(self.tariff.surcharge_rate),
                )),
                amount: FormattedYen::from(self.breakdown.renewable_cost).to_string(),
                is_discount: false,
            },
        ];
        if self.breakdown.has_discount() {
            items.push(LineItem {
                label: "値引",
                calculation: Some(format!(
                    "▲{} × {usage} kWh",
                    FormattedRate(self.discount.rate()),
                )),
                amount: format!("-{}", FormattedYen::from(self.breakdown.discount_amount)),
                is_discount: true,
            });
        }
        items
    }

    #[must_use]
    pub fn total(&self) -> FormattedYen {
        FormattedYen(self.breakdown.total)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        writeln!(f, "月間使用量: {} kWh", self.usage)?;
        writeln!(f, "割引: {}", self.discount)?;
        writeln!(f, "推定料金: {}", self.total())?;
        writeln!(f)?;
        writeln!(f, "内訳")?;
        writeln!(f, "{}", build_breakdown_table(&self.line_items()))?;
        for line in DISCLAIMER {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Serialize)]
pub struct ComparisonRow {
    pub discount: DiscountPeriod,
    #[serde(serialize_with = "serialize_whole_yen")]
    pub total: i128,

    /// Compared to no discount at all.
    #[serde(serialize_with = "serialize_whole_yen")]
    pub saving: i128,
}

/// Totals for every discount period at the same usage.
#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct Comparison {
    pub usage: UsageInput,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn new(usage: UsageInput) -> Self {
        let baseline = estimate(usage, DiscountPeriod::None).total;
        let rows = DiscountPeriod::all()
            .iter()
            .map(|discount| {
                let total = estimate(usage, discount).total;
                ComparisonRow { discount, total, saving: baseline - total }
            })
            .collect();
        Self { usage, rows }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "月間使用量: {} kWh", self.usage)?;
        write!(f, "{}", build_comparison_table(self))
    }
}
