use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::discount::DiscountPeriod,
    fmt::{FormattedRate, FormattedYen},
    report::{Comparison, LineItem},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_breakdown_table(items: &[LineItem]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["項目", "計算", "金額"]);
    for item in items {
        table.add_row(vec![
            Cell::new(item.label),
            Cell::new(item.calculation.as_deref().unwrap_or_default())
                .add_attribute(Attribute::Dim),
            Cell::new(&item.amount)
                .set_alignment(CellAlignment::Right)
                .fg(if item.is_discount { Color::Green } else { Color::Reset }),
        ]);
    }
    table
}

pub fn build_comparison_table(comparison: &Comparison) -> Table {
    let mut table = new_table();
    table.set_header(vec!["割引", "値引単価", "推定料金", "差額"]);
    for row in &comparison.rows {
        table.add_row(vec![
            Cell::new(row.discount),
            Cell::new(FormattedRate(row.discount.rate())).set_alignment(CellAlignment::Right),
            Cell::new(FormattedYen(row.total))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new(FormattedYen(-row.saving))
                .set_alignment(CellAlignment::Right)
                .fg(if row.saving > 0 { Color::Green } else { Color::Reset }),
        ]);
    }
    table
}

pub fn build_options_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Key", "割引", "値引単価"]);
    for discount in DiscountPeriod::all() {
        table.add_row(vec![
            Cell::new(discount.key()).fg(Color::Cyan),
            Cell::new(discount),
            Cell::new(FormattedRate(discount.rate())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
