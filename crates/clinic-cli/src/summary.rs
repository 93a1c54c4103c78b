//! Terminal tables for load reports, record listings and workflow runs.

use std::fmt::Display;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clinic_core::{LoadReport, LoadStatus};
use clinic_model::Record;

/// Counts gathered from one `referral process` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub queued: usize,
    pub passes: usize,
    pub processed: usize,
    pub email_entries: usize,
    pub ehr_entries: usize,
}

pub fn load_summary_table(report: &LoadReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("File"),
        header_cell("Loaded"),
        header_cell("Skipped"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    for load in &report.entities {
        table.add_row(vec![
            Cell::new(load.kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(load.kind.file_name()),
            Cell::new(load.loaded),
            count_cell(load.skipped(), Color::Yellow),
            status_cell(&load.status),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.total_loaded()).add_attribute(Attribute::Bold),
        count_cell(report.total_skipped(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Key and one-line description of every record, in collection order.
pub fn record_table<R: Record + Display>(records: &[R]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("ID"), header_cell("Record")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(record.key()).add_attribute(Attribute::Bold),
            Cell::new(record.to_string()),
        ]);
    }
    table
}

pub fn workflow_table(summary: &WorkflowSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Queued referrals", summary.queued),
        ("Queue passes", summary.passes),
        ("Pending referrals processed", summary.processed),
        ("Email entries", summary.email_entries),
        ("EHR entries", summary.ehr_entries),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &LoadStatus) -> Cell {
    match status {
        LoadStatus::Loaded => Cell::new("loaded").fg(Color::Green),
        LoadStatus::Missing => Cell::new("missing")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        LoadStatus::Unreadable { .. } => Cell::new("unreadable")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        LoadStatus::Interrupted { .. } => Cell::new("interrupted").fg(Color::Red),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
