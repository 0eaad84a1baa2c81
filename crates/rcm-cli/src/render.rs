//! Table rendering for terminal output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rcm_core::DashboardStats;
use rcm_model::{Resident, ResidentStatus};

pub fn resident_table(rows: &[&Resident]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Age"),
        header_cell("Gender"),
        header_cell("Status"),
        header_cell("Address"),
        header_cell("Contact"),
        header_cell("Join Date"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for resident in rows {
        table.add_row(vec![
            Cell::new(resident.id),
            Cell::new(&resident.name),
            Cell::new(resident.age),
            Cell::new(&resident.gender),
            status_cell(resident.status),
            Cell::new(&resident.address),
            Cell::new(&resident.contact_number),
            Cell::new(resident.join_date.format("%Y-%m-%d")),
        ]);
    }
    table
}

pub fn stats_table(stats: &DashboardStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total residents"), Cell::new(stats.total)]);
    table.add_row(vec![
        Cell::new("Active").fg(Color::Green),
        Cell::new(stats.active),
    ]);
    table.add_row(vec![
        Cell::new("Inactive").fg(Color::DarkGrey),
        Cell::new(stats.inactive),
    ]);
    table.add_row(vec![
        Cell::new("Pending").fg(Color::Yellow),
        Cell::new(stats.pending),
    ]);
    table.add_row(vec![
        Cell::new("Joined in last 30 days"),
        Cell::new(stats.recent_joins),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ResidentStatus) -> Cell {
    match status {
        ResidentStatus::Active => Cell::new("active").fg(Color::Green),
        ResidentStatus::Inactive => Cell::new("inactive").fg(Color::DarkGrey),
        ResidentStatus::Pending => Cell::new("pending").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
