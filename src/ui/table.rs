use crate::api::{Agent, JobOrder, Page};
use crate::state::{Toast, ToastLevel};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const TABLE_WIDTH: u16 = 120;

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn status_cell(status: &str) -> Cell {
    match status.to_ascii_lowercase().as_str() {
        "active" | "open" => Cell::new(status).fg(Color::Green),
        "suspended" | "closed" | "cancelled" => Cell::new(status).fg(Color::Red),
        "" => dim_cell("-"),
        _ => Cell::new(status).fg(Color::Yellow),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
}

fn empty_row(table: &mut Table, message: &str) {
    let columns = table.column_count().max(1);
    let mut row = vec![dim_cell(message)];
    row.extend((1..columns).map(|_| dim_cell("")));
    table.add_row(row);
}

/// Render a page of agents.
///
pub fn agents_table(page: &Page<Agent>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Company"),
        header_cell("Country"),
        header_cell("Status"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    for agent in &page.results {
        table.add_row(vec![
            Cell::new(&agent.id),
            Cell::new(&agent.name).add_attribute(Attribute::Bold),
            text_cell(&agent.company),
            text_cell(&agent.country),
            status_cell(&agent.status),
            text_cell(agent.created_at.as_deref().unwrap_or_default()),
        ]);
    }
    if page.results.is_empty() {
        empty_row(&mut table, "No agents match these filters");
    }
    table
}

/// Render a page of job orders.
///
pub fn job_orders_table(page: &Page<JobOrder>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Agent"),
        header_cell("Position"),
        header_cell("Quantity"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for order in &page.results {
        table.add_row(vec![
            Cell::new(&order.id),
            Cell::new(&order.agent_id),
            text_cell(&order.position),
            Cell::new(order.quantity),
            status_cell(&order.status),
        ]);
    }
    if page.results.is_empty() {
        empty_row(&mut table, "No job orders match these filters");
    }
    table
}

/// Render one agent as field/value rows.
///
pub fn agent_detail(agent: &Agent) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("ID"), Cell::new(&agent.id)]);
    table.add_row(vec![
        Cell::new("Name"),
        Cell::new(&agent.name).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Company"), text_cell(&agent.company)]);
    table.add_row(vec![Cell::new("Country"), text_cell(&agent.country)]);
    table.add_row(vec![Cell::new("Status"), status_cell(&agent.status)]);
    table.add_row(vec![
        Cell::new("Created"),
        text_cell(agent.created_at.as_deref().unwrap_or_default()),
    ]);
    table
}

/// Summarize where the page sits in the whole result set.
///
pub fn pager_line<T>(page: &Page<T>, current: u64, page_size: u64) -> String {
    format!(
        "Page {} of {} ({} records)",
        current,
        page.page_count(page_size),
        page.total_count
    )
}

pub fn toast_line(toast: &Toast) -> String {
    match toast.level {
        ToastLevel::Info => format!("[info] {}", toast.message),
        ToastLevel::Error => format!("[error] {}", toast.message),
    }
}
