use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use salary_core::{FilterState, SortColumn, SortDirection, TablePage};
use salary_model::Record;

/// Formats an amount as dollars with thousands separators, e.g. `$1,234.50`.
pub fn format_salary(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Single-column table for option and manifest listings.
pub fn list_table(header: &str, items: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(header)]);
    apply_table_style(&mut table);
    if items.is_empty() {
        table.add_row(vec![dim_cell("(none)")]);
    }
    for item in items {
        table.add_row(vec![Cell::new(item)]);
    }
    table
}

/// The record table for one page. With `expand`, each record is followed
/// by one row per position.
pub fn records_table(page: &TablePage<'_>, expand: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&column_label(SortColumn::Name, page.sort)),
        header_cell(&column_label(SortColumn::Salary, page.sort)),
    ]);
    apply_records_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for record in &page.rows {
        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(format_salary(record.total_salary())),
        ]);
        if expand {
            for line in position_lines(record) {
                table.add_row(line);
            }
        }
    }
    table
}

fn position_lines(record: &Record) -> Vec<Vec<Cell>> {
    record
        .positions
        .iter()
        .map(|position| {
            let mut detail = format!("  {} / {}", position.college, position.department);
            if !position.title.is_empty() {
                detail = format!("  {}: {}", position.title, detail.trim_start());
            }
            if !position.tenure.is_empty() {
                detail.push_str(&format!(" ({})", position.tenure));
            }
            vec![
                dim_cell(detail),
                dim_cell(format_salary(position.position_salary)),
            ]
        })
        .collect()
}

fn column_label(column: SortColumn, sort: Option<(SortColumn, SortDirection)>) -> String {
    match sort {
        Some((active, SortDirection::Ascending)) if active == column => format!("{column} ▲"),
        Some((active, SortDirection::Descending)) if active == column => format!("{column} ▼"),
        _ => column.to_string(),
    }
}

/// One-line description of the dataset and active filters.
pub fn filter_summary(year: &str, location: &str, state: &FilterState) -> String {
    let mut parts = vec![format!("{location} {year}")];
    if let Some(college) = state.selected_college() {
        parts.push(format!("college: {college}"));
    }
    if let Some(department) = state.selected_department() {
        parts.push(format!("department: {department}"));
    }
    if !state.name_query().trim().is_empty() {
        parts.push(format!("name: \"{}\"", state.name_query().trim()));
    }
    parts.join(" | ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_records_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 2 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(75)),
            ColumnConstraint::LowerBoundary(Width::Fixed(14)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
