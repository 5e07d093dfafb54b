use crate::client::ProductRow;
use crate::state::ConsoleState;
use std::fmt::Write;

const HEADERS: [&str; 4] = ["ID", "Name", "Price", "Category"];

pub fn render_state(state: &ConsoleState) -> String {
    match state {
        ConsoleState::Loading => "Loading...".to_string(),
        ConsoleState::Failed(message) => format!("Error Fetching Data: {message}"),
        ConsoleState::Loaded(products) => render_table(products),
    }
}

/// Bordered table, one row per product, price shown as `$<price>`.
pub fn render_table(products: &[ProductRow]) -> String {
    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id.clone(),
                p.name.clone(),
                format!("${}", p.price),
                p.category.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+");

    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "{}", format_row(&HEADERS.map(String::from), &widths));
    let _ = writeln!(out, "{border}");
    for row in &rows {
        let _ = writeln!(out, "{}", format_row(row, &widths));
    }
    let _ = write!(out, "{border}");
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let inner = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {cell:<width$} "))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{inner}|")
}
