//! Pipe table rendering.

use crate::inline::render_inline;

/// A table split into cells, separator rows removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable<'a> {
    /// First non-separator row.
    pub header: Vec<&'a str>,
    /// Remaining rows.
    pub body: Vec<Vec<&'a str>>,
}

/// Split a raw `|a|b|` row into trimmed cells.
///
/// The empty cells produced by the boundary pipes are dropped; inner empty
/// cells are kept.
#[must_use]
pub fn split_row(row: &str) -> Vec<&str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    if row.trim().is_empty() {
        return Vec::new();
    }
    row.split('|').map(str::trim).collect()
}

/// True for a header separator row such as `|---|:--:|`.
#[must_use]
pub fn is_separator_row(cells: &[&str]) -> bool {
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

/// Split rows and drop separators. `None` if nothing is left.
#[must_use]
pub fn parse_table<'a>(rows: &[&'a str]) -> Option<ParsedTable<'a>> {
    let mut cells = rows
        .iter()
        .map(|&row| split_row(row))
        .filter(|cells| !is_separator_row(cells));
    let header = cells.next()?;
    Some(ParsedTable {
        header,
        body: cells.collect(),
    })
}

/// Render rows as an HTML table with a header row.
///
/// Returns an empty string when every row is a separator.
#[must_use]
pub fn render_table<S: AsRef<str>>(rows: &[S]) -> String {
    let rows: Vec<&str> = rows.iter().map(AsRef::as_ref).collect();
    let Some(table) = parse_table(&rows) else {
        return String::new();
    };

    let mut lines = Vec::new();
    lines.push("<table>".to_string());
    lines.push("<thead>".to_string());
    lines.push(render_row("th", &table.header));
    lines.push("</thead>".to_string());
    if !table.body.is_empty() {
        lines.push("<tbody>".to_string());
        for row in &table.body {
            lines.push(render_row("td", row));
        }
        lines.push("</tbody>".to_string());
    }
    lines.push("</table>".to_string());
    lines.join("\n")
}

fn render_row(tag: &str, cells: &[&str]) -> String {
    let cells: String = cells
        .iter()
        .map(|cell| format!("<{tag}>{}</{tag}>", render_inline(cell)))
        .collect();
    format!("<tr>{cells}</tr>")
}
