use std::iter;

const GAP: &str = "  ";
const MIN_COLUMN: usize = 6;

/// Layout options for [`render_entity_table`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows under a header line and a dashed divider.
///
/// Numbers (marks, GPAs, credits) are right-aligned. With `max_width` set the
/// widest columns give up space first, down to their header width.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let floors: Vec<usize> = headers
        .iter()
        .map(|header| header.chars().count().max(MIN_COLUMN))
        .collect();
    let mut widths: Vec<usize> = floors
        .iter()
        .enumerate()
        .map(|(index, floor)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(*floor, usize::max)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_columns(&mut widths, &floors, max_width);
    }

    let header_cells = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width, false));
    let header_line = join_cells(header_cells);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| render_cell(row.get(index), *width, options.color));
        lines.push(join_cells(cells));
    }
    lines.join("\n")
}

fn render_cell(value: Option<&String>, width: usize, color: bool) -> String {
    let text = truncate(value.map_or("-", String::as_str), width);
    let cell = pad(&text, width, text.parse::<f64>().is_ok());
    match highlight(&text) {
        Some(code) if color => cell.replacen(&text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1),
        _ => cell,
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP)
}

/// Take one column off the widest column still above its floor until the row fits.
fn shrink_columns(widths: &mut [usize], floors: &[usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .zip(floors)
            .enumerate()
            .filter(|(_, (width, floor))| width > floor)
            .max_by_key(|(index, (width, _))| (**width, usize::MAX - index))
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value
        .chars()
        .take(width.saturating_sub(1))
        .chain(iter::once('…'))
        .collect()
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

/// ANSI color for grade letters, remarks and flags.
fn highlight(text: &str) -> Option<&'static str> {
    match text {
        "A+" | "A" | "A-" | "true" => Some("32"),
        "D" | "Poor" => Some("33"),
        "F" | "Fail" | "Not Enrolled" | "false" => Some("31"),
        _ => None,
    }
}
