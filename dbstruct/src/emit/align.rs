//! Column alignment of struct fields
//!
//! Mirrors the elastic tabstops gofmt applies to struct bodies: every cell
//! except the last one on a line is padded to the widest cell of its column,
//! where a column spans consecutive lines that continue past it. A trailing
//! comment therefore only aligns with comments on neighbouring lines.

const PADDING: usize = 1;

/// Align rows of cells into lines
#[must_use]
pub fn align(rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<Vec<usize>> = rows.iter().map(|row| vec![0; row.len()]).collect();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    for col in 0..columns.saturating_sub(1) {
        let continues = |row: &Vec<String>| row.len() > col + 1;
        let mut start = 0;
        while start < rows.len() {
            if !continues(&rows[start]) {
                start += 1;
                continue;
            }

            let end = (start..rows.len())
                .find(|&idx| !continues(&rows[idx]))
                .unwrap_or(rows.len());
            let width = rows[start..end]
                .iter()
                .map(|row| display_width(&row[col]))
                .max()
                .unwrap_or(0);
            for row_widths in &mut widths[start..end] {
                row_widths[col] = width;
            }
            start = end;
        }
    }

    rows.iter()
        .zip(widths)
        .map(|(row, row_widths)| {
            let mut line = String::new();
            for (idx, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if idx + 1 < row.len() {
                    let pad = row_widths[idx] - display_width(cell) + PADDING;
                    line.push_str(&" ".repeat(pad));
                }
            }
            line
        })
        .collect()
}

fn display_width(cell: &str) -> usize {
    cell.chars().count()
}
