//! Human-readable rendering of a matrix.
//!
//! Nothing in the crate prints on its own; these helpers exist for callers
//! that want to look at a matrix.
use std::fmt;

use crate::matrix::Matrix;

/// Cells separated by a space, rows separated by a newline.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

/// Format `m`, keeping at most `max_rows` rows and eliding the middle of
/// rows wider than `2 * max_cols` with `...`.
pub fn format_matrix(m: &Matrix, max_rows: Option<usize>, max_cols: Option<usize>) -> String {
    let (rows, columns) = m.shape();
    let rows_to_print = max_rows.unwrap_or(rows).min(rows);
    let max_cols = max_cols.unwrap_or(columns);

    let mut out = String::new();
    for r in 0..rows_to_print {
        let row = m.row_slice(r);
        let cells: Vec<String> = if max_cols.saturating_mul(2) < columns {
            let head = row[..max_cols].iter().map(i32::to_string);
            let tail = row[columns - max_cols..].iter().map(i32::to_string);
            head.chain(std::iter::once("...".to_string()))
                .chain(tail)
                .collect()
        } else {
            row.iter().map(i32::to_string).collect()
        };
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    if rows_to_print < rows {
        out.push_str("...\n");
    }
    out
}

/// Print `m` to stdout, preceded by its shape.
pub fn print_matrix(m: &Matrix, max_rows: Option<usize>, max_cols: Option<usize>) {
    println!("matrix {}x{}", m.rows(), m.columns());
    print!("{}", format_matrix(m, max_rows, max_cols));
}
