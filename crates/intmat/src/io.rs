//! Plain-text matrix files.
//!
//! One matrix row per line, cells written as base-10 integers each followed
//! by a single space. There is no header; the shape is inferred on load from
//! the number of non-blank lines and the token count of the first one.
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// How the loader treats rows whose length differs from the first row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Reject ragged rows with [`MatrixError::MalformedInput`].
    #[default]
    Strict,
    /// Read every token as one row-major stream. Surplus tokens are dropped
    /// and missing cells stay zero.
    Lax,
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(LoadMode::Strict),
            "lax" => Ok(LoadMode::Lax),
            _ => Err(format!(
                "Unknown load mode: {}. Expected 'strict' or 'lax'",
                s
            )),
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadMode::Strict => f.write_str("strict"),
            LoadMode::Lax => f.write_str("lax"),
        }
    }
}

/// Write `m` in the text format to any writer.
pub fn write_matrix<W: Write>(m: &Matrix, mut writer: W) -> io::Result<()> {
    for row in m.iter_rows() {
        for value in row {
            write!(writer, "{} ", value)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Render `m` in the text format.
pub fn to_text(m: &Matrix) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_matrix(m, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write `m` to `path`, creating or truncating the file.
pub fn dump_to_file<P: AsRef<Path>>(m: &Matrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MatrixError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_matrix(m, &mut writer).map_err(|e| MatrixError::io(path, e))?;
    writer.flush().map_err(|e| MatrixError::io(path, e))?;
    log::debug!(
        "Wrote {}x{} matrix to {}",
        m.rows(),
        m.columns(),
        path.display()
    );
    Ok(())
}

/// Load a matrix from `path`, rejecting ragged rows.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    load_from_file_with_mode(path, LoadMode::Strict)
}

pub fn load_from_file_with_mode<P: AsRef<Path>>(path: P, mode: LoadMode) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MatrixError::io(path, e))?;
    let m = parse_lines(BufReader::new(file).lines(), mode, path)?;
    log::debug!(
        "Loaded {}x{} matrix from {} ({} mode)",
        m.rows(),
        m.columns(),
        path.display(),
        mode
    );
    Ok(m)
}

/// Read a matrix from a buffered reader. IO failures carry an empty path.
pub fn read_matrix<R: BufRead>(reader: R, mode: LoadMode) -> Result<Matrix> {
    parse_lines(reader.lines(), mode, Path::new(""))
}

/// Parse matrix text held in memory.
pub fn parse_str(text: &str, mode: LoadMode) -> Result<Matrix> {
    parse_lines(text.lines().map(|l| Ok::<_, io::Error>(l.to_owned())), mode, Path::new(""))
}

fn parse_lines<I>(lines: I, mode: LoadMode, path: &Path) -> Result<Matrix>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut data: Vec<i32> = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0usize;

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(MatrixError::malformed(line_no, "line is not valid UTF-8"));
            }
            Err(e) => return Err(MatrixError::io(path, e)),
        };
        let start = data.len();
        for token in line.split_whitespace() {
            data.push(parse_cell(token, line_no)?);
        }
        let count = data.len() - start;
        if count == 0 {
            continue;
        }
        match columns {
            None => columns = Some(count),
            Some(expected) if expected != count && mode == LoadMode::Strict => {
                return Err(MatrixError::malformed(
                    line_no,
                    format!("expected {} values, found {}", expected, count),
                ));
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let Some(columns) = columns else {
        return Ok(Matrix::default());
    };
    if data.len() != rows * columns {
        log::trace!(
            "Lax load: {} tokens for a {}x{} matrix",
            data.len(),
            rows,
            columns
        );
        data.resize(rows * columns, 0);
    }
    Matrix::from_shape_vec((rows, columns), data)
}

fn parse_cell(token: &str, line_no: usize) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|e| MatrixError::malformed(line_no, format!("invalid integer '{}': {}", token, e)))
}
