use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Failures reported by matrix construction, operations and file IO.
#[derive(Debug)]
pub enum MatrixError {
    /// Storage for a `rows x columns` buffer could not be obtained.
    OutOfMemory { rows: usize, columns: usize },
    /// Identity initialization requested on a non-square matrix.
    NotSquare { rows: usize, columns: usize },
    /// Random initialization with `min > max`.
    InvalidRange { min: i32, max: i32 },
    /// Elementwise operation on operands of different shapes.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Product where `left.columns != right.rows`.
    IncompatibleShapes {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// The file could not be opened, read or written. `path` is empty when
    /// reading from a caller-supplied reader.
    Io { path: PathBuf, source: io::Error },
    /// Text input that does not describe a rectangular integer grid.
    MalformedInput { line: usize, reason: String },
    /// A flat buffer whose length does not match the requested shape.
    BufferLength {
        rows: usize,
        columns: usize,
        len: usize,
    },
}

impl MatrixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MatrixError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MatrixError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfMemory { rows, columns } => {
                write!(f, "out of memory allocating a {}x{} matrix", rows, columns)
            }
            MatrixError::NotSquare { rows, columns } => write!(
                f,
                "identity requires a square matrix, got {}x{}",
                rows, columns
            ),
            MatrixError::InvalidRange { min, max } => {
                write!(f, "invalid random range: min {} is greater than max {}", min, max)
            }
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::IncompatibleShapes { left, right } => write!(
                f,
                "incompatible shapes for product: {}x{} times {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::Io { path, source } if path.as_os_str().is_empty() => {
                write!(f, "I/O error: {}", source)
            }
            MatrixError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            MatrixError::MalformedInput { line, reason } => {
                write!(f, "malformed input at line {}: {}", line, reason)
            }
            MatrixError::BufferLength { rows, columns, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, columns, len
            ),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
