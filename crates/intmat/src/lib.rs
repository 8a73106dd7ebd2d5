//! intmat: dense integer matrices.
//!
//! This crate provides a row-major `Matrix` of `i32` cells together with
//! in-place initialization, elementwise and algebraic operations, exact
//! comparison, and a plain-text file format (one row per line, cells
//! separated by whitespace).
//!
//! Operations never print or log their results; use [`display::print_matrix`]
//! or the `Display` impl when a matrix needs to be inspected.
pub mod config;
pub mod display;
pub mod error;
pub mod init;
pub mod io;
pub mod matrix;
pub mod ops;

pub use config::{MatrixConfig, RandomFill};
pub use error::{MatrixError, Result};
pub use io::{dump_to_file, load_from_file, load_from_file_with_mode, LoadMode};
pub use matrix::Matrix;
pub use ops::{equal, product, scalar_product, sum, transpose};
