//! Actions behind each subcommand.
use std::path::Path;

use anyhow::{Context, Result};
use intmat::display::print_matrix;
use intmat::{dump_to_file, load_from_file_with_mode, LoadMode, Matrix, RandomFill};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn load(path: &Path, mode: LoadMode) -> Result<Matrix> {
    load_from_file_with_mode(path, mode)
        .with_context(|| format!("Failed to load matrix: {}", path.display()))
}

/// Write `m` to `output`, or print it in the file format when no output is given.
pub fn emit(m: &Matrix, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            dump_to_file(m, path)
                .with_context(|| format!("Failed to write matrix: {}", path.display()))?;
            log::info!(
                "[intmat] Wrote {}x{} matrix to {:?}",
                m.rows(),
                m.columns(),
                path
            );
        }
        None => print!("{}", intmat::io::to_text(m)),
    }
    Ok(())
}

pub fn random_matrix(rows: usize, columns: usize, fill: &RandomFill) -> Result<Matrix> {
    let mut rng = match fill.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut m = Matrix::allocate(rows, columns)?;
    m.init_random(&mut rng, fill.min, fill.max)?;
    Ok(m)
}

pub fn identity_matrix(n: usize) -> Result<Matrix> {
    let mut m = Matrix::allocate(n, n)?;
    m.init_identity()?;
    Ok(m)
}

pub fn constant_matrix(rows: usize, columns: usize, value: i32) -> Result<Matrix> {
    let mut m = Matrix::allocate(rows, columns)?;
    m.init_constant(value);
    Ok(m)
}

pub fn sum_files(a: &Path, b: &Path, mode: LoadMode) -> Result<Matrix> {
    let (a, b) = (load(a, mode)?, load(b, mode)?);
    Ok(intmat::sum(&a, &b)?)
}

pub fn product_files(a: &Path, b: &Path, mode: LoadMode) -> Result<Matrix> {
    let (a, b) = (load(a, mode)?, load(b, mode)?);
    Ok(intmat::product(&a, &b)?)
}

pub fn transpose_file(a: &Path, mode: LoadMode) -> Result<Matrix> {
    Ok(intmat::transpose(&load(a, mode)?))
}

pub fn scale_file(a: &Path, scalar: i32, mode: LoadMode) -> Result<Matrix> {
    Ok(intmat::scalar_product(&load(a, mode)?, scalar))
}

pub fn equal_files(a: &Path, b: &Path, mode: LoadMode) -> Result<bool> {
    Ok(intmat::equal(&load(a, mode)?, &load(b, mode)?))
}

pub fn show_file(
    a: &Path,
    mode: LoadMode,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
) -> Result<()> {
    print_matrix(&load(a, mode)?, max_rows, max_cols);
    Ok(())
}
