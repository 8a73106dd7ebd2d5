//! Integration tests for matrix lifecycle, initialization and arithmetic.

use intmat::{equal, product, scalar_product, sum, transpose, Matrix, MatrixError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_2x3() -> Matrix {
    Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn allocate_then_free_leaves_empty_matrix() {
    let mut m = Matrix::allocate(5, 7).unwrap();
    assert_eq!(m.shape(), (5, 7));
    m.free();
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
    assert!(m.as_slice().is_empty());
}

#[test]
fn allocate_impossible_shape_fails_cleanly() {
    let result = Matrix::allocate(usize::MAX / 2, usize::MAX / 2);
    assert!(matches!(result, Err(MatrixError::OutOfMemory { .. })));
}

#[test]
fn from_shape_vec_rejects_wrong_length() {
    let err = Matrix::from_shape_vec((2, 3), vec![1, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::BufferLength {
            rows: 2,
            columns: 3,
            len: 3
        }
    ));
}

// ---------------------------------------------------------------------------
// Algebraic identities on fixed inputs
// ---------------------------------------------------------------------------

#[test]
fn sum_is_commutative() {
    let a = sample_2x3();
    let b = Matrix::from_rows(vec![vec![-1, 0, 7], vec![2, 2, -9]]).unwrap();
    assert!(equal(&sum(&a, &b).unwrap(), &sum(&b, &a).unwrap()));
}

#[test]
fn transpose_is_an_involution() {
    let a = sample_2x3();
    assert!(equal(&transpose(&transpose(&a)), &a));
}

#[test]
fn scalar_product_by_one_and_zero() {
    let a = sample_2x3();
    assert!(equal(&scalar_product(&a, 1), &a));

    let zeros = Matrix::allocate(2, 3).unwrap();
    assert!(equal(&scalar_product(&a, 0), &zeros));
}

#[test]
fn identity_is_left_neutral_for_product() {
    let x = sample_2x3();
    let mut id = Matrix::allocate(2, 2).unwrap();
    id.init_identity().unwrap();
    assert!(equal(&product(&id, &x).unwrap(), &x));
}

#[test]
fn product_is_associative() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0, -1, 2], vec![1, 1, 1]]).unwrap();
    let c = Matrix::from_rows(vec![vec![2], vec![-3], vec![4]]).unwrap();
    let left = product(&product(&a, &b).unwrap(), &c).unwrap();
    let right = product(&a, &product(&b, &c).unwrap()).unwrap();
    assert!(equal(&left, &right));
    assert_eq!(left.shape(), (3, 1));
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[test]
fn sum_mismatch_leaves_inputs_unchanged() {
    let a = sample_2x3();
    let b = transpose(&a);
    let (a_before, b_before) = (a.clone(), b.clone());

    let err = sum(&a, &b).unwrap_err();
    assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn product_rejects_incompatible_inner_dimensions() {
    let a = sample_2x3();
    assert!(matches!(
        product(&a, &a),
        Err(MatrixError::IncompatibleShapes { .. })
    ));
}

#[test]
fn identity_rejects_non_square() {
    let mut m = Matrix::allocate(2, 3).unwrap();
    assert!(matches!(
        m.init_identity(),
        Err(MatrixError::NotSquare { rows: 2, columns: 3 })
    ));
}

#[test]
fn random_with_min_above_max_leaves_matrix_unmodified() {
    let mut m = sample_2x3();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        m.init_random(&mut rng, 5, 1),
        Err(MatrixError::InvalidRange { min: 5, max: 1 })
    ));
    assert_eq!(m, sample_2x3());
}

#[test]
fn operations_do_not_mutate_operands() {
    let a = sample_2x3();
    let snapshot = a.clone();
    let _ = sum(&a, &a).unwrap();
    let _ = scalar_product(&a, 3);
    let _ = transpose(&a);
    let _ = product(&a, &transpose(&a)).unwrap();
    assert_eq!(a, snapshot);
}
