//! Integration test: elimination across both storage backends.
//!
//! Seeded random systems are reduced with the fixed-size and the
//! grid-backed matrix; the two must agree bit for bit, since they run the
//! same engine over the same row operations. Solutions are checked by
//! substituting them back into the original system.

use arr2d_grid::Budget;
use arr2d_matrix::echelon::{is_ref, is_rref, pivot_columns, rank};
use arr2d_matrix::{DynMatrix, Matrix, MatrixError, RowOps};
use arr2d_test_utils::fixtures::{random_dyn_matrix, random_matrix};
use arr2d_test_utils::{CountingAlloc, FailingAlloc};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

/// Max |A x - b| for the augmented system `aug = [A | b]` and solution `x`.
fn residual<const N: usize, const W: usize>(aug: &Matrix<f64, N, W>, x: &[f64]) -> f64 {
    let mut worst: f64 = 0.0;
    for row in aug.as_rows() {
        let (a, b) = row.split_at(N);
        let lhs: f64 = a.iter().zip(x).map(|(a, x)| a * x).sum();
        worst = worst.max((lhs - b[0]).abs());
    }
    worst
}

// ── Backend agreement ───────────────────────────────────────────

#[test]
fn fixed_and_dynamic_agree_on_seeded_systems() {
    for seed in 0..32 {
        let mut fixed: Matrix<f64, 4, 5> = random_matrix(seed);
        let mut dynamic = DynMatrix::from_fixed(&fixed).unwrap();

        fixed.make_ref();
        dynamic.make_ref();
        assert_eq!(dynamic, fixed, "seed {seed} after make_ref");
        assert!(is_ref(&dynamic));

        fixed.make_rref();
        dynamic.make_rref();
        assert_eq!(dynamic, fixed, "seed {seed} after make_rref");
        assert!(is_rref(&dynamic));
    }
}

#[test]
fn seeded_square_systems_substitute_back() {
    for seed in 100..116 {
        let original: Matrix<f64, 4, 5> = random_matrix(seed);
        let mut reduced = original;
        reduced.solve();
        if reduced.rank() < 4 {
            continue;
        }
        let x: Vec<f64> = (0..4).map(|r| reduced[(r, 4)]).collect();
        let err = residual(&original, &x);
        assert!(err < 1e-6, "seed {seed}: residual {err}");
    }
}

#[test]
fn wide_and_tall_dynamic_shapes() {
    let mut wide = random_dyn_matrix(2, 6, 5);
    wide.solve();
    assert!(is_rref(&wide));
    assert!(wide.rank() <= 2);

    let mut tall = random_dyn_matrix(7, 3, 5);
    tall.solve();
    assert!(is_rref(&tall));
    assert!(tall.rank() <= 3);
    for r in tall.rank()..tall.rows() {
        assert!(tall.row(r).iter().all(|&v| v == 0.0), "row {r} not zero");
    }
}

// ── Rank deficiency ─────────────────────────────────────────────

#[test]
fn duplicated_equation_leaves_a_free_variable() {
    // x + y + z = 6 written twice, plus y - z = -1.
    let mut m = DynMatrix::from_row_major(
        3,
        4,
        &[
            1.0, 1.0, 1.0, 6.0, //
            1.0, 1.0, 1.0, 6.0, //
            0.0, 1.0, -1.0, -1.0,
        ],
    )
    .unwrap();
    m.solve();
    assert_eq!(rank(&m), 2);
    assert_eq!(pivot_columns(&m).as_slice(), &[0, 1]);
    assert!(m.row(2).iter().all(|&v| v == 0.0));
}

#[test]
fn inconsistent_system_pivots_in_augmented_column() {
    // x + y = 1 and x + y = 2.
    let mut m = Matrix::from_rows([[1.0, 1.0, 1.0], [1.0, 1.0, 2.0]]);
    m.solve();
    assert_eq!(m.pivot_columns().as_slice(), &[0, 2]);
}

// ── Allocation ──────────────────────────────────────────────────

#[test]
fn elimination_does_not_allocate() {
    let alloc = CountingAlloc::new();
    let mut m = DynMatrix::zeros_in(3, 4, alloc.clone()).unwrap();
    let values: [f64; 12] = [2.0, 1.0, -1.0, 8.0, -3.0, -1.0, 2.0, -11.0, -2.0, 1.0, 2.0, -3.0];
    for (i, &v) in values.iter().enumerate() {
        *m.at_mut(i / 4, i % 4).unwrap() = v;
    }
    assert_eq!(alloc.calls(), 1);

    m.solve();
    assert_eq!(alloc.calls(), 1);
    assert!((m[(0, 3)] - 2.0).abs() < 1e-12);
    assert!((m[(1, 3)] - 3.0).abs() < 1e-12);
    assert!((m[(2, 3)] + 1.0).abs() < 1e-12);
}

#[test]
fn refused_product_leaves_operands_intact() {
    let alloc = FailingAlloc::new(2);
    let mut a = DynMatrix::zeros_in(2, 2, alloc.clone()).unwrap();
    a.set_entry(0, 0, 1.0);
    let b = a.try_clone().unwrap();

    let err = a.checked_mul(&b).unwrap_err();
    assert!(matches!(err, MatrixError::Storage(ref e) if e.is_allocation_failure()));
    assert_eq!(a, b);
    assert_eq!(a[(0, 0)], 1.0);
}

#[test]
fn budget_bounds_dynamic_shapes() {
    let budget = Budget::with_max_bytes(8 * 16);
    assert!(DynMatrix::<f64, _>::zeros_in(4, 4, budget).is_ok());
    assert!(DynMatrix::<f64, _>::zeros_in(4, 5, budget).is_err());
}

// ── Property tests ──────────────────────────────────────────────

proptest! {
    #[test]
    fn backends_agree_on_rank(seed in any::<u64>()) {
        let mut fixed: Matrix<f64, 3, 5> = random_matrix(seed);
        let mut dynamic = DynMatrix::from_fixed(&fixed).unwrap();
        fixed.solve();
        dynamic.solve();
        prop_assert_eq!(fixed.rank(), dynamic.rank());
        prop_assert!(is_rref(&fixed));
    }

    #[test]
    fn pivots_strictly_increase(seed in any::<u64>()) {
        let mut m = random_dyn_matrix(5, 3, seed);
        m.make_ref();
        let pivots = pivot_columns(&m);
        prop_assert!(pivots.len() <= 3);
        prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(pivots.iter().enumerate().all(|(row, &col)| m[(row, col)] == 1.0));
    }
}
