//! Property-based tests for matrix algebra.
//!
//! Entries are small integers stored as `f64` so every identity holds well
//! inside the comparison tolerance.

use linmat_core::prelude::*;
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn arb_entries(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop_vec(-5i32..=5, len).prop_map(|v| v.into_iter().map(f64::from).collect())
}

fn arb_matrix(rows: usize, columns: usize) -> impl Strategy<Value = Matrix<f64>> {
    arb_entries(rows * columns)
        .prop_map(move |data| Matrix::from_vec(rows, columns, data).unwrap())
}

fn arb_square(max: usize) -> impl Strategy<Value = Matrix<f64>> {
    (1..=max).prop_flat_map(|n| arb_matrix(n, n))
}

/// Square matrix whose last row is an integer multiple of its first.
fn arb_singular() -> impl Strategy<Value = Matrix<f64>> {
    (2..=4usize, -2i32..=2).prop_flat_map(|(n, k)| {
        arb_matrix(n, n).prop_map(move |mut m| {
            for j in 0..n {
                m[(n - 1, j)] = m[(0, j)] * f64::from(k);
            }
            m
        })
    })
}

/// Three matrices sharing one random shape.
fn arb_same_shape_triple() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Matrix<f64>)> {
    (1..=4usize, 1..=4usize)
        .prop_flat_map(|(r, c)| (arb_matrix(r, c), arb_matrix(r, c), arb_matrix(r, c)))
}

/// An `r x k` and a `k x c` matrix.
fn arb_product_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (1..=4usize, 1..=4usize, 1..=4usize)
        .prop_flat_map(|(r, k, c)| (arb_matrix(r, k), arb_matrix(k, c)))
}

fn det_of(m: &Matrix<f64>) -> f64 {
    m.det().unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn addition_is_associative_and_commutative((a, b, c) in arb_same_shape_triple()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn transpose_reverses_products((a, b) in arb_product_pair()) {
        let lhs = (&a * &b).transpose();
        let rhs = &b.transpose() * &a.transpose();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn transpose_preserves_determinant(a in arb_square(4)) {
        let d = det_of(&a);
        let dt = det_of(&a.transpose());
        prop_assert!((d - dt).abs() <= 1e-9 * (1.0 + d.abs()), "det {} vs {}", d, dt);
    }

    #[test]
    fn inverse_recovers_identity(a in arb_square(3)) {
        prop_assume!(det_of(&a).abs() >= 1.0);
        let inv = a.invert().unwrap();
        let eye = Matrix::<f64>::identity(a.rows()).unwrap();
        prop_assert_eq!(&a * &inv, eye.clone());
        prop_assert_eq!(&inv * &a, eye);
    }

    #[test]
    fn inverse_is_an_involution(a in arb_square(3)) {
        prop_assume!(det_of(&a).abs() >= 1.0);
        let back = a.invert().unwrap().invert().unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn rank_survives_invertible_left_factor(
        (p, a) in (1..=4usize).prop_flat_map(|c| (arb_matrix(3, 3), arb_matrix(3, c)))
    ) {
        prop_assume!(det_of(&p).abs() >= 1.0);
        prop_assert_eq!((&p * &a).rank(), a.rank());
    }

    #[test]
    fn forward_elimination_yields_step_form(a in (1..=4usize, 1..=4usize)
        .prop_flat_map(|(r, c)| arb_matrix(r, c)))
    {
        let r = a.gauss_forward();
        prop_assert!(r.is_step_form());
        prop_assert!(r.gauss_back().is_ok());
        prop_assert_eq!(r.rank(), a.rank());
    }

    #[test]
    fn singular_matrices_have_zero_determinant(a in arb_singular()) {
        prop_assert!(a.rank() < a.rows());
        prop_assert_eq!(det_of(&a), 0.0);
        prop_assert_eq!(a.invert().unwrap_err(), CoreError::SingularMatrix);
    }
}
