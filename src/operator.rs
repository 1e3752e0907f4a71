//! This module defines the linear-operator seam between the Hankel kernel
//! and iterative consumers.
//!
//! Truncated SVD and Lanczos-style eigensolvers never need the entries of the
//! Hankel matrix; their fundamental operation is the matrix-vector product.
//! The [`LinearOperator`] trait formalizes that contract so the solvers can
//! be written against any object that can perform the action, and the
//! FFT-backed [`HankelOperator`] is just one implementation of it — a dense
//! matrix works as a drop-in reference for testing.
//!
//! The bidiagonalization pattern those solvers use alternates `A v` and
//! `Aᵀ w` products. Rather than building a second operator for the transpose
//! (both orientations already live inside [`HankelOperator`]),
//! [`HankelOperator::adjoint`] returns a borrowed view whose `apply` is the
//! transposed product.

use faer::{traits::ComplexField, Mat, MatRef};

use crate::hankel::HankelOperator;

/// Represents a linear operator that can be applied to a vector.
///
/// This trait provides an abstraction for the matrix-vector product, the
/// fundamental operation required by Krylov subspace methods. By depending on
/// this trait rather than a concrete matrix type, algorithms can be written
/// in a generic, "matrix-free" manner.
///
/// # Type Parameters
///
/// *   `T`: The scalar type, which must implement `ComplexField`. This trait
///     from `faer` provides the necessary arithmetic operations for `f32`,
///     `f64`, and their complex counterparts.
pub trait LinearOperator<T: ComplexField> {
    /// Returns the number of rows of the operator.
    fn nrows(&self) -> usize;

    /// Returns the number of columns of the operator.
    fn ncols(&self) -> usize;

    /// Applies the linear operator to a single-column matrix `rhs`.
    ///
    /// The implementation must return an owned matrix (`Mat<T>`) containing
    /// the result of the operation `A * rhs`.
    ///
    /// # Panics
    ///
    /// This method is expected to panic if the inner dimension of the operator
    /// does not match the number of rows of `rhs`, or if `rhs` has more than
    /// one column.
    fn apply(&self, rhs: MatRef<'_, T>) -> Mat<T>;
}

/// Copies a single-column view into a contiguous scratch vector and checks
/// the dimensions the trait contract promises to enforce.
fn column_to_vec(rhs: MatRef<'_, f64>, expected_rows: usize) -> Vec<f64> {
    assert_eq!(
        expected_rows,
        rhs.nrows(),
        "Dimension mismatch: operator columns ({}) do not match vector rows ({}).",
        expected_rows,
        rhs.nrows(),
    );
    assert_eq!(
        rhs.ncols(),
        1,
        "Expected a single-column right-hand side, got {} columns.",
        rhs.ncols(),
    );
    (0..rhs.nrows()).map(|i| rhs[(i, 0)]).collect()
}

/// The FFT-backed Hankel operator acts as H: a map from K-vectors to L-vectors.
impl LinearOperator<f64> for HankelOperator {
    #[inline]
    fn nrows(&self) -> usize {
        self.window()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.co_window()
    }

    fn apply(&self, rhs: MatRef<'_, f64>) -> Mat<f64> {
        let v = column_to_vec(rhs, self.co_window());

        // Dimensions were asserted above, so the validated multiply cannot
        // fail; go straight to the kernel.
        let mut out = vec![0.0; self.window()];
        self.apply_into(&mut out, &v, false);
        Mat::from_fn(out.len(), 1, |i, _| out[i])
    }
}

/// A borrowed transposed view of a [`HankelOperator`], acting as Hᵀ.
///
/// Created by [`HankelOperator::adjoint`]. H is real, so adjoint and
/// transpose coincide.
pub struct HankelAdjoint<'a>(&'a HankelOperator);

impl HankelOperator {
    /// Returns a view of this operator that applies Hᵀ instead of H.
    ///
    /// The view borrows the same precomputed state; no new plans or buffers
    /// are created.
    pub fn adjoint(&self) -> HankelAdjoint<'_> {
        HankelAdjoint(self)
    }
}

impl LinearOperator<f64> for HankelAdjoint<'_> {
    #[inline]
    fn nrows(&self) -> usize {
        self.0.co_window()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.0.window()
    }

    fn apply(&self, rhs: MatRef<'_, f64>) -> Mat<f64> {
        let v = column_to_vec(rhs, self.0.window());

        let mut out = vec![0.0; self.0.co_window()];
        self.0.apply_into(&mut out, &v, true);
        Mat::from_fn(out.len(), 1, |i, _| out[i])
    }
}

// Unit tests to verify the trait implementations against a dense reference.
#[cfg(test)]
mod tests {
    use super::*;

    fn dense_hankel(series: &[f64], window: usize) -> Mat<f64> {
        let k = series.len() - window + 1;
        Mat::from_fn(window, k, |i, j| series[i + j])
    }

    #[test]
    fn test_operator_matches_dense_product() {
        let series = [0.5, -1.0, 2.0, 4.0, -3.0, 1.5];
        let h = HankelOperator::build(&series, 4).unwrap();
        let dense = dense_hankel(&series, 4);

        let v = Mat::from_fn(h.ncols(), 1, |i, _| (i + 1) as f64);
        let expected = &dense * &v;

        let operator: &dyn LinearOperator<f64> = &h;
        let result = operator.apply(v.as_ref());

        assert_eq!(operator.nrows(), 4);
        assert_eq!(operator.ncols(), 3);
        assert!((&result - &expected).norm_l2() < 1e-10);
    }

    #[test]
    fn test_adjoint_matches_dense_transpose() {
        let series = [0.5, -1.0, 2.0, 4.0, -3.0, 1.5];
        let h = HankelOperator::build(&series, 4).unwrap();
        let dense = dense_hankel(&series, 4);

        let w = Mat::from_fn(h.nrows(), 1, |i, _| 1.0 - i as f64);
        let expected = dense.as_ref().transpose() * &w;

        let adjoint = h.adjoint();
        let result = adjoint.apply(w.as_ref());

        assert_eq!(adjoint.nrows(), 3);
        assert_eq!(adjoint.ncols(), 4);
        assert!((&result - &expected).norm_l2() < 1e-10);
    }

    #[test]
    #[should_panic(
        expected = "Dimension mismatch: operator columns (3) do not match vector rows (4)."
    )]
    fn test_dimension_mismatch_panic() {
        let series = [0.5, -1.0, 2.0, 4.0, -3.0, 1.5];
        let h = HankelOperator::build(&series, 4).unwrap();
        let v = Mat::from_fn(4, 1, |i, _| i as f64); // Incorrect dimension

        // This call should panic due to the assertion inside `apply`.
        let operator: &dyn LinearOperator<f64> = &h;
        operator.apply(v.as_ref());
    }
}
