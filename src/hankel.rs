//! Matrix-free Hankel operator with fast products for both orientations.
//!
//! A Hankel matrix H(S, L) (H[i][j] = S[i+j], L rows, K = N - L + 1 columns)
//! and its transpose share the same circulant embedding: transposition is
//! equivalent to swapping the roles of window and co-window. The operator
//! therefore owns two [`CirculantOperator`]s built from the same series, one
//! per orientation, and dispatches every product to the matching embedding.
//!
//! Construction is the expensive step (two transform plans plus one forward
//! transform per orientation); it is meant to happen once per (series,
//! window) pair, after which the operator serves arbitrarily many products
//! from an iterative eigensolver without further planning or mutation.

use crate::circulant::CirculantOperator;
use crate::error::{HankelError, HankelErrorKind};

/// A Hankel matrix H(S, L), represented implicitly by the circulant
/// embeddings of the matrix and its transpose.
///
/// Immutable once built; see [`crate::circulant`] for why concurrent
/// [`HankelOperator::multiply`] calls through a shared reference are safe.
///
/// # Example
///
/// ```rust
/// use ssa_hankel::HankelOperator;
///
/// let series = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let h = HankelOperator::build(&series, 3).unwrap();
///
/// // H = [[1, 2, 3], [2, 3, 4], [3, 4, 5]]
/// let y = h.multiply(&[1.0, 0.0, 0.0], false).unwrap();
/// assert!((y[0] - 1.0).abs() < 1e-10);
/// assert!((y[1] - 2.0).abs() < 1e-10);
/// assert!((y[2] - 3.0).abs() < 1e-10);
/// ```
pub struct HankelOperator {
    /// Embedding of H itself: window = L.
    normal: CirculantOperator,
    /// Embedding of Hᵀ: window = K = N - L + 1.
    transposed: CirculantOperator,
}

impl std::fmt::Debug for HankelOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HankelOperator")
            .field("normal", &self.normal)
            .field("transposed", &self.transposed)
            .finish()
    }
}

impl HankelOperator {
    /// Builds the operator for the Hankel matrix with `window` rows over
    /// `series`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-window error if `window` is zero or exceeds the
    /// series length. The check runs before either circulant embedding is
    /// built, so a failed construction allocates nothing.
    pub fn build(series: &[f64], window: usize) -> Result<Self, HankelError> {
        let n = series.len();
        if window < 1 || window > n {
            return Err(HankelErrorKind::InvalidWindow {
                window,
                series_len: n,
            }
            .into());
        }

        Ok(Self {
            normal: CirculantOperator::build(series, window),
            transposed: CirculantOperator::build(series, n - window + 1),
        })
    }

    /// Computes `H · v` (or `Hᵀ · v` when `transposed` is true), returning a
    /// freshly allocated vector of length [`Self::window`] (respectively
    /// [`Self::co_window`]).
    ///
    /// Each call is independent: the operator is never mutated, so repeated
    /// calls with the same input return identical results.
    ///
    /// # Errors
    ///
    /// Returns a length-mismatch error if `v.len() + window - 1 != N` for the
    /// selected orientation. Nothing is written or allocated in that case and
    /// the operator remains usable.
    pub fn multiply(&self, v: &[f64], transposed: bool) -> Result<Vec<f64>, HankelError> {
        let circ = self.orientation(transposed);

        let expected = circ.length() + 1 - circ.window();
        if v.len() != expected {
            return Err(HankelErrorKind::LengthMismatch {
                expected,
                actual: v.len(),
            }
            .into());
        }

        let mut out = vec![0.0; circ.window()];
        circ.apply(&mut out, v);
        Ok(out)
    }

    /// Internal entry point for callers that have already validated the
    /// dimensions (the [`crate::operator::LinearOperator`] impls assert them).
    pub(crate) fn apply_into(&self, out: &mut [f64], v: &[f64], transposed: bool) {
        self.orientation(transposed).apply(out, v);
    }

    #[inline]
    fn orientation(&self, transposed: bool) -> &CirculantOperator {
        if transposed {
            &self.transposed
        } else {
            &self.normal
        }
    }

    /// Window length L: the number of rows of H.
    #[inline]
    pub fn window(&self) -> usize {
        self.normal.window()
    }

    /// Co-window K = N - L + 1: the number of columns of H.
    #[inline]
    pub fn co_window(&self) -> usize {
        self.transposed.window()
    }

    /// Length N of the series the operator was built from.
    #[inline]
    pub fn series_len(&self) -> usize {
        self.normal.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_zero_window() {
        let series = [1.0, 2.0, 3.0];
        let err = HankelOperator::build(&series, 0).unwrap_err();
        assert_eq!(
            err,
            HankelError::from(HankelErrorKind::InvalidWindow {
                window: 0,
                series_len: 3,
            })
        );
    }

    #[test]
    fn test_build_rejects_oversized_window() {
        let series = [1.0, 2.0, 3.0];
        let err = HankelOperator::build(&series, 4).unwrap_err();
        assert_eq!(
            err,
            HankelError::from(HankelErrorKind::InvalidWindow {
                window: 4,
                series_len: 3,
            })
        );
    }

    #[test]
    fn test_build_accepts_boundary_windows() {
        let series = [1.0, 2.0, 3.0];

        // L = 1: a single-row Hankel matrix (the series itself).
        let h = HankelOperator::build(&series, 1).unwrap();
        assert_eq!(h.window(), 1);
        assert_eq!(h.co_window(), 3);

        // L = N: a single-column Hankel matrix.
        let h = HankelOperator::build(&series, 3).unwrap();
        assert_eq!(h.window(), 3);
        assert_eq!(h.co_window(), 1);
    }

    #[test]
    fn test_multiply_rejects_mismatched_vector() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let h = HankelOperator::build(&series, 3).unwrap();

        // K = 3, so a length-4 vector must be rejected.
        let err = h.multiply(&[1.0; 4], false).unwrap_err();
        assert_eq!(
            err,
            HankelError::from(HankelErrorKind::LengthMismatch {
                expected: 3,
                actual: 4,
            })
        );

        // The transposed orientation expects length L = 3.
        let err = h.multiply(&[1.0; 2], true).unwrap_err();
        assert_eq!(
            err,
            HankelError::from(HankelErrorKind::LengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_operator_usable_after_rejected_call() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let h = HankelOperator::build(&series, 3).unwrap();

        assert!(h.multiply(&[1.0; 7], false).is_err());

        let y = h.multiply(&[1.0, 0.0, 0.0], false).unwrap();
        for (got, want) in y.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transpose_matches_dense_transpose() {
        // Hᵀ for S = [1..5], L = 3 is the same 3x3 symmetric matrix, so the
        // concrete scenario must agree across orientations.
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let h = HankelOperator::build(&series, 3).unwrap();

        let y = h.multiply(&[1.0, 0.0, 0.0], true).unwrap();
        for (got, want) in y.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-12);
        }
    }
}
