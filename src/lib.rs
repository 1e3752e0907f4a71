//! Fast Hankel matrix-vector products for Singular Spectrum Analysis.
//!
//! This crate implements the performance-critical kernel of an SSA toolkit:
//! products `H · v` and `Hᵀ · w` against the Hankel (trajectory) matrix
//! H(S, L) with H[i][j] = S[i+j], computed without ever materializing H.
//! The matrix embeds into an N×N circulant (N = series length), whose
//! matrix-vector product is a circular convolution — diagonal in the Fourier
//! basis — so each product costs O(N log N) via the FFT instead of O(N·L).
//! This matters because truncated SVD / Lanczos-style iterative eigensolvers
//! issue hundreds of such products against the same operator.
//!
//! Transforms are planned once, at construction, with [`rustfft`]; every
//! subsequent product reuses the stored plans and the precomputed frequency
//! response of the circulant.
//!
//! ## Components
//!
//! **[`HankelOperator`]** ([`hankel`]): the public entry point. Built once
//! from a series and a window length, it owns one circulant embedding per
//! orientation (transposing a Hankel matrix swaps the roles of window L and
//! co-window K = N - L + 1) and serves repeated [`HankelOperator::multiply`]
//! calls.
//!
//! **[`circulant::CirculantOperator`]** ([`circulant`]): the low-level
//! kernel — circulant first-column layout, precomputed frequency response,
//! and the reverse/pad → forward FFT → pointwise multiply → inverse FFT →
//! truncate/rescale pipeline.
//!
//! **[`LinearOperator`]** ([`operator`]): the matrix-free seam through which
//! iterative solvers consume the operator, with [`HankelOperator::adjoint`]
//! providing the transposed view the `A v` / `Aᵀ w` bidiagonalization
//! pattern needs.
//!
//! ## Example Usage
//!
//! ```rust
//! use ssa_hankel::HankelOperator;
//!
//! // S = [1, 2, 3, 4, 5] with window 3 gives the 3x3 trajectory matrix
//! //   H = [[1, 2, 3],
//! //        [2, 3, 4],
//! //        [3, 4, 5]]
//! let series = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let h = HankelOperator::build(&series, 3).unwrap();
//! assert_eq!((h.window(), h.co_window()), (3, 3));
//!
//! // H · [1, 1, 1] sums the rows.
//! let y = h.multiply(&[1.0, 1.0, 1.0], false).unwrap();
//! for (got, want) in y.iter().zip([6.0, 9.0, 12.0]) {
//!     assert!((got - want).abs() < 1e-10);
//! }
//!
//! // Hᵀ · w takes a length-L vector and returns a length-K one.
//! let z = h.multiply(&[1.0, 0.0, 0.0], true).unwrap();
//! for (got, want) in z.iter().zip([1.0, 2.0, 3.0]) {
//!     assert!((got - want).abs() < 1e-10);
//! }
//!
//! // Mis-sized vectors are rejected without touching the operator.
//! assert!(h.multiply(&[1.0, 1.0], false).is_err());
//! ```
//!
//! ## Performance Characteristics
//!
//! Construction performs two FFT plans and one forward transform per
//! orientation; plan creation is not free, so operators should be built once
//! per (series, window) pair and reused. Products never mutate operator
//! state and use only per-call scratch, so concurrent `multiply` calls
//! through a shared reference are safe.

// Declare the modules that form the crate's API structure.
pub mod circulant;
pub mod error;
pub mod hankel;
pub mod operator;

// Re-export the main API for convenient access.
pub use error::HankelError;
pub use hankel::HankelOperator;
pub use operator::{HankelAdjoint, LinearOperator};
