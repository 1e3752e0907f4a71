//! Circulant embedding of a Hankel operator and its FFT-based multiply.
//!
//! ** NOTE: We recommend using the high-level [`crate::hankel::HankelOperator`]
//! instead. This module is the low-level kernel and relies on its caller to
//! have validated all dimensions.
//!
//! A Hankel matrix H(S, L) built from a length-N series embeds into an N×N
//! circulant matrix, and a circulant matrix-vector product is a circular
//! convolution: diagonal in the Fourier basis. The multiply therefore costs
//! two length-N transforms and a pointwise complex product, O(N log N),
//! instead of the O(N·L) dense product.
//!
//! The frequency response of the circulant (the DFT of its first column) is
//! computed once at construction and reused by every application, as are the
//! forward and inverse transform plans. Planning is not free; it must never
//! happen per call.

use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// The circulant embedding of one orientation of a Hankel operator.
///
/// Holds the precomputed frequency response of the circulant's first column
/// (in the real-input half-spectrum convention: N/2 + 1 coefficients) together
/// with forward and inverse transform plans sized for the embedding length N.
///
/// Immutable after construction. [`CirculantOperator::apply`] only reads the
/// stored state and works on per-call scratch buffers, so concurrent
/// applications through a shared reference are sound: `rustfft` plans are
/// `Send + Sync`, and `process` allocates its own scratch.
pub struct CirculantOperator {
    /// Number of rows (L) of the corresponding Hankel matrix.
    window: usize,
    /// Size of the circulant embedding; equals the original series length N.
    length: usize,
    /// DFT of the circulant's first column, bins 0..=N/2.
    freq_response: Vec<Complex<f64>>,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl std::fmt::Debug for CirculantOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CirculantOperator")
            .field("window", &self.window)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl CirculantOperator {
    /// Builds the circulant embedding for the Hankel matrix with `window`
    /// rows over `series`.
    ///
    /// The caller must guarantee `1 <= window <= series.len()`;
    /// [`crate::hankel::HankelOperator::build`] enforces this.
    pub fn build(series: &[f64], window: usize) -> Self {
        let n = series.len();
        let l = window;
        let k = n - l + 1;
        debug_assert!(l >= 1 && l <= n);

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(n);
        let inverse = planner.plan_fft_inverse(n);

        // First column of the circulant embedding: the trailing L-window of
        // the series, then the leading K-1 elements. A cyclic shift of this
        // column by (K-1) aligns entry m with series[m], which is exactly
        // what makes the circular convolution below reproduce H[i][j] = S[i+j].
        let mut circ = vec![Complex::new(0.0, 0.0); n];
        for (m, slot) in circ.iter_mut().take(l).enumerate() {
            *slot = Complex::new(series[k - 1 + m], 0.0);
        }
        for (j, &head) in series.iter().take(k - 1).enumerate() {
            circ[l + j] = Complex::new(head, 0.0);
        }

        forward.process(&mut circ);
        // The column is real, so its spectrum is Hermitian; only the lower
        // half carries information.
        circ.truncate(n / 2 + 1);

        Self {
            window: l,
            length: n,
            freq_response: circ,
            forward,
            inverse,
        }
    }

    /// Multiplies the embedded Hankel matrix by `v`, writing the `window`
    /// results into `out`.
    ///
    /// The caller must guarantee `v.len() + window - 1 == length` and
    /// `out.len() == window`; [`crate::hankel::HankelOperator::multiply`]
    /// enforces this. Does not mutate the operator.
    pub fn apply(&self, out: &mut [f64], v: &[f64]) {
        let n = self.length;
        let k = v.len();
        debug_assert_eq!(k + self.window - 1, n);
        debug_assert_eq!(out.len(), self.window);

        // Reversed input, zero-padded to the embedding length.
        let mut buf = vec![Complex::new(0.0, 0.0); n];
        for (i, slot) in buf.iter_mut().take(k).enumerate() {
            *slot = Complex::new(v[k - 1 - i], 0.0);
        }

        self.forward.process(&mut buf);

        // Pointwise product with the precomputed response on the lower half.
        for (bin, response) in buf.iter_mut().zip(&self.freq_response) {
            *bin *= *response;
        }

        // Both factors are Hermitian spectra, so the product is too; restore
        // the upper bins from the lower half so the inverse transform is real.
        let max_bin = if n % 2 == 0 { n / 2 - 1 } else { n / 2 };
        for bin in 1..=max_bin {
            buf[n - bin] = buf[bin].conj();
        }

        self.inverse.process(&mut buf);

        // rustfft leaves the forward/inverse pair unnormalized.
        let scale = 1.0 / n as f64;
        for (dst, src) in out.iter_mut().zip(&buf) {
            *dst = src.re * scale;
        }
    }

    /// Number of rows (L) of the embedded Hankel matrix.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Size N of the circulant embedding (the original series length).
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // H(S, 3) for S = [1, 2, 3, 4, 5] is
    //   [1 2 3]
    //   [2 3 4]
    //   [3 4 5]
    // so applying to the first canonical basis vector reads off column 0.
    #[test]
    fn test_apply_reproduces_first_column() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let circ = CirculantOperator::build(&series, 3);
        assert_eq!(circ.window(), 3);
        assert_eq!(circ.length(), 5);

        let mut out = [0.0; 3];
        circ.apply(&mut out, &[1.0, 0.0, 0.0]);
        for (got, want) in out.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_apply_full_row_sums() {
        // Multiplying by the all-ones vector sums each row of H.
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let circ = CirculantOperator::build(&series, 3);

        let mut out = [0.0; 3];
        circ.apply(&mut out, &[1.0, 1.0, 1.0]);
        for (got, want) in out.iter().zip([6.0, 9.0, 12.0]) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_even_embedding_length() {
        // N = 6 exercises the Nyquist bin in the Hermitian reconstruction.
        let series = [2.0, -1.0, 0.5, 3.0, -2.0, 1.0];
        let l = 4;
        let k = series.len() - l + 1;
        let circ = CirculantOperator::build(&series, l);

        let v = [0.25, -1.5, 2.0];
        let mut out = [0.0; 4];
        circ.apply(&mut out, &v);

        for i in 0..l {
            let want: f64 = (0..k).map(|j| series[i + j] * v[j]).sum();
            assert!((out[i] - want).abs() < 1e-10, "row {i}: {} vs {want}", out[i]);
        }
    }

    #[test]
    fn test_degenerate_single_point() {
        let series = [7.0];
        let circ = CirculantOperator::build(&series, 1);
        let mut out = [0.0; 1];
        circ.apply(&mut out, &[2.0]);
        assert!((out[0] - 14.0).abs() < 1e-12);
    }
}
