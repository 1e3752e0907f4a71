//! Experiment runner for the FFT-vs-dense multiply crossover analysis.
//!
//! This executable sweeps a grid of series lengths, timing the FFT-backed
//! Hankel product against the naive O(N·L) dense product at each size, and
//! emits one CSV row per configuration on stdout. It also cross-checks the
//! two results against each other so a layout regression in the circulant
//! construction cannot go unnoticed during benchmarking.
use anyhow::{ensure, Result};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use ssa_hankel::HankelOperator;
use std::time::Instant;

/// Command-line arguments for the crossover experiment.
#[derive(Parser, Debug)]
#[clap(
    name = "crossover",
    about = "Times the FFT-backed Hankel multiply against the naive dense product over growing series lengths."
)]
struct CrossoverArgs {
    /// Smallest series length in the sweep (doubled until `n_end`).
    #[clap(long, default_value_t = 64)]
    n_start: usize,

    /// Largest series length in the sweep.
    #[clap(long, default_value_t = 16384)]
    n_end: usize,

    /// Number of repetitions per configuration; the reported time is the mean.
    #[clap(long, default_value_t = 25)]
    reps: usize,

    /// Seed for the random series and vectors, for reproducible runs.
    #[clap(long, default_value_t = 42)]
    seed: u64,
}

/// Reference implementation: the dense O(N·L) Hankel product, computed
/// directly from the series without forming the matrix rows.
fn dense_multiply(series: &[f64], window: usize, v: &[f64]) -> Vec<f64> {
    (0..window)
        .map(|i| v.iter().enumerate().map(|(j, &x)| series[i + j] * x).sum())
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = CrossoverArgs::parse();
    ensure!(args.n_start >= 2, "n_start must be at least 2");
    ensure!(args.reps >= 1, "reps must be at least 1");

    let mut rng = StdRng::seed_from_u64(args.seed);

    log::info!(
        "Starting crossover sweep: n in [{}, {}], {} reps per point",
        args.n_start,
        args.n_end,
        args.reps
    );
    println!("n,l,fft_us,dense_us,max_abs_diff");

    let mut n = args.n_start;
    while n <= args.n_end {
        // The SSA convention L = N/2 maximizes the trajectory matrix rank,
        // and is also the worst case for the dense product.
        let l = n / 2;
        let k = n - l + 1;

        let series: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
        let v: Vec<f64> = (0..k).map(|_| rng.random::<f64>() - 0.5).collect();

        let build_start = Instant::now();
        let h = HankelOperator::build(&series, l)?;
        let build_time = build_start.elapsed();

        let fft_start = Instant::now();
        let mut fft_result = Vec::new();
        for _ in 0..args.reps {
            fft_result = h.multiply(&v, false)?;
        }
        let fft_us = fft_start.elapsed().as_secs_f64() * 1e6 / args.reps as f64;

        let dense_start = Instant::now();
        let mut dense_result = Vec::new();
        for _ in 0..args.reps {
            dense_result = dense_multiply(&series, l, &v);
        }
        let dense_us = dense_start.elapsed().as_secs_f64() * 1e6 / args.reps as f64;

        let max_abs_diff = fft_result
            .iter()
            .zip(&dense_result)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f64, f64::max);
        ensure!(
            max_abs_diff < 1e-6 * n as f64,
            "FFT and dense products disagree at n = {n} (max abs diff {max_abs_diff:e})"
        );

        log::info!(
            "n = {n:>6}: build {:?}, fft {fft_us:.2} us/call, dense {dense_us:.2} us/call",
            build_time
        );
        println!("{n},{l},{fft_us:.3},{dense_us:.3},{max_abs_diff:e}");

        n *= 2;
    }

    Ok(())
}
