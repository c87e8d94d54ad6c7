//! Maximum realignment-parameter correlation feature.
//!
//! Each component time course is correlated against a 36-column model built
//! from the six realignment parameters: the raw parameters, their first
//! differences, and one-sample forward- and backward-shifted copies of that
//! 12-column combination. Correlations are taken both on raw and on squared
//! values, so the 72 correlation columns capture linear and magnitude-driven
//! coupling to head motion.
//!
//! For robustness the correlation is repeated over 1000 random subsamples of
//! 90% of the time points (drawn without replacement); the feature score per
//! component is the mean over trials of the per-trial maximum absolute
//! correlation. Every trial seeds its own generator from the base seed, so a
//! fixed seed gives bit-identical scores whether or not the trials run in
//! parallel.

use crate::correlation::cross_correlation;
use crate::error::{AromaError, Result};
use crate::iter_maybe_parallel;
use crate::matrix::Matrix;
use rand::prelude::*;
#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator;

/// Number of random-subsample trials.
pub const N_TRIALS: usize = 1000;

/// Fraction of time points drawn (without replacement) per trial.
pub const SUBSAMPLE_FRACTION: f64 = 0.9;

/// Below this many time points the 90% subsample is degenerate.
const MIN_TIME_POINTS: usize = 10;

/// Build the 36-column realignment-parameter model from a T x 6 matrix of
/// motion parameters (three translations, three rotations).
///
/// Columns 0..6 are the raw parameters, 6..12 their first differences with
/// the first row zero-padded, 12..24 the one-sample forward shift of the
/// first 12 columns (first row zero-padded), and 24..36 the backward shift
/// (last row zero-padded).
pub fn motion_model(rparams: &Matrix) -> Result<Matrix> {
    if rparams.ncols() != 6 {
        return Err(AromaError::MotionParamColumns {
            actual: rparams.ncols(),
        });
    }
    let t = rparams.nrows();
    if t == 0 {
        return Err(AromaError::EmptyInput("realignment parameters"));
    }

    let mut data = vec![0.0; t * 36];

    // Raw parameters and their first differences (first row stays zero).
    for j in 0..6 {
        let col = rparams.column(j);
        for i in 0..t {
            data[i + j * t] = col[i];
            if i > 0 {
                data[i + (j + 6) * t] = col[i] - col[i - 1];
            }
        }
    }

    // One-sample shifts of the 12-column combination.
    for j in 0..12 {
        for i in 1..t {
            data[i + (j + 12) * t] = data[(i - 1) + j * t];
        }
        for i in 0..t - 1 {
            data[i + (j + 24) * t] = data[(i + 1) + j * t];
        }
    }

    Matrix::from_column_major(data, t, 36)
}

/// Maximum robust correlation of each component time course with the
/// realignment-parameter model.
///
/// `mix` is T x N (one column per component), `rparams` T x 6, row-aligned.
/// With `seed` fixed the returned vector is identical across runs; unseeded
/// runs draw a base seed from entropy and are only statistically
/// reproducible.
pub fn feature_time_series(mix: &Matrix, rparams: &Matrix, seed: Option<u64>) -> Result<Vec<f64>> {
    if mix.nrows() != rparams.nrows() {
        return Err(AromaError::RowCountMismatch {
            left: mix.nrows(),
            right: rparams.nrows(),
        });
    }
    if mix.nrows() < MIN_TIME_POINTS {
        return Err(AromaError::TooFewTimePoints {
            min: MIN_TIME_POINTS,
            actual: mix.nrows(),
        });
    }

    log::info!(
        "extracting maximum RP correlation feature for {} components over {} trials",
        mix.ncols(),
        N_TRIALS
    );

    let model = motion_model(rparams)?;
    let t = mix.nrows();
    let n = mix.ncols();
    let nchosen = (SUBSAMPLE_FRACTION * t as f64).round() as usize;
    let base_seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    // One per-component maximum per trial; trial order is fixed by index so
    // the final mean is identical in parallel and sequential runs.
    let trial_maxima: Vec<Vec<f64>> = iter_maybe_parallel!(0..N_TRIALS)
        .map(|trial| -> Result<Vec<f64>> {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64));
            let rows = rand::seq::index::sample(&mut rng, t, nchosen).into_vec();

            let mix_sub = mix.select_rows(&rows);
            let model_sub = model.select_rows(&rows);
            let correl = cross_correlation(&mix_sub, &model_sub)?;
            let correl_sq = cross_correlation(
                &mix_sub.map(|v| v * v),
                &model_sub.map(|v| v * v),
            )?;

            let maxima = (0..n)
                .map(|comp| {
                    let mut max_abs: f64 = 0.0;
                    for j in 0..model.ncols() {
                        max_abs = max_abs.max(correl[(comp, j)].abs());
                        max_abs = max_abs.max(correl_sq[(comp, j)].abs());
                    }
                    max_abs
                })
                .collect();
            Ok(maxima)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut scores = vec![0.0; n];
    for maxima in &trial_maxima {
        for (score, &m) in scores.iter_mut().zip(maxima) {
            *score += m;
        }
    }
    for score in &mut scores {
        *score /= N_TRIALS as f64;
    }
    Ok(scores)
}
