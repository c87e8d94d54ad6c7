//! High-frequency content feature.
//!
//! Works on the frequency-domain mixing matrix (F x N non-negative spectral
//! power, one column per component). Row `i` is taken to sit at frequency
//! `nyquist * (i + 1) / F`, i.e. the first row is the lowest non-zero bin
//! and the last row is exactly Nyquist. The original implementation carries
//! an explicit doubt about this off-by-one; the mapping is preserved as
//! documented rather than corrected (see the bin-mapping test).
//!
//! The score per component is the normalized frequency below which half of
//! the spectral power between 0.01 Hz and Nyquist lies.

use crate::error::{AromaError, Result};
use crate::matrix::Matrix;

/// Only frequencies above this cutoff (in Hz) contribute to the feature.
pub const LOW_FREQUENCY_CUTOFF_HZ: f64 = 0.01;

/// High-frequency content score per component.
///
/// `ftmix` is F x N spectral power; `t_r` is the repetition time in seconds
/// and must lie strictly between 0.5 and 10.
pub fn feature_frequency(ftmix: &Matrix, t_r: f64) -> Result<Vec<f64>> {
    if !(t_r > 0.5 && t_r < 10.0) {
        return Err(AromaError::InvalidRepetitionTime(t_r));
    }
    if ftmix.is_empty() {
        return Err(AromaError::EmptyInput("frequency mixing matrix"));
    }

    log::info!(
        "extracting high-frequency content feature for {} components",
        ftmix.ncols()
    );

    let nbins = ftmix.nrows();
    let nyquist = 1.0 / (2.0 * t_r);

    // Rows above the cutoff, with their frequencies rescaled onto [0, 1]
    // (cutoff -> 0, Nyquist -> 1).
    let kept: Vec<(usize, f64)> = (0..nbins)
        .filter_map(|i| {
            let f = nyquist * (i + 1) as f64 / nbins as f64;
            (f > LOW_FREQUENCY_CUTOFF_HZ)
                .then(|| (i, (f - LOW_FREQUENCY_CUTOFF_HZ) / (nyquist - LOW_FREQUENCY_CUTOFF_HZ)))
        })
        .collect();
    if kept.is_empty() {
        return Err(AromaError::invalid_input(format!(
            "no frequency bins above {LOW_FREQUENCY_CUTOFF_HZ} Hz"
        )));
    }

    (0..ftmix.ncols())
        .map(|comp| {
            let col = ftmix.column(comp);
            let total: f64 = kept.iter().map(|&(i, _)| col[i]).sum();
            if total <= 0.0 {
                return Err(AromaError::ZeroPower { component: comp });
            }

            // Index whose cumulative power fraction is closest to 0.5; a
            // left-to-right strict-less scan resolves ties to the lowest bin.
            let mut cumsum = 0.0;
            let mut best_dist = f64::INFINITY;
            let mut best_freq = 0.0;
            for &(i, norm_freq) in &kept {
                cumsum += col[i];
                let dist = (cumsum / total - 0.5).powi(2);
                if dist < best_dist {
                    best_dist = dist;
                    best_freq = norm_freq;
                }
            }
            Ok(best_freq)
        })
        .collect()
}
