//! Masked aggregation of absolute voxel intensities.
//!
//! The spatial feature needs, per component frame, the sum of |Z| within a
//! region (whole volume, or one of the fixed anatomical masks). The absolute
//! value is taken before summation so positive and negative map lobes do not
//! cancel. This matches the external-tool formulation
//! `mean_within_region * voxel_count_within_region`.

use crate::error::{AromaError, Result};
use crate::volume::{ComponentMaps, Mask};

/// Sum of absolute voxel values per component frame, restricted to an
/// optional mask (whole volume when `None`).
///
/// Errors on an empty map and on a mask whose grid differs from the maps'.
pub fn masked_sums(maps: &ComponentMaps, mask: Option<&Mask>) -> Result<Vec<f64>> {
    if maps.is_empty() {
        return Err(AromaError::EmptyInput("component maps"));
    }
    if let Some(mask) = mask {
        if mask.dims() != maps.dims() {
            return Err(AromaError::GridMismatch {
                expected: maps.dims(),
                actual: mask.dims(),
            });
        }
    }

    let sums = (0..maps.nframes())
        .map(|f| {
            let frame = maps.frame(f);
            match mask {
                Some(mask) => frame
                    .iter()
                    .zip(mask.as_slice())
                    .filter(|(_, &keep)| keep)
                    .map(|(&v, _)| v.abs())
                    .sum(),
                None => frame.iter().map(|&v| v.abs()).sum(),
            }
        })
        .collect();

    Ok(sums)
}
