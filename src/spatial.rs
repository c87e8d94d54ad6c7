//! Edge and CSF fraction features.
//!
//! For each component the fraction of its (absolute) spatial energy at the
//! brain edges / outside the brain and within cerebrospinal fluid is
//! computed from the thresholded Z-maps and three fixed anatomical masks in
//! template space. The masks are reference artifacts shipped with the
//! pipeline, not derived from subject data.

use crate::aggregate::masked_sums;
use crate::error::Result;
use crate::volume::{ComponentMaps, Mask};

/// The three fixed anatomical masks, all on the component maps' grid.
#[derive(Debug, Clone)]
pub struct AnatomicalMasks {
    /// Cerebrospinal fluid.
    pub csf: Mask,
    /// Brain edge.
    pub edge: Mask,
    /// Outside the brain.
    pub out: Mask,
}

/// Per-component spatial feature scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialScores {
    /// Fraction of spatial energy at brain edges or outside the brain,
    /// relative to the non-CSF energy.
    pub edge_fraction: Vec<f64>,
    /// Fraction of spatial energy within CSF.
    pub csf_fraction: Vec<f64>,
}

/// Edge and CSF fraction scores for every component frame.
///
/// `csf_fraction = csf / total` (0 when the component carries no energy) and
/// `edge_fraction = (outside + edge) / (total - csf)`. A component whose
/// energy sits entirely within CSF has no non-CSF denominator; its edge
/// fraction saturates to 0 while the CSF fraction is 1. Saturation can mask
/// a degenerate decomposition, so each occurrence is logged.
pub fn feature_spatial(maps: &ComponentMaps, masks: &AnatomicalMasks) -> Result<SpatialScores> {
    log::info!(
        "extracting edge and CSF fraction features for {} components",
        maps.nframes()
    );

    let total_sums = masked_sums(maps, None)?;
    let csf_sums = masked_sums(maps, Some(&masks.csf))?;
    let edge_sums = masked_sums(maps, Some(&masks.edge))?;
    let outside_sums = masked_sums(maps, Some(&masks.out))?;

    let n = maps.nframes();
    let mut edge_fraction = vec![0.0; n];
    let mut csf_fraction = vec![0.0; n];
    for i in 0..n {
        let total = total_sums[i];
        let csf = csf_sums[i];
        if total > 0.0 {
            csf_fraction[i] = csf / total;
        }
        if total > csf {
            edge_fraction[i] = (outside_sums[i] + edge_sums[i]) / (total - csf);
        } else {
            log::warn!(
                "component {}: total energy {} does not exceed CSF energy {}, \
                 edge fraction saturated to 0",
                i + 1,
                total,
                csf
            );
        }
    }

    Ok(SpatialScores {
        edge_fraction,
        csf_fraction,
    })
}
