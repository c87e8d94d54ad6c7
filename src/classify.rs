//! Motion / non-motion classification of components.
//!
//! A fixed linear discriminant over the maximum RP correlation and edge
//! fraction scores, with hard overrides on the CSF fraction and
//! high-frequency content. The discriminant weights are calibration
//! constants from an external validation study and are deliberately not
//! runtime-configurable, so classification stays reproducible across
//! implementations.

use crate::error::{AromaError, Result};

/// Calibrated hyperplane: intercept, maximum RP correlation weight, edge
/// fraction weight.
pub const HYPERPLANE: [f64; 3] = [-19.9751070082159, 9.95127547670627, 24.8333160239175];

/// A component with more than this CSF fraction is motion regardless of the
/// linear score.
pub const CSF_THRESHOLD: f64 = 0.10;

/// A component with more than this high-frequency content is motion
/// regardless of the linear score.
pub const HFC_THRESHOLD: f64 = 0.35;

/// The four feature score vectors for one component set, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScores {
    max_rp_correl: Vec<f64>,
    edge_fraction: Vec<f64>,
    hfc: Vec<f64>,
    csf_fraction: Vec<f64>,
}

impl FeatureScores {
    /// Bundle the four score vectors; all must have equal length.
    pub fn new(
        max_rp_correl: Vec<f64>,
        edge_fraction: Vec<f64>,
        hfc: Vec<f64>,
        csf_fraction: Vec<f64>,
    ) -> Result<Self> {
        let n = max_rp_correl.len();
        if edge_fraction.len() != n || hfc.len() != n || csf_fraction.len() != n {
            return Err(AromaError::invalid_input(format!(
                "feature vectors have unequal lengths: {} / {} / {} / {}",
                n,
                edge_fraction.len(),
                hfc.len(),
                csf_fraction.len()
            )));
        }
        Ok(Self {
            max_rp_correl,
            edge_fraction,
            hfc,
            csf_fraction,
        })
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.max_rp_correl.len()
    }

    /// Whether the component set is empty.
    pub fn is_empty(&self) -> bool {
        self.max_rp_correl.is_empty()
    }

    /// Maximum RP correlation scores.
    pub fn max_rp_correl(&self) -> &[f64] {
        &self.max_rp_correl
    }

    /// Edge fraction scores.
    pub fn edge_fraction(&self) -> &[f64] {
        &self.edge_fraction
    }

    /// High-frequency content scores.
    pub fn hfc(&self) -> &[f64] {
        &self.hfc
    }

    /// CSF fraction scores.
    pub fn csf_fraction(&self) -> &[f64] {
        &self.csf_fraction
    }
}

/// Linear discriminant projection of one component's scores.
pub fn projection(max_rp_correl: f64, edge_fraction: f64) -> f64 {
    HYPERPLANE[0] + HYPERPLANE[1] * max_rp_correl + HYPERPLANE[2] * edge_fraction
}

/// Indices (0-based, ascending, unique) of the components classified as
/// motion: positive projection, or CSF fraction above [`CSF_THRESHOLD`], or
/// high-frequency content above [`HFC_THRESHOLD`].
pub fn classify(scores: &FeatureScores) -> Vec<usize> {
    (0..scores.len())
        .filter(|&i| {
            projection(scores.max_rp_correl[i], scores.edge_fraction[i]) > 0.0
                || scores.csf_fraction[i] > CSF_THRESHOLD
                || scores.hfc[i] > HFC_THRESHOLD
        })
        .collect()
}
