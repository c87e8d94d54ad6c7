//! Planning of regression-filter invocations.
//!
//! The external regression-filter tool physically removes the selected
//! components from the original data; this module only decides which
//! invocations it needs. An empty motion set still issues the request (the
//! filter then degenerates to a copy) and the plan records an explicit
//! notice instead of silently producing one.

use std::str::FromStr;

/// Requested denoising strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenoiseMode {
    /// Classification only; no filtering request is issued.
    None,
    /// Regression removal keeping variance shared with retained components.
    NonAggressive,
    /// Regression removal of all variance of the flagged components.
    Aggressive,
    /// Both strategies, run independently on the same index set.
    Both,
}

impl FromStr for DenoiseMode {
    type Err = crate::AromaError;

    /// Parses the interchange tokens used by the original pipeline:
    /// `no`, `nonaggr`, `aggr`, `both`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" | "none" => Ok(Self::None),
            "nonaggr" => Ok(Self::NonAggressive),
            "aggr" => Ok(Self::Aggressive),
            "both" => Ok(Self::Both),
            other => Err(crate::AromaError::invalid_input(format!(
                "unknown denoise mode {other:?}"
            ))),
        }
    }
}

/// One invocation of the external regression filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    /// 0-based component indices to regress out.
    pub indices: Vec<usize>,
    /// Whether to remove all variance of the flagged components.
    pub aggressive: bool,
    /// Basename of the output artifact this request produces.
    pub output_label: &'static str,
}

impl FilterRequest {
    /// Comma-joined 1-based index list in the external tool's format
    /// (empty string for an empty set).
    pub fn filter_argument(&self) -> String {
        self.indices
            .iter()
            .map(|&i| (i + 1).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// The filtering work a denoise mode implies for a classification result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenoisePlan {
    /// Zero, one, or two filter invocations, in execution order.
    pub requests: Vec<FilterRequest>,
    /// Set when filtering was requested but no component was classified as
    /// motion, so the filter output will be a copy of the input.
    pub no_components_removed: bool,
}

/// Decide the filter invocations for `mode` given the sorted 0-based motion
/// index set produced by [`crate::classify::classify`].
pub fn plan_denoising(mode: DenoiseMode, motion_indices: &[usize]) -> DenoisePlan {
    let mut requests = Vec::new();
    if matches!(mode, DenoiseMode::NonAggressive | DenoiseMode::Both) {
        requests.push(FilterRequest {
            indices: motion_indices.to_vec(),
            aggressive: false,
            output_label: "denoised_func_data_nonaggr",
        });
    }
    if matches!(mode, DenoiseMode::Aggressive | DenoiseMode::Both) {
        requests.push(FilterRequest {
            indices: motion_indices.to_vec(),
            aggressive: true,
            output_label: "denoised_func_data_aggr",
        });
    }

    let no_components_removed = !requests.is_empty() && motion_indices.is_empty();
    if no_components_removed {
        log::warn!(
            "none of the components was classified as motion, so no denoising \
             will be applied (the filter output will be a copy of the input)"
        );
    }

    DenoisePlan {
        requests,
        no_components_removed,
    }
}
