//! # aroma-core
//!
//! Feature extraction and classification for ICA-based automatic removal of
//! motion artefacts from fMRI data.
//!
//! For every component of an external ICA decomposition this crate computes
//! four feature scores:
//! - maximum realignment-parameter correlation (robust Monte-Carlo estimate)
//! - high-frequency content (cumulative spectral power)
//! - edge fraction and CSF fraction (masked spatial aggregation)
//!
//! combines them with a fixed linear discriminant into a motion / non-motion
//! label per component, renders the classification artifacts, and plans the
//! regression-filter invocations a denoising step needs.
//!
//! The decomposition itself, spatial registration, mask creation, and the
//! regression filter are external collaborators; this crate consumes their
//! outputs as in-memory matrices and voxel volumes (with parsers for the
//! flat-text interchange tables) and never mutates them.
//!
//! ## Data layout
//!
//! Time courses and spectra are column-major [`Matrix`] values: rows are
//! time points or frequency bins, columns are components (or motion
//! parameters), so every component's series is a contiguous slice.
//! Components are identified by 0-based index internally; the text artifacts
//! use the 1-based labels of the external tooling.

#![allow(clippy::needless_range_loop)]

pub mod parallel;

pub mod aggregate;
pub mod classify;
pub mod correlation;
pub mod denoise;
pub mod error;
pub mod frequency;
pub mod matrix;
pub mod report;
pub mod spatial;
pub mod temporal;
pub mod volume;

pub use aggregate::masked_sums;
pub use classify::{classify, projection, FeatureScores, CSF_THRESHOLD, HFC_THRESHOLD, HYPERPLANE};
pub use correlation::cross_correlation;
pub use denoise::{plan_denoising, DenoiseMode, DenoisePlan, FilterRequest};
pub use error::{AromaError, Result};
pub use frequency::{feature_frequency, LOW_FREQUENCY_CUTOFF_HZ};
pub use matrix::{read_matrix, Matrix};
pub use report::{render_feature_scores, render_motion_indices, render_overview, save_classification};
pub use spatial::{feature_spatial, AnatomicalMasks, SpatialScores};
pub use temporal::{feature_time_series, motion_model, N_TRIALS, SUBSAMPLE_FRACTION};
pub use volume::{ComponentMaps, Mask};
