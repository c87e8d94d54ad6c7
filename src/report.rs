//! Text renderings of a classification result.
//!
//! Pure formatting in component order; the same inputs always produce
//! byte-identical output. Three artifacts mirror the interchange format the
//! downstream tooling expects: a raw feature-score table, the comma-joined
//! 1-based motion index list, and a human-readable overview table.

use crate::classify::FeatureScores;
use crate::error::{AromaError, Result};
use std::fmt::Write as _;
use std::path::Path;

/// File name of the raw feature-score table.
pub const FEATURE_SCORES_FILE: &str = "feature_scores.txt";
/// File name of the motion index list.
pub const MOTION_ICS_FILE: &str = "classified_motion_ICs.txt";
/// File name of the per-component overview table.
pub const OVERVIEW_FILE: &str = "classification_overview.txt";

/// Raw feature scores, one row per component: maximum RP correlation, edge
/// fraction, high-frequency content, CSF fraction in scientific notation.
pub fn render_feature_scores(scores: &FeatureScores) -> String {
    let mut out = String::new();
    for i in 0..scores.len() {
        let _ = writeln!(
            out,
            "{:.18e} {:.18e} {:.18e} {:.18e}",
            scores.max_rp_correl()[i],
            scores.edge_fraction()[i],
            scores.hfc()[i],
            scores.csf_fraction()[i],
        );
    }
    out
}

/// Comma-joined 1-based motion component indices; a single empty line when
/// no component was classified as motion.
pub fn render_motion_indices(motion: &[usize]) -> String {
    let mut out = motion
        .iter()
        .map(|&i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(",");
    out.push('\n');
    out
}

/// Tab-separated overview: 1-based component index, motion flag, and the
/// four feature scores at two decimals.
///
/// Errors if any motion index is outside the component set.
pub fn render_overview(scores: &FeatureScores, motion: &[usize]) -> Result<String> {
    let n = scores.len();
    if let Some(&bad) = motion.iter().find(|&&i| i >= n) {
        return Err(AromaError::IndexOutOfRange {
            index: bad,
            ncomponents: n,
        });
    }

    let mut is_motion = vec![false; n];
    for &i in motion {
        is_motion[i] = true;
    }

    let mut out = String::from(
        "IC\tMotion/noise\tmaximum RP correlation\tEdge-fraction\tHigh-frequency content\tCSF-fraction\n",
    );
    for i in 0..n {
        let _ = writeln!(
            out,
            "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            i + 1,
            is_motion[i],
            scores.max_rp_correl()[i],
            scores.edge_fraction()[i],
            scores.hfc()[i],
            scores.csf_fraction()[i],
        );
    }
    Ok(out)
}

/// Write all three classification artifacts into `outdir`.
pub fn save_classification(
    outdir: impl AsRef<Path>,
    scores: &FeatureScores,
    motion: &[usize],
) -> Result<()> {
    let outdir = outdir.as_ref();
    // Validates the motion index set before anything is written.
    let overview = render_overview(scores, motion)?;

    std::fs::write(outdir.join(FEATURE_SCORES_FILE), render_feature_scores(scores))?;
    std::fs::write(outdir.join(MOTION_ICS_FILE), render_motion_indices(motion))?;
    std::fs::write(outdir.join(OVERVIEW_FILE), overview)?;

    log::info!(
        "saved classification of {} components ({} motion) to {}",
        scores.len(),
        motion.len(),
        outdir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scores() -> FeatureScores {
        FeatureScores::new(
            vec![0.9, 0.1],
            vec![0.5, 0.1],
            vec![0.1, 0.2],
            vec![0.02, 0.3],
        )
        .unwrap()
    }

    #[test]
    fn test_feature_scores_rows() {
        let text = render_feature_scores(&sample_scores());
        assert_eq!(text.lines().count(), 2);
        let first: Vec<&str> = text.lines().next().unwrap().split(' ').collect();
        assert_eq!(first.len(), 4);
        assert!(first[0].starts_with("9.0"));
    }

    #[test]
    fn test_motion_indices_one_based() {
        assert_eq!(render_motion_indices(&[0, 2, 6]), "1,3,7\n");
    }

    #[test]
    fn test_motion_indices_empty_line() {
        assert_eq!(render_motion_indices(&[]), "\n");
    }

    #[test]
    fn test_overview_layout() {
        let text = render_overview(&sample_scores(), &[0]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("IC\tMotion/noise"));
        assert_eq!(lines[1], "1\ttrue\t0.90\t0.50\t0.10\t0.02");
        assert_eq!(lines[2], "2\tfalse\t0.10\t0.10\t0.20\t0.30");
    }

    #[test]
    fn test_overview_rejects_out_of_range() {
        assert!(matches!(
            render_overview(&sample_scores(), &[2]),
            Err(AromaError::IndexOutOfRange {
                index: 2,
                ncomponents: 2
            })
        ));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let scores = sample_scores();
        let motion = vec![1];
        assert_eq!(
            render_feature_scores(&scores),
            render_feature_scores(&scores)
        );
        assert_eq!(
            render_overview(&scores, &motion).unwrap(),
            render_overview(&scores, &motion).unwrap()
        );
        assert_eq!(render_motion_indices(&motion), render_motion_indices(&motion));
    }

    #[test]
    fn test_save_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        save_classification(dir.path(), &sample_scores(), &[0]).unwrap();

        let indices = std::fs::read_to_string(dir.path().join(MOTION_ICS_FILE)).unwrap();
        assert_eq!(indices, "1\n");
        assert!(dir.path().join(FEATURE_SCORES_FILE).exists());
        assert!(dir.path().join(OVERVIEW_FILE).exists());
    }

    #[test]
    fn test_save_rejects_bad_indices_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_classification(dir.path(), &sample_scores(), &[9]).is_err());
        assert!(!dir.path().join(FEATURE_SCORES_FILE).exists());
    }
}
