//! Work-in-progress detection for pull request titles.
//!
//! The heuristic is a case-insensitive substring scan over a fixed marker
//! list. It runs on every `opened` and `edited` event, so removing a marker
//! from the title flips the next check run to success.

use crate::github::{CheckRunConclusion, CheckRunOutput};

/// Markers that flag a PR title as work-in-progress.
///
/// Matching is substring-based on the lower-cased title, so `"Fix DNM bug"`
/// matches `dnm` and `"🚧 draft PR"` matches both the emoji and `draft`.
pub const WIP_MARKERS: &[&str] = &[
    "wip",
    "🚧",
    "dnm",
    "work in progress",
    "work-in-progress",
    "do not merge",
    "do-not-merge",
    "draft",
];

/// The outcome of evaluating a PR title.
///
/// Keeps the lower-cased title around because the check-run output reports
/// it in the debug block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipVerdict {
    pub is_wip: bool,
    pub lowered_title: String,
}

impl WipVerdict {
    /// The check-run conclusion this verdict maps to.
    ///
    /// WIP PRs conclude `neutral` rather than `failure`: an incomplete PR is
    /// not broken, it is just not ready.
    pub fn conclusion(&self) -> CheckRunConclusion {
        if self.is_wip {
            CheckRunConclusion::Neutral
        } else {
            CheckRunConclusion::Success
        }
    }
}

/// Evaluates the WIP heuristic on a PR title.
pub fn evaluate(title: &str) -> WipVerdict {
    let lowered_title = title.to_lowercase();
    let is_wip = WIP_MARKERS.iter().any(|m| lowered_title.contains(m));
    WipVerdict {
        is_wip,
        lowered_title,
    }
}

/// Builds the check-run output for a verdict.
///
/// The text carries a debug block (computed flag, lower-cased title, marker
/// list); the summary is the short human message shown next to the check.
pub fn check_output(verdict: &WipVerdict) -> CheckRunOutput {
    let text = format!(
        "Debug info:\nis_wip_pr={}\npr_title={}\nwip_markers={:?}",
        verdict.is_wip, verdict.lowered_title, WIP_MARKERS,
    );

    if verdict.is_wip {
        CheckRunOutput {
            title: "🤖 This PR is Work-in-progress: It is incomplete".to_string(),
            summary: "🚧 Please do not merge this PR as it is still under construction."
                .to_string(),
            text,
        }
    } else {
        CheckRunOutput {
            title: "🤖 This PR is not Work-in-progress: Good to go".to_string(),
            summary: "This change is ready to be reviewed.".to_string(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_is_not_wip() {
        let verdict = evaluate("Add feature");
        assert!(!verdict.is_wip);
        assert_eq!(verdict.conclusion(), CheckRunConclusion::Success);
    }

    #[test]
    fn wip_prefix_is_wip() {
        let verdict = evaluate("WIP: add feature");
        assert!(verdict.is_wip);
        assert_eq!(verdict.conclusion(), CheckRunConclusion::Neutral);
    }

    #[test]
    fn construction_emoji_is_wip() {
        // Matches both the emoji and "draft".
        assert!(evaluate("🚧 draft PR").is_wip);
    }

    #[test]
    fn markers_match_case_insensitively() {
        assert!(evaluate("Fix DNM bug").is_wip);
        assert!(evaluate("DO NOT MERGE yet").is_wip);
        assert!(evaluate("Work-In-Progress refactor").is_wip);
    }

    #[test]
    fn markers_match_as_substrings() {
        // "wip" inside a longer word still matches; the heuristic is
        // deliberately coarse.
        assert!(evaluate("wipe the cache on startup").is_wip);
    }

    #[test]
    fn every_marker_flags_a_title() {
        for marker in WIP_MARKERS {
            assert!(evaluate(&format!("{marker} something")).is_wip, "{marker}");
        }
    }

    #[test]
    fn output_text_reports_debug_block() {
        let verdict = evaluate("WIP: thing");
        let output = check_output(&verdict);
        assert!(output.text.contains("is_wip_pr=true"));
        assert!(output.text.contains("pr_title=wip: thing"));
        assert!(output.text.contains("wip_markers="));
        assert!(output.text.contains("do-not-merge"));
    }

    #[test]
    fn output_differs_by_outcome() {
        let wip = check_output(&evaluate("WIP"));
        let ready = check_output(&evaluate("Ship it"));
        assert_ne!(wip.title, ready.title);
        assert_ne!(wip.summary, ready.summary);
        assert!(ready.summary.contains("ready to be reviewed"));
        assert!(wip.summary.contains("under construction"));
    }
}
