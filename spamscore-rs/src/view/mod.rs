//! Display helpers
//!
//! Caller-side view over an [`AnalysisResult`]: which hits to show, how to
//! label scores and verdicts, and summary counts. Nothing here feeds back
//! into parsing or analysis.

pub mod render;

use serde::Serialize;

use crate::report::{AnalysisResult, RuleHit, Verdict};

pub use render::{render_catalog, render_json, render_text, CatalogListing};

/// View parameters owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Include administrator notices
    pub show_notices: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { show_notices: true }
    }
}

/// Hits to display, in report order
pub fn visible_hits(hits: &[RuleHit], show_notices: bool) -> Vec<&RuleHit> {
    hits.iter()
        .filter(|hit| show_notices || !hit.is_notice)
        .collect()
}

/// Direction of a single score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSign {
    /// Spam indicator
    Positive,
    /// Ham indicator
    Negative,
    /// Informational
    Neutral,
}

impl ScoreSign {
    pub fn of(score: f64) -> Self {
        if score > 0.0 {
            ScoreSign::Positive
        } else if score < 0.0 {
            ScoreSign::Negative
        } else {
            ScoreSign::Neutral
        }
    }
}

/// One decimal, `+` for anything not below zero (including -0.0)
pub fn format_score(score: f64) -> String {
    if score >= 0.0 {
        format!("+{:.1}", score.abs())
    } else {
        format!("{:.1}", score)
    }
}

pub fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Clean => "Clean",
        Verdict::Suspicious => "Suspicious",
        Verdict::Spam => "Likely Spam",
    }
}

pub fn verdict_summary(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Clean => "This message appears to be legitimate (score < 2.0)",
        Verdict::Suspicious => "This message has some spam characteristics (score 2.0 - 5.0)",
        Verdict::Spam => "This message is likely spam (score >= 5.0)",
    }
}

/// Counts and sums per score direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub positive_count: usize,
    pub positive_total: f64,
    pub negative_count: usize,
    pub negative_total: f64,
    pub neutral_count: usize,
}

impl ScoreBreakdown {
    pub fn from_hits<'a>(hits: impl IntoIterator<Item = &'a RuleHit>) -> Self {
        let mut breakdown = Self::default();

        for hit in hits {
            match ScoreSign::of(hit.score) {
                ScoreSign::Positive => {
                    breakdown.positive_count += 1;
                    breakdown.positive_total += hit.score;
                }
                ScoreSign::Negative => {
                    breakdown.negative_count += 1;
                    breakdown.negative_total += hit.score;
                }
                ScoreSign::Neutral => breakdown.neutral_count += 1,
            }
        }

        breakdown
    }
}

/// Everything a front end needs to show one analysis
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView<'a> {
    pub verdict: Verdict,
    pub label: &'static str,
    pub summary: &'static str,
    pub total_score: f64,
    pub hits: Vec<&'a RuleHit>,
    pub hidden_notices: usize,
    pub breakdown: ScoreBreakdown,
}

impl<'a> ReportView<'a> {
    pub fn new(result: &'a AnalysisResult, options: ViewOptions) -> Self {
        let hits = visible_hits(&result.hits, options.show_notices);
        let breakdown = ScoreBreakdown::from_hits(hits.iter().copied());

        Self {
            verdict: result.verdict,
            label: verdict_label(result.verdict),
            summary: verdict_summary(result.verdict),
            total_score: result.total_score,
            hidden_notices: result.hits.len() - hits.len(),
            hits,
            breakdown,
        }
    }
}
