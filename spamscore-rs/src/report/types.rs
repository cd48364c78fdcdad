//! Report types and data structures

use serde::{Deserialize, Serialize};

/// Lower bound of the suspicious tier
pub const SUSPICIOUS_THRESHOLD: f64 = 2.0;

/// Lower bound of the spam tier
pub const SPAM_THRESHOLD: f64 = 5.0;

/// Marker that flags an informational line rather than a spam signal
pub const NOTICE_MARKER: &str = "ADMINISTRATOR NOTICE";

/// One scored line of a spam report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleHit {
    /// Score contribution, sign preserved (including -0.0)
    pub score: f64,
    /// Rule identifier, either taken from the line or synthesized
    pub rule_name: String,
    /// Remaining free text of the line
    pub description: String,
    /// Line carries an administrator notice
    pub is_notice: bool,
}

impl RuleHit {
    /// Create a hit that is not an administrator notice
    pub fn new(score: f64, rule_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            score,
            rule_name: rule_name.into(),
            description: description.into(),
            is_notice: false,
        }
    }

    /// True for both 0.0 and -0.0
    pub fn is_zero(&self) -> bool {
        self.score == 0.0
    }
}

/// Three-tier classification of a summed score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Clean,
    Suspicious,
    Spam,
}

impl Verdict {
    /// Classify a total score with the default thresholds
    pub fn from_score(total_score: f64) -> Self {
        VerdictThresholds::default().classify(total_score)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Clean => "clean",
            Verdict::Suspicious => "suspicious",
            Verdict::Spam => "spam",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds of the suspicious and spam tiers, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub suspicious: f64,
    pub spam: f64,
}

impl VerdictThresholds {
    pub fn classify(&self, total_score: f64) -> Verdict {
        if total_score >= self.spam {
            Verdict::Spam
        } else if total_score >= self.suspicious {
            Verdict::Suspicious
        } else {
            Verdict::Clean
        }
    }
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            suspicious: SUSPICIOUS_THRESHOLD,
            spam: SPAM_THRESHOLD,
        }
    }
}

/// Summed and classified report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Hits in input order
    pub hits: Vec<RuleHit>,
    /// Sum of every hit score
    pub total_score: f64,
    /// Tier derived from `total_score`
    pub verdict: Verdict,
}
