//! Score aggregation
//!
//! Sums parsed hits and places the total into a verdict tier. Hits are
//! passed through untouched; notice filtering is a display concern.

use tracing::debug;

use super::types::{AnalysisResult, RuleHit, VerdictThresholds};

/// Analyze hits with the standard 2.0 / 5.0 thresholds
pub fn analyze(hits: Vec<RuleHit>) -> AnalysisResult {
    analyze_with(hits, &VerdictThresholds::default())
}

/// Analyze hits with caller-supplied thresholds
pub fn analyze_with(hits: Vec<RuleHit>, thresholds: &VerdictThresholds) -> AnalysisResult {
    let total_score = total_score(&hits);
    let verdict = thresholds.classify(total_score);

    debug!(hits = hits.len(), total_score, %verdict, "Analyzed spam report");

    AnalysisResult {
        hits,
        total_score,
        verdict,
    }
}

/// Sum of scores in input order
pub fn total_score(hits: &[RuleHit]) -> f64 {
    hits.iter().fold(0.0, |sum, hit| sum + hit.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::Verdict;

    fn hit(score: f64) -> RuleHit {
        RuleHit::new(score, "TEST_RULE", "test")
    }

    #[test]
    fn test_analyze_empty() {
        let result = analyze(Vec::new());
        assert!(result.hits.is_empty());
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.verdict, Verdict::Clean);
    }

    #[test]
    fn test_analyze_sums_in_order() {
        let result = analyze(vec![hit(1.5), hit(-0.5)]);
        assert_eq!(result.total_score, 1.0);
        assert_eq!(result.verdict, Verdict::Clean);
        assert_eq!(result.hits[0].score, 1.5);
        assert_eq!(result.hits[1].score, -0.5);
    }

    #[test]
    fn test_analyze_single_hit_boundaries() {
        assert_eq!(analyze(vec![hit(2.0)]).verdict, Verdict::Suspicious);
        assert_eq!(analyze(vec![hit(4.999)]).verdict, Verdict::Suspicious);
        assert_eq!(analyze(vec![hit(5.0)]).verdict, Verdict::Spam);
    }

    #[test]
    fn test_negative_zero_sums_as_zero() {
        let result = analyze(vec![hit(-0.0), hit(0.0)]);
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.verdict, Verdict::Clean);
    }

    #[test]
    fn test_notices_are_not_filtered() {
        let mut notice = hit(0.0);
        notice.is_notice = true;
        let result = analyze(vec![notice.clone(), hit(3.0)]);
        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.hits[0], notice);
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_crossing_spam_threshold() {
        let mut hits = Vec::new();
        let mut verdicts = Vec::new();
        for _ in 0..5 {
            hits.push(hit(1.0));
            verdicts.push(analyze(hits.clone()).verdict);
        }
        assert_eq!(
            verdicts,
            [
                Verdict::Clean,
                Verdict::Suspicious,
                Verdict::Suspicious,
                Verdict::Suspicious,
                Verdict::Spam,
            ]
        );
    }

    #[test]
    fn test_analyze_with_custom_thresholds() {
        let thresholds = VerdictThresholds {
            suspicious: 1.0,
            spam: 3.0,
        };
        assert_eq!(analyze_with(vec![hit(1.0)], &thresholds).verdict, Verdict::Suspicious);
        assert_eq!(analyze_with(vec![hit(3.0)], &thresholds).verdict, Verdict::Spam);
    }
}
