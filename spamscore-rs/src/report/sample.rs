//! Sample report for trying the analyzer

/// Excerpt of a SpamAssassin report with blocked DNS lookups, bracketed
/// metadata and untagged prose lines
pub const SAMPLE_REPORT: &str = "\
0.0 ADMINISTRATOR NOTICE: The query to URIBL was blocked. See http://wiki.apache.org/spamassassin/DnsBlocklists#dnsbl-block for more information. [URIs: example.com]\n\
0.0 RBL: ADMINISTRATOR NOTICE: The query to Validity was blocked. See https://knowledge.validity.com/hc/en-us/articles/20961730681243 for more information. [2a01:7c8:7c8::72 listed in bl.score.senderscore.com]\n\
0.0 RBL: ADMINISTRATOR NOTICE: The query to Validity was blocked. See https://knowledge.validity.com/hc/en-us/articles/20961730681243 for more information. [2a01:7c8:7c8::72 listed in sa-trusted.bondedsender.org]\n\
0.0 [URIs: example.com]\n\
-0.0 RBL: Sender listed at https://www.dnswl.org/, no trust [2a01:7c8:7c8::72 listed in list.dnswl.org]\n\
0.0 RBL:\n\
0.0 [URIs: example.com]\n\
0.1 Message has a DKIM or DK signature, not necessarily valid\n\
0.1 DKIM or DK signature exists, but is not valid";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{analyze, parse, Verdict};

    #[test]
    fn test_sample_report_analysis() {
        let hits = parse(SAMPLE_REPORT);
        assert_eq!(hits.len(), 9);
        assert_eq!(hits.iter().filter(|h| h.is_notice).count(), 3);

        let names: Vec<&str> = hits.iter().map(|h| h.rule_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "ADMINISTRATOR",
                "RBL",
                "RBL",
                "INFO",
                "RBL",
                "RBL",
                "INFO",
                "MESSAGE_HAS_A",
                "DKIM",
            ]
        );
        assert!(hits[4].score.is_sign_negative());

        let result = analyze(hits);
        assert!((result.total_score - 0.2).abs() < 1e-9);
        assert_eq!(result.verdict, Verdict::Clean);
    }
}
