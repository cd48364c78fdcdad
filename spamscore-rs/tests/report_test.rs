//! End-to-end tests for report parsing and analysis through the public API

use spamscore_rs::report::{analyze, parse, RuleHit, Verdict, SAMPLE_REPORT};
use spamscore_rs::view::{visible_hits, ReportView, ViewOptions};

fn hit(score: f64) -> RuleHit {
    RuleHit::new(score, "TEST_RULE", "test")
}

/// Two tagged rules, one spam and one ham
#[test]
fn test_spam_and_ham_rules() {
    let hits = parse("1.5 SPAM_RULE This is spam\n-0.5 HAM_RULE This is not spam");

    assert_eq!(
        hits,
        vec![
            RuleHit::new(1.5, "SPAM_RULE", "This is spam"),
            RuleHit::new(-0.5, "HAM_RULE", "This is not spam"),
        ]
    );

    let result = analyze(hits);
    assert_eq!(result.total_score, 1.0);
    assert_eq!(result.verdict, Verdict::Clean);
}

/// Rule token with nothing after it, then untagged prose
#[test]
fn test_rbl_and_prose_lines() {
    let hits = parse("0.0 RBL:\n0.1 Message has a DKIM or DK signature, not necessarily valid");
    assert_eq!(hits.len(), 2);

    assert_eq!(hits[0].rule_name, "RBL");
    assert_eq!(hits[0].description, "RBL:");

    assert_eq!(hits[1].rule_name, "MESSAGE_HAS_A");
    assert!(hits[1]
        .rule_name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));

    let result = analyze(hits);
    assert_eq!(result.total_score, 0.1);
    assert_eq!(result.verdict, Verdict::Clean);
}

#[test]
fn test_notice_flag_is_per_line() {
    let hits = parse(
        "0.0 RBL: ADMINISTRATOR NOTICE: The query to Validity was blocked.\n\
         1.2 SPF_FAIL SPF check failed\n\
         0.0 [URIs: example.com]",
    );

    let flags: Vec<bool> = hits.iter().map(|h| h.is_notice).collect();
    assert_eq!(flags, [true, false, false]);
}

#[test]
fn test_blank_input() {
    for input in ["", "\n", "   \n\t\n  "] {
        let hits = parse(input);
        assert!(hits.is_empty());

        let result = analyze(hits);
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.verdict, Verdict::Clean);
    }
}

#[test]
fn test_hit_count_never_exceeds_non_blank_lines() {
    let inputs = [
        SAMPLE_REPORT,
        "Content analysis details:   (6.1 points, 5.0 required)\n\n pts rule name  description\n---- ----\n 3.5 BAYES_99 BODY: Bayes spam probability is 99 to 100%\n                [score: 1.0000]\n 2.6 RDNS_NONE Delivered to internal network by a host with no rDNS",
        "garbage\n\n\nmore garbage\n1 ONE",
        "-\n.\n-.5 X\n5",
    ];

    for input in inputs {
        let non_blank = input.lines().filter(|l| !l.trim().is_empty()).count();
        assert!(parse(input).len() <= non_blank);
    }
}

#[test]
fn test_spamassassin_report_body() {
    let report = "Content analysis details:   (6.1 points, 5.0 required)\n\
                  \n\
                  \x20pts rule name              description\n\
                  ---- ---------------------- --------------------------------------------------\n\
                  \x203.5 BAYES_99               BODY: Bayes spam probability is 99 to 100%\n\
                  \x20                           [score: 1.0000]\n\
                  \x202.6 RDNS_NONE              Delivered to internal network by a host with no rDNS";

    let result = analyze(parse(report));
    assert_eq!(result.hits.len(), 2);
    assert_eq!(result.hits[0].rule_name, "BAYES_99");
    assert_eq!(
        result.hits[0].description,
        "BODY: Bayes spam probability is 99 to 100%"
    );
    assert_eq!(result.hits[1].rule_name, "RDNS_NONE");
    assert_eq!(result.verdict, Verdict::Spam);
}

#[test]
fn test_analysis_is_deterministic() {
    let first = analyze(parse(SAMPLE_REPORT));
    let second = analyze(parse(SAMPLE_REPORT));

    assert_eq!(first.total_score.to_bits(), second.total_score.to_bits());
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.hits, second.hits);
}

#[test]
fn test_adding_non_negative_hit_never_lowers_verdict() {
    let base = vec![hit(1.9), hit(-0.4), hit(2.2)];
    let before = analyze(base.clone());

    for extra in [0.0, -0.0, 0.1, 0.5, 3.0, 100.0] {
        let mut extended = base.clone();
        extended.push(hit(extra));
        let after = analyze(extended);

        assert!(after.total_score >= before.total_score);
        assert!(after.verdict >= before.verdict);
    }
}

#[test]
fn test_boundary_scores() {
    assert_eq!(analyze(parse("2.0 BOUNDARY low")).verdict, Verdict::Suspicious);
    assert_eq!(analyze(parse("4.999 BOUNDARY mid")).verdict, Verdict::Suspicious);
    assert_eq!(analyze(parse("5.0 BOUNDARY high")).verdict, Verdict::Spam);
}

#[test]
fn test_spam_threshold_crossed_on_exact_hit() {
    let lines = ["2.5 FIRST_RULE a", "1.5 SECOND_RULE b", "1.0 THIRD_RULE c"];
    let mut report = String::new();
    let mut verdicts = Vec::new();

    for line in lines {
        report.push_str(line);
        report.push('\n');
        verdicts.push(analyze(parse(&report)).verdict);
    }

    assert_eq!(
        verdicts,
        [Verdict::Suspicious, Verdict::Suspicious, Verdict::Spam]
    );
}

#[test]
fn test_notice_filtering_does_not_change_total() {
    let result = analyze(parse(SAMPLE_REPORT));
    let total = result.total_score;

    assert_eq!(visible_hits(&result.hits, false).len(), 6);

    let view = ReportView::new(&result, ViewOptions { show_notices: false });
    assert_eq!(view.total_score, total);
    assert_eq!(result.hits.len(), 9);
}

/// Numbers with no rule text after them are not scores
#[test]
fn test_bare_numbers_do_not_score() {
    let result = analyze(parse("1.5 SPAM_RULE x\n2025"));
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.total_score, 1.5);
    assert_eq!(result.verdict, Verdict::Clean);

    assert!(parse("2025").is_empty());
}

/// Reports read from files saved with a UTF-8 BOM
#[test]
fn test_report_with_byte_order_mark() {
    let result = analyze(parse("\u{FEFF}3.0 BAYES_99 high\n2.5 RDNS_NONE none"));
    assert_eq!(result.hits.len(), 2);
    assert_eq!(result.total_score, 5.5);
    assert_eq!(result.verdict, Verdict::Spam);
}
