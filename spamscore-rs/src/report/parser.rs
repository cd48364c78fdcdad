//! Report line parser
//!
//! Turns pasted SpamAssassin report text into [`RuleHit`] records. Each
//! scored line starts with a signed decimal number; anything else (headers,
//! wrapped continuation lines, commentary) is skipped without error.
//!
//! The text after the score is split into a rule name and a description by
//! an ordered chain of strategies, first match wins:
//!
//! 1. a leading rule token such as `BAYES_00` or `RBL:`
//! 2. bracketed metadata such as `[URIs: example.com]`, named `INFO`
//! 3. free prose, named from its first three words

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::types::{RuleHit, NOTICE_MARKER};

/// Rule name used for bracketed metadata lines
pub const INFO_RULE: &str = "INFO";

/// Rule name used when nothing usable can be synthesized
pub const UNKNOWN_RULE: &str = "UNKNOWN";

// Score, at least one whitespace, then the rest of the line
static SCORE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+\.?[0-9]*)\s+(.*)$").expect("valid regex literal")
});

// Byte order mark, left in place by `read_to_string`
const BOM: char = '\u{FEFF}';

// Uppercase token of at least two characters, optional trailing colon
static RULE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9_]+):?\s*(.*)$").expect("valid regex literal")
});

/// Rule name and description split out of the text after the score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub rule_name: String,
    pub description: String,
}

/// One step of the rule name chain
pub type Strategy = fn(&str) -> Option<Classified>;

/// Rule name strategies in precedence order
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("rule_token", rule_token as Strategy),
    ("metadata", bracketed_metadata as Strategy),
    ("prose", synthesized_name as Strategy),
];

/// Parse a full report into hits, in input order
pub fn parse(report: &str) -> Vec<RuleHit> {
    let mut hits = Vec::new();
    let mut scanned = 0usize;

    for (index, line) in report.lines().enumerate() {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        if line.is_empty() {
            continue;
        }
        scanned += 1;

        match parse_line(line) {
            Some(hit) => hits.push(hit),
            None => trace!(line = index + 1, "Skipping line without leading score"),
        }
    }

    debug!(lines = scanned, hits = hits.len(), "Parsed spam report");
    hits
}

/// Parse a single trimmed line
pub fn parse_line(line: &str) -> Option<RuleHit> {
    let caps = SCORE_LINE.captures(line)?;
    let score: f64 = caps[1].parse().ok()?;
    let rest = caps[2].trim();

    let Classified {
        rule_name,
        description,
    } = classify(rest);

    Some(RuleHit {
        score,
        rule_name,
        description,
        is_notice: rest.contains(NOTICE_MARKER),
    })
}

/// Run the strategy chain over the text following the score
pub fn classify(rest: &str) -> Classified {
    STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(rest))
        .unwrap_or_else(|| Classified {
            rule_name: UNKNOWN_RULE.to_string(),
            description: rest.to_string(),
        })
}

/// `BAYES_00 Bayes spam probability is 0 to 1%` or `RBL: ...`
pub fn rule_token(rest: &str) -> Option<Classified> {
    let caps = RULE_TOKEN.captures(rest)?;
    let description = match &caps[2] {
        "" => rest,
        tail => tail,
    };

    Some(Classified {
        rule_name: caps[1].to_string(),
        description: description.to_string(),
    })
}

/// `[URIs: example.com]`
pub fn bracketed_metadata(rest: &str) -> Option<Classified> {
    rest.starts_with('[').then(|| Classified {
        rule_name: INFO_RULE.to_string(),
        description: rest.to_string(),
    })
}

/// `Message has a DKIM or DK signature` becomes `MESSAGE_HAS_A`
pub fn synthesized_name(rest: &str) -> Option<Classified> {
    let joined = rest.split(' ').take(3).collect::<Vec<_>>().join("_");
    let rule_name: String = joined
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    if rule_name.is_empty() {
        return None;
    }

    Some(Classified {
        rule_name,
        description: rest.to_string(),
    })
}
