//! Rule catalog types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Known rule with its nominal score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleCatalogEntry {
    /// Rule name as it appears in reports
    pub name: &'static str,
    /// Default score
    pub score: f64,
    /// Category
    pub category: RuleCategory,
    /// Description
    pub description: &'static str,
}

/// Rule categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Auth,
    Bayes,
    Content,
    Forgery,
    Format,
    Header,
    #[serde(rename = "HTML")]
    Html,
    Legal,
    Network,
    Phishing,
    Scam,
    Test,
    #[serde(rename = "URI")]
    Uri,
    Whitelist,
}

impl RuleCategory {
    /// Every category, in display order
    pub const ALL: [RuleCategory; 14] = [
        RuleCategory::Auth,
        RuleCategory::Bayes,
        RuleCategory::Content,
        RuleCategory::Forgery,
        RuleCategory::Format,
        RuleCategory::Header,
        RuleCategory::Html,
        RuleCategory::Legal,
        RuleCategory::Network,
        RuleCategory::Phishing,
        RuleCategory::Scam,
        RuleCategory::Test,
        RuleCategory::Uri,
        RuleCategory::Whitelist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RuleCategory::Auth => "Auth",
            RuleCategory::Bayes => "Bayes",
            RuleCategory::Content => "Content",
            RuleCategory::Forgery => "Forgery",
            RuleCategory::Format => "Format",
            RuleCategory::Header => "Header",
            RuleCategory::Html => "HTML",
            RuleCategory::Legal => "Legal",
            RuleCategory::Network => "Network",
            RuleCategory::Phishing => "Phishing",
            RuleCategory::Scam => "Scam",
            RuleCategory::Test => "Test",
            RuleCategory::Uri => "URI",
            RuleCategory::Whitelist => "Whitelist",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RuleCategory {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ReportError::UnknownCategory(s.to_string()))
    }
}

/// Category selection for catalog searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RuleCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: RuleCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}
