//! Plain-text and JSON output

use std::fmt;

use super::{format_score, ReportView};
use crate::catalog::RuleCatalogEntry;
use crate::error::Result;

const NOTICE_TAG: &str = " [NOTICE]";

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (total score {:.1})", self.label, self.total_score)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Score breakdown ({} rules)", self.hits.len())?;
        writeln!(f, "{:<8} {:<32} {}", "Score", "Rule", "Description")?;
        writeln!(f, "{:-<80}", "")?;

        for hit in &self.hits {
            let name = if hit.is_notice {
                format!("{}{}", hit.rule_name, NOTICE_TAG)
            } else {
                hit.rule_name.clone()
            };
            writeln!(
                f,
                "{:<8} {:<32} {}",
                format_score(hit.score),
                name,
                hit.description
            )?;
        }

        let b = &self.breakdown;
        writeln!(f)?;
        writeln!(
            f,
            "Spam indicators: {} ({:+.1} points)",
            b.positive_count, b.positive_total
        )?;
        writeln!(
            f,
            "Ham indicators:  {} ({:.1} points)",
            b.negative_count, b.negative_total
        )?;
        writeln!(f, "Neutral / info:  {} (0.0 points)", b.neutral_count)?;

        if self.hidden_notices > 0 {
            writeln!(f, "{} administrator notice(s) hidden", self.hidden_notices)?;
        }

        Ok(())
    }
}

/// Catalog search results out of a table of `total` rules
#[derive(Debug, Clone, Copy)]
pub struct CatalogListing<'a> {
    pub entries: &'a [&'static RuleCatalogEntry],
    pub total: usize,
}

impl fmt::Display for CatalogListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Showing {} of {} rules\n", self.entries.len(), self.total)?;
        writeln!(
            f,
            "{:<8} {:<28} {:<10} {}",
            "Score", "Rule Name", "Category", "Description"
        )?;
        writeln!(f, "{:-<80}", "")?;

        for entry in self.entries {
            writeln!(
                f,
                "{:<8} {:<28} {:<10} {}",
                format_score(entry.score),
                entry.name,
                entry.category.label(),
                entry.description
            )?;
        }

        Ok(())
    }
}

/// Render an analysis as an aligned text table
pub fn render_text(view: &ReportView<'_>) -> String {
    view.to_string()
}

/// Render an analysis as pretty-printed JSON
pub fn render_json(view: &ReportView<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Render catalog search results
pub fn render_catalog(entries: &[&'static RuleCatalogEntry], total: usize) -> String {
    CatalogListing { entries, total }.to_string()
}
