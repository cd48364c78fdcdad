//! spamscore-rs: SpamAssassin report analyzer
//!
//! Reads the score breakdown SpamAssassin attaches to a message and turns it
//! into structured rule hits, a total score and a verdict.
//!
//! # Example
//!
//! ```
//! use spamscore_rs::report::{analyze, parse, Verdict};
//!
//! let hits = parse("1.5 SPAM_RULE This is spam\n-0.5 HAM_RULE This is not spam");
//! let result = analyze(hits);
//!
//! assert_eq!(result.total_score, 1.0);
//! assert_eq!(result.verdict, Verdict::Clean);
//! ```
//!
//! # Modules
//!
//! - [`report`]: Line parser and score aggregation
//! - [`catalog`]: Reference table of default SpamAssassin rules
//! - [`view`]: Notice filtering, labels and output rendering
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod catalog;
pub mod config;
pub mod error;
pub mod report;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{ReportError, Result};
pub use report::{analyze, parse, AnalysisResult, RuleHit, Verdict};
