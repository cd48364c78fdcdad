//! Spam report module
//!
//! Parses SpamAssassin score reports into rule hits and reduces them to a
//! total score and verdict.

pub mod analyzer;
pub mod parser;
pub mod sample;
pub mod types;

pub use analyzer::{analyze, analyze_with};
pub use parser::parse;
pub use sample::SAMPLE_REPORT;
pub use types::*;
