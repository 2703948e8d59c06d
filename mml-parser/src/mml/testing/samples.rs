//! Curated MML samples
//!
//! Sources live in `mml-parser/fixtures/` and are embedded at compile time.

use crate::mml::ast::Document;
use crate::mml::parsing::parse;

/// A two-section field report that uses every dictionary word at least once
pub const EMERGENCY_REPORT: &str = include_str!("../../../fixtures/emergency-report.mml");

/// Every known tag, with and without optional urls
pub const ALL_TAGS: &str = include_str!("../../../fixtures/all-tags.mml");

/// Odd spacing, lowercase tags, orphans, an unknown tag and lines without delimiter
pub const MESSY: &str = include_str!("../../../fixtures/messy.mml");

pub fn emergency_report() -> Document {
    parse(EMERGENCY_REPORT)
}

pub fn all_tags() -> Document {
    parse(ALL_TAGS)
}

pub fn messy() -> Document {
    parse(MESSY)
}

/// Every sample, by name
pub fn all() -> [(&'static str, &'static str); 3] {
    [
        ("emergency-report", EMERGENCY_REPORT),
        ("all-tags", ALL_TAGS),
        ("messy", MESSY),
    ]
}
