//! Scans report text against a set of [`Rules`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::rules::{read_text, CheckError, Rules};

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}#{1,6}\s+(.+?)[\s#]*$").unwrap());

static CHECKED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+\[[xX]\]\s+(.+?)\s*$").unwrap());

/// Outcome of a completed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub passed: bool,
    pub missing_sections: Vec<String>,
    pub missing_checked_items: Vec<String>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.passed {
            return write!(f, "PASS: all required sections and checked items present");
        }
        write!(f, "FAIL")?;
        for section in &self.missing_sections {
            write!(f, "\n  missing section: {}", section)?;
        }
        for item in &self.missing_checked_items {
            write!(f, "\n  missing checked item: {}", item)?;
        }
        Ok(())
    }
}

/// Validate report text against `rules`.
pub fn check_text(text: &str, rules: &Rules) -> Report {
    let mut headings = HashSet::new();
    let mut checked_items = Vec::new();

    for line in text.lines() {
        if let Some(caps) = HEADING_REGEX.captures(line) {
            headings.insert(caps[1].trim().to_lowercase());
        } else if let Some(caps) = CHECKED_ITEM_REGEX.captures(line) {
            checked_items.push(caps[1].to_lowercase());
        }
    }
    debug!(headings = headings.len(), checked = checked_items.len(), "scanned report");

    let missing_sections: Vec<String> = rules
        .required_sections
        .iter()
        .filter(|section| !headings.contains(&section.trim().to_lowercase()))
        .cloned()
        .collect();

    let missing_checked_items: Vec<String> = rules
        .required_checked_items
        .iter()
        .filter(|item| {
            let wanted = item.trim().to_lowercase();
            !checked_items.iter().any(|found| found.starts_with(&wanted))
        })
        .cloned()
        .collect();

    Report {
        passed: missing_sections.is_empty() && missing_checked_items.is_empty(),
        missing_sections,
        missing_checked_items,
    }
}

/// Read the report at `path` and validate it against `rules`.
pub fn check_file(path: &Path, rules: &Rules) -> Result<Report, CheckError> {
    let text = read_text(path)?;
    Ok(check_text(&text, rules))
}
