//! Comparison of the two extracted sets and output of the result.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::model::{Extraction, ProblemEntry, UserSet, Username};

/// First line of every report.
pub const REPORT_HEADER: &str = "Not following you back:";

/// Accounts in `following` that are absent from `followers`, sorted.
#[must_use]
pub fn unfollowers(followers: &UserSet, following: &UserSet) -> Vec<Username> {
    following.difference(followers).cloned().collect()
}

/// Result of comparing a followers export against a following export.
#[derive(Debug, Clone)]
pub struct UnfollowersReport {
    pub followers: usize,
    pub following: usize,
    pub unfollowers: Vec<Username>,
}

impl UnfollowersReport {
    #[must_use]
    pub fn compare(followers: &Extraction, following: &Extraction) -> Self {
        Self {
            followers: followers.users.len(),
            following: following.users.len(),
            unfollowers: unfollowers(&followers.users, &following.users),
        }
    }

    /// Format using a specific formatter.
    #[must_use]
    pub fn format(&self, formatter: &dyn ReportFormatter) -> String {
        formatter.format(self)
    }
}

/// Trait for formatting unfollower reports.
pub trait ReportFormatter {
    /// Format the report to a string.
    fn format(&self, report: &UnfollowersReport) -> String;
}

/// Header line followed by one username per line.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &UnfollowersReport) -> String {
        let mut out = String::new();
        out.push_str(REPORT_HEADER);
        out.push('\n');
        for name in &report.unfollowers {
            writeln!(out, "{name}").unwrap();
        }
        out
    }
}

/// Write the text report, replacing any previous file.
pub fn write_report(path: &Path, report: &UnfollowersReport) -> Result<()> {
    std::fs::write(path, report.format(&TextFormatter))?;
    Ok(())
}

/// Write parse problems as a JSON array of `[context, index, raw]` triples.
pub fn write_problems(path: &Path, problems: &[ProblemEntry]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(problems).map_err(std::io::Error::from)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
