//! Command handler for the followback CLI.
//!
//! `cmd_compare` returns its output as a `String`, making it easy to test
//! without capturing stdout.

use std::fmt::Write;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::Paths;
use crate::ingest::ingest;
use crate::model::{Extraction, Role};
use crate::report::{self, TextFormatter, UnfollowersReport};

/// Load both exports, compare them, and write the report plus any parse
/// diagnostics next to the inputs.
pub fn cmd_compare(paths: &Paths) -> Result<String> {
    let followers = load(paths, Role::Followers)?;
    let following = load(paths, Role::Following)?;

    let summary = UnfollowersReport::compare(&followers, &following);
    let output = paths.output();
    report::write_report(&output, &summary)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    let mut out = String::new();
    for extraction in [&followers, &following] {
        write_counts(&mut out, paths, extraction);
    }
    out.push_str(&summary.format(&TextFormatter));
    writeln!(
        out,
        "{} of {} followed accounts don't follow back ({} followers). Report written to {}",
        summary.unfollowers.len(),
        summary.following,
        summary.followers,
        output.display()
    )
    .unwrap();
    Ok(out)
}

fn load(paths: &Paths, role: Role) -> Result<Extraction> {
    let path = paths.input(role);
    ingest(&path, role).with_context(|| format!("Failed to load {role} export"))
}

/// Append the parse counts for one role, writing its diagnostics file if
/// there is anything to report.
fn write_counts(out: &mut String, paths: &Paths, extraction: &Extraction) {
    let role = extraction.role;
    let parsed = extraction.users.len();
    let problems = extraction.problems.len();

    if problems == 0 {
        writeln!(out, "{role}: {parsed} parsed").unwrap();
        return;
    }

    let path = paths.problems(role);
    match report::write_problems(&path, &extraction.problems) {
        Ok(()) => writeln!(
            out,
            "{role}: {parsed} parsed, {problems} problems (see {})",
            path.display()
        )
        .unwrap(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not write parse problems");
            writeln!(out, "{role}: {parsed} parsed, {problems} problems").unwrap();
        }
    }
}
