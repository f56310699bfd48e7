//! Turns a parsed export of any supported shape into an `Extraction`.
//!
//! The root shape decides which arrays are walked and which matcher chain
//! applies to their elements. Elements no matcher recognises are kept
//! verbatim as `ProblemEntry` values; recognised elements whose candidate is
//! not a usable string are dropped silently.

use serde_json::Value;
use tracing::debug;

use crate::detect::{detect_shape, RootShape};
use crate::error::Result;
use crate::matchers::{first_match, Matcher, RECORD_CHAIN, SCAN_CHAIN};
use crate::model::{Extraction, ProblemEntry, Role, Username};

/// Context label for elements of a root array.
pub const ROOT_CONTEXT: &str = "root";

/// Extract the usernames of one export.
pub fn extract(raw: &Value, role: Role) -> Result<Extraction> {
    let mut out = Extraction::new(role);

    match detect_shape(raw, role)? {
        RootShape::List(entries) => {
            debug!(%role, entries = entries.len(), "root array");
            extract_entries(ROOT_CONTEXT, entries, RECORD_CHAIN, &mut out);
        }
        RootShape::Named { key, entries } => {
            debug!(%role, key, entries = entries.len(), "named array");
            extract_entries(key, entries, RECORD_CHAIN, &mut out);
        }
        RootShape::Scan(fields) => {
            debug!(%role, fields = fields.len(), "no conventional key, scanning fields");
            for (key, value) in fields {
                if let Value::Array(entries) = value {
                    extract_entries(&format!("scan:{key}"), entries, SCAN_CHAIN, &mut out);
                }
            }
        }
    }

    Ok(out)
}

fn extract_entries(
    context: &str,
    entries: &[Value],
    chain: &[&dyn Matcher],
    out: &mut Extraction,
) {
    for (index, entry) in entries.iter().enumerate() {
        match first_match(chain, entry, out.role) {
            Some((matcher, candidate)) => match to_username(candidate, out.role) {
                Some(name) => {
                    out.users.insert(name);
                }
                None => debug!(context, index, matcher, "discarding unusable candidate"),
            },
            None => out
                .problems
                .push(ProblemEntry::new(context, index, entry.clone())),
        }
    }
}

fn to_username(candidate: &Value, role: Role) -> Option<Username> {
    let raw = candidate.as_str()?;
    if role.accepts_profile_links() {
        Username::from_profile_link(raw)
    } else {
        Username::normalize(raw)
    }
}
