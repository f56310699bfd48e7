//! Uniform in-memory representation of an export, independent of the shape
//! the platform happened to write it in. The extractor produces an
//! `Extraction` per role, which the report layer then compares.

use std::collections::BTreeSet;
use std::fmt;

use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde_json::Value;

/// Which side of the relationship an export describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Followers,
    Following,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Followers => "followers",
            Role::Following => "following",
        }
    }

    /// Whether matched values may be profile links rather than bare handles.
    pub fn accepts_profile_links(&self) -> bool {
        matches!(self, Role::Following)
    }

    /// File name for this role's parse diagnostics.
    pub fn problems_file_name(&self) -> String {
        format!("{}_parse_problems.json", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized account handle: trimmed, lower-cased, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username(String);

impl Username {
    /// Normalize a raw candidate. Returns `None` when nothing is left after
    /// trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// Normalize a candidate that may be a profile link such as
    /// `https://host/_u/name/?hl=en`. Links resolve to their last path
    /// segment, ignoring any query or fragment; anything else is treated as
    /// a plain handle.
    pub fn from_profile_link(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match strip_http_scheme(trimmed) {
            Some(rest) => {
                let rest = rest.split(['?', '#']).next()?;
                let (_host, path) = rest.trim_end_matches('/').split_once('/')?;
                Self::normalize(path.rsplit('/').next()?)
            }
            None => Self::normalize(trimmed),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn strip_http_scheme(s: &str) -> Option<&str> {
    let (scheme, rest) = s.split_once("://")?;
    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        Some(rest)
    } else {
        None
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique usernames from one export. Ordered so iteration is deterministic.
pub type UserSet = BTreeSet<Username>;

/// An input element no matcher could interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemEntry {
    /// Rule context the element was evaluated under (`root`, the array's
    /// key, or `scan:<key>`).
    pub context: String,
    /// Position within the containing array.
    pub index: usize,
    /// The element exactly as it appeared in the export.
    pub raw: Value,
}

impl ProblemEntry {
    pub fn new(context: impl Into<String>, index: usize, raw: Value) -> Self {
        Self {
            context: context.into(),
            index,
            raw,
        }
    }
}

// Written as a `[context, index, raw]` triple.
impl Serialize for ProblemEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.context)?;
        tuple.serialize_element(&self.index)?;
        tuple.serialize_element(&self.raw)?;
        tuple.end()
    }
}

/// The complete result of extracting a single export.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub role: Role,
    pub users: UserSet,
    pub problems: Vec<ProblemEntry>,
}

impl Extraction {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            users: UserSet::new(),
            problems: Vec::new(),
        }
    }
}
