use serde_json::Value;

use super::Matcher;
use crate::model::Role;

/// Field names probed on a flat record, highest priority first.
pub const FIELDS: [&str; 4] = ["value", "title", "username", "name"];

/// Matcher for flat records such as `{ "username": "bob" }`.
pub struct FlatField;

impl Matcher for FlatField {
    fn name(&self) -> &'static str {
        "flat_field"
    }

    fn try_match<'a>(&self, entry: &'a Value, _role: Role) -> Option<&'a Value> {
        let fields = entry.as_object()?;
        FIELDS.iter().find_map(|key| fields.get(*key))
    }
}
