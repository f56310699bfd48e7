use serde_json::Value;

use super::Matcher;
use crate::model::Role;

/// Matcher for array elements that are the handle itself: `["bob", "carol"]`.
pub struct BareString;

impl Matcher for BareString {
    fn name(&self) -> &'static str {
        "bare_string"
    }

    fn try_match<'a>(&self, entry: &'a Value, _role: Role) -> Option<&'a Value> {
        entry.is_string().then_some(entry)
    }
}
