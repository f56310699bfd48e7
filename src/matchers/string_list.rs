/// Matcher for the nested record layout used by official exports:
///
///   `{ "title": "", "string_list_data": [ { "href": "...", "value": "name", "timestamp": 0 } ] }`
///
/// Only the first record is consulted. Following exports sometimes drop
/// `value` and carry only `href`, so `href` is accepted for that role.
use serde_json::Value;

use super::Matcher;
use crate::model::Role;

pub struct StringListData;

impl Matcher for StringListData {
    fn name(&self) -> &'static str {
        "string_list_data"
    }

    fn try_match<'a>(&self, entry: &'a Value, role: Role) -> Option<&'a Value> {
        let record = entry
            .get("string_list_data")
            .and_then(|v| v.as_array())
            .and_then(|records| records.first())?;

        record.get("value").or_else(|| {
            if role.accepts_profile_links() {
                record.get("href")
            } else {
                None
            }
        })
    }
}
