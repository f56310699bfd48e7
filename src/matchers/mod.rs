pub mod bare;
pub mod flat_field;
pub mod string_list;

use serde_json::Value;

use crate::model::Role;

pub use bare::BareString;
pub use flat_field::FlatField;
pub use string_list::StringListData;

/// Every element shape the extractor understands implements this trait.
pub trait Matcher: Sync {
    /// Short name, used in logs.
    fn name(&self) -> &'static str;

    /// Return the candidate username value if `entry` has this matcher's
    /// shape. A returned candidate need not be a string; the caller decides
    /// whether it is usable.
    fn try_match<'a>(&self, entry: &'a Value, role: Role) -> Option<&'a Value>;
}

/// Chain for elements of a root array or a recognised array key.
pub static RECORD_CHAIN: &[&dyn Matcher] = &[&StringListData, &FlatField, &BareString];

/// Chain for elements of arrays found by scanning an unrecognised object.
pub static SCAN_CHAIN: &[&dyn Matcher] = &[&FlatField, &BareString];

/// Try each matcher in order; the first one that recognises the entry wins.
pub fn first_match<'a>(
    chain: &[&dyn Matcher],
    entry: &'a Value,
    role: Role,
) -> Option<(&'static str, &'a Value)> {
    chain
        .iter()
        .find_map(|m| m.try_match(entry, role).map(|candidate| (m.name(), candidate)))
}
