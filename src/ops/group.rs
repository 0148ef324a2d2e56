use indexmap::IndexMap;

use crate::model::Message;

/// Group tiles by calendar year, preserving store order inside each group.
///
/// Keys appear in first-seen order: the year of the first tile in the
/// store is the first key, and so on. Presentation layers that want
/// newest-first sort the keys themselves; the map order here is what
/// `flatten` concatenates in.
pub fn by_year(records: &[Message]) -> IndexMap<i32, Vec<Message>> {
    let mut groups: IndexMap<i32, Vec<Message>> = IndexMap::new();
    for record in records {
        groups.entry(record.year()).or_default().push(record.clone());
    }
    groups
}

/// Concatenate year groups back into a flat sequence, in map key order.
pub fn flatten(groups: IndexMap<i32, Vec<Message>>) -> Vec<Message> {
    groups.into_values().flatten().collect()
}

/// Group keys in presentation order: newest year first. Sorting happens
/// here, at display time; the map itself stays in first-seen order.
pub fn years_newest_first(groups: &IndexMap<i32, Vec<Message>>) -> Vec<i32> {
    let mut years: Vec<i32> = groups.keys().copied().collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
}
