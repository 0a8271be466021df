//! Deterministic field ordering and collision-free field display names.
//!
//! Map iteration order is never observable: both functions sort field keys
//! before producing anything.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::directory::Directory;
use crate::parsed::ParsedDirectory;

/// Field keys of `directory` in ascending byte order.
///
/// `None` in gives `None` out; a directory with no fields gives an empty
/// vector, so callers can tell the two apart.
pub fn ordered_field_names(directory: Option<&Directory>) -> Option<Vec<String>> {
    let directory = directory?;
    let mut names: Vec<String> = directory.fields.keys().cloned().collect();
    names.sort_unstable();
    Some(names)
}

/// Field key → display name for `directory`, with no two display names
/// equal under case folding.
///
/// Keys are visited in ascending byte order. The first key to claim a
/// case-folded name keeps its mapper-supplied name; the Nth later key with
/// the same folded name gets N trailing underscores. If that still collides
/// with a name already handed out, more underscores are added until it
/// does not.
///
/// ```text
/// quick → Quick      th-E → ThE      th-e → ThE_      thE → ThE__
/// ```
pub fn assign_names(directory: Option<&ParsedDirectory>) -> Option<FxHashMap<String, String>> {
    let directory = directory?;
    let mut fields: Vec<(&String, &str)> = directory
        .fields
        .iter()
        .map(|(key, details)| (key, details.name.as_str()))
        .collect();
    fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut collisions: FxHashMap<String, usize> = FxHashMap::default();
    let mut taken: FxHashSet<String> = FxHashSet::default();
    let mut assigned = FxHashMap::with_capacity_and_hasher(fields.len(), Default::default());

    for (key, intended) in fields {
        let count = collisions.entry(fold(intended)).or_insert(0);
        let mut name = String::with_capacity(intended.len() + *count);
        name.push_str(intended);
        name.extend(std::iter::repeat('_').take(*count));
        *count += 1;

        while !taken.insert(fold(&name)) {
            name.push('_');
        }
        assigned.insert(key.clone(), name);
    }
    Some(assigned)
}

/// Case-insensitive canonical form of a display name.
fn fold(name: &str) -> String {
    name.to_lowercase()
}
