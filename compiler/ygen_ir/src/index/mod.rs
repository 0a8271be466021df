//! Directory index: group directories by display name.

use rustc_hash::FxHashMap;

use crate::directory::{Directory, DirectoryMap};
use crate::{IrError, Result};

/// Directories keyed by their display name, plus the names in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirectoryIndex<'a> {
    /// Distinct display names, ascending byte order.
    pub ordered_names: Vec<String>,
    pub by_name: FxHashMap<String, &'a Directory>,
}

/// Index a directory map by display name.
///
/// Fails with `NullInput` when the map is absent and with
/// `StructuralConflict` when two schema paths yield the same name. An empty
/// map gives an empty index. The ordering of `ordered_names` is what makes
/// emitted code byte-identical between runs.
pub fn index_directories(directories: Option<&DirectoryMap>) -> Result<DirectoryIndex<'_>> {
    let Some(directories) = directories else {
        return Err(IrError::NullInput {
            what: "directory map",
        });
    };

    let mut paths: Vec<(&String, &Directory)> = directories.iter().collect();
    paths.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut by_name: FxHashMap<String, &Directory> =
        FxHashMap::with_capacity_and_hasher(paths.len(), Default::default());
    let mut claimed: FxHashMap<&str, Vec<String>> = FxHashMap::default();
    for (path, dir) in paths {
        claimed.entry(dir.name.as_str()).or_default().push(path.clone());
        by_name.entry(dir.name.clone()).or_insert(dir);
    }

    let mut ordered_names: Vec<String> = by_name.keys().cloned().collect();
    ordered_names.sort_unstable();

    if let Some((name, paths)) = ordered_names
        .iter()
        .filter_map(|name| claimed.get(name.as_str()).map(|paths| (name, paths)))
        .find(|(_, paths)| paths.len() > 1)
    {
        return Err(IrError::StructuralConflict {
            name: name.clone(),
            paths: paths.clone(),
        });
    }

    tracing::trace!(count = ordered_names.len(), "indexed directories");
    Ok(DirectoryIndex {
        ordered_names,
        by_name,
    })
}
