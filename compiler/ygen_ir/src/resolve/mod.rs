//! Schema path resolution for directory fields.
//!
//! A field's path is reported either relative to its directory's root or
//! from the module boundary, and always alongside the instantiating module
//! of every segment so augmented leaves keep their true owner:
//!
//! ```text
//! directory  /a-module/b-container
//! field      /a-module/b-container/config/field-c   (augmented by d-module)
//!
//! relative   [config, field-c]             modules [a-module, d-module]
//! absolute   ["", b-container, config, field-c]
//!                                          modules ["", a-module, a-module, d-module]
//! ```

use ygen_schema::{EntryId, Node, SchemaPath, SchemaTree};

use crate::directory::Directory;
use crate::{IrError, Result};

/// Every path a field is reachable by, with per-segment modules.
///
/// `modules[i]` runs parallel to `paths[i]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MapPaths {
    pub paths: Vec<SchemaPath>,
    pub modules: Vec<Vec<String>>,
}

impl MapPaths {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn push(&mut self, path: SchemaPath, modules: Vec<String>) {
        self.paths.push(path);
        self.modules.push(modules);
    }
}

/// A resolved field path and the module of each of its segments.
struct Resolved<'t> {
    node: Node<'t>,
    path: SchemaPath,
    modules: Vec<String>,
}

/// Schema path of `field` in `dir`.
///
/// Looks the key up in `shadowed_fields` when `use_shadowed`, otherwise in
/// `fields`. A key missing from `fields` is `MissingField`; a key missing
/// from `shadowed_fields` is not an error and gives `Ok(None)`, since not
/// every field has a counterpart in the other branch.
pub fn resolve_path(
    tree: &SchemaTree,
    dir: &Directory,
    field: &str,
    use_shadowed: bool,
    absolute: bool,
) -> Result<Option<SchemaPath>> {
    Ok(find_schema_path(tree, dir, field, use_shadowed, absolute)?.map(|r| r.path))
}

/// Every path `field` of `dir` maps to.
///
/// `shadow_schema_paths` picks the branch: the shadowed entry when set,
/// the primary one otherwise. When `compress_paths` is set and `dir` is a
/// list whose key is this field reached through a nested container, the
/// bare key name is added as a second path.
pub fn resolve_map_paths(
    tree: &SchemaTree,
    dir: &Directory,
    field: &str,
    compress_paths: bool,
    shadow_schema_paths: bool,
    absolute: bool,
) -> Result<MapPaths> {
    let mut out = MapPaths::default();
    let Some(resolved) = find_schema_path(tree, dir, field, shadow_schema_paths, absolute)? else {
        return Ok(out);
    };
    out.push(resolved.path, resolved.modules);

    if compress_paths {
        if let Some((alias, modules)) = list_key_alias(tree, dir, field, absolute)? {
            out.push(alias, modules);
        }
    }
    Ok(out)
}

fn find_schema_path<'t>(
    tree: &'t SchemaTree,
    dir: &Directory,
    field: &str,
    use_shadowed: bool,
    absolute: bool,
) -> Result<Option<Resolved<'t>>> {
    let fields = if use_shadowed {
        &dir.shadowed_fields
    } else {
        &dir.fields
    };
    let Some(&id) = fields.get(field) else {
        if use_shadowed {
            return Ok(None);
        }
        return Err(IrError::MissingField {
            field: field.to_owned(),
            directory: dir.name.clone(),
        });
    };

    let node = entry_node(tree, id)?;
    let field_path = node.schema_path();
    if !field_path.is_descendant_of(&dir.path) {
        return Err(IrError::InvalidPath {
            field_path: field_path.to_string(),
            directory_path: dir.path.to_string(),
        });
    }

    let path_modules = SchemaPath::new(node.path_modules());
    let (path, modules) = if absolute {
        (boundary(field_path.tail(2)), boundary(path_modules.tail(2)))
    } else {
        let depth = dir.path.len();
        (field_path.tail(depth), path_modules.tail(depth))
    };
    tracing::trace!(field, %path, shadow = use_shadowed, "resolved field path");
    Ok(Some(Resolved {
        node,
        path,
        modules: modules.into_segments(),
    }))
}

/// The bare-key path of a list key reached through a nested container.
///
/// Computed from the primary entry regardless of the branch being
/// resolved: the alias names the key, not a branch.
fn list_key_alias(
    tree: &SchemaTree,
    dir: &Directory,
    field: &str,
    absolute: bool,
) -> Result<Option<(SchemaPath, Vec<String>)>> {
    let Some(list_attr) = &dir.list_attr else {
        return Ok(None);
    };
    if !dir.fields.contains_key(field) {
        return Ok(None);
    }
    let Some(primary) = find_schema_path(tree, dir, field, false, false)? else {
        return Ok(None);
    };
    if primary.path.len() < 2 {
        return Ok(None);
    }

    let field_path = primary.node.schema_path();
    let mut is_key = false;
    for &key in &list_attr.key_elems {
        if entry_node(tree, key)?.schema_path() == field_path {
            is_key = true;
            break;
        }
    }
    if !is_key {
        return Ok(None);
    }

    let name = primary.node.name();
    let module = primary.node.module();
    if !absolute {
        return Ok(Some((SchemaPath::new(vec![name.to_owned()]), vec![module.to_owned()])));
    }

    let depth = dir.path.len();
    let path_modules = primary.node.path_modules();
    let alias = boundary(dir.path.tail(2)).child(name);
    let modules: Vec<String> = std::iter::once(String::new())
        .chain(path_modules.get(2..depth).unwrap_or_default().iter().cloned())
        .chain(std::iter::once(module.to_owned()))
        .collect();
    Ok(Some((alias, modules)))
}

/// Prefix `path` with the empty module-boundary segment.
fn boundary(path: SchemaPath) -> SchemaPath {
    std::iter::once(String::new())
        .chain(path.into_segments())
        .collect()
}

fn entry_node(tree: &SchemaTree, id: EntryId) -> Result<Node<'_>> {
    tree.node(id)
        .ok_or(IrError::UnknownEntry { raw: id.raw() })
}

#[cfg(test)]
mod tests;
