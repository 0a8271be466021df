//! Directory → `ParsedDirectory` compilation.
//!
//! For each directory, in schema path order:
//! 1. Drop fields filtered by status (`skip_deprecated`, `skip_obsolete`)
//! 2. Ask the `LangMapper` for each field's name and type
//! 3. Resolve mapped paths (primary, and shadow when requested)
//! 4. Tag each field with its path origin
//! 5. Make field names collision-free with `assign_names`
//!
//! Any failure aborts the whole compile.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use ygen_schema::{EntryId, EntryKind, Node, SchemaTree};

use crate::directory::{Directory, DirectoryMap};
use crate::mapper::LangMapper;
use crate::names::assign_names;
use crate::options::IrOptions;
use crate::parsed::{DirType, ListKey, NodeDetails, NodeType, ParsedDirectory, YangNodeDetails};
use crate::resolve::{resolve_map_paths, MapPaths};
use crate::{IrError, Result};

/// Compile every directory in `directories` into its output IR.
///
/// The result is keyed by the same schema paths as the input. Directories
/// whose fields were all filtered out are still present.
#[tracing::instrument(level = "debug", skip_all, fields(count = directories.len()))]
pub fn compile<M: LangMapper + ?Sized>(
    mapper: &M,
    directories: &DirectoryMap,
    tree: &SchemaTree,
    opts: &IrOptions,
) -> Result<FxHashMap<String, ParsedDirectory>> {
    let compiler = DirectoryCompiler { mapper, tree, opts };

    let mut paths: Vec<(&String, &Directory)> = directories.iter().collect();
    paths.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut compiled = FxHashMap::with_capacity_and_hasher(paths.len(), Default::default());
    for (path, dir) in paths {
        compiled.insert(path.clone(), compiler.directory(dir)?);
    }
    Ok(compiled)
}

/// Per-run compilation context.
struct DirectoryCompiler<'a, M: ?Sized> {
    mapper: &'a M,
    tree: &'a SchemaTree,
    opts: &'a IrOptions,
}

impl<'a, M: LangMapper + ?Sized> DirectoryCompiler<'a, M> {
    fn node(&self, id: EntryId) -> Result<Node<'a>> {
        self.tree
            .node(id)
            .ok_or(IrError::UnknownEntry { raw: id.raw() })
    }

    #[tracing::instrument(level = "trace", skip_all, fields(dir = %dir.name))]
    fn directory(&self, dir: &Directory) -> Result<ParsedDirectory> {
        let node = self.node(dir.entry)?;
        let entry = node.entry();
        let compress = self.opts.transformation_options.compress_behaviour;

        let mut keys: Vec<(&String, EntryId)> =
            dir.fields.iter().map(|(key, &id)| (key, id)).collect();
        keys.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut fields = FxHashMap::with_capacity_and_hasher(keys.len(), Default::default());
        for (key, id) in keys {
            let field = self.node(id)?;
            if self.filtered(field) {
                tracing::debug!(field = %key, status = ?field.entry().status, "skipping field");
                continue;
            }
            fields.insert(key.clone(), self.field(dir, node, key, field)?);
        }

        let mut parsed = ParsedDirectory {
            name: dir.name.clone(),
            dir_type: if entry.is_list() {
                DirType::List
            } else {
                DirType::Container
            },
            path: dir.path.to_string(),
            schema_path: node.data_path().to_string(),
            package_name: self
                .mapper
                .package_name(node, compress, self.opts.nested_directories)?,
            fields,
            list_keys: self.list_keys(node)?,
            is_fake_root: dir.is_fake_root,
            belonging_module: node.module().to_owned(),
            root_element_module: node.root_module().to_owned(),
            defining_module: entry.defining_module().to_owned(),
            telemetry_atomic: dir.telemetry_atomic,
            compressed_telemetry_atomic: dir.compressed_telemetry_atomic,
            config_false: !node.is_config(),
        };

        if let Some(names) = assign_names(Some(&parsed)) {
            for (key, name) in names {
                if let Some(details) = parsed.fields.get_mut(&key) {
                    details.name = name;
                }
            }
        }
        Ok(parsed)
    }

    fn filtered(&self, field: Node<'_>) -> bool {
        let transform = &self.opts.transformation_options;
        let entry = field.entry();
        (transform.skip_deprecated && entry.is_deprecated())
            || (transform.skip_obsolete && entry.is_obsolete())
    }

    fn field(
        &self,
        dir: &Directory,
        dir_node: Node<'_>,
        key: &str,
        field: Node<'_>,
    ) -> Result<NodeDetails> {
        let opts = self.opts;
        let entry = field.entry();

        let mapped = resolve_map_paths(
            self.tree,
            dir,
            key,
            opts.compress_paths,
            false,
            opts.absolute_paths,
        )?;
        let shadow = if opts.shadow_schema_paths {
            resolve_map_paths(
                self.tree,
                dir,
                key,
                opts.compress_paths,
                true,
                opts.absolute_paths,
            )?
        } else {
            MapPaths::default()
        };

        let node_type = match entry.kind {
            EntryKind::Leaf => NodeType::Leaf,
            EntryKind::LeafList => NodeType::LeafList,
            EntryKind::List => NodeType::List,
            EntryKind::AnyData => NodeType::AnyData,
            EntryKind::Module | EntryKind::Container | EntryKind::Choice | EntryKind::Case => {
                NodeType::Container
            }
        };
        let lang_type = match node_type {
            NodeType::Leaf | NodeType::LeafList if is_key(dir, dir_node, field) => {
                self.mapper.key_leaf_type(field, opts)?
            }
            NodeType::Leaf | NodeType::LeafList => self.mapper.leaf_type(field, opts)?,
            NodeType::Container | NodeType::List | NodeType::AnyData => None,
        };

        let mut details = NodeDetails {
            name: self.mapper.field_name(field)?,
            yang_details: YangNodeDetails {
                name: field.name().to_owned(),
                defaults: entry.defaults.clone(),
                belonging_module: field.module().to_owned(),
                root_element_module: field.root_module().to_owned(),
                defining_module: entry.defining_module().to_owned(),
                path: field.data_path().to_string(),
                schema_path: field.schema_path().to_string(),
                leafref_target_path: field
                    .leafref_target()
                    .map(|target| target.data_path().to_string()),
                presence_statement: entry.presence.clone(),
                description: entry.description.clone(),
                ordered_by_user: entry.ordered_by_user,
                config_false: !field.is_config(),
                origin: self.origin(field),
            },
            node_type,
            lang_type,
            mapped_paths: mapped.paths,
            mapped_path_modules: mapped.modules,
            shadow_mapped_paths: shadow.paths,
            shadow_mapped_path_modules: shadow.modules,
            flags: BTreeMap::new(),
        };
        details.flags = self.mapper.populate_field_flags(&details, field);

        tracing::trace!(
            field = key,
            name = %details.name,
            paths = details.mapped_paths.len(),
            "compiled field"
        );
        Ok(details)
    }

    /// Path origin: explicit name, else the field's module if requested.
    fn origin(&self, field: Node<'_>) -> String {
        if !self.opts.path_origin_name.is_empty() {
            self.opts.path_origin_name.clone()
        } else if self.opts.use_module_name_as_path_origin {
            field.module().to_owned()
        } else {
            String::new()
        }
    }

    /// Emitted keys of a list directory, by YANG key name.
    fn list_keys(&self, node: Node<'_>) -> Result<Option<BTreeMap<String, ListKey>>> {
        let entry = node.entry();
        if !entry.is_list() {
            return Ok(None);
        }
        let mut keys = BTreeMap::new();
        for name in &entry.keys {
            let Some(leaf) = node.data_child(name) else {
                continue;
            };
            keys.insert(
                name.clone(),
                ListKey {
                    name: self.mapper.field_name(leaf)?,
                    lang_type: self.mapper.key_leaf_type(leaf, self.opts)?,
                },
            );
        }
        Ok(Some(keys))
    }
}

/// Whether `field` is one of the keys of the list `dir` was built from,
/// either a recorded key element or a key leaf directly inside the list.
fn is_key(dir: &Directory, dir_node: Node<'_>, field: Node<'_>) -> bool {
    if dir
        .list_attr
        .as_ref()
        .is_some_and(|attr| attr.key_elems.contains(&field.id()))
    {
        return true;
    }
    dir_node.entry().is_list()
        && field.data_parent().is_some_and(|p| p.id() == dir_node.id())
        && dir_node.entry().keys.iter().any(|k| k == field.name())
}
