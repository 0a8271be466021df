//! The finished schema arena and node handles for walking it.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Entry, EntryId, EntryKind, SchemaPath};

/// Immutable arena of schema entries, one root `Module` entry per module.
///
/// Built by `SchemaTreeBuilder`. Every `EntryId` stored inside an entry is
/// valid for this tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SchemaTree {
    entries: Vec<Entry>,
    /// Module roots in registration order.
    modules: Vec<EntryId>,
    module_index: FxHashMap<String, EntryId>,
}

impl SchemaTree {
    pub(crate) fn from_parts(
        entries: Vec<Entry>,
        modules: Vec<EntryId>,
        module_index: FxHashMap<String, EntryId>,
    ) -> Self {
        Self {
            entries,
            modules,
            module_index,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by ID, or `None` if the ID belongs to another tree.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.index())
    }

    /// Get a walkable handle for an entry.
    pub fn node(&self, id: EntryId) -> Option<Node<'_>> {
        self.get(id).map(|_| Node { tree: self, id })
    }

    /// Module roots in registration order.
    pub fn modules(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        self.modules.iter().map(move |&id| Node { tree: self, id })
    }

    pub fn module(&self, name: &str) -> Option<Node<'_>> {
        self.module_index
            .get(name)
            .map(|&id| Node { tree: self, id })
    }

    /// Find a data node by its slash-separated path below a module.
    ///
    /// Choice and case levels are transparent. An empty path returns the
    /// module itself.
    pub fn find(&self, module: &str, path: &str) -> Option<Node<'_>> {
        let mut node = self.module(module)?;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.data_child(segment)?;
        }
        Some(node)
    }

    /// Find a top-level data node in any module.
    fn top_level(&self, name: &str) -> Option<Node<'_>> {
        self.modules().find_map(|module| module.data_child(name))
    }
}

/// A borrowed handle to one entry of a `SchemaTree`.
///
/// Cheap to copy; all navigation returns further handles into the same tree.
#[derive(Copy, Clone)]
pub struct Node<'t> {
    tree: &'t SchemaTree,
    id: EntryId,
}

impl<'t> Node<'t> {
    #[inline]
    pub fn id(self) -> EntryId {
        self.id
    }

    #[inline]
    pub fn tree(self) -> &'t SchemaTree {
        self.tree
    }

    #[inline]
    pub fn entry(self) -> &'t Entry {
        &self.tree.entries[self.id.index()]
    }

    pub fn name(self) -> &'t str {
        &self.entry().name
    }

    pub fn kind(self) -> EntryKind {
        self.entry().kind
    }

    /// Instantiating module name.
    pub fn module(self) -> &'t str {
        &self.entry().module
    }

    fn at(self, id: EntryId) -> Node<'t> {
        Node {
            tree: self.tree,
            id,
        }
    }

    pub fn parent(self) -> Option<Node<'t>> {
        self.entry().parent.map(|id| self.at(id))
    }

    /// Nearest ancestor that is not a choice or case.
    pub fn data_parent(self) -> Option<Node<'t>> {
        let mut parent = self.parent()?;
        while parent.kind().is_choice_or_case() {
            parent = parent.parent()?;
        }
        Some(parent)
    }

    pub fn children(self) -> impl Iterator<Item = Node<'t>> {
        self.entry().children.iter().map(move |&id| self.at(id))
    }

    /// Direct child by name, including choice and case entries.
    pub fn child(self, name: &str) -> Option<Node<'t>> {
        self.children().find(|c| c.name() == name)
    }

    /// Data child by name, looking through choice and case levels.
    pub fn data_child(self, name: &str) -> Option<Node<'t>> {
        self.children().find_map(|c| {
            if c.kind().is_choice_or_case() {
                c.data_child(name)
            } else if c.name() == name {
                Some(c)
            } else {
                None
            }
        })
    }

    /// The module entry at the root of this node's tree.
    pub fn root(self) -> Node<'t> {
        let mut node = self;
        while let Some(parent) = node.parent() {
            node = parent;
        }
        node
    }

    /// Name of the module this node's top-level ancestor belongs to.
    pub fn root_module(self) -> &'t str {
        self.root().name()
    }

    /// Data ancestry from the module root down to this node, choice and
    /// case entries omitted.
    pub fn data_ancestry(self) -> Vec<Node<'t>> {
        let mut chain = vec![self];
        let mut node = self;
        while let Some(parent) = node.data_parent() {
            chain.push(parent);
            node = parent;
        }
        chain.reverse();
        chain
    }

    /// Full schema path including the module name: `["", "module", "a", "b"]`.
    pub fn schema_path(self) -> SchemaPath {
        std::iter::once("")
            .chain(self.data_ancestry().into_iter().map(Node::name))
            .collect()
    }

    /// Instantiating module of every segment in `schema_path()`, with the
    /// same leading empty segment.
    pub fn path_modules(self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(
                self.data_ancestry()
                    .into_iter()
                    .map(|n| n.module().to_owned()),
            )
            .collect()
    }

    /// Data path without the module segment: `["", "a", "b"]`.
    pub fn data_path(self) -> SchemaPath {
        std::iter::once("")
            .chain(self.data_ancestry().into_iter().skip(1).map(Node::name))
            .collect()
    }

    /// Effective `config` value, inherited from the nearest explicit ancestor.
    pub fn is_config(self) -> bool {
        let mut node = Some(self);
        while let Some(n) = node {
            if let Some(config) = n.entry().config {
                return config;
            }
            node = n.parent();
        }
        true
    }

    /// Follow this leaf's leafref to the node it targets.
    pub fn leafref_target(self) -> Option<Node<'t>> {
        let path = self.entry().leaf_type.as_ref()?.leafref_path()?;
        self.resolve(path)
    }

    /// Resolve a YANG path expression relative to this node.
    ///
    /// Handles `..`, `.`, absolute `/a/b` paths and `prefix:` qualifiers.
    /// Predicates (`[...]`) are ignored.
    pub fn resolve(self, path: &str) -> Option<Node<'t>> {
        let path = path.trim();
        let mut segments = path.split('/').map(strip_qualifiers);
        let mut node = if path.starts_with('/') {
            segments.next();
            let first = segments.next()?;
            self.tree.top_level(first)?
        } else {
            self
        };
        for segment in segments {
            node = match segment {
                "" | "." => node,
                ".." => node.data_parent()?,
                name => node.data_child(name)?,
            };
        }
        Some(node)
    }

    /// Key leaves of a list, in key order. A key that is itself a leafref is
    /// replaced by the leaf it references.
    pub fn list_key_entries(self) -> Vec<Node<'t>> {
        self.entry()
            .keys
            .iter()
            .filter_map(|key| self.data_child(key))
            .map(|leaf| leaf.leafref_target().unwrap_or(leaf))
            .collect()
    }
}

/// Drop `prefix:` qualifiers and `[...]` predicates from a path segment.
fn strip_qualifiers(segment: &str) -> &str {
    let segment = segment.split('[').next().unwrap_or(segment).trim();
    match segment.split_once(':') {
        Some((_, local)) => local,
        None => segment,
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?}, {})", self.id, self.schema_path())
    }
}
