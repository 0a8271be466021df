//! Programmatic construction of a `SchemaTree`.
//!
//! The builder stands in for the YANG front end: callers register modules,
//! then attach entries beneath them. An entry attached with an explicit
//! `module` different from its parent's models an `augment`.
//!
//! ```text
//! let mut b = SchemaTreeBuilder::new();
//! let m = b.module("a-module")?;
//! let c = b.add(m, EntrySpec::container("b-container"))?;
//! let cfg = b.add(c, EntrySpec::container("config"))?;
//! b.add(cfg, EntrySpec::leaf("field-c", "string").module("d-module"))?;
//! let tree = b.finish()?;
//! ```

use rustc_hash::FxHashMap;

use crate::{Entry, EntryId, EntryKind, LeafType, SchemaError, SchemaTree, Status};

/// Attributes of an entry about to be added.
#[derive(Clone, Debug)]
pub struct EntrySpec {
    name: String,
    kind: EntryKind,
    status: Status,
    module: Option<String>,
    defining_module: Option<String>,
    leaf_type: Option<LeafType>,
    keys: Vec<String>,
    defaults: Vec<String>,
    description: Option<String>,
    config: Option<bool>,
    presence: Option<String>,
    ordered_by_user: bool,
}

impl EntrySpec {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            status: Status::Current,
            module: None,
            defining_module: None,
            leaf_type: None,
            keys: Vec::new(),
            defaults: Vec::new(),
            description: None,
            config: None,
            presence: None,
            ordered_by_user: false,
        }
    }

    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Container)
    }

    /// A list keyed by the given leaf names.
    pub fn list<I, S>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut spec = Self::new(name, EntryKind::List);
        spec.keys = keys.into_iter().map(Into::into).collect();
        spec
    }

    pub fn leaf(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, EntryKind::Leaf);
        spec.leaf_type = Some(LeafType::Named(type_name.into()));
        spec
    }

    pub fn leaf_list(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, EntryKind::LeafList);
        spec.leaf_type = Some(LeafType::Named(type_name.into()));
        spec
    }

    /// A leaf whose type is a leafref to `path`.
    pub fn leafref(name: impl Into<String>, path: impl Into<String>) -> Self {
        let mut spec = Self::new(name, EntryKind::Leaf);
        spec.leaf_type = Some(LeafType::Leafref { path: path.into() });
        spec
    }

    pub fn choice(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Choice)
    }

    pub fn case(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Case)
    }

    pub fn anydata(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::AnyData)
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Instantiating module; defaults to the parent's module.
    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    #[must_use]
    pub fn defining_module(mut self, module: impl Into<String>) -> Self {
        self.defining_module = Some(module.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.defaults.push(value.into());
        self
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    #[must_use]
    pub fn config(mut self, config: bool) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn presence(mut self, text: impl Into<String>) -> Self {
        self.presence = Some(text.into());
        self
    }

    #[must_use]
    pub fn ordered_by_user(mut self) -> Self {
        self.ordered_by_user = true;
        self
    }
}

/// Accumulates entries and produces an immutable `SchemaTree`.
#[derive(Debug, Default)]
pub struct SchemaTreeBuilder {
    entries: Vec<Entry>,
    modules: Vec<EntryId>,
    module_index: FxHashMap<String, EntryId>,
}

impl SchemaTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: Entry) -> EntryId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "schema trees never approach u32::MAX entries"
        )]
        let id = EntryId::new(self.entries.len() as u32);
        self.entries.push(entry);
        id
    }

    /// Register a module root.
    pub fn module(&mut self, name: impl Into<String>) -> Result<EntryId, SchemaError> {
        let name = name.into();
        if self.module_index.contains_key(&name) {
            return Err(SchemaError::DuplicateModule { name });
        }
        let id = self.push(Entry {
            name: name.clone(),
            kind: EntryKind::Module,
            parent: None,
            children: Vec::new(),
            status: Status::Current,
            module: name.clone(),
            defining_module: None,
            leaf_type: None,
            keys: Vec::new(),
            defaults: Vec::new(),
            description: None,
            config: None,
            presence: None,
            ordered_by_user: false,
        });
        self.modules.push(id);
        self.module_index.insert(name, id);
        Ok(id)
    }

    /// Attach a new entry beneath `parent`.
    pub fn add(&mut self, parent: EntryId, spec: EntrySpec) -> Result<EntryId, SchemaError> {
        let Some(parent_entry) = self.entries.get(parent.index()) else {
            return Err(SchemaError::UnknownEntry { raw: parent.raw() });
        };
        if !parent_entry.kind.is_directory() {
            return Err(SchemaError::NotADirectory {
                parent: parent_entry.name.clone(),
                kind: parent_entry.kind,
                child: spec.name,
            });
        }
        let duplicate = parent_entry
            .children
            .iter()
            .any(|&c| self.entries[c.index()].name == spec.name);
        if duplicate {
            return Err(SchemaError::DuplicateChild {
                parent: parent_entry.name.clone(),
                name: spec.name,
            });
        }
        let module = spec
            .module
            .unwrap_or_else(|| parent_entry.module.clone());

        let id = self.push(Entry {
            name: spec.name,
            kind: spec.kind,
            parent: Some(parent),
            children: Vec::new(),
            status: spec.status,
            module,
            defining_module: spec.defining_module,
            leaf_type: spec.leaf_type,
            keys: spec.keys,
            defaults: spec.defaults,
            description: spec.description,
            config: spec.config,
            presence: spec.presence,
            ordered_by_user: spec.ordered_by_user,
        });
        self.entries[parent.index()].children.push(id);
        Ok(id)
    }

    /// Validate list keys and leafrefs, then freeze the tree.
    pub fn finish(self) -> Result<SchemaTree, SchemaError> {
        let tree = SchemaTree::from_parts(self.entries, self.modules, self.module_index);
        for index in 0..tree.len() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "arena indices always fit u32"
            )]
            let Some(node) = tree.node(EntryId::new(index as u32)) else {
                continue;
            };
            let entry = node.entry();
            for key in &entry.keys {
                if node.data_child(key).is_none() {
                    return Err(SchemaError::MissingKey {
                        list: node.schema_path().to_string(),
                        key: key.clone(),
                    });
                }
            }
            if let Some(target) = entry.leaf_type.as_ref().and_then(LeafType::leafref_path) {
                if node.leafref_target().is_none() {
                    return Err(SchemaError::UnresolvedLeafref {
                        leaf: node.schema_path().to_string(),
                        target: target.to_owned(),
                    });
                }
            }
        }
        Ok(tree)
    }
}
