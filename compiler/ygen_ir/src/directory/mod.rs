//! Candidate aggregate types ("directories") handed to the IR compiler.
//!
//! Upstream grouping turns the schema tree into one `Directory` per
//! generated struct. A directory names its root schema entry, the fields it
//! groups and, after config/state compression, the shadowed alternates of
//! those fields.

use rustc_hash::FxHashMap;
use ygen_schema::{EntryId, Node, SchemaPath};

use crate::mapper::LangMapper;
use crate::options::CompressBehaviour;
use crate::MapperError;

/// Schema path (slash-joined) → directory.
pub type DirectoryMap = FxHashMap<String, Directory>;

/// Key leaves of a list directory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListAttr {
    /// Key leaf entries in key order. For compressed lists whose keys are
    /// leafrefs, these are the leaves the references point at.
    pub key_elems: Vec<EntryId>,
}

/// One candidate generated aggregate.
///
/// Every entry in `fields` and `shadowed_fields` must sit below `path`;
/// resolution reports a violation as `IrError::InvalidPath`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Directory {
    /// Display name, not yet checked for global uniqueness.
    pub name: String,
    /// Schema entry this directory was built from.
    pub entry: EntryId,
    /// Schema path of `entry`, module segment included.
    pub path: SchemaPath,
    pub fields: FxHashMap<String, EntryId>,
    /// Alternate-branch counterparts of `fields`, keyed the same way.
    pub shadowed_fields: FxHashMap<String, EntryId>,
    pub list_attr: Option<ListAttr>,
    pub is_fake_root: bool,
    pub telemetry_atomic: bool,
    pub compressed_telemetry_atomic: bool,
}

impl Directory {
    pub fn new(name: impl Into<String>, entry: EntryId, path: SchemaPath) -> Self {
        Self {
            name: name.into(),
            entry,
            path,
            fields: FxHashMap::default(),
            shadowed_fields: FxHashMap::default(),
            list_attr: None,
            is_fake_root: false,
            telemetry_atomic: false,
            compressed_telemetry_atomic: false,
        }
    }

    /// Start a directory for `node`, named by the mapper.
    ///
    /// Lists get a `ListAttr` whose key elements follow leafref keys to
    /// their targets.
    pub fn for_node<M: LangMapper + ?Sized>(
        mapper: &M,
        node: Node<'_>,
        compress: CompressBehaviour,
    ) -> Result<Self, MapperError> {
        let name = mapper.directory_name(node, compress)?;
        let mut dir = Self::new(name, node.id(), node.schema_path());
        if node.entry().is_list() {
            dir.list_attr = Some(ListAttr {
                key_elems: node.list_key_entries().into_iter().map(Node::id).collect(),
            });
        }
        Ok(dir)
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, entry: EntryId) -> Self {
        self.fields.insert(key.into(), entry);
        self
    }

    #[must_use]
    pub fn with_shadowed_field(mut self, key: impl Into<String>, entry: EntryId) -> Self {
        self.shadowed_fields.insert(key.into(), entry);
        self
    }

    pub fn is_list(&self) -> bool {
        self.list_attr.is_some()
    }
}
