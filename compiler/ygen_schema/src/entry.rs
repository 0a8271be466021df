//! Schema entry data.

use std::fmt;

use crate::EntryId;

/// What kind of schema statement an entry was built from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
    Module,
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Case,
    AnyData,
}

impl EntryKind {
    /// Choice and case statements never appear in data paths.
    #[inline]
    pub const fn is_choice_or_case(self) -> bool {
        matches!(self, EntryKind::Choice | EntryKind::Case)
    }

    /// Whether entries of this kind may have children.
    #[inline]
    pub const fn is_directory(self) -> bool {
        matches!(
            self,
            EntryKind::Module
                | EntryKind::Container
                | EntryKind::List
                | EntryKind::Choice
                | EntryKind::Case
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EntryKind::Module => "module",
            EntryKind::Container => "container",
            EntryKind::List => "list",
            EntryKind::Leaf => "leaf",
            EntryKind::LeafList => "leaf-list",
            EntryKind::Choice => "choice",
            EntryKind::Case => "case",
            EntryKind::AnyData => "anydata",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YANG `status` statement value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Current,
    Deprecated,
    Obsolete,
}

/// Type of a leaf or leaf-list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeafType {
    /// A built-in or typedef'd type, by name (`string`, `uint32`, ...).
    Named(String),
    /// A reference to another leaf, by YANG path expression.
    Leafref { path: String },
}

impl LeafType {
    /// The YANG base type name.
    pub fn kind_name(&self) -> &str {
        match self {
            LeafType::Named(name) => name,
            LeafType::Leafref { .. } => "leafref",
        }
    }

    /// The leafref target path, if this is a leafref.
    pub fn leafref_path(&self) -> Option<&str> {
        match self {
            LeafType::Leafref { path } => Some(path),
            LeafType::Named(_) => None,
        }
    }
}

/// One node of the resolved schema.
///
/// Entries are stored in a `SchemaTree` arena and link to each other by
/// `EntryId`. `module` is the instantiating module: for a node injected by
/// an `augment`, it names the augmenting module, not the module that owns
/// the augmented container.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub parent: Option<EntryId>,
    pub children: Vec<EntryId>,
    pub status: Status,
    pub module: String,
    /// Module whose grouping text defined this node, when it differs from `module`.
    pub defining_module: Option<String>,
    pub leaf_type: Option<LeafType>,
    /// Key leaf names, for lists.
    pub keys: Vec<String>,
    pub defaults: Vec<String>,
    pub description: Option<String>,
    /// Explicit `config` statement; `None` inherits from the parent.
    pub config: Option<bool>,
    pub presence: Option<String>,
    pub ordered_by_user: bool,
}

impl Entry {
    pub fn is_leaf(&self) -> bool {
        self.kind == EntryKind::Leaf
    }

    pub fn is_leaf_list(&self) -> bool {
        self.kind == EntryKind::LeafList
    }

    pub fn is_list(&self) -> bool {
        self.kind == EntryKind::List
    }

    pub fn is_container(&self) -> bool {
        self.kind == EntryKind::Container
    }

    pub fn is_deprecated(&self) -> bool {
        self.status == Status::Deprecated
    }

    pub fn is_obsolete(&self) -> bool {
        self.status == Status::Obsolete
    }

    /// Defining module, falling back to the instantiating module.
    pub fn defining_module(&self) -> &str {
        self.defining_module.as_deref().unwrap_or(&self.module)
    }
}
