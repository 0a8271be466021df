//! Output IR consumed by the emission stage.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use ygen_schema::SchemaPath;

use crate::mapper::{FieldFlags, MappedType};

/// Whether a directory stands for a container or a list.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirType {
    #[default]
    Container,
    List,
}

/// Schema kind of a field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    Leaf,
    LeafList,
    Container,
    List,
    AnyData,
}

/// A list key as emitted: display name and mapped type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListKey {
    pub name: String,
    pub lang_type: Option<MappedType>,
}

/// Schema facts about a field, independent of target language.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YangNodeDetails {
    pub name: String,
    pub defaults: Vec<String>,
    /// Instantiating module (the augmenting module for augmented nodes).
    pub belonging_module: String,
    /// Module of the top-level element containing the node.
    pub root_element_module: String,
    pub defining_module: String,
    /// Data path without the module segment, e.g. `/a/b/c`.
    pub path: String,
    /// Schema path with the module segment, e.g. `/module/a/b/c`.
    pub schema_path: String,
    /// Data path of the leafref target, for leafrefs.
    pub leafref_target_path: Option<String>,
    pub presence_statement: Option<String>,
    pub description: Option<String>,
    pub ordered_by_user: bool,
    pub config_false: bool,
    /// Path origin tag (gNMI `origin`).
    pub origin: String,
}

/// One field of a `ParsedDirectory`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeDetails {
    /// Display identifier from the mapper; made collision-free per
    /// directory by `assign_names`.
    pub name: String,
    pub yang_details: YangNodeDetails,
    pub node_type: NodeType,
    pub lang_type: Option<MappedType>,
    pub mapped_paths: Vec<SchemaPath>,
    pub mapped_path_modules: Vec<Vec<String>>,
    pub shadow_mapped_paths: Vec<SchemaPath>,
    pub shadow_mapped_path_modules: Vec<Vec<String>>,
    pub flags: FieldFlags,
}

/// Per-aggregate output IR.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedDirectory {
    pub name: String,
    pub dir_type: DirType,
    /// Slash-joined directory path, module segment included.
    pub path: String,
    /// Data path of the directory entry, without the module segment.
    pub schema_path: String,
    pub package_name: String,
    pub fields: FxHashMap<String, NodeDetails>,
    /// YANG key name → emitted key, for lists.
    pub list_keys: Option<BTreeMap<String, ListKey>>,
    pub is_fake_root: bool,
    pub belonging_module: String,
    pub root_element_module: String,
    pub defining_module: String,
    pub telemetry_atomic: bool,
    pub compressed_telemetry_atomic: bool,
    pub config_false: bool,
}

/// Result of `generate_ir`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ir {
    /// Distinct directory names, ascending.
    pub ordered_names: Vec<String>,
    /// Schema path → compiled directory.
    pub directories: FxHashMap<String, ParsedDirectory>,
}

impl Ir {
    /// Directory paths ordered by directory name, then path.
    pub fn ordered_directory_paths(&self) -> Vec<&str> {
        let mut paths: Vec<(&str, &str)> = self
            .directories
            .iter()
            .map(|(path, dir)| (dir.name.as_str(), path.as_str()))
            .collect();
        paths.sort_unstable();
        paths.into_iter().map(|(_, path)| path).collect()
    }

    pub fn directory_by_name(&self, name: &str) -> Option<&ParsedDirectory> {
        self.directories.values().find(|dir| dir.name == name)
    }
}
