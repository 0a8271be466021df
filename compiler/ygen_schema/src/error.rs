//! Errors raised while assembling a schema tree.

use thiserror::Error;

use crate::EntryKind;

/// Error from `SchemaTreeBuilder`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SchemaError {
    /// Two modules registered under one name.
    #[error("module {name:?} is already defined")]
    DuplicateModule { name: String },

    /// A parent ID that this builder never handed out.
    #[error("entry id {raw} does not belong to this schema tree")]
    UnknownEntry { raw: u32 },

    /// Children can only be added to modules, containers, lists, choices and cases.
    #[error("cannot add {child:?} under {parent} ({kind}): not a directory node")]
    NotADirectory {
        parent: String,
        kind: EntryKind,
        child: String,
    },

    /// Sibling names must be unique.
    #[error("{parent} already has a child named {name:?}")]
    DuplicateChild { parent: String, name: String },

    /// A list key naming a leaf the list does not have.
    #[error("list {list} declares key {key:?} which is not one of its leaves")]
    MissingKey { list: String, key: String },

    /// A leafref whose target path does not resolve.
    #[error("leafref {leaf} points at {target:?}, which does not exist")]
    UnresolvedLeafref { leaf: String, target: String },
}
