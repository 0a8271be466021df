//! Ygen Schema - Resolved YANG Schema Tree
//!
//! This crate holds the already-resolved schema tree that the IR compiler
//! walks. Parsing YANG text happens elsewhere; what arrives here is a flat
//! arena of entries with parent/child links and the metadata the compiler
//! needs:
//! - Entry kinds (module, container, list, leaf, ...)
//! - Status (current, deprecated, obsolete)
//! - Instantiating module, so augmented nodes report their true owner
//! - List keys and leafref targets
//! - Schema paths as ordered segment values (`SchemaPath`)
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: entries live in one `Vec`, linked by `EntryId(u32)`
//! - **Immutable After Build**: `SchemaTreeBuilder` is the only way to add
//!   entries; a finished `SchemaTree` never changes
//! - **Paths Are Values**: a `SchemaPath` owns its segments, so a directory
//!   path and a derived field path never alias the same storage

mod builder;
mod entry;
mod entry_id;
mod error;
mod path;
mod tree;

pub use builder::{EntrySpec, SchemaTreeBuilder};
pub use entry::{Entry, EntryKind, LeafType, Status};
pub use entry_id::EntryId;
pub use error::SchemaError;
pub use path::SchemaPath;
pub use tree::{Node, SchemaTree};
