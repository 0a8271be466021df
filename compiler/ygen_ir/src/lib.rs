//! IR compilation for the ygen code generator.
//!
//! This crate turns a resolved schema tree, already grouped into candidate
//! aggregate types (`Directory`), into the language-agnostic IR that code
//! emitters consume (`ParsedDirectory`, `NodeDetails`).
//!
//! # Pipeline Position
//!
//! ```text
//! YANG → Parse → Group Directories → **Compile IR** → Emit (Go, Rust, proto, ...)
//! ```
//!
//! # What Happens During Compilation
//!
//! 1. **Indexing** (`index`): directories grouped by display name, sorted,
//!    and checked for name conflicts
//! 2. **Path Resolution** (`resolve`): each field's relative or absolute
//!    schema path(s), honoring config/state compression, shadow branches,
//!    augmentation and list-key aliases
//! 3. **Directory Compilation** (`compile`): status filtering, mapper
//!    naming and typing, path-origin tagging
//! 4. **Field Naming** (`names`): deterministic field order and
//!    collision-free display names
//!
//! Target-language decisions are delegated to an injected `LangMapper`.
//! Output never depends on hash map iteration order: identical inputs give
//! identical IR.

mod compile;
mod directory;
mod error;
mod index;
mod mapper;
mod names;
mod options;
mod parsed;
mod resolve;
#[cfg(test)]
mod test_helpers;

use std::sync::Once;

use ygen_schema::SchemaTree;

pub use compile::compile;
pub use directory::{Directory, DirectoryMap, ListAttr};
pub use error::{IrError, MapperError, Result};
pub use index::{index_directories, DirectoryIndex};
pub use mapper::{CamelCaseMapper, EnumeratedType, FieldFlags, LangMapper, MappedType};
pub use names::{assign_names, ordered_field_names};
pub use options::{CompressBehaviour, IrOptions, TransformationOpts};
pub use parsed::{DirType, Ir, ListKey, NodeDetails, NodeType, ParsedDirectory, YangNodeDetails};
pub use resolve::{resolve_map_paths, resolve_path, MapPaths};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the IR compiler.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=ygen_ir=debug` or `RUST_LOG=ygen_ir::resolve=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Index and compile `directories` into the IR handed to emitters.
///
/// Fails on directory name conflicts and on any field that cannot be
/// resolved or mapped. No partial IR is ever returned.
#[tracing::instrument(level = "debug", skip_all, fields(count = directories.len()))]
pub fn generate_ir<M: LangMapper + ?Sized>(
    mapper: &M,
    tree: &SchemaTree,
    directories: &DirectoryMap,
    opts: &IrOptions,
) -> Result<Ir> {
    let index = index_directories(Some(directories))?;
    let directories = compile(mapper, directories, tree, opts)?;
    tracing::debug!(
        names = index.ordered_names.len(),
        directories = directories.len(),
        "generated IR"
    );
    Ok(Ir {
        ordered_names: index.ordered_names,
        directories,
    })
}
