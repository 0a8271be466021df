//! Test helpers for IR unit testing.
//!
//! Provides a fixture schema covering augmentation, config/state pairs,
//! leafref list keys and status values, plus `MockMapper`, a
//! `LangMapper` that echoes schema names and can be told to fail.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ygen_schema::{EntryId, EntrySpec, SchemaPath, SchemaTree, SchemaTreeBuilder, Status};

use crate::directory::{Directory, ListAttr};
use crate::mapper::{LangMapper, MappedType};
use crate::options::{CompressBehaviour, IrOptions};
use crate::MapperError;

/// Modules `a-module`, `d-module`, `module` and `status-module`.
///
/// ```text
/// a-module
///   a-container/field-a
///   b-container/config/{field-b, field-c*}
///   b-container/state/{field-b, field-c*}        config false
///   b-container/c-container/field-d
/// d-module                                        * augments a-module
///   d-container/d-list[d-key]                     d-key -> ../config/d-key
///   d-container/d-list/{config,state}/d-key
/// module
///   foo/bar/baz
/// status-module
///   test-container/{normal-field, deprecated-field, obsolete-field}
/// ```
pub(crate) fn fixture_tree() -> SchemaTree {
    let mut b = SchemaTreeBuilder::new();

    let a = b.module("a-module").unwrap();
    let ac = b.add(a, EntrySpec::container("a-container")).unwrap();
    b.add(ac, EntrySpec::leaf("field-a", "string")).unwrap();
    let bc = b.add(a, EntrySpec::container("b-container")).unwrap();
    let cfg = b.add(bc, EntrySpec::container("config")).unwrap();
    let st = b
        .add(bc, EntrySpec::container("state").config(false))
        .unwrap();
    for branch in [cfg, st] {
        b.add(branch, EntrySpec::leaf("field-b", "string")).unwrap();
        b.add(
            branch,
            EntrySpec::leaf("field-c", "string").module("d-module"),
        )
        .unwrap();
    }
    let cc = b.add(bc, EntrySpec::container("c-container")).unwrap();
    b.add(cc, EntrySpec::leaf("field-d", "string")).unwrap();

    let d = b.module("d-module").unwrap();
    let dc = b.add(d, EntrySpec::container("d-container")).unwrap();
    let list = b.add(dc, EntrySpec::list("d-list", ["d-key"])).unwrap();
    b.add(list, EntrySpec::leafref("d-key", "../config/d-key"))
        .unwrap();
    let lcfg = b.add(list, EntrySpec::container("config")).unwrap();
    b.add(lcfg, EntrySpec::leaf("d-key", "string")).unwrap();
    let lst = b
        .add(list, EntrySpec::container("state").config(false))
        .unwrap();
    b.add(lst, EntrySpec::leaf("d-key", "string")).unwrap();

    let m = b.module("module").unwrap();
    let foo = b.add(m, EntrySpec::container("foo")).unwrap();
    let bar = b.add(foo, EntrySpec::container("bar")).unwrap();
    b.add(bar, EntrySpec::leaf("baz", "string")).unwrap();

    let s = b.module("status-module").unwrap();
    let tc = b.add(s, EntrySpec::container("test-container")).unwrap();
    b.add(tc, EntrySpec::leaf("normal-field", "string")).unwrap();
    b.add(
        tc,
        EntrySpec::leaf("deprecated-field", "string").status(Status::Deprecated),
    )
    .unwrap();
    b.add(
        tc,
        EntrySpec::leaf("obsolete-field", "string").status(Status::Obsolete),
    )
    .unwrap();

    b.finish().unwrap()
}

/// ID of the node at `path` below `module`; an empty path is the module.
pub(crate) fn id(tree: &SchemaTree, module: &str, path: &str) -> EntryId {
    tree.find(module, path)
        .unwrap_or_else(|| panic!("no node {path:?} in {module}"))
        .id()
}

pub(crate) fn path(segments: &[&str]) -> SchemaPath {
    segments.iter().copied().collect()
}

/// A directory named `name` rooted at `root` with the given fields.
pub(crate) fn directory(
    tree: &SchemaTree,
    name: &str,
    root: &[&str],
    module: &str,
    fields: &[(&str, &str)],
) -> Directory {
    let entry_path = root.get(2..).unwrap_or_default().join("/");
    fields.iter().fold(
        Directory::new(name, id(tree, module, &entry_path), path(root)),
        |dir, (key, field)| dir.with_field(*key, id(tree, module, field)),
    )
}

/// `d-list`, compressed: key `d-key` is the `config/d-key` leaf, with the
/// `state/d-key` leaf as its shadow.
pub(crate) fn d_list_directory(tree: &SchemaTree) -> Directory {
    let key = id(tree, "d-module", "d-container/d-list/config/d-key");
    let mut dir = Directory::new(
        "DList",
        id(tree, "d-module", "d-container/d-list"),
        path(&["", "d-module", "d-container", "d-list"]),
    )
    .with_field("d-key", key)
    .with_shadowed_field(
        "d-key",
        id(tree, "d-module", "d-container/d-list/state/d-key"),
    );
    dir.list_attr = Some(ListAttr {
        key_elems: vec![key],
    });
    dir
}

/// Echoes schema names and maps every leaf to `String`.
///
/// `fail_on` makes every call about a node of that name fail.
#[derive(Default)]
pub(crate) struct MockMapper {
    pub fail_on: Option<&'static str>,
}

impl MockMapper {
    fn check(&self, node: ygen_schema::Node<'_>) -> Result<(), MapperError> {
        match self.fail_on {
            Some(name) if name == node.name() => {
                Err(MapperError::new(format!("cannot map {name}")))
            }
            _ => Ok(()),
        }
    }
}

impl LangMapper for MockMapper {
    fn field_name(&self, node: ygen_schema::Node<'_>) -> Result<String, MapperError> {
        self.check(node)?;
        Ok(node.name().to_owned())
    }

    fn directory_name(
        &self,
        node: ygen_schema::Node<'_>,
        _compress: CompressBehaviour,
    ) -> Result<String, MapperError> {
        self.check(node)?;
        Ok(node.name().to_owned())
    }

    fn key_leaf_type(
        &self,
        node: ygen_schema::Node<'_>,
        _opts: &IrOptions,
    ) -> Result<Option<MappedType>, MapperError> {
        self.check(node)?;
        Ok(Some(MappedType::new("Key", "Key::default()")))
    }

    fn leaf_type(
        &self,
        node: ygen_schema::Node<'_>,
        _opts: &IrOptions,
    ) -> Result<Option<MappedType>, MapperError> {
        self.check(node)?;
        Ok(Some(MappedType::new("String", "String::new()")))
    }

    fn package_name(
        &self,
        _node: ygen_schema::Node<'_>,
        _compress: CompressBehaviour,
        _nested_directories: bool,
    ) -> Result<String, MapperError> {
        Ok(String::new())
    }
}
