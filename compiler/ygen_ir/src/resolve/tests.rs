use super::*;
use crate::test_helpers::{d_list_directory, directory, fixture_tree, id, path};
use pretty_assertions::assert_eq;

fn modules(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| (*s).to_owned()).collect()
}

fn foo_directory(tree: &SchemaTree) -> Directory {
    directory(
        tree,
        "Foo",
        &["", "module", "foo"],
        "module",
        &[("baz", "foo/bar/baz")],
    )
}

/// Move every primary field into the shadow set.
fn as_shadowed(mut dir: Directory) -> Directory {
    dir.shadowed_fields = std::mem::take(&mut dir.fields);
    dir
}

#[test]
fn test_relative_path() {
    let tree = fixture_tree();
    let dir = foo_directory(&tree);
    assert_eq!(
        resolve_path(&tree, &dir, "baz", false, false).unwrap(),
        Some(path(&["bar", "baz"]))
    );
}

#[test]
fn test_absolute_path() {
    let tree = fixture_tree();
    let dir = foo_directory(&tree);
    assert_eq!(
        resolve_path(&tree, &dir, "baz", false, true).unwrap(),
        Some(path(&["", "foo", "bar", "baz"]))
    );
}

#[test]
fn test_missing_field() {
    let tree = fixture_tree();
    let dir = foo_directory(&tree);
    let err = resolve_path(&tree, &dir, "baazar", false, false).unwrap_err();
    assert_eq!(
        err,
        IrError::MissingField {
            field: "baazar".to_owned(),
            directory: "Foo".to_owned(),
        }
    );
    assert!(err
        .to_string()
        .contains("field name \"baazar\" does not exist in Directory"));
}

#[test]
fn test_missing_shadowed_field_is_not_an_error() {
    let tree = fixture_tree();
    let dir = as_shadowed(foo_directory(&tree));
    assert_eq!(resolve_path(&tree, &dir, "baazar", true, false).unwrap(), None);
    assert_eq!(
        resolve_map_paths(&tree, &dir, "baazar", true, true, false).unwrap(),
        MapPaths::default()
    );
}

#[test]
fn test_shadowed_lookup_resolves_like_primary() {
    let tree = fixture_tree();
    let dir = as_shadowed(foo_directory(&tree));
    assert_eq!(
        resolve_path(&tree, &dir, "baz", true, false).unwrap(),
        Some(path(&["bar", "baz"]))
    );
    assert_eq!(
        resolve_path(&tree, &dir, "baz", true, true).unwrap(),
        Some(path(&["", "foo", "bar", "baz"]))
    );
}

#[test]
fn test_directory_path_too_long() {
    let tree = fixture_tree();
    let mut dir = foo_directory(&tree);
    dir.path = path(&["", "module", "foo", "too", "long"]);
    for shadow in [false, true] {
        let dir = if shadow { as_shadowed(dir.clone()) } else { dir.clone() };
        let err = resolve_path(&tree, &dir, "baz", shadow, false).unwrap_err();
        assert!(matches!(err, IrError::InvalidPath { .. }), "{err:?}");
        assert!(err.to_string().contains("is not a valid child"));
    }
}

#[test]
fn test_directory_path_not_a_prefix() {
    let tree = fixture_tree();
    let mut dir = foo_directory(&tree);
    dir.path = path(&["", "module", "other"]);
    let err = resolve_path(&tree, &dir, "baz", false, false).unwrap_err();
    assert_eq!(
        err,
        IrError::InvalidPath {
            field_path: "/module/foo/bar/baz".to_owned(),
            directory_path: "/module/other".to_owned(),
        }
    );
}

#[test]
fn test_list_key_paths() {
    let tree = fixture_tree();
    let dir = directory(
        &tree,
        "DList",
        &["", "d-module", "d-container", "d-list"],
        "d-module",
        &[("d-key", "d-container/d-list/config/d-key")],
    );
    assert_eq!(
        resolve_path(&tree, &dir, "d-key", false, false).unwrap(),
        Some(path(&["config", "d-key"]))
    );
    assert_eq!(
        resolve_path(&tree, &dir, "d-key", false, true).unwrap(),
        Some(path(&["", "d-container", "d-list", "config", "d-key"]))
    );
}

#[test]
fn test_map_paths_uncompressed() {
    let tree = fixture_tree();
    let dir = directory(
        &tree,
        "AContainer",
        &["", "a-module", "a-container"],
        "a-module",
        &[("field-a", "a-container/field-a")],
    );
    let got = resolve_map_paths(&tree, &dir, "field-a", false, false, false).unwrap();
    assert_eq!(got.paths, vec![path(&["field-a"])]);
    assert_eq!(got.modules, vec![modules(&["a-module"])]);
}

#[test]
fn test_map_paths_field_not_below_directory() {
    let tree = fixture_tree();
    let dir = directory(
        &tree,
        "AContainer",
        &["", "a-module", "a-container"],
        "a-module",
        &[("field-a", "a-container")],
    );
    let err = resolve_map_paths(&tree, &dir, "field-a", false, false, false).unwrap_err();
    assert!(matches!(err, IrError::InvalidPath { .. }), "{err:?}");
}

fn b_container(tree: &SchemaTree, field: &str) -> Directory {
    let config = format!("b-container/config/{field}");
    let state = format!("b-container/state/{field}");
    directory(
        tree,
        "BContainer",
        &["", "a-module", "b-container"],
        "a-module",
        &[(field, config.as_str())],
    )
    .with_shadowed_field(field, id(tree, "a-module", &state))
}

#[test]
fn test_map_paths_compressed_selects_branch() {
    let tree = fixture_tree();
    let dir = b_container(&tree, "field-b");

    let config = resolve_map_paths(&tree, &dir, "field-b", true, false, false).unwrap();
    assert_eq!(config.paths, vec![path(&["config", "field-b"])]);
    assert_eq!(config.modules, vec![modules(&["a-module", "a-module"])]);

    let state = resolve_map_paths(&tree, &dir, "field-b", true, true, false).unwrap();
    assert_eq!(state.paths, vec![path(&["state", "field-b"])]);
    assert_eq!(state.modules, vec![modules(&["a-module", "a-module"])]);
}

#[test]
fn test_map_paths_augmented_field_reports_augmenting_module() {
    let tree = fixture_tree();
    let dir = b_container(&tree, "field-c");

    let config = resolve_map_paths(&tree, &dir, "field-c", true, false, false).unwrap();
    assert_eq!(config.paths, vec![path(&["config", "field-c"])]);
    assert_eq!(config.modules, vec![modules(&["a-module", "d-module"])]);

    let state = resolve_map_paths(&tree, &dir, "field-c", true, true, false).unwrap();
    assert_eq!(state.paths, vec![path(&["state", "field-c"])]);
    assert_eq!(state.modules, vec![modules(&["a-module", "d-module"])]);

    let absolute = resolve_map_paths(&tree, &dir, "field-c", true, false, true).unwrap();
    assert_eq!(
        absolute.paths,
        vec![path(&["", "b-container", "config", "field-c"])]
    );
    assert_eq!(
        absolute.modules,
        vec![modules(&["", "a-module", "a-module", "d-module"])]
    );
}

#[test]
fn test_map_paths_absolute() {
    let tree = fixture_tree();
    let dir = directory(
        &tree,
        "CContainer",
        &["", "a-module", "b-container", "c-container"],
        "a-module",
        &[("field-d", "b-container/c-container/field-d")],
    );
    let got = resolve_map_paths(&tree, &dir, "field-d", false, false, true).unwrap();
    assert_eq!(
        got.paths,
        vec![path(&["", "b-container", "c-container", "field-d"])]
    );
    assert_eq!(
        got.modules,
        vec![modules(&["", "a-module", "a-module", "a-module"])]
    );
}

#[test]
fn test_map_paths_module_as_field_of_root() {
    let tree = fixture_tree();
    let dir = directory(&tree, "Root", &[""], "a-module", &[("top", "")]);
    let got = resolve_map_paths(&tree, &dir, "top", false, false, false).unwrap();
    assert_eq!(got.paths, vec![path(&["a-module"])]);
    assert_eq!(got.modules, vec![modules(&["a-module"])]);
}

#[test]
fn test_map_paths_list_key_alias() {
    let tree = fixture_tree();
    let dir = d_list_directory(&tree);
    let got = resolve_map_paths(&tree, &dir, "d-key", true, false, false).unwrap();
    assert_eq!(
        got.paths,
        vec![path(&["config", "d-key"]), path(&["d-key"])]
    );
    assert_eq!(
        got.modules,
        vec![modules(&["d-module", "d-module"]), modules(&["d-module"])]
    );
}

#[test]
fn test_map_paths_list_key_alias_on_shadow_branch() {
    let tree = fixture_tree();
    let dir = d_list_directory(&tree);
    let got = resolve_map_paths(&tree, &dir, "d-key", true, true, false).unwrap();
    assert_eq!(got.paths, vec![path(&["state", "d-key"]), path(&["d-key"])]);
    assert_eq!(
        got.modules,
        vec![modules(&["d-module", "d-module"]), modules(&["d-module"])]
    );
}

#[test]
fn test_map_paths_list_key_alias_absolute() {
    let tree = fixture_tree();
    let dir = d_list_directory(&tree);
    let got = resolve_map_paths(&tree, &dir, "d-key", true, false, true).unwrap();
    assert_eq!(
        got.paths,
        vec![
            path(&["", "d-container", "d-list", "config", "d-key"]),
            path(&["", "d-container", "d-list", "d-key"]),
        ]
    );
    assert_eq!(
        got.modules,
        vec![
            modules(&["", "d-module", "d-module", "d-module", "d-module"]),
            modules(&["", "d-module", "d-module", "d-module"]),
        ]
    );
}

#[test]
fn test_no_list_key_alias_without_compression() {
    let tree = fixture_tree();
    let dir = d_list_directory(&tree);
    let got = resolve_map_paths(&tree, &dir, "d-key", false, false, false).unwrap();
    assert_eq!(got.paths, vec![path(&["config", "d-key"])]);
}

#[test]
fn test_no_list_key_alias_for_direct_key_leaf() {
    let tree = fixture_tree();
    let mut dir = d_list_directory(&tree);
    let direct = id(&tree, "d-module", "d-container/d-list/d-key");
    dir.fields.insert("d-key".to_owned(), direct);
    dir.list_attr = Some(crate::directory::ListAttr {
        key_elems: vec![direct],
    });
    let got = resolve_map_paths(&tree, &dir, "d-key", true, false, false).unwrap();
    assert_eq!(got.paths, vec![path(&["d-key"])]);
}
