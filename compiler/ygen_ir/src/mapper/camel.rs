//! Reference mapper: UpperCamelCase identifiers and Rust scalar types.

use rustc_hash::FxHashMap;
use ygen_schema::{EntryKind, LeafType, Node};

use super::{EnumeratedType, LangMapper, MappedType};
use crate::options::{CompressBehaviour, IrOptions};
use crate::MapperError;

/// Leafref chains longer than this are treated as cycles.
const MAX_LEAFREF_DEPTH: usize = 16;

/// Maps YANG names to UpperCamelCase (`th-e` → `ThE`) and YANG base types
/// to Rust scalars. Enumeration and identityref types are looked up in the
/// enumerated-type set supplied at construction.
#[derive(Clone, Debug, Default)]
pub struct CamelCaseMapper {
    /// YANG type name → extracted enum.
    enums: FxHashMap<String, EnumeratedType>,
}

impl CamelCaseMapper {
    pub fn new(enums: impl IntoIterator<Item = EnumeratedType>) -> Self {
        Self {
            enums: enums
                .into_iter()
                .map(|e| (e.type_name.clone(), e))
                .collect(),
        }
    }

    fn scalar(&self, node: Node<'_>, depth: usize) -> Result<MappedType, MapperError> {
        let leaf_type = node.entry().leaf_type.as_ref().ok_or_else(|| {
            MapperError::new(format!("{} has no leaf type", node.schema_path()))
        })?;
        match leaf_type {
            LeafType::Leafref { path } => {
                if depth >= MAX_LEAFREF_DEPTH {
                    return Err(MapperError::new(format!(
                        "leafref chain through {} is too deep",
                        node.schema_path()
                    )));
                }
                let target = node.leafref_target().ok_or_else(|| {
                    MapperError::new(format!(
                        "leafref {path:?} at {} does not resolve",
                        node.schema_path()
                    ))
                })?;
                self.scalar(target, depth + 1)
            }
            LeafType::Named(name) => {
                if let Some(e) = self.enums.get(name) {
                    return Ok(MappedType {
                        native_type: e.name.clone(),
                        is_enumerated_value: true,
                        zero_value: format!("{}::Unset", e.name),
                        default_value: None,
                    });
                }
                let (native, zero) = builtin_type(name).ok_or_else(|| {
                    MapperError::new(format!(
                        "no mapping for YANG type {name:?} at {}",
                        node.schema_path()
                    ))
                })?;
                Ok(MappedType::new(native, zero))
            }
        }
    }
}

impl LangMapper for CamelCaseMapper {
    fn field_name(&self, node: Node<'_>) -> Result<String, MapperError> {
        Ok(camel_case(node.name()))
    }

    fn directory_name(
        &self,
        node: Node<'_>,
        compress: CompressBehaviour,
    ) -> Result<String, MapperError> {
        let compressed = compress.compress_enabled();
        let parts: Vec<String> = node
            .data_ancestry()
            .into_iter()
            .filter(|n| {
                !compressed
                    || (n.kind() != EntryKind::Module && !matches!(n.name(), "config" | "state"))
            })
            .map(|n| camel_case(n.name()))
            .collect();
        if parts.is_empty() {
            return Ok(camel_case(node.name()));
        }
        Ok(parts.join("_"))
    }

    fn key_leaf_type(
        &self,
        node: Node<'_>,
        _opts: &IrOptions,
    ) -> Result<Option<MappedType>, MapperError> {
        self.scalar(node, 0).map(Some)
    }

    fn leaf_type(
        &self,
        node: Node<'_>,
        _opts: &IrOptions,
    ) -> Result<Option<MappedType>, MapperError> {
        let entry = node.entry();
        if entry.leaf_type.is_none() {
            return Ok(None);
        }
        let mut mapped = self.scalar(node, 0)?;
        if entry.is_leaf_list() {
            mapped.native_type = format!("Vec<{}>", mapped.native_type);
            mapped.zero_value = "Vec::new()".to_owned();
        }
        mapped.default_value = entry.defaults.first().cloned();
        Ok(Some(mapped))
    }

    fn package_name(
        &self,
        node: Node<'_>,
        _compress: CompressBehaviour,
        nested_directories: bool,
    ) -> Result<String, MapperError> {
        if !nested_directories {
            return Ok(String::new());
        }
        Ok(node.root_module().replace(|c: char| c == '-' || c == '.', "_"))
    }
}

/// `th-e` → `ThE`, `thE` → `ThE`, `a.b-c` → `ABC`.
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split(|c: char| c == '-' || c == '.').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Rust type and zero value for a YANG built-in type.
fn builtin_type(name: &str) -> Option<(&'static str, &'static str)> {
    let mapped = match name {
        "string" => ("String", "String::new()"),
        "boolean" | "empty" => ("bool", "false"),
        "int8" => ("i8", "0"),
        "int16" => ("i16", "0"),
        "int32" => ("i32", "0"),
        "int64" => ("i64", "0"),
        "uint8" => ("u8", "0"),
        "uint16" => ("u16", "0"),
        "uint32" => ("u32", "0"),
        "uint64" => ("u64", "0"),
        "decimal64" => ("f64", "0.0"),
        "binary" => ("Vec<u8>", "Vec::new()"),
        _ => return None,
    };
    Some(mapped)
}
