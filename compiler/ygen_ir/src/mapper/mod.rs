//! The language mapper capability.
//!
//! The compiler never decides target-language names or types itself. It asks
//! an injected `LangMapper`, one implementation per emission language, and
//! never inspects which implementation it was given.
//!
//! Mappers receive everything they need at construction (enumerated types,
//! naming tables). There are no setters to call before use: a mapper that
//! exists is ready. Schema navigation goes through the `Node` handles passed
//! to each method.

mod camel;

use std::collections::BTreeMap;

use ygen_schema::Node;

use crate::options::{CompressBehaviour, IrOptions};
use crate::parsed::NodeDetails;
use crate::MapperError;

pub use camel::CamelCaseMapper;

/// Free-form annotations a mapper attaches to a field or enum.
pub type FieldFlags = BTreeMap<String, String>;

/// A schema type expressed in the target language.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappedType {
    pub native_type: String,
    pub is_enumerated_value: bool,
    pub zero_value: String,
    pub default_value: Option<String>,
}

impl MappedType {
    pub fn new(native_type: impl Into<String>, zero_value: impl Into<String>) -> Self {
        Self {
            native_type: native_type.into(),
            is_enumerated_value: false,
            zero_value: zero_value.into(),
            default_value: None,
        }
    }
}

/// An enumerated type extracted from the schema by the enum subsystem.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumeratedType {
    /// Generated type name.
    pub name: String,
    /// YANG type or typedef name the enum was extracted from.
    pub type_name: String,
    pub values: Vec<String>,
}

/// Target-language naming and type decisions.
pub trait LangMapper {
    /// Display name of a field.
    fn field_name(&self, node: Node<'_>) -> Result<String, MapperError>;

    /// Display name of the aggregate generated for `node`.
    fn directory_name(
        &self,
        node: Node<'_>,
        compress: CompressBehaviour,
    ) -> Result<String, MapperError>;

    /// Type of a list key leaf.
    fn key_leaf_type(
        &self,
        node: Node<'_>,
        opts: &IrOptions,
    ) -> Result<Option<MappedType>, MapperError>;

    /// Type of a leaf or leaf-list.
    fn leaf_type(&self, node: Node<'_>, opts: &IrOptions)
        -> Result<Option<MappedType>, MapperError>;

    /// Package or namespace the aggregate for `node` lives in.
    fn package_name(
        &self,
        node: Node<'_>,
        compress: CompressBehaviour,
        nested_directories: bool,
    ) -> Result<String, MapperError>;

    /// Extra annotations for a compiled field.
    fn populate_field_flags(&self, _details: &NodeDetails, _node: Node<'_>) -> FieldFlags {
        FieldFlags::new()
    }

    /// Extra annotations for an enumerated type.
    fn populate_enum_flags(&self, _enum_type: &EnumeratedType) -> FieldFlags {
        FieldFlags::new()
    }
}
