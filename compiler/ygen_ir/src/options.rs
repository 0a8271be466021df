//! Compilation options.
//!
//! All switches are independent. `shadow_schema_paths` only has an effect
//! when `compress_paths` is set, since shadowed fields only exist in
//! compressed directories.

/// How config/state containers were folded when directories were grouped.
///
/// Passed through to the `LangMapper` naming hooks.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompressBehaviour {
    /// Every schema level gets its own directory.
    #[default]
    Uncompressed,
    /// Uncompressed, with `config false` nodes left out.
    UncompressedExcludeDerivedState,
    /// Compressed; `config` leaves are primary, `state` leaves shadow them.
    PreferIntendedConfig,
    /// Compressed; `state` leaves are primary, `config` leaves shadow them.
    PreferOperationalState,
    /// Compressed, with `config false` nodes left out.
    ExcludeDerivedState,
}

impl CompressBehaviour {
    pub const fn compress_enabled(self) -> bool {
        matches!(
            self,
            CompressBehaviour::PreferIntendedConfig
                | CompressBehaviour::PreferOperationalState
                | CompressBehaviour::ExcludeDerivedState
        )
    }

    pub const fn state_excluded(self) -> bool {
        matches!(
            self,
            CompressBehaviour::UncompressedExcludeDerivedState
                | CompressBehaviour::ExcludeDerivedState
        )
    }
}

/// Options about how the schema was transformed before IR compilation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TransformationOpts {
    pub compress_behaviour: CompressBehaviour,
    /// Drop fields with `status deprecated`.
    pub skip_deprecated: bool,
    /// Drop fields with `status obsolete`.
    pub skip_obsolete: bool,
}

/// Options for one IR compilation run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct IrOptions {
    /// Explicit path origin for every field. Takes precedence over
    /// `use_module_name_as_path_origin` when non-empty.
    pub path_origin_name: String,
    /// Use each field's instantiating module as its path origin.
    pub use_module_name_as_path_origin: bool,
    pub transformation_options: TransformationOpts,
    /// Directories were built with config/state compression.
    pub compress_paths: bool,
    /// Also record the shadow (alternate branch) paths of compressed fields.
    pub shadow_schema_paths: bool,
    /// Report mapped paths from the module root instead of relative to the directory.
    pub absolute_paths: bool,
    /// Generated packages are nested per module.
    pub nested_directories: bool,
}
