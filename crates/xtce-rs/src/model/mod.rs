//! Internal `serde` data structures that map directly to the XTCE 1.2 schema.
//!
//! These structs only describe the shape of the generated document. They are
//! filled in by the `builder` module and serialized with `quick-xml`; they are
//! not intended for direct public use. Optional elements are skipped when
//! empty so that the output never contains empty sets.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use serde::Serialize;

pub mod algorithms;
pub mod commands;
pub mod common;
pub mod containers;
pub mod encoding;
pub mod types;

pub use algorithms::AlgorithmSet;
pub use commands::{ArgumentTypeSet, MetaCommandSet};
pub use common::{AliasSet, AncillaryDataSet};
pub use containers::{ContainerSet, ParameterSet};
pub use types::ParameterTypeSet;

pub const XTCE_NAMESPACE: &str = "http://www.omg.org/spec/XTCE/20180204";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XTCE_SCHEMA_LOCATION: &str =
    "http://www.omg.org/spec/XTCE/20180204 https://www.omg.org/spec/XTCE/20180204/SpaceSystem.xsd";

/// The `<SpaceSystem>` element, both as document root and as nested subsystem.
///
/// The namespace attributes are only set on the root.
#[derive(Debug, Serialize, Default)]
#[serde(rename = "SpaceSystem")]
pub struct SpaceSystem {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    #[serde(rename = "@xmlns:xsi", skip_serializing_if = "Option::is_none")]
    pub xmlns_xsi: Option<String>,

    #[serde(rename = "@xsi:schemaLocation", skip_serializing_if = "Option::is_none")]
    pub xsi_schema_location: Option<String>,

    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(rename = "LongDescription", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(rename = "AliasSet", skip_serializing_if = "Option::is_none")]
    pub alias_set: Option<AliasSet>,

    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,

    /// Always present, even when empty.
    #[serde(rename = "TelemetryMetaData")]
    pub telemetry_meta_data: TelemetryMetaData,

    /// Always present, even when empty.
    #[serde(rename = "CommandMetaData")]
    pub command_meta_data: CommandMetaData,

    #[serde(rename = "SpaceSystem", skip_serializing_if = "Vec::is_empty")]
    pub subsystems: Vec<SpaceSystem>,
}

#[derive(Debug, Serialize, Default)]
pub struct TelemetryMetaData {
    #[serde(rename = "ParameterTypeSet", skip_serializing_if = "Option::is_none")]
    pub parameter_type_set: Option<ParameterTypeSet>,

    #[serde(rename = "ParameterSet", skip_serializing_if = "Option::is_none")]
    pub parameter_set: Option<ParameterSet>,

    #[serde(rename = "ContainerSet", skip_serializing_if = "Option::is_none")]
    pub container_set: Option<ContainerSet>,

    #[serde(rename = "AlgorithmSet", skip_serializing_if = "Option::is_none")]
    pub algorithm_set: Option<AlgorithmSet>,
}

#[derive(Debug, Serialize, Default)]
pub struct CommandMetaData {
    #[serde(rename = "ArgumentTypeSet", skip_serializing_if = "Option::is_none")]
    pub argument_type_set: Option<ArgumentTypeSet>,

    #[serde(rename = "MetaCommandSet", skip_serializing_if = "Option::is_none")]
    pub meta_command_set: Option<MetaCommandSet>,
}
