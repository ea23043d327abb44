// crates/xtce-rs/src/model/containers.rs

use serde::Serialize;

use super::common::{
    AliasSet, AncillaryDataSet, ExpressionHolder, IntegerValue, LocationInContainerInBits,
};

/// Represents `<ParameterSet>`.
#[derive(Debug, Serialize, Default)]
pub struct ParameterSet {
    #[serde(rename = "Parameter")]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Serialize, Default)]
pub struct Parameter {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@parameterTypeRef")]
    pub parameter_type_ref: String,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "LongDescription", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "AliasSet", skip_serializing_if = "Option::is_none")]
    pub alias_set: Option<AliasSet>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "ParameterProperties")]
    pub properties: ParameterProperties,
}

#[derive(Debug, Serialize, Default)]
pub struct ParameterProperties {
    #[serde(rename = "@dataSource")]
    pub data_source: String,
    #[serde(rename = "@persistence")]
    pub persistence: bool,
}

/// Represents `<ContainerSet>`.
#[derive(Debug, Serialize, Default)]
pub struct ContainerSet {
    #[serde(rename = "SequenceContainer")]
    pub containers: Vec<SequenceContainer>,
}

#[derive(Debug, Serialize, Default)]
pub struct SequenceContainer {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@abstract")]
    pub is_abstract: bool,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "LongDescription", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "AliasSet", skip_serializing_if = "Option::is_none")]
    pub alias_set: Option<AliasSet>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "DefaultRateInStream", skip_serializing_if = "Option::is_none")]
    pub default_rate_in_stream: Option<RateInStream>,
    #[serde(rename = "BinaryEncoding", skip_serializing_if = "Option::is_none")]
    pub binary_encoding: Option<ContainerSize>,
    /// Required by the schema, written even when empty.
    #[serde(rename = "EntryList")]
    pub entry_list: EntryList,
    #[serde(rename = "BaseContainer", skip_serializing_if = "Option::is_none")]
    pub base_container: Option<BaseContainer>,
}

#[derive(Debug, Serialize)]
pub struct RateInStream {
    #[serde(rename = "@maximumValue")]
    pub maximum_value: String,
}

#[derive(Debug, Serialize)]
pub struct ContainerSize {
    #[serde(rename = "SizeInBits")]
    pub size_in_bits: IntegerValue,
}

#[derive(Debug, Serialize)]
pub struct BaseContainer {
    #[serde(rename = "@containerRef")]
    pub container_ref: String,
    #[serde(rename = "RestrictionCriteria", skip_serializing_if = "Option::is_none")]
    pub restriction_criteria: Option<ExpressionHolder>,
}

/// Entries of a sequence container or of a command container.
#[derive(Debug, Serialize, Default)]
pub struct EntryList {
    #[serde(rename = "$value")]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
pub enum Entry {
    #[serde(rename = "ParameterRefEntry")]
    Parameter(ParameterRefEntry),
    #[serde(rename = "ContainerRefEntry")]
    Container(ContainerRefEntry),
    #[serde(rename = "ArgumentRefEntry")]
    Argument(ArgumentRefEntry),
    #[serde(rename = "FixedValueEntry")]
    FixedValue(FixedValueEntry),
}

#[derive(Debug, Serialize)]
pub struct ParameterRefEntry {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: String,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "LocationInContainerInBits")]
    pub location: LocationInContainerInBits,
    #[serde(rename = "IncludeCondition", skip_serializing_if = "Option::is_none")]
    pub include_condition: Option<ExpressionHolder>,
}

#[derive(Debug, Serialize)]
pub struct ContainerRefEntry {
    #[serde(rename = "@containerRef")]
    pub container_ref: String,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "LocationInContainerInBits")]
    pub location: LocationInContainerInBits,
    #[serde(rename = "IncludeCondition", skip_serializing_if = "Option::is_none")]
    pub include_condition: Option<ExpressionHolder>,
}

#[derive(Debug, Serialize)]
pub struct ArgumentRefEntry {
    #[serde(rename = "@argumentRef")]
    pub argument_ref: String,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "LocationInContainerInBits")]
    pub location: LocationInContainerInBits,
    #[serde(rename = "IncludeCondition", skip_serializing_if = "Option::is_none")]
    pub include_condition: Option<ExpressionHolder>,
}

#[derive(Debug, Serialize)]
pub struct FixedValueEntry {
    #[serde(rename = "@name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "@binaryValue")]
    pub binary_value: String,
    #[serde(rename = "@sizeInBits")]
    pub size_in_bits: u32,
    #[serde(rename = "LocationInContainerInBits")]
    pub location: LocationInContainerInBits,
    #[serde(rename = "IncludeCondition", skip_serializing_if = "Option::is_none")]
    pub include_condition: Option<ExpressionHolder>,
}
