// crates/xtce-rs/src/model/algorithms.rs

use serde::Serialize;

use super::common::{AliasSet, AncillaryDataSet};

/// Represents `<AlgorithmSet>`.
#[derive(Debug, Serialize, Default)]
pub struct AlgorithmSet {
    #[serde(rename = "CustomAlgorithm")]
    pub algorithms: Vec<CustomAlgorithm>,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmText {
    #[serde(rename = "@language")]
    pub language: String,
    #[serde(rename = "$value")]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct InputParameterInstanceRef {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: String,
    #[serde(rename = "@inputName", skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct InputSet {
    #[serde(rename = "InputParameterInstanceRef")]
    pub inputs: Vec<InputParameterInstanceRef>,
}

#[derive(Debug, Serialize)]
pub struct OutputParameterRef {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: String,
    #[serde(rename = "@outputName", skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct OutputSet {
    #[serde(rename = "OutputParameterRef")]
    pub outputs: Vec<OutputParameterRef>,
}

#[derive(Debug, Serialize)]
pub enum Trigger {
    #[serde(rename = "OnParameterUpdateTrigger")]
    OnParameterUpdate {
        #[serde(rename = "@parameterRef")]
        parameter_ref: String,
    },
    #[serde(rename = "OnContainerUpdateTrigger")]
    OnContainerUpdate {
        #[serde(rename = "@containerRef")]
        container_ref: String,
    },
}

#[derive(Debug, Serialize, Default)]
pub struct TriggerSet {
    #[serde(rename = "$value")]
    pub triggers: Vec<Trigger>,
}

/// A named algorithm in the `<AlgorithmSet>`.
#[derive(Debug, Serialize)]
pub struct CustomAlgorithm {
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
    #[serde(rename = "AlgorithmText")]
    pub algorithm_text: AlgorithmText,
    #[serde(rename = "InputSet", skip_serializing_if = "Option::is_none")]
    pub input_set: Option<InputSet>,
    #[serde(rename = "OutputSet", skip_serializing_if = "Option::is_none")]
    pub output_set: Option<OutputSet>,
    #[serde(rename = "TriggerSet", skip_serializing_if = "Option::is_none")]
    pub trigger_set: Option<TriggerSet>,
}

/// An input-only algorithm embedded in an encoding or a verifier.
#[derive(Debug, Serialize)]
pub struct InputAlgorithm {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "AlgorithmText")]
    pub algorithm_text: AlgorithmText,
    #[serde(rename = "InputSet", skip_serializing_if = "Option::is_none")]
    pub input_set: Option<InputSet>,
}
