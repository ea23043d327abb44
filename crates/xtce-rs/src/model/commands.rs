// crates/xtce-rs/src/model/commands.rs

use serde::Serialize;

use super::algorithms::InputAlgorithm;
use super::common::{AliasSet, AncillaryDataSet, BooleanExpression, ExpressionHolder};
use super::containers::EntryList;
use super::types::ArgumentType;

/// Represents `<ArgumentTypeSet>`.
#[derive(Debug, Serialize, Default)]
pub struct ArgumentTypeSet {
    #[serde(rename = "$value")]
    pub types: Vec<ArgumentType>,
}

/// Represents `<MetaCommandSet>`.
#[derive(Debug, Serialize, Default)]
pub struct MetaCommandSet {
    #[serde(rename = "MetaCommand")]
    pub commands: Vec<MetaCommand>,
}

#[derive(Debug, Serialize, Default)]
pub struct MetaCommand {
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
    #[serde(rename = "BaseMetaCommand", skip_serializing_if = "Option::is_none")]
    pub base_meta_command: Option<BaseMetaCommand>,
    #[serde(rename = "ArgumentList", skip_serializing_if = "Option::is_none")]
    pub argument_list: Option<ArgumentList>,
    #[serde(rename = "CommandContainer")]
    pub command_container: CommandContainer,
    #[serde(rename = "DefaultSignificance")]
    pub default_significance: DefaultSignificance,
    #[serde(rename = "VerifierSet", skip_serializing_if = "Option::is_none")]
    pub verifier_set: Option<VerifierSet>,
}

#[derive(Debug, Serialize)]
pub struct BaseMetaCommand {
    #[serde(rename = "@metaCommandRef")]
    pub meta_command_ref: String,
    #[serde(rename = "ArgumentAssignmentList", skip_serializing_if = "Option::is_none")]
    pub argument_assignment_list: Option<ArgumentAssignmentList>,
}

#[derive(Debug, Serialize, Default)]
pub struct ArgumentAssignmentList {
    #[serde(rename = "ArgumentAssignment")]
    pub assignments: Vec<ArgumentAssignment>,
}

#[derive(Debug, Serialize)]
pub struct ArgumentAssignment {
    #[serde(rename = "@argumentName")]
    pub argument_name: String,
    #[serde(rename = "@argumentValue")]
    pub argument_value: String,
}

#[derive(Debug, Serialize, Default)]
pub struct ArgumentList {
    #[serde(rename = "Argument")]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Serialize)]
pub struct Argument {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@argumentTypeRef")]
    pub argument_type_ref: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "LongDescription", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
}

#[derive(Debug, Serialize, Default)]
pub struct CommandContainer {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "EntryList")]
    pub entry_list: EntryList,
    #[serde(rename = "BaseContainer", skip_serializing_if = "Option::is_none")]
    pub base_container: Option<CommandBaseContainer>,
}

#[derive(Debug, Serialize)]
pub struct CommandBaseContainer {
    #[serde(rename = "@containerRef")]
    pub container_ref: String,
    #[serde(rename = "RestrictionCriteria", skip_serializing_if = "Option::is_none")]
    pub restriction_criteria: Option<ExpressionHolder>,
}

#[derive(Debug, Serialize, Default)]
pub struct DefaultSignificance {
    #[serde(rename = "@consequenceLevel")]
    pub consequence_level: String,
    #[serde(rename = "@reasonForWarning", skip_serializing_if = "Option::is_none")]
    pub reason_for_warning: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct VerifierSet {
    #[serde(rename = "$value")]
    pub verifiers: Vec<Verifier>,
}

/// Each variant carries the same body; the element name gives the stage.
#[derive(Debug, Serialize)]
pub enum Verifier {
    TransferredToRangeVerifier(VerifierBody),
    SentFromRangeVerifier(VerifierBody),
    ReceivedVerifier(VerifierBody),
    AcceptedVerifier(VerifierBody),
    QueuedVerifier(VerifierBody),
    ExecutionVerifier(VerifierBody),
    CompleteVerifier(VerifierBody),
    FailedVerifier(VerifierBody),
}

#[derive(Debug, Serialize)]
pub struct VerifierBody {
    #[serde(rename = "@name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "$value")]
    pub check: VerifierCheck,
    #[serde(rename = "CheckWindow")]
    pub check_window: CheckWindow,
    #[serde(rename = "ReturnParmRef", skip_serializing_if = "Option::is_none")]
    pub return_parm_ref: Option<ReturnParmRef>,
}

#[derive(Debug, Serialize)]
pub enum VerifierCheck {
    ContainerRef {
        #[serde(rename = "@containerRef")]
        container_ref: String,
    },
    BooleanExpression(BooleanExpression),
    CustomAlgorithm(InputAlgorithm),
}

#[derive(Debug, Serialize)]
pub struct CheckWindow {
    #[serde(rename = "@timeToStartChecking")]
    pub time_to_start_checking: String,
    #[serde(rename = "@timeToStopChecking")]
    pub time_to_stop_checking: String,
    #[serde(rename = "@timeWindowIsRelativeTo")]
    pub time_window_is_relative_to: String,
}

#[derive(Debug, Serialize)]
pub struct ReturnParmRef {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: String,
}
