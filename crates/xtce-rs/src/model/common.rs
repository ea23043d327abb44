// crates/xtce-rs/src/model/common.rs

//! Elements shared by several parts of the schema: descriptive sets, value
//! references, locations and boolean expressions.

use serde::Serialize;

// --- Descriptive sets ---

/// Represents `<AliasSet>`.
#[derive(Debug, Serialize, Default)]
pub struct AliasSet {
    #[serde(rename = "Alias")]
    pub aliases: Vec<Alias>,
}

/// Represents `<Alias nameSpace="..." alias="..."/>`.
#[derive(Debug, Serialize)]
pub struct Alias {
    #[serde(rename = "@nameSpace")]
    pub name_space: String,
    #[serde(rename = "@alias")]
    pub alias: String,
}

/// Represents `<AncillaryDataSet>`.
#[derive(Debug, Serialize, Default)]
pub struct AncillaryDataSet {
    #[serde(rename = "AncillaryData")]
    pub items: Vec<AncillaryData>,
}

/// Represents `<AncillaryData name="..." href="..." mimeType="...">Value</AncillaryData>`.
#[derive(Debug, Serialize)]
pub struct AncillaryData {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(rename = "@mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(rename = "$value")]
    pub value: String,
}

/// Represents `<UnitSet>`.
#[derive(Debug, Serialize, Default)]
pub struct UnitSet {
    #[serde(rename = "Unit")]
    pub units: Vec<Unit>,
}

/// Represents `<Unit form="calibrated">V</Unit>`.
#[derive(Debug, Serialize)]
pub struct Unit {
    #[serde(rename = "@form")]
    pub form: String,
    #[serde(rename = "$value")]
    pub value: String,
}

// --- Values and references ---

/// Represents `<ParameterInstanceRef parameterRef="..."/>`.
#[derive(Debug, Serialize, Default)]
pub struct ParameterInstanceRef {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: String,
    #[serde(rename = "@useCalibratedValue", skip_serializing_if = "Option::is_none")]
    pub use_calibrated_value: Option<bool>,
}

/// Represents `<LinearAdjustment>`.
#[derive(Debug, Serialize, Default)]
pub struct LinearAdjustment {
    #[serde(rename = "@intercept", skip_serializing_if = "Option::is_none")]
    pub intercept: Option<String>,
    #[serde(rename = "@slope", skip_serializing_if = "Option::is_none")]
    pub slope: Option<String>,
}

/// Represents `<DynamicValue>`.
#[derive(Debug, Serialize, Default)]
pub struct DynamicValue {
    #[serde(rename = "ParameterInstanceRef")]
    pub parameter_instance_ref: ParameterInstanceRef,
    #[serde(rename = "LinearAdjustment", skip_serializing_if = "Option::is_none")]
    pub linear_adjustment: Option<LinearAdjustment>,
}

impl DynamicValue {
    /// A dynamic value pointing at `parameter_ref`, without adjustment.
    pub fn of(parameter_ref: impl Into<String>) -> Self {
        Self {
            parameter_instance_ref: ParameterInstanceRef {
                parameter_ref: parameter_ref.into(),
                use_calibrated_value: None,
            },
            linear_adjustment: None,
        }
    }
}

/// An integer that is either fixed or taken from a parameter
/// (`SizeInBits`, `StartingIndex`, `EndingIndex`).
#[derive(Debug, Serialize, Default)]
pub struct IntegerValue {
    #[serde(rename = "FixedValue", skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<i64>,
    #[serde(rename = "DynamicValue", skip_serializing_if = "Option::is_none")]
    pub dynamic_value: Option<DynamicValue>,
}

impl IntegerValue {
    pub fn fixed(value: i64) -> Self {
        Self {
            fixed_value: Some(value),
            dynamic_value: None,
        }
    }

    pub fn dynamic(value: DynamicValue) -> Self {
        Self {
            fixed_value: None,
            dynamic_value: Some(value),
        }
    }
}

/// Represents `<LocationInContainerInBits>`.
#[derive(Debug, Serialize)]
pub struct LocationInContainerInBits {
    #[serde(rename = "@referenceLocation")]
    pub reference_location: String,
    #[serde(rename = "FixedValue")]
    pub fixed_value: i64,
}

// --- Boolean expressions ---

/// Represents `<Condition>`.
#[derive(Debug, Serialize)]
pub struct Condition {
    #[serde(rename = "ParameterInstanceRef")]
    pub parameter_instance_ref: ParameterInstanceRef,
    #[serde(rename = "ComparisonOperator")]
    pub comparison_operator: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// One node of a boolean expression tree.
#[derive(Debug, Serialize)]
pub enum ConditionNode {
    #[serde(rename = "Condition")]
    Condition(Condition),
    #[serde(rename = "ANDedConditions")]
    And(ConditionList),
    #[serde(rename = "ORedConditions")]
    Or(ConditionList),
}

#[derive(Debug, Serialize)]
pub struct ConditionList {
    #[serde(rename = "$value")]
    pub items: Vec<ConditionNode>,
}

/// Represents `<BooleanExpression>`.
#[derive(Debug, Serialize)]
pub struct BooleanExpression {
    #[serde(rename = "$value")]
    pub node: ConditionNode,
}

/// Wrapper holding a single `<BooleanExpression>`; used for
/// `<IncludeCondition>`, `<RestrictionCriteria>` and `<ContextMatch>`.
#[derive(Debug, Serialize)]
pub struct ExpressionHolder {
    #[serde(rename = "BooleanExpression")]
    pub boolean_expression: BooleanExpression,
}
