// crates/xtce-rs/src/model/types.rs

//! Parameter and argument type definitions.
//!
//! Both type sets share the same structs. Fields that only exist on one side
//! (for example `ValidRangeSet` on arguments, alarms on parameters) stay
//! `None` on the other.

use serde::Serialize;

use super::common::{AncillaryDataSet, ExpressionHolder, IntegerValue, UnitSet};
use super::encoding::DataEncoding;

/// Represents `<ParameterTypeSet>`.
#[derive(Debug, Serialize, Default)]
pub struct ParameterTypeSet {
    #[serde(rename = "$value")]
    pub types: Vec<ParameterType>,
}

#[derive(Debug, Serialize)]
pub enum ParameterType {
    #[serde(rename = "AbsoluteTimeParameterType")]
    AbsoluteTime(AbsoluteTimeType),
    #[serde(rename = "AggregateParameterType")]
    Aggregate(AggregateType),
    #[serde(rename = "ArrayParameterType")]
    Array(ArrayType),
    #[serde(rename = "BinaryParameterType")]
    Binary(BinaryType),
    #[serde(rename = "BooleanParameterType")]
    Boolean(BooleanType),
    #[serde(rename = "EnumeratedParameterType")]
    Enumerated(EnumeratedType),
    #[serde(rename = "FloatParameterType")]
    Float(FloatType),
    #[serde(rename = "IntegerParameterType")]
    Integer(IntegerType),
    #[serde(rename = "StringParameterType")]
    String(StringType),
}

#[derive(Debug, Serialize)]
pub enum ArgumentType {
    #[serde(rename = "AbsoluteTimeArgumentType")]
    AbsoluteTime(AbsoluteTimeType),
    #[serde(rename = "AggregateArgumentType")]
    Aggregate(AggregateType),
    #[serde(rename = "ArrayArgumentType")]
    Array(ArrayType),
    #[serde(rename = "BinaryArgumentType")]
    Binary(BinaryType),
    #[serde(rename = "BooleanArgumentType")]
    Boolean(BooleanType),
    #[serde(rename = "EnumeratedArgumentType")]
    Enumerated(EnumeratedType),
    #[serde(rename = "FloatArgumentType")]
    Float(FloatType),
    #[serde(rename = "IntegerArgumentType")]
    Integer(IntegerType),
    #[serde(rename = "StringArgumentType")]
    String(StringType),
}

impl From<ParameterType> for ArgumentType {
    fn from(t: ParameterType) -> Self {
        match t {
            ParameterType::AbsoluteTime(t) => ArgumentType::AbsoluteTime(t),
            ParameterType::Aggregate(t) => ArgumentType::Aggregate(t),
            ParameterType::Array(t) => ArgumentType::Array(t),
            ParameterType::Binary(t) => ArgumentType::Binary(t),
            ParameterType::Boolean(t) => ArgumentType::Boolean(t),
            ParameterType::Enumerated(t) => ArgumentType::Enumerated(t),
            ParameterType::Float(t) => ArgumentType::Float(t),
            ParameterType::Integer(t) => ArgumentType::Integer(t),
            ParameterType::String(t) => ArgumentType::String(t),
        }
    }
}

// --- Ranges and alarms ---

#[derive(Debug, Serialize, Default, Clone)]
pub struct Range {
    #[serde(rename = "@validRangeAppliesToCalibrated", skip_serializing_if = "Option::is_none")]
    pub applies_to_calibrated: Option<bool>,
    #[serde(rename = "@minInclusive", skip_serializing_if = "Option::is_none")]
    pub min_inclusive: Option<String>,
    #[serde(rename = "@minExclusive", skip_serializing_if = "Option::is_none")]
    pub min_exclusive: Option<String>,
    #[serde(rename = "@maxInclusive", skip_serializing_if = "Option::is_none")]
    pub max_inclusive: Option<String>,
    #[serde(rename = "@maxExclusive", skip_serializing_if = "Option::is_none")]
    pub max_exclusive: Option<String>,
}

/// Argument ranges are wrapped into `<ValidRangeSet>`.
#[derive(Debug, Serialize)]
pub struct ValidRangeSet {
    #[serde(rename = "@validRangeAppliesToCalibrated")]
    pub applies_to_calibrated: bool,
    #[serde(rename = "ValidRange")]
    pub valid_range: Range,
}

#[derive(Debug, Serialize, Default)]
pub struct StaticAlarmRanges {
    #[serde(rename = "WatchRange", skip_serializing_if = "Option::is_none")]
    pub watch: Option<Range>,
    #[serde(rename = "WarningRange", skip_serializing_if = "Option::is_none")]
    pub warning: Option<Range>,
    #[serde(rename = "DistressRange", skip_serializing_if = "Option::is_none")]
    pub distress: Option<Range>,
    #[serde(rename = "CriticalRange", skip_serializing_if = "Option::is_none")]
    pub critical: Option<Range>,
    #[serde(rename = "SevereRange", skip_serializing_if = "Option::is_none")]
    pub severe: Option<Range>,
}

#[derive(Debug, Serialize, Default)]
pub struct EnumerationAlarmList {
    #[serde(rename = "EnumerationAlarm")]
    pub alarms: Vec<EnumerationAlarm>,
}

#[derive(Debug, Serialize)]
pub struct EnumerationAlarm {
    #[serde(rename = "@alarmLevel")]
    pub alarm_level: String,
    #[serde(rename = "@enumerationLabel")]
    pub enumeration_label: String,
}

/// `<DefaultAlarm>` or `<ContextAlarm>`, numeric or enumerated.
#[derive(Debug, Serialize, Default)]
pub struct AlarmDefinition {
    #[serde(rename = "@minViolations")]
    pub min_violations: u32,
    #[serde(rename = "@defaultAlarmLevel", skip_serializing_if = "Option::is_none")]
    pub default_alarm_level: Option<String>,
    #[serde(rename = "StaticAlarmRanges", skip_serializing_if = "Option::is_none")]
    pub static_alarm_ranges: Option<StaticAlarmRanges>,
    #[serde(rename = "EnumerationAlarmList", skip_serializing_if = "Option::is_none")]
    pub enumeration_alarm_list: Option<EnumerationAlarmList>,
    #[serde(rename = "ContextMatch", skip_serializing_if = "Option::is_none")]
    pub context_match: Option<ExpressionHolder>,
}

#[derive(Debug, Serialize, Default)]
pub struct ContextAlarmList {
    #[serde(rename = "ContextAlarm")]
    pub alarms: Vec<AlarmDefinition>,
}

// --- Type definitions ---

#[derive(Debug, Serialize, Default)]
pub struct IntegerType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "@signed")]
    pub signed: bool,
    #[serde(rename = "@sizeInBits")]
    pub size_in_bits: u32,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "UnitSet", skip_serializing_if = "Option::is_none")]
    pub unit_set: Option<UnitSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
    #[serde(rename = "ValidRange", skip_serializing_if = "Option::is_none")]
    pub valid_range: Option<Range>,
    #[serde(rename = "ValidRangeSet", skip_serializing_if = "Option::is_none")]
    pub valid_range_set: Option<ValidRangeSet>,
    #[serde(rename = "DefaultAlarm", skip_serializing_if = "Option::is_none")]
    pub default_alarm: Option<AlarmDefinition>,
    #[serde(rename = "ContextAlarmList", skip_serializing_if = "Option::is_none")]
    pub context_alarm_list: Option<ContextAlarmList>,
}

#[derive(Debug, Serialize, Default)]
pub struct FloatType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@sizeInBits")]
    pub size_in_bits: u32,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "UnitSet", skip_serializing_if = "Option::is_none")]
    pub unit_set: Option<UnitSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
    #[serde(rename = "ValidRange", skip_serializing_if = "Option::is_none")]
    pub valid_range: Option<Range>,
    #[serde(rename = "ValidRangeSet", skip_serializing_if = "Option::is_none")]
    pub valid_range_set: Option<ValidRangeSet>,
    #[serde(rename = "DefaultAlarm", skip_serializing_if = "Option::is_none")]
    pub default_alarm: Option<AlarmDefinition>,
    #[serde(rename = "ContextAlarmList", skip_serializing_if = "Option::is_none")]
    pub context_alarm_list: Option<ContextAlarmList>,
}

#[derive(Debug, Serialize, Default)]
pub struct EnumerationList {
    #[serde(rename = "Enumeration")]
    pub enumerations: Vec<Enumeration>,
}

#[derive(Debug, Serialize)]
pub struct Enumeration {
    #[serde(rename = "@value")]
    pub value: i64,
    #[serde(rename = "@label")]
    pub label: String,
    #[serde(rename = "@shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct EnumeratedType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "UnitSet", skip_serializing_if = "Option::is_none")]
    pub unit_set: Option<UnitSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
    #[serde(rename = "EnumerationList")]
    pub enumeration_list: EnumerationList,
    #[serde(rename = "DefaultAlarm", skip_serializing_if = "Option::is_none")]
    pub default_alarm: Option<AlarmDefinition>,
    #[serde(rename = "ContextAlarmList", skip_serializing_if = "Option::is_none")]
    pub context_alarm_list: Option<ContextAlarmList>,
}

#[derive(Debug, Serialize, Default)]
pub struct BooleanType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "@zeroStringValue")]
    pub zero_string_value: String,
    #[serde(rename = "@oneStringValue")]
    pub one_string_value: String,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "UnitSet", skip_serializing_if = "Option::is_none")]
    pub unit_set: Option<UnitSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
}

#[derive(Debug, Serialize, Default)]
pub struct BinaryType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "UnitSet", skip_serializing_if = "Option::is_none")]
    pub unit_set: Option<UnitSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
}

#[derive(Debug, Serialize, Default)]
pub struct SizeRangeInCharacters {
    #[serde(rename = "@minInclusive", skip_serializing_if = "Option::is_none")]
    pub min_inclusive: Option<u32>,
    #[serde(rename = "@maxInclusive", skip_serializing_if = "Option::is_none")]
    pub max_inclusive: Option<u32>,
}

#[derive(Debug, Serialize, Default)]
pub struct StringType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "UnitSet", skip_serializing_if = "Option::is_none")]
    pub unit_set: Option<UnitSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
    #[serde(rename = "SizeRangeInCharacters", skip_serializing_if = "Option::is_none")]
    pub size_range_in_characters: Option<SizeRangeInCharacters>,
}

#[derive(Debug, Serialize, Default)]
pub struct OffsetFrom {
    #[serde(rename = "@parameterRef")]
    pub parameter_ref: String,
}

#[derive(Debug, Serialize, Default)]
pub struct ReferenceTime {
    #[serde(rename = "Epoch", skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,
    #[serde(rename = "OffsetFrom", skip_serializing_if = "Option::is_none")]
    pub offset_from: Option<OffsetFrom>,
}

#[derive(Debug, Serialize, Default)]
pub struct AbsoluteTimeType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "$value", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DataEncoding>,
    #[serde(rename = "ReferenceTime", skip_serializing_if = "Option::is_none")]
    pub reference_time: Option<ReferenceTime>,
}

#[derive(Debug, Serialize)]
pub struct Member {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@typeRef")]
    pub type_ref: String,
}

#[derive(Debug, Serialize, Default)]
pub struct MemberList {
    #[serde(rename = "Member")]
    pub members: Vec<Member>,
}

#[derive(Debug, Serialize, Default)]
pub struct AggregateType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "MemberList")]
    pub member_list: MemberList,
}

#[derive(Debug, Serialize, Default)]
pub struct Dimension {
    #[serde(rename = "StartingIndex")]
    pub starting_index: IntegerValue,
    #[serde(rename = "EndingIndex")]
    pub ending_index: IntegerValue,
}

#[derive(Debug, Serialize, Default)]
pub struct DimensionList {
    #[serde(rename = "Dimension")]
    pub dimensions: Vec<Dimension>,
}

#[derive(Debug, Serialize, Default)]
pub struct ArrayType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@arrayTypeRef")]
    pub array_type_ref: String,
    #[serde(rename = "AncillaryDataSet", skip_serializing_if = "Option::is_none")]
    pub ancillary_data_set: Option<AncillaryDataSet>,
    #[serde(rename = "DimensionList")]
    pub dimension_list: DimensionList,
}
