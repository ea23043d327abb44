// crates/xtce-rs/src/builder/types.rs

//! Contains builder functions that convert [`DataType`]s into parameter and
//! argument type definitions.
//!
//! Every parameter (and every command argument) gets its own type, named
//! after it. Aggregate members and array elements get additional sibling
//! types named `{type}__{member}` and `{type}__el`, written right after the
//! type that refers to them.

use chrono::SecondsFormat;

use super::encoding::build_data_encoding;
use super::expressions::build_holder;
use super::format::format_float;
use super::{Context, build_ancillary_data_set};
use crate::alarms::{Alarm, AlarmRange, ContextAlarm, EnumerationAlarm, ThresholdAlarm};
use crate::ancillary::AncillaryData;
use crate::calibrators::Calibrator;
use crate::datatypes::{ArrayLength, DataType, TimeReference, TypeInfo};
use crate::error::MdbError;
use crate::model::common::{DynamicValue, IntegerValue, LinearAdjustment, Unit, UnitSet};
use crate::model::encoding::DataEncoding;
use crate::model::types::{
    AbsoluteTimeType, AggregateType, AlarmDefinition, ArrayType, BinaryType, BooleanType,
    ContextAlarmList, Dimension, DimensionList, EnumeratedType, Enumeration,
    EnumerationAlarmList, EnumerationList, FloatType, IntegerType, Member, MemberList,
    OffsetFrom, ParameterType, Range, ReferenceTime, SizeRangeInCharacters, StaticAlarmRanges,
    StringType, ValidRangeSet,
};
use crate::parameters::Parameter;
use crate::value::Value;

/// How the type being written is used.
#[derive(Debug, Clone, Copy)]
pub(super) struct TypeUsage<'a> {
    argument: bool,
    alarm: Option<&'a Alarm>,
    context_alarms: &'a [ContextAlarm],
    /// Member or element type. These carry their own ancillary data since
    /// no parameter or argument element does it for them.
    nested: bool,
}

impl<'a> TypeUsage<'a> {
    pub(super) fn parameter(parameter: &'a Parameter) -> Self {
        Self {
            argument: false,
            alarm: parameter.alarm.as_ref(),
            context_alarms: &parameter.context_alarms,
            nested: false,
        }
    }

    pub(super) fn argument() -> Self {
        Self {
            argument: true,
            alarm: None,
            context_alarms: &[],
            nested: false,
        }
    }

    fn nested(self) -> Self {
        Self {
            alarm: None,
            context_alarms: &[],
            nested: true,
            ..self
        }
    }

    fn has_alarms(&self) -> bool {
        self.alarm.is_some() || !self.context_alarms.is_empty()
    }
}

/// Appends the type definition for `data_type` named `name`, followed by the
/// definitions of its member or element types.
pub(super) fn build_type_definitions(
    ctx: &Context<'_>,
    name: &str,
    initial_value: Option<&Value>,
    data_type: &DataType,
    usage: TypeUsage<'_>,
    out: &mut Vec<ParameterType>,
) -> Result<(), MdbError> {
    let initial = initial_value
        .map(|v| data_type.format_value(v))
        .transpose()?;
    let info = data_type.info();

    match data_type {
        DataType::Integer(t) => {
            let (valid_range, valid_range_set) = valid_ranges(
                usage,
                t.minimum.map(|v| v.to_string()),
                true,
                t.maximum.map(|v| v.to_string()),
                true,
            );
            let (default_alarm, context_alarm_list) = threshold_alarms(ctx, name, usage)?;
            out.push(ParameterType::Integer(IntegerType {
                name: name.to_string(),
                initial_value: initial,
                signed: t.signed,
                size_in_bits: t.effective_bits(),
                ancillary_data_set: type_ancillary(info, usage, &[]),
                unit_set: build_unit_set(info),
                encoding: build_encoding(ctx, name, info, t.calibrator.as_ref())?,
                valid_range,
                valid_range_set,
                default_alarm,
                context_alarm_list,
            }));
        }
        DataType::Float(t) => {
            let (valid_range, valid_range_set) = valid_ranges(
                usage,
                t.minimum.map(format_float),
                t.minimum_inclusive,
                t.maximum.map(format_float),
                t.maximum_inclusive,
            );
            let (default_alarm, context_alarm_list) = threshold_alarms(ctx, name, usage)?;
            out.push(ParameterType::Float(FloatType {
                name: name.to_string(),
                size_in_bits: t.effective_bits(),
                initial_value: initial,
                ancillary_data_set: type_ancillary(info, usage, &[]),
                unit_set: build_unit_set(info),
                encoding: build_encoding(ctx, name, info, t.calibrator.as_ref())?,
                valid_range,
                valid_range_set,
                default_alarm,
                context_alarm_list,
            }));
        }
        DataType::Enumerated(t) => {
            let (default_alarm, context_alarm_list) = enumeration_alarms(ctx, name, usage)?;
            out.push(ParameterType::Enumerated(EnumeratedType {
                name: name.to_string(),
                initial_value: initial,
                ancillary_data_set: type_ancillary(info, usage, &[]),
                unit_set: build_unit_set(info),
                encoding: build_encoding(ctx, name, info, None)?,
                enumeration_list: EnumerationList {
                    enumerations: t
                        .choices
                        .iter()
                        .map(|c| Enumeration {
                            value: c.value,
                            label: c.label.clone(),
                            short_description: c.description.clone(),
                        })
                        .collect(),
                },
                default_alarm,
                context_alarm_list,
            }));
        }
        DataType::Boolean(t) => {
            reject_alarms(name, data_type, usage)?;
            out.push(ParameterType::Boolean(BooleanType {
                name: name.to_string(),
                initial_value: initial,
                zero_string_value: t.zero_string_value.clone(),
                one_string_value: t.one_string_value.clone(),
                ancillary_data_set: type_ancillary(info, usage, &[]),
                unit_set: build_unit_set(info),
                encoding: build_encoding(ctx, name, info, None)?,
            }));
        }
        DataType::Binary(t) => {
            reject_alarms(name, data_type, usage)?;
            let mut options = Vec::new();
            if usage.argument {
                // Length checks understood by the processing system.
                if let Some(min) = t.min_length {
                    options.push(format!("minLength={}", min));
                }
                if let Some(max) = t.max_length {
                    options.push(format!("maxLength={}", max));
                }
            }
            out.push(ParameterType::Binary(BinaryType {
                name: name.to_string(),
                initial_value: initial,
                ancillary_data_set: type_ancillary(info, usage, &options),
                unit_set: build_unit_set(info),
                encoding: build_encoding(ctx, name, info, None)?,
            }));
        }
        DataType::String(t) => {
            reject_alarms(name, data_type, usage)?;
            let has_size_range = t.min_length.is_some() || t.max_length.is_some();
            out.push(ParameterType::String(StringType {
                name: name.to_string(),
                initial_value: initial,
                ancillary_data_set: type_ancillary(info, usage, &[]),
                unit_set: if usage.argument { None } else { build_unit_set(info) },
                encoding: build_encoding(ctx, name, info, None)?,
                size_range_in_characters: (usage.argument && has_size_range).then(|| {
                    SizeRangeInCharacters {
                        min_inclusive: t.min_length,
                        max_inclusive: t.max_length,
                    }
                }),
            }));
        }
        DataType::AbsoluteTime(t) => {
            reject_alarms(name, data_type, usage)?;
            let reference_time = match &t.reference {
                TimeReference::Epoch(epoch) => ReferenceTime {
                    epoch: Some(epoch.as_str().to_string()),
                    offset_from: None,
                },
                TimeReference::Instant(instant) => ReferenceTime {
                    epoch: Some(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
                    offset_from: None,
                },
                TimeReference::Parameter(parameter) => {
                    if usage.argument {
                        return Err(MdbError::Export(format!(
                            "Argument type {} can only reference an epoch",
                            name
                        )));
                    }
                    ReferenceTime {
                        epoch: None,
                        offset_from: Some(OffsetFrom {
                            parameter_ref: ctx.parameter_ref(parameter)?,
                        }),
                    }
                }
            };
            out.push(ParameterType::AbsoluteTime(AbsoluteTimeType {
                name: name.to_string(),
                initial_value: initial,
                ancillary_data_set: type_ancillary(info, usage, &[]),
                encoding: build_encoding(ctx, name, info, None)?,
                reference_time: Some(reference_time),
            }));
        }
        DataType::Aggregate(t) => {
            reject_alarms(name, data_type, usage)?;
            out.push(ParameterType::Aggregate(AggregateType {
                name: name.to_string(),
                ancillary_data_set: type_ancillary(info, usage, &[]),
                member_list: MemberList {
                    members: t
                        .members
                        .iter()
                        .map(|m| Member {
                            name: m.name.clone(),
                            type_ref: format!("{}__{}", name, m.name),
                        })
                        .collect(),
                },
            }));
            for member in &t.members {
                build_type_definitions(
                    ctx,
                    &format!("{}__{}", name, member.name),
                    member.initial_value.as_ref(),
                    &member.data_type,
                    usage.nested(),
                    out,
                )?;
            }
        }
        DataType::Array(t) => {
            reject_alarms(name, data_type, usage)?;
            let ending_index = match &t.length {
                ArrayLength::Fixed(length) => IntegerValue::fixed(i64::from(*length) - 1),
                ArrayLength::Dynamic(parameter) => IntegerValue::dynamic(DynamicValue {
                    linear_adjustment: Some(LinearAdjustment {
                        intercept: Some("-1".to_string()),
                        slope: None,
                    }),
                    ..DynamicValue::of(ctx.parameter_ref(parameter)?)
                }),
            };
            let element_name = format!("{}__el", name);
            out.push(ParameterType::Array(ArrayType {
                name: name.to_string(),
                array_type_ref: element_name.clone(),
                ancillary_data_set: type_ancillary(info, usage, &[]),
                dimension_list: DimensionList {
                    dimensions: vec![Dimension {
                        starting_index: IntegerValue::fixed(0),
                        ending_index,
                    }],
                },
            }));
            build_type_definitions(ctx, &element_name, None, &t.element, usage.nested(), out)?;
        }
    }
    Ok(())
}

fn build_unit_set(info: &TypeInfo) -> Option<UnitSet> {
    info.units.as_ref().map(|units| UnitSet {
        units: vec![Unit {
            form: "calibrated".to_string(),
            value: units.clone(),
        }],
    })
}

fn build_encoding(
    ctx: &Context<'_>,
    name: &str,
    info: &TypeInfo,
    calibrator: Option<&Calibrator>,
) -> Result<Option<DataEncoding>, MdbError> {
    match &info.encoding {
        Some(encoding) => build_data_encoding(ctx, encoding, calibrator).map(Some),
        None if calibrator.is_some() => Err(MdbError::Export(format!(
            "Type {}: a calibrator should only be specified if there is an encoding",
            name
        ))),
        None => Ok(None),
    }
}

fn type_ancillary(
    info: &TypeInfo,
    usage: TypeUsage<'_>,
    options: &[String],
) -> Option<crate::model::AncillaryDataSet> {
    let mut extra = if usage.nested {
        info.extra.clone()
    } else {
        AncillaryData::new()
    };
    for option in options {
        extra.append("Yamcs", option.clone());
    }
    build_ancillary_data_set(&extra)
}

/// Parameters carry a bare `<ValidRange>`, arguments a `<ValidRangeSet>`.
fn valid_ranges(
    usage: TypeUsage<'_>,
    minimum: Option<String>,
    minimum_inclusive: bool,
    maximum: Option<String>,
    maximum_inclusive: bool,
) -> (Option<Range>, Option<ValidRangeSet>) {
    if minimum.is_none() && maximum.is_none() {
        return (None, None);
    }
    let mut range = bounds(minimum, minimum_inclusive, maximum, maximum_inclusive);
    if usage.argument {
        (
            None,
            Some(ValidRangeSet {
                applies_to_calibrated: true,
                valid_range: range,
            }),
        )
    } else {
        range.applies_to_calibrated = Some(true);
        (Some(range), None)
    }
}

fn bounds(
    minimum: Option<String>,
    minimum_inclusive: bool,
    maximum: Option<String>,
    maximum_inclusive: bool,
) -> Range {
    let mut range = Range::default();
    if minimum_inclusive {
        range.min_inclusive = minimum;
    } else {
        range.min_exclusive = minimum;
    }
    if maximum_inclusive {
        range.max_inclusive = maximum;
    } else {
        range.max_exclusive = maximum;
    }
    range
}

fn alarm_range(range: &AlarmRange) -> Option<Range> {
    if range.is_empty() {
        return None;
    }
    Some(bounds(
        range.low.map(format_float),
        !range.low_exclusive,
        range.high.map(format_float),
        !range.high_exclusive,
    ))
}

fn build_threshold_alarm(alarm: &ThresholdAlarm) -> AlarmDefinition {
    AlarmDefinition {
        min_violations: alarm.minimum_violations,
        static_alarm_ranges: Some(StaticAlarmRanges {
            watch: alarm_range(&alarm.watch),
            warning: alarm_range(&alarm.warning),
            distress: alarm_range(&alarm.distress),
            critical: alarm_range(&alarm.critical),
            severe: alarm_range(&alarm.severe),
        }),
        ..Default::default()
    }
}

fn build_enumeration_alarm(alarm: &EnumerationAlarm) -> AlarmDefinition {
    AlarmDefinition {
        min_violations: alarm.minimum_violations,
        default_alarm_level: Some(alarm.default_level.as_str().to_string()),
        enumeration_alarm_list: Some(EnumerationAlarmList {
            alarms: alarm
                .states
                .iter()
                .map(|(label, level)| crate::model::types::EnumerationAlarm {
                    alarm_level: level.as_str().to_string(),
                    enumeration_label: label.clone(),
                })
                .collect(),
        }),
        ..Default::default()
    }
}

type AlarmParts = (Option<AlarmDefinition>, Option<ContextAlarmList>);

fn threshold_alarms(ctx: &Context<'_>, name: &str, usage: TypeUsage<'_>) -> Result<AlarmParts, MdbError> {
    let expect = |alarm: &Alarm| match alarm {
        Alarm::Threshold(a) => Ok(build_threshold_alarm(a)),
        Alarm::Enumeration(_) => Err(MdbError::Export(format!(
            "Parameter {}: enumeration alarms need an enumerated type",
            name
        ))),
    };
    collect_alarms(ctx, usage, expect)
}

fn enumeration_alarms(ctx: &Context<'_>, name: &str, usage: TypeUsage<'_>) -> Result<AlarmParts, MdbError> {
    let expect = |alarm: &Alarm| match alarm {
        Alarm::Enumeration(a) => Ok(build_enumeration_alarm(a)),
        Alarm::Threshold(_) => Err(MdbError::Export(format!(
            "Parameter {}: threshold alarms need an integer or float type",
            name
        ))),
    };
    collect_alarms(ctx, usage, expect)
}

fn collect_alarms(
    ctx: &Context<'_>,
    usage: TypeUsage<'_>,
    build: impl Fn(&Alarm) -> Result<AlarmDefinition, MdbError>,
) -> Result<AlarmParts, MdbError> {
    let default_alarm = usage.alarm.map(&build).transpose()?;
    if usage.context_alarms.is_empty() {
        return Ok((default_alarm, None));
    }
    let alarms = usage
        .context_alarms
        .iter()
        .map(|ca| {
            Ok(AlarmDefinition {
                context_match: build_holder(ctx, Some(&ca.context))?,
                ..build(&ca.alarm)?
            })
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok((default_alarm, Some(ContextAlarmList { alarms })))
}

fn reject_alarms(name: &str, data_type: &DataType, usage: TypeUsage<'_>) -> Result<(), MdbError> {
    if usage.has_alarms() {
        return Err(MdbError::Export(format!(
            "Parameter {}: alarms are not supported on {} types",
            name,
            data_type.kind()
        )));
    }
    Ok(())
}
