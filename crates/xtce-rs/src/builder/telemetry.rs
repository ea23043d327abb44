// crates/xtce-rs/src/builder/telemetry.rs

//! Contains builder functions for the `<TelemetryMetaData>` sets.

use log::trace;

use super::encoding::build_input_set;
use super::expressions::build_holder;
use super::format::format_float;
use super::types::{TypeUsage, build_type_definitions};
use super::{Context, build_alias_set, build_ancillary_data_set};
use crate::algorithms::{Algorithm, OutputParameter, Trigger};
use crate::containers::{Container, SequenceEntry};
use crate::error::MdbError;
use crate::model::algorithms::{
    AlgorithmSet, AlgorithmText, CustomAlgorithm, OutputParameterRef, OutputSet,
    Trigger as TriggerModel, TriggerSet,
};
use crate::model::common::{IntegerValue, LocationInContainerInBits};
use crate::model::containers::{
    BaseContainer, ContainerRefEntry, ContainerSet, ContainerSize, Entry, EntryList,
    Parameter as ParameterModel, ParameterProperties, ParameterRefEntry, ParameterSet,
    RateInStream, SequenceContainer,
};
use crate::model::types::ParameterTypeSet;
use crate::parameters::Parameter;

/// Builds the `<ParameterTypeSet>`, one type per parameter.
pub(super) fn build_parameter_type_set(
    ctx: &Context<'_>,
    parameters: &[&Parameter],
) -> Result<Option<ParameterTypeSet>, MdbError> {
    if parameters.is_empty() {
        return Ok(None);
    }
    let mut types = Vec::new();
    for parameter in parameters {
        build_type_definitions(
            ctx,
            &parameter.name,
            parameter.initial_value.as_ref(),
            &parameter.data_type,
            TypeUsage::parameter(parameter),
            &mut types,
        )?;
    }
    Ok(Some(ParameterTypeSet { types }))
}

/// Builds the `<ParameterSet>`. Each parameter refers to the type of the
/// same name.
pub(super) fn build_parameter_set(parameters: &[&Parameter]) -> Option<ParameterSet> {
    if parameters.is_empty() {
        return None;
    }
    let parameters = parameters
        .iter()
        .map(|p| {
            let info = p.info();
            ParameterModel {
                name: p.name.clone(),
                parameter_type_ref: p.name.clone(),
                short_description: info.short_description.clone(),
                long_description: info.long_description.clone(),
                alias_set: build_alias_set(&p.aliases),
                ancillary_data_set: build_ancillary_data_set(&info.extra),
                properties: ParameterProperties {
                    data_source: p.data_source.as_str().to_string(),
                    persistence: p.persistent,
                },
            }
        })
        .collect();
    Some(ParameterSet { parameters })
}

pub(super) fn build_container_set(
    ctx: &Context<'_>,
    containers: &[&Container],
) -> Result<Option<ContainerSet>, MdbError> {
    if containers.is_empty() {
        return Ok(None);
    }
    let containers = containers
        .iter()
        .map(|c| build_sequence_container(ctx, c))
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(ContainerSet { containers }))
}

fn build_sequence_container(
    ctx: &Context<'_>,
    container: &Container,
) -> Result<SequenceContainer, MdbError> {
    trace!("Writing container {}", container.name);
    let mut extra = container.extra.clone();
    if container.hint_partition {
        extra.append("Yamcs", "UseAsArchivingPartition");
    }

    let base_container = container
        .base
        .as_ref()
        .map(|base| {
            Ok::<_, MdbError>(BaseContainer {
                container_ref: ctx.container_ref(base)?,
                restriction_criteria: build_holder(ctx, container.condition.as_ref())?,
            })
        })
        .transpose()?;

    Ok(SequenceContainer {
        name: container.name.clone(),
        is_abstract: container.is_abstract,
        short_description: container.short_description.clone(),
        long_description: container.long_description.clone(),
        alias_set: build_alias_set(&container.aliases),
        ancillary_data_set: build_ancillary_data_set(&extra),
        default_rate_in_stream: container.rate.map(|rate| RateInStream {
            maximum_value: format_float(rate),
        }),
        binary_encoding: container.bits.map(|bits| ContainerSize {
            size_in_bits: IntegerValue::fixed(i64::from(bits)),
        }),
        entry_list: build_entry_list(ctx, &container.entries)?,
        base_container,
    })
}

pub(super) fn location(absolute: bool, location_in_bits: i64) -> LocationInContainerInBits {
    LocationInContainerInBits {
        reference_location: if absolute {
            "containerStart".to_string()
        } else {
            "previousEntry".to_string()
        },
        fixed_value: location_in_bits,
    }
}

fn build_entry_list(ctx: &Context<'_>, entries: &[SequenceEntry]) -> Result<EntryList, MdbError> {
    let entries = entries
        .iter()
        .map(|entry| match entry {
            SequenceEntry::Parameter(e) => Ok(Entry::Parameter(ParameterRefEntry {
                parameter_ref: ctx.parameter_ref(&e.parameter)?,
                short_description: e.short_description.clone(),
                location: location(e.absolute, e.location_in_bits),
                include_condition: build_holder(ctx, e.condition.as_ref())?,
            })),
            SequenceEntry::Container(e) => Ok(Entry::Container(ContainerRefEntry {
                container_ref: ctx.container_ref(&e.container)?,
                short_description: e.short_description.clone(),
                location: location(e.absolute, e.location_in_bits),
                include_condition: build_holder(ctx, e.condition.as_ref())?,
            })),
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(EntryList { entries })
}

pub(super) fn build_algorithm_set<'a>(
    ctx: &Context<'_>,
    algorithms: impl Iterator<Item = &'a Algorithm>,
) -> Result<Option<AlgorithmSet>, MdbError> {
    let algorithms = algorithms
        .map(|a| build_custom_algorithm(ctx, a))
        .collect::<Result<Vec<_>, MdbError>>()?;
    if algorithms.is_empty() {
        return Ok(None);
    }
    Ok(Some(AlgorithmSet { algorithms }))
}

fn build_custom_algorithm(
    ctx: &Context<'_>,
    algorithm: &Algorithm,
) -> Result<CustomAlgorithm, MdbError> {
    let mut extra = algorithm.extra.clone();
    for input in &algorithm.inputs {
        if let (true, Some(name)) = (input.required, &input.name) {
            extra.append("Yamcs:AlgorithmMandatoryInput", name.clone());
        }
    }

    Ok(CustomAlgorithm {
        name: algorithm.name.clone(),
        short_description: algorithm.short_description.clone(),
        long_description: algorithm.long_description.clone(),
        alias_set: build_alias_set(&algorithm.aliases),
        ancillary_data_set: build_ancillary_data_set(&extra),
        algorithm_text: AlgorithmText {
            language: algorithm.language.clone(),
            text: algorithm.text.clone(),
        },
        input_set: build_input_set(ctx, &algorithm.inputs)?,
        output_set: build_output_set(ctx, &algorithm.outputs)?,
        trigger_set: build_trigger_set(ctx, &algorithm.triggers)?,
    })
}

fn build_output_set(
    ctx: &Context<'_>,
    outputs: &[OutputParameter],
) -> Result<Option<OutputSet>, MdbError> {
    if outputs.is_empty() {
        return Ok(None);
    }
    let outputs = outputs
        .iter()
        .map(|output| {
            Ok(OutputParameterRef {
                parameter_ref: ctx.parameter_ref(&output.parameter)?,
                output_name: output.name.clone(),
            })
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(OutputSet { outputs }))
}

fn build_trigger_set(
    ctx: &Context<'_>,
    triggers: &[Trigger],
) -> Result<Option<TriggerSet>, MdbError> {
    if triggers.is_empty() {
        return Ok(None);
    }
    let triggers = triggers
        .iter()
        .map(|trigger| match trigger {
            Trigger::OnParameterUpdate(p) => Ok(TriggerModel::OnParameterUpdate {
                parameter_ref: ctx.parameter_ref(p)?,
            }),
            Trigger::OnContainerUpdate(c) => Ok(TriggerModel::OnContainerUpdate {
                container_ref: ctx.container_ref(c)?,
            }),
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(TriggerSet { triggers }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::InputParameter;
    use crate::containers::ParameterEntry;
    use crate::datatypes::IntegerType;
    use crate::encodings::UINT8_T;
    use crate::system::System;

    #[test]
    fn test_entry_locations() {
        assert_eq!(location(true, 16).reference_location, "containerStart");
        let relative = location(false, 3);
        assert_eq!(relative.reference_location, "previousEntry");
        assert_eq!(relative.fixed_value, 3);
    }

    #[test]
    fn test_partition_hint_becomes_ancillary_data() {
        let mut root = System::new("Sat");
        let p = root
            .add_parameter(Parameter::new("a", IntegerType::new().with_encoding(UINT8_T)))
            .unwrap();
        let container = Container::new("pkt")
            .with_entry(ParameterEntry::at(p, 8))
            .with_rate(2.0)
            .with_hint_partition();
        let ctx = Context::new(&root);
        let model = build_sequence_container(&ctx, &container).unwrap();
        let extra = model.ancillary_data_set.unwrap();
        assert_eq!(extra.items[0].name, "Yamcs");
        assert_eq!(extra.items[0].value, "UseAsArchivingPartition");
        assert_eq!(model.default_rate_in_stream.unwrap().maximum_value, "2.0");
    }

    #[test]
    fn test_required_named_inputs_are_marked_mandatory() {
        let mut root = System::new("Sat");
        let a = root
            .add_parameter(Parameter::new("a", IntegerType::new().with_encoding(UINT8_T)))
            .unwrap();
        let b = root
            .add_parameter(Parameter::new("b", IntegerType::new().with_encoding(UINT8_T)))
            .unwrap();
        let algorithm = Algorithm::new("sum", "JavaScript", "out.value = x.value;")
            .with_input(InputParameter::named(a.clone(), "x").required())
            .with_input(InputParameter::new(b).required())
            .with_trigger(Trigger::OnParameterUpdate(a));
        let ctx = Context::new(&root);
        let model = build_custom_algorithm(&ctx, &algorithm).unwrap();

        let extra = model.ancillary_data_set.unwrap();
        assert_eq!(extra.items.len(), 1);
        assert_eq!(extra.items[0].name, "Yamcs:AlgorithmMandatoryInput");
        assert_eq!(extra.items[0].value, "x");
        assert_eq!(model.input_set.unwrap().inputs.len(), 2);
        assert!(model.output_set.is_none());
        assert_eq!(model.trigger_set.unwrap().triggers.len(), 1);
    }
}
