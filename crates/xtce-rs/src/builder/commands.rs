// crates/xtce-rs/src/builder/commands.rs

//! Contains builder functions for the `<CommandMetaData>` sets.

use log::trace;

use super::encoding::build_input_algorithm;
use super::expressions::{build_boolean_expression, build_holder};
use super::format::iso_duration;
use super::telemetry::location;
use super::types::{TypeUsage, build_type_definitions};
use super::{Context, build_alias_set, build_ancillary_data_set};
use crate::commands::{Command, CommandEntry};
use crate::error::MdbError;
use crate::model::commands::{
    Argument, ArgumentAssignment, ArgumentAssignmentList, ArgumentList, ArgumentTypeSet,
    BaseMetaCommand, CheckWindow, CommandBaseContainer, CommandContainer, DefaultSignificance,
    MetaCommand, MetaCommandSet, ReturnParmRef, Verifier as VerifierModel, VerifierBody,
    VerifierCheck, VerifierSet,
};
use crate::model::containers::{
    ArgumentRefEntry, Entry, EntryList, FixedValueEntry, ParameterRefEntry,
};
use crate::verifiers::{Check, TerminationAction, Verifier, VerifierKind};

/// Name of the argument type generated for `argument` of `command`.
fn argument_type_name(command: &Command, argument: &str) -> String {
    format!("{}__{}", command.name, argument)
}

/// Builds the `<ArgumentTypeSet>`. Each argument gets a type of its own.
pub(super) fn build_argument_type_set(
    ctx: &Context<'_>,
    commands: &[&Command],
) -> Result<Option<ArgumentTypeSet>, MdbError> {
    let mut types = Vec::new();
    for command in commands {
        for argument in &command.arguments {
            build_type_definitions(
                ctx,
                &argument_type_name(command, &argument.name),
                argument.default.as_ref(),
                &argument.data_type,
                TypeUsage::argument(),
                &mut types,
            )?;
        }
    }
    if types.is_empty() {
        return Ok(None);
    }
    Ok(Some(ArgumentTypeSet {
        types: types.into_iter().map(Into::into).collect(),
    }))
}

pub(super) fn build_meta_command_set(
    ctx: &Context<'_>,
    commands: &[&Command],
) -> Result<Option<MetaCommandSet>, MdbError> {
    if commands.is_empty() {
        return Ok(None);
    }
    let commands = commands
        .iter()
        .map(|c| build_meta_command(ctx, c))
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(MetaCommandSet { commands }))
}

fn build_meta_command(ctx: &Context<'_>, command: &Command) -> Result<MetaCommand, MdbError> {
    trace!("Writing command {}", command.name);

    let mut base_meta_command = None;
    let mut base_container = None;
    if let Some(base) = &command.base {
        let base_ref = ctx.command_ref(base)?;
        base_meta_command = Some(BaseMetaCommand {
            meta_command_ref: base_ref.clone(),
            argument_assignment_list: build_assignments(ctx, command)?,
        });
        base_container = Some(CommandBaseContainer {
            container_ref: base_ref,
            restriction_criteria: build_holder(ctx, command.condition.as_ref())?,
        });
    }

    let argument_list = (!command.arguments.is_empty()).then(|| ArgumentList {
        arguments: command
            .arguments
            .iter()
            .map(|a| {
                let info = a.data_type.info();
                Argument {
                    name: a.name.clone(),
                    argument_type_ref: argument_type_name(command, &a.name),
                    initial_value: None,
                    short_description: info.short_description.clone(),
                    long_description: info.long_description.clone(),
                    ancillary_data_set: build_ancillary_data_set(&info.extra),
                }
            })
            .collect(),
    });

    Ok(MetaCommand {
        name: command.name.clone(),
        is_abstract: command.is_abstract,
        short_description: command.short_description.clone(),
        long_description: command.long_description.clone(),
        alias_set: build_alias_set(&command.aliases),
        ancillary_data_set: build_ancillary_data_set(&command.extra),
        base_meta_command,
        argument_list,
        command_container: CommandContainer {
            name: command.name.clone(),
            entry_list: build_command_entry_list(ctx, &command.entries())?,
            base_container,
        },
        default_significance: DefaultSignificance {
            consequence_level: command.level.as_str().to_string(),
            reason_for_warning: command.warning_message.clone(),
        },
        verifier_set: build_verifier_set(ctx, &command.verifiers())?,
    })
}

/// Assigned values are rendered against the type of the argument they
/// target, searched through the base command chain.
fn build_assignments(
    ctx: &Context<'_>,
    command: &Command,
) -> Result<Option<ArgumentAssignmentList>, MdbError> {
    let Some(base) = &command.base else {
        return Ok(None);
    };
    if command.assignments.is_empty() {
        return Ok(None);
    }
    let assignments = command
        .assignments
        .iter()
        .map(|(name, value)| {
            let argument_value = match ctx.root().find_argument(base, name, true) {
                Some(argument) => argument.data_type.format_value(value)?,
                None => value.to_xml_value(),
            };
            Ok(ArgumentAssignment {
                argument_name: name.clone(),
                argument_value,
            })
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(ArgumentAssignmentList { assignments }))
}

fn build_command_entry_list(
    ctx: &Context<'_>,
    entries: &[CommandEntry],
) -> Result<EntryList, MdbError> {
    let entries = entries
        .iter()
        .map(|entry| match entry {
            CommandEntry::Argument(e) => Ok(Entry::Argument(ArgumentRefEntry {
                argument_ref: e.argument.clone(),
                short_description: e.short_description.clone(),
                location: location(e.absolute, e.location_in_bits),
                include_condition: build_holder(ctx, e.condition.as_ref())?,
            })),
            CommandEntry::Parameter(e) => Ok(Entry::Parameter(ParameterRefEntry {
                parameter_ref: ctx.parameter_ref(&e.parameter)?,
                short_description: e.short_description.clone(),
                location: location(e.absolute, e.location_in_bits),
                include_condition: build_holder(ctx, e.condition.as_ref())?,
            })),
            CommandEntry::FixedValue(e) => Ok(Entry::FixedValue(FixedValueEntry {
                name: e.name.clone(),
                short_description: e.short_description.clone(),
                binary_value: hex::encode(&e.binary),
                size_in_bits: e.effective_bits(),
                location: location(e.absolute, e.location_in_bits),
                include_condition: build_holder(ctx, e.condition.as_ref())?,
            })),
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(EntryList { entries })
}

fn build_verifier_set(
    ctx: &Context<'_>,
    verifiers: &[&Verifier],
) -> Result<Option<VerifierSet>, MdbError> {
    if verifiers.is_empty() {
        return Ok(None);
    }
    let verifiers = verifiers
        .iter()
        .map(|v| build_verifier(ctx, v))
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(VerifierSet { verifiers }))
}

fn build_verifier(ctx: &Context<'_>, verifier: &Verifier) -> Result<VerifierModel, MdbError> {
    // Termination actions are always written, empty ones included, so the
    // processing system does not fall back to its own defaults.
    let action = |a: Option<TerminationAction>| a.map_or("", TerminationAction::as_str);
    let mut extra = verifier.extra.clone();
    extra.append("yamcs.onSuccess", action(verifier.on_success));
    extra.append("yamcs.onFail", action(verifier.on_fail));
    extra.append("yamcs.onTimeout", action(verifier.on_timeout));

    let check = match &verifier.check {
        Check::Container(container) => VerifierCheck::ContainerRef {
            container_ref: ctx.container_ref(container)?,
        },
        Check::Expression(expression) => {
            VerifierCheck::BooleanExpression(build_boolean_expression(ctx, expression)?)
        }
        Check::Algorithm(algorithm) => {
            VerifierCheck::CustomAlgorithm(build_input_algorithm(ctx, algorithm)?)
        }
    };

    let return_parm_ref = match verifier.kind {
        VerifierKind::Complete | VerifierKind::Failed => verifier
            .return_parameter
            .as_ref()
            .map(|p| {
                Ok::<_, MdbError>(ReturnParmRef {
                    parameter_ref: ctx.parameter_ref(p)?,
                })
            })
            .transpose()?,
        _ => None,
    };

    let body = VerifierBody {
        name: verifier.name.clone(),
        ancillary_data_set: build_ancillary_data_set(&extra),
        check,
        check_window: CheckWindow {
            time_to_start_checking: iso_duration(verifier.delay),
            time_to_stop_checking: iso_duration(verifier.timeout),
            time_window_is_relative_to: "commandRelease".to_string(),
        },
        return_parm_ref,
    };

    Ok(match verifier.kind {
        VerifierKind::TransferredToRange => VerifierModel::TransferredToRangeVerifier(body),
        VerifierKind::SentFromRange => VerifierModel::SentFromRangeVerifier(body),
        VerifierKind::Received => VerifierModel::ReceivedVerifier(body),
        VerifierKind::Accepted => VerifierModel::AcceptedVerifier(body),
        VerifierKind::Queued => VerifierModel::QueuedVerifier(body),
        VerifierKind::Execution => VerifierModel::ExecutionVerifier(body),
        VerifierKind::Complete => VerifierModel::CompleteVerifier(body),
        VerifierKind::Failed => VerifierModel::FailedVerifier(body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Argument as CommandArgument, FixedValueEntry as Fixed};
    use crate::datatypes::{EnumeratedType, IntegerType};
    use crate::encodings::{UINT8_T, UINT16_T};
    use crate::system::System;

    #[test]
    fn test_assignment_uses_label_of_base_argument() {
        let mut root = System::new("Sat");
        let base = root
            .add_command(
                Command::new("base").as_abstract().with_argument(CommandArgument::new(
                    "mode",
                    EnumeratedType::new([(0, "SAFE"), (1, "NOMINAL")]).with_encoding(UINT8_T),
                )),
            )
            .unwrap();
        root.add_command(Command::new("nominal").extends(base).with_assignment("mode", 1))
            .unwrap();

        let ctx = Context::new(&root);
        let nominal = root.find_command("nominal").unwrap();
        let model = build_meta_command(&ctx, nominal).unwrap();
        let base_cmd = model.base_meta_command.unwrap();
        assert_eq!(base_cmd.meta_command_ref, "base");
        let assignment = &base_cmd.argument_assignment_list.unwrap().assignments[0];
        assert_eq!(assignment.argument_name, "mode");
        assert_eq!(assignment.argument_value, "NOMINAL");
        assert_eq!(model.command_container.base_container.unwrap().container_ref, "base");
    }

    #[test]
    fn test_default_entries_follow_encoded_arguments() {
        let command = Command::new("set")
            .with_argument(CommandArgument::new("a", IntegerType::new().with_encoding(UINT16_T)))
            .with_argument(CommandArgument::new("b", IntegerType::new()));
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        let list = build_command_entry_list(&ctx, &command.entries()).unwrap();
        assert_eq!(list.entries.len(), 1);
        match &list.entries[0] {
            Entry::Argument(e) => assert_eq!(e.argument_ref, "a"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fixed_value_entry_is_hex() {
        let command = Command::new("ping").with_entries([Fixed::new(vec![0x0a, 0xff])]);
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        let list = build_command_entry_list(&ctx, &command.entries()).unwrap();
        match &list.entries[0] {
            Entry::FixedValue(e) => {
                assert_eq!(e.binary_value, "0aff");
                assert_eq!(e.size_in_bits, 16);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_verifier_actions_and_window() {
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        let verifier = Verifier::complete(Check::Container("/Sat/ack".into()), 10.0)
            .with_return_parameter("/Sat/result");
        let model = build_verifier(&ctx, &verifier).unwrap();
        let body = match model {
            VerifierModel::CompleteVerifier(body) => body,
            other => panic!("unexpected {:?}", other),
        };
        let extra = body.ancillary_data_set.unwrap().items;
        let values: Vec<(&str, &str)> = extra
            .iter()
            .map(|i| (i.name.as_str(), i.value.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("yamcs.onSuccess", "SUCCESS"),
                ("yamcs.onFail", "FAIL"),
                ("yamcs.onTimeout", ""),
            ]
        );
        assert_eq!(body.check_window.time_to_start_checking, "PT0S");
        assert_eq!(body.check_window.time_to_stop_checking, "PT10S");
        assert_eq!(body.return_parm_ref.unwrap().parameter_ref, "result");
    }

    #[test]
    fn test_return_parameter_only_on_final_verifiers() {
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        let verifier = Verifier::accepted(Check::Container("/Sat/ack".into()), 5.0)
            .with_return_parameter("/Sat/result");
        match build_verifier(&ctx, &verifier).unwrap() {
            VerifierModel::AcceptedVerifier(body) => assert!(body.return_parm_ref.is_none()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
