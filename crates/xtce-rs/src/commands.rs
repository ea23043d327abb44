// crates/xtce-rs/src/commands.rs

//! Telecommand definitions.

use std::borrow::Cow;

use crate::ancillary::{AncillaryData, Aliases};
use crate::containers::ParameterEntry;
use crate::datatypes::DataType;
use crate::expressions::Expression;
use crate::references::CommandRef;
use crate::value::Value;
use crate::verifiers::{Verifier, VerifierKind};

/// Significance of a command's on-board effect (ISO 14950 levels D to A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandLevel {
    #[default]
    Normal,
    Vital,
    Critical,
    Forbidden,
}

impl CommandLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandLevel::Normal => "normal",
            CommandLevel::Vital => "vital",
            CommandLevel::Critical => "critical",
            CommandLevel::Forbidden => "forbidden",
        }
    }
}

/// A command field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub default: Option<Value>,
    pub data_type: DataType,
}

impl Argument {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            default: None,
            data_type: data_type.into(),
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Places an argument of the command (or of a base command) in the encoded
/// command. Arguments are referenced by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentEntry {
    pub argument: String,
    pub location_in_bits: i64,
    pub absolute: bool,
    pub short_description: Option<String>,
    pub condition: Option<Expression>,
}

impl ArgumentEntry {
    pub fn new(argument: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            location_in_bits: 0,
            absolute: false,
            short_description: None,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// A constant bit pattern in the encoded command.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedValueEntry {
    pub binary: Vec<u8>,
    pub name: Option<String>,
    /// Width of the value. Defaults to all bytes of `binary`.
    pub bits: Option<u32>,
    pub location_in_bits: i64,
    pub absolute: bool,
    pub short_description: Option<String>,
    pub condition: Option<Expression>,
}

impl FixedValueEntry {
    pub fn new(binary: impl Into<Vec<u8>>) -> Self {
        Self {
            binary: binary.into(),
            name: None,
            bits: None,
            location_in_bits: 0,
            absolute: false,
            short_description: None,
            condition: None,
        }
    }

    pub fn named(name: impl Into<String>, binary: impl Into<Vec<u8>>, bits: u32) -> Self {
        Self {
            name: Some(name.into()),
            bits: Some(bits),
            ..Self::new(binary)
        }
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    /// Explicit size, or the full width of `binary` (saturating at `u32::MAX`).
    pub fn effective_bits(&self) -> u32 {
        self.bits.unwrap_or_else(|| {
            u32::try_from(self.binary.len())
                .ok()
                .and_then(|n| n.checked_mul(8))
                .unwrap_or(u32::MAX)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandEntry {
    Argument(ArgumentEntry),
    Parameter(ParameterEntry),
    FixedValue(FixedValueEntry),
}

impl From<ArgumentEntry> for CommandEntry {
    fn from(e: ArgumentEntry) -> Self {
        CommandEntry::Argument(e)
    }
}

impl From<ParameterEntry> for CommandEntry {
    fn from(e: ParameterEntry) -> Self {
        CommandEntry::Parameter(e)
    }
}

impl From<FixedValueEntry> for CommandEntry {
    fn from(e: FixedValueEntry) -> Self {
        CommandEntry::FixedValue(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub aliases: Aliases,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub extra: AncillaryData,
    pub is_abstract: bool,
    pub base: Option<CommandRef>,
    pub condition: Option<Expression>,
    /// Values fixed for arguments of the base command chain, in order.
    pub assignments: Vec<(String, Value)>,
    pub arguments: Vec<Argument>,
    entries: Option<Vec<CommandEntry>>,
    pub level: CommandLevel,
    pub warning_message: Option<String>,
    pub transferred_to_range_verifier: Option<Verifier>,
    pub sent_from_range_verifier: Option<Verifier>,
    pub received_verifier: Option<Verifier>,
    pub accepted_verifier: Option<Verifier>,
    pub queued_verifier: Option<Verifier>,
    pub execution_verifiers: Vec<Verifier>,
    pub complete_verifiers: Vec<Verifier>,
    pub failed_verifier: Option<Verifier>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Aliases::new(),
            short_description: None,
            long_description: None,
            extra: AncillaryData::new(),
            is_abstract: false,
            base: None,
            condition: None,
            assignments: Vec::new(),
            arguments: Vec::new(),
            entries: None,
            level: CommandLevel::Normal,
            warning_message: None,
            transferred_to_range_verifier: None,
            sent_from_range_verifier: None,
            received_verifier: None,
            accepted_verifier: None,
            queued_verifier: None,
            execution_verifiers: Vec::new(),
            complete_verifiers: Vec::new(),
            failed_verifier: None,
        }
    }

    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn extends(mut self, base: impl Into<CommandRef>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_condition(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_assignment(mut self, argument: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assignments.push((argument.into(), value.into()));
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn with_entries<E: Into<CommandEntry>>(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.set_entries(entries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_level(mut self, level: CommandLevel, warning_message: Option<String>) -> Self {
        self.level = level;
        self.warning_message = warning_message;
        self
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    pub fn with_verifier(mut self, verifier: Verifier) -> Self {
        self.add_verifier(verifier);
        self
    }

    pub fn set_entries(&mut self, entries: Vec<CommandEntry>) {
        self.entries = Some(entries);
    }

    /// Entries of the encoded command.
    ///
    /// Unless set explicitly, one consecutive entry per argument that has an
    /// encoding, in argument order.
    pub fn entries(&self) -> Cow<'_, [CommandEntry]> {
        match &self.entries {
            Some(entries) => Cow::Borrowed(entries),
            None => Cow::Owned(
                self.arguments
                    .iter()
                    .filter(|a| a.data_type.encoding().is_some())
                    .map(|a| CommandEntry::Argument(ArgumentEntry::new(a.name.clone())))
                    .collect(),
            ),
        }
    }

    /// Own argument with this name. See `System::find_argument` for a
    /// lookup through base commands.
    pub fn get_argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Stores the verifier in the slot of its kind. Single-slot kinds are
    /// replaced; execution and complete verifiers accumulate.
    pub fn add_verifier(&mut self, verifier: Verifier) {
        match verifier.kind {
            VerifierKind::TransferredToRange => self.transferred_to_range_verifier = Some(verifier),
            VerifierKind::SentFromRange => self.sent_from_range_verifier = Some(verifier),
            VerifierKind::Received => self.received_verifier = Some(verifier),
            VerifierKind::Accepted => self.accepted_verifier = Some(verifier),
            VerifierKind::Queued => self.queued_verifier = Some(verifier),
            VerifierKind::Execution => self.execution_verifiers.push(verifier),
            VerifierKind::Complete => self.complete_verifiers.push(verifier),
            VerifierKind::Failed => self.failed_verifier = Some(verifier),
        }
    }

    /// All verifiers in lifecycle order.
    pub fn verifiers(&self) -> Vec<&Verifier> {
        let mut res: Vec<&Verifier> = Vec::new();
        res.extend(self.transferred_to_range_verifier.as_ref());
        res.extend(self.sent_from_range_verifier.as_ref());
        res.extend(self.received_verifier.as_ref());
        res.extend(self.accepted_verifier.as_ref());
        res.extend(self.queued_verifier.as_ref());
        res.extend(self.execution_verifiers.iter());
        res.extend(self.complete_verifiers.iter());
        res.extend(self.failed_verifier.as_ref());
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{BooleanType, IntegerType};
    use crate::encodings::UINT8_T;
    use crate::references::ContainerRef;
    use crate::verifiers::Check;

    #[test]
    fn test_default_entries_skip_unencoded_arguments() {
        let cmd = Command::new("set").with_arguments([
            Argument::new("a", IntegerType::new().with_encoding(UINT8_T)),
            Argument::new("b", IntegerType::new()),
            Argument::new("c", BooleanType::new().with_encoding(UINT8_T)),
        ]);
        let entries = cmd.entries();
        let names: Vec<&str> = entries
            .iter()
            .map(|e| match e {
                CommandEntry::Argument(a) => a.argument.as_str(),
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_explicit_entries_win() {
        let cmd = Command::new("ping")
            .with_argument(Argument::new("a", IntegerType::new().with_encoding(UINT8_T)))
            .with_entries([FixedValueEntry::new(vec![0xAB])]);
        let entries = cmd.entries();
        assert_eq!(entries.len(), 1);
        assert!(matches!(&entries[0], CommandEntry::FixedValue(f) if f.effective_bits() == 8));
    }

    #[test]
    fn test_fixed_value_width() {
        assert_eq!(FixedValueEntry::new(vec![0x00; 3]).effective_bits(), 24);
        assert_eq!(FixedValueEntry::named("flags", vec![0x03], 2).effective_bits(), 2);
        assert_eq!(FixedValueEntry::new(Vec::new()).effective_bits(), 0);
    }

    #[test]
    fn test_verifier_order() {
        let ack = || Check::Container(ContainerRef::by_path("/Sat/ack"));
        let mut cmd = Command::new("reboot");
        cmd.add_verifier(Verifier::failed(ack(), 1.0));
        cmd.add_verifier(Verifier::complete(ack(), 1.0));
        cmd.add_verifier(Verifier::accepted(ack(), 1.0));
        cmd.add_verifier(Verifier::execution(ack(), 1.0));
        cmd.add_verifier(Verifier::complete(ack(), 2.0));

        let kinds: Vec<VerifierKind> = cmd.verifiers().iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                VerifierKind::Accepted,
                VerifierKind::Execution,
                VerifierKind::Complete,
                VerifierKind::Complete,
                VerifierKind::Failed,
            ]
        );
    }

    #[test]
    fn test_get_argument() {
        let cmd = Command::new("set").with_argument(Argument::new("a", IntegerType::new()));
        assert!(cmd.get_argument("a").is_some());
        assert!(cmd.get_argument("z").is_none());
    }
}
