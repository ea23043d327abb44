// crates/xtce-rs/src/parameters.rs

//! Telemetry (and derived, local, ground...) value definitions.

use crate::alarms::{Alarm, ContextAlarm};
use crate::ancillary::Aliases;
use crate::datatypes::{DataType, TypeInfo};
use crate::value::Value;

/// Origin of a parameter's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Values arrive in telemetry.
    #[default]
    Telemetered,
    /// Calculated, usually by an algorithm.
    Derived,
    /// Fixed for the mission, e.g. a vehicle id.
    Constant,
    /// Used by ground software locally, e.g. a command counter.
    Local,
    /// Produced by an asset other than the spacecraft.
    Ground,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Telemetered => "telemetered",
            DataSource::Derived => "derived",
            DataSource::Constant => "constant",
            DataSource::Local => "local",
            DataSource::Ground => "ground",
        }
    }
}

/// A named data type registered in a system.
///
/// Alarms apply to integer and float parameters (threshold alarms) and to
/// enumerated parameters (enumeration alarms).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub aliases: Aliases,
    pub data_source: DataSource,
    pub initial_value: Option<Value>,
    /// Whether the last value survives a restart of the processing system.
    pub persistent: bool,
    pub alarm: Option<Alarm>,
    pub context_alarms: Vec<ContextAlarm>,
    pub data_type: DataType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            aliases: Aliases::new(),
            data_source: DataSource::Telemetered,
            initial_value: None,
            persistent: true,
            alarm: None,
            context_alarms: Vec::new(),
            data_type: data_type.into(),
        }
    }

    pub fn info(&self) -> &TypeInfo {
        self.data_type.info()
    }

    pub fn with_alias(mut self, namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(namespace.into(), alias.into());
        self
    }

    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn with_initial_value(mut self, value: impl Into<Value>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn with_alarm(mut self, alarm: impl Into<Alarm>) -> Self {
        self.alarm = Some(alarm.into());
        self
    }

    pub fn with_context_alarm(mut self, alarm: ContextAlarm) -> Self {
        self.context_alarms.push(alarm);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::IntegerType;

    #[test]
    fn test_defaults() {
        let p = Parameter::new("counter", IntegerType::new());
        assert_eq!(p.data_source, DataSource::Telemetered);
        assert!(p.persistent);
        assert!(p.alarm.is_none());
        assert_eq!(p.data_type.kind(), "integer");
    }

    #[test]
    fn test_data_source_names() {
        assert_eq!(DataSource::Ground.as_str(), "ground");
        assert_eq!(DataSource::default().as_str(), "telemetered");
    }
}
