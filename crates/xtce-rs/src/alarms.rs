// crates/xtce-rs/src/alarms.rs

//! Alarm definitions attached to numeric and enumerated parameters.

use crate::expressions::Expression;

/// Severity of an out-of-limits condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AlarmLevel {
    #[default]
    Normal,
    Watch,
    Warning,
    Distress,
    Critical,
    Severe,
}

impl AlarmLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlarmLevel::Normal => "normal",
            AlarmLevel::Watch => "watch",
            AlarmLevel::Warning => "warning",
            AlarmLevel::Distress => "distress",
            AlarmLevel::Critical => "critical",
            AlarmLevel::Severe => "severe",
        }
    }
}

/// Low/high limits of one severity band. Values strictly inside the band are
/// in limits; a bound is inclusive unless its `*_exclusive` flag is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlarmRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub low_exclusive: bool,
    pub high_exclusive: bool,
}

impl AlarmRange {
    pub fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self {
            low,
            high,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// Nested severity bands for a numeric parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdAlarm {
    pub watch: AlarmRange,
    pub warning: AlarmRange,
    pub distress: AlarmRange,
    pub critical: AlarmRange,
    pub severe: AlarmRange,
    pub minimum_violations: u32,
}

impl Default for ThresholdAlarm {
    fn default() -> Self {
        Self {
            watch: AlarmRange::default(),
            warning: AlarmRange::default(),
            distress: AlarmRange::default(),
            critical: AlarmRange::default(),
            severe: AlarmRange::default(),
            minimum_violations: 1,
        }
    }
}

impl ThresholdAlarm {
    /// Bands in XTCE order, paired with their level.
    pub fn bands(&self) -> [(AlarmLevel, &AlarmRange); 5] {
        [
            (AlarmLevel::Watch, &self.watch),
            (AlarmLevel::Warning, &self.warning),
            (AlarmLevel::Distress, &self.distress),
            (AlarmLevel::Critical, &self.critical),
            (AlarmLevel::Severe, &self.severe),
        ]
    }
}

/// Label-to-severity mapping for an enumerated parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationAlarm {
    pub states: Vec<(String, AlarmLevel)>,
    pub default_level: AlarmLevel,
    pub minimum_violations: u32,
}

impl Default for EnumerationAlarm {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            default_level: AlarmLevel::Normal,
            minimum_violations: 1,
        }
    }
}

impl EnumerationAlarm {
    pub fn state(mut self, label: impl Into<String>, level: AlarmLevel) -> Self {
        self.states.push((label.into(), level));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Alarm {
    Threshold(ThresholdAlarm),
    Enumeration(EnumerationAlarm),
}

impl From<ThresholdAlarm> for Alarm {
    fn from(a: ThresholdAlarm) -> Self {
        Alarm::Threshold(a)
    }
}

impl From<EnumerationAlarm> for Alarm {
    fn from(a: EnumerationAlarm) -> Self {
        Alarm::Enumeration(a)
    }
}

/// An alarm that applies only while `context` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextAlarm {
    pub context: Expression,
    pub alarm: Alarm,
}

impl ContextAlarm {
    pub fn new(context: Expression, alarm: impl Into<Alarm>) -> Self {
        Self {
            context,
            alarm: alarm.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_render_lowercase() {
        assert_eq!(AlarmLevel::Distress.as_str(), "distress");
        assert_eq!(AlarmLevel::default(), AlarmLevel::Normal);
    }

    #[test]
    fn test_threshold_defaults_to_single_violation() {
        let alarm = ThresholdAlarm::default();
        assert_eq!(alarm.minimum_violations, 1);
        assert!(alarm.bands().iter().all(|(_, r)| r.is_empty()));
    }

    #[test]
    fn test_enumeration_states_keep_order() {
        let alarm = EnumerationAlarm::default()
            .state("OFF", AlarmLevel::Critical)
            .state("ERROR", AlarmLevel::Warning);
        assert_eq!(alarm.states[0].0, "OFF");
        assert_eq!(alarm.states[1].1, AlarmLevel::Warning);
    }
}
