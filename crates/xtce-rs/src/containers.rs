// crates/xtce-rs/src/containers.rs

//! Sequence containers and their entries.

use log::trace;

use crate::ancillary::{AncillaryData, Aliases};
use crate::datatypes::{ArrayLength, DataType};
use crate::error::MdbError;
use crate::expressions::Expression;
use crate::references::{ContainerRef, ParameterRef, Target};
use crate::system::System;

/// Places a parameter inside a container (or a command).
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEntry {
    pub parameter: ParameterRef,
    /// Offset in bits, from the container start when `absolute`, otherwise
    /// from the end of the previous entry.
    pub location_in_bits: i64,
    pub absolute: bool,
    pub short_description: Option<String>,
    pub condition: Option<Expression>,
}

impl ParameterEntry {
    pub fn new(parameter: impl Into<ParameterRef>) -> Self {
        Self {
            parameter: parameter.into(),
            location_in_bits: 0,
            absolute: false,
            short_description: None,
            condition: None,
        }
    }

    /// Entry at a fixed position from the container start.
    pub fn at(parameter: impl Into<ParameterRef>, location_in_bits: i64) -> Self {
        Self {
            location_in_bits,
            absolute: true,
            ..Self::new(parameter)
        }
    }

    /// Entry separated from the previous entry by `gap` bits.
    pub fn after(parameter: impl Into<ParameterRef>, gap: i64) -> Self {
        Self {
            location_in_bits: gap,
            ..Self::new(parameter)
        }
    }

    pub fn with_condition(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }
}

/// Embeds another container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerEntry {
    pub container: ContainerRef,
    pub location_in_bits: i64,
    pub absolute: bool,
    pub short_description: Option<String>,
    pub condition: Option<Expression>,
}

impl ContainerEntry {
    pub fn new(container: impl Into<ContainerRef>) -> Self {
        Self {
            container: container.into(),
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

#[derive(Debug, Clone, PartialEq)]
pub enum SequenceEntry {
    Parameter(ParameterEntry),
    Container(ContainerEntry),
}

impl From<ParameterEntry> for SequenceEntry {
    fn from(e: ParameterEntry) -> Self {
        SequenceEntry::Parameter(e)
    }
}

impl From<ContainerEntry> for SequenceEntry {
    fn from(e: ContainerEntry) -> Self {
        SequenceEntry::Container(e)
    }
}

impl From<ParameterRef> for SequenceEntry {
    fn from(p: ParameterRef) -> Self {
        SequenceEntry::Parameter(ParameterEntry::new(p))
    }
}

impl From<&ParameterRef> for SequenceEntry {
    fn from(p: &ParameterRef) -> Self {
        SequenceEntry::Parameter(ParameterEntry::new(p.clone()))
    }
}

/// An ordered layout of entries.
///
/// A container may extend a base container; `condition` then restricts when
/// the base is specialized into this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub name: String,
    pub entries: Vec<SequenceEntry>,
    pub base: Option<ContainerRef>,
    pub is_abstract: bool,
    pub condition: Option<Expression>,
    pub aliases: Aliases,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub extra: AncillaryData,
    /// Fixed size, including the size of any base container.
    pub bits: Option<u32>,
    /// Expected interval between two instances, in seconds.
    pub rate: Option<f64>,
    /// Use this container's name for archive partitioning.
    pub hint_partition: bool,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            base: None,
            is_abstract: false,
            condition: None,
            aliases: Aliases::new(),
            short_description: None,
            long_description: None,
            extra: AncillaryData::new(),
            bits: None,
            rate: None,
            hint_partition: false,
        }
    }

    pub fn with_entries<E: Into<SequenceEntry>>(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn with_entry(mut self, entry: impl Into<SequenceEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn extends(mut self, base: impl Into<ContainerRef>, condition: Option<Expression>) -> Self {
        self.base = Some(base.into());
        self.condition = condition;
        self
    }

    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = Some(bits);
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
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

    pub fn with_hint_partition(mut self) -> Self {
        self.hint_partition = true;
        self
    }

    /// Sets `bits` to the end of the furthest entry and returns it.
    ///
    /// Parameters are looked up in `resolver`, which must contain the
    /// referenced entities.
    pub fn fit_entries(&mut self, resolver: &System) -> Result<u32, MdbError> {
        if self.base.is_some() {
            return Err(MdbError::Unsupported("fit_entries on a container with a base container"));
        }

        let mut max_end: i64 = 0;
        let mut prev_end: i64 = 0;
        for entry in &self.entries {
            let entry = match entry {
                SequenceEntry::Parameter(e) => e,
                SequenceEntry::Container(_) => {
                    return Err(MdbError::Unsupported("fit_entries with container entries"));
                }
            };

            let width = i64::from(parameter_width(&entry.parameter, resolver)?);
            let start = if entry.absolute { 0 } else { prev_end };
            let end = start
                .checked_add(entry.location_in_bits)
                .and_then(|end| end.checked_add(width))
                .ok_or_else(|| too_large(&self.name))?;
            trace!("Entry {} ends at bit {}", entry.parameter, end);
            prev_end = end;
            max_end = max_end.max(end);
        }

        let bits = u32::try_from(max_end).map_err(|_| too_large(&self.name))?;
        self.bits = Some(bits);
        Ok(bits)
    }
}

fn too_large(container: &str) -> MdbError {
    MdbError::Export(format!("Container {} exceeds {} bits", container, u32::MAX))
}

fn parameter_width(parameter: &ParameterRef, resolver: &System) -> Result<u32, MdbError> {
    let path = match parameter.target() {
        Target::Resolved(path) => path,
        Target::ByPath(path) => {
            return Err(MdbError::Export(format!("Cannot determine size of {}", path)));
        }
    };
    let parameter = resolver
        .resolve_parameter(path)
        .ok_or_else(|| MdbError::UnresolvedReference { path: path.clone() })?;

    let unknown = || MdbError::Export(format!("Cannot determine size of {}", path));
    match &parameter.data_type {
        DataType::Aggregate(_) => Err(MdbError::Unsupported("fit_entries with aggregate parameters")),
        DataType::Array(array) => {
            let element_bits = array
                .element
                .encoding()
                .and_then(|e| e.bits())
                .ok_or_else(unknown)?;
            match &array.length {
                ArrayLength::Fixed(length) => length.checked_mul(element_bits).ok_or_else(unknown),
                ArrayLength::Dynamic(_) => {
                    Err(MdbError::Unsupported("fit_entries with dynamically sized arrays"))
                }
            }
        }
        data_type => data_type.encoding().and_then(|e| e.bits()).ok_or_else(unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{AggregateType, ArrayType, IntegerType, Member};
    use crate::encodings::{UINT8_T, UINT16_T};
    use crate::parameters::Parameter;

    fn uint8(name: &str) -> Parameter {
        Parameter::new(name, IntegerType::unsigned().with_encoding(UINT8_T))
    }

    #[test]
    fn test_consecutive_entries() {
        let mut sys = System::new("Sat");
        let a = sys.add_parameter(uint8("a")).unwrap();
        let b = sys.add_parameter(uint8("b")).unwrap();
        let c = sys.add_parameter(uint8("c")).unwrap();

        let mut container = Container::new("pkt").with_entries([a, b, c]);
        assert_eq!(container.fit_entries(&sys).unwrap(), 24);
        assert_eq!(container.bits, Some(24));
    }

    #[test]
    fn test_offset_overflow() {
        let mut sys = System::new("Sat");
        let a = sys.add_parameter(uint8("a")).unwrap();
        let b = sys.add_parameter(uint8("b")).unwrap();
        let mut container = Container::new("pkt")
            .with_entry(ParameterEntry::after(a, i64::MAX - 4))
            .with_entry(b);
        assert!(matches!(container.fit_entries(&sys), Err(MdbError::Export(_))));
        assert_eq!(container.bits, None);
    }

    #[test]
    fn test_absolute_entry() {
        let mut sys = System::new("Sat");
        let a = sys.add_parameter(uint8("a")).unwrap();
        let mut container = Container::new("pkt").with_entry(ParameterEntry::at(a, 16));
        assert_eq!(container.fit_entries(&sys).unwrap(), 24);
    }

    #[test]
    fn test_maximum_end_wins() {
        let mut sys = System::new("Sat");
        let a = sys.add_parameter(uint8("a")).unwrap();
        let b = sys
            .add_parameter(Parameter::new("b", IntegerType::new().with_encoding(UINT16_T)))
            .unwrap();
        // b overlaps the start of the container and ends before a.
        let mut container = Container::new("pkt")
            .with_entry(ParameterEntry::at(a, 24))
            .with_entry(ParameterEntry::at(b, 0));
        assert_eq!(container.fit_entries(&sys).unwrap(), 32);
    }

    #[test]
    fn test_fixed_array() {
        let mut sys = System::new("Sat");
        let arr = sys
            .add_parameter(Parameter::new(
                "arr",
                ArrayType::fixed(IntegerType::new().with_encoding(UINT16_T), 4),
            ))
            .unwrap();
        let mut container = Container::new("pkt").with_entry(arr);
        assert_eq!(container.fit_entries(&sys).unwrap(), 64);
    }

    #[test]
    fn test_unsupported_cases() {
        let mut sys = System::new("Sat");
        let len = sys.add_parameter(uint8("len")).unwrap();
        let agg = sys
            .add_parameter(Parameter::new(
                "agg",
                AggregateType::new(vec![Member::new("x", IntegerType::new().with_encoding(UINT8_T))]),
            ))
            .unwrap();
        let dynamic = sys
            .add_parameter(Parameter::new(
                "dyn",
                ArrayType::new(
                    IntegerType::new().with_encoding(UINT8_T),
                    ArrayLength::Dynamic(len.clone()),
                ),
            ))
            .unwrap();

        let mut based = Container::new("child").extends("/Sat/base", None);
        assert!(matches!(based.fit_entries(&sys), Err(MdbError::Unsupported(_))));

        let mut with_agg = Container::new("c1").with_entry(agg);
        assert!(matches!(with_agg.fit_entries(&sys), Err(MdbError::Unsupported(_))));

        let mut with_dyn = Container::new("c2").with_entry(dynamic);
        assert!(matches!(with_dyn.fit_entries(&sys), Err(MdbError::Unsupported(_))));

        let mut nested = Container::new("c3").with_entry(ContainerEntry::new("/Sat/other"));
        assert!(matches!(nested.fit_entries(&sys), Err(MdbError::Unsupported(_))));
    }

    #[test]
    fn test_unknown_width() {
        let mut sys = System::new("Sat");
        let p = sys.add_parameter(Parameter::new("p", IntegerType::new())).unwrap();
        let mut container = Container::new("pkt").with_entry(p);
        assert!(matches!(container.fit_entries(&sys), Err(MdbError::Export(_))));
        assert_eq!(container.bits, None);

        let mut external = Container::new("ext").with_entry(ParameterRef::by_path("/yamcs/x"));
        assert!(matches!(external.fit_entries(&sys), Err(MdbError::Export(_))));
    }
}
