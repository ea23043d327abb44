// crates/xtce-rs-headers/src/ccsds.rs

//! The CCSDS space packet primary header (CCSDS 133.0-B-1).
//!
//! Telemetry decodes the first two header words into aggregates
//! (`ccsds_packet_id`, `ccsds_packet_sequence`) followed by the packet
//! length. Commands fix the version, type and sequence fields and leave the
//! secondary header flag and the APID to the extending commands.

use log::debug;
use xtce_rs::commands::{ArgumentEntry, CommandEntry, FixedValueEntry};
use xtce_rs::containers::ParameterEntry;
use xtce_rs::datatypes::{AggregateType, BooleanType, EnumeratedType, IntegerType, Member};
use xtce_rs::encodings::{UINT1_T, UINT2_T, UINT3_T, UINT11_T, UINT14_T, UINT16_T};
use xtce_rs::{
    Argument, Command, CommandRef, Container, ContainerRef, MdbError, Parameter, ParameterMember,
    System,
};

const PACKET_DESCRIPTION: &str = "Represents a Space Packet as defined in CCSDS 133.0-B-1\n\n\
The first 6 bytes of a Space Packet are known as the \"Primary Header\".";

/// Handles to the entities registered by [`add_ccsds_header`].
///
/// Command arguments are identified by name, which is how entries and
/// assignments of extending commands refer to them.
#[derive(Debug, Clone, PartialEq)]
pub struct CcsdsHeader {
    pub tm_container: ContainerRef,
    pub tm_version: ParameterMember,
    pub tm_type: ParameterMember,
    pub tm_secondary_header: ParameterMember,
    pub tm_apid: ParameterMember,
    pub tc_command: CommandRef,
    pub tc_secondary_header: String,
    pub tc_apid: String,
}

fn secondary_header_type() -> BooleanType {
    BooleanType::labeled("Not Present", "Present").with_encoding(UINT1_T)
}

fn apid_type() -> IntegerType {
    IntegerType::unsigned().with_encoding(UINT11_T)
}

/// Registers the primary header in `system`.
///
/// # Errors
///
/// Fails with [`MdbError::NameConflict`] if any of the header names is
/// already taken. The system is left unchanged in that case.
pub fn add_ccsds_header(system: &mut System) -> Result<CcsdsHeader, MdbError> {
    crate::ensure_free(
        system,
        &["ccsds_packet_id", "ccsds_packet_sequence", "ccsds_packet_length"],
        "ccsds_space_packet",
        "ccsds_space_packet",
    )?;

    let packet_type = EnumeratedType::new([(0, "TM"), (1, "TC")])
        .with_encoding(UINT1_T)
        .with_long_description(
            "Used to distinguish telemetry (or reporting) packets from \
             telecommand (or requesting) packets.\n\n\
             Note that some systems, notably the International Space System, \
             use a different convention where 0=core and 1=payload.",
        );

    let packet_id = system.add_parameter(Parameter::new(
        "ccsds_packet_id",
        AggregateType::new(vec![
            Member::new("version", IntegerType::unsigned().with_encoding(UINT3_T)),
            Member::new("type", packet_type),
            Member::new("secondary_header", secondary_header_type()),
            Member::new("apid", apid_type()),
        ])
        .with_short_description("First word of the primary CCSDS header"),
    ))?;

    let packet_sequence = system.add_parameter(Parameter::new(
        "ccsds_packet_sequence",
        AggregateType::new(vec![
            Member::new(
                "group_flags",
                EnumeratedType::new([
                    (0, "Continuation"),
                    (1, "First"),
                    (2, "Last"),
                    (3, "Standalone"),
                ])
                .with_encoding(UINT2_T),
            ),
            Member::new(
                "source_sequence_count",
                IntegerType::unsigned().with_encoding(UINT14_T),
            ),
        ])
        .with_short_description("Second word of the primary CCSDS header"),
    ))?;

    let packet_length = system.add_parameter(Parameter::new(
        "ccsds_packet_length",
        IntegerType::unsigned()
            .with_units("Octets")
            .with_encoding(UINT16_T),
    ))?;

    let tm_container = system.add_container(
        Container::new("ccsds_space_packet")
            .as_abstract()
            .with_short_description("CCSDS 133.0-B-1 Space Packet")
            .with_long_description(PACKET_DESCRIPTION)
            .with_bits(8 * 6)
            .with_entries([
                ParameterEntry::new(&packet_id),
                ParameterEntry::new(&packet_sequence),
                ParameterEntry::new(packet_length),
            ]),
    )?;

    let tc_secondary_header = "ccsds_secondary_header";
    let tc_apid = "ccsds_apid";
    let entries: Vec<CommandEntry> = vec![
        FixedValueEntry::named("ccsds_version", vec![0x00], 3).into(),
        FixedValueEntry::named("ccsds_type", vec![0x01], 1).into(),
        ArgumentEntry::new(tc_secondary_header).into(),
        ArgumentEntry::new(tc_apid).into(),
        // Always standalone
        FixedValueEntry::named("ccsds_group_flags", vec![0x03], 2).into(),
        FixedValueEntry::named("ccsds_source_sequence_count", vec![0x00, 0x00], 14)
            .with_short_description("Value set by Yamcs during link post-processing")
            .into(),
        FixedValueEntry::named("ccsds_packet_length", vec![0x00, 0x00], 16)
            .with_short_description("Value set by Yamcs during link post-processing")
            .into(),
    ];

    let tc_command = system.add_command(
        Command::new("ccsds_space_packet")
            .as_abstract()
            .with_short_description("CCSDS 133.0-B-1 Space Packet")
            .with_long_description(PACKET_DESCRIPTION)
            .with_arguments([
                Argument::new(tc_secondary_header, secondary_header_type()),
                Argument::new(tc_apid, apid_type()),
            ])
            .with_entries(entries),
    )?;

    debug!("Added CCSDS header to {}", system.qualified_name());

    let member = |name: &str| ParameterMember::new(&packet_id).member(name);
    Ok(CcsdsHeader {
        tm_container,
        tm_version: member("version"),
        tm_type: member("type"),
        tm_secondary_header: member("secondary_header"),
        tm_apid: member("apid"),
        tc_command,
        tc_secondary_header: tc_secondary_header.to_string(),
        tc_apid: tc_apid.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtce_rs::datatypes::DataType;

    #[test]
    fn test_header_entities_are_registered() {
        let mut sc = System::new("Spacecraft");
        let header = add_ccsds_header(&mut sc).unwrap();

        assert_eq!(header.tm_container.path(), "/Spacecraft/ccsds_space_packet");
        assert_eq!(header.tc_command.path(), "/Spacecraft/ccsds_space_packet");
        assert_eq!(header.tm_apid.path, vec!["apid".to_string()]);
        assert_eq!(header.tm_apid.parameter.path(), "/Spacecraft/ccsds_packet_id");

        let container = sc.find_container("ccsds_space_packet").unwrap();
        assert!(container.is_abstract);
        assert_eq!(container.bits, Some(48));
        assert_eq!(container.entries.len(), 3);

        let length = sc.find_parameter("ccsds_packet_length").unwrap();
        assert_eq!(length.info().units.as_deref(), Some("Octets"));
    }

    #[test]
    fn test_command_layout_is_48_bits() {
        let mut sc = System::new("Spacecraft");
        add_ccsds_header(&mut sc).unwrap();
        let command = sc.find_command("ccsds_space_packet").unwrap();

        let mut bits = 0;
        for entry in command.entries().iter() {
            bits += match entry {
                CommandEntry::FixedValue(e) => e.effective_bits(),
                CommandEntry::Argument(e) => {
                    match &command.get_argument(&e.argument).unwrap().data_type {
                        DataType::Boolean(_) => 1,
                        DataType::Integer(t) => t.effective_bits(),
                        other => panic!("unexpected argument type {}", other.kind()),
                    }
                }
                CommandEntry::Parameter(_) => panic!("unexpected parameter entry"),
            };
        }
        assert_eq!(bits, 48);
    }

    #[test]
    fn test_adding_twice_conflicts() {
        let mut sc = System::new("Spacecraft");
        add_ccsds_header(&mut sc).unwrap();
        assert!(matches!(
            add_ccsds_header(&mut sc),
            Err(MdbError::NameConflict { .. })
        ));
    }

    #[test]
    fn test_conflict_leaves_system_unchanged() {
        let mut sc = System::new("Spacecraft");
        sc.add_command(Command::new("ccsds_space_packet")).unwrap();
        match add_ccsds_header(&mut sc) {
            Err(MdbError::NameConflict { kind, name, .. }) => {
                assert_eq!(kind, "command");
                assert_eq!(name, "ccsds_space_packet");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(sc.parameters().count(), 0);
        assert_eq!(sc.containers().count(), 0);
    }
}
