// crates/xtce-rs-headers/tests/headers.rs

//! Checks the XTCE written for systems built on the prefabricated headers.

use xtce_rs::commands::{ArgumentEntry, Command};
use xtce_rs::containers::ParameterEntry;
use xtce_rs::datatypes::{Choice, IntegerType};
use xtce_rs::encodings::UINT16_T;
use xtce_rs::expressions::eq;
use xtce_rs::{Argument, Container, DumpOptions, Parameter, System};
use xtce_rs_headers::{add_ccsds_header, add_csp_header};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dump(system: &System) -> String {
    system
        .dumps(&DumpOptions::default())
        .expect("Failed to generate XTCE")
}

/// The telemetry side decodes the two header words into aggregates.
#[test]
fn test_ccsds_telemetry_layout() {
    init_logger();
    let mut sc = System::new("Spacecraft");
    add_ccsds_header(&mut sc).unwrap();

    let xml = dump(&sc);
    assert!(xml.contains("<AggregateParameterType name=\"ccsds_packet_id\""));
    assert!(xml.contains("<Member name=\"apid\" typeRef=\"ccsds_packet_id__apid\"/>"));
    assert!(xml.contains("<IntegerParameterType name=\"ccsds_packet_id__apid\" signed=\"false\" sizeInBits=\"11\""));
    assert!(xml.contains("zeroStringValue=\"Not Present\""));
    assert!(xml.contains("<Enumeration value=\"3\" label=\"Standalone\"/>"));
    assert!(xml.contains("<SequenceContainer name=\"ccsds_space_packet\" abstract=\"true\""));
    assert!(xml.contains("<ParameterRefEntry parameterRef=\"ccsds_packet_length\">"));
    assert!(xml.contains("<SizeInBits>"));
}

/// Mission packets extend the abstract header and restrict on the APID.
#[test]
fn test_ccsds_derived_packets() {
    init_logger();
    let mut sc = System::new("Spacecraft");
    let header = add_ccsds_header(&mut sc).unwrap();

    let counter = sc
        .add_parameter(Parameter::new(
            "counter",
            IntegerType::unsigned().with_encoding(UINT16_T),
        ))
        .unwrap();
    sc.add_container(
        Container::new("hk")
            .extends(&header.tm_container, Some(eq(header.tm_apid.clone(), 100)))
            .with_entry(ParameterEntry::new(counter)),
    )
    .unwrap();

    let base = sc
        .add_command(
            Command::new("MyProjectPacket")
                .as_abstract()
                .extends(&header.tc_command)
                .with_assignment(header.tc_secondary_header.as_str(), false)
                .with_assignment(header.tc_apid.as_str(), 101)
                .with_argument(Argument::new(
                    "command_id",
                    IntegerType::unsigned().with_encoding(UINT16_T),
                ))
                .with_entries([ArgumentEntry::new("command_id")]),
        )
        .unwrap();
    sc.add_command(
        Command::new("Reboot")
            .extends(&base)
            .with_assignment("command_id", 1),
    )
    .unwrap();

    let xml = dump(&sc);
    assert!(xml.contains("<BaseContainer containerRef=\"ccsds_space_packet\">"));
    assert!(xml.contains("parameterRef=\"ccsds_packet_id/apid\""));
    assert!(xml.contains("<ArgumentAssignment argumentName=\"ccsds_secondary_header\" argumentValue=\"Not Present\"/>"));
    assert!(xml.contains("<ArgumentAssignment argumentName=\"ccsds_apid\" argumentValue=\"101\"/>"));
    assert!(xml.contains("<ArgumentAssignment argumentName=\"command_id\" argumentValue=\"1\"/>"));
    assert!(xml.contains("<FixedValueEntry name=\"ccsds_group_flags\" binaryValue=\"03\" sizeInBits=\"2\">"));
}

/// Node ids label the source and destination fields; flags default to off.
#[test]
fn test_csp_in_subsystem() {
    init_logger();
    let mut sc = System::new("Spacecraft");
    let link = sc.add_subsystem(System::new("Link")).unwrap();
    let ids = [Choice::new(0, "EPS"), Choice::new(2, "COM")];
    let header = add_csp_header(link, Some(&ids[..]), "csp_").unwrap();
    assert_eq!(header.tm_dst.path(), "/Spacecraft/Link/csp_dst");

    let xml = dump(&sc);
    assert!(xml.contains("<SpaceSystem name=\"Link\">"));
    assert!(xml.contains("<Enumeration value=\"2\" label=\"COM\"/>"));
    assert!(xml.contains("<SequenceContainer name=\"csp_message\" abstract=\"true\""));
    assert!(xml.contains("<MetaCommand name=\"csp_message\" abstract=\"true\""));
    assert!(xml.contains("name=\"csp_message__csp_pri\" initialValue=\"NORMAL\""));
    assert!(xml.contains("name=\"csp_message__csp_hmac\" initialValue=\"False\""));
    assert!(xml.contains("<FixedValueEntry name=\"csp_sport\" shortDescription=\"Ephemeral port for outgoing connection\" binaryValue=\"30\" sizeInBits=\"6\">"));
}
