// crates/xtce-rs-headers/src/csp.rs

//! The CubeSat Space Protocol 1.x header.
//!
//! A 32-bit header: priority, source, destination, destination port, source
//! port, four reserved bits and the HMAC/XTEA/RDP/CRC flags. Every generated
//! name carries a configurable prefix so that several CSP headers can live in
//! one system.

use log::debug;
use xtce_rs::commands::{ArgumentEntry, CommandEntry, FixedValueEntry};
use xtce_rs::containers::ParameterEntry;
use xtce_rs::datatypes::{BooleanType, Choice, EnumeratedType, IntegerType};
use xtce_rs::encodings::{UINT1_T, UINT2_T, UINT5_T, UINT6_T};
use xtce_rs::{
    Argument, Command, CommandRef, Container, ContainerRef, MdbError, Parameter, ParameterRef,
    System, Value,
};

const HEADER_DESCRIPTION: &str = "CSP Header 1.x\n\n\
The port range is divided into three adjustable segments. \
Ports 0 to 7 are used for general services such as ping and \
buffer status, and are implemented by the CSP service handler. \
The ports from 8 to 47 are used for subsystem specific services. \
All remaining ports, from 48 to 63, are ephemeral ports used for \
outgoing connections. The bits from 28 to 31 are used for marking \
packets with HMAC, XTEA encryption, RDP header and CRC32 checksum.";

/// Source port written into every command.
const EPHEMERAL_PORT: u8 = 48;

/// Handles to the entities registered by [`add_csp_header`].
#[derive(Debug, Clone, PartialEq)]
pub struct CspHeader {
    pub tm_container: ContainerRef,
    pub tm_pri: ParameterRef,
    pub tm_src: ParameterRef,
    pub tm_dst: ParameterRef,
    pub tm_dport: ParameterRef,
    pub tm_sport: ParameterRef,
    pub tm_hmac: ParameterRef,
    pub tm_xtea: ParameterRef,
    pub tm_rdp: ParameterRef,
    pub tm_crc: ParameterRef,
    pub tc_command: CommandRef,
    pub tc_pri: String,
    pub tc_src: String,
    pub tc_dst: String,
    pub tc_dport: String,
    pub tc_hmac: String,
    pub tc_xtea: String,
    pub tc_rdp: String,
    pub tc_crc: String,
}

fn priority_type() -> EnumeratedType {
    EnumeratedType::new([(0, "CRITICAL"), (1, "HIGH"), (2, "NORMAL"), (3, "LOW")])
        .with_short_description("Message priority")
        .with_encoding(UINT2_T)
}

fn node_type(ids: &[Choice], description: &str) -> EnumeratedType {
    EnumeratedType::new(ids.to_vec())
        .with_short_description(description)
        .with_encoding(UINT5_T)
}

fn port_type(description: &str) -> IntegerType {
    IntegerType::unsigned()
        .with_short_description(description)
        .with_encoding(UINT6_T)
}

fn flag_type(description: &str) -> BooleanType {
    BooleanType::new()
        .with_short_description(description)
        .with_encoding(UINT1_T)
}

const FLAGS: [(&str, &str); 4] = [
    ("hmac", "Use HMAC verification"),
    ("xtea", "Use XTEA encryption"),
    ("rdp", "Use RDP protocol"),
    ("crc", "Use CRC32 checksum"),
];

/// Registers a CSP header in `system`.
///
/// `ids` lists the node addresses used for the source and destination
/// fields; without it those enumerations have no labels. All generated
/// names start with `prefix` (conventionally `"csp_"`).
///
/// # Errors
///
/// Fails with [`MdbError::NameConflict`] if any generated name is already
/// taken. The system is left unchanged in that case.
pub fn add_csp_header(
    system: &mut System,
    ids: Option<&[Choice]>,
    prefix: &str,
) -> Result<CspHeader, MdbError> {
    let ids = ids.unwrap_or(&[]);
    let name = |field: &str| format!("{}{}", prefix, field);

    let fields = ["pri", "src", "dst", "dport", "sport"]
        .into_iter()
        .chain(FLAGS.map(|(field, _)| field))
        .map(name)
        .collect::<Vec<_>>();
    let fields = fields.iter().map(String::as_str).collect::<Vec<_>>();
    crate::ensure_free(system, &fields, &name("message"), &name("message"))?;

    let tm_pri = system.add_parameter(Parameter::new(name("pri"), priority_type()))?;
    let tm_src = system.add_parameter(Parameter::new(name("src"), node_type(ids, "Source")))?;
    let tm_dst =
        system.add_parameter(Parameter::new(name("dst"), node_type(ids, "Destination")))?;
    let tm_dport =
        system.add_parameter(Parameter::new(name("dport"), port_type("Destination port")))?;
    let tm_sport = system.add_parameter(Parameter::new(name("sport"), port_type("Source port")))?;

    let [tm_hmac, tm_xtea, tm_rdp, tm_crc] = FLAGS.map(|(field, description)| {
        system.add_parameter(Parameter::new(name(field), flag_type(description)))
    });
    let (tm_hmac, tm_xtea, tm_rdp, tm_crc) = (tm_hmac?, tm_xtea?, tm_rdp?, tm_crc?);

    let tm_container = system.add_container(
        Container::new(name("message"))
            .as_abstract()
            .with_short_description("CubeSat Space Protocol (CSP) header 1.x")
            .with_long_description(HEADER_DESCRIPTION)
            .with_bits(32)
            .with_entries([
                ParameterEntry::new(&tm_pri),
                ParameterEntry::new(&tm_src),
                ParameterEntry::new(&tm_dst),
                ParameterEntry::new(&tm_dport),
                ParameterEntry::new(&tm_sport),
                // Skip the reserved bits
                ParameterEntry::after(&tm_hmac, 4),
                ParameterEntry::new(&tm_xtea),
                ParameterEntry::new(&tm_rdp),
                ParameterEntry::new(&tm_crc),
            ]),
    )?;

    let mut arguments = vec![
        Argument::new(name("pri"), priority_type()).with_default(Value::symbol("NORMAL")),
        Argument::new(name("src"), node_type(ids, "Source")),
        Argument::new(name("dst"), node_type(ids, "Destination")),
        Argument::new(name("dport"), port_type("Destination port")),
    ];
    arguments.extend(
        FLAGS.map(|(field, description)| {
            Argument::new(name(field), flag_type(description)).with_default(false)
        }),
    );

    let mut entries: Vec<CommandEntry> = ["pri", "src", "dst", "dport"]
        .into_iter()
        .map(|field| ArgumentEntry::new(name(field)).into())
        .collect();
    entries.push(
        FixedValueEntry::named(name("sport"), vec![EPHEMERAL_PORT], 6)
            .with_short_description("Ephemeral port for outgoing connection")
            .into(),
    );
    entries.push(FixedValueEntry::named(name("reserved"), vec![0x00], 4).into());
    entries.extend(
        FLAGS.map(|(field, _)| CommandEntry::from(ArgumentEntry::new(name(field)))),
    );

    let tc_command = system.add_command(
        Command::new(name("message"))
            .as_abstract()
            .with_short_description("CubeSat Space Protocol (CSP) header 1.x")
            .with_long_description(HEADER_DESCRIPTION)
            .with_arguments(arguments)
            .with_entries(entries),
    )?;

    debug!("Added CSP header with prefix {:?} to {}", prefix, system.qualified_name());

    Ok(CspHeader {
        tm_container,
        tm_pri,
        tm_src,
        tm_dst,
        tm_dport,
        tm_sport,
        tm_hmac,
        tm_xtea,
        tm_rdp,
        tm_crc,
        tc_command,
        tc_pri: name("pri"),
        tc_src: name("src"),
        tc_dst: name("dst"),
        tc_dport: name("dport"),
        tc_hmac: name("hmac"),
        tc_xtea: name("xtea"),
        tc_rdp: name("rdp"),
        tc_crc: name("crc"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtce_rs::containers::SequenceEntry;

    #[test]
    fn test_prefix_applies_to_all_names() {
        let mut sc = System::new("Spacecraft");
        let header = add_csp_header(&mut sc, None, "link_").unwrap();

        assert_eq!(header.tm_pri.path(), "/Spacecraft/link_pri");
        assert_eq!(header.tm_container.path(), "/Spacecraft/link_message");
        assert_eq!(header.tc_crc, "link_crc");
        assert!(sc.find_command("link_message").unwrap().is_abstract);
        assert!(sc.find_parameter("csp_pri").is_err());
    }

    #[test]
    fn test_flags_follow_reserved_bits() {
        let mut sc = System::new("Spacecraft");
        add_csp_header(&mut sc, None, "csp_").unwrap();
        let container = sc.find_container("csp_message").unwrap();

        let gap = container.entries.iter().find_map(|e| match e {
            SequenceEntry::Parameter(p) if p.parameter.name() == "csp_hmac" => {
                Some((p.absolute, p.location_in_bits))
            }
            _ => None,
        });
        assert_eq!(gap, Some((false, 4)));
        assert_eq!(container.bits, Some(32));
    }

    #[test]
    fn test_ids_label_source_and_destination() {
        let ids = [Choice::new(0, "EPS"), Choice::new(2, "COM")];
        let mut sc = System::new("Spacecraft");
        add_csp_header(&mut sc, Some(&ids[..]), "csp_").unwrap();

        let dst = sc.find_parameter("csp_dst").unwrap();
        assert_eq!(dst.data_type.format_value(&Value::Integer(2)).unwrap(), "COM");

        let command = sc.find_command("csp_message").unwrap();
        let pri = command.get_argument("csp_pri").unwrap();
        assert_eq!(pri.default, Some(Value::symbol("NORMAL")));
        assert_eq!(command.entries().len(), 10);
    }

    #[test]
    fn test_conflict_leaves_system_unchanged() {
        let mut sc = System::new("Spacecraft");
        sc.add_parameter(Parameter::new("csp_crc", flag_type("taken"))).unwrap();
        assert!(matches!(
            add_csp_header(&mut sc, None, "csp_"),
            Err(MdbError::NameConflict { kind: "parameter", .. })
        ));
        assert_eq!(sc.parameters().count(), 1);
        assert!(sc.find_container("csp_message").is_err());
        assert!(sc.find_command("csp_message").is_err());
    }
}
