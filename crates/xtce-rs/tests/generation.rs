// crates/xtce-rs/tests/generation.rs

//! End-to-end checks of the generated XTCE documents.

use xtce_rs::algorithms::UnnamedAlgorithm;
use xtce_rs::commands::{Argument, Command, FixedValueEntry};
use xtce_rs::containers::{Container, ParameterEntry};
use xtce_rs::datatypes::{
    AbsoluteTimeType, ArrayLength, ArrayType, BinaryType, BooleanType, Epoch, EnumeratedType,
    FloatType, IntegerType, StringType,
};
use xtce_rs::encodings::{
    BinaryEncoding, FLOAT32_T, IntegerTimeEncoding, StringEncoding, UINT8_T, UINT16_T,
    UINT32_T,
};
use xtce_rs::expressions::eq;
use xtce_rs::verifiers::{Check, Verifier};
use xtce_rs::{DumpOptions, MdbError, Parameter, System, TopComment};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dump(system: &System) -> String {
    system
        .dumps(&DumpOptions::default())
        .expect("Failed to generate XTCE")
}

/// The smallest useful document: one parameter with its type.
#[test]
fn test_minimal_counter() {
    init_logger();
    let mut sat = System::new("Sat");
    sat.add_parameter(Parameter::new(
        "counter",
        IntegerType::unsigned().with_encoding(UINT16_T),
    ))
    .unwrap();

    let xml = dump(&sat);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<SpaceSystem xmlns=\"http://www.omg.org/spec/XTCE/20180204\""));
    assert!(xml.contains("name=\"Sat\""));
    assert!(xml.contains("<ParameterTypeSet>"));
    assert!(xml.contains("<IntegerParameterType name=\"counter\" signed=\"false\" sizeInBits=\"16\""));
    assert!(xml.contains("<IntegerDataEncoding sizeInBits=\"16\" encoding=\"unsigned\""));
    assert!(xml.contains("<Parameter name=\"counter\" parameterTypeRef=\"counter\""));
    assert!(xml.contains("dataSource=\"telemetered\""));
}

/// A derived command fixes an argument of its abstract base.
#[test]
fn test_command_inheritance_assignment() {
    init_logger();
    let mut sat = System::new("Sat");
    let base = sat
        .add_command(
            Command::new("base")
                .as_abstract()
                .with_argument(Argument::new("id", IntegerType::unsigned().with_encoding(UINT16_T))),
        )
        .unwrap();
    sat.add_command(Command::new("reboot").extends(base).with_assignment("id", 7))
        .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("<MetaCommand name=\"base\" abstract=\"true\""));
    assert!(xml.contains("<BaseMetaCommand metaCommandRef=\"base\">"));
    assert!(xml.contains("<ArgumentAssignment argumentName=\"id\" argumentValue=\"7\"/>"));
    assert!(xml.contains("<IntegerArgumentType name=\"base__id\""));
    assert!(xml.contains("<ArgumentRefEntry argumentRef=\"id\">"));
}

/// Assignments to boolean and enumerated arguments use the labels.
#[test]
fn test_assignment_labels() {
    let mut sat = System::new("Sat");
    let base = sat
        .add_command(
            Command::new("base")
                .as_abstract()
                .with_argument(Argument::new(
                    "flag",
                    BooleanType::labeled("Absent", "Present").with_encoding(UINT8_T),
                ))
                .with_argument(Argument::new(
                    "level",
                    EnumeratedType::new([(1, "HIGH"), (2, "LOW")]).with_encoding(UINT8_T),
                )),
        )
        .unwrap();
    sat.add_command(
        Command::new("set")
            .extends(base)
            .with_assignment("flag", true)
            .with_assignment("level", 2),
    )
    .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("argumentName=\"flag\" argumentValue=\"Present\""));
    assert!(xml.contains("argumentName=\"level\" argumentValue=\"LOW\""));
}

/// Generating twice yields the same text.
#[test]
fn test_dumps_is_idempotent() {
    let mut sat = System::new("Sat");
    let a = sat
        .add_parameter(Parameter::new("a", IntegerType::new().with_encoding(UINT8_T)))
        .unwrap();
    sat.add_container(Container::new("pkt").with_entries([a]))
        .unwrap();
    assert_eq!(dump(&sat), dump(&sat));
}

/// `dump` writes exactly what `dumps` returns.
#[test]
fn test_dump_to_writer() {
    let sat = System::new("Sat");
    let mut out: Vec<u8> = Vec::new();
    sat.dump(&mut out, &DumpOptions::default()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), dump(&sat));
}

/// Empty systems have empty meta data sections and no empty sets.
#[test]
fn test_no_empty_sets() {
    let mut sat = System::new("Sat");
    sat.add_command(Command::new("noop")).unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("TelemetryMetaData"));
    assert!(!xml.contains("ParameterTypeSet"));
    assert!(!xml.contains("ParameterSet"));
    assert!(!xml.contains("ContainerSet"));
    assert!(!xml.contains("AlgorithmSet"));
    assert!(!xml.contains("ArgumentTypeSet"));
    assert!(!xml.contains("ArgumentList"));
    assert!(!xml.contains("VerifierSet"));
    assert!(xml.contains("<MetaCommand name=\"noop\""));
}

#[test]
fn test_compact_output_without_comment() {
    let sat = System::new("Sat");
    let options = DumpOptions::compact()
        .with_top_comment(TopComment::None)
        .with_schema_location(false);
    let xml = sat.dumps(&options).unwrap();
    assert_eq!(xml.lines().count(), 2);
    assert!(!xml.contains("<!--"));
    assert!(!xml.contains("schemaLocation"));
}

#[test]
fn test_default_comment_and_schema_location() {
    let xml = dump(&System::new("Sat"));
    assert!(xml.contains("<!--"));
    assert!(xml.contains("xsi:schemaLocation="));
}

/// References are written relative to the system holding the element.
#[test]
fn test_references_across_subsystems() {
    init_logger();
    let mut sat = System::new("Sat");
    let power = sat.add_subsystem(System::new("Power")).unwrap();
    let voltage = power
        .add_parameter(Parameter::new("voltage", IntegerType::new().with_encoding(UINT16_T)))
        .unwrap();
    sat.add_container(Container::new("hk").with_entry(ParameterEntry::at(voltage, 32)))
        .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("<ParameterRefEntry parameterRef=\"Power/voltage\">"));
    assert!(xml.contains("referenceLocation=\"containerStart\""));
    assert!(xml.contains("<SpaceSystem name=\"Power\">"));
}

/// A subsystem may be written on its own; references leaving it are kept.
#[test]
fn test_subsystem_as_document_root() {
    init_logger();
    let mut sat = System::new("Sat");
    let mode = sat
        .add_parameter(Parameter::new("mode", IntegerType::new().with_encoding(UINT8_T)))
        .unwrap();
    let power = sat.add_subsystem(System::new("Power")).unwrap();
    power
        .add_container(Container::new("pkt").with_entry(ParameterEntry::new(mode)))
        .unwrap();

    let power = sat.find_subsystem("Power").unwrap();
    let xml = dump(power);
    assert!(xml.contains("name=\"Power\""));
    assert!(xml.contains("parameterRef=\"/Sat/mode\""));
}

#[test]
fn test_variable_sizes_use_placeholder() {
    let mut sat = System::new("Sat");
    sat.add_parameter(Parameter::new(
        "blob",
        BinaryType::new().with_encoding(BinaryEncoding::leading_size(16)),
    ))
    .unwrap();
    sat.add_parameter(Parameter::new(
        "text",
        StringType::new().with_encoding(StringEncoding::default()),
    ))
    .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("parameterRef=\"_yamcs_ignore\""));
    assert!(xml.contains("org.yamcs.algo.LeadingSizeBinaryDecoder(16)"));
    assert!(xml.contains("org.yamcs.algo.LeadingSizeBinaryEncoder(16)"));
}

#[test]
fn test_time_and_float_types() {
    let mut sat = System::new("Sat");
    sat.add_parameter(Parameter::new(
        "obt",
        AbsoluteTimeType::epoch(Epoch::Unix).with_encoding(IntegerTimeEncoding::new(32)),
    ))
    .unwrap();
    sat.add_parameter(Parameter::new(
        "temp",
        FloatType::new()
            .with_encoding(FLOAT32_T)
            .with_units("degC")
            .with_range(Some(-40.0), Some(85.0)),
    ))
    .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("<Epoch>UNIX</Epoch>"));
    assert!(xml.contains("units=\"seconds\""));
    assert!(xml.contains("<Unit form=\"calibrated\">degC</Unit>"));
    assert!(xml.contains("validRangeAppliesToCalibrated=\"true\" minInclusive=\"-40.0\" maxInclusive=\"85.0\""));
    assert!(xml.contains("byteOrder=\"mostSignificantByteFirst\""));
}

#[test]
fn test_dynamic_array_ending_index() {
    let mut sat = System::new("Sat");
    let count = sat
        .add_parameter(Parameter::new("count", IntegerType::unsigned().with_encoding(UINT8_T)))
        .unwrap();
    sat.add_parameter(Parameter::new(
        "samples",
        ArrayType::new(IntegerType::new().with_encoding(UINT16_T), ArrayLength::Dynamic(count)),
    ))
    .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("<ArrayParameterType name=\"samples\" arrayTypeRef=\"samples__el\">"));
    assert!(xml.contains("<IntegerParameterType name=\"samples__el\""));
    assert!(xml.contains("<LinearAdjustment intercept=\"-1\"/>"));
}

#[test]
fn test_command_verifiers_and_fixed_values() {
    let mut sat = System::new("Sat");
    let status = sat
        .add_parameter(Parameter::new(
            "status",
            EnumeratedType::new([(0, "IDLE"), (1, "DONE")]).with_encoding(UINT8_T),
        ))
        .unwrap();
    sat.add_command(
        Command::new("run")
            .with_entries([FixedValueEntry::new(vec![0x1a, 0xcf])])
            .with_verifier(Verifier::complete(Check::Expression(eq(&status, 1)), 90.0)),
    )
    .unwrap();

    let xml = dump(&sat);
    assert!(xml.contains("binaryValue=\"1acf\" sizeInBits=\"16\""));
    assert!(xml.contains("<CompleteVerifier>"));
    assert!(xml.contains("<ComparisonOperator>==</ComparisonOperator>"));
    assert!(xml.contains("<Value>DONE</Value>"));
    assert!(xml.contains("timeToStopChecking=\"PT1M30S\""));
}

#[test]
fn test_calibrator_requires_encoding() {
    let mut sat = System::new("Sat");
    sat.add_parameter(Parameter::new(
        "raw",
        IntegerType::new().with_calibrator(xtce_rs::calibrators::Polynomial::new(vec![0.0, 2.0])),
    ))
    .unwrap();
    let err = sat.dumps(&DumpOptions::default()).unwrap_err();
    assert!(matches!(err, MdbError::Export(_)));
    assert!(err.to_string().contains("calibrator"));
}

#[test]
fn test_leading_size_binary_rejects_decoder() {
    let mut sat = System::new("Sat");
    let encoding = BinaryEncoding {
        decoder: Some(UnnamedAlgorithm::java("org.example.Decoder")),
        ..BinaryEncoding::leading_size(8)
    };
    sat.add_parameter(Parameter::new("blob", BinaryType::new().with_encoding(encoding)))
        .unwrap();
    assert!(matches!(
        sat.dumps(&DumpOptions::default()),
        Err(MdbError::Export(_))
    ));
}

#[test]
fn test_removed_target_is_unresolved() {
    let mut sat = System::new("Sat");
    let a = sat
        .add_parameter(Parameter::new("a", IntegerType::new().with_encoding(UINT32_T)))
        .unwrap();
    sat.add_container(Container::new("pkt").with_entries([a]))
        .unwrap();
    sat.remove_parameter("a");

    match sat.dumps(&DumpOptions::default()) {
        Err(MdbError::UnresolvedReference { path }) => assert_eq!(path, "/Sat/a"),
        other => panic!("expected an unresolved reference, got {:?}", other.map(|_| ())),
    }
}
