// crates/xtce-rs-lint/tests/lint.rs

//! Runs the lint checks over a small multi-level system tree.

use xtce_rs::datatypes::{FloatType, IntegerType};
use xtce_rs::encodings::{FLOAT64_T, UINT32_T, UINT32LE_T};
use xtce_rs::expressions::eq;
use xtce_rs::verifiers::{Check, Verifier};
use xtce_rs::{Argument, Command, Parameter, System};
use xtce_rs_lint::{check_complete_verifiers, check_float_encoding, check_little_endian_only};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn spacecraft() -> System {
    let mut sc = System::new("Spacecraft");
    sc.add_parameter(Parameter::new(
        "uptime",
        IntegerType::unsigned().with_encoding(UINT32LE_T),
    ))
    .unwrap();
    let status = sc
        .add_parameter(Parameter::new(
            "status",
            IntegerType::unsigned().with_encoding(UINT32LE_T),
        ))
        .unwrap();
    sc.add_command(
        Command::new("reboot")
            .with_verifier(Verifier::complete(Check::Expression(eq(&status, 0)), 30.0)),
    )
    .unwrap();
    sc
}

/// A clean tree passes every check.
#[test]
fn test_clean_tree() {
    init_logger();
    let sc = spacecraft();
    assert!(check_complete_verifiers(&sc));
    assert!(check_float_encoding(&sc));
    assert!(check_little_endian_only(&sc));
}

/// Findings in a nested subsystem fail the checks of the root.
#[test]
fn test_findings_in_subsystems() {
    init_logger();
    let mut sc = spacecraft();
    let payload = sc.add_subsystem(System::new("Payload")).unwrap();
    let camera = payload.add_subsystem(System::new("Camera")).unwrap();
    camera
        .add_command(Command::new("set_exposure").with_argument(Argument::new(
            "exposure",
            FloatType {
                bits: Some(32),
                ..FloatType::new().with_encoding(FLOAT64_T)
            },
        )))
        .unwrap();
    camera
        .add_parameter(Parameter::new(
            "frame_count",
            IntegerType::unsigned().with_encoding(UINT32_T),
        ))
        .unwrap();

    assert!(!check_complete_verifiers(&sc));
    assert!(!check_float_encoding(&sc));
    assert!(!check_little_endian_only(&sc));

    let camera = sc
        .find_subsystem("Payload")
        .and_then(|payload| payload.find_subsystem("Camera"))
        .unwrap();
    assert!(!check_complete_verifiers(camera));
}
