// crates/xtce-rs-headers/examples/spacecraft.rs
//! Builds a small spacecraft database on top of the CCSDS header and writes
//! it as XTCE.
//!
//! To run this example:
//!    cargo run -p xtce-rs-headers --example spacecraft -- spacecraft.xml
//!
//! Without an argument the document is printed to stdout. A second system,
//! `Link`, carries a CSP header whose node addresses come from a Rust enum.

use log::{error, info};
use std::{env, fs::File, io, process};
use xtce_rs::commands::ArgumentEntry;
use xtce_rs::datatypes::{ChoiceSource, IntegerType};
use xtce_rs::encodings::UINT16_T;
use xtce_rs::expressions::eq;
use xtce_rs::verifiers::{Check, Verifier};
use xtce_rs::wellknown::{referenced, yamcs_parameter};
use xtce_rs::{Argument, Command, DumpOptions, MdbError, System};
use xtce_rs_headers::{add_ccsds_header, add_csp_header};

#[derive(Clone, Copy)]
enum Node {
    Eps = 0,
    Com = 2,
    Adcs = 3,
}

impl ChoiceSource for Node {
    fn variants() -> Vec<Self> {
        vec![Node::Eps, Node::Com, Node::Adcs]
    }

    fn value(&self) -> i64 {
        *self as i64
    }

    fn label(&self) -> &'static str {
        match self {
            Node::Eps => "EPS",
            Node::Com => "COM",
            Node::Adcs => "ADCS",
        }
    }
}

fn battery_argument() -> Argument {
    Argument::new(
        "battery",
        IntegerType::unsigned()
            .with_range(Some(1), Some(3))
            .with_short_description("Number of the battery")
            .with_encoding(UINT16_T),
    )
}

fn build() -> Result<System, MdbError> {
    let mut spacecraft = System::new("Spacecraft");
    let ccsds = add_ccsds_header(&mut spacecraft)?;

    let project_packet = spacecraft.add_command(
        Command::new("MyProjectPacket")
            .as_abstract()
            .extends(&ccsds.tc_command)
            .with_assignment(ccsds.tc_secondary_header.as_str(), false)
            .with_assignment(ccsds.tc_apid.as_str(), 101)
            .with_argument(Argument::new(
                "command_id",
                IntegerType::unsigned().with_encoding(UINT16_T),
            ))
            .with_entries([ArgumentEntry::new("command_id")]),
    )?;

    spacecraft.add_command(
        Command::new("Reboot")
            .extends(&project_packet)
            .with_assignment("command_id", 1)
            .with_verifier(Verifier::accepted(
                Check::Expression(eq(yamcs_parameter("cmdHist/Acknowledge_Sent"), "OK")),
                10.0,
            )),
    )?;
    spacecraft.add_command(
        Command::new("SwitchVoltageOn")
            .extends(&project_packet)
            .with_short_description("Switches a battery on")
            .with_assignment("command_id", 2)
            .with_argument(battery_argument()),
    )?;
    spacecraft.add_command(
        Command::new("SwitchVoltageOff")
            .extends(&project_packet)
            .with_short_description("Switches a battery off")
            .with_assignment("command_id", 3)
            .with_argument(battery_argument()),
    )?;

    let link = spacecraft.add_subsystem(System::new("Link"))?;
    add_csp_header(link, Some(Node::choices().as_slice()), "csp_")?;

    Ok(spacecraft)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let spacecraft = match build() {
        Ok(system) => system,
        Err(e) => {
            error!("Failed to build the spacecraft database: {}", e);
            process::exit(1);
        }
    };

    info!("Parameters provided by Yamcs: {}", referenced().join(", "));

    let options = DumpOptions::default();
    let result = match env::args().nth(1) {
        Some(path) => File::create(&path)
            .map_err(MdbError::from)
            .and_then(|mut file| spacecraft.dump(&mut file, &options))
            .map(|()| info!("Wrote {}", path)),
        None => spacecraft.dump(&mut io::stdout().lock(), &options),
    };
    if let Err(e) = result {
        error!("Failed to write XTCE: {}", e);
        process::exit(1);
    }
}
