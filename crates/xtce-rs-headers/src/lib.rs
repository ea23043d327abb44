// crates/xtce-rs-headers/src/lib.rs

#![doc = "Prefabricated packet headers for `xtce-rs` systems."]
#![doc = ""]
#![doc = "Each builder registers the header fields of a protocol in a system, together"]
#![doc = "with an abstract telemetry container and an abstract command that mission"]
#![doc = "packets can extend."]
#![doc = ""]
#![doc = "- [`add_ccsds_header`]: CCSDS 133.0-B-1 space packet primary header."]
#![doc = "- [`add_csp_header`]: CubeSat Space Protocol 1.x header."]

pub mod ccsds;
pub mod csp;

pub use ccsds::{CcsdsHeader, add_ccsds_header};
pub use csp::{CspHeader, add_csp_header};

use xtce_rs::{MdbError, System};

/// Fails with [`MdbError::NameConflict`] on the first name already taken in
/// `system`, before a header registers anything.
pub(crate) fn ensure_free(
    system: &System,
    parameters: &[&str],
    container: &str,
    command: &str,
) -> Result<(), MdbError> {
    let taken = |kind: &'static str, name: &str| MdbError::NameConflict {
        kind,
        system: system.qualified_name(),
        name: name.to_string(),
    };
    if let Some(name) = parameters.iter().find(|n| system.find_parameter(n).is_ok()) {
        return Err(taken("parameter", name));
    }
    if system.find_container(container).is_ok() {
        return Err(taken("container", container));
    }
    if system.find_command(command).is_ok() {
        return Err(taken("command", command));
    }
    Ok(())
}
