// crates/xtce-rs-lint/src/encodings.rs

//! Checks on the raw encodings of parameters and arguments.

use log::warn;
use xtce_rs::System;
use xtce_rs::datatypes::DataType;
use xtce_rs::encodings::Encoding;

use crate::{encoded_type, walk};

/// Calls `visit` with a label and the data type of every parameter and
/// argument in the tree.
fn for_each_type(system: &System, mut visit: impl FnMut(&str, &DataType)) {
    walk(system, &mut |system: &System| {
        for parameter in system.parameters() {
            let label = format!("Parameter {}/{}", system.qualified_name(), parameter.name);
            visit(&label, &parameter.data_type);
        }
        for command in system.commands() {
            for argument in &command.arguments {
                let label = format!(
                    "Command {}/{}: argument {}",
                    system.qualified_name(),
                    command.name,
                    argument.name
                );
                visit(&label, &argument.data_type);
            }
        }
    });
}

/// Reports float types declared as 32 bits but encoded on 64 bits.
pub fn check_float_encoding(system: &System) -> bool {
    let mut ok = true;
    for_each_type(system, |label, data_type| {
        if let DataType::Float(float) = encoded_type(data_type) {
            if let (Some(32), Some(Encoding::Float(encoding))) = (float.bits, &float.info.encoding) {
                if encoding.bits == 64 {
                    warn!("{}: float bits (32) is smaller than encoding (64)", label);
                    ok = false;
                }
            }
        }
    });
    ok
}

/// Reports integer encodings wider than one byte that are not little endian.
pub fn check_little_endian_only(system: &System) -> bool {
    let mut ok = true;
    for_each_type(system, |label, data_type| {
        if let Some(Encoding::Integer(encoding)) = encoded_type(data_type).encoding() {
            if !encoding.little_endian && encoding.bits > 8 {
                warn!("{} is not in little endian", label);
                ok = false;
            }
        }
    });
    ok
}
