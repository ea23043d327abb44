// crates/xtce-rs-lint/src/lib.rs

#![doc = "Advisory consistency checks for `xtce-rs` mission databases."]
#![doc = ""]
#![doc = "The checks never modify the tree and never fail. Each finding is logged at"]
#![doc = "`warn` level and the check returns `true` only if it found nothing. All checks"]
#![doc = "descend into subsystems."]
#![doc = ""]
#![doc = "- [`check_complete_verifiers`]: Commands that can never complete successfully."]
#![doc = "- [`check_float_encoding`]: 32-bit floats read from 64-bit encodings."]
#![doc = "- [`check_little_endian_only`]: Multi-byte integers in big-endian order."]

mod encodings;
mod verifiers;

use xtce_rs::System;
use xtce_rs::datatypes::DataType;

pub use encodings::{check_float_encoding, check_little_endian_only};
pub use verifiers::check_complete_verifiers;

/// Calls `visit` on `system` and every system below it, depth first.
pub(crate) fn walk<'a>(system: &'a System, visit: &mut impl FnMut(&'a System)) {
    visit(system);
    for subsystem in system.subsystems() {
        walk(subsystem, visit);
    }
}

/// The type that carries the encoding: the element type for arrays.
pub(crate) fn encoded_type(data_type: &DataType) -> &DataType {
    match data_type {
        DataType::Array(array) => encoded_type(&array.element),
        other => other,
    }
}
