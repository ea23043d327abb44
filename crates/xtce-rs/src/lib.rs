// src/lib.rs

#![doc = "Builds spacecraft mission databases in memory and writes them as XTCE 1.2."]
#![doc = ""]
#![doc = "A [`System`] tree holds parameters, containers, commands and algorithms."]
#![doc = "Entities refer to each other through typed references returned at"]
#![doc = "registration; the generator resolves them again and renders them as"]
#![doc = "relative XTCE paths."]
#![doc = ""]
#![doc = "- [`System::dumps`]: Serializes a system and its subtree into an XTCE string."]
#![doc = "- [`System::dump`]: Writes the same document to any `io::Write`."]
#![doc = "- [`Container::fit_entries`]: Computes the size of a flat container."]

// --- Crate Modules ---

mod builder;
mod error;
mod model;

pub mod alarms;
pub mod algorithms;
pub mod ancillary;
pub mod calibrators;
pub mod commands;
pub mod containers;
pub mod datatypes;
pub mod encodings;
pub mod expressions;
pub mod parameters;
pub mod references;
pub mod system;
pub mod value;
pub mod verifiers;
pub mod wellknown;

// --- Public API Re-exports ---

pub use builder::format::{format_float, iso_duration};
pub use builder::{DumpOptions, TopComment, to_xtce};
pub use commands::{Argument, Command, CommandLevel};
pub use containers::Container;
pub use datatypes::DataType;
pub use error::MdbError;
pub use parameters::{DataSource, Parameter};
pub use references::{CommandRef, ContainerRef, ParameterMember, ParameterRef};
pub use system::System;
pub use value::Value;
