//! Serializes a [`System`] tree into an XTCE 1.2 document.
//!
//! This module converts the public model into the internal `model` structs
//! expected by `quick-xml`. Each submodule handles one part of the document;
//! they share a [`Context`] that knows which system is being written and how
//! to render references from there.

mod commands;
mod encoding;
mod expressions;
pub mod format;
mod telemetry;
mod types;

use core::fmt::Write;

use log::{debug, warn};
use serde::Serialize;

use crate::ancillary::{AncillaryData, Aliases};
use crate::commands::Command;
use crate::containers::Container;
use crate::datatypes::DataType;
use crate::error::MdbError;
use crate::model;
use crate::parameters::Parameter;
use crate::references::{
    CommandRef, ContainerRef, ParameterMember, ParameterRef, Ref, Target, relative_path,
};
use crate::system::System;

const DEFAULT_TOP_COMMENT: &str =
    "Generated by xtce-rs. Changes made to this file are overwritten on the next generation.";

/// Comment written right after the XML declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopComment {
    #[default]
    Default,
    Custom(String),
    None,
}

/// Output options for [`System::dumps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    pub indent_char: char,
    /// Zero writes the document on a single line.
    pub indent_size: usize,
    pub top_comment: TopComment,
    /// Adds the `xsi:schemaLocation` attribute on the root element.
    pub schema_location: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent_char: ' ',
            indent_size: 2,
            top_comment: TopComment::Default,
            schema_location: true,
        }
    }
}

impl DumpOptions {
    pub fn compact() -> Self {
        Self {
            indent_size: 0,
            ..Default::default()
        }
    }

    pub fn with_top_comment(mut self, comment: TopComment) -> Self {
        self.top_comment = comment;
        self
    }

    pub fn with_schema_location(mut self, schema_location: bool) -> Self {
        self.schema_location = schema_location;
        self
    }
}

/// Serializes `system` and its subtree into a standalone XTCE document.
///
/// `system` becomes the root `<SpaceSystem>` even when it is attached to a
/// parent. Resolved references pointing into the subtree must still resolve;
/// references leading out of it are written as they are.
pub fn to_xtce(system: &System, options: &DumpOptions) -> Result<String, MdbError> {
    let ctx = Context::new(system);
    let mut document = build_space_system(&ctx, system)?;
    document.xmlns = Some(model::XTCE_NAMESPACE.to_string());
    if options.schema_location {
        document.xmlns_xsi = Some(model::XSI_NAMESPACE.to_string());
        document.xsi_schema_location = Some(model::XTCE_SCHEMA_LOCATION.to_string());
    }

    let mut buffer = String::new();
    writeln!(&mut buffer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    let comment = match &options.top_comment {
        TopComment::Default => Some(DEFAULT_TOP_COMMENT),
        TopComment::Custom(text) => Some(text.as_str()),
        TopComment::None => None,
    };
    if let Some(text) = comment {
        if text.contains("--") {
            return Err(MdbError::Export(
                "Top comment may not contain '--'".to_string(),
            ));
        }
        writeln!(&mut buffer, "<!--\n  {}\n-->", text.trim())?;
    }

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    if options.indent_size > 0 {
        serializer.indent(options.indent_char, options.indent_size);
    }
    document.serialize(serializer)?;

    debug!(
        "Generated XTCE for {} ({} bytes)",
        system.qualified_name(),
        buffer.len()
    );
    Ok(buffer)
}

/// Shared state of one generation run.
pub(crate) struct Context<'a> {
    /// The system being serialized. All lookups go through it.
    root: &'a System,
    root_path: String,
    /// Qualified name of the system whose elements are being written.
    current: String,
}

impl<'a> Context<'a> {
    fn new(root: &'a System) -> Self {
        let root_path = root.qualified_name();
        Self {
            root,
            current: root_path.clone(),
            root_path,
        }
    }

    /// Same run, writing elements of `system`.
    fn enter(&self, system: &System) -> Context<'a> {
        Context {
            root: self.root,
            root_path: self.root_path.clone(),
            current: system.qualified_name(),
        }
    }

    fn is_inside(&self, path: &str) -> bool {
        path.strip_prefix(self.root_path.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    fn make_ref<T>(
        &self,
        reference: &Ref<T>,
        kind: &str,
        exists: impl Fn(&System, &str) -> bool,
    ) -> Result<String, MdbError> {
        match reference.target() {
            Target::Resolved(path) => {
                if self.is_inside(path) {
                    if !exists(self.root, path) {
                        return Err(MdbError::UnresolvedReference { path: path.clone() });
                    }
                } else {
                    warn!(
                        "{} reference {} leaves the generated tree {}",
                        kind, path, self.root_path
                    );
                }
                Ok(relative_path(path, &self.current))
            }
            Target::ByPath(path) => Ok(relative_path(path, &self.current)),
        }
    }

    pub(crate) fn parameter_ref(&self, reference: &ParameterRef) -> Result<String, MdbError> {
        self.make_ref(reference, "Parameter", |s, p| s.resolve_parameter(p).is_some())
    }

    pub(crate) fn container_ref(&self, reference: &ContainerRef) -> Result<String, MdbError> {
        self.make_ref(reference, "Container", |s, p| s.resolve_container(p).is_some())
    }

    pub(crate) fn command_ref(&self, reference: &CommandRef) -> Result<String, MdbError> {
        self.make_ref(reference, "Command", |s, p| s.resolve_command(p).is_some())
    }

    /// Parameter path extended with the member names, e.g. `hdr/id/apid`.
    pub(crate) fn member_ref(&self, member: &ParameterMember) -> Result<String, MdbError> {
        let mut path = self.parameter_ref(&member.parameter)?;
        for name in &member.path {
            path.push('/');
            path.push_str(name);
        }
        Ok(path)
    }

    /// The registered parameter behind a resolved reference.
    pub(crate) fn lookup_parameter(&self, reference: &ParameterRef) -> Option<&'a Parameter> {
        reference
            .qualified_name()
            .and_then(|path| self.root.resolve_parameter(path))
    }

    /// Data type of a parameter or of one of its aggregate members, when known.
    pub(crate) fn member_type(&self, member: &ParameterMember) -> Option<&'a DataType> {
        let mut data_type = &self.lookup_parameter(&member.parameter)?.data_type;
        for name in &member.path {
            data_type = match data_type {
                DataType::Aggregate(agg) => &agg.find_member(name).ok()?.data_type,
                _ => return None,
            };
        }
        Some(data_type)
    }

    pub(crate) fn root(&self) -> &'a System {
        self.root
    }
}

pub(crate) fn build_alias_set(aliases: &Aliases) -> Option<model::AliasSet> {
    if aliases.is_empty() {
        return None;
    }
    Some(model::AliasSet {
        aliases: aliases
            .iter()
            .map(|(name_space, alias)| model::common::Alias {
                name_space: name_space.clone(),
                alias: alias.clone(),
            })
            .collect(),
    })
}

pub(crate) fn build_ancillary_data_set(extra: &AncillaryData) -> Option<model::AncillaryDataSet> {
    if extra.is_empty() {
        return None;
    }
    Some(model::AncillaryDataSet {
        items: extra
            .iter()
            .map(|item| model::common::AncillaryData {
                name: item.name.clone(),
                href: item.url.clone(),
                mime_type: item.mimetype.clone(),
                value: item.value.clone(),
            })
            .collect(),
    })
}

/// Builds the `<SpaceSystem>` of `system`, recursing into its subsystems.
fn build_space_system(ctx: &Context<'_>, system: &System) -> Result<model::SpaceSystem, MdbError> {
    let ctx = ctx.enter(system);
    debug!("Writing space system {}", ctx.current);

    let parameters: Vec<&Parameter> = system.parameters().collect();
    let containers: Vec<&Container> = system.containers().collect();
    let commands: Vec<&Command> = system.commands().collect();

    let telemetry_meta_data = model::TelemetryMetaData {
        parameter_type_set: telemetry::build_parameter_type_set(&ctx, &parameters)?,
        parameter_set: telemetry::build_parameter_set(&parameters),
        container_set: telemetry::build_container_set(&ctx, &containers)?,
        algorithm_set: telemetry::build_algorithm_set(&ctx, system.algorithms())?,
    };

    let command_meta_data = model::CommandMetaData {
        argument_type_set: commands::build_argument_type_set(&ctx, &commands)?,
        meta_command_set: commands::build_meta_command_set(&ctx, &commands)?,
    };

    let subsystems = system
        .subsystems()
        .map(|sub| build_space_system(&ctx, sub))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(model::SpaceSystem {
        name: system.name().to_string(),
        short_description: system.short_description.clone(),
        long_description: system.long_description.clone(),
        alias_set: build_alias_set(&system.aliases),
        ancillary_data_set: build_ancillary_data_set(&system.extra),
        telemetry_meta_data,
        command_meta_data,
        subsystems,
        ..Default::default()
    })
}
