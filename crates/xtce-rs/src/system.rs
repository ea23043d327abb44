// crates/xtce-rs/src/system.rs

//! The namespace tree.
//!
//! A [`System`] owns its parameters, containers, commands, algorithms and
//! subsystems in name-keyed registries. Registration returns a resolved
//! reference that other entities use to point at the registered entity.
//! A subsystem keeps the qualified name of its parent, which is updated when
//! the subsystem is attached with [`System::add_subsystem`].

use std::collections::BTreeMap;
use std::io;

use log::debug;

use crate::algorithms::Algorithm;
use crate::ancillary::{AncillaryData, Aliases};
use crate::builder::{self, DumpOptions};
use crate::commands::{Argument, Command};
use crate::containers::Container;
use crate::error::MdbError;
use crate::parameters::Parameter;
use crate::references::{AlgorithmRef, CommandRef, ContainerRef, ParameterRef, Ref, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    name: String,
    /// Qualified name of the parent system, if attached to one.
    parent: Option<String>,
    pub aliases: Aliases,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub extra: AncillaryData,
    parameters: BTreeMap<String, Parameter>,
    containers: BTreeMap<String, Container>,
    commands: BTreeMap<String, Command>,
    algorithms: BTreeMap<String, Algorithm>,
    subsystems: BTreeMap<String, System>,
}

/// Inserts `value` unless the name is taken.
fn register<V>(
    registry: &mut BTreeMap<String, V>,
    kind: &'static str,
    system: String,
    name: &str,
    value: V,
) -> Result<(), MdbError> {
    if registry.contains_key(name) {
        return Err(MdbError::NameConflict {
            kind,
            system,
            name: name.to_string(),
        });
    }
    registry.insert(name.to_string(), value);
    Ok(())
}

fn lookup<'a, V>(
    registry: &'a BTreeMap<String, V>,
    kind: &'static str,
    name: &str,
) -> Result<&'a V, MdbError> {
    registry.get(name).ok_or_else(|| MdbError::NotFound {
        kind,
        name: name.to_string(),
    })
}

impl System {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            aliases: Aliases::new(),
            short_description: None,
            long_description: None,
            extra: AncillaryData::new(),
            parameters: BTreeMap::new(),
            containers: BTreeMap::new(),
            commands: BTreeMap::new(),
            algorithms: BTreeMap::new(),
            subsystems: BTreeMap::new(),
        }
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    pub fn with_alias(mut self, namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(namespace.into(), alias.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualified name of the parent system.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Absolute path of this system, e.g. `/Sat/Power`.
    pub fn qualified_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{}/{}", parent, self.name),
            None => format!("/{}", self.name),
        }
    }

    fn child_path(&self, name: &str) -> String {
        format!("{}/{}", self.qualified_name(), name)
    }

    // --- Registration ---

    pub fn add_parameter(&mut self, parameter: Parameter) -> Result<ParameterRef, MdbError> {
        let system = self.qualified_name();
        let name = parameter.name.clone();
        register(&mut self.parameters, "parameter", system, &name, parameter)?;
        Ok(Ref::resolved(self.child_path(&name)))
    }

    pub fn add_container(&mut self, container: Container) -> Result<ContainerRef, MdbError> {
        let system = self.qualified_name();
        let name = container.name.clone();
        register(&mut self.containers, "container", system, &name, container)?;
        Ok(Ref::resolved(self.child_path(&name)))
    }

    pub fn add_command(&mut self, command: Command) -> Result<CommandRef, MdbError> {
        let system = self.qualified_name();
        let name = command.name.clone();
        register(&mut self.commands, "command", system, &name, command)?;
        Ok(Ref::resolved(self.child_path(&name)))
    }

    pub fn add_algorithm(&mut self, algorithm: Algorithm) -> Result<AlgorithmRef, MdbError> {
        let system = self.qualified_name();
        let name = algorithm.name.clone();
        register(&mut self.algorithms, "algorithm", system, &name, algorithm)?;
        Ok(Ref::resolved(self.child_path(&name)))
    }

    /// Attaches `subsystem` (and its own subtree) below this system.
    ///
    /// References handed out while the subsystem was detached still carry
    /// the old paths; register entities after attaching.
    pub fn add_subsystem(&mut self, mut subsystem: System) -> Result<&mut System, MdbError> {
        let system = self.qualified_name();
        let name = subsystem.name.clone();
        if self.subsystems.contains_key(&name) {
            return Err(MdbError::NameConflict {
                kind: "subsystem",
                system,
                name,
            });
        }
        subsystem.reparent(system);
        debug!("Attached subsystem {}", subsystem.qualified_name());
        Ok(self.subsystems.entry(name).or_insert(subsystem))
    }

    fn reparent(&mut self, parent: String) {
        self.parent = Some(parent);
        let path = self.qualified_name();
        for child in self.subsystems.values_mut() {
            child.reparent(path.clone());
        }
    }

    // --- Direct lookups ---

    pub fn find_parameter(&self, name: &str) -> Result<&Parameter, MdbError> {
        lookup(&self.parameters, "parameter", name)
    }

    pub fn find_container(&self, name: &str) -> Result<&Container, MdbError> {
        lookup(&self.containers, "container", name)
    }

    pub fn find_command(&self, name: &str) -> Result<&Command, MdbError> {
        lookup(&self.commands, "command", name)
    }

    pub fn find_algorithm(&self, name: &str) -> Result<&Algorithm, MdbError> {
        lookup(&self.algorithms, "algorithm", name)
    }

    pub fn find_subsystem(&self, name: &str) -> Result<&System, MdbError> {
        lookup(&self.subsystems, "subsystem", name)
    }

    pub fn find_parameter_mut(&mut self, name: &str) -> Result<&mut Parameter, MdbError> {
        self.parameters.get_mut(name).ok_or_else(|| MdbError::NotFound {
            kind: "parameter",
            name: name.to_string(),
        })
    }

    pub fn find_container_mut(&mut self, name: &str) -> Result<&mut Container, MdbError> {
        self.containers.get_mut(name).ok_or_else(|| MdbError::NotFound {
            kind: "container",
            name: name.to_string(),
        })
    }

    pub fn find_command_mut(&mut self, name: &str) -> Result<&mut Command, MdbError> {
        self.commands.get_mut(name).ok_or_else(|| MdbError::NotFound {
            kind: "command",
            name: name.to_string(),
        })
    }

    pub fn find_subsystem_mut(&mut self, name: &str) -> Result<&mut System, MdbError> {
        self.subsystems.get_mut(name).ok_or_else(|| MdbError::NotFound {
            kind: "subsystem",
            name: name.to_string(),
        })
    }

    /// Resolved reference to a parameter registered directly in this system.
    pub fn parameter_ref(&self, name: &str) -> Result<ParameterRef, MdbError> {
        self.find_parameter(name)?;
        Ok(Ref::resolved(self.child_path(name)))
    }

    pub fn container_ref(&self, name: &str) -> Result<ContainerRef, MdbError> {
        self.find_container(name)?;
        Ok(Ref::resolved(self.child_path(name)))
    }

    pub fn command_ref(&self, name: &str) -> Result<CommandRef, MdbError> {
        self.find_command(name)?;
        Ok(Ref::resolved(self.child_path(name)))
    }

    // --- Removal ---

    pub fn remove_parameter(&mut self, name: &str) -> bool {
        self.parameters.remove(name).is_some()
    }

    pub fn remove_container(&mut self, name: &str) -> bool {
        self.containers.remove(name).is_some()
    }

    pub fn remove_command(&mut self, name: &str) -> bool {
        self.commands.remove(name).is_some()
    }

    pub fn remove_algorithm(&mut self, name: &str) -> bool {
        self.algorithms.remove(name).is_some()
    }

    pub fn remove_subsystem(&mut self, name: &str) -> bool {
        self.subsystems.remove(name).is_some()
    }

    // --- Listing, in name order ---

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn algorithms(&self) -> impl Iterator<Item = &Algorithm> {
        self.algorithms.values()
    }

    pub fn subsystems(&self) -> impl Iterator<Item = &System> {
        self.subsystems.values()
    }

    // --- Resolution by qualified name ---

    /// The system at `path`, searching this system and its descendants.
    pub fn resolve_system(&self, path: &str) -> Option<&System> {
        let own = self.qualified_name();
        let rest = path.strip_prefix(own.as_str())?;
        if rest.is_empty() {
            return Some(self);
        }
        let rest = rest.strip_prefix('/')?;
        let mut current = self;
        for part in rest.split('/') {
            current = current.subsystems.get(part)?;
        }
        Some(current)
    }

    fn resolve_in<'a, V>(
        &'a self,
        path: &str,
        registry: fn(&'a System) -> &'a BTreeMap<String, V>,
    ) -> Option<&'a V> {
        let (system_path, name) = path.rsplit_once('/')?;
        let system = self.resolve_system(system_path)?;
        registry(system).get(name)
    }

    pub fn resolve_parameter(&self, path: &str) -> Option<&Parameter> {
        self.resolve_in(path, |s| &s.parameters)
    }

    pub fn resolve_container(&self, path: &str) -> Option<&Container> {
        self.resolve_in(path, |s| &s.containers)
    }

    pub fn resolve_command(&self, path: &str) -> Option<&Command> {
        self.resolve_in(path, |s| &s.commands)
    }

    pub fn resolve_algorithm(&self, path: &str) -> Option<&Algorithm> {
        self.resolve_in(path, |s| &s.algorithms)
    }

    /// Finds an argument of `command`, optionally following its base commands.
    ///
    /// Returns `None` when the chain reaches a command that is not a
    /// registered entity of this tree.
    pub fn find_argument(
        &self,
        command: &CommandRef,
        name: &str,
        visit_parents: bool,
    ) -> Option<&Argument> {
        let mut visited: Vec<&str> = Vec::new();
        let mut current = command;
        loop {
            let path = match current.target() {
                Target::Resolved(path) => path.as_str(),
                Target::ByPath(_) => return None,
            };
            if visited.contains(&path) {
                return None;
            }
            visited.push(path);

            let cmd = self.resolve_command(path)?;
            if let Some(argument) = cmd.get_argument(name) {
                return Some(argument);
            }
            match (&cmd.base, visit_parents) {
                (Some(base), true) => current = base,
                _ => return None,
            }
        }
    }

    // --- Output ---

    /// Serializes this system and its subtree as an XTCE document.
    pub fn dumps(&self, options: &DumpOptions) -> Result<String, MdbError> {
        builder::to_xtce(self, options)
    }

    /// Writes the XTCE document to `writer`.
    pub fn dump<W: io::Write>(&self, writer: &mut W, options: &DumpOptions) -> Result<(), MdbError> {
        let xml = self.dumps(options)?;
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::IntegerType;

    fn counter() -> Parameter {
        Parameter::new("counter", IntegerType::unsigned())
    }

    #[test]
    fn test_name_conflict() {
        let mut sys = System::new("Sat");
        sys.add_parameter(counter()).unwrap();
        let err = sys.add_parameter(counter()).unwrap_err();
        assert!(matches!(err, MdbError::NameConflict { kind: "parameter", .. }));
        assert_eq!(
            err.to_string(),
            "System /Sat already contains a parameter named 'counter'"
        );
    }

    #[test]
    fn test_same_name_in_other_kind_or_system() {
        let mut sys = System::new("Sat");
        sys.add_parameter(counter()).unwrap();
        sys.add_container(Container::new("counter")).unwrap();
        let sub = sys.add_subsystem(System::new("Sub")).unwrap();
        assert!(sub.add_parameter(counter()).is_ok());
    }

    #[test]
    fn test_qualified_names() {
        let mut root = System::new("root");
        let a = root.add_subsystem(System::new("A")).unwrap();
        let b = a.add_subsystem(System::new("B")).unwrap();
        let c = b.add_subsystem(System::new("C")).unwrap();
        let p = c.add_parameter(counter()).unwrap();
        assert_eq!(c.qualified_name(), "/root/A/B/C");
        assert_eq!(p.path(), "/root/A/B/C/counter");
        assert!(root.resolve_parameter("/root/A/B/C/counter").is_some());
        assert!(root.resolve_parameter("/root/A/B/counter").is_none());
        assert!(root.resolve_parameter("/other/A/B/C/counter").is_none());
    }

    #[test]
    fn test_attach_prebuilt_tree() {
        let mut inner = System::new("B");
        inner.add_subsystem(System::new("C")).unwrap();
        let mut root = System::new("root");
        root.add_subsystem(inner).unwrap();
        let c = root.resolve_system("/root/B/C").unwrap();
        assert_eq!(c.parent(), Some("/root/B"));
    }

    #[test]
    fn test_find_and_remove() {
        let mut sys = System::new("Sat");
        sys.add_parameter(counter()).unwrap();
        assert!(sys.find_parameter("counter").is_ok());
        assert!(matches!(
            sys.find_parameter("missing"),
            Err(MdbError::NotFound { kind: "parameter", .. })
        ));
        assert!(sys.remove_parameter("counter"));
        assert!(!sys.remove_parameter("counter"));
    }

    #[test]
    fn test_listing_is_sorted() {
        let mut sys = System::new("Sat");
        for name in ["zeta", "alpha", "mu"] {
            sys.add_parameter(Parameter::new(name, IntegerType::new())).unwrap();
        }
        let names: Vec<&str> = sys.parameters().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mu", "zeta"]);
    }

    #[test]
    fn test_find_argument_through_base() {
        let mut sys = System::new("Sat");
        let base = sys
            .add_command(
                Command::new("base")
                    .as_abstract()
                    .with_argument(Argument::new("id", IntegerType::new())),
            )
            .unwrap();
        let child = sys.add_command(Command::new("child").extends(&base)).unwrap();

        assert!(sys.find_argument(&child, "id", true).is_some());
        assert!(sys.find_argument(&child, "id", false).is_none());

        let orphan = sys
            .add_command(Command::new("orphan").extends("/elsewhere/base"))
            .unwrap();
        assert!(sys.find_argument(&orphan, "id", true).is_none());
    }
}
