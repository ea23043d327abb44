// crates/xtce-rs/src/references.rs

//! Typed references between entities and the XTCE reference-path algebra.
//!
//! Entities never hold each other directly. A reference is either the
//! qualified name of an entity registered through `System::add_*`
//! ([`Target::Resolved`]) or a free-form path to something the model does not
//! manage ([`Target::ByPath`]). Resolved references are looked up again when
//! the document is generated; by-path references are written as given.

use core::fmt;
use core::marker::PhantomData;

use crate::algorithms::Algorithm;
use crate::commands::Command;
use crate::containers::Container;
use crate::parameters::Parameter;

/// Where a reference points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Qualified name of a registered entity.
    Resolved(String),
    /// Absolute or relative path to an entity outside the managed model.
    ByPath(String),
}

/// A reference to an entity of kind `T`.
pub struct Ref<T> {
    target: Target,
    kind: PhantomData<fn() -> T>,
}

pub type ParameterRef = Ref<Parameter>;
pub type ContainerRef = Ref<Container>;
pub type CommandRef = Ref<Command>;
pub type AlgorithmRef = Ref<Algorithm>;

impl<T> Ref<T> {
    pub(crate) fn resolved(qualified_name: String) -> Self {
        Self {
            target: Target::Resolved(qualified_name),
            kind: PhantomData,
        }
    }

    /// A placeholder for an entity identified only by its path.
    pub fn by_path(path: impl Into<String>) -> Self {
        Self {
            target: Target::ByPath(path.into()),
            kind: PhantomData,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The referenced path, qualified or not.
    pub fn path(&self) -> &str {
        match &self.target {
            Target::Resolved(p) | Target::ByPath(p) => p,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.target, Target::Resolved(_))
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        let path = self.path();
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Qualified name of a resolved reference.
    pub fn qualified_name(&self) -> Option<&str> {
        match &self.target {
            Target::Resolved(p) => Some(p),
            Target::ByPath(_) => None,
        }
    }
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            kind: PhantomData,
        }
    }
}

impl<T> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<T> Eq for Ref<T> {}

impl<T> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.target).finish()
    }
}

impl<T> fmt::Display for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(path: &str) -> Self {
        Ref::by_path(path)
    }
}

impl<T> From<String> for Ref<T> {
    fn from(path: String) -> Self {
        Ref::by_path(path)
    }
}

impl<T> From<&Ref<T>> for Ref<T> {
    fn from(r: &Ref<T>) -> Self {
        r.clone()
    }
}

/// A parameter, optionally narrowed to a nested aggregate member.
///
/// `ParameterMember::new(header).member("apid")` renders as `.../header/apid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMember {
    pub parameter: ParameterRef,
    pub path: Vec<String>,
}

impl ParameterMember {
    pub fn new(parameter: impl Into<ParameterRef>) -> Self {
        Self {
            parameter: parameter.into(),
            path: Vec::new(),
        }
    }

    /// Descends into a member of the current aggregate.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.path.push(name.into());
        self
    }
}

impl From<ParameterRef> for ParameterMember {
    fn from(parameter: ParameterRef) -> Self {
        ParameterMember::new(parameter)
    }
}

impl From<&ParameterRef> for ParameterMember {
    fn from(parameter: &ParameterRef) -> Self {
        ParameterMember::new(parameter.clone())
    }
}

impl From<&str> for ParameterMember {
    fn from(path: &str) -> Self {
        ParameterMember::new(path)
    }
}

impl From<&ParameterMember> for ParameterMember {
    fn from(member: &ParameterMember) -> Self {
        member.clone()
    }
}

/// Renders `target` as seen from the system with qualified name `start`.
///
/// Paths that do not start with `/` are returned unchanged. An absolute
/// target is kept absolute when the only ancestor it shares with `start` is
/// the root system (or none at all); otherwise the result is the relative
/// filesystem-style path from `start` to `target`.
pub fn relative_path(target: &str, start: &str) -> String {
    if !target.starts_with('/') {
        return target.to_string();
    }

    let target_parts: Vec<&str> = target.split('/').filter(|p| !p.is_empty()).collect();
    let start_parts: Vec<&str> = start.split('/').filter(|p| !p.is_empty()).collect();

    let common = target_parts
        .iter()
        .zip(start_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 || (common == 1 && start_parts.len() > 1) {
        return target.to_string();
    }

    let mut parts: Vec<&str> = vec![".."; start_parts.len() - common];
    parts.extend_from_slice(&target_parts[common..]);
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
