// crates/xtce-rs/src/error.rs

use core::fmt;
use quick_xml::errors::serialize::SeError;
use std::io;

/// Errors raised while building a mission database or writing it as XTCE.
#[derive(Debug)]
pub enum MdbError {
    /// An entity of the same kind and name is already registered in the system.
    NameConflict {
        kind: &'static str,
        system: String,
        name: String,
    },

    /// `find_*` did not locate an entity directly in the system.
    NotFound { kind: &'static str, name: String },

    /// A label, value or member lookup inside a data type failed.
    Lookup(String),

    /// The model cannot be expressed in XTCE (invalid option combination,
    /// unsupported construct reaching the generator, ...).
    Export(String),

    /// A resolved reference points inside the serialized tree but its target
    /// is no longer registered.
    UnresolvedReference { path: String },

    /// The operation is deliberately not supported (see `Container::fit_entries`).
    Unsupported(&'static str),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// Writing the document to its destination failed.
    Io(io::Error),
}

impl From<SeError> for MdbError {
    fn from(e: SeError) -> Self {
        MdbError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for MdbError {
    fn from(e: fmt::Error) -> Self {
        MdbError::FmtError(e)
    }
}

impl From<io::Error> for MdbError {
    fn from(e: io::Error) -> Self {
        MdbError::Io(e)
    }
}

impl fmt::Display for MdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdbError::NameConflict { kind, system, name } => {
                write!(f, "System {} already contains a {} named '{}'", system, kind, name)
            }
            MdbError::NotFound { kind, name } => write!(f, "No {} named '{}'", kind, name),
            MdbError::Lookup(msg) => write!(f, "Lookup error: {}", msg),
            MdbError::Export(msg) => write!(f, "Export error: {}", msg),
            MdbError::UnresolvedReference { path } => {
                write!(f, "Unresolved reference: {}", path)
            }
            MdbError::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
            MdbError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            MdbError::FmtError(e) => write!(f, "Formatting error: {}", e),
            MdbError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for MdbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MdbError::XmlSerializing(e) => Some(e),
            MdbError::FmtError(e) => Some(e),
            MdbError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MdbError;

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: MdbError = xml_err.into();
        assert!(matches!(err, MdbError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_fmt_error() {
        let err: MdbError = core::fmt::Error.into();
        assert!(matches!(err, MdbError::FmtError(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: MdbError = io_err.into();
        assert!(matches!(err, MdbError::Io(_)));
    }

    #[test]
    fn test_name_conflict_display() {
        let err = MdbError::NameConflict {
            kind: "parameter",
            system: "/Sat".to_string(),
            name: "counter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "System /Sat already contains a parameter named 'counter'"
        );
    }
}
