// crates/xtce-rs/src/wellknown.rs

//! Placeholders for parameters provided by the processing system itself,
//! which live under the `/yamcs` namespace and are never part of a model.

use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};

use crate::references::{ParameterRef, Ref};

/// Root namespace of the externally provided parameters.
pub const YAMCS_NAMESPACE: &str = "/yamcs";

fn registry() -> &'static Mutex<BTreeSet<String>> {
    static NAMES: OnceLock<Mutex<BTreeSet<String>>> = OnceLock::new();
    NAMES.get_or_init(|| Mutex::new(BTreeSet::new()))
}

/// By-path reference to `/yamcs/{name}`, for example `cmdHist/Acknowledge_Sent`.
pub fn yamcs_parameter(name: &str) -> ParameterRef {
    let name = name.trim_start_matches('/');
    // A poisoned lock only means another thread panicked mid-insert.
    let mut names = registry().lock().unwrap_or_else(|e| e.into_inner());
    names.insert(name.to_string());
    Ref::by_path(format!("{}/{}", YAMCS_NAMESPACE, name))
}

/// Names of all external parameters referenced so far, sorted.
pub fn referenced() -> Vec<String> {
    let names = registry().lock().unwrap_or_else(|e| e.into_inner());
    names.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yamcs_parameter_path() {
        let p = yamcs_parameter("cmdHist/Acknowledge_Sent");
        assert!(!p.is_resolved());
        assert_eq!(p.path(), "/yamcs/cmdHist/Acknowledge_Sent");
        assert!(referenced().contains(&"cmdHist/Acknowledge_Sent".to_string()));
    }
}
