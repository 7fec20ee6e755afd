//! Captured process environment.

use std::collections::BTreeMap;

/// A read-only copy of the environment variables visible at start-up.
///
/// Lookups follow shell `${VAR:-default}` semantics: a variable that is
/// present but empty counts as unset.
///
/// # Example
///
/// ```
/// use casm_ci::environment::EnvSnapshot;
///
/// let env = EnvSnapshot::from_pairs([("TRAVIS_TAG", ""), ("TRAVIS_BRANCH", "main")]);
/// assert_eq!(env.get("TRAVIS_BRANCH"), Some("main"));
/// assert_eq!(env.get("TRAVIS_TAG"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a variable if it is set to a non-empty value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
