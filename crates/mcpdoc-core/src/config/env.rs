//! Environment source trait for testable configuration loading.

/// Trait for accessing environment variables (injectable for testing).
///
/// Values are `String` rather than `OsString`: every consumer parses the
/// value as UTF-8 text, and non-UTF-8 values are indistinguishable from
/// unset ones.
pub trait EnvSource {
    /// Get an environment variable.
    fn get(&self, key: &str) -> Option<String>;
}

/// Production source that reads from the actual process environment.
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test source with predefined variables.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
impl EnvSource for MockEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
