//! Declarative debugger settings.
//!
//! ```yaml
//! enabled: true
//! output: stdout
//! writers:
//!   - name: net
//!     prefix: "net: "
//! ```

use serde::Deserialize;

use crate::debugger::Debugger;
#[cfg(any(feature = "json", feature = "yaml", feature = "toml"))]
use crate::error::{DebugError, Stage};
use crate::io::StdStream;
use crate::writer::PrefixedWriter;

/// Settings for building a [`Debugger`](crate::Debugger).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebugConfig {
    /// Initial gate state
    #[serde(default)]
    pub enabled: bool,
    /// Standard stream to write to; stderr when absent
    #[serde(default)]
    pub output: Option<StdStream>,
    /// Named prefixes the host wants writers for
    #[serde(default)]
    pub writers: Vec<WriterConfig>,
}

/// A named writer prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WriterConfig {
    pub name: String,
    pub prefix: String,
}

impl DebugConfig {
    /// Create a new, disabled configuration writing to stderr.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_output(mut self, stream: StdStream) -> Self {
        self.output = Some(stream);
        self
    }

    /// Add a named writer prefix. A later entry for the same name wins.
    pub fn add_writer(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.writers.push(WriterConfig {
            name: name.into(),
            prefix: prefix.into(),
        });
        self
    }

    /// Prefix configured for `name`, if any.
    pub fn writer_prefix(&self, name: &str) -> Option<&str> {
        self.writers
            .iter()
            .rev()
            .find(|w| w.name == name)
            .map(|w| w.prefix.as_str())
    }

    /// A prefixed writer on `debugger` for the component called `name`.
    ///
    /// Uses the configured prefix, or `"<name>: "` when `name` has no entry.
    pub fn writer(&self, debugger: &Debugger, name: &str) -> PrefixedWriter {
        let prefix = match self.writer_prefix(name) {
            Some(prefix) => prefix.to_owned(),
            None => format!("{name}: "),
        };
        debugger.writer().prefix(prefix)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, DebugError> {
        serde_json::from_str(s).map_err(|e| DebugError::new(Stage::Parse, "json", e))
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, DebugError> {
        serde_yaml::from_str(s).map_err(|e| DebugError::new(Stage::Parse, "yaml", e))
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, DebugError> {
        toml::from_str(s).map_err(|e| DebugError::new(Stage::Parse, "toml", e))
    }
}
