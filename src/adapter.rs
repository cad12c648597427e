//! Command adapters.
//!
//! The engine only consumes text. Whatever fetches that text from a device
//! (SSH session, console server, captured log) implements [`CommandAdapter`];
//! timeouts, retries and reconnection are the adapter's business.

use std::collections::HashMap;
use std::path::Path;

use crate::error::AdapterError;

/// Runs a show command and returns its raw output.
pub trait CommandAdapter {
    fn execute(&self, command: &str) -> Result<String, AdapterError>;
}

/// Pre-recorded output keyed by command line.
///
/// Command lines are compared with whitespace runs collapsed, so
/// `"show  ospf vrf all-inclusive"` finds `"show ospf vrf all-inclusive"`.
#[derive(Debug, Clone, Default)]
pub struct CannedOutput {
    outputs: HashMap<String, String>,
}

impl CannedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `output` for `command`, replacing any earlier recording.
    pub fn insert(&mut self, command: &str, output: impl Into<String>) {
        self.outputs.insert(normalize(command), output.into());
    }

    pub fn with(mut self, command: &str, output: impl Into<String>) -> Self {
        self.insert(command, output);
        self
    }

    /// Record the contents of `path` as the output of `command`.
    pub fn insert_file(&mut self, command: &str, path: impl AsRef<Path>) -> Result<(), AdapterError> {
        let output = std::fs::read_to_string(path.as_ref())
            .map_err(|source| AdapterError::Io { command: command.to_string(), source })?;
        self.insert(command, output);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl CommandAdapter for CannedOutput {
    fn execute(&self, command: &str) -> Result<String, AdapterError> {
        self.outputs.get(&normalize(command)).cloned().ok_or_else(|| AdapterError::NoOutput(command.to_string()))
    }
}

fn normalize(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}
