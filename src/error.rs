//! Error types.
//!
//! Rule actions report a [`RuleFault`] without knowing where they were
//! invoked; the dispatch loop attaches the rule name and line number to form a
//! [`ParseError`]. Schema failures and adapter failures have their own types,
//! and [`Error`] wraps all three for the top-level API.

use crate::engine::Scope;
use crate::schema::Violation;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a rule action could not apply its line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleFault {
    #[error("no {0} has been established by an earlier line")]
    UnsetScope(Scope),

    #[error("variable `{0}` has not been captured by an earlier line")]
    UnsetVariable(&'static str),

    #[error("variable `{name}` holds a {found}, expected {expected}")]
    VariableType { name: &'static str, expected: &'static str, found: &'static str },

    #[error("view `{0}` has not been bound by an earlier line")]
    UnsetView(&'static str),

    #[error("capture group `{0}` did not participate in the match")]
    MissingCapture(&'static str),

    #[error("capture group `{group}` holds {value:?}, which is not a number")]
    InvalidNumber { group: &'static str, value: String },

    #[error("`{path}` already holds a {found}, not a mapping")]
    PathConflict { path: String, found: &'static str },
}

/// A rule action failed on a specific input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: rule `{rule}` failed on {text:?}: {fault}")]
pub struct ParseError {
    pub rule: &'static str,
    /// 1-based line number in the raw command output.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
    #[source]
    pub fault: RuleFault,
}

/// Schema validation outcome for a finished tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Nothing in the output was recognized.
    #[error("command output produced no data")]
    Empty,

    #[error("output tree does not match the command schema ({} violation(s)); first: {}", .0.len(), first_violation(.0))]
    Mismatch(Vec<Violation>),
}

fn first_violation(violations: &[Violation]) -> String {
    violations.first().map(ToString::to_string).unwrap_or_default()
}

/// Failure to obtain raw text from a device.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("no output available for command `{0}`")]
    NoOutput(String),

    #[error("failed to read output for `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error returned by [`crate::parse`] and friends.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported command `{0}`")]
    UnknownCommand(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl Error {
    /// True when the output simply contained nothing recognizable.
    pub fn is_empty_output(&self) -> bool {
        matches!(self, Error::Schema(SchemaError::Empty))
    }
}
