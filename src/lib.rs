extern crate self as showparse;

use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod adapter;
mod api;
mod engine;
mod error;
mod rules;
mod schema;
mod tree;

pub use adapter::{CannedOutput, CommandAdapter};
pub use api::{Options, ParseResult, parse, parse_command, parse_with};
pub use engine::{LineTrace, RuleHits, RunMetrics};
pub use error::{AdapterError, Error, ParseError, Result, RuleFault, SchemaError};
pub use rules::ospf::Command;
pub use schema::{Field, MapSchema, Schema, ValueKinds, Violation, ViolationKind, validate};
pub use tree::{Node, Path, Value};

pub(crate) use engine::{CapturesExt, ParseState};

// --- Internal types ---------------------------------------------------------

/// What the dispatch loop does after a rule has fired on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchPolicy {
    /// Move on to the next line.
    Stop,
    /// Keep offering the same line to the rules after this one.
    Continue,
}

pub(crate) type Action = Box<dyn Fn(&Captures<'_>, &mut ParseState) -> std::result::Result<(), RuleFault> + Send + Sync>;

/// A line rule: a name for diagnostics, an anchored pattern (created via the
/// `regex!` helper macro in `src/macros.rs`), a policy and the action that
/// applies the captures to the parse state.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub policy: MatchPolicy,
    pub action: Action,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("policy", &self.policy)
            .field("action", &"<function>")
            .finish()
    }
}

/// Box a rule action. Closures passed straight to `Box::new` do not get the
/// higher-ranked argument lifetimes `Action` needs; a generic bound does.
pub(crate) fn action<F>(f: F) -> Action
where
    F: Fn(&Captures<'_>, &mut ParseState) -> std::result::Result<(), RuleFault> + Send + Sync + 'static,
{
    Box::new(f)
}
