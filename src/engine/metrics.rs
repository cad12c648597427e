//! Engine run metrics.
//!
//! Collected by [`Parser::run_with_metrics`](super::Parser::run_with_metrics).
//! Counters are always gathered; the per-line trace is opt-in because it
//! copies every non-blank line.

use crate::tree::Node;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the dispatch loop.
    pub total: Duration,
    /// Non-blank lines examined.
    pub lines: usize,
    /// Lines on which at least one rule fired.
    pub matched_lines: usize,
    /// Hit count for every rule in table order, including rules that never fired.
    pub rule_hits: Vec<RuleHits>,
}

impl RunMetrics {
    /// Lines no rule recognized.
    pub fn unmatched_lines(&self) -> usize {
        self.lines - self.matched_lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHits {
    pub rule: &'static str,
    pub count: usize,
}

/// Which rules fired on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTrace {
    /// 1-based line number in the raw input.
    pub number: usize,
    pub text: String,
    /// Names of the rules that fired, in firing order. Empty when the line
    /// was ignored.
    pub rules: Vec<&'static str>,
}

/// Parser output bundled with its metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub tree: Node,
    pub metrics: RunMetrics,
    /// Present only when tracing was requested.
    pub trace: Vec<LineTrace>,
}
