//! Line-oriented extraction engine.
//!
//! This module is the entry point for turning raw show-command text into an
//! output tree. It is split into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! rule table (Vec<Rule>) ─────────────┐
//!                                     v
//! raw text ── Parser::run_with_metrics (parser.rs)
//!               - one line at a time, blank lines skipped
//!               - rules tried in order, Stop / Continue policy
//!                                     │ rule action
//!                                     v
//!                     ParseState (state.rs)
//!                       - Cursor (cursor.rs): scope stack,
//!                         pending vars, views
//!                       - Node tree (crate::tree)
//!                                     │
//!                                     v
//!                     RunResult { tree, metrics, trace } (metrics.rs)
//! ```
//!
//! Rule actions use the coercions in `coerce.rs` to turn captured text into
//! typed leaves (integers, booleans, canonical area identifiers).
//!
//! ## Responsibilities by module
//!
//! - `cursor.rs`: the scope stack and everything bound to it.
//! - `state.rs`: cursor plus output tree, with path helpers for actions.
//! - `parser.rs`: the dispatch loop.
//! - `coerce.rs`: capture access and value normalization.
//! - `metrics.rs`: counters and the optional per-line trace.
//!
//! ## Adding a command
//!
//! Write a rule table under `src/rules/**`, a schema for its output, and add
//! a variant to `Command` so the API can find both.

#[path = "engine/coerce.rs"]
mod coerce;
#[path = "engine/cursor.rs"]
mod cursor;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/state.rs"]
mod state;

pub use coerce::{CapturesExt, composite_key, is_up, normalize_area, prefix_mask, state_name};
pub use cursor::Scope;
pub use metrics::{LineTrace, RuleHits, RunMetrics};
pub use parser::Parser;
pub use state::ParseState;
