use crate::adapter::CommandAdapter;
use crate::engine::{self, LineTrace, RunMetrics};
use crate::error::{Error, Result};
use crate::rules::ospf::Command;
use crate::schema;
use crate::tree::Node;
use log::{info, warn};
use std::time::Duration;

/// Options that affect a single parse.
#[derive(Debug, Clone)]
pub struct Options {
    /// Check the finished tree against the command schema. On by default.
    pub validate: bool,
    /// Record which rules fired on every line.
    pub trace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { validate: true, trace: false }
    }
}

/// Result from [`parse_with`] and [`parse_command`].
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub command: Command,
    /// The output tree.
    pub tree: Node,
    /// Line and rule counters for the run.
    pub metrics: RunMetrics,
    /// Per-line rule trace; empty unless [`Options::trace`] was set.
    pub trace: Vec<LineTrace>,
    /// Time spent dispatching lines.
    pub elapsed: Duration,
}

/// Parse the output of `command` and validate it.
///
/// `command` is either the command line (`"show ospf vrf all-inclusive"`) or
/// its short name (`"process"`).
///
/// # Example
/// ```
/// let text = "Neighbors for OSPF 1\n\
///             Neighbor 2.2.2.2, interface address 10.1.2.2\n\
///             In the area 0 via interface GigabitEthernet0/0/0/0\n\
///             Neighbor priority is 1, State is FULL, 6 state changes\n\
///             DR is 10.1.2.1 BDR is 10.1.2.2\n\
///             Total neighbor count: 1";
/// let tree = showparse::parse("show ospf vrf all-inclusive neighbor detail", text).unwrap();
/// let state = tree.lookup(["vrf", "default", "address_family", "ipv4", "instance", "1", "areas", "0.0.0.0",
///     "interfaces", "GigabitEthernet0/0/0/0", "neighbors", "2.2.2.2", "state"]);
/// assert_eq!(state.and_then(|v| v.as_text()), Some("full"));
/// ```
pub fn parse(command: &str, text: &str) -> Result<Node> {
    Ok(parse_with(command, text, &Options::default())?.tree)
}

/// Parse the output of `command` with explicit `options`.
pub fn parse_with(command: &str, text: &str, options: &Options) -> Result<ParseResult> {
    let command = Command::from_name(command).ok_or_else(|| Error::UnknownCommand(command.to_string()))?;
    run(command, text, options)
}

/// Fetch the output of `command` through `adapter`, then parse it.
///
/// The adapter is called exactly once; its errors are returned unchanged.
pub fn parse_command(adapter: &dyn CommandAdapter, command: &str, options: &Options) -> Result<ParseResult> {
    let command = Command::from_name(command).ok_or_else(|| Error::UnknownCommand(command.to_string()))?;
    let text = adapter.execute(command.cli())?;
    run(command, &text, options)
}

fn run(command: Command, text: &str, options: &Options) -> Result<ParseResult> {
    let parser = engine::Parser::new(command.rules());
    let run = parser.run_with_metrics(text, options.trace)?;
    info!(
        "{}: {} line(s), {} matched, {} key(s) at top level",
        command.name(),
        run.metrics.lines,
        run.metrics.matched_lines,
        run.tree.len()
    );

    if options.validate {
        if let Err(err) = schema::validate(&run.tree, command.schema()) {
            warn!("{}: {err}", command.name());
            return Err(err.into());
        }
    }

    Ok(ParseResult {
        command,
        elapsed: run.metrics.total,
        tree: run.tree,
        metrics: run.metrics,
        trace: run.trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::CannedOutput;
    use crate::error::SchemaError;

    const NEIGHBORS: &str = "
        Neighbors for OSPF 1

         Neighbor 2.2.2.2, interface address 10.1.2.2
            In the area 0 via interface GigabitEthernet0/0/0/0
            Neighbor priority is 1, State is FULL, 6 state changes
            DR is 10.1.2.1 BDR is 10.1.2.2

        Total neighbor count: 1
    ";

    #[test]
    fn parse_accepts_short_and_full_names() {
        let by_cli = parse("show ospf vrf all-inclusive neighbor detail", NEIGHBORS).unwrap();
        let by_name = parse("neighbor-detail", NEIGHBORS).unwrap();
        assert_eq!(by_cli, by_name);
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse("show ip route", NEIGHBORS).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(cmd) if cmd == "show ip route"));
    }

    #[test]
    fn empty_output_is_distinct_from_mismatch() {
        let err = parse("neighbor-detail", "   \n\r\n  ").unwrap_err();
        assert!(err.is_empty_output());

        // Recognized lines that leave required keys unset are a mismatch.
        let err = parse("neighbor-detail", "Neighbors for OSPF 1").unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::Mismatch(_))));
    }

    #[test]
    fn validation_can_be_skipped() {
        let options = Options { validate: false, ..Options::default() };
        let res = parse_with("neighbor-detail", "Neighbors for OSPF 1", &options).unwrap();
        assert!(res.tree.lookup(["vrf", "default", "address_family", "ipv4", "instance", "1"]).is_some());
    }

    #[test]
    fn parse_with_reports_metrics_and_trace() {
        let options = Options { trace: true, ..Options::default() };
        let res = parse_with("neighbor-detail", NEIGHBORS, &options).unwrap();

        assert_eq!(res.command, Command::NeighborDetail);
        assert_eq!(res.metrics.lines, 6);
        assert_eq!(res.metrics.matched_lines, 6);
        assert_eq!(res.metrics.unmatched_lines(), 0);
        assert_eq!(res.trace.len(), 6);
        assert_eq!(res.trace[0].rules, vec!["neighbors for instance"]);
        assert_eq!(res.elapsed, res.metrics.total);
    }

    #[test]
    fn parse_command_uses_the_adapter() {
        let adapter = CannedOutput::new().with(Command::NeighborDetail.cli(), NEIGHBORS);
        let res = parse_command(&adapter, "neighbor-detail", &Options::default()).unwrap();
        assert_eq!(res.tree, parse("neighbor-detail", NEIGHBORS).unwrap());

        let err = parse_command(&adapter, "process", &Options::default()).unwrap_err();
        assert!(matches!(err, Error::Adapter(_)));
    }
}
