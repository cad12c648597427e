//! Line dispatch.
//!
//! The parser walks the command output one line at a time and offers each
//! line to an ordered rule table:
//!
//! ```text
//! raw text ── lines() ── trim ── skip blank ──┐
//!                                             v
//!             rules[0]  rules[1]  ...  rules[n-1]
//!               │ no match: try next rule
//!               │ match: run action on ParseState
//!               │   policy Stop     -> next line
//!               │   policy Continue -> keep offering this line
//!               v
//!           ParseState { cursor, tree }
//! ```
//!
//! Lines that no rule recognizes are ignored; the output of a show command is
//! full of banners and decoration that carry no data. A rule action that
//! fails aborts the run with a [`ParseError`] naming the rule and the line.
//!
//! The same rule table applied to the same text always produces the same
//! tree: the only state is the [`ParseState`] created for this run.
//!
//! ## Debugging
//!
//! Rule hits are logged at `debug` and ignored lines at `trace`
//! (`RUST_LOG=showparse=trace`).

use super::metrics::{LineTrace, RuleHits, RunMetrics, RunResult};
use super::state::ParseState;
use crate::error::ParseError;
use crate::tree::Node;
use crate::{MatchPolicy, Rule};
use log::{debug, trace};
use std::time::Instant;

/// Applies a rule table to command output.
///
/// Usage: `Parser::new(&rules).run(text)`.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'r> {
    rules: &'r [Rule],
}

impl<'r> Parser<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Self { rules }
    }

    /// Parse `text` and return the output tree.
    pub fn run(&self, text: &str) -> Result<Node, ParseError> {
        Ok(self.run_with_metrics(text, false)?.tree)
    }

    /// Parse `text`, collecting rule hit counts and (when `collect_trace` is
    /// set) a per-line record of which rules fired.
    pub fn run_with_metrics(&self, text: &str, collect_trace: bool) -> Result<RunResult, ParseError> {
        let start = Instant::now();
        let mut state = ParseState::new();
        let mut hits = vec![0usize; self.rules.len()];
        let mut metrics = RunMetrics::default();
        let mut lines_trace = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let number = idx + 1;
            metrics.lines += 1;

            let fired = self.dispatch_line(line, number, &mut state, &mut hits)?;
            if fired.is_empty() {
                trace!("line {number}: ignored {line:?}");
            } else {
                metrics.matched_lines += 1;
            }
            if collect_trace {
                lines_trace.push(LineTrace { number, text: line.to_string(), rules: fired });
            }
        }

        metrics.rule_hits =
            self.rules.iter().zip(hits).map(|(rule, count)| RuleHits { rule: rule.name, count }).collect();
        metrics.total = start.elapsed();
        debug!(
            "parsed {} line(s), {} recognized, in {:?}",
            metrics.lines, metrics.matched_lines, metrics.total
        );

        Ok(RunResult { tree: state.into_tree(), metrics, trace: lines_trace })
    }

    fn dispatch_line(
        &self,
        line: &str,
        number: usize,
        state: &mut ParseState,
        hits: &mut [usize],
    ) -> Result<Vec<&'static str>, ParseError> {
        let mut fired = Vec::new();
        for (id, rule) in self.rules.iter().enumerate() {
            let Some(caps) = rule.pattern.captures(line) else {
                continue;
            };
            debug!("line {number}: rule `{}` matched {line:?}", rule.name);

            (rule.action)(&caps, &mut *state).map_err(|fault| ParseError {
                rule: rule.name,
                line: number,
                text: line.to_string(),
                fault,
            })?;
            hits[id] += 1;
            fired.push(rule.name);

            if rule.policy == MatchPolicy::Stop {
                break;
            }
        }
        Ok(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Scope;
    use crate::error::RuleFault;
    use crate::tree::Value;

    fn rules() -> Vec<Rule> {
        vec![
            rule! {
                name: "section",
                pattern: r"^Section +(?P<name>\S+)$",
                action: |caps, st| {
                    st.cursor.set_scope(Scope::Vrf, ["sections", caps.text("name")?]);
                    st.scope_node(Scope::Vrf)?;
                    Ok(())
                },
            },
            rule! {
                name: "generic counter",
                pattern: r"^Count +(?P<n>\d+)",
                policy: Continue,
                action: |caps, st| {
                    let n = caps.int("n")?;
                    st.scope_node(Scope::Vrf)?.insert("count", n);
                    Ok(())
                },
            },
            rule! {
                name: "counter with unit",
                pattern: r"^Count +\d+ +(?P<unit>\w+)$",
                action: |caps, st| {
                    let unit = caps.text("unit")?.to_string();
                    st.scope_node(Scope::Vrf)?.insert("unit", unit);
                    Ok(())
                },
            },
            rule! {
                name: "shadowed counter",
                pattern: r"^Count",
                action: |_caps, st| {
                    st.scope_node(Scope::Vrf)?.insert("shadowed", true);
                    Ok(())
                },
            },
        ]
    }

    #[test]
    fn stop_policy_ends_dispatch_for_the_line() {
        let rules = rules();
        let tree = Parser::new(&rules).run("Section a\nCount 3 packets\n").unwrap();
        let section = tree.lookup(["sections", "a"]).and_then(Value::as_map).unwrap();
        assert_eq!(section.get("count"), Some(&Value::Int(3)));
        assert_eq!(section.get("unit"), Some(&Value::Text("packets".to_string())));
        assert!(!section.contains_key("shadowed"));
    }

    #[test]
    fn continue_policy_falls_through_to_later_rules() {
        let rules = rules();
        let tree = Parser::new(&rules).run("Section a\nCount 3\n").unwrap();
        let section = tree.lookup(["sections", "a"]).and_then(Value::as_map).unwrap();
        assert_eq!(section.get("count"), Some(&Value::Int(3)));
        assert_eq!(section.get("shadowed"), Some(&Value::Bool(true)));
    }

    #[test]
    fn blank_and_unrecognized_lines_are_ignored() {
        let rules = rules();
        let text = "\r\n  ------ banner ------\r\n  Section b  \r\n\r\n";
        let result = Parser::new(&rules).run_with_metrics(text, true).unwrap();
        assert!(result.tree.lookup(["sections", "b"]).is_some());
        assert_eq!(result.metrics.lines, 2);
        assert_eq!(result.metrics.matched_lines, 1);
        assert_eq!(result.metrics.unmatched_lines(), 1);
        assert_eq!(
            result.trace,
            vec![
                LineTrace { number: 2, text: "------ banner ------".to_string(), rules: vec![] },
                LineTrace { number: 3, text: "Section b".to_string(), rules: vec!["section"] },
            ]
        );
    }

    #[test]
    fn rule_hits_follow_table_order() {
        let rules = rules();
        let result = Parser::new(&rules).run_with_metrics("Section a\nCount 1\nCount 2 s\n", false).unwrap();
        let hits: Vec<(&str, usize)> = result.metrics.rule_hits.iter().map(|h| (h.rule, h.count)).collect();
        assert_eq!(
            hits,
            vec![("section", 1), ("generic counter", 2), ("counter with unit", 1), ("shadowed counter", 1)]
        );
        assert!(result.trace.is_empty());
    }

    #[test]
    fn failing_action_reports_rule_and_line() {
        let rules = rules();
        let err = Parser::new(&rules).run("\nCount 1\n").unwrap_err();
        assert_eq!(err.rule, "generic counter");
        assert_eq!(err.line, 2);
        assert_eq!(err.fault, RuleFault::UnsetScope(Scope::Vrf));
    }

    #[test]
    fn same_input_gives_same_tree() {
        let rules = rules();
        let text = "Section a\nCount 1 s\nSection b\nCount 2\n";
        let parser = Parser::new(&rules);
        assert_eq!(parser.run(text).unwrap(), parser.run(text).unwrap());
    }
}
