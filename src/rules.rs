//! Per-command rule tables, grouped by protocol.

pub mod ospf;
