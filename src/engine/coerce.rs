//! Field coercions shared by rule actions.

use crate::error::RuleFault;
use regex::Captures;
use std::net::Ipv4Addr;

/// Typed access to named capture groups.
pub trait CapturesExt {
    /// Text of a group that must have participated in the match.
    fn text(&self, group: &'static str) -> Result<&str, RuleFault>;

    fn opt_text(&self, group: &'static str) -> Option<&str>;

    /// Decimal integer from a required group.
    fn int(&self, group: &'static str) -> Result<i64, RuleFault>;

    fn opt_int(&self, group: &'static str) -> Result<Option<i64>, RuleFault>;

    /// Number that may carry a fractional part; the fraction is dropped.
    fn truncated(&self, group: &'static str) -> Result<i64, RuleFault>;
}

impl CapturesExt for Captures<'_> {
    fn text(&self, group: &'static str) -> Result<&str, RuleFault> {
        self.opt_text(group).ok_or(RuleFault::MissingCapture(group))
    }

    fn opt_text(&self, group: &'static str) -> Option<&str> {
        self.name(group).map(|m| m.as_str())
    }

    fn int(&self, group: &'static str) -> Result<i64, RuleFault> {
        parse_int(group, self.text(group)?)
    }

    fn opt_int(&self, group: &'static str) -> Result<Option<i64>, RuleFault> {
        self.opt_text(group).map(|raw| parse_int(group, raw)).transpose()
    }

    fn truncated(&self, group: &'static str) -> Result<i64, RuleFault> {
        let raw = self.text(group)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
            .ok_or_else(|| RuleFault::InvalidNumber { group, value: raw.to_string() })
    }
}

fn parse_int(group: &'static str, raw: &str) -> Result<i64, RuleFault> {
    raw.parse::<i64>().map_err(|_| RuleFault::InvalidNumber { group, value: raw.to_string() })
}

/// Canonical dotted-quad form of an OSPF area identifier.
///
/// Accepts `BACKBONE(n)`, a bare decimal (`0`, `1`) and dotted-quad input.
/// Anything else is returned unchanged.
pub fn normalize_area(raw: &str) -> String {
    let inner = crate::regex!(r"^BACKBONE\((?P<area>[^)]+)\)$")
        .captures(raw)
        .and_then(|caps| caps.name("area"))
        .map_or(raw, |m| m.as_str());

    if let Ok(number) = inner.parse::<u32>() {
        return Ipv4Addr::from(number).to_string();
    }
    if let Ok(addr) = inner.parse::<Ipv4Addr>() {
        return addr.to_string();
    }
    inner.to_string()
}

/// Key for records identified by two fields, e.g. `"0.0.0.1 4.4.4.4"`.
pub fn composite_key(first: &str, second: &str) -> String {
    format!("{first} {second}")
}

/// Lowercase a state or type name and use dashes as separators.
pub fn state_name(raw: &str) -> String {
    raw.to_lowercase().replace('_', "-")
}

/// `up` is true; `down` and `unknown` are false.
pub fn is_up(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("up")
}

/// Dotted netmask for a prefix length (`24` becomes `255.255.255.0`).
pub fn prefix_mask(len: u32) -> Option<String> {
    if len > 32 {
        return None;
    }
    let bits = if len == 0 { 0 } else { u32::MAX << (32 - len) };
    Some(Ipv4Addr::from(bits).to_string())
}
