//! Context cursor.
//!
//! Show-command output is hierarchical but line-oriented: a line such as
//! `Area BACKBONE(0)` establishes where all following lines belong until
//! another anchor replaces it. The cursor tracks those anchors as a stack of
//! fixed [`Scope`] levels:
//!
//! ```text
//! Vrf            ["vrf", "default"]
//! AddressFamily  ["address_family", "ipv4"]
//! Instance       ["instance", "1"]
//! Area           ["areas", "0.0.0.0"]
//! Collection     ["interfaces"]
//! Entry          ["GigabitEthernet0/0/0/0"]
//! Detail         ["neighbors", "2.2.2.2"]
//! ```
//!
//! Setting a level replaces its segments and forgets every deeper level, so a
//! new area can never inherit the previous area's interface. Pending values
//! (`vars`) and named sub-record handles (`views`) are bound to a level and are
//! dropped together with it.

use crate::error::RuleFault;
use crate::tree::{Path, Value};
use std::collections::HashMap;
use std::fmt;

/// Nesting levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    Vrf,
    AddressFamily,
    Instance,
    Area,
    Collection,
    Entry,
    Detail,
}

impl Scope {
    pub const COUNT: usize = 7;

    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Scope::Vrf => "vrf",
            Scope::AddressFamily => "address family",
            Scope::Instance => "instance",
            Scope::Area => "area",
            Scope::Collection => "collection",
            Scope::Entry => "entry",
            Scope::Detail => "detail record",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
struct Bound<T> {
    scope: Scope,
    value: T,
}

#[derive(Debug, Clone, Default)]
pub struct Cursor {
    levels: [Option<Vec<String>>; Scope::COUNT],
    vars: HashMap<&'static str, Bound<Value>>,
    views: HashMap<&'static str, Bound<Path>>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the segments at `scope` and reset everything nested below it.
    ///
    /// Vars and views bound at `scope` or deeper are discarded, so handlers
    /// must read the pending values they need before moving the cursor.
    pub fn set_scope<I, S>(&mut self, scope: Scope, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = scope.index();
        self.levels[idx] = Some(segments.into_iter().map(Into::into).collect());
        for level in &mut self.levels[idx + 1..] {
            *level = None;
        }
        self.vars.retain(|_, bound| bound.scope < scope);
        self.views.retain(|_, bound| bound.scope < scope);
    }

    pub fn is_set(&self, scope: Scope) -> bool {
        self.levels[scope.index()].is_some()
    }

    /// Absolute path of `scope`, or `None` when it or any outer level is unset.
    pub fn current_path(&self, scope: Scope) -> Option<Path> {
        let mut path = Path::root();
        for level in &self.levels[..=scope.index()] {
            path.extend(level.as_ref()?.iter().map(String::as_str));
        }
        Some(path)
    }

    pub fn path(&self, scope: Scope) -> Result<Path, RuleFault> {
        self.current_path(scope).ok_or(RuleFault::UnsetScope(scope))
    }

    /// The last segment recorded at `scope` (its key).
    pub fn key(&self, scope: Scope) -> Result<&str, RuleFault> {
        self.levels[scope.index()]
            .as_ref()
            .and_then(|segments| segments.last())
            .map(String::as_str)
            .ok_or(RuleFault::UnsetScope(scope))
    }

    /// Remember `value` under `name` until `scope` is next replaced.
    pub fn set_var(&mut self, scope: Scope, name: &'static str, value: impl Into<Value>) {
        self.vars.insert(name, Bound { scope, value: value.into() });
    }

    pub fn try_var(&self, name: &'static str) -> Option<&Value> {
        self.vars.get(name).map(|bound| &bound.value)
    }

    pub fn var(&self, name: &'static str) -> Result<&Value, RuleFault> {
        self.try_var(name).ok_or(RuleFault::UnsetVariable(name))
    }

    pub fn text_var(&self, name: &'static str) -> Result<&str, RuleFault> {
        let value = self.var(name)?;
        value.as_text().ok_or(RuleFault::VariableType { name, expected: "text", found: value.kind_name() })
    }

    pub fn int_var(&self, name: &'static str) -> Result<i64, RuleFault> {
        let value = self.var(name)?;
        value.as_int().ok_or(RuleFault::VariableType { name, expected: "integer", found: value.kind_name() })
    }

    pub fn take_var(&mut self, name: &'static str) -> Option<Value> {
        self.vars.remove(name).map(|bound| bound.value)
    }

    /// Bind a named handle to a sub-record of the tree.
    ///
    /// A view is a location, not a copy: writes through it land in the tree.
    pub fn set_view(&mut self, scope: Scope, name: &'static str, path: Path) {
        self.views.insert(name, Bound { scope, value: path });
    }

    pub fn view(&self, name: &'static str) -> Result<&Path, RuleFault> {
        self.views.get(name).map(|bound| &bound.value).ok_or(RuleFault::UnsetView(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance_cursor() -> Cursor {
        let mut cursor = Cursor::new();
        cursor.set_scope(Scope::Vrf, ["vrf", "default"]);
        cursor.set_scope(Scope::AddressFamily, ["address_family", "ipv4"]);
        cursor.set_scope(Scope::Instance, ["instance", "1"]);
        cursor
    }

    #[test]
    fn current_path_concatenates_levels() {
        let mut cursor = instance_cursor();
        cursor.set_scope(Scope::Area, ["areas", "0.0.0.0"]);
        let path = cursor.current_path(Scope::Area).unwrap();
        assert_eq!(path.segments(), ["vrf", "default", "address_family", "ipv4", "instance", "1", "areas", "0.0.0.0"]);
        assert_eq!(cursor.key(Scope::Area), Ok("0.0.0.0"));
    }

    #[test]
    fn unset_level_yields_none() {
        let cursor = instance_cursor();
        assert!(cursor.current_path(Scope::Area).is_none());
        assert_eq!(cursor.path(Scope::Entry), Err(RuleFault::UnsetScope(Scope::Entry)));
    }

    #[test]
    fn replacing_a_level_forgets_deeper_levels() {
        let mut cursor = instance_cursor();
        cursor.set_scope(Scope::Area, ["areas", "0.0.0.0"]);
        cursor.set_scope(Scope::Collection, ["interfaces"]);
        cursor.set_scope(Scope::Entry, ["Gi0/0/0/0"]);

        cursor.set_scope(Scope::Area, ["areas", "0.0.0.1"]);
        assert!(!cursor.is_set(Scope::Collection));
        assert!(!cursor.is_set(Scope::Entry));
        assert!(cursor.is_set(Scope::Instance));
    }

    #[test]
    fn bindings_die_with_their_level() {
        let mut cursor = instance_cursor();
        cursor.set_var(Scope::Instance, "area_type", "normal");
        cursor.set_var(Scope::Area, "ip_address", "10.0.0.1");
        cursor.set_view(Scope::Entry, "bfd", Path::root());

        cursor.set_scope(Scope::Area, ["areas", "0.0.0.1"]);
        assert_eq!(cursor.text_var("area_type"), Ok("normal"));
        assert_eq!(cursor.try_var("ip_address"), None);
        assert_eq!(cursor.view("bfd"), Err(RuleFault::UnsetView("bfd")));
    }

    #[test]
    fn variable_kind_is_checked() {
        let mut cursor = Cursor::new();
        cursor.set_var(Scope::Vrf, "age", 10);
        assert_eq!(cursor.int_var("age"), Ok(10));
        assert_eq!(
            cursor.text_var("age"),
            Err(RuleFault::VariableType { name: "age", expected: "text", found: "integer" })
        );
        assert_eq!(cursor.take_var("age"), Some(Value::Int(10)));
        assert_eq!(cursor.var("age"), Err(RuleFault::UnsetVariable("age")));
    }
}
