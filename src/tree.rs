//! Output tree.
//!
//! Every command produces one nested mapping. Interior nodes are [`Node`]s
//! (ordered string-keyed maps) and leaves are scalar [`Value`]s. Keys are
//! always text; numeric identifiers such as LSA type codes or TLV indices are
//! rendered in decimal before they become keys, so serialized output never
//! mixes key types.
//!
//! ```text
//! Node ── "vrf" ── Node ── "default" ── Node ── "address_family" ── ...
//!                                   └── "router_id" ── Value::Text("1.1.1.1")
//! ```
//!
//! Paths are absolute from the root of the tree and are created on demand
//! with [`Node::get_or_create`].

use crate::error::RuleFault;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A leaf or subtree in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
    Bool(bool),
    Map(Node),
}

impl Value {
    /// Short name of the variant, used in error messages and schema reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Map(_) => "mapping",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Node> {
        match self {
            Value::Map(node) => Some(node),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Map(value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Map(node) => node.serialize(serializer),
        }
    }
}

/// An absolute location in the tree: the list of keys from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// Append `segments` in place.
    pub fn extend<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(segments.into_iter().map(Into::into));
    }

    /// Return a new path with `segments` appended.
    pub fn join<I, S>(&self, segments: I) -> Path
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = self.clone();
        path.extend(segments);
        path
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join(" / "))
    }
}

/// Ordered mapping from text keys to values.
///
/// Equality ignores insertion order, so two trees built from the same facts
/// in a different order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    entries: IndexMap<String, Value>,
}

impl Node {
    pub fn new() -> Self {
        Node { entries: IndexMap::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Set `key` only when it is not present yet.
    pub fn insert_absent(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Look up a value by a sequence of keys relative to this node.
    pub fn lookup<'k, I>(&self, keys: I) -> Option<&Value>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut keys = keys.into_iter();
        let first = keys.next()?;
        let mut current = self.entries.get(first)?;
        for key in keys {
            current = current.as_map()?.entries.get(key)?;
        }
        Some(current)
    }

    /// Look up the mapping at `path`. The root path yields `self`.
    pub fn node_at(&self, path: &Path) -> Option<&Node> {
        let mut node = self;
        for segment in path.segments() {
            node = node.entries.get(segment)?.as_map()?;
        }
        Some(node)
    }

    /// Return the child mapping under `key`, creating it when absent.
    pub fn child_mut(&mut self, key: &str) -> Result<&mut Node, RuleFault> {
        let entry = self.entries.entry(key.to_string()).or_insert_with(|| Value::Map(Node::new()));
        match entry {
            Value::Map(child) => Ok(child),
            other => Err(RuleFault::PathConflict { path: key.to_string(), found: other.kind_name() }),
        }
    }

    /// Walk `path` from this node, creating any missing intermediate mapping.
    ///
    /// Fails when a segment along the way already holds a scalar.
    pub fn get_or_create(&mut self, path: &Path) -> Result<&mut Node, RuleFault> {
        let mut node = self;
        for (depth, segment) in path.segments().iter().enumerate() {
            let entry = node.entries.entry(segment.clone()).or_insert_with(|| Value::Map(Node::new()));
            node = match entry {
                Value::Map(child) => child,
                other => {
                    let prefix: Path = path.segments()[..=depth].iter().cloned().collect();
                    return Err(RuleFault::PathConflict { path: prefix.to_string(), found: other.kind_name() });
                }
            };
        }
        Ok(node)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_builds_missing_levels() {
        let mut tree = Node::new();
        let path: Path = ["vrf", "default", "address_family", "ipv4"].into_iter().collect();
        tree.get_or_create(&path).unwrap().insert("router_id", "1.1.1.1");

        assert_eq!(
            tree.lookup(["vrf", "default", "address_family", "ipv4", "router_id"]).and_then(Value::as_text),
            Some("1.1.1.1")
        );
        // Second walk reuses the same mapping.
        tree.get_or_create(&path).unwrap().insert("enable", true);
        assert_eq!(tree.node_at(&path).map(Node::len), Some(2));
    }

    #[test]
    fn get_or_create_refuses_to_descend_through_scalars() {
        let mut tree = Node::new();
        tree.insert("cost", 10);
        let path: Path = ["cost", "inner"].into_iter().collect();
        let err = tree.get_or_create(&path).unwrap_err();
        assert_eq!(err, RuleFault::PathConflict { path: "cost".to_string(), found: "integer" });
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut a = Node::new();
        a.insert("x", 1);
        a.insert("y", "two");
        let mut b = Node::new();
        b.insert("y", "two");
        b.insert("x", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn insert_absent_keeps_first_value() {
        let mut node = Node::new();
        node.insert_absent("7 0", 1);
        node.insert_absent("7 0", 2);
        assert_eq!(node.get("7 0"), Some(&Value::Int(1)));
    }

    #[test]
    fn serializes_as_plain_json_objects() {
        let mut node = Node::new();
        node.child_mut("bfd").unwrap().insert("enable", false);
        node.insert("cost", 1);
        node.insert("name", "Gi0/0/0/0");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"bfd":{"enable":false},"cost":1,"name":"Gi0/0/0/0"}"#);
    }
}
