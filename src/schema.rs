//! Declarative output schemas.
//!
//! A [`Schema`] describes the shape a command's output tree must have:
//!
//! ```text
//! Schema::map()                      closed mapping; unknown keys are rejected
//!     .req("vrf", Schema::any(...))  required key
//!     .opt("cost", Schema::int())    optional key
//! Schema::any(child)                 any number of dynamically named children
//! Schema::one_of([...])              first matching alternative wins
//! Schema::kinds(TEXT | INT)          scalar accepting several kinds
//! ```
//!
//! [`validate`] reports every violation it finds rather than stopping at the
//! first one. An empty tree is reported as [`SchemaError::Empty`], which is
//! distinct from a structural mismatch: it means the command output had
//! nothing recognizable in it.

use crate::error::SchemaError;
use crate::tree::{Node, Path, Value};
use std::fmt;

bitflags::bitflags! {
    /// Scalar kinds accepted at a leaf.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValueKinds: u8 {
        const TEXT = 1 << 0;
        const INT  = 1 << 1;
        const BOOL = 1 << 2;
        const MAP  = 1 << 3;
    }
}

impl ValueKinds {
    fn of(value: &Value) -> ValueKinds {
        match value {
            Value::Text(_) => ValueKinds::TEXT,
            Value::Int(_) => ValueKinds::INT,
            Value::Bool(_) => ValueKinds::BOOL,
            Value::Map(_) => ValueKinds::MAP,
        }
    }
}

impl fmt::Display for ValueKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (ValueKinds::TEXT, "text"),
            (ValueKinds::INT, "integer"),
            (ValueKinds::BOOL, "boolean"),
            (ValueKinds::MAP, "mapping"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();
        f.write_str(&names.join(" or "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    Scalar(ValueKinds),
    /// Exact text value.
    Literal(String),
    /// Closed mapping with named fields.
    Map(Vec<Field>),
    /// Mapping whose keys are data; every child must match the inner schema.
    Wildcard(Box<Schema>),
    OneOf(Vec<Schema>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub optional: bool,
    pub schema: Schema,
}

impl Schema {
    pub fn text() -> Schema {
        Schema::Scalar(ValueKinds::TEXT)
    }

    pub fn int() -> Schema {
        Schema::Scalar(ValueKinds::INT)
    }

    pub fn boolean() -> Schema {
        Schema::Scalar(ValueKinds::BOOL)
    }

    pub fn kinds(kinds: ValueKinds) -> Schema {
        Schema::Scalar(kinds)
    }

    pub fn literal(text: impl Into<String>) -> Schema {
        Schema::Literal(text.into())
    }

    /// A mapping that must have no keys at all (used for set-like leaves).
    pub fn empty() -> Schema {
        Schema::Map(Vec::new())
    }

    pub fn any(child: impl Into<Schema>) -> Schema {
        Schema::Wildcard(Box::new(child.into()))
    }

    pub fn one_of(alternatives: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::OneOf(alternatives.into_iter().collect())
    }

    pub fn map() -> MapSchema {
        MapSchema::default()
    }
}

/// Builder for [`Schema::Map`].
#[derive(Debug, Clone, Default)]
pub struct MapSchema {
    fields: Vec<Field>,
}

impl MapSchema {
    pub fn req(mut self, key: &str, schema: impl Into<Schema>) -> Self {
        self.fields.push(Field { key: key.to_string(), optional: false, schema: schema.into() });
        self
    }

    pub fn opt(mut self, key: &str, schema: impl Into<Schema>) -> Self {
        self.fields.push(Field { key: key.to_string(), optional: true, schema: schema.into() });
        self
    }
}

impl From<MapSchema> for Schema {
    fn from(value: MapSchema) -> Self {
        Schema::Map(value.fields)
    }
}

/// One place where a tree disagrees with its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: Path,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    MissingKey,
    UnexpectedKey,
    WrongKind { expected: ValueKinds, found: &'static str },
    LiteralMismatch { expected: String, found: String },
    NoAlternative,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingKey => write!(f, "{}: required key is missing", self.path),
            ViolationKind::UnexpectedKey => write!(f, "{}: key is not allowed here", self.path),
            ViolationKind::WrongKind { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}", self.path)
            }
            ViolationKind::LiteralMismatch { expected, found } => {
                write!(f, "{}: expected {expected:?}, found {found:?}", self.path)
            }
            ViolationKind::NoAlternative => write!(f, "{}: matches none of the allowed shapes", self.path),
        }
    }
}

/// Check `tree` against `schema`.
///
/// Validation is pure: it never mutates the tree, so validating the same
/// tree twice yields the same outcome.
pub fn validate(tree: &Node, schema: &Schema) -> Result<(), SchemaError> {
    if tree.is_empty() {
        return Err(SchemaError::Empty);
    }
    let mut violations = Vec::new();
    check_node(tree, schema, &Path::root(), &mut violations);
    if violations.is_empty() { Ok(()) } else { Err(SchemaError::Mismatch(violations)) }
}

fn check_value(value: &Value, schema: &Schema, path: &Path, out: &mut Vec<Violation>) {
    match (schema, value) {
        (Schema::Scalar(kinds), _) => {
            if !kinds.contains(ValueKinds::of(value)) {
                out.push(Violation {
                    path: path.clone(),
                    kind: ViolationKind::WrongKind { expected: *kinds, found: value.kind_name() },
                });
            }
        }
        (Schema::Literal(expected), Value::Text(found)) if expected == found => {}
        (Schema::Literal(expected), _) => {
            let found = match value {
                Value::Text(s) => s.clone(),
                Value::Int(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Map(_) => "<mapping>".to_string(),
            };
            out.push(Violation {
                path: path.clone(),
                kind: ViolationKind::LiteralMismatch { expected: expected.clone(), found },
            });
        }
        (Schema::OneOf(alternatives), _) => {
            let matched = alternatives.iter().any(|alt| {
                let mut scratch = Vec::new();
                check_value(value, alt, path, &mut scratch);
                scratch.is_empty()
            });
            if !matched {
                out.push(Violation { path: path.clone(), kind: ViolationKind::NoAlternative });
            }
        }
        (Schema::Map(_) | Schema::Wildcard(_), Value::Map(node)) => check_node(node, schema, path, out),
        (Schema::Map(_) | Schema::Wildcard(_), other) => out.push(Violation {
            path: path.clone(),
            kind: ViolationKind::WrongKind { expected: ValueKinds::MAP, found: other.kind_name() },
        }),
    }
}

fn check_node(node: &Node, schema: &Schema, path: &Path, out: &mut Vec<Violation>) {
    match schema {
        Schema::Map(fields) => {
            for field in fields {
                let child = path.join([field.key.as_str()]);
                match node.get(&field.key) {
                    Some(value) => check_value(value, &field.schema, &child, out),
                    None if field.optional => {}
                    None => out.push(Violation { path: child, kind: ViolationKind::MissingKey }),
                }
            }
            for key in node.keys() {
                if !fields.iter().any(|f| f.key == key) {
                    out.push(Violation { path: path.join([key]), kind: ViolationKind::UnexpectedKey });
                }
            }
        }
        Schema::Wildcard(child) => {
            for (key, value) in node.iter() {
                check_value(value, child, &path.join([key]), out);
            }
        }
        other => check_value(&Value::Map(node.clone()), other, path, out),
    }
}
