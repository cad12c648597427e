//! Per-run mutable state handed to rule actions.

use super::cursor::{Cursor, Scope};
use crate::error::RuleFault;
use crate::tree::{Node, Path};

/// The output tree under construction plus the cursor that says where the
/// current line belongs. Created fresh for every run; never shared.
#[derive(Debug, Default)]
pub struct ParseState {
    pub cursor: Cursor,
    pub tree: Node,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping at an absolute path, created on demand.
    pub fn node_mut(&mut self, path: &Path) -> Result<&mut Node, RuleFault> {
        self.tree.get_or_create(path)
    }

    /// Mapping at the cursor's current `scope`.
    pub fn scope_node(&mut self, scope: Scope) -> Result<&mut Node, RuleFault> {
        let path = self.cursor.path(scope)?;
        self.tree.get_or_create(&path)
    }

    /// Mapping behind a named view.
    pub fn view_node(&mut self, name: &'static str) -> Result<&mut Node, RuleFault> {
        let path = self.cursor.view(name)?.clone();
        self.tree.get_or_create(&path)
    }

    pub fn into_tree(self) -> Node {
        self.tree
    }
}
