//! # Document
//!
//! Owns a content tree and answers every navigation question by [`NodePath`].
//!
//! Traversal is stateless: `next_in_pre_order` / `previous_in_pre_order` take
//! the current path and a scope root and return the neighbouring path, the
//! same steps a DOM `TreeWalker` rooted at `scope` would take.

use crate::error::{TreeError, TreeResult};
use crate::node::Node;
use crate::path::NodePath;
use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn node(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(&self.root, |node, &index| node.child(index))
    }

    /// Like [`Document::node`], but a missing node is an error
    pub fn get(&self, path: &NodePath) -> TreeResult<&Node> {
        self.node(path)
            .ok_or_else(|| TreeError::NodeNotFound(path.clone()))
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.node(path).is_some()
    }

    pub fn is_text(&self, path: &NodePath) -> bool {
        self.node(path).is_some_and(Node::is_text)
    }

    pub fn parent(&self, path: &NodePath) -> Option<NodePath> {
        if !self.contains(path) {
            return None;
        }
        path.parent()
    }

    pub fn child(&self, path: &NodePath, index: usize) -> Option<NodePath> {
        self.node(path)?.child(index)?;
        Some(path.child(index))
    }

    pub fn first_child(&self, path: &NodePath) -> Option<NodePath> {
        self.child(path, 0)
    }

    pub fn last_child(&self, path: &NodePath) -> Option<NodePath> {
        let count = self.node(path)?.children().len();
        count.checked_sub(1).map(|last| path.child(last))
    }

    pub fn previous_sibling(&self, path: &NodePath) -> Option<NodePath> {
        if !self.contains(path) {
            return None;
        }
        let index = path.index()?.checked_sub(1)?;
        path.with_index(index)
    }

    pub fn next_sibling(&self, path: &NodePath) -> Option<NodePath> {
        let sibling = path.with_index(path.index()? + 1)?;
        self.contains(&sibling).then_some(sibling)
    }

    /// Deepest last descendant, or the node itself when it has no children
    pub fn last_descendant(&self, path: &NodePath) -> NodePath {
        let mut current = path.clone();
        while let Some(last) = self.last_child(&current) {
            current = last;
        }
        current
    }

    /// Next node in pre-order, confined to the subtree rooted at `scope`
    pub fn next_in_pre_order(&self, path: &NodePath, scope: &NodePath) -> Option<NodePath> {
        if !scope.is_inclusive_ancestor_of(path) {
            return None;
        }
        if let Some(first) = self.first_child(path) {
            return Some(first);
        }
        let mut current = path.clone();
        while current != *scope {
            if let Some(sibling) = self.next_sibling(&current) {
                return Some(sibling);
            }
            current = current.parent()?;
        }
        None
    }

    /// Previous node in pre-order, confined to the subtree rooted at `scope`
    pub fn previous_in_pre_order(&self, path: &NodePath, scope: &NodePath) -> Option<NodePath> {
        if !scope.is_inclusive_ancestor_of(path) || path == scope || !self.contains(path) {
            return None;
        }
        match self.previous_sibling(path) {
            Some(sibling) => Some(self.last_descendant(&sibling)),
            None => path.parent(),
        }
    }

    /// Pre-order iterator over `scope` and all its descendants
    pub fn descendants<'a>(&'a self, scope: &NodePath) -> PreOrder<'a> {
        PreOrder {
            document: self,
            scope: scope.clone(),
            next: self.contains(scope).then(|| scope.clone()),
        }
    }

    /// Node itself or its nearest ancestor matching `pattern`
    pub fn closest(&self, path: &NodePath, pattern: &Pattern) -> Option<NodePath> {
        let node = self.node(path)?;
        if pattern.matches(node) {
            return Some(path.clone());
        }
        self.ancestor_matching(path, pattern)
    }

    /// Nearest strict ancestor matching `pattern`
    pub fn ancestor_matching(&self, path: &NodePath, pattern: &Pattern) -> Option<NodePath> {
        let mut current = self.parent(path)?;
        loop {
            if self.node(&current).is_some_and(|node| pattern.matches(node)) {
                return Some(current);
            }
            current = current.parent()?;
        }
    }
}

/// See [`Document::descendants`]
pub struct PreOrder<'a> {
    document: &'a Document,
    scope: NodePath,
    next: Option<NodePath>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodePath;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.document.next_in_pre_order(&current, &self.scope);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(indices: &[usize]) -> NodePath {
        NodePath::new(indices.to_vec())
    }

    /// body
    ///   div        /0
    ///     p        /0/0
    ///       "a"    /0/0/0
    ///     "b"      /0/1
    ///   span       /1
    ///     "c"      /1/0
    fn sample() -> Document {
        Document::new(
            Node::element("body")
                .with_child(
                    Node::element("div")
                        .with_child(Node::element("p").with_child(Node::text("a")))
                        .with_child(Node::text("b")),
                )
                .with_child(Node::element("span").with_child(Node::text("c"))),
        )
    }

    #[test]
    fn test_node_lookup() {
        let doc = sample();
        assert_eq!(doc.node(&p(&[0, 0, 0])).and_then(Node::as_text), Some("a"));
        assert!(doc.node(&p(&[0, 5])).is_none());
        assert_eq!(doc.get(&p(&[9])), Err(TreeError::NodeNotFound(p(&[9]))));
    }

    #[test]
    fn test_siblings() {
        let doc = sample();
        assert_eq!(doc.next_sibling(&p(&[0])), Some(p(&[1])));
        assert_eq!(doc.next_sibling(&p(&[1])), None);
        assert_eq!(doc.previous_sibling(&p(&[0, 1])), Some(p(&[0, 0])));
        assert_eq!(doc.previous_sibling(&p(&[0, 0])), None);
        assert_eq!(doc.previous_sibling(&NodePath::root()), None);
    }

    #[test]
    fn test_pre_order_forward() {
        let doc = sample();
        let order: Vec<String> = doc
            .descendants(&NodePath::root())
            .map(|path| path.to_string())
            .collect();
        assert_eq!(order, vec!["/", "/0", "/0/0", "/0/0/0", "/0/1", "/1", "/1/0"]);
    }

    #[test]
    fn test_pre_order_backward() {
        let doc = sample();
        let root = NodePath::root();
        assert_eq!(doc.previous_in_pre_order(&p(&[1]), &root), Some(p(&[0, 1])));
        assert_eq!(doc.previous_in_pre_order(&p(&[0, 1]), &root), Some(p(&[0, 0, 0])));
        assert_eq!(doc.previous_in_pre_order(&p(&[0, 0, 0]), &root), Some(p(&[0, 0])));
        assert_eq!(doc.previous_in_pre_order(&p(&[0]), &root), Some(root.clone()));
        assert_eq!(doc.previous_in_pre_order(&root, &root), None);
    }

    #[test]
    fn test_pre_order_respects_scope() {
        let doc = sample();
        let scope = p(&[0]);
        assert_eq!(doc.next_in_pre_order(&p(&[0, 1]), &scope), None);
        assert_eq!(doc.previous_in_pre_order(&scope, &scope), None);
        let inside: Vec<NodePath> = doc.descendants(&scope).collect();
        assert_eq!(inside, vec![p(&[0]), p(&[0, 0]), p(&[0, 0, 0]), p(&[0, 1])]);
    }

    #[test]
    fn test_closest_is_inclusive() {
        let doc = sample();
        let div = Pattern::tag("div");
        assert_eq!(doc.closest(&p(&[0]), &div), Some(p(&[0])));
        assert_eq!(doc.closest(&p(&[0, 0, 0]), &div), Some(p(&[0])));
        assert_eq!(doc.ancestor_matching(&p(&[0]), &div), None);
        assert_eq!(doc.closest(&p(&[1, 0]), &div), None);
    }
}
