use crate::node::Node;
use crate::serializer::{to_html, SerializeOptions};
use serde::{Deserialize, Serialize};

/// Detached, parentless sequence of cloned nodes
///
/// Never aliases a live document: everything in here is owned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_node(node: Node) -> Self {
        Self {
            children: vec![node],
        }
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Compact markup of the fragment's children
    pub fn to_html(&self) -> String {
        to_html(&self.children, &SerializeOptions::default())
    }
}

impl From<Node> for Fragment {
    fn from(node: Node) -> Self {
        Fragment::from_node(node)
    }
}
