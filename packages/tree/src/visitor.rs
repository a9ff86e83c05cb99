use crate::fragment::Fragment;
use crate::node::Node;

/// Visitor pattern for traversing content nodes immutably
///
/// The default implementations walk the entire tree in document order.
/// Override specific visit_* methods to act on particular nodes.
pub trait Visitor: Sized {
    fn visit_fragment(&mut self, fragment: &Fragment) {
        walk_fragment(self, fragment);
    }

    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_element(&mut self, element: &Node) {
        walk_children(self, element);
    }

    fn visit_text(&mut self, _content: &str) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for rewriting content nodes
///
/// Like [`Visitor`], but `visit_children_mut` receives the owning `Vec`
/// so implementations can drop or insert children while walking.
pub trait VisitorMut: Sized {
    fn visit_fragment_mut(&mut self, fragment: &mut Fragment) {
        walk_fragment_mut(self, fragment);
    }

    fn visit_children_mut(&mut self, children: &mut Vec<Node>) {
        walk_children_mut(self, children);
    }

    fn visit_node_mut(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }

    fn visit_element_mut(&mut self, element: &mut Node) {
        walk_element_mut(self, element);
    }

    fn visit_text_mut(&mut self, _content: &mut String) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_fragment<V: Visitor>(visitor: &mut V, fragment: &Fragment) {
    for node in &fragment.children {
        visitor.visit_node(node);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    match node {
        Node::Element { .. } => visitor.visit_element(node),
        Node::Text { content } => visitor.visit_text(content),
    }
}

pub fn walk_children<V: Visitor>(visitor: &mut V, element: &Node) {
    for child in element.children() {
        visitor.visit_node(child);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_fragment_mut<V: VisitorMut>(visitor: &mut V, fragment: &mut Fragment) {
    visitor.visit_children_mut(&mut fragment.children);
}

pub fn walk_children_mut<V: VisitorMut>(visitor: &mut V, children: &mut Vec<Node>) {
    for child in children.iter_mut() {
        visitor.visit_node_mut(child);
    }
}

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut Node) {
    match node {
        Node::Element { .. } => visitor.visit_element_mut(node),
        Node::Text { content } => visitor.visit_text_mut(content),
    }
}

pub fn walk_element_mut<V: VisitorMut>(visitor: &mut V, element: &mut Node) {
    if let Some(children) = element.children_mut() {
        visitor.visit_children_mut(children);
    }
}
