use crate::attributes::Attributes;
use crate::pattern::Pattern;
use crate::visitor::{walk_node, Visitor};
use serde::{Deserialize, Serialize};

/// Content tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Element with a tag, ordered attributes and owned children
    Element {
        tag: String,
        #[serde(default)]
        attributes: Attributes,
        #[serde(default)]
        children: Vec<Node>,
    },

    /// Text run
    Text { content: String },
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.set(name, value);
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Tag name for elements, `None` for text
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    /// Text payload for text nodes, `None` for elements
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { content } => Some(content),
            Node::Element { .. } => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Element { attributes, .. } => Some(attributes),
            Node::Text { .. } => None,
        }
    }

    pub fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        match self {
            Node::Element { attributes, .. } => Some(attributes),
            Node::Text { .. } => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().and_then(|attrs| attrs.get(name))
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(attrs) = self.attributes_mut() {
            attrs.set(name, value);
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes_mut().and_then(|attrs| attrs.remove(name))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Append `class` to the class list unless already present
    pub fn add_class(&mut self, class: &str) {
        if self.is_text() || self.has_class(class) {
            return;
        }
        let value = match self.attr("class").map(str::trim) {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attr("class", value);
    }

    /// Children of an element; empty for text
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element { children, .. } => Some(children),
            Node::Text { .. } => None,
        }
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    /// Boundary length: char count for text, child count for elements
    pub fn length(&self) -> usize {
        match self {
            Node::Element { children, .. } => children.len(),
            Node::Text { content } => content.chars().count(),
        }
    }

    /// Copy of the node without its children
    pub fn shallow_clone(&self) -> Node {
        match self {
            Node::Element {
                tag, attributes, ..
            } => Node::Element {
                tag: tag.clone(),
                attributes: attributes.clone(),
                children: Vec::new(),
            },
            Node::Text { content } => Node::text(content.clone()),
        }
    }

    /// Whether the node is a text node holding only whitespace
    pub fn is_whitespace_text(&self) -> bool {
        self.as_text()
            .map(|content| content.trim().is_empty())
            .unwrap_or(false)
    }

    /// Concatenated text of the node and all its descendants
    pub fn text_content(&self) -> String {
        let mut collector = TextCollector::default();
        walk_node(&mut collector, self);
        collector.buffer
    }

    /// First descendant (excluding self) matching `pattern`, in pre-order
    pub fn find_descendant(&self, pattern: &Pattern) -> Option<&Node> {
        self.children().iter().find_map(|child| {
            if pattern.matches(child) {
                Some(child)
            } else {
                child.find_descendant(pattern)
            }
        })
    }
}

#[derive(Default)]
struct TextCollector {
    buffer: String,
}

impl Visitor for TextCollector {
    fn visit_text(&mut self, content: &str) {
        self.buffer.push_str(content);
    }
}

/// Substring of `content` by char offsets, clamped to its length
pub fn char_slice(content: &str, start: usize, end: usize) -> String {
    content
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}
