//! # Embedded-object resolution
//!
//! Selections touching an embedded widget never go through the generic
//! walker. The widget is looked up in an [`ObjectContextRegistry`], whose
//! handlers synthesize a readable stand-in for it; widgets nobody handles
//! are passed through as a deep clone.

use crate::options::{question_pattern, video_pattern};
use crate::range::Range;
use excerpt_tree::{Document, Fragment, Node, NodePath, Pattern};
use std::fmt;
use tracing::debug;

/// Builds export content for one kind of widget
pub trait ObjectContextHandler: Send + Sync {
    /// `None` means "nothing better than the widget itself"
    fn gather(&self, object: &Node) -> Option<Node>;
}

impl<F> ObjectContextHandler for F
where
    F: Fn(&Node) -> Option<Node> + Send + Sync,
{
    fn gather(&self, object: &Node) -> Option<Node> {
        self(object)
    }
}

/// Assessment widgets: the rendered `.naquestion` body
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionContext;

impl ObjectContextHandler for QuestionContext {
    fn gather(&self, object: &Node) -> Option<Node> {
        object
            .find_descendant(&Pattern::any().with_class("naquestion"))
            .cloned()
    }
}

/// Video widgets: title plus thumbnail
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoContext;

impl ObjectContextHandler for VideoContext {
    fn gather(&self, object: &Node) -> Option<Node> {
        let param = |name: &str| Pattern::tag("param").attr_equals("name", name);

        let title = object
            .find_descendant(&param("title"))
            .and_then(|node| node.attr("value"))
            .unwrap_or_default();

        let thumbnail = object
            .find_descendant(&Pattern::tag("object").attr_suffix("type", "videoSource"))
            .and_then(|source| source.find_descendant(&param("thumbnail")))
            .and_then(|node| node.attr("value"));

        let mut image = Node::element("img").with_class("video-thumbnail");
        if let Some(src) = thumbnail {
            image.set_attr("src", src);
        }

        Some(
            Node::element("div")
                .with_child(Node::element("div").with_child(Node::text(title)))
                .with_child(image),
        )
    }
}

/// Ordered pattern → handler table; the first matching pattern wins
pub struct ObjectContextRegistry {
    handlers: Vec<(Pattern, Box<dyn ObjectContextHandler>)>,
}

impl ObjectContextRegistry {
    /// Empty registry: every widget is passed through unchanged
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, pattern: Pattern, handler: impl ObjectContextHandler + 'static) {
        self.handlers.push((pattern, Box::new(handler)));
    }

    pub fn with_handler(
        mut self,
        pattern: Pattern,
        handler: impl ObjectContextHandler + 'static,
    ) -> Self {
        self.register(pattern, handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered patterns in declaration order
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.handlers.iter().map(|(pattern, _)| pattern)
    }

    /// Content standing in for `object` in an exported fragment
    pub fn contents_for(&self, object: &Node) -> Node {
        let gathered = self
            .handlers
            .iter()
            .find(|(pattern, _)| pattern.matches(object))
            .and_then(|(pattern, handler)| {
                debug!(%pattern, "Gathering object context");
                handler.gather(object)
            });

        gathered.unwrap_or_else(|| object.clone())
    }
}

impl Default for ObjectContextRegistry {
    fn default() -> Self {
        Self::new()
            .with_handler(question_pattern(), QuestionContext)
            .with_handler(video_pattern(), VideoContext)
    }
}

impl fmt::Debug for ObjectContextRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|(pattern, _)| pattern.to_string()))
            .finish()
    }
}

/// Widget node the range sits in or selects exactly, if any
pub fn find_widget(doc: &Document, range: &Range, widget: &Pattern) -> Option<NodePath> {
    if let Some(found) = doc
        .closest(&range.common_ancestor(), widget)
        .or_else(|| doc.closest(range.start_container(), widget))
    {
        return Some(found);
    }

    // A range covering exactly one child of an element
    let container = range.start_container();
    if container == range.end_container()
        && !doc.is_text(container)
        && range.start_offset() + 1 == range.end_offset()
    {
        return doc.closest(&container.child(range.start_offset()), widget);
    }

    None
}

/// Export content for a range that touches a widget, else `None`
pub fn try_object_context(
    doc: &Document,
    range: &Range,
    widget: &Pattern,
    registry: &ObjectContextRegistry,
) -> Option<Fragment> {
    let path = find_widget(doc, range, widget)?;
    let object = doc.node(&path)?;
    debug!(%path, "Range touches an embedded object");
    Some(Fragment::from_node(registry.contents_for(object)))
}
