use excerpt_tree::Node;

/// Inline tags that never stop boundary expansion
pub const DEFAULT_IGNORABLE_TAGS: [&str; 6] = ["a", "b", "i", "u", "img", "li"];

/// Annotation-boundary service: nodes the host has flagged as transparent
pub trait IgnoredNodes: Send + Sync {
    fn is_node_ignored(&self, node: &Node) -> bool;
}

impl<F> IgnoredNodes for F
where
    F: Fn(&Node) -> bool + Send + Sync,
{
    fn is_node_ignored(&self, node: &Node) -> bool {
        self(node)
    }
}

/// Default service: nothing is flagged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIgnoredNodes;

impl IgnoredNodes for NoIgnoredNodes {
    fn is_node_ignored(&self, _node: &Node) -> bool {
        false
    }
}

/// Decides which nodes are transparent to boundary expansion
pub struct IgnorableClassifier<'a> {
    tags: &'a [String],
    ignored: &'a dyn IgnoredNodes,
}

impl<'a> IgnorableClassifier<'a> {
    pub fn new(tags: &'a [String], ignored: &'a dyn IgnoredNodes) -> Self {
        Self { tags, ignored }
    }

    /// Text, host-ignored nodes, and elements whose tag is in the inline set
    pub fn is_ignorable(&self, node: &Node) -> bool {
        match node.tag() {
            None => true,
            Some(tag) => {
                self.ignored.is_node_ignored(node)
                    || self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tags() -> Vec<String> {
        DEFAULT_IGNORABLE_TAGS.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_text_is_always_ignorable() {
        let tags = default_tags();
        let classifier = IgnorableClassifier::new(&tags, &NoIgnoredNodes);
        assert!(classifier.is_ignorable(&Node::text("hello")));
        assert!(classifier.is_ignorable(&Node::text("")));
    }

    #[test]
    fn test_inline_tags() {
        let tags = default_tags();
        let classifier = IgnorableClassifier::new(&tags, &NoIgnoredNodes);
        for tag in ["a", "B", "i", "u", "img", "li"] {
            assert!(classifier.is_ignorable(&Node::element(tag)), "{} should be ignorable", tag);
        }
        for tag in ["p", "div", "span", "ul", "object"] {
            assert!(!classifier.is_ignorable(&Node::element(tag)), "{} should block", tag);
        }
    }

    #[test]
    fn test_host_ignored_nodes() {
        let tags = default_tags();
        let ignored = |node: &Node| node.has_class("annotation-highlight");
        let classifier = IgnorableClassifier::new(&tags, &ignored);
        assert!(classifier.is_ignorable(&Node::element("span").with_class("annotation-highlight")));
        assert!(!classifier.is_ignorable(&Node::element("span")));
    }
}
