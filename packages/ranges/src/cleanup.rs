use excerpt_tree::visitor::{walk_children_mut, walk_element_mut};
use excerpt_tree::{Fragment, Node, Pattern, VisitorMut};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Drops every node matching one of `patterns`, at any depth
struct NonContextualStripper<'a> {
    patterns: &'a [Pattern],
    removed: usize,
}

impl VisitorMut for NonContextualStripper<'_> {
    fn visit_children_mut(&mut self, children: &mut Vec<Node>) {
        let before = children.len();
        children.retain(|child| !self.patterns.iter().any(|pattern| pattern.matches(child)));
        self.removed += before - children.len();
        walk_children_mut(self, children);
    }
}

/// Remove nodes that have no meaningful rendering once extracted
pub fn strip_non_contextual(mut fragment: Fragment, patterns: &[Pattern]) -> Fragment {
    let mut stripper = NonContextualStripper {
        patterns,
        removed: 0,
    };
    stripper.visit_fragment_mut(&mut fragment);
    if stripper.removed > 0 {
        debug!(removed = stripper.removed, "Stripped non-contextual nodes");
    }
    fragment
}

fn identifier_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[\w:-]*id$").expect("valid identifier regex"))
}

/// Drops identifier attributes (`id`, `data-ntiid`, ...) from every element
struct IdentifierStripper {
    removed: usize,
}

impl VisitorMut for IdentifierStripper {
    fn visit_element_mut(&mut self, element: &mut Node) {
        if let Some(attributes) = element.attributes_mut() {
            let before = attributes.len();
            attributes.retain(|name, _| !identifier_name().is_match(name));
            self.removed += before - attributes.len();
        }
        walk_element_mut(self, element);
    }
}

/// Remove every attribute whose name ends in `id`; text is left untouched
pub fn strip_identifiers(mut fragment: Fragment) -> Fragment {
    let mut stripper = IdentifierStripper { removed: 0 };
    stripper.visit_fragment_mut(&mut fragment);
    if stripper.removed > 0 {
        debug!(removed = stripper.removed, "Stripped identifier attributes");
    }
    fragment
}
