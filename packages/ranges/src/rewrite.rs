use excerpt_tree::visitor::walk_element_mut;
use excerpt_tree::{Fragment, Node, Pattern, VisitorMut};

/// Class marking an anchor whose link is left untouched
pub const SKIP_ANCHOR_CLASS: &str = "skip-anchor";

/// Scheme of internal links that mean nothing outside the application
pub const INTERNAL_LINK_PREFIX: &str = "tag:";

struct LinkRewriter<'a> {
    anchor: Pattern,
    markup: &'a Pattern,
    markup_depth: usize,
}

impl LinkRewriter<'_> {
    fn rewrite_anchor(&self, anchor: &mut Node) {
        if self.markup_depth > 0 {
            anchor.add_class(SKIP_ANCHOR_CLASS);
        }
        let skipped = anchor.has_class(SKIP_ANCHOR_CLASS);

        let Some(href) = anchor.attr("href").map(str::to_owned) else {
            return;
        };

        if !skipped {
            anchor.set_attr("target", "_blank");
        }

        if (!skipped && href.starts_with('#')) || href.starts_with(INTERNAL_LINK_PREFIX) {
            anchor.remove_attr("href");
            anchor.remove_attr("target");
        }
    }
}

impl VisitorMut for LinkRewriter<'_> {
    fn visit_element_mut(&mut self, element: &mut Node) {
        if self.anchor.matches(element) {
            self.rewrite_anchor(element);
        }

        let is_markup = self.markup.matches(element);
        if is_markup {
            self.markup_depth += 1;
        }
        walk_element_mut(self, element);
        if is_markup {
            self.markup_depth -= 1;
        }
    }
}

/// Make copied links behave sensibly outside their source document
///
/// Anchors inside a markup-enabled container are marked with
/// [`SKIP_ANCHOR_CLASS`] and left alone. Other anchors open in a new
/// context, and same-document (`#...`) anchors lose their link entirely.
/// Internal `tag:` links are always unlinked.
pub fn rewrite_links(mut fragment: Fragment, markup: &Pattern) -> Fragment {
    let mut rewriter = LinkRewriter {
        anchor: Pattern::tag("a"),
        markup,
        markup_depth: 0,
    };
    rewriter.visit_fragment_mut(&mut fragment);
    fragment
}
