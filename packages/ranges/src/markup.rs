use crate::range::Range;
use excerpt_tree::{Document, Pattern};
use tracing::debug;

/// Range selecting the whole markup-enabled container around `range`
///
/// Annotatable containers are atomic: selecting part of one (or parts of
/// several consecutive ones) must still export the container as a unit.
/// A container that is the document root has no parent to be selected in,
/// so its contents are selected instead.
pub fn try_markup_container(doc: &Document, range: &Range, marker: &Pattern) -> Option<Range> {
    let container = doc.closest(&range.common_ancestor(), marker)?;
    debug!(%container, "Range is inside a markup-enabled container");

    let selected = if container.is_root() {
        Range::select_node_contents(doc, &container)
    } else {
        Range::select_node(doc, &container)
    };
    selected.ok()
}
