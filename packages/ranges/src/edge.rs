use crate::error::RangeResult;
use crate::range::Range;
use excerpt_tree::{Document, NodePath};

/// Which end of a range is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

/// The node a range boundary effectively points at
///
/// Text containers are their own edge. At the start, the edge is the child
/// at the offset, unless there is none or it is whitespace-only text, in
/// which case the container itself is the edge. At the end, the edge is the
/// child before the offset; at offset 0 it is the nearest preceding sibling
/// of the container or of one of its ancestors, falling back to the topmost
/// ancestor when nothing precedes the end at all.
///
/// The climb applies even when the container is a first child: an end at
/// `(li, 0)` under a leading `li` resolves to whatever precedes the list,
/// not to the `li` itself.
pub fn edge_node(doc: &Document, range: &Range, side: Side) -> RangeResult<NodePath> {
    range.validate(doc)?;

    let boundary = match side {
        Side::Start => range.start(),
        Side::End => range.end(),
    };
    let container = &boundary.container;
    let node = doc.get(container)?;

    if node.is_text() {
        return Ok(container.clone());
    }

    match side {
        Side::Start => match node.child(boundary.offset) {
            Some(child) if !child.is_whitespace_text() => Ok(container.child(boundary.offset)),
            _ => Ok(container.clone()),
        },
        Side::End => {
            if boundary.offset > 0 {
                return Ok(container.child(boundary.offset - 1));
            }
            let mut current = container.clone();
            loop {
                if let Some(previous) = doc.previous_sibling(&current) {
                    return Ok(previous);
                }
                match current.parent() {
                    Some(parent) => current = parent,
                    None => return Ok(current),
                }
            }
        }
    }
}
