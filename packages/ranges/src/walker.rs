//! Generic boundary walk-out
//!
//! From each edge node, walk the whole document in pre-order (backwards
//! from the start edge, forwards from the end edge) across ignorable nodes,
//! then widen the range to enclose the last ignorable node reached on each
//! side. Inline runs, words and list items are never split this way.

use crate::edge::{edge_node, Side};
use crate::error::RangeResult;
use crate::ignorable::IgnorableClassifier;
use crate::range::{compare_boundaries, Boundary, Range};
use excerpt_tree::{Document, NodePath};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

/// Widen `range` so neither end splits an ignorable run; never shrinks it
pub fn expand_boundaries(
    doc: &Document,
    range: &Range,
    classifier: &IgnorableClassifier<'_>,
) -> RangeResult<Range> {
    let start = edge_node(doc, range, Side::Start)?;
    let end = edge_node(doc, range, Side::End)?;

    let mut expanded = range.clone();

    if let Some(first) = walk_out(doc, &start, Direction::Backward, classifier) {
        let before = boundary_before(&first);
        if compare_boundaries(&before, expanded.start()) == Ordering::Less {
            expanded = expanded.with_start(doc, before)?;
        }
    }

    if let Some(last) = walk_out(doc, &end, Direction::Forward, classifier) {
        let after = boundary_after(doc, &last);
        if compare_boundaries(&after, expanded.end()) == Ordering::Greater {
            expanded = expanded.with_end(doc, after)?;
        }
    }

    debug!(
        start = %expanded.start(),
        end = %expanded.end(),
        "Expanded range boundaries"
    );
    Ok(expanded)
}

/// Position just before `node`; the root has no parent, so its own start
fn boundary_before(node: &NodePath) -> Boundary {
    Boundary::before(node).unwrap_or_else(|| Boundary::new(NodePath::root(), 0))
}

/// Position just after `node`; the root has no parent, so its own end
fn boundary_after(doc: &Document, node: &NodePath) -> Boundary {
    Boundary::after(node)
        .unwrap_or_else(|| Boundary::new(NodePath::root(), doc.root().length()))
}

/// Last ignorable node reached from `edge`, or `None` if `edge` itself blocks
fn walk_out(
    doc: &Document,
    edge: &NodePath,
    direction: Direction,
    classifier: &IgnorableClassifier<'_>,
) -> Option<NodePath> {
    let scope = NodePath::root();
    let mut found = None;
    let mut current = Some(edge.clone());

    while let Some(path) = current {
        match doc.node(&path) {
            Some(node) if classifier.is_ignorable(node) => {}
            _ => break,
        }
        current = match direction {
            Direction::Backward => doc.previous_in_pre_order(&path, &scope),
            Direction::Forward => doc.next_in_pre_order(&path, &scope),
        };
        found = Some(path);
    }

    found
}
