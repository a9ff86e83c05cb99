//! # Range
//!
//! An immutable pair of boundary points over a [`Document`]. Every
//! "setter" returns a new `Range`; nothing here mutates the tree.
//!
//! Boundary semantics match DOM ranges: a text container's offset counts
//! chars, an element container's offset counts children, and `(parent, i)`
//! sits just before the parent's `i`th child.

use crate::error::{RangeError, RangeResult};
use excerpt_tree::{char_slice, Document, Fragment, Node, NodePath, TreeError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One end of a range: a container node and an offset inside it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boundary {
    pub container: NodePath,
    pub offset: usize,
}

impl Boundary {
    pub fn new(container: NodePath, offset: usize) -> Self {
        Self { container, offset }
    }

    /// Position immediately before `node`; `None` for the root
    pub fn before(node: &NodePath) -> Option<Self> {
        Some(Self::new(node.parent()?, node.index()?))
    }

    /// Position immediately after `node`; `None` for the root
    pub fn after(node: &NodePath) -> Option<Self> {
        Some(Self::new(node.parent()?, node.index()? + 1))
    }

    fn validate(&self, doc: &Document) -> RangeResult<()> {
        let length = doc.get(&self.container)?.length();
        if self.offset > length {
            return Err(RangeError::OffsetOutOfBounds {
                container: self.container.clone(),
                offset: self.offset,
                length,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container, self.offset)
    }
}

/// Document-order comparison of two boundary points
pub fn compare_boundaries(a: &Boundary, b: &Boundary) -> Ordering {
    if a.container == b.container {
        return a.offset.cmp(&b.offset);
    }
    if a.container.is_ancestor_of(&b.container) {
        let child_index = b.container.indices()[a.container.depth()];
        return if child_index < a.offset {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if b.container.is_ancestor_of(&a.container) {
        return compare_boundaries(b, a).reverse();
    }
    a.container.cmp(&b.container)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    start: Boundary,
    end: Boundary,
}

impl Range {
    /// Validated range; fails on missing nodes, bad offsets or start after end
    pub fn new(doc: &Document, start: Boundary, end: Boundary) -> RangeResult<Self> {
        let range = Self { start, end };
        range.validate(doc)?;
        Ok(range)
    }

    pub fn collapsed_at(doc: &Document, boundary: Boundary) -> RangeResult<Self> {
        Self::new(doc, boundary.clone(), boundary)
    }

    /// Range covering `node` itself, from its parent's point of view
    pub fn select_node(doc: &Document, node: &NodePath) -> RangeResult<Self> {
        doc.get(node)?;
        let start = Boundary::before(node).ok_or_else(|| TreeError::NoParent(node.clone()))?;
        let end = Boundary::after(node).ok_or_else(|| TreeError::NoParent(node.clone()))?;
        Self::new(doc, start, end)
    }

    /// Range covering everything inside `node`
    pub fn select_node_contents(doc: &Document, node: &NodePath) -> RangeResult<Self> {
        let length = doc.get(node)?.length();
        Self::new(
            doc,
            Boundary::new(node.clone(), 0),
            Boundary::new(node.clone(), length),
        )
    }

    pub fn start(&self) -> &Boundary {
        &self.start
    }

    pub fn end(&self) -> &Boundary {
        &self.end
    }

    pub fn start_container(&self) -> &NodePath {
        &self.start.container
    }

    pub fn start_offset(&self) -> usize {
        self.start.offset
    }

    pub fn end_container(&self) -> &NodePath {
        &self.end.container
    }

    pub fn end_offset(&self) -> usize {
        self.end.offset
    }

    pub fn collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Deepest node containing both boundary containers
    pub fn common_ancestor(&self) -> NodePath {
        self.start.container.common_ancestor(&self.end.container)
    }

    /// Check the range still describes a valid span of `doc`
    pub fn validate(&self, doc: &Document) -> RangeResult<()> {
        self.start.validate(doc)?;
        self.end.validate(doc)?;
        if compare_boundaries(&self.start, &self.end) == Ordering::Greater {
            return Err(RangeError::StartAfterEnd {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok(())
    }

    /// New range with a different start; the end collapses onto it if needed
    pub fn with_start(&self, doc: &Document, start: Boundary) -> RangeResult<Self> {
        let end = if compare_boundaries(&start, &self.end) == Ordering::Greater {
            start.clone()
        } else {
            self.end.clone()
        };
        Self::new(doc, start, end)
    }

    /// New range with a different end; the start collapses onto it if needed
    pub fn with_end(&self, doc: &Document, end: Boundary) -> RangeResult<Self> {
        let start = if compare_boundaries(&self.start, &end) == Ordering::Greater {
            end.clone()
        } else {
            self.start.clone()
        };
        Self::new(doc, start, end)
    }

    pub fn with_start_before(&self, doc: &Document, node: &NodePath) -> RangeResult<Self> {
        let start = Boundary::before(node).ok_or_else(|| TreeError::NoParent(node.clone()))?;
        self.with_start(doc, start)
    }

    pub fn with_end_after(&self, doc: &Document, node: &NodePath) -> RangeResult<Self> {
        let end = Boundary::after(node).ok_or_else(|| TreeError::NoParent(node.clone()))?;
        self.with_end(doc, end)
    }

    /// Whether this range starts at or before `other` and ends at or after it
    pub fn encloses(&self, other: &Range) -> bool {
        compare_boundaries(&self.start, &other.start) != Ordering::Greater
            && compare_boundaries(&self.end, &other.end) != Ordering::Less
    }

    /// Deep copy of the range's contents as a detached fragment
    ///
    /// Partially selected text is cut at the offsets; partially selected
    /// elements are copied without the children that fall outside.
    pub fn clone_contents(&self, doc: &Document) -> RangeResult<Fragment> {
        self.validate(doc)?;
        Ok(Fragment::new(clone_between(doc, &self.start, &self.end)?))
    }
}

fn clone_between(doc: &Document, start: &Boundary, end: &Boundary) -> RangeResult<Vec<Node>> {
    let mut nodes = Vec::new();
    if start == end {
        return Ok(nodes);
    }

    if start.container == end.container {
        if let Some(text) = doc.get(&start.container)?.as_text() {
            nodes.push(Node::text(char_slice(text, start.offset, end.offset)));
            return Ok(nodes);
        }
    }

    let ancestor_path = start.container.common_ancestor(&end.container);
    let ancestor = doc.get(&ancestor_path)?;
    let depth = ancestor_path.depth();

    let first_partial = (!start.container.is_inclusive_ancestor_of(&end.container))
        .then(|| start.container.indices()[depth]);
    let last_partial = (!end.container.is_inclusive_ancestor_of(&start.container))
        .then(|| end.container.indices()[depth]);

    if let Some(index) = first_partial {
        let child_path = ancestor_path.child(index);
        let child = doc.get(&child_path)?;
        match child.as_text() {
            Some(text) => nodes.push(Node::text(char_slice(text, start.offset, child.length()))),
            None => {
                let mut copy = child.shallow_clone();
                let inner = clone_between(doc, start, &Boundary::new(child_path, child.length()))?;
                if let Some(children) = copy.children_mut() {
                    children.extend(inner);
                }
                nodes.push(copy);
            }
        }
    }

    let contained_from = first_partial.map_or(start.offset, |index| index + 1);
    let contained_to = last_partial.unwrap_or(end.offset);
    if contained_from < contained_to {
        if let Some(contained) = ancestor.children().get(contained_from..contained_to) {
            nodes.extend(contained.iter().cloned());
        }
    }

    if let Some(index) = last_partial {
        let child_path = ancestor_path.child(index);
        let child = doc.get(&child_path)?;
        match child.as_text() {
            Some(text) => nodes.push(Node::text(char_slice(text, 0, end.offset))),
            None => {
                let mut copy = child.shallow_clone();
                let inner = clone_between(doc, &Boundary::new(child_path, 0), end)?;
                if let Some(children) = copy.children_mut() {
                    children.extend(inner);
                }
                nodes.push(copy);
            }
        }
    }

    Ok(nodes)
}
