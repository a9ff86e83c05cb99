//! Helpers around capturing and replaying a user selection

use crate::range::{Boundary, Range};
use excerpt_tree::{Document, NodePath};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Plain snapshot of a range, detached from any document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSelection {
    pub start_container: NodePath,
    pub start_offset: usize,
    pub end_container: NodePath,
    pub end_offset: usize,
    #[serde(default)]
    pub collapsed: bool,
}

impl SavedSelection {
    pub fn start(&self) -> Boundary {
        Boundary::new(self.start_container.clone(), self.start_offset)
    }

    pub fn end(&self) -> Boundary {
        Boundary::new(self.end_container.clone(), self.end_offset)
    }
}

/// Whether `range` is a usable selection inside `container`
///
/// A caret at offset 0 of the common ancestor counts as no selection.
pub fn is_valid_range(doc: &Document, range: Option<&Range>, container: &NodePath) -> bool {
    let Some(range) = range else {
        return false;
    };
    if range.validate(doc).is_err() {
        return false;
    }

    let common = range.common_ancestor();
    if !container.is_inclusive_ancestor_of(&common) {
        return false;
    }

    let empty_caret = range.collapsed()
        && *range.start_container() == common
        && *range.end_container() == common
        && range.start_offset() == 0
        && range.end_offset() == 0;
    !empty_caret
}

pub fn save_range(range: Option<&Range>) -> Option<SavedSelection> {
    let range = range?;
    Some(SavedSelection {
        start_container: range.start_container().clone(),
        start_offset: range.start_offset(),
        end_container: range.end_container().clone(),
        end_offset: range.end_offset(),
        collapsed: range.collapsed(),
    })
}

/// Rebuild a range from a snapshot; logs and gives up if it no longer fits
///
/// The start is placed first and the end second, so an end that precedes
/// the start collapses the range onto the end.
pub fn restore_saved_range(doc: &Document, saved: Option<&SavedSelection>) -> Option<Range> {
    let saved = saved?;
    let restored =
        Range::collapsed_at(doc, saved.start()).and_then(|range| range.with_end(doc, saved.end()));

    match restored {
        Ok(range) => Some(range),
        Err(e) => {
            error!("Could not restore saved range: {}", e);
            None
        }
    }
}

/// Element nodes from the start edge up to (not including) the end edge
///
/// Edges are the boundary container when it is text, else the child at the
/// boundary offset. Nodes are collected in document order from the
/// common ancestor's subtree.
pub fn get_selected_nodes(doc: &Document, range: &Range) -> Vec<NodePath> {
    let marker = |boundary: &Boundary| {
        if doc.is_text(&boundary.container) {
            Some(boundary.container.clone())
        } else {
            doc.child(&boundary.container, boundary.offset)
        }
    };
    let start_at = marker(range.start());
    let end_at = marker(range.end());

    let scope = range.common_ancestor();
    let mut current = if doc.is_text(&scope) {
        Some(scope.clone())
    } else {
        doc.next_in_pre_order(&scope, &scope)
    };

    let mut nodes = Vec::new();
    let mut started = false;
    while let Some(path) = current {
        if end_at.as_ref() == Some(&path) {
            break;
        }
        if started || start_at.as_ref() == Some(&path) {
            started = true;
            if doc.node(&path).is_some_and(|node| node.is_element()) {
                nodes.push(path.clone());
            }
        }
        current = doc.next_in_pre_order(&path, &scope);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use excerpt_tree::Node;

    fn p(indices: &[usize]) -> NodePath {
        NodePath::new(indices.to_vec())
    }

    fn b(indices: &[usize], offset: usize) -> Boundary {
        Boundary::new(p(indices), offset)
    }

    /// body
    ///   section                /0
    ///     p > "one"            /0/0
    ///     p > b > "two"        /0/1, /0/1/0
    ///     p > "three"          /0/2
    ///   aside                  /1
    fn sample() -> Document {
        Document::new(
            Node::element("body")
                .with_child(
                    Node::element("section")
                        .with_child(Node::element("p").with_child(Node::text("one")))
                        .with_child(
                            Node::element("p")
                                .with_child(Node::element("b").with_child(Node::text("two"))),
                        )
                        .with_child(Node::element("p").with_child(Node::text("three"))),
                )
                .with_child(Node::element("aside")),
        )
    }

    #[test]
    fn test_is_valid_range() {
        let doc = sample();
        let range = Range::new(&doc, b(&[0, 0, 0], 1), b(&[0, 2, 0], 2)).unwrap();
        assert!(is_valid_range(&doc, Some(&range), &NodePath::root()));
        assert!(is_valid_range(&doc, Some(&range), &p(&[0])));
        assert!(!is_valid_range(&doc, Some(&range), &p(&[1])));
        assert!(!is_valid_range(&doc, None, &NodePath::root()));
    }

    #[test]
    fn test_empty_caret_is_invalid() {
        let doc = sample();
        let caret = Range::collapsed_at(&doc, b(&[0], 0)).unwrap();
        assert!(!is_valid_range(&doc, Some(&caret), &NodePath::root()));

        let inside_text = Range::collapsed_at(&doc, b(&[0, 0, 0], 2)).unwrap();
        assert!(is_valid_range(&doc, Some(&inside_text), &NodePath::root()));
    }

    #[test]
    fn test_stale_range_is_invalid() {
        let doc = sample();
        let range = Range::new(&doc, b(&[0, 2, 0], 0), b(&[0, 2, 0], 5)).unwrap();
        let edited = Document::new(Node::element("body").with_child(Node::element("section")));
        assert!(!is_valid_range(&edited, Some(&range), &NodePath::root()));
    }

    #[test]
    fn test_save_and_restore() {
        let doc = sample();
        let range = Range::new(&doc, b(&[0, 0, 0], 1), b(&[0, 2, 0], 2)).unwrap();
        let saved = save_range(Some(&range)).unwrap();
        assert!(!saved.collapsed);
        assert_eq!(restore_saved_range(&doc, Some(&saved)), Some(range));
        assert_eq!(save_range(None), None);
        assert_eq!(restore_saved_range(&doc, None), None);
    }

    #[test]
    fn test_restore_against_changed_document() {
        let doc = sample();
        let range = Range::new(&doc, b(&[0, 2, 0], 0), b(&[0, 2, 0], 5)).unwrap();
        let saved = save_range(Some(&range)).unwrap();
        let edited = Document::new(Node::element("body").with_child(Node::text("x")));
        assert_eq!(restore_saved_range(&edited, Some(&saved)), None);
    }

    #[test]
    fn test_restore_end_before_start_collapses() {
        let doc = sample();
        let saved = SavedSelection {
            start_container: p(&[0, 2, 0]),
            start_offset: 3,
            end_container: p(&[0, 0, 0]),
            end_offset: 1,
            collapsed: false,
        };
        let range = restore_saved_range(&doc, Some(&saved)).unwrap();
        assert!(range.collapsed());
        assert_eq!(range.start(), &b(&[0, 0, 0], 1));
    }

    #[test]
    fn test_saved_selection_json_shape() {
        let saved: SavedSelection = serde_json::from_str(
            r#"{ "startContainer": [0, 0, 0], "startOffset": 1, "endContainer": [0, 2, 0], "endOffset": 2 }"#,
        )
        .unwrap();
        assert_eq!(saved.start(), b(&[0, 0, 0], 1));
        assert!(!saved.collapsed);
    }

    #[test]
    fn test_selected_nodes_between_element_boundaries() {
        let doc = sample();
        // from the first p up to (not including) the third p
        let range = Range::new(&doc, b(&[0], 0), b(&[0], 2)).unwrap();
        assert_eq!(
            get_selected_nodes(&doc, &range),
            vec![p(&[0, 0]), p(&[0, 1]), p(&[0, 1, 0])]
        );
    }

    #[test]
    fn test_selected_nodes_from_text_edges() {
        let doc = sample();
        let range = Range::new(&doc, b(&[0, 0, 0], 1), b(&[0, 2, 0], 2)).unwrap();
        // starts at the "one" text node, so the first p is not collected
        assert_eq!(
            get_selected_nodes(&doc, &range),
            vec![p(&[0, 1]), p(&[0, 1, 0]), p(&[0, 2])]
        );
    }

    #[test]
    fn test_selected_nodes_inside_one_text_node() {
        let doc = sample();
        let range = Range::new(&doc, b(&[0, 0, 0], 0), b(&[0, 0, 0], 2)).unwrap();
        assert!(get_selected_nodes(&doc, &range).is_empty());
    }
}
