//! Saved selections replayed against serialized documents

use excerpt_ranges::{
    expand_range_get_string, get_selected_nodes, is_valid_range, restore_saved_range, save_range,
    SavedSelection,
};
use excerpt_tree::{Document, NodePath};

const DOCUMENT: &str = r#"{
    "root": {
        "type": "Element",
        "tag": "body",
        "children": [
            {
                "type": "Element",
                "tag": "ul",
                "children": [
                    { "type": "Element", "tag": "li", "children": [{ "type": "Text", "content": "first item" }] },
                    { "type": "Element", "tag": "li", "children": [{ "type": "Text", "content": "second item" }] }
                ]
            },
            {
                "type": "Element",
                "tag": "p",
                "attributes": [["id", "closing"]],
                "children": [{ "type": "Text", "content": "The end." }]
            }
        ]
    }
}"#;

fn document() -> Document {
    serde_json::from_str(DOCUMENT).unwrap()
}

fn p(indices: &[usize]) -> NodePath {
    NodePath::new(indices.to_vec())
}

#[test]
fn test_restore_and_expand_list_selection() {
    let doc = document();
    let saved: SavedSelection = serde_json::from_str(
        r#"{
            "startContainer": [0, 0, 0],
            "startOffset": 6,
            "endContainer": [0, 1, 0],
            "endOffset": 3,
            "collapsed": false
        }"#,
    )
    .unwrap();

    let range = restore_saved_range(&doc, Some(&saved)).unwrap();
    assert!(is_valid_range(&doc, Some(&range), &NodePath::root()));
    assert_eq!(save_range(Some(&range)), Some(saved));

    // list items are ignorable, so both are taken whole
    assert_eq!(
        expand_range_get_string(&doc, &range),
        "<li>first item</li><li>second item</li>"
    );
    assert_eq!(get_selected_nodes(&doc, &range), vec![p(&[0, 1])]);
}

#[test]
fn test_expanded_paragraph_loses_its_id() {
    let doc = document();
    let saved = SavedSelection {
        start_container: p(&[0, 1, 0]),
        start_offset: 0,
        end_container: p(&[1, 0]),
        end_offset: 3,
        collapsed: false,
    };
    let range = restore_saved_range(&doc, Some(&saved)).unwrap();
    assert_eq!(
        expand_range_get_string(&doc, &range),
        "<ul><li>first item</li><li>second item</li></ul><p>The end.</p>"
    );
}

#[test]
fn test_restore_out_of_range_offset() {
    let doc = document();
    let saved = SavedSelection {
        start_container: p(&[1, 0]),
        start_offset: 0,
        end_container: p(&[1, 0]),
        end_offset: 99,
        collapsed: false,
    };
    assert!(restore_saved_range(&doc, Some(&saved)).is_none());
}
