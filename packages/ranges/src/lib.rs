//! # Excerpt Ranges
//!
//! Selection ranges over an [`excerpt_tree::Document`], and their expansion
//! into a context fragment that can be shown away from the source page.
//!
//! ```rust,ignore
//! use excerpt_ranges::{expand_range_get_string, Boundary, Range};
//! use excerpt_tree::{Document, Node, NodePath};
//!
//! let doc = Document::new(
//!     Node::element("body").with_child(Node::element("div").with_child(Node::text("hello"))),
//! );
//! let text = NodePath::new(vec![0, 0]);
//! let range = Range::new(&doc, Boundary::new(text.clone(), 1), Boundary::new(text, 4))?;
//!
//! assert_eq!(expand_range_get_string(&doc, &range), "hello");
//! ```

pub mod cleanup;
pub mod edge;
pub mod error;
pub mod expand;
pub mod ignorable;
pub mod markup;
pub mod object_context;
pub mod options;
pub mod range;
pub mod rewrite;
pub mod selection;
pub mod walker;

pub use cleanup::{strip_identifiers, strip_non_contextual};
pub use edge::{edge_node, Side};
pub use error::{ExpandError, RangeError, RangeResult};
pub use expand::{
    expand_range, expand_range_get_string, fix_up_copied_context, range_if_item_prop_span,
    Expander,
};
pub use ignorable::{IgnorableClassifier, IgnoredNodes, NoIgnoredNodes, DEFAULT_IGNORABLE_TAGS};
pub use markup::try_markup_container;
pub use object_context::{
    try_object_context, ObjectContextHandler, ObjectContextRegistry, QuestionContext,
    VideoContext,
};
pub use options::ExpandOptions;
pub use range::{compare_boundaries, Boundary, Range};
pub use rewrite::{rewrite_links, SKIP_ANCHOR_CLASS};
pub use selection::{
    get_selected_nodes, is_valid_range, restore_saved_range, save_range, SavedSelection,
};
pub use walker::expand_boundaries;
