//! # Excerpt Tree
//!
//! The content tree that selections are made against: element and text
//! nodes, path addressing, structural patterns and markup serialization.
//!
//! ```rust,ignore
//! use excerpt_tree::{Document, Node, NodePath, Pattern};
//!
//! let doc = Document::new(
//!     Node::element("div").with_child(Node::element("p").with_child(Node::text("hello"))),
//! );
//!
//! let text = NodePath::new(vec![0, 0]);
//! assert_eq!(doc.closest(&text, &Pattern::tag("p")), Some(NodePath::new(vec![0])));
//! ```

pub mod attributes;
pub mod document;
pub mod error;
pub mod fragment;
pub mod node;
pub mod path;
pub mod pattern;
pub mod serializer;
pub mod visitor;


pub use attributes::Attributes;
pub use document::{Document, PreOrder};
pub use error::{TreeError, TreeResult};
pub use fragment::Fragment;
pub use node::{char_slice, Node};
pub use path::NodePath;
pub use pattern::{AttrCondition, Pattern};
pub use serializer::{node_to_html, to_html, SerializeOptions};
pub use visitor::{Visitor, VisitorMut};
