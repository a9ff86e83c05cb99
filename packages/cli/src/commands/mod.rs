pub mod expand;
pub mod nodes;

pub use expand::{expand, ExpandArgs};
pub use nodes::{nodes, NodesArgs};

use anyhow::{anyhow, Context, Result};
use excerpt_ranges::{restore_saved_range, Boundary, Range, SavedSelection};
use excerpt_tree::{Document, NodePath};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse `/0/1:4` into a boundary (container path, offset)
pub fn parse_boundary(s: &str) -> Result<Boundary, String> {
    let (path, offset) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected <path>:<offset>, got '{}'", s))?;
    let container: NodePath = path.parse().map_err(|e| format!("{}", e))?;
    let offset = offset
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid offset '{}'", offset))?;
    Ok(Boundary::new(container, offset))
}

/// Read a JSON-serialized document
pub fn load_document(path: &Path, cwd: &str) -> Result<Document> {
    let full_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    };
    let content = fs::read_to_string(&full_path)
        .with_context(|| format!("Cannot read document {}", full_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid document {}", full_path.display()))
}

/// Rebuild the selection the way a saved one is restored
pub fn restore_selection(doc: &Document, start: &Boundary, end: &Boundary) -> Result<Range> {
    let saved = SavedSelection {
        start_container: start.container.clone(),
        start_offset: start.offset,
        end_container: end.container.clone(),
        end_offset: end.offset,
        collapsed: start == end,
    };
    restore_saved_range(doc, Some(&saved))
        .ok_or_else(|| anyhow!("Selection {} .. {} does not fit the document", start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use excerpt_tree::Node;

    #[test]
    fn test_parse_boundary() {
        let boundary = parse_boundary("/0/1:4").unwrap();
        assert_eq!(boundary.container, NodePath::new(vec![0, 1]));
        assert_eq!(boundary.offset, 4);

        let root = parse_boundary("/:2").unwrap();
        assert!(root.container.is_root());
    }

    #[test]
    fn test_parse_boundary_errors() {
        assert!(parse_boundary("/0/1").is_err());
        assert!(parse_boundary("0/1:2").is_err());
        assert!(parse_boundary("/0/x:2").is_err());
        assert!(parse_boundary("/0:-1").is_err());
    }

    #[test]
    fn test_restore_selection() {
        let doc = Document::new(Node::element("body").with_child(Node::text("hello")));
        let start = parse_boundary("/0:1").unwrap();
        let end = parse_boundary("/0:4").unwrap();
        assert!(restore_selection(&doc, &start, &end).is_ok());

        let past_end = parse_boundary("/0:9").unwrap();
        assert!(restore_selection(&doc, &start, &past_end).is_err());
    }
}
