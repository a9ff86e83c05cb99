use crate::error::TreeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address of a node: child indices from the document root
///
/// The root is the empty path. The derived ordering is document order:
/// lexicographic, with an ancestor sorting before its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn parent(&self) -> Option<NodePath> {
        let (_, rest) = self.0.split_last()?;
        Some(NodePath(rest.to_vec()))
    }

    /// Index of this node within its parent
    pub fn index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }

    /// Path of the sibling at `index` under the same parent
    pub fn with_index(&self, index: usize) -> Option<NodePath> {
        let mut indices = self.0.clone();
        *indices.last_mut()? = index;
        Some(NodePath(indices))
    }

    pub fn is_inclusive_ancestor_of(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }

    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        self.0.len() < other.0.len() && self.is_inclusive_ancestor_of(other)
    }

    /// Deepest path that is an inclusive ancestor of both
    pub fn common_ancestor(&self, other: &NodePath) -> NodePath {
        let shared = self
            .0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count();
        NodePath(self.0[..shared].to_vec())
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        NodePath(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = TreeError;

    /// Parses the `Display` form, e.g. `/0/2/1` or `/`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix('/')
            .ok_or_else(|| TreeError::InvalidPath(s.to_string()))?;
        if body.is_empty() {
            return Ok(NodePath::root());
        }
        body.split('/')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| TreeError::InvalidPath(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(NodePath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_and_index() {
        let path = NodePath::new(vec![0, 2, 1]);
        assert_eq!(path.parent(), Some(NodePath::new(vec![0, 2])));
        assert_eq!(path.index(), Some(1));
        assert_eq!(NodePath::root().parent(), None);
        assert_eq!(NodePath::root().index(), None);
    }

    #[test]
    fn test_document_order() {
        let parent = NodePath::new(vec![0]);
        let child = NodePath::new(vec![0, 0]);
        let sibling = NodePath::new(vec![1]);
        assert!(parent < child);
        assert!(child < sibling);
    }

    #[test]
    fn test_common_ancestor() {
        let a = NodePath::new(vec![0, 1, 0]);
        let b = NodePath::new(vec![0, 1, 3, 2]);
        assert_eq!(a.common_ancestor(&b), NodePath::new(vec![0, 1]));
        assert_eq!(a.common_ancestor(&a), a);
        assert!(NodePath::new(vec![0]).is_ancestor_of(&a));
        assert!(!a.is_ancestor_of(&a));
        assert!(a.is_inclusive_ancestor_of(&a));
    }

    #[test]
    fn test_display_and_parse() {
        let path = NodePath::new(vec![0, 12, 3]);
        assert_eq!(path.to_string(), "/0/12/3");
        assert_eq!("/0/12/3".parse::<NodePath>().unwrap(), path);
        assert_eq!("/".parse::<NodePath>().unwrap(), NodePath::root());
        assert!("0/1".parse::<NodePath>().is_err());
        assert!("/a".parse::<NodePath>().is_err());
    }
}
