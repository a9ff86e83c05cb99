//! Structural patterns over elements
//!
//! A [`Pattern`] is an optional tag plus attribute conditions, roughly the
//! subset of CSS compound selectors the expansion rules need:
//!
//! ```text
//! object[type$=naquestion]          Pattern::tag("object").attr_suffix("type", "naquestion")
//! object:not([type*=nti])           Pattern::tag("object").without(AttrCondition::substring("type", "nti"))
//! [itemprop~=nti-data-markupenabled] Pattern::any().attr_word("itemprop", "nti-data-markupenabled")
//! ```
//!
//! Text nodes never match.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum AttrCondition {
    /// `[name]`
    Present { name: String },
    /// `[name=value]`
    Equals { name: String, value: String },
    /// `[name^=value]`
    Prefix { name: String, value: String },
    /// `[name$=value]`
    Suffix { name: String, value: String },
    /// `[name*=value]`
    Substring { name: String, value: String },
    /// `[name~=value]`
    Word { name: String, value: String },
    /// `:not(...)`
    Not { condition: Box<AttrCondition> },
}

impl AttrCondition {
    pub fn present(name: impl Into<String>) -> Self {
        AttrCondition::Present { name: name.into() }
    }

    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        AttrCondition::Equals {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn prefix(name: impl Into<String>, value: impl Into<String>) -> Self {
        AttrCondition::Prefix {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn suffix(name: impl Into<String>, value: impl Into<String>) -> Self {
        AttrCondition::Suffix {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn substring(name: impl Into<String>, value: impl Into<String>) -> Self {
        AttrCondition::Substring {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn word(name: impl Into<String>, value: impl Into<String>) -> Self {
        AttrCondition::Word {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn not(condition: AttrCondition) -> Self {
        AttrCondition::Not {
            condition: Box::new(condition),
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        // Empty operands never match for the substring-style operators, as in CSS.
        match self {
            AttrCondition::Present { name } => node.attr(name).is_some(),
            AttrCondition::Equals { name, value } => node.attr(name) == Some(value.as_str()),
            AttrCondition::Prefix { name, value } => {
                !value.is_empty() && node.attr(name).is_some_and(|v| v.starts_with(value.as_str()))
            }
            AttrCondition::Suffix { name, value } => {
                !value.is_empty() && node.attr(name).is_some_and(|v| v.ends_with(value.as_str()))
            }
            AttrCondition::Substring { name, value } => {
                !value.is_empty() && node.attr(name).is_some_and(|v| v.contains(value.as_str()))
            }
            AttrCondition::Word { name, value } => {
                !value.is_empty()
                    && !value.contains(char::is_whitespace)
                    && node
                        .attr(name)
                        .is_some_and(|v| v.split_whitespace().any(|w| w == value.as_str()))
            }
            AttrCondition::Not { condition } => !condition.matches(node),
        }
    }
}

impl fmt::Display for AttrCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrCondition::Present { name } => write!(f, "[{}]", name),
            AttrCondition::Equals { name, value } => write!(f, "[{}={}]", name, value),
            AttrCondition::Prefix { name, value } => write!(f, "[{}^={}]", name, value),
            AttrCondition::Suffix { name, value } => write!(f, "[{}$={}]", name, value),
            AttrCondition::Substring { name, value } => write!(f, "[{}*={}]", name, value),
            AttrCondition::Word { name, value } => write!(f, "[{}~={}]", name, value),
            AttrCondition::Not { condition } => write!(f, ":not({})", condition),
        }
    }
}

/// Tag and attribute test for an element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<AttrCondition>,
}

impl Pattern {
    /// Matches every element
    pub fn any() -> Self {
        Self::default()
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into().to_ascii_lowercase()),
            conditions: Vec::new(),
        }
    }

    pub fn with(mut self, condition: AttrCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn without(self, condition: AttrCondition) -> Self {
        self.with(AttrCondition::not(condition))
    }

    pub fn with_attr(self, name: impl Into<String>) -> Self {
        self.with(AttrCondition::present(name))
    }

    pub fn attr_equals(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(AttrCondition::equals(name, value))
    }

    pub fn attr_prefix(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(AttrCondition::prefix(name, value))
    }

    pub fn attr_suffix(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(AttrCondition::suffix(name, value))
    }

    pub fn attr_contains(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(AttrCondition::substring(name, value))
    }

    pub fn attr_word(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(AttrCondition::word(name, value))
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr_word("class", class)
    }

    pub fn without_class(self, class: impl Into<String>) -> Self {
        self.without(AttrCondition::word("class", class))
    }

    pub fn matches(&self, node: &Node) -> bool {
        let Some(tag) = node.tag() else {
            return false;
        };
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.conditions.iter().all(|condition| condition.matches(node))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}", tag)?,
            None if self.conditions.is_empty() => write!(f, "*")?,
            None => {}
        }
        for condition in &self.conditions {
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(type_attr: Option<&str>) -> Node {
        let node = Node::element("object");
        match type_attr {
            Some(value) => node.with_attr("type", value),
            None => node,
        }
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        let node = Node::Element {
            tag: "OBJECT".to_string(),
            attributes: Default::default(),
            children: vec![],
        };
        assert!(Pattern::tag("object").matches(&node));
        assert!(!Pattern::tag("div").matches(&node));
    }

    #[test]
    fn test_text_never_matches() {
        assert!(!Pattern::any().matches(&Node::text("hello")));
    }

    #[test]
    fn test_suffix() {
        let pattern = Pattern::tag("object").attr_suffix("type", "naquestion");
        assert!(pattern.matches(&object(Some("application/vnd.nextthought.naquestion"))));
        assert!(pattern.matches(&object(Some(".naquestion"))));
        assert!(!pattern.matches(&object(Some("naquestion.video"))));
        assert!(!pattern.matches(&object(None)));
    }

    #[test]
    fn test_not_substring_matches_missing_attribute() {
        let pattern = Pattern::tag("object").without(AttrCondition::substring("type", "nti"));
        assert!(pattern.matches(&object(None)));
        assert!(pattern.matches(&object(Some("application/x-shockwave-flash"))));
        assert!(!pattern.matches(&object(Some("application/vnd.nextthought.ntivideo"))));
    }

    #[test]
    fn test_word_matches_whole_tokens() {
        let pattern = Pattern::any().attr_word("itemprop", "nti-data-markupenabled");
        let single = Node::element("div").with_attr("itemprop", "nti-data-markupenabled");
        let multi = Node::element("div").with_attr("itemprop", "nti-data-markupenabled hello");
        let partial = Node::element("div").with_attr("itemprop", "nti-data-markupenabled-x");
        assert!(pattern.matches(&single));
        assert!(pattern.matches(&multi));
        assert!(!pattern.matches(&partial));
    }

    #[test]
    fn test_empty_operands_never_match() {
        let node = Node::element("a").with_attr("href", "#top");
        assert!(!Pattern::any().attr_prefix("href", "").matches(&node));
        assert!(!Pattern::any().attr_word("href", "").matches(&node));
    }

    #[test]
    fn test_display() {
        let pattern = Pattern::tag("a")
            .attr_prefix("href", "#")
            .without_class("skip-anchor");
        assert_eq!(pattern.to_string(), "a[href^=#]:not([class~=skip-anchor])");
        assert_eq!(Pattern::any().to_string(), "*");
    }
}
