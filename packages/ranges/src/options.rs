use crate::ignorable::DEFAULT_IGNORABLE_TAGS;
use excerpt_tree::{AttrCondition, Pattern};
use serde::{Deserialize, Serialize};

/// Attribute that flags a markup-enabled container
pub const MARKUP_ENABLED_ITEMPROP: &str = "nti-data-markupenabled";

/// `object`: any embedded widget
pub fn widget_pattern() -> Pattern {
    Pattern::tag("object")
}

/// `object[type$=naquestion]`
pub fn question_pattern() -> Pattern {
    Pattern::tag("object").attr_suffix("type", "naquestion")
}

/// `object[type$=ntivideo]`
pub fn video_pattern() -> Pattern {
    Pattern::tag("object").attr_suffix("type", "ntivideo")
}

/// `[itemprop~=nti-data-markupenabled]`
pub fn markup_container_pattern() -> Pattern {
    Pattern::any().attr_word("itemprop", MARKUP_ENABLED_ITEMPROP)
}

/// `object:not([type*=nti])`: widgets with nothing to show once extracted
pub fn non_contextual_patterns() -> Vec<Pattern> {
    vec![Pattern::tag("object").without(AttrCondition::substring("type", "nti"))]
}

/// Knobs for range expansion; every field falls back to the built-in default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpandOptions {
    /// Element tags that never stop boundary expansion
    pub ignorable_tags: Vec<String>,

    /// Nodes handed to the object context registry
    pub widget: Pattern,

    /// Containers that must be selected whole
    pub markup_container: Pattern,

    /// Removed from every cloned fragment
    pub non_contextual: Vec<Pattern>,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            ignorable_tags: DEFAULT_IGNORABLE_TAGS.iter().map(|t| t.to_string()).collect(),
            widget: widget_pattern(),
            markup_container: markup_container_pattern(),
            non_contextual: non_contextual_patterns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_display() {
        let options = ExpandOptions::default();
        assert_eq!(options.widget.to_string(), "object");
        assert_eq!(
            options.markup_container.to_string(),
            "[itemprop~=nti-data-markupenabled]"
        );
        assert_eq!(options.non_contextual[0].to_string(), "object:not([type*=nti])");
        assert_eq!(question_pattern().to_string(), "object[type$=naquestion]");
        assert_eq!(video_pattern().to_string(), "object[type$=ntivideo]");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let options: ExpandOptions =
            serde_json::from_str(r#"{ "ignorableTags": ["a", "em"] }"#).unwrap();
        assert_eq!(options.ignorable_tags, vec!["a", "em"]);
        assert_eq!(options.widget, widget_pattern());
        assert_eq!(options.non_contextual, non_contextual_patterns());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ExpandOptions::default()).unwrap();
        assert_eq!(json["widget"]["tag"], "object");
        assert!(json["markupContainer"]["conditions"].is_array());
        assert_eq!(json["ignorableTags"].as_array().map(Vec::len), Some(6));
    }
}
