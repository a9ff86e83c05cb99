//! # Range expansion
//!
//! Turns a raw user selection into a self-contained fragment worth showing
//! as the context of a note. Strategies are tried in priority order:
//!
//! 1. the range touches an embedded widget: the widget's registered
//!    stand-in content, returned as is
//! 2. the range sits in a markup-enabled container: the whole container
//! 3. otherwise: the range widened across ignorable nodes
//!
//! Fragments from 2 and 3 have non-contextual nodes stripped. Nothing here
//! mutates the document.

use crate::cleanup;
use crate::error::{ExpandError, RangeResult};
use crate::ignorable::{IgnorableClassifier, IgnoredNodes, NoIgnoredNodes};
use crate::markup;
use crate::object_context::{self, ObjectContextRegistry};
use crate::options::{markup_container_pattern, ExpandOptions};
use crate::range::Range;
use crate::rewrite;
use crate::walker;
use excerpt_tree::{Document, Fragment};
use std::fmt;
use tracing::{debug, instrument};

/// Range expansion with its configuration and collaborators
pub struct Expander {
    options: ExpandOptions,
    registry: ObjectContextRegistry,
    ignored: Box<dyn IgnoredNodes>,
}

impl Expander {
    pub fn new(options: ExpandOptions) -> Self {
        Self {
            options,
            registry: ObjectContextRegistry::default(),
            ignored: Box::new(NoIgnoredNodes),
        }
    }

    pub fn with_options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_registry(mut self, registry: ObjectContextRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Install the annotation-boundary service
    pub fn with_ignored(mut self, ignored: impl IgnoredNodes + 'static) -> Self {
        self.ignored = Box::new(ignored);
        self
    }

    pub fn options(&self) -> &ExpandOptions {
        &self.options
    }

    pub fn registry(&self) -> &ObjectContextRegistry {
        &self.registry
    }

    pub fn classifier(&self) -> IgnorableClassifier<'_> {
        IgnorableClassifier::new(&self.options.ignorable_tags, self.ignored.as_ref())
    }

    pub fn try_object_context(&self, doc: &Document, range: &Range) -> Option<Fragment> {
        object_context::try_object_context(doc, range, &self.options.widget, &self.registry)
    }

    pub fn try_markup_container(&self, doc: &Document, range: &Range) -> Option<Range> {
        markup::try_markup_container(doc, range, &self.options.markup_container)
    }

    pub fn expand_boundaries(&self, doc: &Document, range: &Range) -> RangeResult<Range> {
        walker::expand_boundaries(doc, range, &self.classifier())
    }

    pub fn strip_non_contextual(&self, fragment: Fragment) -> Fragment {
        cleanup::strip_non_contextual(fragment, &self.options.non_contextual)
    }

    pub fn fix_up_copied_context(&self, fragment: Fragment) -> Fragment {
        rewrite::rewrite_links(fragment, &self.options.markup_container)
    }

    /// Expand `range` into a detached context fragment
    #[instrument(skip(self, doc, range), fields(start = %range.start(), end = %range.end()))]
    pub fn expand_range(&self, doc: &Document, range: &Range) -> Result<Fragment, ExpandError> {
        range.validate(doc)?;

        if let Some(fragment) = self.try_object_context(doc, range) {
            debug!("Resolved range to object context");
            return Ok(fragment);
        }

        let target = match self.try_markup_container(doc, range) {
            Some(container) => {
                debug!("Resolved range to markup container");
                container
            }
            None => self.expand_boundaries(doc, range)?,
        };

        let fragment = target
            .clone_contents(doc)
            .map_err(|e| ExpandError::CloneFailure(e.to_string()))?;
        Ok(self.strip_non_contextual(fragment))
    }

    /// Expanded context as markup, with identifier attributes removed
    ///
    /// Never fails: any error yields the markup of an empty fragment.
    #[instrument(skip(self, doc, range), fields(start = %range.start(), end = %range.end()))]
    pub fn expand_range_get_string(&self, doc: &Document, range: &Range) -> String {
        let fragment = self.expand_range(doc, range).unwrap_or_else(|e| {
            debug!("Could not clone range contents: {}", e);
            Fragment::empty()
        });
        cleanup::strip_identifiers(fragment).to_html()
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(ExpandOptions::default())
    }
}

impl fmt::Debug for Expander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// [`Expander::expand_range`] with default options
pub fn expand_range(doc: &Document, range: &Range) -> Result<Fragment, ExpandError> {
    Expander::default().expand_range(doc, range)
}

/// [`Expander::expand_range_get_string`] with default options
pub fn expand_range_get_string(doc: &Document, range: &Range) -> String {
    Expander::default().expand_range_get_string(doc, range)
}

/// Whole markup-enabled container around `range`, if there is one
pub fn range_if_item_prop_span(doc: &Document, range: &Range) -> Option<Range> {
    markup::try_markup_container(doc, range, &markup_container_pattern())
}

/// Rewrite links in copied context for use outside the source document
pub fn fix_up_copied_context(fragment: Fragment) -> Fragment {
    rewrite::rewrite_links(fragment, &markup_container_pattern())
}
