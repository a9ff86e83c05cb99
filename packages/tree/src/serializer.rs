use crate::node::Node;
use crate::visitor::{walk_children, Visitor};

/// Options for markup serialization
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Put element children on their own indented lines
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

impl SerializeOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Default::default()
        }
    }
}

struct Context<'a> {
    options: &'a SerializeOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a SerializeOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn add_newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

impl Visitor for Context<'_> {
    fn visit_element(&mut self, element: &Node) {
        let Node::Element {
            tag,
            attributes,
            children,
        } = element
        else {
            return;
        };

        if self.options.pretty {
            self.add_indent();
        }
        self.add("<");
        self.add(tag);
        for (name, value) in attributes.iter() {
            self.add(" ");
            self.add(name);
            self.add("=\"");
            self.add(&escape_attribute(value));
            self.add("\"");
        }
        self.add(">");

        if is_void_element(tag) {
            self.add_newline();
            return;
        }

        let block = self.options.pretty && has_element_children(children);
        if block {
            self.add("\n");
        }
        self.indent();
        walk_children(self, element);
        self.dedent();
        if block {
            self.add_indent();
        }

        self.add("</");
        self.add(tag);
        self.add(">");
        self.add_newline();
    }

    fn visit_text(&mut self, content: &str) {
        self.add(&escape_text(content));
    }
}

/// Serialize a sequence of sibling nodes (innerHTML of their parent)
pub fn to_html(nodes: &[Node], options: &SerializeOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        ctx.visit_node(node);
    }
    ctx.get_output()
}

/// Serialize a node including its own tag (outerHTML)
pub fn node_to_html(node: &Node, options: &SerializeOptions) -> String {
    to_html(std::slice::from_ref(node), options)
}

pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('"', "&quot;")
}

pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[Node]) -> bool {
    children.iter().any(Node::is_element)
}
