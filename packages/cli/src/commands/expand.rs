use super::{load_document, parse_boundary, restore_selection};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use excerpt_ranges::{strip_identifiers, Boundary, Expander};
use excerpt_tree::{to_html, Fragment, SerializeOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// JSON document the selection was made in
    pub document: PathBuf,

    /// Selection start as <path>:<offset>, e.g. /0/1:4
    #[arg(short, long, value_parser = parse_boundary)]
    pub start: Boundary,

    /// Selection end as <path>:<offset>
    #[arg(short, long, value_parser = parse_boundary)]
    pub end: Boundary,

    /// Output format (html, json)
    #[arg(short, long, default_value = "html")]
    pub format: String,

    /// Rewrite links for use outside the source document
    #[arg(long)]
    pub fix_links: bool,

    /// Indent markup output
    #[arg(long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn expand(args: ExpandArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let doc = load_document(&args.document, cwd)?;
    let range = restore_selection(&doc, &args.start, &args.end)?;

    let expander = Expander::new(config.expand);
    let mut fragment = expander.expand_range(&doc, &range)?;
    if args.fix_links || config.fix_links {
        fragment = expander.fix_up_copied_context(fragment);
    }

    let rendered = render(&fragment, &args.format, args.pretty || config.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            eprintln!(
                "  {} {} → {}",
                "✓".green(),
                format!("{} .. {}", args.start, args.end).dimmed(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render(fragment: &Fragment, format: &str, pretty: bool) -> Result<String> {
    match format {
        "html" => {
            let options = if pretty {
                SerializeOptions::pretty()
            } else {
                SerializeOptions::default()
            };
            let stripped = strip_identifiers(fragment.clone());
            Ok(to_html(&stripped.children, &options))
        }
        "json" if pretty => Ok(serde_json::to_string_pretty(fragment)?),
        "json" => Ok(serde_json::to_string(fragment)?),
        other => Err(anyhow!("Unknown format: {}. Use: html or json", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use excerpt_tree::Node;

    #[test]
    fn test_render_html_strips_identifiers() {
        let fragment = Fragment::from_node(
            Node::element("p")
                .with_attr("id", "intro")
                .with_child(Node::text("hello")),
        );
        assert_eq!(render(&fragment, "html", false).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn test_render_json() {
        let fragment = Fragment::from_node(Node::text("hello"));
        let json = render(&fragment, "json", false).unwrap();
        assert_eq!(json, r#"{"children":[{"type":"Text","content":"hello"}]}"#);
    }

    #[test]
    fn test_render_unknown_format() {
        let fragment = Fragment::empty();
        assert!(render(&fragment, "yaml", false).is_err());
    }
}
