use super::{load_document, parse_boundary, restore_selection};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use excerpt_ranges::{get_selected_nodes, is_valid_range, Boundary};
use excerpt_tree::{Document, NodePath};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NodesArgs {
    /// JSON document the selection was made in
    pub document: PathBuf,

    /// Selection start as <path>:<offset>
    #[arg(short, long, value_parser = parse_boundary)]
    pub start: Boundary,

    /// Selection end as <path>:<offset>
    #[arg(short, long, value_parser = parse_boundary)]
    pub end: Boundary,

    /// Only accept selections inside this node
    #[arg(long, default_value = "/")]
    pub within: NodePath,
}

pub fn nodes(args: NodesArgs, cwd: &str) -> Result<()> {
    let doc = load_document(&args.document, cwd)?;
    let range = restore_selection(&doc, &args.start, &args.end)?;

    if !is_valid_range(&doc, Some(&range), &args.within) {
        println!(
            "{}",
            format!("⚠️  Selection is empty or outside {}", args.within).yellow()
        );
        return Ok(());
    }

    let selected = get_selected_nodes(&doc, &range);
    if selected.is_empty() {
        println!("{}", "No element nodes selected".dimmed());
        return Ok(());
    }

    for path in &selected {
        println!("  {} {}", path.to_string().cyan(), describe(&doc, path));
    }
    println!();
    println!("{} {} element nodes", "✅".green(), selected.len());

    Ok(())
}

fn describe(doc: &Document, path: &NodePath) -> String {
    match doc.node(path).and_then(|node| node.tag()) {
        Some(tag) => format!("<{}>", tag),
        None => String::new(),
    }
}
