mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{expand, nodes, ExpandArgs, NodesArgs};
use tracing_subscriber::EnvFilter;

/// Excerpt CLI - turn a text selection into self-contained context
#[derive(Parser, Debug)]
#[command(name = "excerpt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log expansion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a selection and print the context fragment
    Expand(ExpandArgs),

    /// List the element nodes a selection covers
    Nodes(NodesArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Expand(args) => expand(args, &cwd),
                Command::Nodes(args) => nodes(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
