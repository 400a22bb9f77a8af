//! amdpack - component discovery and bundling for AMD-style front-end projects
//!
//! Scans the HTML pages of a project for declared components and the page
//! scripts for registered extensions, bundles one unit per page and rewrites
//! each unit's entry call so every bundled component is initialised.

use clap::Parser;
use env_logger::Env;

mod assembler;
mod bundler;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod module_list;
mod pipeline;
mod progress;
mod rewriter;
mod scanner;
mod ui;

use cli::{Cli, Commands};

/// Default log filter: debug with `--verbose`, warnings otherwise. `RUST_LOG`
/// overrides both.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(cli.verbose)))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.project, cli.config, args),
        Commands::Scan(args) => commands::scan::run(cli.project, cli.config, args),
        Commands::Rewrite(args) => commands::rewrite::run(cli.project, cli.config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
