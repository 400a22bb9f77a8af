//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// amdpack - component discovery and bundling for AMD-style projects
///
/// Scans HTML pages for declared components and extensions, bundles one unit per
/// page and wires every bundled component's init() into the unit's entry call.
#[derive(Parser, Debug)]
#[command(
    name = "amdpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Component discovery and bundling for AMD-style front-end projects",
    long_about = "amdpack scans the HTML pages of a project for data-component declarations \
                  and app.use() extension registrations, bundles one unit per page and rewrites \
                  each unit's entry call so every bundled component is initialised.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  amdpack build\n    \
                  amdpack build --out dist\n    \
                  amdpack scan --json\n    \
                  amdpack rewrite\n    \
                  amdpack -p ./site build -v"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Configuration file, relative to the project directory (defaults to amdpack.yaml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan pages, bundle, and rewrite entry calls
    Build(BuildArgs),

    /// Show the bundling units discovered in the project
    Scan(ScanArgs),

    /// Rewrite entry calls of already bundled output
    Rewrite(RewriteArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Directory overrides shared by the commands, relative to the project directory
#[derive(Args, Debug, Default, Clone)]
pub struct DirArgs {
    /// Directory holding pages, components and extensions
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Build with amdpack.yaml or defaults:\n    amdpack build\n\n\
                   Build into another directory:\n    amdpack build --out dist\n\n\
                   Keep the bundler log:\n    amdpack build --keep-artifacts")]
pub struct BuildArgs {
    #[command(flatten)]
    pub dirs: DirArgs,

    /// Do not delete intermediate artifacts after rewriting
    #[arg(long)]
    pub keep_artifacts: bool,
}

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundling units:\n    amdpack scan\n\n\
                  Print the bundle configuration as JSON:\n    amdpack scan --json")]
pub struct ScanArgs {
    #[command(flatten)]
    pub dirs: DirArgs,

    /// Print the full bundle configuration as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the rewrite command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Rewrite output produced by an external bundler:\n    amdpack rewrite --out release")]
pub struct RewriteArgs {
    #[command(flatten)]
    pub dirs: DirArgs,

    /// Do not delete intermediate artifacts after rewriting
    #[arg(long)]
    pub keep_artifacts: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    amdpack completions --shell bash > ~/.bash_completion.d/amdpack\n\n\
                  Generate zsh completions:\n    amdpack completions --shell zsh > ~/.zfunc/_amdpack")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
