//! Keyscape - keyword landscape from category/keyword image folders
//!
//! Scans an asset tree, lays out one tile per keyword and applies selections
//! from the command line.

use clap::{Parser, Subcommand};
use keyscape::cli::{
    CheckArgs, CliResult, ConfigArgs, GlobalArgs, HighlightArgs, LayoutArgs, ProjectsArgs,
    ReplayArgs, ScanArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keyscape - keyword landscape builder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the asset tree and summarize the catalog
    Scan(ScanArgs),
    /// Compute the landscape layout
    Layout(LayoutArgs),
    /// Highlight a selection of keywords
    Highlight(HighlightArgs),
    /// Report matched and unknown keywords per project
    Projects(ProjectsArgs),
    /// Replay key presses against the landscape
    Replay(ReplayArgs),
    /// Check that every strategy can lay out the catalog
    Check(CheckArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        match self {
            Self::Scan(args) => args.execute(global),
            Self::Layout(args) => args.execute(global),
            Self::Highlight(args) => args.execute(global),
            Self::Projects(args) => args.execute(global),
            Self::Replay(args) => args.execute(global),
            Self::Check(args) => args.execute(global),
            Self::Config(args) => args.execute(global),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute(&cli.global) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
