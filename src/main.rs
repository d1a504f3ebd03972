use clap::{Parser, Subcommand};
use git_tree_status::commands::*;
use git_tree_status::core::{print_error, Config, Result, SystemGit};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-tree-status")]
#[command(about = "Git status indicators for directory trees")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Git binary to run
    #[arg(long, global = true, default_value = "git")]
    git: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a directory tree with a status indicator column
    Tree {
        /// Directory to display
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Maximum depth below the root
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Print the indicator of each path
    Status {
        /// Print JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
        /// Files or directories to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };
    let git = SystemGit::with_program(cli.git);

    match cli.command {
        Commands::Tree { path, depth } => execute_tree(&path, depth, config, git),
        Commands::Status { json, paths } => {
            execute_status(&paths, json, config.show_ignored, git)
        }
        Commands::Config => execute_config(&config),
    }
}
