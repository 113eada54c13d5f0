use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repotree::cli::commands::{stats, structure, tree};
use repotree::config::OutputFormat;
use repotree::tree::SortOrder;

#[derive(Parser)]
#[command(name = "repotree")]
#[command(
    version,
    about = "Rebuild repository file trees from flat hosting-API listings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the tree of a saved listing
    Tree {
        #[arg(
            short = 'i',
            long,
            default_value = "-",
            help = "Listing file (envelope or bare array), '-' for stdin"
        )]
        input: PathBuf,
        #[arg(short = 'f', long, help = "Output format: text, json, yaml")]
        format: Option<OutputFormat>,
        #[arg(
            long,
            help = "Sort order: preserve, alphabetical, directories-first"
        )]
        sort: Option<SortOrder>,
        #[arg(short = 'd', long, help = "Maximum depth to render")]
        depth: Option<usize>,
        #[arg(short = 'e', long, help = "Glob of paths to exclude (repeatable)")]
        exclude: Vec<String>,
        #[arg(long, help = "Show file sizes")]
        sizes: bool,
    },

    /// Assemble the structure of a repository from saved snapshots
    Structure {
        #[arg(help = "Repository as owner/name")]
        repo: String,
        #[arg(long, help = "Snapshot root directory")]
        snapshots: Option<PathBuf>,
        #[arg(short = 'f', long, help = "Output format: text, json, yaml")]
        format: Option<OutputFormat>,
        #[arg(
            long,
            help = "Sort order: preserve, alphabetical, directories-first"
        )]
        sort: Option<SortOrder>,
        #[arg(short = 'd', long, help = "Maximum depth to render")]
        depth: Option<usize>,
    },

    /// Summarize a saved listing
    Stats {
        #[arg(short = 'i', long, default_value = "-", help = "Listing file, '-' for stdin")]
        input: PathBuf,
        #[arg(short = 'f', long, help = "Output format: text, json, yaml")]
        format: Option<OutputFormat>,
        #[arg(long, help = "Only categorize recognized source files")]
        source_only: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json, yaml"
        )]
        format: OutputFormat,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mrepotree encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Tree {
            input,
            format,
            sort,
            depth,
            exclude,
            sizes,
        } => {
            tree::run(tree::TreeOptions {
                input,
                format,
                sort,
                depth,
                exclude,
                sizes,
            })?;
        }
        Commands::Structure {
            repo,
            snapshots,
            format,
            sort,
            depth,
        } => {
            structure::run(structure::StructureOptions {
                repo,
                snapshots,
                format,
                sort,
                depth,
            })?;
        }
        Commands::Stats {
            input,
            format,
            source_only,
        } => {
            stats::run(input, format, source_only)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                repotree::cli::commands::config::show(format)?;
            }
            ConfigAction::Path => {
                repotree::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    repotree::cli::commands::config::init_global(force)?;
                } else {
                    repotree::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
