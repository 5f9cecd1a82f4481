//! learnpath CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::catalog::CatalogAction;
use commands::search::SearchTarget;

#[derive(Parser)]
#[command(
    name = "learnpath",
    version,
    about = "Personalized course catalog and recommendation platform"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show catalog KPIs, popular courses, and top students
    Dashboard {
        /// Path to the catalog seed TOML
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Recommend courses for a student
    Recommend {
        /// Path to the catalog seed TOML
        #[arg(long)]
        catalog: PathBuf,

        /// Student identifier
        #[arg(long)]
        student: u32,

        /// How many recommendations to show
        #[arg(long, default_value = "5")]
        top_n: usize,

        /// Seed for the random tie-breaker (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Save the run as a JSON report
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Search students or courses by keyword
    Search {
        /// Path to the catalog seed TOML
        #[arg(long)]
        catalog: PathBuf,

        /// What to search
        #[arg(value_enum)]
        target: SearchTarget,

        /// Case-insensitive keyword
        keyword: String,
    },

    /// Validate a catalog seed file
    Validate {
        /// Path to the catalog seed TOML
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Apply a mutation to a catalog seed file
    Catalog {
        /// Path to the catalog seed TOML
        #[arg(long)]
        catalog: PathBuf,

        /// Write the mutated catalog back to the seed file
        #[arg(long)]
        write: bool,

        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Create a starter catalog seed
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learnpath_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dashboard { catalog } => commands::dashboard::execute(catalog),
        Commands::Recommend {
            catalog,
            student,
            top_n,
            seed,
            output,
        } => commands::recommend::execute(catalog, student, top_n, seed, output),
        Commands::Search {
            catalog,
            target,
            keyword,
        } => commands::search::execute(catalog, target, keyword),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Catalog {
            catalog,
            write,
            action,
        } => commands::catalog::execute(catalog, write, action),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
