//! pr-scores: browse AI code review scores for pull request submissions

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pr_scores::{
    cli,
    config::{
        FetchConfig, OutputConfig, QueryConfig, SourceConfig, ViewConfig, DEFAULT_BASE_URL,
        DEFAULT_TIMEOUT_SECS,
    },
    engine::SortKey,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pr-scores")]
#[command(version)]
#[command(about = "Browse AI code review scores for pull request submissions", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  No submissions matched the query
    3  Error occurred

EXAMPLES:
    # Interactive dashboard against the hosted score store
    pr-scores view

    # Search submissions and print an aligned table
    pr-scores query pr42 -o table

    # Scores scoped to one repository, as JSON for processing
    pr-scores view --repo octo/widgets -o json > scores.json

    # Work from a local scores file instead of the store
    pr-scores view --input alice_scores.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every command that reads the dataset
#[derive(Parser)]
struct SourceArgs {
    /// Base URL of the score store
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "PR_SCORES_BASE_URL")]
    base_url: String,

    /// Repository scoping the store path, as owner/name
    #[arg(long)]
    repo: Option<String>,

    /// Local JSON scores file (overrides the remote store)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl SourceArgs {
    fn into_config(self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url,
            repo: self.repo,
            input: self.input,
            timeout_secs: self.timeout,
        }
    }
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Initial search term (submission id or title substring)
    #[arg(short, long, default_value = "")]
    search: String,

    /// Sort key for contributors and submissions
    #[arg(long, value_enum, default_value_t = SortKey::Contributor)]
    sort: SortKey,

    /// Output format (auto detects TTY: tui if interactive, table otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `query` subcommand
#[derive(Parser)]
struct QueryArgs {
    /// Search term matched against submission ids and titles
    #[arg(default_value = "")]
    search: String,

    #[command(flatten)]
    source: SourceArgs,

    /// Sort key for contributors and submissions
    #[arg(long, value_enum, default_value_t = SortKey::Contributor)]
    sort: SortKey,

    /// Output format (table, json, summary)
    #[arg(short, long, default_value = "table")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `fetch` subcommand
#[derive(Parser)]
struct FetchArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse scores in the interactive dashboard (or render once)
    View(ViewArgs),

    /// Search submissions non-interactively
    Query(QueryArgs),

    /// Fetch the dataset and dump it as JSON
    Fetch(FetchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr so rendered output stays clean
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = match cli.command {
        Commands::View(args) => {
            let config = ViewConfig {
                source: args.source.into_config(),
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                search: args.search,
                sort: args.sort,
            };
            cli::run_view(&config)
        }

        Commands::Query(args) => {
            let config = QueryConfig {
                source: args.source.into_config(),
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                search: args.search,
                sort: args.sort,
            };
            cli::run_query(&config)
        }

        Commands::Fetch(args) => {
            let config = FetchConfig {
                source: args.source.into_config(),
                file: args.output_file,
            };
            cli::run_fetch(&config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pr-scores", &mut io::stdout());
            Ok(cli::exit_codes::SUCCESS)
        }
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(cli::exit_codes::ERROR);
        }
    }
}
