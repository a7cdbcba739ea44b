//! Linkleaf CLI
//!
//! Command-line manager for a personal link feed stored as canonical CBOR.
//!
//! # Commands
//!
//! - `init` - Create (or overwrite) a feed file
//! - `add` - Prepend a link, creating the feed on demand
//! - `list` - Numbered listing of the links
//! - `print` - Plain key/value dump
//! - `export` - Write the feed as editable JSON
//! - `import` - Replace a feed with the contents of a JSON file

mod commands;
mod format;

use clap::{Args, Parser, Subcommand};
use linkleaf_core::NewLink;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Linkleaf: manage a personal feed of links.
#[derive(Parser)]
#[command(name = "linkleaf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a feed file, overwriting any existing one
    Init {
        /// Feed file to create
        file: PathBuf,

        /// Feed title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Feed version
        #[arg(long = "feed-version", default_value_t = 1)]
        version: u32,
    },

    /// Prepend a link (newest first); creates the feed if needed
    Add(AddArgs),

    /// List links with their details
    List {
        /// Feed file
        file: PathBuf,
    },

    /// Dump the feed as plain key/value text
    Print {
        /// Feed file
        file: PathBuf,
    },

    /// Write the feed as editable JSON
    Export {
        /// Feed file
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace a feed with the contents of a JSON file
    Import {
        /// JSON file to read
        input: PathBuf,

        /// Feed file to write
        file: PathBuf,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Feed file
    #[arg(short, long, env = "LINKLEAF_FILE")]
    file: PathBuf,

    /// Link title
    #[arg(short, long)]
    title: String,

    /// Link URL
    #[arg(short, long)]
    url: String,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Short summary
    #[arg(short, long)]
    summary: Option<String>,

    /// Comma-separated tags (e.g. a,b,c)
    #[arg(long, default_value = "")]
    tags: String,

    /// Attribution URL or text
    #[arg(long)]
    via: Option<String>,

    /// Stable id (default: first 12 hex chars of sha256(url|date))
    #[arg(long)]
    id: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), commands::CliError> {
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Init {
            file,
            title,
            version,
        } => commands::init::run(&file, &title, version, &mut stdout),
        Commands::Add(args) => {
            let link = NewLink {
                title: args.title,
                url: args.url,
                date: args.date,
                summary: args.summary,
                tags: format::split_tags(&args.tags),
                via: args.via,
                id: args.id,
            };
            commands::add::run(&args.file, link, &mut stdout)
        }
        Commands::List { file } => commands::list::run(&file, &mut stdout),
        Commands::Print { file } => commands::print::run(&file, &mut stdout),
        Commands::Export { file, output } => {
            commands::convert::export(&file, output.as_deref(), &mut stdout)
        }
        Commands::Import { input, file } => commands::convert::import(&input, &file, &mut stdout),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LINKLEAF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
