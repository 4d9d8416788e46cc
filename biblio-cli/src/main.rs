//! Biblio CLI - Personal book catalog manager

mod commands;
mod console;
mod shell;

use anyhow::Result;
use biblio_core::{CatalogStore, SearchMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse and validate a page number (must be at least 1)
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "biblio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog file
    #[arg(long, global = true, default_value = "library.db")]
    db: PathBuf,

    /// Settings file (page size and banner)
    #[arg(long, global = true, default_value = "app.conf")]
    config: PathBuf,

    /// Without a command the interactive shell starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books of the catalog, one page at a time
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search books by ISBN, title or publisher code
    Search {
        /// Text to look for
        query: String,

        /// Search mode (isbn, title, publisher)
        #[arg(short, long, default_value = "title")]
        by: SearchMode,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import books from a delimited or one-field-per-line file, then save
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Export the catalog to a static page or a delimited file
    Export {
        /// Output file path (defaults to catalogue.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (html, csv)
        #[arg(short, long, default_value = "html")]
        format: String,
    },

    /// Display the catalog name, description and size
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every book from the catalog
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the shell screens
    let filter = if cli.verbose {
        "biblio_cli=debug,biblio_core=debug"
    } else {
        "biblio_cli=warn,biblio_core=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = CatalogStore::new(&cli.db);

    match cli.command {
        None => {
            let config = shell::load_or_create_config(&cli.config);
            let export_path = cli.db.with_file_name(shell::EXPORT_FILE_NAME);
            let mut shell = shell::Shell::new(
                console::Terminal::new(),
                store,
                shell::ShellPaths {
                    config: cli.config,
                    export: export_path,
                },
                config,
            );
            shell.run();
            Ok(())
        }

        Some(Commands::List { page, json }) => {
            commands::list(&store, &commands::read_config(&cli.config), page, json)
        }

        Some(Commands::Search { query, by, json }) => commands::search(&store, by, &query, json),

        Some(Commands::Import { file }) => commands::import(&store, &file),

        Some(Commands::Export { output, format }) => {
            commands::export(&store, output.as_deref(), &format)
        }

        Some(Commands::Info { json }) => commands::info(&store, json),

        Some(Commands::Clear { yes }) => commands::clear(&store, yes),
    }
}
