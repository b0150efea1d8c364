//! Catalog site CLI
//!
//! Serves the site, or renders single pages and suggestions to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use catalog_site::{
    error::Result,
    models::Config,
    search::{INDUSTRY_SKILLS, SuggestionRanker},
    server::{self, AppState, Params},
};

/// Course catalog site
#[derive(Parser, Debug)]
#[command(
    name = "catalog-site",
    version,
    about = "Server-rendered course catalog and marketing site"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the site over HTTP
    Serve,

    /// Validate the configuration
    Validate,

    /// Render one page and print its HTML
    Render {
        /// Site path, optionally with a query string (e.g. "/blog?page=2")
        path: String,
    },

    /// Print ranked skill suggestions for a query
    Suggest {
        query: String,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Split `/path?a=b` into the path and its decoded query parameters.
fn split_path(raw: &str) -> (String, Params) {
    let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
    let params = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    (path, params)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env();

    match cli.command {
        Command::Serve => {
            log::info!("{} starting...", config.site.name);
            config.validate()?;
            server::serve(config).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (backend {})", config.api.base_url);
        }

        Command::Render { path } => {
            config.validate()?;
            let (path, params) = split_path(&path);
            let state = AppState::from_config(config)?;
            let (status, html) = server::render_page(&state, &path, &params).await;
            if !status.is_success() {
                log::warn!("{} rendered with status {}", path, status);
            }
            println!("{}", html.into_string());
        }

        Command::Suggest { query } => {
            let ranked = SuggestionRanker::home_hero(&config.listing, &config.search)
                .rank(INDUSTRY_SKILLS, &query);
            for suggestion in ranked {
                println!("{suggestion}");
            }
        }
    }

    Ok(())
}
