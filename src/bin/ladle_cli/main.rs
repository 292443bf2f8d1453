// ABOUTME: Ladle CLI - browse, filter and inspect Spoonacular recipes from the terminal
// ABOUTME: Loads one batch of recipes per run from the API or a saved JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Stats, matching recipes and the cuisine chart
//! ladle-cli list --search pasta --cuisine italian
//!
//! # Same, from a saved complexSearch response, as JSON
//! ladle-cli --input recipes.json --format json list --diet vegan
//!
//! # Detail view for one recipe
//! ladle-cli show 716429
//!
//! # Known cuisine and diet filter values
//! ladle-cli options
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use helpers::display::{print_error, OutputFormat};
use ladle::{
    catalog::RecipeCatalog,
    config::LadleConfig,
    errors::AppResult,
    external::{RecipeSource, SpoonacularClient, StaticRecipeSource},
    logging::LoggingConfig,
    models::FilterQuery,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "ladle-cli",
    about = "Recipe search, filtering and statistics",
    long_about = "Fetches recipes from the Spoonacular search API (or a saved JSON response) and filters, aggregates or inspects them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Load recipes from a saved search response instead of the API
    #[arg(long, short = 'i', global = true)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show stats, matching recipes and the cuisine histogram
    List {
        /// Case-insensitive title substring
        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// Cuisine label ("all" for no constraint)
        #[arg(long, short = 'c')]
        cuisine: Option<String>,

        /// Diet label ("all" for no constraint)
        #[arg(long, short = 'd')]
        diet: Option<String>,

        /// Number of cuisine histogram bars (default: `LADLE_HISTOGRAM_TOP_N` or 10)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show one recipe with its macronutrient breakdown
    Show {
        /// Recipe id
        id: u64,
    },

    /// List the known cuisine and diet filter values
    Options,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(&error, format);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Options => commands::options::run(cli.format),
        Command::List {
            search,
            cuisine,
            diet,
            top,
        } => {
            let config = LadleConfig::from_env()?;
            let mut catalog = load_catalog(&config, cli.input.as_deref()).await?;
            let query = FilterQuery::new()
                .with_search_text(search)
                .with_cuisine(cuisine.as_deref())
                .with_diet(diet.as_deref());
            commands::list::run(
                &mut catalog,
                query,
                top.unwrap_or(config.histogram_top_n),
                cli.format,
            )
        }
        Command::Show { id } => {
            let config = LadleConfig::from_env()?;
            let catalog = load_catalog(&config, cli.input.as_deref()).await?;
            commands::show::run(&catalog, id, cli.format)
        }
    }
}

async fn load_catalog(config: &LadleConfig, input: Option<&Path>) -> AppResult<RecipeCatalog> {
    let source: Box<dyn RecipeSource> = match input {
        Some(path) => Box::new(StaticRecipeSource::from_file(path).await?),
        None => Box::new(SpoonacularClient::new(config.spoonacular.clone())?),
    };

    let mut catalog = RecipeCatalog::new();
    let report = catalog.refresh(source.as_ref()).await?;
    info!(
        source = source.name(),
        accepted = report.accepted,
        rejected = report.rejected,
        duplicates = report.duplicates,
        "Recipes ready"
    );
    Ok(catalog)
}
