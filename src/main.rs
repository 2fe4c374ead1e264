use clap::{Parser, Subcommand};
use log::error;
use std::process::ExitCode;
use std::time::Duration;

use mealdb_search::{view, Flow, RecipeSearch, SearchConfig, SearchOutcome};

#[derive(Parser)]
#[command(name = "mealdb-search")]
#[command(about = "Search TheMealDB recipes from the terminal")]
#[command(version)]
struct Cli {
    /// HTTP timeout in seconds (overrides mealdb.toml / MEALDB__TIMEOUT)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes by name
    Search {
        /// Words to search for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show ingredients and instructions for one recipe
    Show {
        /// Recipe id as listed in search results
        id: String,
    },
    /// List featured recipes
    Featured,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match SearchConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut builder = RecipeSearch::builder().config(config);
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let (builder, flow) = match cli.command {
        Command::Search { query, limit } => {
            let builder = builder.query(query.join(" "));
            let builder = match limit {
                Some(limit) => builder.limit(limit),
                None => builder,
            };
            (builder, Flow::Search)
        }
        Command::Show { id } => (builder.lookup(id), Flow::Detail),
        Command::Featured => (builder.featured(), Flow::Search),
    };

    match builder.build().await {
        Ok(SearchOutcome::Results(recipes)) => {
            println!("{}", view::render_results(&recipes));
            ExitCode::SUCCESS
        }
        Ok(SearchOutcome::Detail(recipe)) => {
            print!("{}", view::render_detail(&recipe));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message(flow));
            ExitCode::FAILURE
        }
    }
}
