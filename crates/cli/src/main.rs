//! Gztechiz CLI: exercise the live-search suggestion flow from the terminal.
//!
//! Runs the same controller the browser search box uses against a live
//! `/api/search` endpoint, with no browser involved.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use gztechiz_core::client::{dispatch, HttpSearchClient};
use gztechiz_core::suggest::{InputAction, ResponseOutcome, SuggestionController, SuggestionSettings};
use gztechiz_core::{load_site_config_file, SiteConfig};

/// Gztechiz CLI: probe the blog's live search from the terminal.
#[derive(Parser)]
#[command(name = "gz", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site config file (default: built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one suggestion cycle and print the dropdown
    Suggest {
        /// Text as typed into the search box
        query: String,

        /// Server origin, e.g. http://localhost:5000 (default: `api_base` from config)
        #[arg(long)]
        base_url: Option<String>,

        /// Output as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective site config
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig, String> {
    match path {
        Some(p) => load_site_config_file(p),
        None => Ok(SiteConfig::default()),
    }
}

async fn run_suggest(
    config: &SiteConfig,
    query: &str,
    base_url: Option<String>,
    json: bool,
) -> Result<ExitCode, String> {
    let mut controller = SuggestionController::new(SuggestionSettings::from(config));

    if let Err(rejection) = controller.check_submit(query) {
        eprintln!("{rejection}");
        return Ok(ExitCode::from(2));
    }

    let base = base_url
        .or_else(|| (!config.api_base.is_empty()).then(|| config.api_base.clone()))
        .ok_or("No server to query: pass --base-url or set api_base in the config")?;
    let client = HttpSearchClient::new(&base, &config.search_path);
    tracing::debug!(endpoint = client.endpoint(), "Querying");

    let InputAction::Schedule(ticket) = controller.on_input(query) else {
        return Ok(ExitCode::from(2));
    };
    tokio::time::sleep(ticket.delay()).await;
    let tag = controller
        .on_debounce_elapsed(&ticket)
        .ok_or("Debounce ticket was superseded")?;

    let (tag, result) = dispatch(&client, tag).await;
    match controller.on_response(&tag, result) {
        ResponseOutcome::Rendered(_) => {}
        ResponseOutcome::Emptied => {
            eprintln!("No suggestions for '{query}'");
            return Ok(ExitCode::FAILURE);
        }
        ResponseOutcome::Failed | ResponseOutcome::Stale => {
            eprintln!("Search failed (see log above)");
            return Ok(ExitCode::FAILURE);
        }
    }

    let list = controller.dropdown().ok_or("Dropdown not visible after render")?;
    if json {
        let out = serde_json::to_string_pretty(list).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        for item in &list.items {
            println!("{}", item.title);
            println!("    {}", item.href);
            if !item.excerpt.is_empty() {
                println!("    {}", item.excerpt);
            }
        }
        println!("\n{} \u{2192} {}", list.view_all.label, list.view_all.href);
        eprintln!("\n{} suggestions", list.items.len());
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gztechiz=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Suggest { query, base_url, json } => {
            run_suggest(&config, &query, base_url, json).await
        }
        Commands::Config => config.to_toml().map(|rendered| {
            print!("{rendered}");
            ExitCode::SUCCESS
        }),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    })
}
