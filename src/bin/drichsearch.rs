//! Command-line host for drichsearch.
//!
//! Prints the engine URL for external engines, or the comparison page for
//! the custom engine. Diagnostics go to stderr so stdout stays pipeable.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use drichsearch::catalog::{self, EngineEntry};
use drichsearch::{dispatch, AppConfig, Dispatch};
use tracing_subscriber::EnvFilter;

/// drichsearch: search one engine, or DuckDuckGo and Yahoo side by side.
#[derive(Parser)]
#[command(name = "drichsearch", version, about)]
struct Cli {
    /// Search terms.
    #[arg(required_unless_present_any = ["list_engines", "init_config"])]
    query: Vec<String>,

    /// Engine name from the catalog (defaults to the configured engine).
    #[arg(short, long, env = "DRICHSEARCH_ENGINE")]
    engine: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print both providers' results as JSON instead of rendering a page.
    #[arg(long)]
    json: bool,

    /// List the catalog and exit.
    #[arg(long)]
    list_engines: bool,

    /// Write the default configuration file and exit.
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("drichsearch=info,drichsearch_search=info")
        }))
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);

    if cli.init_config {
        return init_config(&config_path);
    }

    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    config.validate()?;
    let engines = config.engines()?;

    if cli.list_engines {
        list_engines(&engines, &config.default_engine);
        return Ok(());
    }

    let query = cli.query.join(" ");

    if cli.json {
        let query = drichsearch::dispatch::normalize_query(&query)?;
        let (duckduckgo, yahoo) = drichsearch_search::aggregate(query, &config.search).await;
        let report = serde_json::json!({
            "query": query,
            "duckduckgo": duckduckgo,
            "yahoo": yahoo,
        });
        return emit(&serde_json::to_string_pretty(&report)?, cli.output.as_deref());
    }

    let engine_name = cli.engine.as_deref().unwrap_or(&config.default_engine);
    let engine = catalog::find(&engines, engine_name)
        .ok_or_else(|| drichsearch::AppError::UnknownEngine(engine_name.to_string()))?;

    match dispatch(&query, engine, &config.search).await? {
        Dispatch::Navigate(url) => emit(&url, cli.output.as_deref()),
        Dispatch::Document(html) => emit(&html, cli.output.as_deref()),
    }
}

fn init_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    AppConfig::default().save_to_file(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn list_engines(engines: &[EngineEntry], default_engine: &str) {
    for engine in engines {
        let marker = if engine.name.eq_ignore_ascii_case(default_engine) {
            "*"
        } else {
            " "
        };
        let target = if engine.is_custom() {
            "DuckDuckGo + Yahoo"
        } else {
            engine.url.as_str()
        };
        println!("{marker} {:<12} {target}", engine.name);
    }
}

fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "result written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{content}")?;
        }
    }
    Ok(())
}
