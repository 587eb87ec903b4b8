mod browse;
mod catalog;
mod classify;
mod cli;
mod config;
mod error;
mod report;
mod scoring;
mod types;

use crate::catalog::loader::{load_catalog, DEFAULT_CATALOG_FILE};
use crate::classify::Predictor;
use crate::error::EcoRankError;
use crate::types::product::EcoMetrics;
use crate::types::report::Page;
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_FOUND: i32 = 1;
    pub const INVALID_REQUEST: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn exit_code_for(error: &EcoRankError) -> i32 {
    match error {
        EcoRankError::CategoryNotFound(_) | EcoRankError::ProductNotFound(_) => {
            exit_code::NOT_FOUND
        }
        EcoRankError::SameCategory(_)
        | EcoRankError::ConfigNotFound(_)
        | EcoRankError::ConfigParse(_) => exit_code::INVALID_REQUEST,
        _ => exit_code::RUNTIME_FAILURE,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn config_root(explicit: Option<&Path>) -> PathBuf {
    explicit
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(cli: cli::Cli) -> Result<i32, EcoRankError> {
    let root = config_root(cli.config.as_deref());
    let loaded = config::load_config(&root, cli.config.as_deref())?;
    if loaded.is_none() {
        tracing::debug!(root = %root.display(), "no ecorank.toml found, using defaults");
    }
    let cfg = loaded.unwrap_or_default();
    cfg.validate()?;

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| cfg.dataset_path(&root))
        .unwrap_or_else(|| root.join(DEFAULT_CATALOG_FILE));
    let catalog = load_catalog(&catalog_path, cfg.invalid_row_policy(), cfg.weights())?;
    if catalog.is_empty() {
        tracing::warn!(path = %catalog_path.display(), "catalog has no rows");
    }

    let model_path = cli.model.clone().or_else(|| cfg.model_path(&root));
    let predictor = Predictor::load(cfg.thresholds(), model_path.as_deref());
    tracing::debug!(model = predictor.has_model(), "predictor ready");

    let (page, format) = match cli.command {
        cli::Commands::Categories(cmd) => (
            Page::Categories(browse::category_list(&catalog)),
            cmd.format,
        ),
        cli::Commands::Rank(cmd) => (
            Page::Ranking(browse::ranking(&catalog, &cmd.category)?),
            cmd.format,
        ),
        cli::Commands::Search(cmd) => (
            Page::Product(browse::search(&catalog, &predictor, &cmd.category)?),
            cmd.format,
        ),
        cli::Commands::Product(cmd) => (
            Page::Product(browse::product_page(&catalog, &predictor, cmd.id)?),
            cmd.format,
        ),
        cli::Commands::Compare(cmd) => (
            Page::Comparison(browse::compare(&catalog, &cmd.first, &cmd.second)?),
            cmd.format,
        ),
        cli::Commands::Check(cmd) => {
            let metrics = EcoMetrics {
                recyclability_pct: cmd.recyclability,
                carbon_kgco2: cmd.carbon,
                biodegradability_pct: cmd.biodegradability,
                lifespan_years: cmd.lifespan,
            };
            if let Some(reason) = metrics.range_violation() {
                tracing::warn!(%reason, "check input outside documented range");
            }
            (
                Page::Check(browse::check(&catalog, &predictor, metrics)),
                cmd.format,
            )
        }
    };

    let output_format = match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };
    let rendered = report::render(&page, output_format, catalog.fingerprint())?;
    println!("{rendered}");
    Ok(exit_code::SUCCESS)
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
