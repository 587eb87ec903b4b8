use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecorank",
    version,
    about = "Browse a product catalog and rank materials by eco score"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./ecorank.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog CSV, overriding dataset.path
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Decision tree model JSON, overriding classifier.model_path
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List product categories
    Categories(CategoriesCommand),
    /// Rank the materials of a category from best to worst
    Rank(RankCommand),
    /// Show the best product of a category
    Search(SearchCommand),
    /// Show one product and its next-worse alternative
    Product(ProductCommand),
    /// Compare the best products of two categories
    Compare(CompareCommand),
    /// Score and label ad-hoc metrics
    Check(CheckCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct CategoriesCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RankCommand {
    pub category: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SearchCommand {
    pub category: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ProductCommand {
    pub id: usize,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CompareCommand {
    pub first: String,
    pub second: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    #[arg(long)]
    pub recyclability: f64,
    #[arg(long)]
    pub carbon: f64,
    #[arg(long)]
    pub biodegradability: f64,
    #[arg(long)]
    pub lifespan: f64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
