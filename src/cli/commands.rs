use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tess", about = concat!("[#] tessera v", env!("CARGO_PKG_VERSION"), " - your dated notes on a tile wall"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load tiles from a JSON file instead of the built-in dataset
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<String>,

    /// Apply color overrides from a TOML theme file
    #[arg(long, global = true, value_name = "FILE")]
    pub theme: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the wall grouped by year
    List(ListArgs),
    /// Show per-year tile counts and date ranges
    Stats,
}

#[derive(Args)]
pub struct ListArgs {
    /// Sort the wall by date before grouping
    #[arg(long)]
    pub sorted: bool,
}
