use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gpstoll", version)]
#[command(about = "Simulate vehicles driving through toll-gate zones and report tolls paid")]
pub struct Args {
    /// TOML scenario file; the built-in Bangalore scenario when omitted
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Directory for summary.csv, index.html, and charts.svg
    #[arg(long, default_value = "output")]
    pub out: PathBuf,

    /// Override the scenario's RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of ticks to simulate
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Charge the geometric zone toll instead of the flat per-user fee
    #[arg(long)]
    pub zone_rate: bool,
}
