//! gpstoll — GPS toll simulation over the default Bangalore gates.
//!
//! Runs the scenario, logs gate alerts and per-tick tolls, prints the
//! summary table, and writes `summary.csv`, `index.html`, and `charts.svg`
//! into the output directory.

mod cli;
mod scenario;


use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use toll_output::{render_table, summary_rows, write_artifacts, LogObserver};

use cli::Args;
use scenario::Scenario;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    scenario.apply_overrides(args.seed, args.ticks, args.zone_rate);

    println!("=== gpstoll ===");
    println!(
        "Gates: {}  |  Users: {}  |  Vehicles: {}  |  Ticks: {}  |  Seed: {}  |  Policy: {}",
        scenario.gates.len(),
        scenario.users.len(),
        scenario.vehicles.len(),
        scenario.ticks,
        scenario.seed,
        if scenario.flat_fee_override { "flat fee" } else { "zone rate" }
    );
    println!();

    let mut sim = scenario.builder()?.build().context("building simulation")?;

    let mut obs = LogObserver::default();
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    log::debug!(
        "simulated {} min in {:.3} s",
        sim.clock.elapsed_secs() / 60,
        t0.elapsed().as_secs_f64()
    );

    let report = sim.report()?;
    println!();
    print!("{}", render_table(&summary_rows(&report)));
    println!();

    let written = write_artifacts(&args.out, &report)
        .with_context(|| format!("writing output to {}", args.out.display()))?;
    for path in written {
        println!("  {}", path.display());
    }

    Ok(())
}
