//! Loads an observation CSV and prints the temperature, precipitation and
//! per-city documents for it.
//!
//! cargo run --example summarize_csv -- data/observations.csv

use std::path::PathBuf;
use weatherstats::{
    collect_observations, load_observation_csv, InMemoryStore, WeatherStats, WeatherStatsError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/observations.csv"));

    let rows = collect_observations(load_observation_csv(&path)?)?;
    println!("Loaded {} observations from {}", rows.len(), path.display());

    let stats = WeatherStats::new(InMemoryStore::with_rows(rows));

    match stats.temperature().city("Madrid").call() {
        Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
        Err(WeatherStatsError::NoData) => println!("No temperature data for Madrid"),
        Err(e) => return Err(e.into()),
    }

    let precipitation = stats
        .precipitation()
        .start_date("2024-07-01")
        .end_date("2024-07-02")
        .call()?;
    println!("{}", serde_json::to_string_pretty(&precipitation)?);

    let global = stats.global().call()?;
    println!("{}", serde_json::to_string_pretty(&global)?);
    Ok(())
}
