//! Bankroll survival sweep across every cataloged game
//!
//! Runs the profitability analysis for each game at a range of bet sizes
//! and writes one CSV row per (game, bet) pair.

use anyhow::{Context, Result};
use clap::Parser;
use gambling_reality::calculations::profitability_analysis;
use gambling_reality::session::validate::validate_profitability_inputs;
use gambling_reality::AppConfig;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sweep_bankroll", about = "Time-to-zero for every game across bet sizes")]
struct Args {
    #[arg(long, default_value_t = 1000.0)]
    bankroll: f64,

    /// Bet sizes to evaluate
    #[arg(long, value_delimiter = ',', default_values_t = vec![10.0, 25.0, 50.0, 100.0, 250.0])]
    bets: Vec<f64>,

    #[arg(long, default_value_t = 8.0)]
    sessions_per_month: f64,

    /// JSON configuration file (for a custom game catalog)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "bankroll_sweep.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    game: String,
    house_edge: f64,
    bankroll: f64,
    average_bet: f64,
    sessions_per_month: f64,
    monthly_loss: f64,
    /// Empty when the bankroll never runs out
    months_to_zero: Option<f64>,
    probability_of_profit: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    for &bet in &args.bets {
        validate_profitability_inputs(args.bankroll, bet, args.sessions_per_month)?;
    }

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let games = config.game_catalog().context("Failed to load game catalog")?;

    let pairs: Vec<(&str, f64, f64)> = games
        .iter()
        .flat_map(|g| args.bets.iter().map(move |&bet| (g.name.as_str(), g.theoretical_edge, bet)))
        .collect();
    println!(
        "Running {} scenarios ({} games x {} bets)...",
        pairs.len(),
        games.len(),
        args.bets.len()
    );
    let start = Instant::now();

    let rows: Vec<SweepRow> = pairs
        .par_iter()
        .map(|&(game, edge, bet)| {
            let analysis =
                profitability_analysis(args.bankroll, bet, edge, args.sessions_per_month);
            SweepRow {
                game: game.to_string(),
                house_edge: edge,
                bankroll: analysis.bankroll,
                average_bet: analysis.average_bet,
                sessions_per_month: analysis.sessions_per_month,
                monthly_loss: analysis.monthly_loss,
                months_to_zero: analysis.time_to_zero.finite(),
                probability_of_profit: analysis.probability_of_profit,
            }
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    if let Some(fastest) = rows
        .iter()
        .filter(|r| r.months_to_zero.is_some())
        .min_by(|a, b| {
            a.months_to_zero
                .partial_cmp(&b.months_to_zero)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    {
        println!(
            "Fastest bust: {} at {:.0} per bet, {:.1} months",
            fastest.game,
            fastest.average_bet,
            fastest.months_to_zero.unwrap_or_default()
        );
    }
    println!("Wrote {} rows to {}", rows.len(), args.output.display());
    Ok(())
}
