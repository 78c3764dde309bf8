//! Command-line front end: log sessions and see what gambling is costing
//!
//! Data lives in JSON blobs under the configured data directory.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use gambling_reality::calculations::analytics::{
    activity_analysis, edge_trend, game_breakdown, insights, session_patterns, ActivityAnalysis,
    GameBreakdown, Insight, SessionPatterns,
};
use gambling_reality::calculations::{
    compare_edges, debt_impact, format_currency_in, format_percentage, growth_milestones,
    investment_comparison, largest_opportunity_cost, profile_profitability, profitability_analysis,
    user_profile, Currency, EdgeComparison, Horizon, MILESTONE_YEARS,
};
use gambling_reality::catalog::{GameCatalog, DEFAULT_GAME_TYPE};
use gambling_reality::session::validate::{validate_debt_terms, validate_profitability_inputs};
use gambling_reality::session::{
    find_template, game_types, load_sessions, validate_new_session, validate_update, SessionQuery,
    SessionUpdate, SortBy, Theme,
};
use gambling_reality::{AppConfig, DebtInfo, FileBlobStore, NewSession, RealityError, SessionStore};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reality", about = "See what your gambling is really costing you")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a session
    Add {
        #[arg(long, default_value = DEFAULT_GAME_TYPE)]
        game: String,
        #[arg(long)]
        bet: f64,
        #[arg(long, default_value_t = 0.0)]
        win: f64,
        #[arg(long, default_value_t = 0.0)]
        loss: f64,
        /// Minutes played
        #[arg(long)]
        duration: u32,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Session date (YYYY-MM-DD), defaults to now
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Log a session from a quick template (quick-loss, big-win, break-even, small-loss)
    Quick {
        template: String,
        #[arg(long, default_value = DEFAULT_GAME_TYPE)]
        game: String,
    },
    /// Edit a session; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        game: Option<String>,
        #[arg(long)]
        bet: Option<f64>,
        #[arg(long)]
        win: Option<f64>,
        #[arg(long)]
        loss: Option<f64>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a session by id
    Delete { id: String },
    /// Show session history
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        game: Option<String>,
        #[arg(long, value_enum, default_value_t = SortArg::Date)]
        sort: SortArg,
    },
    /// Import sessions from CSV
    Import { path: PathBuf },
    /// Totals, personal edge and theoretical edge
    Profile,
    /// Outcome mix, edge trend, per-game breakdown and insights
    Analytics,
    /// How long a bankroll lasts; uses your history when no inputs are given
    Profit {
        #[arg(long)]
        bankroll: Option<f64>,
        #[arg(long)]
        bet: Option<f64>,
        /// Catalog game whose house edge to use
        #[arg(long, conflicts_with = "edge")]
        game: Option<String>,
        /// House edge in percent
        #[arg(long)]
        edge: Option<f64>,
        #[arg(long)]
        sessions: Option<f64>,
    },
    /// What the money lost would be worth invested
    Invest {
        /// Defaults to your net loss
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        years: Option<u32>,
    },
    /// How much your losses delay paying off debt
    Debt,
    /// Save debt terms
    SetDebt {
        #[arg(long)]
        total: f64,
        #[arg(long)]
        payment: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
    },
    /// Show or change settings
    Settings {
        #[arg(long)]
        currency: Option<Currency>,
        #[arg(long)]
        notifications: Option<bool>,
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },
    /// List cataloged games and their house edge
    Games,
    /// Delete all sessions, debt info and settings
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Date,
    Amount,
    Result,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortBy::Date,
            SortArg::Amount => SortBy::Amount,
            SortArg::Result => SortBy::Result,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

fn months_text(h: Horizon) -> String {
    match h {
        Horizon::Finite(m) => format!("{:.1} months", m),
        Horizon::Unbounded => "never".to_string(),
    }
}

fn date_text(d: Option<NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "never".to_string())
}

fn emit<T: Serialize>(as_json: bool, value: &T, text: impl FnOnce()) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let games = config.game_catalog().context("Failed to load game catalog")?;
    let backend = FileBlobStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;
    let mut store = SessionStore::open(backend);
    let currency = store.settings().currency;
    let money = |amount: f64| format_currency_in(amount, currency);

    match cli.command {
        Command::Add { game, bet, win, loss, duration, location, notes, date } => {
            let mut new = NewSession::new(game, bet, win, loss, duration);
            if let Some(d) = date {
                let midnight = d.and_hms_opt(0, 0, 0).context("Invalid date")?;
                new = new.at(midnight.and_utc());
            }
            new.location = location;
            new.notes = notes;
            warn_unknown_game(&games, &new.game_type);
            validate_new_session(&new)?;
            let net = new.net_result();
            let id = store.add_session(new)?;
            println!("Added session {} ({})", id, signed(net, &money));
        }
        Command::Quick { template, game } => {
            let template = find_template(&template)?;
            warn_unknown_game(&games, &game);
            let new = template.to_new_session(game);
            let id = store.add_session(new)?;
            println!("Added '{}' session {}", template.name, id);
        }
        Command::Edit { id, game, bet, win, loss, duration, location, notes } => {
            let current = store
                .session(&id)
                .ok_or_else(|| RealityError::SessionNotFound(id.clone()))?;
            let mut update = SessionUpdate::from(current);
            if let Some(g) = game {
                update.game_type = g;
            }
            update.bet_amount = bet.unwrap_or(update.bet_amount);
            update.win_amount = win.unwrap_or(update.win_amount);
            update.loss_amount = loss.unwrap_or(update.loss_amount);
            update.duration = duration.unwrap_or(update.duration);
            if location.is_some() {
                update.location = location.filter(|l| !l.is_empty());
            }
            if notes.is_some() {
                update.notes = notes.filter(|n| !n.is_empty());
            }
            warn_unknown_game(&games, &update.game_type);
            validate_update(&update)?;
            store.update_session(&id, update)?;
            println!("Updated session {}", id);
        }
        Command::Delete { id } => {
            store.delete_session(&id)?;
            println!("Deleted session {}", id);
        }
        Command::List { search, game, sort } => {
            let query = SessionQuery { search, game_type: game, sort_by: sort.into() };
            let hits = query.apply(store.sessions());
            emit(cli.json, &hits, || {
                if hits.is_empty() {
                    println!("No sessions found.");
                    let available = game_types(store.sessions());
                    if !available.is_empty() {
                        println!("Game types in your history: {}", available.join(", "));
                    }
                }
                for s in &hits {
                    println!(
                        "{}  {}  {:<30} bet {:>12}  result {:>12}  {} min{}",
                        s.id(),
                        s.date().with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                        s.game_type(),
                        money(s.bet_amount()),
                        signed(s.net_result(), &money),
                        s.duration(),
                        s.location().map(|l| format!("  @ {}", l)).unwrap_or_default(),
                    );
                }
            })?;
        }
        Command::Import { path } => {
            let imported = load_sessions(&path)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            let count = store.import_sessions(imported)?;
            println!("Imported {} sessions", count);
        }
        Command::Profile => {
            let profile = user_profile(store.sessions(), &games);
            emit(cli.json, &profile, || {
                println!("Sessions:          {}", profile.sessions_count);
                println!("Total gambled:     {}", money(profile.total_gambled));
                println!("Total won:         {}", money(profile.total_won));
                println!("Total lost:        {}", money(profile.total_lost));
                println!("Net loss:          {}", money(profile.net_loss));
                println!("Avg session loss:  {}", money(profile.average_session_loss));
                println!("Personal edge:     {}", format_percentage(profile.personal_edge));
                println!("Theoretical edge:  {}", format_percentage(profile.theoretical_edge));
                println!();
                println!("{}", match compare_edges(&profile) {
                    EdgeComparison::Worse(d) => format!(
                        "You're performing {} WORSE than the theoretical house edge.",
                        format_percentage(d)
                    ),
                    EdgeComparison::Better(d) => format!(
                        "You're performing {} BETTER than the theoretical house edge.",
                        format_percentage(d)
                    ),
                    EdgeComparison::Exact => {
                        "You're performing exactly at the theoretical house edge.".to_string()
                    }
                });
            })?;
        }
        Command::Analytics => {
            let sessions = store.sessions();
            let profile = user_profile(sessions, &games);
            let patterns = session_patterns(sessions);
            let trend = edge_trend(sessions, config.trend_window);
            let breakdown = game_breakdown(sessions, &games);
            let activity = activity_analysis(sessions, *Local::now().offset());
            let found = insights(&profile, &patterns, &activity);

            #[derive(Serialize)]
            struct Report<'a> {
                patterns: &'a SessionPatterns,
                edge_trend: &'a [f64],
                breakdown: &'a [GameBreakdown],
                activity: &'a ActivityAnalysis,
                insights: &'a [Insight],
            }
            let report = Report {
                patterns: &patterns,
                edge_trend: &trend,
                breakdown: &breakdown,
                activity: &activity,
                insights: &found,
            };

            emit(cli.json, &report, || {
                println!(
                    "Sessions: {} won, {} lost, {} even (win rate {}, loss rate {})",
                    patterns.winning_sessions,
                    patterns.losing_sessions,
                    patterns.break_even_sessions,
                    format_percentage(patterns.win_rate),
                    format_percentage(patterns.loss_rate),
                );
                let points: Vec<String> = trend.iter().map(|e| format_percentage(*e)).collect();
                println!("Edge trend: {}", points.join(" -> "));
                println!();
                println!(
                    "{:<30} {:>6} {:>14} {:>14} {:>10} {:>10}",
                    "Game", "Count", "Bet", "Lost", "Edge", "House"
                );
                for row in &breakdown {
                    println!(
                        "{:<30} {:>6} {:>14} {:>14} {:>10} {:>10}",
                        row.game_type,
                        row.count,
                        money(row.total_bet),
                        money(row.total_loss),
                        format_percentage(row.personal_edge),
                        row.theoretical_edge.map(format_percentage).unwrap_or_else(|| "n/a".into()),
                    );
                }
                println!();
                for insight in &found {
                    println!("[{:?}] {}: {}", insight.kind, insight.title, insight.description);
                }
            })?;
        }
        Command::Profit { bankroll, bet, game, edge, sessions } => {
            let from_history = bankroll.is_none()
                && bet.is_none()
                && game.is_none()
                && edge.is_none()
                && sessions.is_none();
            let analysis = if from_history {
                profile_profitability(&user_profile(store.sessions(), &games))
            } else {
                let bankroll = bankroll.context("--bankroll is required")?;
                let bet = bet.context("--bet is required")?;
                let sessions = sessions.context("--sessions is required")?;
                let game_edge = match (game, edge) {
                    (Some(g), _) => games.edge(&g).ok_or(RealityError::UnknownGameType(g))?,
                    (None, Some(e)) => e,
                    (None, None) => games.edge(DEFAULT_GAME_TYPE).unwrap_or(5.0),
                };
                validate_profitability_inputs(bankroll, bet, sessions)?;
                profitability_analysis(bankroll, bet, game_edge, sessions)
            };
            emit(cli.json, &analysis, || {
                println!("Bankroll:              {}", money(analysis.bankroll));
                println!("Average bet:           {}", money(analysis.average_bet));
                println!("House edge:            {}", format_percentage(analysis.game_edge));
                println!("Sessions per month:    {}", analysis.sessions_per_month);
                println!("Expected monthly loss: {}", money(analysis.monthly_loss));
                println!("Time to zero:          {}", months_text(analysis.time_to_zero));
                println!(
                    "Chance of profit:      {} (rough heuristic)",
                    format_percentage(analysis.probability_of_profit)
                );
            })?;
        }
        Command::Invest { amount, years } => {
            let scenarios = config
                .investment_catalog()
                .context("Failed to load investment scenarios")?;
            let amount = match amount {
                Some(a) => a,
                None => user_profile(store.sessions(), &games).net_loss,
            };
            if amount == 0.0 {
                bail!("Nothing to project: provide --amount or log some losses first");
            }
            let years = years.unwrap_or(config.projection_years);
            let comparisons = investment_comparison(amount, years, &scenarios);
            emit(cli.json, &comparisons, || {
                println!("{} invested for {} years instead:", money(amount), years);
                for c in &comparisons {
                    println!(
                        "  {:<22} {:>8}  -> {:>16}  (cost {})",
                        c.scenario.name,
                        format_percentage(c.scenario.annual_return),
                        money(c.projected_value),
                        money(c.opportunity_cost),
                    );
                }
                if let Some(worst) = largest_opportunity_cost(&comparisons) {
                    println!(
                        "Biggest missed opportunity: {} ({})",
                        worst.scenario.name,
                        money(worst.opportunity_cost)
                    );
                }
                println!();
                let header: Vec<String> =
                    MILESTONE_YEARS.iter().map(|y| format!("{:>14}", format!("{}y", y))).collect();
                println!("  {:<22} {}", "Growth", header.join(""));
                for c in &comparisons {
                    let points: Vec<String> =
                        growth_milestones(amount, &c.scenario, &MILESTONE_YEARS)
                            .into_iter()
                            .map(|(_, value)| format!("{:>14}", money(value)))
                            .collect();
                    println!("  {:<22} {}", c.scenario.name, points.join(""));
                }
            })?;
        }
        Command::Debt => {
            let Some(debt) = store.debt_info() else {
                println!(
                    "Add your debt information with `reality set-debt` to see how gambling \
                     affects your financial freedom."
                );
                return Ok(());
            };
            let net_loss = user_profile(store.sessions(), &games).net_loss;
            let impact =
                debt_impact(debt.total_debt, debt.monthly_payment, debt.interest_rate, net_loss);
            emit(cli.json, &impact, || {
                println!("Debt:                 {}", money(debt.total_debt));
                println!("Gambling net loss:    {}", money(net_loss));
                println!(
                    "Payoff without loss:  {} ({})",
                    months_text(impact.original_months),
                    date_text(impact.original_payoff_date)
                );
                println!(
                    "Payoff with loss:     {} ({})",
                    months_text(impact.new_months),
                    date_text(impact.new_payoff_date)
                );
                match impact.delay_in_weeks {
                    Horizon::Unbounded => println!(
                        "At this payment your debt, plus the losses, will never be paid off."
                    ),
                    Horizon::Finite(w) if w <= 0.0 => {
                        println!("Great! You haven't delayed your debt payoff yet.")
                    }
                    Horizon::Finite(w) => println!(
                        "Your gambling losses have delayed your debt freedom by {} weeks.",
                        w
                    ),
                }
            })?;
        }
        Command::SetDebt { total, payment, rate } => {
            validate_debt_terms(total, payment, rate)?;
            let debt = DebtInfo::from_terms(total, payment, rate, Local::now().date_naive());
            let payoff = date_text(debt.original_payoff_date);
            store.save_debt_info(debt)?;
            println!("Saved debt information (payoff {})", payoff);
        }
        Command::Settings { currency, notifications, theme } => {
            let mut settings = store.settings().clone();
            let changed = currency.is_some() || notifications.is_some() || theme.is_some();
            if let Some(c) = currency {
                settings.currency = c;
            }
            if let Some(n) = notifications {
                settings.notifications = n;
            }
            if let Some(t) = theme {
                settings.theme = match t {
                    ThemeArg::Light => Theme::Light,
                    ThemeArg::Dark => Theme::Dark,
                };
            }
            if changed {
                store.save_settings(settings.clone())?;
            }
            emit(cli.json, &settings, || {
                println!("Currency:      {}", settings.currency.code());
                println!("Notifications: {}", if settings.notifications { "on" } else { "off" });
                println!("Theme:         {:?}", settings.theme);
            })?;
        }
        Command::Games => {
            let rows: Vec<_> = games.iter().collect();
            emit(cli.json, &rows, || {
                for g in &rows {
                    println!(
                        "{:<32} {:>8}  {}",
                        g.name,
                        format_percentage(g.theoretical_edge),
                        g.description
                    );
                }
            })?;
        }
        Command::Clear { yes } => {
            if !yes {
                bail!(
                    "This permanently deletes all sessions, debt info and settings; \
                     re-run with --yes"
                );
            }
            store.clear_all()?;
            println!("All data has been cleared.");
        }
    }

    Ok(())
}

fn signed(amount: f64, money: &impl Fn(f64) -> String) -> String {
    if amount >= 0.0 {
        format!("+{}", money(amount))
    } else {
        money(amount)
    }
}

fn warn_unknown_game(games: &GameCatalog, game: &str) {
    if !games.contains(game) {
        log::warn!(
            "'{}' is not in the game catalog; it will not count toward the theoretical edge",
            game
        );
    }
}
