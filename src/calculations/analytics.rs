//! Session history analytics: outcome mix, edge trend, per-game breakdown,
//! activity times and the insights derived from them

use super::{format_percentage, personal_edge, UserProfile};
use crate::catalog::GameCatalog;
use crate::session::Session;
use chrono::{Datelike, FixedOffset, Timelike, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

/// Points shown by the running-edge trend
pub const TREND_WINDOW: usize = 10;

/// Personal edge above this percentage is flagged as a very high loss rate
pub const HIGH_LOSS_EDGE: f64 = 10.0;

/// Losing-session share above this percentage is flagged as high loss frequency
pub const HIGH_LOSS_FREQUENCY: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPatterns {
    pub total_sessions: usize,
    pub winning_sessions: usize,
    pub losing_sessions: usize,
    pub break_even_sessions: usize,
    /// Percent of sessions won; 0 with no sessions
    pub win_rate: f64,
    pub loss_rate: f64,
}

pub fn session_patterns(sessions: &[Session]) -> SessionPatterns {
    let total_sessions = sessions.len();
    let winning_sessions = sessions.iter().filter(|s| s.is_win()).count();
    let losing_sessions = sessions.iter().filter(|s| s.is_loss()).count();
    let break_even_sessions = sessions.iter().filter(|s| s.is_break_even()).count();

    let rate = |count: usize| {
        if total_sessions == 0 {
            0.0
        } else {
            count as f64 / total_sessions as f64 * 100.0
        }
    };

    SessionPatterns {
        total_sessions,
        winning_sessions,
        losing_sessions,
        break_even_sessions,
        win_rate: rate(winning_sessions),
        loss_rate: rate(losing_sessions),
    }
}

/// Running personal edge at each of the last `window` sessions
///
/// Point `i` is the personal edge of every session up to and including
/// that one, so the series shows how the cumulative edge moved.
pub fn edge_trend(sessions: &[Session], window: usize) -> Vec<f64> {
    let start = sessions.len().saturating_sub(window);
    (start..sessions.len())
        .map(|i| personal_edge(&sessions[..=i]))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameBreakdown {
    pub game_type: String,
    pub count: usize,
    pub total_bet: f64,
    pub total_loss: f64,
    pub personal_edge: f64,
    /// `None` for game types missing from the catalog
    pub theoretical_edge: Option<f64>,
}

/// Per-game totals, most played first, ties by label
pub fn game_breakdown(sessions: &[Session], catalog: &GameCatalog) -> Vec<GameBreakdown> {
    let mut by_type: BTreeMap<&str, Vec<Session>> = BTreeMap::new();
    for s in sessions {
        by_type.entry(s.game_type()).or_default().push(s.clone());
    }

    let mut rows: Vec<GameBreakdown> = by_type
        .into_iter()
        .map(|(game_type, group)| GameBreakdown {
            game_type: game_type.to_string(),
            count: group.len(),
            total_bet: group.iter().map(|s| s.bet_amount()).sum(),
            total_loss: group.iter().map(|s| s.net_result().min(0.0).abs()).sum(),
            personal_edge: personal_edge(&group),
            theoretical_edge: catalog.edge(game_type),
        })
        .collect();

    // BTreeMap order already breaks ties by label; the sort is stable
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityAnalysis {
    /// Hour of day (0-23) with the most sessions, earliest on ties
    pub most_active_hour: Option<u32>,
    /// Weekday with the most sessions, Monday-first on ties
    pub most_active_day: Option<Weekday>,
}

/// When the player tends to gamble, in the given local offset
pub fn activity_analysis(sessions: &[Session], offset: FixedOffset) -> ActivityAnalysis {
    let mut by_hour = [0usize; 24];
    let mut by_day = [0usize; 7];
    for s in sessions {
        let local = s.date().with_timezone(&offset);
        by_hour[local.hour() as usize] += 1;
        by_day[local.weekday().num_days_from_monday() as usize] += 1;
    }

    let busiest = |counts: &[usize]| -> Option<usize> {
        let (idx, &max) = counts
            .iter()
            .enumerate()
            .fold((0, &0), |best, cur| if cur.1 > best.1 { cur } else { best });
        (max > 0).then_some(idx)
    };

    ActivityAnalysis {
        most_active_hour: busiest(&by_hour).map(|h| h as u32),
        most_active_day: busiest(&by_day).and_then(|d| Weekday::try_from(d as u8).ok()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

/// Warnings and observations about the player's history
pub fn insights(
    profile: &UserProfile,
    patterns: &SessionPatterns,
    activity: &ActivityAnalysis,
) -> Vec<Insight> {
    let mut found = Vec::new();

    if profile.personal_edge > profile.theoretical_edge {
        found.push(Insight {
            kind: InsightKind::Warning,
            title: "Performing Worse Than Expected".to_string(),
            description: format!(
                "Your edge is {} higher than the theoretical house edge.",
                format_percentage(profile.personal_edge - profile.theoretical_edge)
            ),
        });
    }

    if profile.personal_edge > HIGH_LOSS_EDGE {
        found.push(Insight {
            kind: InsightKind::Danger,
            title: "Very High Loss Rate".to_string(),
            description: format!(
                "You're losing more than {}% of your bets on average.",
                HIGH_LOSS_EDGE
            ),
        });
    }

    if patterns.loss_rate > HIGH_LOSS_FREQUENCY {
        found.push(Insight {
            kind: InsightKind::Danger,
            title: "High Loss Frequency".to_string(),
            description: format!("{:.1}% of your sessions result in losses.", patterns.loss_rate),
        });
    }

    if let (Some(day), Some(hour)) = (activity.most_active_day, activity.most_active_hour) {
        found.push(Insight {
            kind: InsightKind::Info,
            title: "Most Active Time".to_string(),
            description: format!("You gamble most on {}s around {}:00.", weekday_name(day), hour),
        });
    }

    found
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::user_profile;
    use crate::session::NewSession;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn at(game: &str, bet: f64, win: f64, loss: f64, day: u32, hour: u32) -> Session {
        // May 2026: the 1st is a Friday
        let date = Utc.with_ymd_and_hms(2026, 5, day, hour, 0, 0).unwrap();
        Session::create(NewSession::new(game, bet, win, loss, 30).at(date))
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_patterns() {
        let sessions = vec![
            at("Keno", 10.0, 0.0, 10.0, 1, 20),
            at("Keno", 10.0, 30.0, 0.0, 2, 20),
            at("Keno", 10.0, 5.0, 5.0, 3, 20),
            at("Keno", 10.0, 0.0, 10.0, 4, 20),
        ];
        let patterns = session_patterns(&sessions);

        assert_eq!(patterns.winning_sessions, 1);
        assert_eq!(patterns.losing_sessions, 2);
        assert_eq!(patterns.break_even_sessions, 1);
        assert_relative_eq!(patterns.win_rate, 25.0);
        assert_relative_eq!(patterns.loss_rate, 50.0);
    }

    #[test]
    fn test_patterns_empty() {
        let patterns = session_patterns(&[]);
        assert_eq!(patterns.win_rate, 0.0);
        assert_eq!(patterns.loss_rate, 0.0);
    }

    #[test]
    fn test_edge_trend_is_cumulative() {
        let sessions = vec![
            at("Keno", 100.0, 0.0, 100.0, 1, 20),
            at("Keno", 100.0, 100.0, 0.0, 2, 20),
            at("Keno", 100.0, 0.0, 50.0, 3, 20),
        ];

        let trend = edge_trend(&sessions, TREND_WINDOW);
        assert_eq!(trend.len(), 3);
        assert_relative_eq!(trend[0], 100.0);
        assert_relative_eq!(trend[1], 0.0);
        assert_relative_eq!(trend[2], 50.0 / 3.0);

        let last_two = edge_trend(&sessions, 2);
        assert_eq!(last_two.len(), 2);
        assert_relative_eq!(last_two[1], trend[2]);
    }

    #[test]
    fn test_breakdown_sorted_by_count() {
        let sessions = vec![
            at("Pachinko", 40.0, 0.0, 40.0, 1, 20),
            at("Keno", 10.0, 0.0, 10.0, 1, 21),
            at("Keno", 10.0, 2.0, 0.0, 2, 21),
            at("Craps (Pass Line)", 10.0, 0.0, 10.0, 3, 21),
        ];
        let rows = game_breakdown(&sessions, &GameCatalog::default());
        let order: Vec<&str> = rows.iter().map(|r| r.game_type.as_str()).collect();

        assert_eq!(order, vec!["Keno", "Craps (Pass Line)", "Pachinko"]);
        assert_eq!(rows[0].count, 2);
        assert_relative_eq!(rows[0].total_loss, 10.0);
        assert_relative_eq!(rows[0].personal_edge, 40.0);
        assert_eq!(rows[0].theoretical_edge, Some(25.0));
        assert_eq!(rows[2].theoretical_edge, None);
    }

    #[test]
    fn test_activity() {
        let sessions = vec![
            at("Keno", 10.0, 0.0, 10.0, 1, 22),
            at("Keno", 10.0, 0.0, 10.0, 8, 22),
            at("Keno", 10.0, 0.0, 10.0, 4, 13),
        ];
        let activity = activity_analysis(&sessions, utc());

        assert_eq!(activity.most_active_hour, Some(22));
        assert_eq!(activity.most_active_day, Some(Weekday::Fri));

        // Shifting the offset moves the hour and can change the day
        let shifted = activity_analysis(&sessions, FixedOffset::east_opt(3 * 3600).unwrap());
        assert_eq!(shifted.most_active_hour, Some(1));
        assert_eq!(shifted.most_active_day, Some(Weekday::Sat));
    }

    #[test]
    fn test_activity_empty() {
        let activity = activity_analysis(&[], utc());
        assert_eq!(activity.most_active_hour, None);
        assert_eq!(activity.most_active_day, None);
    }

    #[test]
    fn test_insights_for_heavy_loser() {
        let sessions = vec![
            at("Blackjack (Basic Strategy)", 100.0, 0.0, 60.0, 1, 23),
            at("Blackjack (Basic Strategy)", 100.0, 0.0, 40.0, 8, 23),
        ];
        let profile = user_profile(&sessions, &GameCatalog::default());
        let patterns = session_patterns(&sessions);
        let activity = activity_analysis(&sessions, utc());

        let found = insights(&profile, &patterns, &activity);
        let titles: Vec<&str> = found.iter().map(|i| i.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Performing Worse Than Expected",
                "Very High Loss Rate",
                "High Loss Frequency",
                "Most Active Time",
            ]
        );
        assert_eq!(found[3].description, "You gamble most on Fridays around 23:00.");
        assert_eq!(
            found[0].description,
            "Your edge is 49.50% higher than the theoretical house edge."
        );
    }

    #[test]
    fn test_no_insights_without_history() {
        let profile = user_profile(&[], &GameCatalog::default());
        let found = insights(&profile, &session_patterns(&[]), &activity_analysis(&[], utc()));
        assert!(found.is_empty());
    }
}
