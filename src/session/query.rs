//! Session history search, filter and sort

use super::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first
    #[default]
    Date,
    /// Largest bet first
    Amount,
    /// Worst result first
    Result,
}

#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    /// Case-insensitive substring matched against game type, location and notes
    pub search: Option<String>,
    /// Exact game type; `None` keeps every type
    pub game_type: Option<String>,
    pub sort_by: SortBy,
}

impl SessionQuery {
    fn matches(&self, session: &Session) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                let hit = |text: Option<&str>| {
                    text.map(|t| t.to_lowercase().contains(&needle)).unwrap_or(false)
                };
                hit(Some(session.game_type())) || hit(session.location()) || hit(session.notes())
            }
        };

        let matches_game = self
            .game_type
            .as_deref()
            .map(|g| session.game_type() == g)
            .unwrap_or(true);

        matches_search && matches_game
    }

    /// Filtered, sorted view over `sessions`; the input is left untouched
    pub fn apply<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        let mut hits: Vec<&Session> = sessions.iter().filter(|s| self.matches(s)).collect();
        match self.sort_by {
            SortBy::Date => hits.sort_by(|a, b| b.date().cmp(&a.date())),
            SortBy::Amount => hits.sort_by(|a, b| b.bet_amount().total_cmp(&a.bet_amount())),
            SortBy::Result => hits.sort_by(|a, b| a.net_result().total_cmp(&b.net_result())),
        }
        hits
    }
}

/// Distinct game types in first-seen order
pub fn game_types(sessions: &[Session]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for s in sessions {
        if !seen.contains(&s.game_type()) {
            seen.push(s.game_type());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NewSession;
    use chrono::{TimeZone, Utc};

    fn history() -> Vec<Session> {
        let day = |d| Utc.with_ymd_and_hms(2026, 5, d, 20, 0, 0).unwrap();
        vec![
            Session::with_id("a", NewSession::new("Keno", 20.0, 0.0, 20.0, 10).at(day(1))),
            Session::with_id(
                "b",
                NewSession::new("Roulette (European)", 150.0, 300.0, 0.0, 60)
                    .at(day(3))
                    .with_location("Riverside Casino"),
            ),
            Session::with_id(
                "c",
                NewSession::new("Keno", 60.0, 0.0, 60.0, 30)
                    .at(day(2))
                    .with_notes("chasing losses at the river bar"),
            ),
        ]
    }

    fn ids(hits: Vec<&Session>) -> Vec<&str> {
        hits.into_iter().map(|s| s.id()).collect()
    }

    #[test]
    fn test_default_sorts_newest_first() {
        let sessions = history();
        assert_eq!(ids(SessionQuery::default().apply(&sessions)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_search_spans_location_and_notes() {
        let sessions = history();
        let query = SessionQuery { search: Some("RIVER".into()), ..Default::default() };
        assert_eq!(ids(query.apply(&sessions)), vec!["b", "c"]);
    }

    #[test]
    fn test_filter_and_sort_by_result() {
        let sessions = history();
        let query = SessionQuery {
            game_type: Some("Keno".into()),
            sort_by: SortBy::Result,
            ..Default::default()
        };
        assert_eq!(ids(query.apply(&sessions)), vec!["c", "a"]);
    }

    #[test]
    fn test_sort_by_amount() {
        let sessions = history();
        let query = SessionQuery { sort_by: SortBy::Amount, ..Default::default() };
        assert_eq!(ids(query.apply(&sessions)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_game_types_first_seen() {
        assert_eq!(game_types(&history()), vec!["Keno", "Roulette (European)"]);
    }
}
