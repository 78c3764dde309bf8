//! Aggregate snapshot of a player's history

use super::personal_edge;
use crate::catalog::GameCatalog;
use crate::session::Session;
use serde::Serialize;
use std::collections::BTreeMap;

/// Derived, never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub total_gambled: f64,
    pub total_won: f64,
    /// Sum of losing session results, as a positive magnitude
    pub total_lost: f64,
    /// `total_lost - total_won`; negative means a net profit
    pub net_loss: f64,
    pub sessions_count: usize,
    pub average_session_loss: f64,
    pub personal_edge: f64,
    pub theoretical_edge: f64,
}

pub fn user_profile(sessions: &[Session], catalog: &GameCatalog) -> UserProfile {
    let total_gambled: f64 = sessions.iter().map(|s| s.bet_amount()).sum();
    let total_won: f64 = sessions.iter().map(|s| s.net_result().max(0.0)).sum();
    let total_lost: f64 = sessions.iter().map(|s| s.net_result().min(0.0).abs()).sum();
    let net_loss = total_lost - total_won;
    let sessions_count = sessions.len();
    let average_session_loss = if sessions_count > 0 {
        net_loss / sessions_count as f64
    } else {
        0.0
    };

    let profile = UserProfile {
        total_gambled,
        total_won,
        total_lost,
        net_loss,
        sessions_count,
        average_session_loss,
        personal_edge: personal_edge(sessions),
        theoretical_edge: theoretical_edge(sessions, catalog),
    };
    log::debug!(
        "Profile over {} sessions: net loss {:.2}, personal edge {:.2}%, theoretical edge {:.2}%",
        profile.sessions_count,
        profile.net_loss,
        profile.personal_edge,
        profile.theoretical_edge
    );
    profile
}

/// Wagering-weighted average of the catalog edge of each game played
///
/// Sessions whose game type is not cataloged carry no weight at all: they
/// are left out of both the weighted sum and the total wagered.
pub fn theoretical_edge(sessions: &[Session], catalog: &GameCatalog) -> f64 {
    let mut wagered_by_type: BTreeMap<&str, f64> = BTreeMap::new();
    for s in sessions {
        *wagered_by_type.entry(s.game_type()).or_insert(0.0) += s.bet_amount();
    }

    let mut weighted = 0.0;
    let mut recognized = 0.0;
    for (game_type, wagered) in wagered_by_type {
        match catalog.edge(game_type) {
            Some(edge) => {
                weighted += edge * wagered;
                recognized += wagered;
            }
            None => log::debug!(
                "Game type '{}' not in catalog, excluded from theoretical edge",
                game_type
            ),
        }
    }

    if recognized == 0.0 {
        0.0
    } else {
        weighted / recognized
    }
}

/// How the player's own edge compares with the games' theoretical edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict", content = "difference", rename_all = "lowercase")]
pub enum EdgeComparison {
    /// Losing less than the house edge predicts, by this many points
    Better(f64),
    /// Losing more than the house edge predicts, by this many points
    Worse(f64),
    Exact,
}

pub fn compare_edges(profile: &UserProfile) -> EdgeComparison {
    let difference = profile.personal_edge - profile.theoretical_edge;
    if difference > 0.0 {
        EdgeComparison::Worse(difference)
    } else if difference < 0.0 {
        EdgeComparison::Better(difference.abs())
    } else {
        EdgeComparison::Exact
    }
}
