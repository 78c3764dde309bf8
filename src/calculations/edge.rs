//! Personal edge: the house edge implied by a player's own results

use crate::session::Session;

/// Percentage of total wagered that the player has lost
///
/// `-Σ net_result / Σ bet_amount * 100`. Positive means the player is
/// losing money, negative means a net win. Returns 0 for no sessions or
/// when nothing was wagered.
pub fn personal_edge(sessions: &[Session]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }

    let total_bet: f64 = sessions.iter().map(|s| s.bet_amount()).sum();
    let total_net: f64 = sessions.iter().map(|s| s.net_result()).sum();

    if total_bet == 0.0 {
        return 0.0;
    }

    -total_net / total_bet * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NewSession;
    use approx::assert_relative_eq;

    fn session(bet: f64, win: f64, loss: f64) -> Session {
        Session::create(NewSession::new("Roulette (American)", bet, win, loss, 30))
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(personal_edge(&[]), 0.0);
    }

    #[test]
    fn test_zero_wagered_is_zero() {
        let sessions = vec![session(0.0, 0.0, 25.0), session(0.0, 10.0, 0.0)];
        assert_eq!(personal_edge(&sessions), 0.0);
    }

    #[test]
    fn test_sign_follows_result() {
        // Net loss of 30 on 200 wagered
        let losing = vec![session(100.0, 0.0, 50.0), session(100.0, 20.0, 0.0)];
        assert_relative_eq!(personal_edge(&losing), 15.0);

        // Net win of 40 on 100 wagered
        let winning = vec![session(100.0, 40.0, 0.0)];
        assert_relative_eq!(personal_edge(&winning), -40.0);
    }

    #[test]
    fn test_order_independent() {
        let a = session(80.0, 0.0, 80.0);
        let b = session(20.0, 5.0, 0.0);
        let forward = personal_edge(&[a.clone(), b.clone()]);
        let backward = personal_edge(&[b, a]);
        assert_relative_eq!(forward, backward);
        assert_relative_eq!(forward, 75.0);
    }

    #[test]
    fn test_nan_propagates() {
        let sessions = vec![session(f64::NAN, 0.0, 10.0)];
        assert!(personal_edge(&sessions).is_nan());
    }
}
