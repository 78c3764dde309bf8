//! Quick-add templates for common session outcomes

use super::NewSession;
use crate::error::{RealityError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub bet_amount: f64,
    pub win_amount: f64,
    pub loss_amount: f64,
    pub duration: u32,
}

pub const QUICK_TEMPLATES: [QuickTemplate; 4] = [
    QuickTemplate {
        name: "Quick Loss",
        description: "Lost money quickly",
        bet_amount: 100.0,
        win_amount: 0.0,
        loss_amount: 100.0,
        duration: 30,
    },
    QuickTemplate {
        name: "Big Win",
        description: "Had a lucky session",
        bet_amount: 50.0,
        win_amount: 200.0,
        loss_amount: 0.0,
        duration: 45,
    },
    QuickTemplate {
        name: "Break Even",
        description: "Came out even",
        bet_amount: 200.0,
        win_amount: 200.0,
        loss_amount: 200.0,
        duration: 60,
    },
    QuickTemplate {
        name: "Small Loss",
        description: "Lost a little bit",
        bet_amount: 50.0,
        win_amount: 0.0,
        loss_amount: 50.0,
        duration: 20,
    },
];

impl QuickTemplate {
    /// Lowercase, dash-separated form of the name ("Quick Loss" -> "quick-loss")
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Fill a new session from this template, dated now
    pub fn to_new_session(&self, game_type: impl Into<String>) -> NewSession {
        NewSession::new(
            game_type,
            self.bet_amount,
            self.win_amount,
            self.loss_amount,
            self.duration,
        )
    }
}

/// Look up a template by display name or slug, ignoring case
pub fn find_template(name: &str) -> Result<&'static QuickTemplate> {
    let wanted = name.trim().to_lowercase();
    QUICK_TEMPLATES
        .iter()
        .find(|t| t.name.to_lowercase() == wanted || t.slug() == wanted)
        .ok_or_else(|| RealityError::UnknownTemplate(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_or_slug() {
        assert_eq!(find_template("Big Win").map(|t| t.win_amount).ok(), Some(200.0));
        assert_eq!(find_template("small-loss").map(|t| t.loss_amount).ok(), Some(50.0));
        assert!(matches!(find_template("jackpot"), Err(RealityError::UnknownTemplate(_))));
    }

    #[test]
    fn test_template_session_net_result() {
        let quick_loss = find_template("quick-loss").expect("template exists");
        let new = quick_loss.to_new_session("Keno");

        assert_eq!(new.game_type, "Keno");
        assert_eq!(new.net_result(), -100.0);
        assert_eq!(new.duration, 30);
    }

    #[test]
    fn test_break_even_nets_zero() {
        let t = find_template("Break Even").expect("template exists");
        assert_eq!(t.to_new_session("Craps (Pass Line)").net_result(), 0.0);
    }
}
