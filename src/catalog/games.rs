//! Game catalog: theoretical house edge by game type label

use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameType {
    pub name: String,
    /// House advantage as a percentage of amount wagered (5.26 = 5.26%)
    pub theoretical_edge: f64,
    pub description: String,
}

/// Immutable, ordered lookup table of game types
#[derive(Debug, Clone, PartialEq)]
pub struct GameCatalog {
    games: Vec<GameType>,
}

impl GameCatalog {
    /// Create from loaded CSV rows; the first row wins on duplicate labels
    pub fn from_loaded(rows: &[GameType]) -> Self {
        let mut games: Vec<GameType> = Vec::with_capacity(rows.len());
        for row in rows {
            if games.iter().any(|g| g.name == row.name) {
                log::warn!("Duplicate game type '{}' in catalog, keeping first entry", row.name);
                continue;
            }
            games.push(row.clone());
        }
        Self { games }
    }

    pub fn get(&self, name: &str) -> Option<&GameType> {
        self.games.iter().find(|g| g.name == name)
    }

    /// Theoretical edge for a label, `None` when the label is not cataloged
    pub fn edge(&self, name: &str) -> Option<f64> {
        self.get(name).map(|g| g.theoretical_edge)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameType> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        let table: [(&str, f64, &str); 10] = [
            ("Blackjack (Basic Strategy)", 0.5, "Best odds with perfect basic strategy"),
            ("Blackjack (No Strategy)", 2.0, "Typical player without strategy"),
            ("Roulette (American)", 5.26, "Double zero roulette"),
            ("Roulette (European)", 2.7, "Single zero roulette"),
            ("Craps (Pass Line)", 1.41, "Best bet in craps"),
            ("Slots (Low Variance)", 3.0, "Low volatility slot machines"),
            ("Slots (High Variance)", 8.0, "High volatility slot machines"),
            ("Video Poker (Jacks or Better)", 0.46, "Good video poker game"),
            ("Keno", 25.0, "Very poor odds"),
            ("Lottery", 50.0, "Extremely poor odds"),
        ];

        Self {
            games: table
                .iter()
                .map(|&(name, theoretical_edge, description)| GameType {
                    name: name.to_string(),
                    theoretical_edge,
                    description: description.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edges() {
        let catalog = GameCatalog::default();

        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.edge("Roulette (American)"), Some(5.26));
        assert_eq!(catalog.edge("Video Poker (Jacks or Better)"), Some(0.46));
        assert_eq!(catalog.edge("Lottery"), Some(50.0));
        assert_eq!(catalog.edge("Pachinko"), None);
    }

    #[test]
    fn test_edge_range() {
        let catalog = GameCatalog::default();
        let min = catalog.iter().map(|g| g.theoretical_edge).fold(f64::INFINITY, f64::min);
        let max = catalog.iter().map(|g| g.theoretical_edge).fold(0.0, f64::max);

        assert_eq!(min, 0.46);
        assert_eq!(max, 50.0);
    }

    #[test]
    fn test_duplicate_labels_keep_first() {
        let rows = vec![
            GameType { name: "Keno".into(), theoretical_edge: 25.0, description: "a".into() },
            GameType { name: "Keno".into(), theoretical_edge: 30.0, description: "b".into() },
        ];
        let catalog = GameCatalog::from_loaded(&rows);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.edge("Keno"), Some(25.0));
    }
}
