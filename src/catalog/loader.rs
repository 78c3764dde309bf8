//! Load catalogs from CSV
//!
//! Game catalog columns: `name,theoretical_edge,description`
//! Investment catalog columns: `name,annual_return,description`

use super::{GameCatalog, GameType, InvestmentCatalog, InvestmentScenario};
use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a game catalog from a CSV file
pub fn load_game_catalog<P: AsRef<Path>>(path: P) -> Result<GameCatalog> {
    let file = File::open(path.as_ref())?;
    log::debug!("Loading game catalog from {}", path.as_ref().display());
    load_game_catalog_from_reader(file)
}

/// Load a game catalog from any CSV reader
///
/// Rows with a negative or non-finite edge are skipped with a warning.
pub fn load_game_catalog_from_reader<R: Read>(reader: R) -> Result<GameCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<GameType>() {
        let row = record?;
        if !row.theoretical_edge.is_finite() || row.theoretical_edge < 0.0 {
            log::warn!("Skipping game '{}' with invalid edge {}", row.name, row.theoretical_edge);
            continue;
        }
        rows.push(row);
    }

    Ok(GameCatalog::from_loaded(&rows))
}

/// Load investment scenarios from a CSV file
pub fn load_investment_catalog<P: AsRef<Path>>(path: P) -> Result<InvestmentCatalog> {
    let file = File::open(path.as_ref())?;
    log::debug!("Loading investment catalog from {}", path.as_ref().display());
    load_investment_catalog_from_reader(file)
}

/// Load investment scenarios from any CSV reader, preserving row order
pub fn load_investment_catalog_from_reader<R: Read>(reader: R) -> Result<InvestmentCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<InvestmentScenario>() {
        let row = record?;
        if !row.annual_return.is_finite() {
            log::warn!("Skipping scenario '{}' with non-finite return", row.name);
            continue;
        }
        rows.push(row);
    }

    Ok(InvestmentCatalog::from_loaded(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_games_from_reader() {
        let data = "name,theoretical_edge,description\n\
                    Baccarat (Banker),1.06,Banker bet\n\
                    Broken,-1.0,Negative edge\n\
                    Keno,25.0,Very poor odds\n";
        let catalog = load_game_catalog_from_reader(data.as_bytes()).expect("Failed to load");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.edge("Baccarat (Banker)"), Some(1.06));
        assert!(!catalog.contains("Broken"));
    }

    #[test]
    fn test_load_investments_preserves_order() {
        let data = "name,annual_return,description\n\
                    Bonds,5.0,Treasury ladder\n\
                    Index,9.5,Total market\n";
        let catalog = load_investment_catalog_from_reader(data.as_bytes()).expect("Failed to load");

        let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bonds", "Index"]);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "name,theoretical_edge,description\nKeno,lots,Very poor odds\n";
        assert!(load_game_catalog_from_reader(data.as_bytes()).is_err());
    }
}
