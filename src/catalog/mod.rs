//! Static lookup tables: game house edges and investment scenarios

mod games;
mod investments;
pub mod loader;

pub use games::{GameCatalog, GameType};
pub use investments::{InvestmentCatalog, InvestmentScenario};
pub use loader::{load_game_catalog, load_investment_catalog};

/// Game type preselected by the quick-add and manual entry forms
pub const DEFAULT_GAME_TYPE: &str = "Slots (Low Variance)";
