//! Gambling Reality - session ledger and reality-check calculations
//!
//! This library provides:
//! - Session records with quick-add templates, validation and CSV import
//! - A local JSON blob store for sessions, debt terms and settings
//! - Personal vs. theoretical house edge and a full profile snapshot
//! - Bankroll time-to-zero, opportunity cost and debt payoff delay projections
//! - History analytics and display formatting

pub mod catalog;
pub mod session;
pub mod store;
pub mod calculations;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use catalog::{GameCatalog, InvestmentCatalog, InvestmentScenario};
pub use session::{DebtInfo, NewSession, Session, SessionUpdate, UserSettings};
pub use store::{FileBlobStore, SessionStore};
pub use calculations::{
    debt_impact, format_currency, format_percentage, investment_comparison, personal_edge,
    profitability_analysis, user_profile, Horizon,
};
pub use config::AppConfig;
pub use error::{RealityError, Result};
