//! Session records, debt terms, settings, and the ways sessions get created

mod data;
pub mod loader;
pub mod templates;
pub mod validate;
pub mod query;

pub use data::{DebtInfo, NewSession, Session, SessionUpdate, Theme, UserSettings};
pub use loader::{load_sessions, load_sessions_from_reader};
pub use query::{game_types, SessionQuery, SortBy};
pub use templates::{find_template, QuickTemplate, QUICK_TEMPLATES};
pub use validate::{validate_new_session, validate_update};
