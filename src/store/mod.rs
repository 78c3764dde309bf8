//! Local persistence for sessions, debt terms and settings

mod blob;
mod repository;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use repository::{SessionStore, DEBT_KEY, SESSIONS_KEY, SETTINGS_KEY};
