//! In-memory stores for drafts and characters
//!
//! Each store owns its collection behind an async `RwLock` and is shared
//! between handlers through an `Arc` in the application state. Nothing is
//! persisted; a restart starts from empty collections.

mod characters;
mod drafts;

pub use characters::CharacterStore;
pub use drafts::DraftStore;

/// Errors from store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Draft not found: {0}")]
    DraftNotFound(u64),
}
