//! Draft storage

use tokio::sync::RwLock;

use crate::models::{Draft, Pick};

use super::StoreError;

/// Ordered collection of drafts
#[derive(Debug, Default)]
pub struct DraftStore {
    drafts: RwLock<Vec<Draft>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft and return a copy of it.
    ///
    /// Ids are `count + 1`, assigned under the write lock. This is only
    /// unique while drafts are never removed.
    pub async fn create(&self, name: String, participants: Vec<String>) -> Draft {
        let mut drafts = self.drafts.write().await;
        let id = drafts.len() as u64 + 1;
        let draft = Draft::new(id, name, participants);
        drafts.push(draft.clone());

        tracing::debug!(draft_id = id, "Created draft");
        draft
    }

    /// Snapshot of every draft in creation order
    pub async fn list(&self) -> Vec<Draft> {
        self.drafts.read().await.clone()
    }

    /// Append a pick to the end of a draft's picks and return the updated draft
    pub async fn add_pick(&self, id: u64, pick: Pick) -> Result<Draft, StoreError> {
        let mut drafts = self.drafts.write().await;
        let draft = drafts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::DraftNotFound(id))?;

        draft.add_pick(pick);
        tracing::debug!(draft_id = id, picks = draft.picks.len(), "Added pick");

        Ok(draft.clone())
    }
}
