//! Character catalog storage

use tokio::sync::RwLock;

use crate::models::Character;

/// Ordered collection of characters
#[derive(Debug, Default)]
pub struct CharacterStore {
    characters: RwLock<Vec<Character>>,
}

impl CharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, character: Character) -> Character {
        tracing::debug!(name = %character.name, "Added character");
        self.characters.write().await.push(character.clone());
        character
    }

    /// Characters whose name contains `query`, ignoring case, in insertion order
    pub async fn search(&self, query: &str) -> Vec<Character> {
        let needle = query.to_lowercase();

        self.characters
            .read()
            .await
            .iter()
            .filter(|c| c.name_contains(&needle))
            .cloned()
            .collect()
    }
}
