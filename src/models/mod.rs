//! Draft, pick and character types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single selection made during a draft.
///
/// Picks are caller-defined JSON objects and are stored exactly as received.
pub type Pick = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: u64,
    pub name: String,
    pub participants: Vec<String>,
    pub picks: Vec<Pick>,
}

impl Draft {
    pub fn new(id: u64, name: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            participants,
            picks: Vec::new(),
        }
    }

    pub fn add_pick(&mut self, pick: Pick) {
        self.picks.push(pick);
    }
}

/// A searchable catalog entry.
///
/// Only `name` is required; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Case-insensitive substring match against `name`.
    ///
    /// `needle` must already be lower-cased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
