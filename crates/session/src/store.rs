//! Persisted game state and the storage interface
//!
//! [`GameState`] serializes to the shape frontends keep in storage:
//!
//! ```json
//! { "grid": [[2, 0], [0, 0]], "previousGrid": [[0, 0], [0, 2]], "score": 4, "previousScore": 0 }
//! ```
//!
//! `previousGrid` and `previousScore` are optional and only exist so the
//! caller can undo one move.

use serde::{Deserialize, Serialize};

use crate::types::{GameError, Grid};

/// Snapshot of a game as stored by a frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub grid: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_grid: Option<Grid>,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_score: Option<u32>,
}

impl GameState {
    /// Check that the undo grid matches the current grid's size
    pub fn validate(&self) -> Result<(), GameError> {
        match &self.previous_grid {
            Some(prev) if prev.size() != self.grid.size() => Err(GameError::InvalidGrid {
                reason: format!(
                    "previous grid is {}x{} but grid is {}x{}",
                    prev.size(),
                    prev.size(),
                    self.grid.size(),
                    self.grid.size()
                ),
            }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode or decode game state: {0}")]
    Serde(#[from] serde_json::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Storage for the saved game and the best score
pub trait StateStore {
    fn load(&self) -> Result<Option<GameState>, StoreError>;

    fn save(&mut self, state: &GameState) -> Result<(), StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;

    fn best_score(&self) -> Result<u32, StoreError>;

    fn set_best_score(&mut self, score: u32) -> Result<(), StoreError>;

    fn has_started_game(&self) -> Result<bool, StoreError> {
        Ok(self.load()?.is_some())
    }
}

/// In-process store holding the state as JSON text
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<String>,
    best_score: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON of the saved state, if any
    pub fn raw_state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Replace the saved JSON directly
    pub fn set_raw_state(&mut self, json: impl Into<String>) {
        self.state = Some(json.into());
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, StoreError> {
        let Some(json) = &self.state else {
            return Ok(None);
        };
        let state: GameState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        self.state = Some(serde_json::to_string(state)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.state = None;
        Ok(())
    }

    fn best_score(&self) -> Result<u32, StoreError> {
        Ok(self.best_score)
    }

    fn set_best_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.best_score = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState {
            grid: Grid::from_rows(vec![vec![4, 0], vec![0, 2]]).unwrap(),
            previous_grid: Some(Grid::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap()),
            score: 4,
            previous_score: Some(0),
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(state()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "grid": [[4, 0], [0, 2]],
                "previousGrid": [[2, 2], [0, 0]],
                "score": 4,
                "previousScore": 0
            })
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let state = GameState {
            previous_grid: None,
            previous_score: None,
            ..state()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"grid":[[4,0],[0,2]],"score":4}"#);
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_memory_store_save_load() {
        let mut store = MemoryStore::new();
        assert!(!store.has_started_game().unwrap());
        assert_eq!(store.load().unwrap(), None);

        store.save(&state()).unwrap();
        assert!(store.has_started_game().unwrap());
        assert_eq!(store.load().unwrap(), Some(state()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_best_score() {
        let mut store = MemoryStore::new();
        assert_eq!(store.best_score().unwrap(), 0);
        store.set_best_score(2048).unwrap();
        assert_eq!(store.best_score().unwrap(), 2048);
    }

    #[test]
    fn test_load_rejects_invalid_grid() {
        let mut store = MemoryStore::new();
        store.set_raw_state(r#"{"grid":[[3,0],[0,0]],"score":0}"#);
        assert!(matches!(store.load(), Err(StoreError::Serde(_))));

        store.set_raw_state(r#"{"grid":[[2,0],[0,0]],"previousGrid":[[0]],"score":0}"#);
        assert!(matches!(store.load(), Err(StoreError::Game(_))));
    }
}
