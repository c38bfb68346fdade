//! Caller-side game session.
//!
//! The engine in `merge2048-core` owns no state. This crate holds what a
//! frontend needs between pushes: the current and previous grid and score,
//! the best score, and the animation in progress. Persistence is reached only
//! through the injected [`StateStore`] interface.

pub mod session;
pub mod store;

pub use merge2048_core as core;
pub use merge2048_types as types;

pub use session::{GameSession, PushOutcome, SessionConfig, TileFrame};
pub use store::{GameState, MemoryStore, StateStore, StoreError};
