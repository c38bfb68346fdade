//! 2048 engine (workspace facade crate).
//!
//! Exposes `merge2048::{core, session, types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub use merge2048_core as core;
pub use merge2048_session as session;
pub use merge2048_types as types;
