//! # State Management
//!
//! Two focused state types instead of one `AppState`:
//!
//! - [`ConfigState`] - read-only settings, loaded once
//! - [`SessionState`] - the learner's mutable session (inventory)
//!
//! Commands take only the state they need, by reference.

pub mod config;
pub mod session;

pub use config::ConfigState;
pub use session::SessionState;
