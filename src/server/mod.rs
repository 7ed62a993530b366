//! Server module
//!
//! Listener setup, per-connection handling, and the embeddable [`App`]
//! that owns the dispatch chain.

pub mod app;
pub mod connection;
pub mod listener;

// Re-export commonly used items
pub use app::{App, AppState};
pub use listener::create_reusable_listener;
