//! Request handler module
//!
//! Built-in handlers: asynchronous file serving and the terminal
//! not-found fallback.

pub mod files;
pub mod not_found;

// Re-export main entry points
pub use files::serve_from_fs;
pub use not_found::not_found_handler;
