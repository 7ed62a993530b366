//! HTTP protocol layer module
//!
//! MIME type lookup and response building, decoupled from dispatch and
//! business logic.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use mime::MimeTable;
pub use response::{build_response, build_text_response, ResponseHead};
