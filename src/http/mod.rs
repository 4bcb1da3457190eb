//! HTTP protocol layer module
//!
//! Response builders shared by the request handlers.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_json_response};
