//! Request handler module
//!
//! Routes each request by exact path: the customer listing, or a 404.

pub mod customers;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
