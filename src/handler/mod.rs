//! Request handler module
//!
//! Static asset resolution plus the SPA fallback rule: serve a real asset when
//! one exists, answer API misses with a JSON 404, and hand every remaining
//! route the application shell document.

pub mod router;
pub mod shell;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
