//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the static resolver and the fallback
//! router, decoupled from routing policy.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_api_not_found_response,
    build_file_response, build_options_response, build_server_error_response,
    build_shell_response,
};
