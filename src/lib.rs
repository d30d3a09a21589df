//! SPA delivery layer
//!
//! A static-file server with a client-side-routing fallback rule, plus a thin
//! HTTP client wrapper for the separate backend API. The fallback policy is a
//! single pure decision function shared by the production and development
//! server modes.

pub mod client;
pub mod config;
pub mod fallback;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
