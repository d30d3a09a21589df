//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, static
//! resolution, then the SPA fallback rule for anything the resolver missed.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::fallback::{classify, FallbackAction, ServerMode};
use crate::handler::static_files;
use crate::http::{self, cache::CachePolicy};
use crate::logger::{self, AccessLogEntry};
use crate::server::AppState;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: std::net::SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let user_agent = header_string(&req, "user-agent");

    let ctx = RequestContext {
        path: &path,
        is_head: method == Method::HEAD,
        if_none_match: header_string(&req, "if-none-match"),
    };

    let response = match check_http_method(&method, &path, &state) {
        Some(resp) => resp,
        None => route_request(&ctx, &state).await,
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            method.to_string(),
            path.clone(),
        );
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes(&response);
        entry.user_agent = user_agent;
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
///
/// Unmatched API paths answer the JSON 404 for any method; everything else is
/// GET/HEAD only.
fn check_http_method(
    method: &Method,
    path: &str,
    state: &Arc<AppState>,
) -> Option<Response<Full<Bytes>>> {
    if *method == Method::GET || *method == Method::HEAD {
        None
    } else if path.starts_with(&state.config.routes.api_prefix) {
        // API paths answer the JSON 404 for any method, OPTIONS included
        Some(http::build_api_not_found_response())
    } else if *method == Method::OPTIONS {
        Some(http::build_options_response())
    } else {
        logger::log_warning(&format!("Method not allowed: {method}"));
        Some(http::build_405_response())
    }
}

/// Resolve a request: static assets first, fallback rule on miss
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let cfg = &state.config;

    // 1. Static resolution over the mode's docroot
    let (docroot, policy) = match state.mode {
        ServerMode::Production => (
            cfg.static_files.build_dir.as_str(),
            CachePolicy::Public(cfg.static_files.max_age),
        ),
        ServerMode::Development => (cfg.static_files.source_root.as_str(), CachePolicy::NoCache),
    };

    if let Some((content, content_type)) =
        static_files::load_from_directory(docroot, ctx.path, &cfg.static_files.index_files).await
    {
        return build_asset_response(ctx, &content, content_type, policy);
    }

    // 2. Fallback rule for everything the resolver missed
    let classification = classify(ctx.path, &cfg.routes.api_prefix, state.mode, |p| {
        static_files::source_file_exists(&cfg.static_files.source_root, p)
    });

    match classification.action() {
        FallbackAction::ApiNotFound => http::build_api_not_found_response(),
        FallbackAction::PassThrough => http::build_404_response(),
        FallbackAction::ServeShell => serve_shell(ctx, state).await,
    }
}

/// Serve the application shell document
///
/// A read failure is answered with a diagnostic 500 and logged; the process
/// keeps serving other requests.
async fn serve_shell(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match state.shell.load().await {
        Ok(content) => http::build_shell_response(content, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Shell document unavailable: {e}"));
            http::build_server_error_response(&e.to_string())
        }
    }
}

/// Build a static asset response, honoring conditional requests
fn build_asset_response(
    ctx: &RequestContext<'_>,
    content: &[u8],
    content_type: &'static str,
    policy: CachePolicy,
) -> Response<Full<Bytes>> {
    let etag = http::cache::generate_etag(content);
    if http::cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag, policy);
    }

    http::build_file_response(
        Bytes::from(content.to_owned()),
        content_type,
        &etag,
        policy,
        ctx.is_head,
    )
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
