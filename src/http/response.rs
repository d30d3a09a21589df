//! HTTP response building module
//!
//! Provides builders for the response shapes the server emits, decoupled from
//! routing policy. Builders never panic; a build failure is logged and degrades
//! to an empty response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::cache::CachePolicy;

/// Exact body for unmatched API paths
pub const API_NOT_FOUND_BODY: &str = "{\"error\":\"Not Found\"}";

/// Build the JSON 404 returned for unmatched API paths
pub fn build_api_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "application/json")
        .header("Content-Length", API_NOT_FOUND_BODY.len())
        .body(Full::new(Bytes::from(API_NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("API 404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response for missing static assets
pub fn build_404_response() -> Response<Full<Bytes>> {
    let body = Bytes::from("404 Not Found");
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str, policy: CachePolicy) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", policy.to_header_value())
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let body = Bytes::from("405 Method Not Allowed");
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 response with a diagnostic message
///
/// Used when the shell document cannot be read; the failure is scoped to the
/// single request, never the process.
pub fn build_server_error_response(message: &str) -> Response<Full<Bytes>> {
    let body = Bytes::from(format!("500 Internal Server Error: {message}"));
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 200 shell document response
pub fn build_shell_response(content: Bytes, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head { Bytes::new() } else { content };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("shell", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a static file response with `ETag` and cache control
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    policy: CachePolicy,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .header("Cache-Control", policy.to_header_value())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_not_found_shape() {
        let resp = build_api_not_found_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        assert_eq!(
            resp.headers().get("Content-Length").unwrap().to_str().unwrap(),
            API_NOT_FOUND_BODY.len().to_string()
        );
        assert_eq!(API_NOT_FOUND_BODY, "{\"error\":\"Not Found\"}");
    }

    #[test]
    fn test_error_responses_carry_content_length() {
        // Access logs take the body size from this header
        let resp = build_404_response();
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "13");

        let resp = build_405_response();
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "22");

        let resp = build_server_error_response("boom");
        assert_eq!(
            resp.headers().get("Content-Length").unwrap().to_str().unwrap(),
            "500 Internal Server Error: boom".len().to_string()
        );
    }

    #[test]
    fn test_shell_response_headers() {
        let resp = build_shell_response(Bytes::from("<html></html>"), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_shell_response_head_has_length_but_no_body() {
        let resp = build_shell_response(Bytes::from("<html></html>"), true);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "13");
    }

    #[test]
    fn test_server_error_carries_diagnostic() {
        let resp = build_server_error_response("shell document missing");
        assert_eq!(resp.status(), 500);
    }

    #[test]
    fn test_file_response_cache_header() {
        let resp = build_file_response(
            Bytes::from("body{}"),
            "text/css",
            "\"abc\"",
            CachePolicy::Public(3600),
            false,
        );
        assert_eq!(
            resp.headers().get("Cache-Control").unwrap(),
            "public, max-age=3600"
        );
        assert_eq!(resp.headers().get("ETag").unwrap(), "\"abc\"");
    }
}
