//! SPA fallback routing policy
//!
//! Decides, for a request path the static resolver did not satisfy, whether to
//! decline (let the next stage answer), return the JSON API 404, or serve the
//! application shell document. Both the production and development servers
//! share this single decision function.

/// Server runtime mode.
///
/// Development mode additionally consults the in-progress source tree before
/// falling back to the shell document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    Production,
    Development,
}

/// Action chosen by the fallback router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAction {
    /// Decline to handle; the next stage (static resolution) answers, and may
    /// itself 404.
    PassThrough,
    /// Respond 404 with the JSON body `{"error":"Not Found"}`.
    ApiNotFound,
    /// Respond 200 with the shell document (`index.html`).
    ServeShell,
}

/// Derived, per-request classification of an incoming path.
///
/// Pure and stateless: identical inputs (path plus filesystem state as seen by
/// the predicate) always produce the identical classification. Never cached or
/// mutated after computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub raw_path: String,
    pub has_file_extension: bool,
    pub is_api_path: bool,
    /// Development mode only; always false in production.
    pub resolves_to_source_file: bool,
}

impl Classification {
    /// Decision order, first match wins:
    ///
    /// 1. API path -> `ApiNotFound`. API paths never receive the shell
    ///    document, even when they also contain a dot.
    /// 2. Dotted final segment -> `PassThrough`.
    /// 3. Development mode, path exists under the source root -> `PassThrough`.
    /// 4. Otherwise -> `ServeShell`.
    #[must_use]
    pub const fn action(&self) -> FallbackAction {
        if self.is_api_path {
            FallbackAction::ApiNotFound
        } else if self.has_file_extension || self.resolves_to_source_file {
            FallbackAction::PassThrough
        } else {
            FallbackAction::ServeShell
        }
    }
}

/// Classify a request path.
///
/// `source_exists` answers "does a file exist under the source root at this
/// server-relative path?" and is only consulted in development mode, and only
/// when the earlier checks did not already decide.
pub fn classify<F>(path: &str, api_prefix: &str, mode: ServerMode, source_exists: F) -> Classification
where
    F: Fn(&str) -> bool,
{
    let is_api_path = path.starts_with(api_prefix);
    let has_file_extension = last_segment_has_extension(path);

    let resolves_to_source_file = mode == ServerMode::Development
        && !is_api_path
        && !has_file_extension
        && source_exists(path);

    Classification {
        raw_path: path.to_string(),
        has_file_extension,
        is_api_path,
        resolves_to_source_file,
    }
}

/// True if the last path segment contains a `.` (looks like a static asset).
fn last_segment_has_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_prod(path: &str) -> Classification {
        classify(path, "/api", ServerMode::Production, |_| false)
    }

    #[test]
    fn test_api_path_returns_json_404() {
        let c = classify_prod("/api/projects");
        assert!(c.is_api_path);
        assert_eq!(c.action(), FallbackAction::ApiNotFound);
    }

    #[test]
    fn test_api_path_with_dot_never_serves_shell() {
        // API wins over the extension check in both variants
        let c = classify_prod("/api/export.csv");
        assert!(c.is_api_path);
        assert!(c.has_file_extension);
        assert_eq!(c.action(), FallbackAction::ApiNotFound);
    }

    #[test]
    fn test_dotted_path_passes_through() {
        let c = classify_prod("/assets/app.js");
        assert!(c.has_file_extension);
        assert_eq!(c.action(), FallbackAction::PassThrough);
    }

    #[test]
    fn test_route_path_serves_shell() {
        let c = classify_prod("/about");
        assert_eq!(c.action(), FallbackAction::ServeShell);
        assert_eq!(classify_prod("/").action(), FallbackAction::ServeShell);
        assert_eq!(classify_prod("/blog/post-1").action(), FallbackAction::ServeShell);
    }

    #[test]
    fn test_dot_in_middle_segment_only() {
        // Only the final segment decides; a dotted parent directory does not
        let c = classify_prod("/v1.2/about");
        assert!(!c.has_file_extension);
        assert_eq!(c.action(), FallbackAction::ServeShell);
    }

    #[test]
    fn test_dev_mode_source_file_passes_through() {
        let c = classify("/components/Foo", "/api", ServerMode::Development, |p| {
            p == "/components/Foo"
        });
        assert!(c.resolves_to_source_file);
        assert_eq!(c.action(), FallbackAction::PassThrough);
    }

    #[test]
    fn test_dev_mode_missing_source_serves_shell() {
        let c = classify("/about", "/api", ServerMode::Development, |_| false);
        assert_eq!(c.action(), FallbackAction::ServeShell);
    }

    #[test]
    fn test_production_never_consults_predicate() {
        let c = classify("/about", "/api", ServerMode::Production, |_| {
            panic!("predicate must not run in production mode")
        });
        assert_eq!(c.action(), FallbackAction::ServeShell);
    }

    #[test]
    fn test_api_path_ignores_filesystem_state() {
        let c = classify("/api/whatever", "/api", ServerMode::Development, |_| true);
        assert_eq!(c.action(), FallbackAction::ApiNotFound);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let a = classify_prod("/dashboard/settings");
        let b = classify_prod("/dashboard/settings");
        assert_eq!(a, b);
        assert_eq!(a.action(), b.action());
    }
}
