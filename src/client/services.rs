//! Resource call catalog
//!
//! Fixed, resource-oriented calls over the configured client. Pure URL
//! templating and JSON bodies, no logic beyond that.

use serde_json::Value;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List projects, with optional query parameters (paging, filters)
    pub async fn projects(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.get("/projects", params).await
    }

    /// Fetch a single project by slug
    pub async fn project_by_slug(&self, slug: &str) -> Result<Value, ApiError> {
        self.get(&format!("/projects/{slug}"), &[]).await
    }

    /// List articles, with optional query parameters
    pub async fn articles(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.get("/articles", params).await
    }

    /// Fetch a single article by slug
    pub async fn article_by_slug(&self, slug: &str) -> Result<Value, ApiError> {
        self.get(&format!("/articles/{slug}"), &[]).await
    }

    /// List offered services, with optional query parameters
    pub async fn services(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.get("/services", params).await
    }

    /// Fetch a single offered service by slug
    pub async fn service_by_slug(&self, slug: &str) -> Result<Value, ApiError> {
        self.get(&format!("/services/{slug}"), &[]).await
    }

    /// List team members
    pub async fn team(&self) -> Result<Value, ApiError> {
        self.get("/team", &[]).await
    }

    /// List certificates
    pub async fn certificates(&self) -> Result<Value, ApiError> {
        self.get("/certificates", &[]).await
    }

    /// List licenses
    pub async fn licenses(&self) -> Result<Value, ApiError> {
        self.get("/licenses", &[]).await
    }

    /// Submit a contact form
    pub async fn submit_contact(&self, data: &Value) -> Result<Value, ApiError> {
        self.post("/contact/submit", data).await
    }

    /// Fetch company contact information
    pub async fn company_info(&self) -> Result<Value, ApiError> {
        self.get("/contact", &[]).await
    }

    /// Log in with credentials
    pub async fn login(&self, credentials: &Value) -> Result<Value, ApiError> {
        self.post("/auth/login", credentials).await
    }
}
