use crate::config::Config;
use crate::models::error::AppError;
use serde::de::DeserializeOwned;

/// Backend tables the dashboard reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Properties,
    Leads,
}

impl Table {
    /// Returns the table name used in REST paths.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Properties => "properties",
            Table::Leads => "leads",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A row type that lives in one backend table.
pub trait Record: DeserializeOwned {
    const TABLE: Table;
}

/// Read-only source of the most recent rows of a table.
///
/// Implementations return at most `limit` rows ordered by `created_at`, newest first.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_recent<R: Record>(&self, limit: usize) -> Result<Vec<R>, AppError>;
}

// API CONFIGURATION
/// Configuration for the Supabase REST client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host part of the base URL, for display.
    pub fn host(&self) -> &str {
        let without_scheme = self
            .base_url
            .split_once("://")
            .map_or(self.base_url.as_str(), |(_, rest)| rest);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }

    /// Constructs the URL for the newest `limit` rows of `table`.
    pub fn recent_url(&self, table: Table, limit: usize) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=created_at.desc&limit={}",
            self.base_url.trim_end_matches('/'),
            table.name(),
            limit
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the anon key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::SUPABASE_URL.to_string()),
            api_key: self
                .api_key
                .unwrap_or_else(|| Config::SUPABASE_ANON_KEY.to_string()),
        }
    }
}

// SUPABASE CLIENT
/// HTTP client for the Supabase REST (PostgREST) API.
pub struct SupabaseClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SupabaseClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        if config.base_url.trim().is_empty() {
            return Err(AppError::ConfigError("Backend URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

impl DataSource for SupabaseClient {
    async fn fetch_recent<R: Record>(&self, limit: usize) -> Result<Vec<R>, AppError> {
        let url = self.config.recent_url(R::TABLE, limit);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(error_for_status(status.as_u16(), &body));
        }

        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse {} rows: {e}", R::TABLE)))
    }
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: u16, body: &str) -> AppError {
    match status {
        429 => AppError::RateLimited,
        401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}
