//! Modrinth API client.
//!
//! Resolves the API root once at construction, composes request URIs and
//! issues authenticated GET requests. Responses are returned as untyped JSON.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::Result;
use crate::identifier::IdentifierKind;
use crate::options::ClientOptions;

/// Modrinth API client.
///
/// Configuration is fixed at construction; every call is a pure function of
/// its route plus that configuration, so a client can be shared freely
/// between tasks. Clones reference the same underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use modrinth::{ClientOptions, ModrinthClient};
///
/// # async fn example() -> modrinth::Result<()> {
/// // Production API, no token
/// let client = ModrinthClient::new();
/// let project = client.get_project("sodium").await?;
/// println!("{}", project["title"]);
///
/// // Staging API with a token
/// let staging = ModrinthClient::with_options(ClientOptions::new().auth("mrp_...").prod(false));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ModrinthClient {
    http: Client,
    api_root: Arc<str>,
    auth: Option<Arc<str>>,
}

impl std::fmt::Debug for ModrinthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModrinthClient")
            .field("api_root", &&*self.api_root)
            .field("authenticated", &self.auth.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ModrinthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ModrinthClient {
    /// Create a client for the production API without a token.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client from options.
    ///
    /// The API root is selected here and never re-evaluated.
    pub fn with_options(options: ClientOptions) -> Self {
        let api_root = options.environment().api_root();
        Self {
            http: Client::new(),
            api_root: Arc::from(api_root),
            auth: options.auth.map(Arc::from),
        }
    }

    /// Create a client for an explicit API root, e.g. a mirror or a local
    /// mock server.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root including the version segment (e.g. `http://127.0.0.1:8080/v2`)
    /// * `auth` - Optional token sent verbatim as the `Authorization` header
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(base_url: &str, auth: Option<&str>) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(Self {
            http: Client::new(),
            api_root: Arc::from(base_url.trim_end_matches('/')),
            auth: auth.map(Arc::from),
        })
    }

    /// Replace the HTTP client used for requests.
    ///
    /// The client applies no timeout of its own; configure one on the
    /// supplied [`reqwest::Client`] if needed.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// The resolved API root.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Fetch a project by ID or slug.
    ///
    /// The identifier is substituted into `/project/{id_or_slug}` as-is.
    /// API-level errors such as an unknown project are not errors here: the
    /// error payload is returned like any other body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body is not JSON.
    #[tracing::instrument(skip(self), fields(kind = ?IdentifierKind::classify(id_or_slug)))]
    pub async fn get_project(&self, id_or_slug: &str) -> Result<Value> {
        let route = format!("/project/{id_or_slug}");
        self.get(&route).await
    }

    /// Join the API root and a route with exactly one `/` between them.
    pub(crate) fn build_uri(&self, route: &str) -> String {
        if route.starts_with('/') {
            format!("{}{route}", self.api_root)
        } else {
            format!("{}/{route}", self.api_root)
        }
    }

    /// Make a GET request and decode the body as JSON regardless of status.
    #[tracing::instrument(skip(self))]
    pub(crate) async fn get(&self, route: &str) -> Result<Value> {
        let uri = self.build_uri(route);
        tracing::debug!(%uri, authenticated = self.auth.is_some(), "sending request");

        let mut request = self.http.get(&uri);
        if let Some(token) = &self.auth {
            request = request.header(AUTHORIZATION, &**token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(serde_json::from_str(&body)?)
    }
}
