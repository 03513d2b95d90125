//! Client configuration and API environment selection.

use serde::Deserialize;

const PROD_API: &str = "https://api.modrinth.com/v2";
const STAGING_API: &str = "https://staging-api.modrinth.com/v2";

/// Which Modrinth deployment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// `https://api.modrinth.com/v2`
    #[default]
    Production,
    /// `https://staging-api.modrinth.com/v2`
    Staging,
}

impl Environment {
    /// The API root for this environment, without a trailing slash.
    pub fn api_root(self) -> &'static str {
        match self {
            Environment::Production => PROD_API,
            Environment::Staging => STAGING_API,
        }
    }
}

/// Construction-time options for [`ModrinthClient`](crate::ModrinthClient).
///
/// Unset fields fall back to their defaults individually, so
/// `ClientOptions::new().auth("token")` still targets production.
///
/// # Example
///
/// ```
/// use modrinth::{ClientOptions, Environment};
///
/// let options = ClientOptions::new().auth("mrp_token").prod(false);
/// assert_eq!(options.environment(), Environment::Staging);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientOptions {
    /// Token sent verbatim as the `Authorization` header.
    ///
    /// Methods that require authorization return the API's error payload
    /// when this is absent.
    pub auth: Option<String>,

    /// Use the production API (`true`, the default) or staging (`false`).
    pub prod: Option<bool>,
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("auth", &self.auth.as_ref().map(|_| "<redacted>"))
            .field("prod", &self.prod)
            .finish()
    }
}

impl ClientOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the authorization token.
    pub fn auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    /// Select production (`true`) or staging (`false`).
    pub fn prod(mut self, prod: bool) -> Self {
        self.prod = Some(prod);
        self
    }

    /// Resolve the environment. Only an explicit `prod: false` selects staging.
    pub fn environment(&self) -> Environment {
        match self.prod {
            Some(false) => Environment::Staging,
            Some(true) | None => Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        assert_eq!(ClientOptions::default().environment(), Environment::Production);
    }

    #[test]
    fn test_prod_flag() {
        assert_eq!(ClientOptions::new().prod(true).environment(), Environment::Production);
        assert_eq!(ClientOptions::new().prod(false).environment(), Environment::Staging);
    }

    #[test]
    fn test_auth_alone_keeps_production() {
        let options = ClientOptions::new().auth("x");
        assert_eq!(options.prod, None);
        assert_eq!(options.environment(), Environment::Production);
    }

    #[test]
    fn test_api_roots() {
        assert_eq!(Environment::Production.api_root(), "https://api.modrinth.com/v2");
        assert_eq!(Environment::Staging.api_root(), "https://staging-api.modrinth.com/v2");
    }

    #[test]
    fn test_deserialize_partial_options() {
        let options: ClientOptions = serde_json::from_str(r#"{"auth":"tok"}"#).unwrap();
        assert_eq!(options.auth.as_deref(), Some("tok"));
        assert_eq!(options.environment(), Environment::Production);

        let options: ClientOptions = serde_json::from_str(r#"{"prod":false}"#).unwrap();
        assert_eq!(options.environment(), Environment::Staging);
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", ClientOptions::new().auth("secret-token"));
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("redacted"));
    }
}
