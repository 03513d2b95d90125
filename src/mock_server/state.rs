//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Modrinth API server.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Shared state for the mock server.
///
/// Projects are stored as raw JSON so the server returns exactly what a test
/// put in. It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by their `id` field.
    pub projects: HashMap<String, Value>,

    /// Optional authentication token. If set, requests must send this exact
    /// `Authorization` header value.
    pub required_token: Option<String>,

    /// `Authorization` header of every project request received, in order.
    pub seen_auth: Vec<Option<String>>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state. Projects without a string `id` are ignored.
    pub fn with_project(mut self, project: Value) -> Self {
        self.insert_project(project);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Insert or replace a project, keyed by its `id`.
    pub fn insert_project(&mut self, project: Value) {
        if let Some(id) = project.get("id").and_then(Value::as_str) {
            self.projects.insert(id.to_string(), project);
        }
    }

    /// Get a project by ID or slug. IDs take precedence.
    pub fn get_project(&self, id_or_slug: &str) -> Option<&Value> {
        self.projects.get(id_or_slug).or_else(|| {
            self.projects
                .values()
                .find(|p| p.get("slug").and_then(Value::as_str) == Some(id_or_slug))
        })
    }

    /// Whether a request with this `Authorization` value may proceed.
    pub fn is_authorized(&self, auth: Option<&str>) -> bool {
        match &self.required_token {
            Some(required) => auth == Some(required.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_get_project_by_id_and_slug() {
        let state = MockState::new().with_project(json!({
            "id": "AANobbMI",
            "slug": "sodium",
            "title": "Sodium"
        }));

        assert_eq!(state.get_project("AANobbMI").unwrap()["title"], "Sodium");
        assert_eq!(state.get_project("sodium").unwrap()["id"], "AANobbMI");
        assert!(state.get_project("lithium").is_none());
    }

    #[test]
    fn test_state_ignores_project_without_id() {
        let state = MockState::new().with_project(json!({ "slug": "orphan" }));
        assert!(state.projects.is_empty());
    }

    #[test]
    fn test_state_required_token() {
        let open = MockState::new();
        assert!(open.is_authorized(None));

        let locked = MockState::new().with_required_token("tok123");
        assert!(locked.is_authorized(Some("tok123")));
        assert!(!locked.is_authorized(Some("Bearer tok123")));
        assert!(!locked.is_authorized(None));
    }
}
