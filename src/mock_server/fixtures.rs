//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic project payloads.

use serde_json::{json, Value};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a minimal project with the fields every Modrinth project has.
    pub fn minimal_project(id: &str, slug: &str, title: &str) -> Value {
        json!({
            "id": id,
            "slug": slug,
            "title": title,
            "description": "",
            "project_type": "mod",
            "downloads": 0,
            "followers": 0,
            "client_side": "optional",
            "server_side": "optional",
            "categories": [],
            "versions": [],
            "game_versions": [],
            "loaders": []
        })
    }

    /// Create a fully populated mod project.
    pub fn mod_project(id: &str, slug: &str, title: &str, downloads: u64) -> Value {
        let mut project = Self::minimal_project(id, slug, title);
        project["description"] = json!(format!("{title} for Minecraft"));
        project["downloads"] = json!(downloads);
        project["followers"] = json!(downloads / 100);
        project["client_side"] = json!("required");
        project["server_side"] = json!("unsupported");
        project["categories"] = json!(["optimization"]);
        project["loaders"] = json!(["fabric", "quilt"]);
        project["game_versions"] = json!(["1.20.1", "1.20.4", "1.21"]);
        project["license"] = json!({
            "id": "LGPL-3.0-only",
            "name": "GNU Lesser General Public License v3.0 only",
            "url": null
        });
        project["status"] = json!("approved");
        project
    }

    /// The body the API returns for an unknown project.
    pub fn not_found() -> Value {
        json!({
            "error": "not_found",
            "description": "the requested route does not exist"
        })
    }

    /// The body the API returns for a rejected token.
    pub fn unauthorized() -> Value {
        json!({
            "error": "unauthorized",
            "description": "Authentication Error: Invalid Authentication Credentials"
        })
    }

    /// Projects loaded by [`MockServer::start`](super::MockServer::start).
    pub fn default_projects() -> Vec<Value> {
        vec![
            Self::mod_project("AANobbMI", "sodium", "Sodium", 45_000_000),
            Self::mod_project("gvQqBUqZ", "lithium", "Lithium", 20_000_000),
            Self::minimal_project("P7dR8mSH", "fabric-api", "Fabric API"),
        ]
    }
}
