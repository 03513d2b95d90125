//! Mock Modrinth API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Modrinth
//! project endpoint for integration and end-to-end testing. Unlike wiremock
//! which mocks at the HTTP level per-test, this server resolves projects by
//! ID or slug and enforces an optional token, enabling realistic workflow
//! testing.
//!
//! # Example
//!
//! ```ignore
//! use modrinth::mock_server::MockServer;
//! use modrinth::ModrinthClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ModrinthClient::with_base_url(&server.api_root(), None).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = client.get_project("sodium").await.unwrap();
//!     assert_eq!(project["title"], "Sodium");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
