//! Modrinth API client library.
//!
//! A small Rust client for the Modrinth REST API. It looks up projects by
//! ID or slug and hands back the response body as untyped JSON, exactly as
//! the API sent it.
//!
//! # Quick Start
//!
//! ```no_run
//! use modrinth::{ClientOptions, ModrinthClient};
//!
//! #[tokio::main]
//! async fn main() -> modrinth::Result<()> {
//!     // Production API, anonymous
//!     let client = ModrinthClient::new();
//!
//!     // Get a project by slug or by its 8-character ID
//!     let project = client.get_project("sodium").await?;
//!     println!("Project: {}", project["title"]);
//!
//!     // Staging API with a token sent as the Authorization header
//!     let staging = ModrinthClient::with_options(
//!         ClientOptions::new().auth("mrp_token").prod(false),
//!     );
//!     let project = staging.get_project("AANobbMI").await?;
//!     println!("{project:#}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Only transport failures and non-JSON bodies are errors. An API error
//! such as an unknown project comes back as `Ok` holding the API's JSON
//! error payload (e.g. `{"error":"not_found", ...}`); inspect it yourself.
//!
//! # Configuration
//!
//! [`ClientOptions`] has two optional fields:
//!
//! - `auth` - token sent verbatim as the `Authorization` header
//! - `prod` - `true` (default) for `https://api.modrinth.com/v2`,
//!   `false` for `https://staging-api.modrinth.com/v2`

pub mod cli;
mod client;
mod error;
mod identifier;
mod options;
mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::ModrinthClient;
pub use error::{ModrinthError, Result};
pub use identifier::IdentifierKind;
pub use options::{ClientOptions, Environment};
pub use output::{field_rows, FieldRow, PrettyPrint};
