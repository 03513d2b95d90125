//! Basic example demonstrating the Modrinth API client.
//!
//! Run with:
//! ```
//! cargo run --example basic -- sodium
//! MODRINTH_TOKEN=mrp_... cargo run --example basic -- AANobbMI
//! ```

use modrinth::{ClientOptions, IdentifierKind, ModrinthClient, PrettyPrint};

#[tokio::main]
async fn main() -> modrinth::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let id_or_slug = std::env::args().nth(1).unwrap_or_else(|| "sodium".to_string());

    let mut options = ClientOptions::new();
    options.auth = std::env::var("MODRINTH_TOKEN").ok();

    println!("Creating Modrinth client...");
    let client = ModrinthClient::with_options(options);
    println!("Connected to: {}", client.api_root());
    println!("Authenticated: {}", client.is_authenticated());

    println!("\n--- Getting Project ({:?}) ---", IdentifierKind::classify(&id_or_slug));
    let project = client.get_project(&id_or_slug).await?;

    if let Some(error) = project.get("error") {
        println!("API returned an error: {error}");
        if let Some(description) = project.get("description") {
            println!("  {description}");
        }
    } else {
        println!("{}", project.pretty_print());
    }

    println!("\nDone!");
    Ok(())
}
