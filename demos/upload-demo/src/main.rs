//! Upload Demo
//!
//! Builds a profile update request carrying a query string and a multipart
//! body with a JSON part and an image part, then prints what would be sent.
//!
//! Run with `RUST_LOG=debug` to see the parameter descriptions.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use satchel::prelude::*;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Data Types
// ============================================================================

/// Profile fields sent next to the avatar.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub bio: Option<String>,
    pub tags: Vec<String>,
}

// ============================================================================
// Main: Demonstrate usage
// ============================================================================

fn main() -> satchel::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let profile = Profile {
        name: "Alice".to_string(),
        bio: Some("Rustacean".to_string()),
        tags: vec!["admin".to_string()],
    };
    // Fake JPEG header followed by some payload
    let avatar = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'].to_vec();

    let chain = EncoderChain::with_config(EncoderConfig::builder().log_level(LogLevel::Info).build())
        .encoder(QueryParameters::new([("notify", "false"), ("source", "demo")]))
        .encoder(
            MultipartBody::new()
                .part(JsonBody::named(profile, "profile"))
                .part(ImageParameter::named(avatar, "avatar.jpg", "avatar")),
        );

    let request = chain.encode(Request::parse("https://api.example.com/me/profile")?)?;

    println!("=== Encoded request ===");
    if let Some(url) = request.url() {
        println!("URL: {url}");
    }
    for (name, value) in request.headers() {
        println!("{name}: {}", value.to_str().unwrap_or("<binary>"));
    }
    if let Some(body) = request.body() {
        println!("\n{} body bytes:", body.len());
        println!("{}", String::from_utf8_lossy(body).escape_debug());
    }

    Ok(())
}
