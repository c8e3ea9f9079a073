//! Preview binary - renders the page to a file or stdout without a server
//!
//! Usage:
//!   cargo run --bin preview                        # English page to stdout
//!   cargo run --bin preview -- ar                  # Arabic page to stdout
//!   cargo run --bin preview -- ar preview/ar.html  # Arabic page to a file
//!
//! Optional environment variables:
//! - SCENE_ENABLED (defaults to true)
//! - SCROLL_THRESHOLD, HEADER_OFFSET (only affect the generated script)

use anyhow::{Context, Result};
use everwin_park::config::Config;
use everwin_park::i18n::Language;
use everwin_park::page::PageState;
use everwin_park::{render, server};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays pure HTML)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("everwin_park=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments: [lang] [output-path]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env()?;
    let language = match args.first() {
        Some(code) => Language::from_code(code).context("First argument must be a language code")?,
        None => config.default_language,
    };

    server::check_dictionaries()?;

    let state = PageState::new(language);
    let html = render::render_page(&state, &config);

    match args.get(1) {
        Some(path) => {
            let path = Path::new(path);
            render::save_page(path, &html)?;
            info!("Wrote {} page ({} bytes) to {}", language.name(), html.len(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
