//! Script Forge - script assembly for social deduction games
//!
//! The binary is a thin host around the generator session: it loads
//! the character catalog (falling back to the built-in one when the
//! API is unreachable), assembles a random script, prints the night
//! order and exports the result as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptforge::application::services::GenerationMode;
use scriptforge::domain::services::CharacterFilter;
use scriptforge::infrastructure::catalog_client::CatalogClient;
use scriptforge::infrastructure::config::AppConfig;
use scriptforge::infrastructure::export::export_script;
use scriptforge::{CatalogSource, ScriptSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptforge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Script Forge");

    let config = AppConfig::from_env()?;
    tracing::info!("  Catalog: {}", config.catalog_base_url);

    let client = CatalogClient::new(&config.catalog_base_url, config.catalog_timeout)?;
    let mut session = ScriptSession::load(&client, config.catalog_timeout).await;
    if session.catalog_source() == CatalogSource::Fallback {
        println!("note: catalog unavailable, using the built-in character set");
    }
    tracing::info!("Catalog ready with {} characters", session.catalog().len());

    let draft = session.draft_mut();
    draft.name = "随机剧本".to_string();
    draft.name_en = Some("Random Script".to_string());
    draft.author = "scriptforge".to_string();
    draft.player_count = 7;

    let mut rng = rand::thread_rng();
    let night_order = session
        .generate(GenerationMode::Random, &CharacterFilter::default(), &[], &mut rng)
        .map_err(|e| anyhow::anyhow!("generation rejected: {e}"))?;

    println!("Script for {} players:", session.draft().player_count);
    for character in &session.draft().selected {
        println!(
            "  [{}] {}",
            character.team,
            character.name_en.as_deref().unwrap_or(&character.name)
        );
    }

    println!("First night:");
    for character in &night_order.first_night {
        println!(
            "  {:>3}  {}",
            character.first_night,
            character.name_en.as_deref().unwrap_or(&character.name)
        );
    }
    println!("Other nights:");
    for character in &night_order.other_night {
        println!(
            "  {:>3}  {}",
            character.other_night,
            character.name_en.as_deref().unwrap_or(&character.name)
        );
    }

    let report = session.validate();
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }

    let path = export_script(session.draft(), std::path::Path::new("."))
        .map_err(|e| anyhow::anyhow!("export failed: {e}"))?;
    println!("Exported to {}", path.display());

    Ok(())
}
