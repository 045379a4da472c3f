use std::env;
use std::fs;

use cutout::{ClientConfig, CutoutClient, RemovalOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    cutout::logger::init_with_config(
        cutout::logger::LoggerConfig::development().with_level(cutout::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking environment...");

    if let Ok(url) = env::var("CUTOUT_API_URL") {
        log::info!("CUTOUT_API_URL: {}", url);
    } else {
        log::warn!("No CUTOUT_API_URL set, using http://localhost:5001");
    }

    let config = ClientConfig::from_env();
    cutout::logger::log_config_info(&config);

    log::info!("🔄 Creating cutout client...");
    let client = match CutoutClient::new(config) {
        Ok(client) => {
            log::info!("✅ Client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize client: {}", e);
            return Err(e.into());
        }
    };

    // Test 1: Service introspection
    log::info!("🩺 Checking service health...");
    match client.service().health().await {
        Ok(health) => {
            log::info!(
                "✅ Service {} (v{}, ready={})",
                health.status,
                health.version,
                health.ready
            );
        }
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            log::warn!("💡 Is the removal service running at the configured base URL?");
            return Err(e.into());
        }
    }

    match client.service().status().await {
        Ok(status) => {
            log::info!("📊 Server: {}", status.server);
            log::info!(
                "   Ultra model: {} (loaded: {})",
                status.ultra_model.as_deref().unwrap_or("not_loaded"),
                status.ultra_model_loaded
            );
            log::info!(
                "   Advanced model: {} (loaded: {})",
                status.advanced_model.as_deref().unwrap_or("not_loaded"),
                status.advanced_model_loaded
            );
        }
        Err(e) => log::error!("❌ Status query failed: {}", e),
    }

    log::info!("📚 Available processing models:");
    match client.service().models().await {
        Ok(catalog) => {
            for (id, profile) in &catalog.models {
                let marker = if profile.recommended { "⭐" } else { "  " };
                log::info!("  {} {} - {}", marker, id, profile.name);
            }
            log::info!("   Default: {}", catalog.default_model);
        }
        Err(e) => log::error!("❌ Model listing failed: {}", e),
    }

    // Test 2: End-to-end removal of the image given on the command line
    let image_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            log::warn!("💡 Pass an image path to run an end-to-end removal");
            return Ok(());
        }
    };

    log::info!("🖼️  Loading {}", image_path);
    let image = image::open(&image_path)?;
    log::info!("   {}x{} pixels", image.width(), image.height());

    let options = RemovalOptions::new().with_model("ultra").with_positioning("smart");

    log::info!("🔄 Removing background...");
    let round_trip = cutout::logger::timer("remove_background");
    let outcome = match client.removal().remove_background(&image, &options).await {
        Ok(outcome) => {
            round_trip.stop();
            outcome
        }
        Err(e) => {
            log::error!("❌ Background removal failed: {}", e);
            return Err(e.into());
        }
    };

    log::info!("✅ Removal successful!");
    log::info!("🤖 Model used: {}", outcome.result.model_used);
    log::info!("⏱️  Server processing time: {:.2}s", outcome.result.processing_time_seconds);
    log::info!("📦 Result size: {} bytes", outcome.result.size_bytes);

    log::info!("⬇️  Downloading {}", outcome.result.download_url);
    match client.files().download(&outcome.result.download_url).await {
        Ok(bytes) => {
            fs::write(&outcome.result.filename, &bytes)?;
            log::info!("💾 Saved to: {}", outcome.result.filename);
        }
        Err(e) => log::error!("❌ Download failed: {}", e),
    }

    if outcome.variants.is_empty() {
        log::info!("No variants returned");
    } else {
        log::info!("🎨 Downloading {} variants...", outcome.variants.len());
        for variant in &outcome.variants {
            match client.files().download(&variant.download_url).await {
                Ok(bytes) => {
                    fs::write(&variant.filename, &bytes)?;
                    log::info!("💾 Variant saved to: {}", variant.filename);
                }
                Err(e) => log::error!("❌ Variant download failed: {}", e),
            }
        }
    }

    log::info!("🎉 All done!");
    Ok(())
}
