use anyhow::Context;
use elite_estates::{App, Config, MemoryStore, PropertyStore, SupabaseGateway};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Elite Estates");
    info!("==========================================");

    let store: Arc<dyn PropertyStore> = match &config.backend {
        Some(backend) => {
            info!("Connecting to {}", backend.url);
            Arc::new(
                SupabaseGateway::new(backend, config.http_timeout)
                    .context("Failed to create HTTP client")?,
            )
        }
        None => {
            warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set");
            Arc::new(MemoryStore::demo())
        }
    };

    let mut app = App::start(store).await;

    let stdin = BufReader::new(tokio::io::stdin());
    elite_estates::shell::run(&mut app, stdin, tokio::io::stdout()).await?;

    Ok(())
}
