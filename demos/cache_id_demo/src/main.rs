use cache_id::{GeneratorConfig, IdGenerator, Token};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const WORKERS: usize = 4;
const TOKENS_PER_WORKER: usize = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Defaults to INFO; RUST_LOG=debug also shows generator construction
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Config as it would appear embedded in an application's settings file
    let config: GeneratorConfig = serde_json::from_str(r#"{ "hostname": null }"#)?;
    let generator = Arc::new(IdGenerator::with_config(config)?);
    tracing::info!(hostname = generator.hostname(), "generator built");

    let mut handles = Vec::with_capacity(WORKERS);
    for worker in 0..WORKERS {
        let generator = Arc::clone(&generator);
        handles.push(tokio::spawn(async move {
            (0..TOKENS_PER_WORKER)
                .map(|_| (worker, generator.generate()))
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        for (worker, token) in handle.await? {
            let parsed: Token = token.parse()?;
            tracing::info!(
                worker,
                counter = parsed.counter,
                random = parsed.random_signed(),
                "{}",
                token
            );
        }
    }

    let mut line = String::from("cache-entry:");
    cache_id::shared()?.generate_into(&mut line);
    tracing::info!("{}", line);

    Ok(())
}
