use std::process::ExitCode;

use hero_images::{Config, HeroImageError, API_KEY_ENV};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn init_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_string());
    let env_filter = EnvFilter::new(log_level);
    let color = std::env::var("ANSI_OUTPUT").map_or(true, |v| v == "true");

    let builder = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_line_number(false)
        .with_file(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(color)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(builder).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(HeroImageError::MissingCredential(name)) => {
            eprintln!("❌ Error: {name} environment variable is not set");
            eprintln!("Please set your API key:");
            eprintln!("export {API_KEY_ENV}=\"your-api-key-here\"");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("❌ Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match hero_images::run(config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error generating images: {err}");
            ExitCode::FAILURE
        }
    }
}
