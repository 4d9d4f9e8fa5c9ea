mod bench;
mod demo;
mod env;

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_level).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = env::load_config();
    tracing::info!(
        "loaded configuration: {} ignored words, {} command words, threshold {}",
        config.ignored_words.len(),
        config.command_words.len(),
        config.confidence_threshold
    );

    match std::env::args().nth(1).as_deref() {
        None | Some("demo") => demo::run(config).await,
        Some("bench") => bench::run(config, 10_000).await,
        Some(other) => {
            eprintln!("unknown command '{}' (expected 'demo' or 'bench')", other);
            std::process::exit(2)
        }
    }
}
