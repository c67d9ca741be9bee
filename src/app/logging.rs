use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let _ = match log_format().as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
}

fn env_filter() -> EnvFilter {
    let override_level = std::env::var("FINBOARD_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| std::env::var("RUST_LOG").ok());

    match override_level {
        Some(value) => EnvFilter::new(value),
        None => EnvFilter::new("info"),
    }
}

fn log_format() -> String {
    std::env::var("FINBOARD_LOG_FORMAT")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "plain".to_string())
}
