use cardview::config::Config;
use cardview::ui::{make_config, App};
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!("Starting cardview");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(config)
        .launch(App);
}
