//! Theme Toggle server and web client entry point.
//!
//! With the `server` feature (default) this serves the server-rendered page;
//! the `web` feature builds the WASM client that launches the Dioxus app.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use theme_toggle::{api, config};
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "theme_toggle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Theme Toggle");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    let app = api::router(api::AppState::new(config.theme))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(all(feature = "web", not(feature = "server")))]
fn main() {
    dioxus::launch(theme_toggle::app::App);
}

#[cfg(not(any(feature = "server", feature = "web")))]
fn main() {
    eprintln!("theme-toggle was built without the `server` or `web` feature");
}
