mod handlers;

use crate::prelude::{eprintln, *};
use crate::upstream::CountriesClient;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "COUNTRIES_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "COUNTRIES_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

/// Read-only state shared by every request
#[derive(Debug)]
pub struct AppState {
    pub client: CountriesClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/countries", get(handlers::list_countries))
        .route("/api/countries/search", get(handlers::search_countries))
        .route(
            "/api/countries/populationLessThanMillion",
            get(handlers::population_less_than_million),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let client = CountriesClient::from_global(&global)?;
    let state = Arc::new(AppState { client });

    let addr = f!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{} (upstream {})", addr, global.api_url);

    if global.verbose {
        eprintln!("Countries API listening on http://{}", addr);
        eprintln!("List endpoint: http://{}/api/countries", addr);
        eprintln!("Search endpoint: http://{}/api/countries/search?name=", addr);
        eprintln!(
            "Population endpoint: http://{}/api/countries/populationLessThanMillion?value=",
            addr
        );
    }

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
