use std::net::Ipv4Addr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::IntoResponse;
use axum::routing::{get, post_service};
use axum::Router;
use clap::Parser;
use moviegraph_lib::config::Config;
use moviegraph_lib::graphql_api::{self, ApiSchema, ApiSchemaContext};
use moviegraph_lib::{metrics, CliOptions, PrometheusExporter, MOVIEGRAPH_VERSION};
use moviegraph_store::Store;
use prometheus_exporter::prometheus;
use tokio::net::TcpListener;
use tracing::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!(version = MOVIEGRAPH_VERSION, "Parse options");
    let cli_options = CliOptions::parse();

    let mut config = match &cli_options.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration file");
            Config::read(path)?
        }
        None => {
            info!("No configuration file given, using defaults");
            Config::default()
        }
    };
    if let Some(port) = cli_options.port {
        config.graphql.port = port;
    }

    let store = Store::with_movies(config.seed_movies.clone());
    metrics().movies_stored.set(store.len().await as i64);

    // Keep the exporter alive for as long as the server runs.
    let _exporter = if config.prometheus_port != 0 {
        let exporter = PrometheusExporter::start(
            config.prometheus_port,
            prometheus::default_registry().clone(),
        )?;
        info!(port = exporter.port(), "Prometheus exporter started");
        Some(exporter)
    } else {
        None
    };

    let api_schema = graphql_api::api_schema(ApiSchemaContext::new(store));
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.graphql.port)).await?;
    info!(port = config.graphql.port, "GraphQL API server listening");

    // Listen to requests forever.
    axum::serve(listener, axum_server(api_schema, config.graphql.graphiql)).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,moviegraph=debug,moviegraph_lib=debug,moviegraph_store=debug")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn axum_server(api_schema: ApiSchema, graphiql: bool) -> Router {
    info!(graphiql, "Building HTTP router");

    let graphql_route = if graphiql {
        get(graphiql_route).post_service(GraphQL::new(api_schema))
    } else {
        post_service(GraphQL::new(api_schema))
    };

    Router::new()
        .route("/", get(|| async { "Ready to roll!" }))
        .route("/graphql", graphql_route)
}

async fn graphiql_route() -> impl IntoResponse {
    axum::response::Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
