//! Moviegraph configuration parsing.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use moviegraph_common_types::NewMovie;
use moviegraph_store::models::sample_movies;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlConfig {
    /// The port on which the GraphQL API server should listen.
    #[serde(default = "Config::default_graphql_api_port")]
    pub port: u16,
    /// Whether to serve the GraphiQL IDE on `GET /graphql`.
    #[serde(default = "Config::default_graphiql")]
    pub graphiql: bool,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            port: Config::default_graphql_api_port(),
            graphiql: Config::default_graphiql(),
        }
    }
}

/// A [`serde`]-compatible representation of Moviegraph's YAML configuration
/// file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// GraphQL API configuration.
    #[serde(default)]
    pub graphql: GraphQlConfig,
    /// The port on which the Prometheus exporter should listen. Set it to 0
    /// to disable the exporter entirely.
    #[serde(default = "Config::default_prometheus_port")]
    pub prometheus_port: u16,
    /// Movies the store is populated with at startup, in order. IDs are
    /// assigned starting from 1.
    #[serde(default = "sample_movies")]
    pub seed_movies: Vec<NewMovie>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql: GraphQlConfig::default(),
            prometheus_port: Self::default_prometheus_port(),
            seed_movies: sample_movies(),
        }
    }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("can't open config file {}", path.display()))?;
        serde_yaml::from_reader(file).context("invalid config file")
    }

    fn default_prometheus_port() -> u16 {
        9184
    }

    fn default_graphql_api_port() -> u16 {
        3030
    }

    fn default_graphiql() -> bool {
        true
    }
}
