use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct CliOptions {
    /// Path to the YAML configuration file. Built-in defaults are used when
    /// omitted.
    #[clap(long, env = "MOVIEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,
    /// The port on which the GraphQL API server should listen. Overrides
    /// `graphql.port` from the configuration file.
    #[clap(long)]
    pub port: Option<u16>,
}
