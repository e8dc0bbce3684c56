use std::env;
use std::fs::File;
use std::io::*;

use moviegraph_lib::config::Config;
use schemars::schema_for;

/// Writes `schema.json`, describing the YAML configuration file: the GraphQL
/// API port and GraphiQL toggle, the Prometheus exporter port, and the shape
/// of each entry in `seedMovies`. Editors can use it to validate config files.
fn main() -> std::io::Result<()> {
    // Regenerate whenever the config definition changes.
    println!("cargo:rerun-if-changed=../moviegraph_lib/src/config.rs");
    println!("cargo:rerun-if-changed=../common_types/src/inputs.rs");

    let out_path = env::current_dir()?.join("schema.json");
    let mut f = File::create(&out_path)?;

    let schema = schema_for!(Config);
    f.write_all(serde_json::to_string_pretty(&schema)?.as_bytes())?;

    Ok(())
}
