//! This crate only exists to run its build script, which writes the JSON Schema of the Moviegraph configuration file to `schema.json`.
