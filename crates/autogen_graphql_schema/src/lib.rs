//! This crate only exists to run its build script, which writes the Moviegraph GraphQL API schema to `schema.graphql`.
