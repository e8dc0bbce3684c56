//! Types shared between the movie store and the GraphQL API.

pub mod inputs;
mod movie_id;

pub use inputs::{MovieUpdate, NewMovie};
pub use movie_id::MovieId;
