use moviegraph_common_types::MovieId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No movie with the given ID exists (anymore).
    #[error("Movie not found")]
    MovieNotFound(MovieId),
}
