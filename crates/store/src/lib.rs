//! In-memory storage of movie records for the Moviegraph API.

mod error;
pub mod models;

use std::sync::Arc;

use moviegraph_common_types::{MovieId, MovieUpdate, NewMovie};
use tokio::sync::RwLock;
use tracing::{debug, info};

pub use self::error::StoreError;
use self::models::Movie;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Default)]
struct Inner {
    movies: Vec<Movie>,
    /// The last identifier handed out. Never decreases, so identifiers are
    /// never reused after deletions.
    last_id: u64,
}

impl Inner {
    fn create(&mut self, new_movie: NewMovie) -> Movie {
        self.last_id += 1;
        let movie = Movie::new(MovieId::from(self.last_id), new_movie);
        self.movies.push(movie.clone());
        movie
    }

    fn position(&self, id: &MovieId) -> Option<usize> {
        self.movies.iter().position(|movie| &movie.id == id)
    }
}

/// An abstraction over all movie storage operations. It uses [`Arc`]
/// internally, so it's cheaply cloneable and all clones share the same data.
///
/// Contents live for as long as the last clone does; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

impl Store {
    /// Creates an empty store. The first movie created in it gets ID `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already contains `seed`, in order, with IDs
    /// starting from `1`.
    pub fn with_movies(seed: impl IntoIterator<Item = NewMovie>) -> Self {
        let mut inner = Inner::default();
        for new_movie in seed {
            inner.create(new_movie);
        }
        info!(movies = inner.movies.len(), "Seeded movie store");

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Returns all movies, in insertion order.
    pub async fn movies(&self) -> Vec<Movie> {
        self.inner.read().await.movies.clone()
    }

    /// Returns the number of movies currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.movies.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Fetches the first movie with the given ID, if any.
    pub async fn movie(&self, id: &MovieId) -> Option<Movie> {
        self.inner
            .read()
            .await
            .movies
            .iter()
            .find(|movie| &movie.id == id)
            .cloned()
    }

    pub async fn create_movie(&self, new_movie: NewMovie) -> Movie {
        let movie = self.inner.write().await.create(new_movie);
        debug!(movie_id = movie.id.as_str(), "Created movie");
        movie
    }

    /// Overwrites the fields present in `update` and returns the movie as it
    /// is after the update.
    pub async fn update_movie(&self, id: &MovieId, update: MovieUpdate) -> StoreResult<Movie> {
        let mut inner = self.inner.write().await;
        let movie = inner
            .movies
            .iter_mut()
            .find(|movie| &movie.id == id)
            .ok_or_else(|| StoreError::MovieNotFound(id.clone()))?;

        if update.is_empty() {
            debug!(movie_id = id.as_str(), "Empty update, nothing to change");
        } else {
            movie.apply(update);
            debug!(movie_id = id.as_str(), "Updated movie");
        }

        Ok(movie.clone())
    }

    /// Removes the movie with the given ID and returns it.
    pub async fn delete_movie(&self, id: &MovieId) -> StoreResult<Movie> {
        let mut inner = self.inner.write().await;
        let index = inner
            .position(id)
            .ok_or_else(|| StoreError::MovieNotFound(id.clone()))?;

        let movie = inner.movies.remove(index);
        debug!(movie_id = id.as_str(), "Deleted movie");

        Ok(movie)
    }
}
