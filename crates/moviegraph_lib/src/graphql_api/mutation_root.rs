use async_graphql::{Context, Object, Result, ID};
use moviegraph_common_types::{MovieId, MovieUpdate, NewMovie};
use moviegraph_store::{Store, StoreResult};
use tracing::info;

use super::{api_error, api_types, ctx_data};
use crate::metrics;

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Creates a new movie. All fields are required; the ID is assigned by
    /// the server.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "director_name")] director_name: String,
        #[graphql(name = "production_house")] production_house: String,
        #[graphql(name = "release_date")] release_date: String,
        rating: i32,
    ) -> Result<api_types::Movie> {
        let store = &ctx_data(ctx).store;

        let movie = store
            .create_movie(NewMovie {
                name,
                director_name,
                production_house,
                release_date,
                rating,
            })
            .await;
        info!(movie_id = %movie.id, "Added movie");

        observe(store, "addMovie", &Ok(())).await;
        Ok(movie.into())
    }

    /// Overwrites the given fields of an existing movie. Omitted (or `null`)
    /// fields are left untouched, while empty strings and zero ratings are
    /// written like any other value.
    #[allow(clippy::too_many_arguments)]
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        #[graphql(name = "director_name")] director_name: Option<String>,
        #[graphql(name = "production_house")] production_house: Option<String>,
        #[graphql(name = "release_date")] release_date: Option<String>,
        rating: Option<i32>,
    ) -> Result<api_types::Movie> {
        let store = &ctx_data(ctx).store;
        let id = MovieId::from(id);

        let update = MovieUpdate {
            name,
            director_name,
            production_house,
            release_date,
            rating,
        };
        let res = store.update_movie(&id, update).await;

        observe(store, "updateMovie", &res).await;
        Ok(res.map_err(api_error)?.into())
    }

    /// Deletes a movie and returns it as it was right before deletion.
    async fn delete_movie(&self, ctx: &Context<'_>, id: ID) -> Result<api_types::Movie> {
        let store = &ctx_data(ctx).store;
        let id = MovieId::from(id);

        let res = store.delete_movie(&id).await;
        if res.is_ok() {
            info!(movie_id = %id, "Deleted movie");
        }

        observe(store, "deleteMovie", &res).await;
        Ok(res.map_err(api_error)?.into())
    }
}

async fn observe<T>(store: &Store, operation: &str, res: &StoreResult<T>) {
    let metrics = metrics();
    metrics.observe_mutation(operation, res.is_ok());
    metrics.movies_stored.set(store.len().await as i64);
}
