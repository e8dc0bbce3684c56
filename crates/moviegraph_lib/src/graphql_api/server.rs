use async_graphql::{Context, Object, ID};
use moviegraph_common_types::MovieId;

use super::{api_types, ctx_data};

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Fetches all movies, in the order they were created.
    async fn movies(&self, ctx: &Context<'_>) -> Vec<api_types::Movie> {
        let ctx_data = ctx_data(ctx);
        ctx_data
            .store
            .movies()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Fetches a single movie by ID. Returns `null` if there's no such movie,
    /// or if no ID was given at all.
    async fn movie(&self, ctx: &Context<'_>, id: Option<ID>) -> Option<api_types::Movie> {
        let id = MovieId::from(id?);
        let ctx_data = ctx_data(ctx);

        ctx_data.store.movie(&id).await.map(Into::into)
    }
}
