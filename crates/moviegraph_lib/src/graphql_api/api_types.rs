use async_graphql::{Object, ID};
use moviegraph_store::models;

/// A movie known to Moviegraph.
#[derive(Clone, derive_more::From)]
pub struct Movie {
    model: models::Movie,
}

#[Object]
impl Movie {
    /// Unique identifier of the movie, assigned on creation.
    async fn id(&self) -> ID {
        self.model.id.clone().into()
    }

    async fn name(&self) -> &str {
        &self.model.name
    }

    #[graphql(name = "director_name")]
    async fn director_name(&self) -> &str {
        &self.model.director_name
    }

    #[graphql(name = "production_house")]
    async fn production_house(&self) -> &str {
        &self.model.production_house
    }

    /// Release date, as free-form text.
    #[graphql(name = "release_date")]
    async fn release_date(&self) -> &str {
        &self.model.release_date
    }

    async fn rating(&self) -> i32 {
        self.model.rating
    }
}
