use async_graphql::{Request, Response, Variables};
use moviegraph_store::models::sample_movies;
use moviegraph_store::Store;

use crate::graphql_api::{api_schema, ApiSchema, ApiSchemaContext};

/// Builds an API schema around a store holding the two sample movies, and
/// returns both so tests can inspect the store directly.
pub fn seeded_schema() -> (ApiSchema, Store) {
    let store = Store::with_movies(sample_movies());
    let schema = api_schema(ApiSchemaContext::new(store.clone()));
    (schema, store)
}

/// Executes `query` against `schema` with the given JSON variables.
pub async fn execute(schema: &ApiSchema, query: &str, variables: serde_json::Value) -> Response {
    let request = Request::new(query).variables(Variables::from_json(variables));
    schema.execute(request).await
}

/// Executes `query` and returns its data as JSON, panicking on any GraphQL
/// error.
pub async fn execute_ok(
    schema: &ApiSchema,
    query: &str,
    variables: serde_json::Value,
) -> serde_json::Value {
    let response = execute(schema, query, variables).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response
        .data
        .into_json()
        .expect("GraphQL response data is not valid JSON")
}
