pub mod api_types;
mod mutation_root;
mod server;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema, SchemaBuilder};
use moviegraph_store::{Store, StoreError};

pub use self::mutation_root::MutationRoot;
pub use self::server::QueryRoot;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct ApiSchemaContext {
    pub store: Store,
}

impl ApiSchemaContext {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

pub fn api_schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

pub fn api_schema(ctx: ApiSchemaContext) -> ApiSchema {
    api_schema_builder().data(ctx).finish()
}

pub fn ctx_data<'a>(ctx: &'a Context) -> &'a ApiSchemaContext {
    ctx.data::<ApiSchemaContext>()
        .expect("Failed to get API context")
}

/// Converts a store error into a GraphQL error, tagged with a machine-readable
/// `code` extension.
fn api_error(err: StoreError) -> async_graphql::Error {
    let code = match &err {
        StoreError::MovieNotFound(_) => "NOT_FOUND",
    };
    (&err).extend_with(|_, ext| ext.set("code", code))
}
