use moviegraph_common_types::MovieId;
use moviegraph_lib::graphql_api::{api_schema, ApiSchemaContext};
use moviegraph_lib::test_utils::{execute, execute_ok, seeded_schema};
use moviegraph_store::Store;
use quickcheck_macros::quickcheck;
use serde_json::json;

const MOVIE_FIELDS: &str = "id name director_name production_house release_date rating";

fn add_movie_mutation() -> String {
    format!(
        r#"mutation AddMovie($name: String!, $director: String!, $house: String!, $date: String!, $rating: Int!) {{
            addMovie(name: $name, director_name: $director, production_house: $house, release_date: $date, rating: $rating) {{ {MOVIE_FIELDS} }}
        }}"#
    )
}

fn x_movie_vars() -> serde_json::Value {
    json!({
        "name": "X",
        "director": "D",
        "house": "H",
        "date": "2020-01-01",
        "rating": 5,
    })
}

#[tokio::test]
async fn list_seeded_movies() {
    let (schema, _store) = seeded_schema();

    let data = execute_ok(&schema, &format!("{{ movies {{ {MOVIE_FIELDS} }} }}"), json!({})).await;

    assert_eq!(
        data,
        json!({
            "movies": [
                {
                    "id": "1",
                    "name": "Movie 1",
                    "director_name": "Director 1",
                    "production_house": "House 1",
                    "release_date": "2023-01-01",
                    "rating": 8,
                },
                {
                    "id": "2",
                    "name": "Movie 2",
                    "director_name": "Director 2",
                    "production_house": "House 2",
                    "release_date": "2024-02-02",
                    "rating": 9,
                },
            ]
        })
    );
}

#[tokio::test]
async fn add_get_delete_scenario() {
    let (schema, _store) = seeded_schema();

    //// Given
    let data = execute_ok(&schema, &add_movie_mutation(), x_movie_vars()).await;
    assert_eq!(
        data["addMovie"],
        json!({
            "id": "3",
            "name": "X",
            "director_name": "D",
            "production_house": "H",
            "release_date": "2020-01-01",
            "rating": 5,
        })
    );

    //// When
    let data = execute_ok(&schema, r#"{ movie(id: "3") { id name } }"#, json!({})).await;
    assert_eq!(data["movie"], json!({ "id": "3", "name": "X" }));

    let data = execute_ok(
        &schema,
        r#"mutation { deleteMovie(id: "3") { id name } }"#,
        json!({}),
    )
    .await;
    assert_eq!(data["deleteMovie"], json!({ "id": "3", "name": "X" }));

    //// Then
    let data = execute_ok(&schema, r#"{ movie(id: "3") { id } }"#, json!({})).await;
    assert_eq!(data["movie"], json!(null));
}

#[tokio::test]
async fn movie_without_id_is_null() {
    let (schema, _store) = seeded_schema();

    let data = execute_ok(&schema, "{ movie { id } }", json!({})).await;
    assert_eq!(data["movie"], json!(null));
}

#[tokio::test]
async fn update_only_given_fields() {
    let (schema, store) = seeded_schema();

    let data = execute_ok(
        &schema,
        &format!(r#"mutation {{ updateMovie(id: "1", production_house: "New House", rating: 0) {{ {MOVIE_FIELDS} }} }}"#),
        json!({}),
    )
    .await;

    assert_eq!(
        data["updateMovie"],
        json!({
            "id": "1",
            "name": "Movie 1",
            "director_name": "Director 1",
            "production_house": "New House",
            "release_date": "2023-01-01",
            "rating": 0,
        })
    );

    let stored = store.movie(&MovieId::from(1)).await.unwrap();
    assert_eq!(stored.rating, 0);
    assert_eq!(stored.production_house, "New House");
}

#[tokio::test]
async fn update_with_empty_string() {
    let (schema, store) = seeded_schema();

    execute_ok(
        &schema,
        r#"mutation { updateMovie(id: "2", name: "") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(store.movie(&MovieId::from(2)).await.unwrap().name, "");
}

#[tokio::test]
async fn update_with_null_leaves_field_untouched() {
    let (schema, store) = seeded_schema();

    execute_ok(
        &schema,
        r#"mutation { updateMovie(id: "2", name: null, rating: 1) { id } }"#,
        json!({}),
    )
    .await;

    let stored = store.movie(&MovieId::from(2)).await.unwrap();
    assert_eq!(stored.name, "Movie 2");
    assert_eq!(stored.rating, 1);
}

#[tokio::test]
async fn update_unknown_movie_is_not_found() {
    let (schema, _store) = seeded_schema();

    let response = execute(
        &schema,
        r#"mutation { updateMovie(id: "99", name: "Y") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "Movie not found");
    assert_eq!(
        error.extensions.as_ref().and_then(|ext| ext.get("code")),
        Some(&async_graphql::Value::from("NOT_FOUND"))
    );
}

#[tokio::test]
async fn delete_unknown_movie_is_not_found() {
    let (schema, store) = seeded_schema();

    let response = execute(
        &schema,
        r#"mutation { deleteMovie(id: "3") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Movie not found");
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn delete_excludes_movie_from_listing() {
    let (schema, _store) = seeded_schema();

    execute_ok(&schema, r#"mutation { deleteMovie(id: "1") { id } }"#, json!({})).await;
    let data = execute_ok(&schema, "{ movies { id } }", json!({})).await;

    assert_eq!(data, json!({ "movies": [{ "id": "2" }] }));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let (schema, _store) = seeded_schema();

    execute_ok(&schema, r#"mutation { deleteMovie(id: "1") { id } }"#, json!({})).await;
    let data = execute_ok(&schema, &add_movie_mutation(), x_movie_vars()).await;

    // With length-based numbering this would collide with movie "2".
    assert_eq!(data["addMovie"]["id"], json!("3"));
}

#[tokio::test]
async fn add_movie_requires_all_fields() {
    let (schema, store) = seeded_schema();

    let response = execute(
        &schema,
        r#"mutation { addMovie(name: "X", director_name: "D", production_house: "H", release_date: "2020-01-01") { id } }"#,
        json!({}),
    )
    .await;

    assert!(!response.errors.is_empty());
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn sdl_uses_snake_case_movie_fields() {
    let (schema, _store) = seeded_schema();
    let sdl = schema.sdl();

    assert!(sdl.contains("type RootQueryType"));
    assert!(sdl.contains("type Mutation"));
    assert!(sdl.contains("director_name: String!"));
    assert!(sdl.contains("deleteMovie(id: ID!): Movie!"));
}

#[quickcheck]
fn list_after_n_adds_returns_n(n: u8) -> bool {
    let n = n % 32;
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(async {
            let schema = api_schema(ApiSchemaContext::new(Store::new()));
            for _ in 0..n {
                execute_ok(&schema, &add_movie_mutation(), x_movie_vars()).await;
            }

            let data = execute_ok(&schema, "{ movies { id } }", json!({})).await;
            let ids: Vec<String> = data["movies"]
                .as_array()
                .unwrap()
                .iter()
                .map(|m| m["id"].as_str().unwrap().to_string())
                .collect();
            let expected: Vec<String> = (1..=n as u64).map(|i| i.to_string()).collect();

            ids == expected
        })
}
