use moviegraph_common_types::NewMovie;
use moviegraph_store::models::sample_movies;
use moviegraph_store::Store;

/// A [`Store`] holding the two sample movies, with IDs `1` and `2`.
pub fn seeded_store() -> Store {
    Store::with_movies(sample_movies())
}

pub fn new_movie(name: &str) -> NewMovie {
    NewMovie {
        name: name.to_string(),
        director_name: "D".to_string(),
        production_house: "H".to_string(),
        release_date: "2020-01-01".to_string(),
        rating: 5,
    }
}
