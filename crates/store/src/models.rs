use moviegraph_common_types::{MovieId, MovieUpdate, NewMovie};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub director_name: String,
    pub production_house: String,
    pub release_date: String,
    pub rating: i32,
}

impl Movie {
    pub fn new(id: MovieId, new_movie: NewMovie) -> Self {
        let NewMovie {
            name,
            director_name,
            production_house,
            release_date,
            rating,
        } = new_movie;

        Self {
            id,
            name,
            director_name,
            production_house,
            release_date,
            rating,
        }
    }

    /// Overwrites every field that is present in `update`, and nothing else.
    pub fn apply(&mut self, update: MovieUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(director_name) = update.director_name {
            self.director_name = director_name;
        }
        if let Some(production_house) = update.production_house {
            self.production_house = production_house;
        }
        if let Some(release_date) = update.release_date {
            self.release_date = release_date;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
    }
}

/// The two movies a fresh Moviegraph instance starts with, unless configured
/// otherwise.
pub fn sample_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            name: "Movie 1".to_string(),
            director_name: "Director 1".to_string(),
            production_house: "House 1".to_string(),
            release_date: "2023-01-01".to_string(),
            rating: 8,
        },
        NewMovie {
            name: "Movie 2".to_string(),
            director_name: "Director 2".to_string(),
            production_house: "House 2".to_string(),
            release_date: "2024-02-02".to_string(),
            rating: 9,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie::new(MovieId::from(1), sample_movies().remove(0))
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut m = movie();
        m.apply(MovieUpdate::default());
        assert_eq!(m, movie());
    }

    #[test]
    fn falsy_values_are_applied() {
        let mut m = movie();
        m.apply(MovieUpdate {
            name: Some(String::new()),
            rating: Some(0),
            ..Default::default()
        });

        assert_eq!(m.name, "");
        assert_eq!(m.rating, 0);
        assert_eq!(m.director_name, "Director 1");
    }
}
