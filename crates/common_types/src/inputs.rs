//! Structs that serve as inputs to movie store operations, coming either from
//! GraphQL mutation arguments or from the seed list in the configuration file.

use quickcheck::Arbitrary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// All the fields required to create a movie. The identifier is assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewMovie {
    pub name: String,
    pub director_name: String,
    pub production_house: String,
    /// Free-form, date-like text. It's not validated.
    pub release_date: String,
    /// Not range-checked.
    pub rating: i32,
}

/// A partial update to an existing movie.
///
/// `None` means "leave the field as it is". Any `Some` value is written,
/// including empty strings and a zero rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieUpdate {
    pub name: Option<String>,
    pub director_name: Option<String>,
    pub production_house: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<i32>,
}

impl MovieUpdate {
    /// Returns `true` if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Arbitrary for NewMovie {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            name: String::arbitrary(g),
            director_name: String::arbitrary(g),
            production_house: String::arbitrary(g),
            release_date: String::arbitrary(g),
            rating: i32::arbitrary(g),
        }
    }
}
