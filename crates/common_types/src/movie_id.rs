use std::convert::Infallible;
use std::str::FromStr;

use quickcheck::Arbitrary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The identifier of a movie record.
///
/// Identifiers handed out by the store are decimal renderings of a monotonic
/// counter, but any string coming from an API client is a valid (if possibly
/// unknown) [`MovieId`], so lookups never fail at parse time.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<u64> for MovieId {
    fn from(n: u64) -> Self {
        MovieId(n.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        MovieId(s)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId(s.to_string())
    }
}

impl From<async_graphql::ID> for MovieId {
    fn from(id: async_graphql::ID) -> Self {
        MovieId(id.0)
    }
}

impl FromStr for MovieId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MovieId(s.to_string()))
    }
}

impl PartialEq<str> for MovieId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MovieId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Arbitrary for MovieId {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(String::arbitrary(g))
    }
}
