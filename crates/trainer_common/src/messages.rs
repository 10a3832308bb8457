use serde::{Deserialize, Serialize};

/// A trainer record as the API stores it.
///
/// There is no id field. Two records are the same record when all three
/// fields match, which is how the server resolves update and delete targets.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Trainer {
    pub name: String,
    pub age: i64,
    pub city: String,
}

impl Trainer {
    pub fn new(name: impl Into<String>, age: i64, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
        }
    }
}

/// Body of a `PUT` to the trainer collection.
///
/// `original` is the record as last listed and selects what to replace;
/// `replacement` is what the row holds now.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdateRequest {
    pub original: Trainer,
    pub replacement: Trainer,
}
