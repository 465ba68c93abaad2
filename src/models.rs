//! Movie row and request bodies.

use serde::{Deserialize, Serialize};

/// A persisted row of the `movies` table.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub genre: String,
    pub rating: f64,
    pub explicit: bool,
}

/// POST body. Fields stay optional so that a missing one reaches storage and
/// is rejected by its NOT NULL constraint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMovie {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub explicit: Option<bool>,
}

/// PUT body: only the fields present are written.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieChanges {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub explicit: Option<bool>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.genre.is_none() && self.rating.is_none() && self.explicit.is_none()
    }
}
