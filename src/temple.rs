//! Temple records as stored by the directory.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::Waypoint;

/// A temple listing.
///
/// Only the identity and location are read by the planner; every other
/// field of the stored document is kept in `details` and passes through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temple {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Temple {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            details: Map::new(),
        }
    }
}

impl Waypoint for Temple {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
