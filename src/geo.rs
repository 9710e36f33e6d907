use serde::{Deserialize, Serialize};

/// Place the tweet is tagged with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub place_id: String,
}
