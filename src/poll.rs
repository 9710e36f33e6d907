use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// Poll attached to the tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poll {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub duration_minutes: i32,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub options: Vec<String>,
}

impl Poll {
    /// Checks this record's own rule.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.options.is_empty() && self.duration_minutes <= 0 {
            return Err(ParameterError::PollDurationRequired);
        }

        Ok(())
    }
}
