use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// Reply target and the users left out of the conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reply {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub exclude_reply_user_ids: Vec<String>,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub in_reply_to_tweet_id: String,
}

impl Reply {
    /// Checks this record's own rule.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.exclude_reply_user_ids.is_empty() && self.in_reply_to_tweet_id.is_empty() {
            return Err(ParameterError::InReplyToRequired);
        }

        Ok(())
    }
}
