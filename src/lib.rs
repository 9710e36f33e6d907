pub mod geo;
pub mod media;
pub mod poll;
pub mod reply;
pub mod tweet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use thiserror::Error;

/// Collection endpoint for creating tweets.
pub const TWEETS_PATH: &str = "/2/tweets";

/// Endpoint addressing a single tweet.
pub fn tweet_path(id: &str) -> String {
    format!("{TWEETS_PATH}/{id}")
}

/// Reads `null` as the field's default, the way an absent key is read.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Umbrella category shared by every [`ParameterError`].
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";

/// A request field combination the remote API would reject.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("media ids are required if tagged user ids are present")]
    MediaIdsRequired,

    #[error("poll duration minutes are required with options")]
    PollDurationRequired,

    #[error("in reply to tweet id must be present if excluded reply user ids are present")]
    InReplyToRequired,

    #[error("text is required if no media ids are present")]
    TextRequired,
}

impl ParameterError {
    /// Stable snake_case tag of the cause.
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterError::MediaIdsRequired => "media_ids_required",
            ParameterError::PollDurationRequired => "poll_duration_required",
            ParameterError::InReplyToRequired => "in_reply_to_required",
            ParameterError::TextRequired => "text_required",
        }
    }

    /// Category shared by every cause, [`INVALID_PARAMETER`].
    pub fn category(&self) -> &'static str {
        INVALID_PARAMETER
    }
}

/// Error body exchanged over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: '{}'", self.status, self.message)
    }
}

impl std::error::Error for Error {}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Error {
            status: err.category().to_string(),
            message: format!("create tweet error: {err}"),
            details: Some(json!({ "kind": err.kind() })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweet_path_appends_id() {
        assert_eq!(tweet_path("1445880548472328192"), "/2/tweets/1445880548472328192");
    }

    #[test]
    fn parameter_error_becomes_error_body() {
        let body = Error::from(ParameterError::PollDurationRequired);

        assert_eq!(body.status, "INVALID_PARAMETER");
        assert_eq!(
            body.message,
            "create tweet error: poll duration minutes are required with options"
        );
        assert_eq!(body.details, Some(json!({ "kind": "poll_duration_required" })));
    }

    #[test]
    fn error_body_omits_missing_details() {
        let body = Error {
            status: "NOT_FOUND".to_string(),
            message: "no such tweet".to_string(),
            details: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "NOT_FOUND", "message": "no such tweet" })
        );
        assert_eq!(body.to_string(), "\"NOT_FOUND\": 'no such tweet'");
    }

    #[test]
    fn every_cause_shares_the_category() {
        for err in [
            ParameterError::MediaIdsRequired,
            ParameterError::PollDurationRequired,
            ParameterError::InReplyToRequired,
            ParameterError::TextRequired,
        ] {
            assert_eq!(err.category(), INVALID_PARAMETER);
        }
    }
}
