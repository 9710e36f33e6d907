use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{geo::Geo, media::Media, poll::Poll, reply::Reply, ParameterError};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Body of `POST /2/tweets`.
///
/// The optional strings and `for_super_followers_only` are left out of the
/// serialized body when empty; `reply_settings` and the nested records are
/// always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTweetRequest {
    #[serde(skip_serializing_if = "is_blank")]
    pub direct_message_deep_link: Option<String>,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "crate::null_as_default")]
    pub for_super_followers_only: bool,
    #[serde(skip_serializing_if = "is_blank")]
    pub quote_tweet_id: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub text: Option<String>,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub reply_settings: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub geo: Geo,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub media: Media,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub poll: Poll,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub reply: Reply,
}

impl CreateTweetRequest {
    /// Text-only tweet.
    pub fn new(text: impl Into<String>) -> Self {
        CreateTweetRequest {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Replaces the attached media ids.
    pub fn with_media_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the poll.
    pub fn with_poll<I, S>(mut self, duration_minutes: i32, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poll = Poll {
            duration_minutes,
            options: options.into_iter().map(Into::into).collect(),
        };
        self
    }

    /// Sets the tweet being replied to.
    pub fn in_reply_to(mut self, tweet_id: impl Into<String>) -> Self {
        self.reply.in_reply_to_tweet_id = tweet_id.into();
        self
    }

    /// Sets the quoted tweet.
    pub fn quoting(mut self, tweet_id: impl Into<String>) -> Self {
        self.quote_tweet_id = Some(tweet_id.into());
        self
    }

    /// Text to send, or `""` when none was set.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Checks the cross-field rules in order and reports the first one broken.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.check().map_err(|err| {
            debug!(kind = err.kind(), "rejected create tweet request");
            err
        })
    }

    fn check(&self) -> Result<(), ParameterError> {
        self.media.validate()?;
        self.poll.validate()?;
        self.reply.validate()?;

        if self.media.ids.is_empty() && is_blank(&self.text) {
            return Err(ParameterError::TextRequired);
        }

        Ok(())
    }
}

/// Tweet created by `POST /2/tweets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTweetData {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub text: String,
}

/// Response to `POST /2/tweets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTweetResponse {
    #[serde(rename = "data", default)]
    pub tweet: Option<CreateTweetData>,
}

/// Outcome of `DELETE /2/tweets/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteTweetData {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub deleted: bool,
}

/// Response to `DELETE /2/tweets/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTweetResponse {
    #[serde(rename = "data", default)]
    pub tweet: Option<DeleteTweetData>,
}
