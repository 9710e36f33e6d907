use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// Previously uploaded media to attach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "media_ids", deserialize_with = "crate::null_as_default")]
    pub ids: Vec<String>,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub tagged_user_ids: Vec<String>,
}

impl Media {
    /// Checks this record's own rule.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.tagged_user_ids.is_empty() && self.ids.is_empty() {
            return Err(ParameterError::MediaIdsRequired);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_users_need_media() {
        let media = Media {
            ids: vec![],
            tagged_user_ids: vec!["2244994945".to_string()],
        };

        assert_eq!(media.validate(), Err(ParameterError::MediaIdsRequired));
    }

    #[test]
    fn media_without_tags_is_fine() {
        let media = Media {
            ids: vec!["1455952740635586573".to_string()],
            tagged_user_ids: vec![],
        };

        assert_eq!(media.validate(), Ok(()));
        assert_eq!(Media::default().validate(), Ok(()));
    }
}
