use serde::Deserialize;
use validator::Validate;

use super::null_as_empty;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortfolioRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "bio must not be empty"))]
    pub bio: String,

    #[validate(length(min = 1, message = "skills must not be empty"))]
    pub skills: String,

    /// Free-text project descriptions, rendered one per line.
    #[serde(default)]
    pub projects: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub github: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub linkedin: String,
}
