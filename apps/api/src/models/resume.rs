use serde::Deserialize;
use validator::Validate;

use super::null_as_empty;

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
    pub desc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub desc: String,
}

/// Resume form input. Six required fields; everything else may be omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    #[validate(length(min = 1, message = "fullName must not be empty"))]
    pub full_name: String,

    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "degree must not be empty"))]
    pub degree: String,

    #[validate(length(min = 1, message = "field must not be empty"))]
    pub field: String,

    #[validate(length(min = 1, message = "university must not be empty"))]
    pub university: String,

    #[validate(length(min = 1, message = "skills must not be empty"))]
    pub skills: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_year: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_year: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tools: String,

    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub extracurriculars: Vec<String>,
}
