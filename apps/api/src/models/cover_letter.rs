use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    #[validate(length(min = 1, message = "jobTitle must not be empty"))]
    pub job_title: String,

    #[validate(length(min = 1, message = "companyName must not be empty"))]
    pub company_name: String,

    #[validate(length(min = 1, message = "jobDescription must not be empty"))]
    pub job_description: String,
}
