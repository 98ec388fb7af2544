pub mod cover_letter;
pub mod portfolio;
pub mod resume;

pub use cover_letter::CoverLetterRequest;
pub use portfolio::PortfolioRequest;
pub use resume::{Experience, Project, ResumeRequest};

use serde::{Deserialize, Deserializer};

/// Optional text fields accept absent, `null` or a string; the first two become "".
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
