// System instructions sent alongside every user prompt.
// One per document kind; the user prompts themselves live in generation::prompts.

pub const RESUME_SYSTEM: &str = "You generate professional resumes.";

pub const COVER_LETTER_SYSTEM: &str = "You generate professional cover letters.";

pub const PORTFOLIO_SYSTEM: &str = "You generate professional portfolios.";
