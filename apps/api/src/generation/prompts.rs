//! Prompt composers for the three document kinds.
//!
//! Each composer is a pure function of its request: same input, same bytes out.
//! Field values are inserted with `format!`, never by template substitution,
//! so user text containing braces or placeholder names is passed through untouched.

use crate::models::{CoverLetterRequest, PortfolioRequest, ResumeRequest};

/// Separates labeled sections in every prompt.
const SECTION_RULE: &str = "====================";

const RESUME_INSTRUCTIONS: &str = "You are an expert professional resume writer.

Create a clean, ATS-friendly, one-page resume.
Do NOT add fake information.
Use bullet points and clear headings.";

const COVER_LETTER_INSTRUCTIONS: &str = "You are an expert professional cover letter writer.

Write a concise, ATS-friendly cover letter.
Do NOT invent experience.
Keep it formal and professional.";

const PORTFOLIO_INSTRUCTIONS: &str = "You are an expert professional portfolio writer.

Create a clean, ATS-friendly portfolio document.";

pub fn resume_prompt(r: &ResumeRequest) -> String {
    let mut prompt = format!(
        "{RESUME_INSTRUCTIONS}

{SECTION_RULE}
Personal Info
Name: {}
Email: {}
Phone: {}
Location: {}
LinkedIn: {}
GitHub: {}

{SECTION_RULE}
Education
Degree: {}
Field: {}
University: {}
Years: {} - {}

{SECTION_RULE}
Skills
{}
Tools: {}
",
        r.full_name,
        r.email,
        r.phone,
        r.location,
        r.linkedin,
        r.github,
        r.degree,
        r.field,
        r.university,
        r.start_year,
        r.end_year,
        r.skills,
        r.tools,
    );

    push_list(
        &mut prompt,
        "PROJECTS",
        r.projects
            .iter()
            .map(|p| format!("{} ({}): {}", p.title, p.tech, p.desc)),
    );
    push_list(
        &mut prompt,
        "EXPERIENCE",
        r.experience
            .iter()
            .map(|e| format!("{} at {} ({}): {}", e.role, e.company, e.duration, e.desc)),
    );
    push_list(&mut prompt, "CERTIFICATIONS", r.certifications.iter().cloned());
    push_list(
        &mut prompt,
        "EXTRACURRICULAR ACTIVITIES",
        r.extracurriculars.iter().cloned(),
    );

    prompt
}

pub fn cover_letter_prompt(r: &CoverLetterRequest) -> String {
    format!(
        "{COVER_LETTER_INSTRUCTIONS}

{SECTION_RULE}
JOB TITLE
{}

{SECTION_RULE}
COMPANY
{}

{SECTION_RULE}
JOB DESCRIPTION
{}
",
        r.job_title, r.company_name, r.job_description,
    )
}

pub fn portfolio_prompt(r: &PortfolioRequest) -> String {
    // The PROJECTS section is always emitted, empty or not.
    let projects: String = r.projects.iter().map(|p| format!("- {p}\n")).collect();

    format!(
        "{PORTFOLIO_INSTRUCTIONS}

{SECTION_RULE}
NAME
{}

{SECTION_RULE}
BIO
{}

{SECTION_RULE}
SKILLS
{}

{SECTION_RULE}
PROJECTS
{}

{SECTION_RULE}
LINKS
GitHub: {}
LinkedIn: {}
",
        r.name, r.bio, r.skills, projects, r.github, r.linkedin,
    )
}

/// Appends `\n{heading}:\n- item\n...` unless `items` is empty.
fn push_list<I>(prompt: &mut String, heading: &str, items: I)
where
    I: IntoIterator<Item = String>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return;
    }

    prompt.push('\n');
    prompt.push_str(heading);
    prompt.push_str(":\n");
    for item in items {
        prompt.push_str("- ");
        prompt.push_str(&item);
        prompt.push('\n');
    }
}
