//! Prompt builders for the chat and analyzer completions.
//!
//! Both prompts embed facts from the knowledge base so the model answers
//! about the site owner instead of hallucinating a generic persona.

use crate::knowledge::{Profile, SkillCatalog};

/// Sampling options for the conversational chat endpoint.
pub const CHAT_TEMPERATURE: f32 = 0.7;
pub const CHAT_NUM_PREDICT: u32 = 150;

/// Sampling options for the resume analysis endpoint. Lower temperature:
/// the output feeds a percentage extractor.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;
pub const ANALYSIS_NUM_PREDICT: u32 = 200;

/// Job descriptions are truncated to this many bytes before prompting.
const ANALYSIS_JD_LIMIT: usize = 500;

/// System prompt for the chat assistant, with the profile embedded as JSON.
pub fn chat_system_prompt(profile: &Profile) -> String {
    let facts = serde_json::to_string_pretty(profile).unwrap_or_default();
    format!(
        "You are a helpful portfolio assistant for {name}. \
         Use the following information to answer questions about {name}:\n\n\
         {facts}\n\n\
         Be friendly, professional, and concise. If asked about something not \
         in the portfolio, politely redirect to the available information. \
         Keep responses under 100 words.",
        name = profile.name,
        facts = facts
    )
}

/// User prompt asking the model to score a job description against the
/// owner's resume.
pub fn analysis_prompt(profile: &Profile, catalog: &SkillCatalog, job_description: &str) -> String {
    let jd = truncate_on_char_boundary(job_description, ANALYSIS_JD_LIMIT);
    let skills = catalog
        .all_skills()
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Analyze this job description against {name}'s resume:\n\n\
         Job: {jd}\n\n\
         {name}'s skills: {skills}\n\n\
         Experience: {experience}\n\n\
         Provide: 1) Match percentage (0-100%), 2) Why {name} fits, \
         3) Improvement suggestions.",
        name = profile.name,
        jd = jd,
        skills = skills,
        experience = profile.experience.join(". ")
    )
}

/// Truncates without splitting a UTF-8 code point.
fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_system_prompt_embeds_profile_facts() {
        let prompt = chat_system_prompt(&Profile::owner());
        assert!(prompt.contains("Vivek Patil"));
        assert!(prompt.contains("Keep responses under 100 words"));
        assert!(prompt.contains("React.js"));
    }

    #[test]
    fn test_analysis_prompt_truncates_long_jd() {
        let profile = Profile::owner();
        let catalog = SkillCatalog::owner();
        let jd = "x".repeat(2000);
        let prompt = analysis_prompt(&profile, &catalog, &jd);
        assert!(!prompt.contains(&"x".repeat(501)));
        assert!(prompt.contains(&"x".repeat(500)));
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // 'é' is two bytes; cutting at 1 must back off to 0.
        assert_eq!(truncate_on_char_boundary("é", 1), "");
        assert_eq!(truncate_on_char_boundary("abc", 10), "abc");
    }
}
