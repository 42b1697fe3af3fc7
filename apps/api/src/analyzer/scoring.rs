//! Resume match scorer — the local fallback behind the resume analyzer.
//!
//! Weighted substring containment of catalog skills in the job description,
//! capped at 100, plus a banded narrative built from the owner's profile.

use crate::knowledge::{Profile, SkillCatalog};

/// Raw scoring output before narrative generation.
#[derive(Debug, Clone)]
pub struct SkillMatchReport {
    /// Capped at 100.
    pub match_percentage: u32,
    /// Catalog iteration order, original casing. Not de-duplicated: a skill
    /// listed under two categories would be counted and listed twice. The
    /// deployed catalog has no duplicates, but the accumulation is
    /// deliberately unguarded to keep scores reproducible against the
    /// original analyzer.
    pub matched_skills: Vec<String>,
    /// Catalog skills with no hit, in catalog order.
    pub missing_skills: Vec<String>,
}

/// Scores `job_description` against the catalog. Case-insensitive substring
/// containment; every hit adds the category weight to the running total.
pub fn score_against_catalog(catalog: &SkillCatalog, job_description: &str) -> SkillMatchReport {
    let jd_lower = job_description.to_lowercase();

    let mut total: u32 = 0;
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for category in &catalog.categories {
        for skill in category.skills {
            if jd_lower.contains(&skill.to_lowercase()) {
                total += category.weight;
                matched_skills.push(skill.to_string());
            } else {
                missing_skills.push(skill.to_string());
            }
        }
    }

    SkillMatchReport {
        match_percentage: total.min(100),
        matched_skills,
        missing_skills,
    }
}

/// Renders the report into the analyzer's markdown narrative. Banding:
/// >= 70 strong fit, 40..=69 partial match, < 40 limited match.
pub fn build_analysis(profile: &Profile, report: &SkillMatchReport) -> String {
    let score = report.match_percentage;
    let matched = &report.matched_skills;

    let mut analysis = format!("📊 **Match Analysis: {score}%**\n\n");

    if !matched.is_empty() {
        analysis.push_str(&format!(
            "✅ **Skills that match:** {}\n\n",
            matched.join(", ")
        ));
    }

    if score >= 70 {
        analysis.push_str("🎯 **Why Vivek fits this role:**\n");
        analysis.push_str(&format!(
            "• Strong technical foundation with {} relevant skills\n",
            matched.len()
        ));
        analysis.push_str(&format!("• {}\n", profile.experience[0]));
        analysis.push_str(&format!(
            "• Proven track record in {}\n\n",
            profile.projects[0].to_lowercase()
        ));
    } else if score >= 40 {
        analysis.push_str("🤔 **Partial match - areas of strength:**\n");
        analysis.push_str(&format!("• Good foundation in {}\n", matched.join(", ")));
        analysis.push_str("• Could quickly learn additional required skills\n\n");
    } else {
        analysis.push_str("⚠️ **Limited match - consider upskilling:**\n");
        analysis.push_str("• Current skills don't align strongly with this role\n");
        analysis.push_str(&format!(
            "• Focus on learning: {}\n\n",
            report
                .missing_skills
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    analysis.push_str("💡 **Recommendations:**\n");
    if score >= 70 {
        analysis.push_str(&format!(
            "• Highlight {} in your application\n",
            matched.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        ));
        analysis.push_str(&format!("• Emphasize your {}\n", profile.experience[0]));
        analysis.push_str("• Showcase relevant projects from your portfolio\n");
    } else if score >= 40 {
        analysis.push_str("• Focus on transferable skills and learning ability\n");
        analysis.push_str("• Consider taking courses in missing technologies\n");
        analysis.push_str("• Build small projects to demonstrate new skills\n");
    } else {
        analysis.push_str("• This role may require significant upskilling\n");
        analysis.push_str("• Consider roles that better match your current skillset\n");
        analysis.push_str("• Focus on building a strong foundation first\n");
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SkillCatalog {
        SkillCatalog::owner()
    }

    #[test]
    fn test_python_plus_react_scores_25() {
        let report = score_against_catalog(&catalog(), "Python and React.js");
        assert_eq!(report.match_percentage, 15 + 10);
        assert_eq!(report.matched_skills, vec!["Python", "React.js"]);
    }

    #[test]
    fn test_typescript_plus_react_scores_25() {
        let report =
            score_against_catalog(&catalog(), "We need a TypeScript and React.js developer");
        assert_eq!(report.match_percentage, 25);
        assert_eq!(report.matched_skills, vec!["TypeScript", "React.js"]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let report = score_against_catalog(&catalog(), "looking for PYTHON developers");
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert_eq!(report.match_percentage, 15);
    }

    #[test]
    fn test_all_skills_clamps_to_100() {
        let cat = catalog();
        let jd: String = cat.all_skills().collect::<Vec<_>>().join(", ");
        let report = score_against_catalog(&cat, &jd);
        assert_eq!(report.match_percentage, 100);
        // Unclamped total would be 4*15 + 5*10 + 4*12 + 4*8 = 190.
        assert_eq!(report.matched_skills.len(), 17);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_matched_skills_preserve_catalog_order() {
        // JD mentions skills in reverse; output order follows the catalog.
        let report = score_against_catalog(&catalog(), "Pandas, TensorFlow, React.js, Python");
        assert_eq!(
            report.matched_skills,
            vec!["Python", "React.js", "TensorFlow", "Pandas"]
        );
    }

    #[test]
    fn test_no_match_scores_zero() {
        let report = score_against_catalog(&catalog(), "We need a COBOL mainframe operator");
        assert_eq!(report.match_percentage, 0);
        assert!(report.matched_skills.is_empty());
        assert_eq!(report.missing_skills.len(), 17);
    }

    #[test]
    fn test_idempotent() {
        let cat = catalog();
        let a = score_against_catalog(&cat, "Python and SQL");
        let b = score_against_catalog(&cat, "Python and SQL");
        assert_eq!(a.match_percentage, b.match_percentage);
        assert_eq!(a.matched_skills, b.matched_skills);
    }

    #[test]
    fn test_narrative_strong_fit_band() {
        let profile = Profile::owner();
        let report = score_against_catalog(
            &catalog(),
            "Python, JavaScript, TypeScript, SQL and React.js", // 4*15+10 = 70
        );
        assert_eq!(report.match_percentage, 70);
        let analysis = build_analysis(&profile, &report);
        assert!(analysis.contains("Match Analysis: 70%"));
        assert!(analysis.contains("Why Vivek fits this role"));
        assert!(analysis.contains("Highlight Python, JavaScript, TypeScript in your application"));
    }

    #[test]
    fn test_narrative_partial_band() {
        let profile = Profile::owner();
        let report = score_against_catalog(&catalog(), "Python, SQL and Pandas"); // 15+15+8 = 38? no: 38 < 40
        let analysis = build_analysis(&profile, &report);
        assert_eq!(report.match_percentage, 38);
        assert!(analysis.contains("Limited match"));

        let report = score_against_catalog(&catalog(), "Python, SQL and React.js"); // 40
        assert_eq!(report.match_percentage, 40);
        let analysis = build_analysis(&profile, &report);
        assert!(analysis.contains("Partial match - areas of strength"));
        assert!(analysis.contains("Good foundation in Python, SQL, React.js"));
    }

    #[test]
    fn test_narrative_limited_band_lists_missing_skills() {
        let profile = Profile::owner();
        let report = score_against_catalog(&catalog(), "Rust and Go only");
        let analysis = build_analysis(&profile, &report);
        assert!(analysis.contains("Limited match - consider upskilling"));
        // First three unmatched catalog skills, catalog order.
        assert!(analysis.contains("Focus on learning: Python, JavaScript, TypeScript"));
    }

    #[test]
    fn test_narrative_omits_matched_section_when_empty() {
        let profile = Profile::owner();
        let report = score_against_catalog(&catalog(), "nothing relevant here");
        let analysis = build_analysis(&profile, &report);
        assert!(!analysis.contains("Skills that match"));
    }
}
