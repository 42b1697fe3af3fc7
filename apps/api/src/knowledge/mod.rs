//! Knowledge base — the static facts every interactive feature reads from.
//!
//! Built once at startup, held in `AppState` behind `Arc`, never mutated.

use serde::Serialize;

/// Biographical facts about the site owner. Serialized to JSON verbatim
/// when building the chat system prompt.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub education: String,
    pub availability: String,
    #[serde(skip)]
    pub email: String,
    #[serde(skip)]
    pub phone: String,
    #[serde(skip)]
    pub linkedin: String,
}

impl Profile {
    /// The site owner's profile. The portfolio is single-tenant, so this is
    /// the only constructor.
    pub fn owner() -> Self {
        Profile {
            name: "Vivek Patil".to_string(),
            role: "Web Developer | AI Enthusiast | Data Analyst".to_string(),
            skills: [
                "Python",
                "SQL",
                "React.js",
                "Next.js",
                "AI/ML",
                "Data Visualization",
                "TypeScript",
                "Tailwind CSS",
                "TensorFlow",
                "Scikit-learn",
                "Neural Networks",
                "Pandas",
                "Statistical Analysis",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            experience: vec![
                "3+ years of experience in web development and AI/ML".to_string(),
                "Skilled in creating innovative solutions using latest technologies".to_string(),
                "Passionate about AI/ML and data analysis".to_string(),
            ],
            projects: vec![
                "Built responsive web applications using React.js and Next.js".to_string(),
                "Developed AI/ML models for data analysis and prediction".to_string(),
                "Created data visualization dashboards and reports".to_string(),
            ],
            education: "Strong academic background in computer science and data analysis"
                .to_string(),
            availability: "Available for opportunities in web development, AI/ML, and data analysis"
                .to_string(),
            email: "vivekpatil0088@gmail.com".to_string(),
            phone: "+91 63516 81472".to_string(),
            linkedin: "VivekPatil0088".to_string(),
        }
    }
}

/// One scored skill category. Every hit in a job description contributes
/// `weight` points toward the match percentage.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: &'static str,
    pub weight: u32,
    pub skills: &'static [&'static str],
}

/// The scored skill categories, in the order the scorer walks them.
/// Order matters: it fixes the order of `matchedSkills` in responses.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    pub fn owner() -> Self {
        SkillCatalog {
            categories: vec![
                SkillCategory {
                    name: "Programming Languages",
                    weight: 15,
                    skills: &["Python", "JavaScript", "TypeScript", "SQL"],
                },
                SkillCategory {
                    name: "Frontend",
                    weight: 10,
                    skills: &["React.js", "Next.js", "HTML", "CSS", "Tailwind CSS"],
                },
                SkillCategory {
                    name: "AI/ML",
                    weight: 12,
                    skills: &[
                        "TensorFlow",
                        "Scikit-learn",
                        "Neural Networks",
                        "Machine Learning",
                    ],
                },
                SkillCategory {
                    name: "Data Analysis",
                    weight: 8,
                    skills: &["Pandas", "NumPy", "Data Visualization", "Statistical Analysis"],
                },
            ],
        }
    }

    /// All catalog skills in iteration order.
    pub fn all_skills(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().flat_map(|c| c.skills.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_category_order_is_fixed() {
        let catalog = SkillCatalog::owner();
        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Programming Languages", "Frontend", "AI/ML", "Data Analysis"]
        );
    }

    #[test]
    fn test_catalog_weights() {
        let catalog = SkillCatalog::owner();
        let weights: Vec<u32> = catalog.categories.iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![15, 10, 12, 8]);
    }

    #[test]
    fn test_profile_serializes_without_direct_contact_fields() {
        // email/phone/linkedin are interpolated into canned responses, not
        // shipped wholesale to the LLM prompt.
        let json = serde_json::to_value(Profile::owner()).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("name").is_some());
        assert_eq!(json["name"], "Vivek Patil");
    }
}
