//! Intent matcher — the local keyword responder behind the chatbot and
//! voice assistant when the inference service is unreachable.
//!
//! Rules are evaluated in a fixed order and the first rule with any trigger
//! hit wins. Trigger sets overlap on purpose ("work", "background",
//! "programming" each appear in more than one rule), so reordering the list
//! changes observable behavior.

use crate::knowledge::Profile;

/// A single (trigger set, canned response) pair.
struct Rule {
    triggers: &'static [&'static str],
    response: String,
}

/// Keyword-based responder over the owner's profile. Pure and deterministic:
/// no state, no I/O, always returns a response string.
pub struct IntentMatcher {
    rules: Vec<Rule>,
    greeting: String,
    fallthrough: String,
}

impl IntentMatcher {
    pub fn new(profile: &Profile) -> Self {
        let greeting = format!(
            "Hello! I'm here to help you learn about {}. How can I assist you today?",
            profile.name
        );

        let rules = vec![
            Rule {
                triggers: &[
                    "hello",
                    "hi",
                    "hey",
                    "good morning",
                    "good afternoon",
                    "good evening",
                ],
                response: greeting.clone(),
            },
            Rule {
                triggers: &[
                    "skill",
                    "technology",
                    "tech",
                    "your skill",
                    "your tech",
                    "what can you do",
                    "expertise",
                    "proficient",
                    "know",
                    "programming",
                    "coding",
                    "languages",
                ],
                response: "Vivek's key skills include Python, React.js, Next.js, AI/ML, \
                           Data Analysis, TypeScript, and Tailwind CSS. He has 3+ years of \
                           experience in web development and AI/ML."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "experience",
                    "work",
                    "job",
                    "your experience",
                    "work history",
                    "background",
                    "years",
                    "career",
                    "professional",
                ],
                response: "Vivek has 3+ years of experience in web development and AI/ML. \
                           He's skilled in creating innovative solutions using the latest \
                           technologies and has a passion for AI/ML and data analysis."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "project",
                    "portfolio",
                    "work",
                    "your project",
                    "what have you built",
                    "applications",
                    "websites",
                    "apps",
                    "development",
                ],
                response: "Vivek has built responsive web applications using React.js and \
                           Next.js, developed AI/ML models for data analysis, and created \
                           data visualization dashboards. Check out his projects section \
                           for more details!"
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "education",
                    "degree",
                    "study",
                    "your education",
                    "academic",
                    "university",
                    "college",
                    "learning",
                    "background",
                ],
                response: "Vivek has a strong academic background in computer science and \
                           data analysis. He's passionate about emerging technologies and \
                           continuous learning."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "contact",
                    "email",
                    "phone",
                    "reach",
                    "your contact",
                    "how to reach",
                    "get in touch",
                    "linkedin",
                    "github",
                    "social",
                ],
                response: format!(
                    "You can reach Vivek through email at {}, phone at {}, or connect on \
                     LinkedIn at {}. He's available for opportunities in web development, \
                     AI/ML, and data analysis.",
                    profile.email, profile.phone, profile.linkedin
                ),
            },
            Rule {
                triggers: &[
                    "ai",
                    "machine learning",
                    "ml",
                    "artificial intelligence",
                    "neural",
                    "tensorflow",
                    "scikit",
                    "deep learning",
                    "predictive",
                ],
                response: "Vivek is passionate about AI/ML and has experience with \
                           TensorFlow, Scikit-learn, Neural Networks, and data analysis. \
                           He's always exploring new AI technologies and applications."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "web",
                    "frontend",
                    "backend",
                    "website",
                    "app",
                    "react",
                    "next",
                    "javascript",
                    "typescript",
                    "html",
                    "css",
                ],
                response: "Vivek specializes in full-stack web development using React.js, \
                           Next.js, Node.js, and modern web technologies. He creates \
                           responsive, user-friendly applications with cutting-edge features."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "data",
                    "analysis",
                    "visualization",
                    "pandas",
                    "numpy",
                    "statistics",
                    "dashboard",
                    "report",
                    "insights",
                ],
                response: "Vivek has strong skills in data analysis using Python, Pandas, \
                           and statistical analysis. He creates data visualization \
                           dashboards and reports to help make data-driven decisions."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "python",
                    "sql",
                    "database",
                    "programming",
                    "coding",
                    "scripting",
                    "automation",
                    "api",
                ],
                response: "Vivek is proficient in Python programming, SQL databases, and \
                           building APIs. He uses these skills for web development, data \
                           analysis, and AI/ML projects."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "who",
                    "what",
                    "tell me about",
                    "about you",
                    "your background",
                    "introduce",
                ],
                response: "Vivek Patil is a Web Developer, AI Enthusiast, and Data Analyst \
                           with 3+ years of experience. He specializes in creating modern \
                           web applications, AI/ML solutions, and data analysis tools. \
                           He's passionate about emerging technologies and always eager to \
                           learn new skills."
                    .to_string(),
            },
            Rule {
                triggers: &[
                    "help",
                    "assist",
                    "guide",
                    "what can you help",
                    "support",
                    "advice",
                ],
                response: "I can help you learn about Vivek's skills, experience, projects, \
                           education, and contact information. Try asking about his \
                           technical skills, work experience, projects, or how to reach him."
                    .to_string(),
            },
        ];

        let fallthrough = format!(
            "I can help you learn about {}! Try asking about his skills, experience, \
             projects, education, or contact information. For example: 'What are your \
             skills?', 'Tell me about your experience', or 'How can I contact you?'.",
            profile.name
        );

        IntentMatcher {
            rules,
            greeting,
            fallthrough,
        }
    }

    /// Returns the canned response for `input`. Never fails.
    pub fn respond(&self, input: &str) -> &str {
        let message = input.trim().to_lowercase();

        if message.chars().count() < 2 {
            return &self.greeting;
        }

        for rule in &self.rules {
            if rule.triggers.iter().any(|t| message.contains(t)) {
                return &rule.response;
            }
        }

        &self.fallthrough
    }
}
