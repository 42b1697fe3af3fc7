//! Resume analyzer endpoint — scores a job description against the owner's
//! skill catalog, preferring the inference service and falling back to the
//! local weighted-keyword scorer.

pub mod scoring;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{analysis_prompt, ANALYSIS_NUM_PREDICT, ANALYSIS_TEMPERATURE};
use crate::llm_client::{ChatMessage, ChatOptions};
use crate::state::AppState;

/// Match percentage assumed when the remote narrative contains no `N%`.
const DEFAULT_REMOTE_PERCENTAGE: u32 = 75;

/// Advisory attached to locally-computed analyses.
const FALLBACK_NOTE: &str = "This analysis was generated using basic matching logic. \
     For AI-powered analysis, ensure Ollama is running with the llama3.1 model.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub timestamp: String,
    pub is_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// POST /api/v1/resume-analyzer
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description is required and must be a string".to_string(),
        ));
    }

    Ok(Json(analyze(&state, &req.job_description).await))
}

/// Remote attempt first, local scorer on any failure. Always succeeds.
async fn analyze(state: &AppState, job_description: &str) -> AnalyzeResponse {
    let prompt = analysis_prompt(&state.profile, &state.catalog, job_description);
    let messages = [ChatMessage {
        role: "user",
        content: &prompt,
    }];
    let options = ChatOptions {
        temperature: ANALYSIS_TEMPERATURE,
        num_predict: ANALYSIS_NUM_PREDICT,
    };

    match state.llm.chat(&messages, options).await {
        Ok(text) => {
            let match_percentage =
                extract_match_percentage(&text).unwrap_or(DEFAULT_REMOTE_PERCENTAGE);
            info!(match_percentage, "analysis served by {}", state.llm.model());
            // The remote narrative is returned verbatim; matched skills are
            // only computed on the local path.
            AnalyzeResponse {
                analysis: text,
                match_percentage,
                matched_skills: Vec::new(),
                timestamp: Utc::now().to_rfc3339(),
                is_fallback: false,
                note: None,
            }
        }
        Err(e) => {
            warn!("inference service unavailable, using keyword analysis: {e}");
            let report = scoring::score_against_catalog(&state.catalog, job_description);
            let analysis = scoring::build_analysis(&state.profile, &report);
            AnalyzeResponse {
                analysis,
                match_percentage: report.match_percentage,
                matched_skills: report.matched_skills,
                timestamp: Utc::now().to_rfc3339(),
                is_fallback: true,
                note: Some(FALLBACK_NOTE.to_string()),
            }
        }
    }
}

/// Returns the first integer immediately followed by `%` in `text`.
fn extract_match_percentage(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'%' {
                if let Ok(value) = text[start..i].parse::<u32>() {
                    return Some(value);
                }
            }
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_percentage_simple() {
        assert_eq!(extract_match_percentage("Match percentage: 85%"), Some(85));
    }

    #[test]
    fn test_extract_percentage_first_wins() {
        assert_eq!(
            extract_match_percentage("I'd say 60%, maybe 70% on a good day"),
            Some(60)
        );
    }

    #[test]
    fn test_extract_percentage_skips_bare_numbers() {
        // "3" and "100" are not followed by '%'; only "45%" qualifies.
        assert_eq!(
            extract_match_percentage("With 3 of 100 skills matched: 45%"),
            Some(45)
        );
    }

    #[test]
    fn test_extract_percentage_absent() {
        assert_eq!(extract_match_percentage("a strong fit overall"), None);
        assert_eq!(extract_match_percentage(""), None);
    }

    #[test]
    fn test_extract_percentage_handles_multibyte_text() {
        assert_eq!(extract_match_percentage("évaluation: 90% ✅"), Some(90));
    }

    #[test]
    fn test_analyze_response_wire_field_names() {
        let json = serde_json::to_value(AnalyzeResponse {
            analysis: "ok".to_string(),
            match_percentage: 25,
            matched_skills: vec!["Python".to_string()],
            timestamp: "2025-01-01T00:00:00Z".to_string(),
            is_fallback: true,
            note: None,
        })
        .unwrap();
        assert_eq!(json["matchPercentage"], 25);
        assert_eq!(json["isFallback"], true);
        assert_eq!(json["matchedSkills"][0], "Python");
        assert!(json.get("note").is_none());
    }
}
