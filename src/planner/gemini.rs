use super::prompt::{plan_prompt, plan_schema, summary_prompt};
use super::{Planner, Summarizer};
use crate::domain::{PlanInput, Task};
use crate::error::PlannerError;
use crate::persistence::AppConfig;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

/// Blocking client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    agent: ureq::Agent,
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from config. The key comes from the environment only.
    pub fn new(config: &AppConfig) -> Result<Self, PlannerError> {
        let api_key = config.api_key().ok_or(PlannerError::MissingCredential)?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        info!(model = %config.model, "planner client configured");

        Ok(Self {
            agent,
            api_key,
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn call(&self, body: &Value) -> Result<String, PlannerError> {
        let body_str = serde_json::to_string(body)?;
        debug!(model = %self.model, bytes = body_str.len(), "sending request");

        let response = self
            .agent
            .post(&self.endpoint())
            .query("key", &self.api_key)
            .set("Content-Type", "application/json")
            .send_string(&body_str)
            .map_err(map_http_error)?;

        let text = response
            .into_string()
            .map_err(|e| PlannerError::Network(format!("read error: {e}")))?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| PlannerError::InvalidPlan(format!("response is not JSON: {e}")))?;

        extract_text(&value)
    }
}

impl Planner for GeminiClient {
    fn generate(&self, input: &PlanInput, today: NaiveDate) -> Result<Vec<Task>, PlannerError> {
        let prompt = plan_prompt(input, today)?;
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": plan_schema(),
            }
        });

        let text = self.call(&body)?;
        parse_plan(&text)
    }
}

impl Summarizer for GeminiClient {
    fn summarize(&self, tasks: &[Task]) -> Result<String, PlannerError> {
        let prompt = summary_prompt(tasks)?;
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let text = self.call(&body)?;
        if text.trim().is_empty() {
            return Err(PlannerError::InvalidPlan("empty summary".to_string()));
        }
        Ok(text)
    }
}

fn map_http_error(err: ureq::Error) -> PlannerError {
    match err {
        ureq::Error::Status(code @ (401 | 403), _) => PlannerError::RejectedCredential(code),
        ureq::Error::Status(429, _) => PlannerError::Quota,
        ureq::Error::Status(code, response) => {
            PlannerError::Network(format!("HTTP {} {}", code, response.status_text()))
        }
        ureq::Error::Transport(transport) => PlannerError::Network(transport.to_string()),
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(value: &Value) -> Result<String, PlannerError> {
    if let Some(reason) = value["promptFeedback"]["blockReason"].as_str() {
        return Err(PlannerError::InvalidPlan(format!("request blocked: {reason}")));
    }

    let parts = value["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| PlannerError::InvalidPlan("response has no candidates".to_string()))?;

    Ok(parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect::<Vec<_>>()
        .join(""))
}

/// Parse the model's JSON array, tolerating a Markdown code fence around it
fn parse_plan(text: &str) -> Result<Vec<Task>, PlannerError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(body.trim()).map_err(|e| PlannerError::InvalidPlan(e.to_string()))
}
