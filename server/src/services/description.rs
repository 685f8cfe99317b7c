use serde::Deserialize;
use serde_json::json;

use crate::utils::{AppError, AppResult};

const MAX_TOKENS: u32 = 100;

/// What kind of description is being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptionSubject {
    MenuItem,
    Category,
}

/// Client for AI-generated menu descriptions
///
/// Talks to an OpenAI-compatible chat completions endpoint. Without an
/// API key configured, calls fail with a business-rule error instead
/// of a confusing upstream 401.
pub struct DescriptionClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl DescriptionClient {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    pub async fn generate(&self, name: &str, subject: DescriptionSubject) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::business_rule(
                "description generation is not configured",
            ));
        }

        let prompt = match subject {
            DescriptionSubject::MenuItem => format!(
                "Write a short, appetizing menu description (1-2 sentences) \
                 for a dish called \"{name}\". Do not use quotes."
            ),
            DescriptionSubject::Category => format!(
                "Write a short, inviting one-sentence description for a \
                 restaurant menu category called \"{name}\". Do not use quotes."
            ),
        };

        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("description request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, %detail, "Description provider returned an error");
            return Err(AppError::internal(format!(
                "description provider returned {status}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("invalid description response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::internal("description response had no content"))
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}
