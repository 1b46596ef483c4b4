use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::modules::events::adapters::outbound::reply_generator::{
    ReplyGenerator, ReplyRequest, extract_user_text,
};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-nano";
const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 80;

const SYSTEM_PROMPT: &str = "You are a concise assistant. Respond in one single sentence only. \
Primary instruction: Answer the user's message provided under 'User message' below. \
Do not restate or summarize metadata such as Source or Event ID. \
If the message is not a question, reply with a brief, helpful acknowledgement related to the message. \
Do not include extra explanations or multiple sentences.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &'static str, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// One-sentence replies from the OpenAI chat completions API.
pub struct OpenAiReplyGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiReplyGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
        })
    }

    /// Points the generator at a compatible endpoint instead of api.openai.com.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// System prompt, prior turns, then the current message with its metadata.
    pub fn build_messages(request: &ReplyRequest) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(request.history.len() * 2 + 2);

        let system = match render_context(&request.context) {
            Some(context) => format!("{SYSTEM_PROMPT}\n\nContext:\n{context}"),
            None => SYSTEM_PROMPT.to_string(),
        };
        messages.push(ChatMessage::new("system", system));

        for turn in &request.history {
            messages.push(ChatMessage::new("user", extract_user_text(&turn.input)));
            if let Some(output) = &turn.output {
                messages.push(ChatMessage::new("assistant", output.clone()));
            }
        }

        let event = &request.event;
        messages.push(ChatMessage::new(
            "user",
            format!(
                "User message:\n{}\n\n[Metadata - ignore for response]\nSource: {}\nEvent ID: {}",
                extract_user_text(&event.payload),
                event.source,
                event.event_id
            ),
        ));
        messages
    }
}

fn render_context(context: &Map<String, Value>) -> Option<String> {
    if context.is_empty() {
        return None;
    }
    let lines: Vec<String> = context
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{key}: {text}"),
            other => format!("{key}: {other}"),
        })
        .collect();
    Some(lines.join("\n"))
}

/// Flattens the reply onto one line; blank replies count as no reply.
fn normalize_reply(content: Option<String>) -> Option<String> {
    content
        .map(|text| text.trim().replace('\n', " "))
        .filter(|text| !text.is_empty())
}

#[async_trait]
impl ReplyGenerator for OpenAiReplyGenerator {
    async fn generate(&self, request: &ReplyRequest) -> anyhow::Result<Option<String>> {
        let messages = Self::build_messages(request);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response: ChatCompletionResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let reply = normalize_reply(
            response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content),
        );

        tracing::debug!(
            target: "llm_roundtrip",
            event_id = %request.event.event_id,
            source = %request.event.source,
            session_id = ?request.event.session_id,
            model = %self.model,
            history_count = messages.len().saturating_sub(2),
            context_included = !request.context.is_empty(),
            reply = ?reply,
            "llm roundtrip"
        );
        Ok(reply)
    }
}
