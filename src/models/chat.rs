use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn latest_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .or_else(|| self.messages.last())
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    pub suggestions: Vec<String>,
    pub maybe_reservation: Option<serde_json::Value>,
}
