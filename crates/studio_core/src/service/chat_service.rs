//! Chat transcript use-case service.
//!
//! # Responsibility
//! - Own the message transcript and the awaiting-reply flag.
//! - Serialize the transcript for export.
//!
//! # Invariants
//! - The transcript always holds at least one message.
//! - At most one user message awaits a reply at any time.
//! - Producing the reply text is the caller's concern; this service only
//!   records it.

use crate::model::chat::{ChatMessage, ChatRole};
use crate::model::params::GenerationParameters;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const GREETING: &str = "AI Studio is ready. How can I help you today?";
const CLEARED_GREETING: &str = "Chat cleared. How can I help you?";

/// Service error for chat use-cases.
#[derive(Debug)]
pub enum ChatServiceError {
    /// Input is blank after trim.
    EmptyMessage,
    /// A previous message is still waiting for its reply.
    ReplyPending,
    /// No user message is waiting for a reply.
    NoPendingRequest,
    /// Transcript could not be serialized.
    Export(serde_json::Error),
}

impl Display for ChatServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message must not be blank"),
            Self::ReplyPending => write!(f, "a reply is still pending"),
            Self::NoPendingRequest => write!(f, "no message is awaiting a reply"),
            Self::Export(err) => write!(f, "transcript export failed: {err}"),
        }
    }
}

impl Error for ChatServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Export(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChatServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Export(value)
    }
}

#[derive(Serialize)]
struct TranscriptExport<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    parameters: &'a GenerationParameters,
    timestamp: String,
}

/// Chat console transcript.
#[derive(Debug, Clone)]
pub struct ChatService {
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatService {
    /// Starts a transcript with the ready greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::System, GREETING)],
            awaiting_reply: false,
        }
    }

    /// Appends a trimmed user message and marks a reply as pending.
    pub fn submit(&mut self, input: &str) -> Result<&ChatMessage, ChatServiceError> {
        if self.awaiting_reply {
            return Err(ChatServiceError::ReplyPending);
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ChatServiceError::EmptyMessage);
        }

        self.messages.push(ChatMessage::new(ChatRole::User, trimmed));
        self.awaiting_reply = true;
        debug!(
            "event=chat_submit module=chat status=ok messages={}",
            self.messages.len()
        );
        Ok(self.last_message())
    }

    /// Records the assistant reply for the pending user message.
    pub fn receive_reply(
        &mut self,
        content: impl Into<String>,
        model: Option<String>,
    ) -> Result<&ChatMessage, ChatServiceError> {
        if !self.awaiting_reply {
            return Err(ChatServiceError::NoPendingRequest);
        }
        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, content).with_model(model));
        self.awaiting_reply = false;
        Ok(self.last_message())
    }

    /// Replaces the transcript with a single "cleared" system message.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::new(ChatRole::System, CLEARED_GREETING)];
        self.awaiting_reply = false;
        info!("event=chat_clear module=chat status=ok");
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Export and clear are offered once the conversation has started.
    pub fn can_export(&self) -> bool {
        self.messages.len() > 1
    }

    pub fn can_clear(&self) -> bool {
        self.messages.len() > 1
    }

    /// Pretty-printed JSON export of the transcript and its settings.
    pub fn export_json(
        &self,
        model: Option<&str>,
        parameters: &GenerationParameters,
        exported_at: DateTime<Utc>,
    ) -> Result<String, ChatServiceError> {
        let payload = TranscriptExport {
            messages: &self.messages,
            model,
            parameters,
            timestamp: exported_at.to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&payload)?;
        info!(
            "event=chat_export module=chat status=ok messages={} bytes={}",
            self.messages.len(),
            json.len()
        );
        Ok(json)
    }

    fn last_message(&self) -> &ChatMessage {
        // `messages` is never empty.
        &self.messages[self.messages.len() - 1]
    }
}

/// Download name for a transcript exported on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("ai-chat-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, ChatService, ChatServiceError};
    use chrono::NaiveDate;

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(export_file_name(date), "ai-chat-2024-03-07.json");
    }

    #[test]
    fn reply_without_request_is_rejected() {
        let mut chat = ChatService::new();
        assert!(matches!(
            chat.receive_reply("hi", None),
            Err(ChatServiceError::NoPendingRequest)
        ));
    }
}
