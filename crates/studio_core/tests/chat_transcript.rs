use chrono::{TimeZone, Utc};
use studio_core::{ChatRole, ChatService, ChatServiceError, GenerationParameters};

#[test]
fn fresh_transcript_holds_only_the_greeting() {
    let chat = ChatService::new();
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].role, ChatRole::System);
    assert!(!chat.can_export());
    assert!(!chat.can_clear());
    assert!(!chat.is_awaiting_reply());
}

#[test]
fn submit_then_reply_round() {
    let mut chat = ChatService::new();
    let sent = chat.submit("  Explain lifetimes  ").unwrap();
    assert_eq!(sent.role, ChatRole::User);
    assert_eq!(sent.content, "Explain lifetimes");
    assert!(chat.is_awaiting_reply());

    assert!(matches!(
        chat.submit("another"),
        Err(ChatServiceError::ReplyPending)
    ));

    let reply = chat
        .receive_reply("Lifetimes describe borrows.", Some("GPT-4 Turbo".to_string()))
        .unwrap();
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.model.as_deref(), Some("GPT-4 Turbo"));
    assert!(!chat.is_awaiting_reply());
    assert_eq!(chat.messages().len(), 3);
    assert!(chat.can_export());
}

#[test]
fn blank_submission_is_rejected() {
    let mut chat = ChatService::new();
    assert!(matches!(
        chat.submit(" \n\t "),
        Err(ChatServiceError::EmptyMessage)
    ));
    assert_eq!(chat.messages().len(), 1);
    assert!(!chat.is_awaiting_reply());
}

#[test]
fn clear_leaves_single_system_message_and_drops_pending_reply() {
    let mut chat = ChatService::new();
    chat.submit("hello").unwrap();
    chat.clear();

    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].role, ChatRole::System);
    assert!(!chat.is_awaiting_reply());
    assert!(matches!(
        chat.receive_reply("late", None),
        Err(ChatServiceError::NoPendingRequest)
    ));
}

#[test]
fn export_json_carries_messages_model_and_parameters() {
    let mut chat = ChatService::new();
    chat.submit("hi").unwrap();
    chat.receive_reply("hello", Some("Claude 3 Opus".to_string()))
        .unwrap();

    let exported_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let json = chat
        .export_json(
            Some("claude-3-opus"),
            &GenerationParameters::default(),
            exported_at,
        )
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(json.as_str()).unwrap();

    assert_eq!(value["messages"].as_array().unwrap().len(), 3);
    assert_eq!(value["messages"][1]["role"], "user");
    assert_eq!(value["messages"][1]["content"], "hi");
    assert!(value["messages"][1].get("model").is_none());
    assert_eq!(value["messages"][2]["model"], "Claude 3 Opus");
    assert_eq!(value["model"], "claude-3-opus");
    assert_eq!(value["parameters"]["maxTokens"], 2048);
    assert_eq!(value["parameters"]["temperature"], 0.7);
    assert_eq!(value["timestamp"], "2024-05-01T12:00:00+00:00");
}

#[test]
fn export_without_model_omits_the_field() {
    let chat = ChatService::new();
    let json = chat
        .export_json(None, &GenerationParameters::default(), Utc::now())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(json.as_str()).unwrap();
    assert!(value.get("model").is_none());
    assert!(value["parameters"].is_object());
}
