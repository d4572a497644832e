//! Unit tests for `prompt::ChatMessage` and `prompt::MessageRole`.
//!
//! Verifies constructors and the wire shape consumed by chat-style LLM adapters.
//! External interactions: none (pure value tests).

use prompt::{ChatMessage, MessageRole};
use serde_json::json;

/// **Test: ChatMessage::system/user/assistant set role and content correctly.**
#[test]
fn chat_message_constructors() {
    let s = ChatMessage::system("sys");
    assert!(matches!(s.role, MessageRole::System));
    assert_eq!(s.content, json!("sys"));
    let u = ChatMessage::user("usr");
    assert!(matches!(u.role, MessageRole::User));
    assert_eq!(u.content, json!("usr"));
    let a = ChatMessage::assistant("ast");
    assert!(matches!(a.role, MessageRole::Assistant));
    assert_eq!(a.content, json!("ast"));
}

/// **Test: Non-string content is kept as-is (no stringification).**
#[test]
fn chat_message_keeps_raw_content() {
    let msg = ChatMessage::assistant(json!({"rows": [1, 2, 3]}));
    assert_eq!(msg.content, json!({"rows": [1, 2, 3]}));

    let msg = ChatMessage::user(42);
    assert_eq!(msg.content, json!(42));
}

/// **Test: Serialized shape is {"role": "<lowercase>", "content": ...}.**
#[test]
fn chat_message_serializes_with_lowercase_role() {
    let msgs = vec![
        ChatMessage::system("You are a data analyst."),
        ChatMessage::user("Hello"),
        ChatMessage::assistant(3.5),
    ];
    let value = serde_json::to_value(&msgs).unwrap();
    assert_eq!(
        value,
        json!([
            {"role": "system", "content": "You are a data analyst."},
            {"role": "user", "content": "Hello"},
            {"role": "assistant", "content": 3.5},
        ])
    );
}

#[test]
fn message_role_display_and_parse() {
    assert_eq!(MessageRole::User.to_string(), "user");
    assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    let role: MessageRole = serde_json::from_str("\"system\"").unwrap();
    assert_eq!(role, MessageRole::System);
    assert!(serde_json::from_str::<MessageRole>("\"User\"").is_err());
}
