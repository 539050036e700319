//! Tests for transcript normalization

use poebridge_core::poe::converter::{to_protocol_message, to_query_request, RequestIdentity};
use poebridge_core::protocol::{ChatMessage, ProtocolRole};
use poebridge_core::PoeError;
use test_case::test_case;

#[test_case("Human", ProtocolRole::User; "human label")]
#[test_case("AI", ProtocolRole::Bot; "ai label")]
#[test_case("System", ProtocolRole::System; "system label")]
fn generic_labels_map_to_protocol_roles(label: &str, expected: ProtocolRole) {
    let message = ChatMessage::chat(label, "hi");
    let normalized = to_protocol_message(&message).expect("mappable role");
    assert_eq!(normalized.role, expected);
    assert_eq!(normalized.content, "hi");
}

#[test]
fn typed_variants_map_to_protocol_roles() {
    let cases = [
        (ChatMessage::human("a"), ProtocolRole::User),
        (ChatMessage::assistant("b"), ProtocolRole::Bot),
        (ChatMessage::system("c"), ProtocolRole::System),
    ];

    for (message, expected) in cases {
        let normalized = to_protocol_message(&message).expect("mappable variant");
        assert_eq!(normalized.role, expected);
        assert_eq!(normalized.content, message.content());
    }
}

#[test]
fn unknown_label_is_rejected() {
    let message = ChatMessage::chat("Robot", "beep");
    match to_protocol_message(&message) {
        Err(PoeError::UnsupportedRole(role)) => assert_eq!(role, "Robot"),
        other => panic!("expected UnsupportedRole, got {:?}", other),
    }
}

#[test]
fn role_labels_are_case_sensitive() {
    assert!(to_protocol_message(&ChatMessage::chat("human", "x")).is_err());
    assert!(to_protocol_message(&ChatMessage::chat("ai", "x")).is_err());
}

#[test]
fn content_passes_through_unchanged() {
    let body = "  line one\n\tline two — with \"quotes\" and unicode ❤ ";
    let normalized = to_protocol_message(&ChatMessage::human(body)).unwrap();
    assert_eq!(normalized.content, body);
}

#[test]
fn normalization_is_pure() {
    let message = ChatMessage::chat("AI", "same");
    let first = to_protocol_message(&message).unwrap();
    let second = to_protocol_message(&message).unwrap();
    assert_eq!(first, second);
}

#[test]
fn query_preserves_transcript_order() {
    let messages = vec![
        ChatMessage::system("a"),
        ChatMessage::human("b"),
        ChatMessage::assistant("c"),
    ];
    let identity = RequestIdentity {
        bot_name: "Assistant".to_string(),
        ..RequestIdentity::default()
    };

    let request = to_query_request(&messages, &identity).expect("valid transcript");

    let shape: Vec<(ProtocolRole, &str)> = request
        .query
        .iter()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        shape,
        vec![
            (ProtocolRole::System, "a"),
            (ProtocolRole::User, "b"),
            (ProtocolRole::Bot, "c"),
        ]
    );
}

#[test]
fn query_carries_request_identity() {
    let identity = RequestIdentity {
        bot_name: "Assistant".to_string(),
        api_key: "key".to_string(),
        user_id: "u1".to_string(),
        conversation_id: "c1".to_string(),
        message_id: "m1".to_string(),
        version: "1.1".to_string(),
    };

    let request = to_query_request(&[ChatMessage::human("hi")], &identity).unwrap();

    assert_eq!(request.bot_name, "Assistant");
    assert_eq!(request.api_key, "key");
    assert_eq!(request.user_id, "u1");
    assert_eq!(request.conversation_id, "c1");
    assert_eq!(request.message_id, "m1");
    assert_eq!(request.version, "1.1");
    assert_eq!(request.request_type, "query");
}

#[test]
fn first_unmappable_message_fails_the_whole_query() {
    let messages = vec![
        ChatMessage::human("ok"),
        ChatMessage::chat("Narrator", "not ok"),
    ];
    let result = to_query_request(&messages, &RequestIdentity::default());
    assert!(matches!(result, Err(PoeError::UnsupportedRole(_))));
}
