use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Hello world" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Hello world");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_joins_multiple_text_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "First." },
        { "type": "text", "text": "Second." }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "First.\nSecond.");
}

#[test]
fn parse_skips_unknown_block_types() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "hmm" },
        { "type": "text", "text": "answer" },
        { "type": "some_future_type", "data": {} }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "answer");
}

#[test]
fn parse_rejects_malformed_json() {
    let err = parse_response("{not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}
