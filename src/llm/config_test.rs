use super::*;

#[test]
fn parse_provider_defaults_to_anthropic() {
    assert_eq!(parse_provider(None).unwrap(), LlmProviderKind::Anthropic);
}

#[test]
fn parse_provider_accepts_known_values() {
    assert_eq!(parse_provider(Some("anthropic")).unwrap(), LlmProviderKind::Anthropic);
    assert_eq!(parse_provider(Some("openai")).unwrap(), LlmProviderKind::OpenAi);
}

#[test]
fn parse_provider_rejects_unknown() {
    let err = parse_provider(Some("llama-at-home")).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
}

#[test]
fn default_models_per_provider() {
    assert!(default_model(LlmProviderKind::Anthropic).starts_with("claude"));
    assert!(default_model(LlmProviderKind::OpenAi).starts_with("gpt"));
}
