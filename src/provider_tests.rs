use super::testing::ScriptedTransport;
use super::*;
use std::rc::Rc;

fn config_with_key() -> ProviderConfig {
    ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: "https://provider.invalid/v1".to_string(),
    }
}

fn config_without_key() -> ProviderConfig {
    ProviderConfig {
        api_key: None,
        base_url: "https://provider.invalid/v1".to_string(),
    }
}

#[test]
fn generate_without_credential_fails_before_any_network_call() {
    let transport = ScriptedTransport::default();
    let log = Rc::clone(&transport.log);
    let client = GenerationClient::with_transport(config_without_key(), Box::new(transport));

    assert_eq!(
        client.generate("irrelevant"),
        Err(GenerationError::MissingCredential)
    );
    assert_eq!(log.calls(), 0);
}

#[test]
fn probe_without_credential_reports_failure_and_stays_offline() {
    let transport = ScriptedTransport::default();
    let log = Rc::clone(&transport.log);
    let client = GenerationClient::with_transport(config_without_key(), Box::new(transport));

    let outcome = client.probe();
    assert!(!outcome.ok);
    assert!(
        outcome.status.contains(PROVIDER_API_KEY_ENV),
        "status should name the credential: {}",
        outcome.status
    );
    assert_eq!(log.calls(), 0);
}

#[test]
fn generate_sends_fixed_parameters() {
    let transport = ScriptedTransport::returning(vec![Ok("PLAN".to_string())]);
    let log = Rc::clone(&transport.log);
    let client = GenerationClient::with_transport(config_with_key(), Box::new(transport));

    let plan = client.generate("the rendered prompt").expect("generate plan");
    assert_eq!(plan, "PLAN");

    let request = log.last_request().expect("recorded request");
    assert_eq!(request.model, "gpt-3.5-turbo");
    assert_eq!(request.max_tokens, 2000);
    assert_eq!(request.temperature, Some(PLAN_TEMPERATURE));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
    assert_eq!(request.messages[1].role, "user");
    assert_eq!(request.messages[1].content, "the rendered prompt");
}

#[test]
fn generate_surfaces_provider_reason_verbatim() {
    let transport = ScriptedTransport::returning(vec![Err(GenerationError::Provider(
        "quota exceeded".to_string(),
    ))]);
    let client = GenerationClient::with_transport(config_with_key(), Box::new(transport));

    let err = client.generate("prompt").expect_err("provider failure");
    assert_eq!(err.to_string(), "quota exceeded");
}

#[test]
fn generate_makes_a_single_attempt() {
    let transport = ScriptedTransport::returning(vec![
        Err(GenerationError::Provider("first attempt fails".to_string())),
        Ok("never reached".to_string()),
    ]);
    let log = Rc::clone(&transport.log);
    let client = GenerationClient::with_transport(config_with_key(), Box::new(transport));

    assert!(client.generate("prompt").is_err());
    assert_eq!(log.calls(), 1);
}

#[test]
fn probe_uses_minimal_request() {
    let transport = ScriptedTransport::returning(vec![Ok("Hi".to_string())]);
    let log = Rc::clone(&transport.log);
    let client = GenerationClient::with_transport(config_with_key(), Box::new(transport));

    let outcome = client.probe();
    assert!(outcome.ok);
    assert_eq!(outcome.status, "provider connection successful");

    let request = log.last_request().expect("recorded request");
    assert_eq!(request.max_tokens, PROBE_MAX_TOKENS);
    assert_eq!(request.temperature, None);
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, "user");
    assert_eq!(request.messages[0].content, "Hello");
}

#[test]
fn provider_reason_prefers_provider_error_message() {
    let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
    let reason = provider_reason(401, body);
    assert!(reason.contains("status 401"), "missing status: {reason}");
    assert!(
        reason.contains("Incorrect API key provided"),
        "missing provider message: {reason}"
    );
}

#[test]
fn provider_reason_truncates_unparseable_bodies() {
    let body = "x".repeat(2_000);
    let reason = provider_reason(502, &body);
    assert!(reason.contains("status 502"));
    assert!(reason.contains("...(truncated)"));
    assert!(reason.len() < 400, "snippet not bounded: {}", reason.len());
}

#[test]
fn snippet_respects_char_boundaries() {
    let text = "plan généré".repeat(40);
    let cut = snippet(&text, 100);
    assert!(cut.ends_with("...(truncated)"));
}

#[test]
fn chat_request_serializes_without_null_temperature() {
    let request = ChatRequest {
        model: MODEL,
        messages: vec![ChatMessage::user("Hello")],
        max_tokens: PROBE_MAX_TOKENS,
        temperature: None,
    };
    let json = serde_json::to_string(&request).expect("serialize request");
    assert!(!json.contains("temperature"), "unexpected field: {json}");
    assert!(json.contains("\"role\":\"user\""));
}
