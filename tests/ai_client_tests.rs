use mockito::{Matcher, Server};
use soulscript::ai::{GeminiClient, GenerationOptions, RemoteKind, RemoteResult};
use soulscript::errors::{AIError, AppError, ParseError};
use soulscript::guidance::{ChallengeId, GuidanceOrigin, Theme};
use soulscript::ops::{self, GuidanceContext};
use soulscript::store::{HistoryStore, MemoryStore};

const MODEL: &str = "gemini-1.5-flash";
const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

/// Wraps `text` the way the API returns a single candidate.
fn generation_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
    .to_string()
}

fn client_for(server: &Server) -> GeminiClient {
    GeminiClient::new(server.url(), "test-key", MODEL).unwrap()
}

fn remote_context(server: &Server) -> GuidanceContext {
    GuidanceContext::new(Box::new(MemoryStore::new()), Some(client_for(server)), Some(1))
}

#[test]
fn test_generate_returns_first_candidate_text() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [ { "parts": [ { "text": "Say hello" } ] } ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(generation_body("Hello, friend"))
        .create();

    let text = client_for(&server)
        .generate("Say hello", GenerationOptions::default())
        .unwrap();

    assert_eq!(text, "Hello, friend");
    mock.assert();
}

#[test]
fn test_generate_sends_creative_options() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "generationConfig": { "topK": 40 }
        })))
        .with_status(200)
        .with_body(generation_body("ok"))
        .create();

    client_for(&server)
        .generate("wisdom please", GenerationOptions::creative())
        .unwrap();
    mock.assert();
}

#[test]
fn test_invalid_key_is_reported() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error": {"status": "INVALID_ARGUMENT", "details": [{"reason": "API_KEY_INVALID"}]}}"#)
        .create();

    let err = client_for(&server)
        .generate("hi", GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(err, AppError::AI(AIError::InvalidApiKey)));
}

#[test]
fn test_rate_limit_is_quota_exceeded() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#)
        .create();

    let err = client_for(&server)
        .generate("hi", GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(err, AppError::AI(AIError::QuotaExceeded)));
}

#[test]
fn test_server_error_is_invalid_response() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal")
        .create();

    let err = client_for(&server)
        .generate("hi", GenerationOptions::default())
        .unwrap_err();
    match err {
        AppError::AI(AIError::InvalidResponse(msg)) => assert!(msg.contains("500")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_empty_candidates_is_invalid_response() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create();

    let err = client_for(&server)
        .generate("hi", GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(err, AppError::AI(AIError::InvalidResponse(_))));
}

#[test]
fn test_unreachable_host() {
    let client = GeminiClient::new("http://127.0.0.1:9", "test-key", MODEL).unwrap();
    let err = client
        .generate("hi", GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(err, AppError::AI(AIError::Unreachable(_))));
}

#[test]
fn test_request_tags_wisdom_and_samples_creatively() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "generationConfig": { "topK": 40 }
        })))
        .with_status(200)
        .with_body(generation_body(
            r#"{"verse": "Be still", "source": "Psalm 46:10", "meaning": "Rest", "reflectionQuestion": "Where?"}"#,
        ))
        .create();

    let result = client_for(&server)
        .request(RemoteKind::Wisdom, "wisdom please")
        .unwrap();

    assert!(matches!(result, RemoteResult::Wisdom(_)));
    assert_eq!(result.into_wisdom().unwrap().verse, "Be still");
    mock.assert();
}

#[test]
fn test_request_result_of_other_kind_is_rejected() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(generation_body(
            r#"{"patterns": "Growth", "growth": "Steady", "focus": "Keep going"}"#,
        ))
        .create();

    let result = client_for(&server)
        .request(RemoteKind::Journey, "journey please")
        .unwrap();

    assert!(matches!(
        result.into_challenge(),
        Err(ParseError::WrongKind { expected: "challenge", found: "journey" })
    ));
}

#[test]
fn test_blank_key_is_not_configured() {
    let err = GeminiClient::new("http://localhost", "  ", MODEL).unwrap_err();
    assert!(matches!(err, AppError::AI(AIError::NotConfigured)));
}

#[test]
fn test_reflect_uses_remote_answer() {
    let mut server = Server::new();
    let answer = "Here you go:\n```json\n{\"theme\": \"Hope & Renewal\", \"verse\": \"Weeping may stay for the night, but rejoicing comes in the morning.\", \"source\": \"Psalm 30:5\", \"meaning\": \"Night ends.\", \"affirmation\": \"I trust the morning.\", \"isVenting\": false, \"mood\": \"hopeful\"}\n```";
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(generation_body(answer))
        .create();

    let mut ctx = remote_context(&server);
    let outcome = ops::reflect("Things are hard but I see light", &mut ctx).unwrap();

    assert!(outcome.fallback_reason.is_none());
    assert_eq!(outcome.entry.origin, GuidanceOrigin::Remote);
    assert_eq!(outcome.entry.theme, Theme::Freeform("Hope & Renewal".to_string()));
    assert_eq!(outcome.entry.citation, "Psalm 30:5");
    assert_eq!(outcome.entry.mood.as_deref(), Some("hopeful"));
    assert_eq!(ctx.store().load().unwrap(), vec![outcome.entry]);
}

#[test]
fn test_reflect_falls_back_on_quota() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(429)
        .create();

    let mut ctx = remote_context(&server);
    let outcome = ops::reflect("I am so anxious about tomorrow", &mut ctx).unwrap();

    let reason = outcome.fallback_reason.expect("fallback reason");
    assert!(reason.contains("quota"));
    assert_eq!(outcome.entry.origin, GuidanceOrigin::Local);
    assert_eq!(outcome.entry.theme.label(), "Fear & Anxiety");
    assert_eq!(ctx.store().load().unwrap().len(), 1);
}

#[test]
fn test_reflect_falls_back_on_unparseable_answer() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(generation_body("I'm sorry, I can't help with that."))
        .create();

    let mut ctx = remote_context(&server);
    let outcome = ops::reflect("I feel lost", &mut ctx).unwrap();

    assert!(outcome.fallback_reason.is_some());
    assert_eq!(outcome.entry.origin, GuidanceOrigin::Local);
}

#[test]
fn test_challenge_remote_fills_missing_title() {
    let mut server = Server::new();
    let answer = r#"{"verse": "Blessed are those who mourn, for they will be comforted.", "source": "Matthew 5:4", "guidance": "Grief is love.", "action": "Light a candle."}"#;
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(generation_body(answer))
        .create();

    let mut ctx = remote_context(&server);
    let outcome = ops::challenge(ChallengeId::Loss, &mut ctx).unwrap();

    assert!(outcome.fallback_reason.is_none());
    assert_eq!(outcome.value.source, "Matthew 5:4");
    assert!(!outcome.value.challenge.is_empty());
}

#[test]
fn test_wisdom_and_journey_fall_back_when_missing_fields() {
    let mut server = Server::new();
    server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(generation_body(r#"{"verse": "", "source": ""}"#))
        .expect_at_least(1)
        .create();

    let mut ctx = GuidanceContext::new(
        Box::new(MemoryStore::with_entries(vec![
            soulscript::guidance::compose_guidance_entry("I am afraid"),
        ])),
        Some(client_for(&server)),
        Some(3),
    );

    let wisdom = ops::wisdom(&mut ctx).unwrap();
    assert!(wisdom.fallback_reason.is_some());
    assert!(!wisdom.value.verse.is_empty());

    let journey = ops::journey(&mut ctx).unwrap();
    assert!(journey.fallback_reason.is_some());
    assert!(journey.value.growth.starts_with("These 1 early reflections"));
}
