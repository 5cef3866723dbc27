// OpenAI wire-format tests against a mock completion service

use auramind::{
    chat::{ChatError, ChatService},
    crisis::CrisisDetector,
    providers::{LlmProvider, OpenAIProvider},
    relay::ChatRelay,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

const KEY_ENV: &str = "AURAMIND_TEST_OPENAI_KEY";

fn provider(base_url: &str) -> OpenAIProvider {
    std::env::set_var(KEY_ENV, "sk-test");
    OpenAIProvider::with_base_url(base_url)
        .unwrap()
        .with_api_key_env(KEY_ENV)
}

#[tokio::test]
async fn test_chat_completion_request_and_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "gpt-4.1-mini", "max_tokens": 300})),
            Matcher::Regex("You are AuraMind".to_string()),
            Matcher::Regex("I feel lonely lately".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "model": "gpt-4.1-mini",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello, how can I help?"},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let relay = ChatRelay::new(Arc::new(provider(&server.url())));
    let service = ChatService::new(CrisisDetector::default(), relay);

    let response = service.handle("I feel lonely lately").await.unwrap();
    assert_eq!(response.message, "Hello, how can I help?");
    assert!(!response.is_crisis);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_is_single_attempt_upstream_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_body(r#"{"error": {"message": "Rate limit reached"}}"#)
        .expect(1)
        .create_async()
        .await;

    let relay = ChatRelay::new(Arc::new(provider(&server.url())));
    let service = ChatService::new(CrisisDetector::default(), relay);

    let err = service.handle("hello").await.unwrap_err();
    assert!(matches!(err, ChatError::Upstream(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"unexpected\": true}")
        .create_async()
        .await;

    let provider = provider(&server.url());
    let request = ChatRelay::build_request("hello");

    let err = provider.send_message(&request).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse OpenAI API response"));
}
