use std::time::Duration;

use desk_engine::{ClientSettings, OpenAiClient, PromptPair, TextGenerationClient, UpstreamError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn prompt() -> PromptPair {
    PromptPair {
        system: "You are a financial news curator.".to_string(),
        user: "Generate 5 recent business headlines from Mint.".to_string(),
    }
}

fn completion(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

fn client_for(server: &MockServer, settings: ClientSettings) -> OpenAiClient {
    OpenAiClient::new(&format!("{}/v1/", server.uri()), "sk-test", &settings).expect("client")
}

#[tokio::test]
async fn sends_role_tagged_messages_and_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                { "role": "system", "content": "You are a financial news curator." },
                { "role": "user", "content": "Generate 5 recent business headlines from Mint." }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("📍 Sensex gains"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientSettings::default());
    assert!(client.endpoint().ends_with("/v1/chat/completions"));
    let text = client.generate(&prompt(), "gpt-3.5-turbo").await.expect("generate ok");
    assert_eq!(text, "📍 Sensex gains");
}

#[tokio::test]
async fn rejected_request_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientSettings::default());
    let err = client.generate(&prompt(), "gpt-3.5-turbo").await.unwrap_err();
    assert_eq!(
        err,
        UpstreamError::Rejected {
            status: 401,
            message: "invalid api key".to_string()
        }
    );
}

#[tokio::test]
async fn missing_or_blank_content_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(null))))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientSettings::default());
    let err = client.generate(&prompt(), "gpt-3.5-turbo").await.unwrap_err();
    assert_eq!(err, UpstreamError::EmptyContent);
}

#[tokio::test]
async fn no_choices_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientSettings::default());
    let err = client.generate(&prompt(), "gpt-3.5-turbo").await.unwrap_err();
    assert_eq!(err, UpstreamError::EmptyContent);
}

#[tokio::test]
async fn garbage_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientSettings::default());
    let err = client.generate(&prompt(), "gpt-3.5-turbo").await.unwrap_err();
    assert!(matches!(err, UpstreamError::MalformedResponse(_)));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(completion(json!("late"))),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = client_for(&server, settings);
    let err = client.generate(&prompt(), "gpt-3.5-turbo").await.unwrap_err();
    assert_eq!(err, UpstreamError::Timeout);
}
