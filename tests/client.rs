use serde_json::{Value, json};
use tubeflow::{AutomationStyle, Config, FlowGenerator, GenerateParams, LlmConfig, NodeType, build_fallback_flow, default_config};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn generator(mock_server: &MockServer) -> FlowGenerator {
    let config = Config {
        llm: LlmConfig {
            api_key: Some("sk-test".to_string()),
            base_url: format!("{}/v1", mock_server.uri()),
            ..LlmConfig::default()
        },
    };
    FlowGenerator::from_config(&config).unwrap()
}

fn params() -> GenerateParams {
    GenerateParams::new("Grow subscribers", AutomationStyle::Growth).tone("friendly")
}

fn completion(content: &str) -> Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

#[tokio::test]
async fn test_server_error_falls_back_with_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST")).and(path(COMPLETIONS_PATH)).respond_with(ResponseTemplate::new(500).set_body_string("boom")).expect(1).mount(&mock_server).await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;

    assert!(generation.is_fallback());
    let reason = generation.reason().unwrap();
    assert_eq!(reason.code(), "transport");
    assert!(reason.to_string().contains("500"));
    assert_eq!(generation.into_flow(), build_fallback_flow(&params()));
}

#[tokio::test]
async fn test_unauthorized_falls_back_with_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "Incorrect API key provided"}})))
        .mount(&mock_server)
        .await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;
    assert_eq!(generation.reason().map(|r| r.code()), Some("transport"));
}

#[tokio::test]
async fn test_fenced_completion_is_normalized() {
    let mock_server = MockServer::start().await;

    let content = "```json\n{\"name\":\"Radar\",\"goal\":\"Watch uploads\",\"nodes\":[{\"id\":\"a\",\"type\":\"zzz\",\"name\":\"Mystery\"},{\"id\":\"b\",\"type\":\"youtube.search\",\"name\":\"Search\",\"config\":{\"query\":\"rust\"}}],\"edges\":[{\"id\":\"e1\",\"source\":\"a\",\"target\":\"b\"}]}\n```";
    Mock::given(method("POST")).and(path(COMPLETIONS_PATH)).respond_with(ResponseTemplate::new(200).set_body_json(completion(content))).mount(&mock_server).await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;
    assert!(!generation.is_fallback());

    let flow = generation.into_flow();
    assert_eq!(flow.name, "Radar");
    assert_eq!(flow.nodes[0].node_type, NodeType::HttpRequest);
    assert_eq!(flow.nodes[0].config, default_config(NodeType::HttpRequest));
    assert_eq!(flow.nodes[1].node_type, NodeType::YoutubeSearch);
    assert_eq!(flow.nodes[1].config.get("query"), Some(&json!("rust")));
    assert_eq!(flow.edges.len(), 1);
}

#[tokio::test]
async fn test_non_envelope_body_falls_back_with_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST")).and(path(COMPLETIONS_PATH)).respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>")).mount(&mock_server).await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;
    assert_eq!(generation.reason().map(|r| r.code()), Some("transport"));
    assert_eq!(generation.into_flow(), build_fallback_flow(&params()));
}

#[tokio::test]
async fn test_empty_content_is_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST")).and(path(COMPLETIONS_PATH)).respond_with(ResponseTemplate::new(200).set_body_json(completion(""))).mount(&mock_server).await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;
    assert_eq!(generation.reason().map(|r| r.code()), Some("malformed_json"));
}

#[tokio::test]
async fn test_null_content_is_schema_violation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": [{"message": {"content": null}}]})))
        .mount(&mock_server)
        .await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;
    assert_eq!(generation.reason().map(|r| r.code()), Some("schema_violation"));
}

#[tokio::test]
async fn test_request_body_and_headers() {
    let mock_server = MockServer::start().await;

    // unmatched requests get a 404 from the mock server, which would fall back
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer sk-test"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini", "temperature": 0.4, "max_tokens": 800})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(r#"{"name":"n","goal":"g","nodes":[],"edges":[]}"#)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generation = generator(&mock_server).generate_detailed(&params()).await;
    assert!(!generation.is_fallback());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], json!("system"));
    assert_eq!(messages[1]["role"], json!("user"));
    assert!(messages[1]["content"].as_str().unwrap().contains("Grow subscribers"));
}
