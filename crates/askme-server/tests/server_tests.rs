mod common;

use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};

#[tokio::test]
async fn test_health_and_ready() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("server");
    let client = TestClient::new(server.url());

    assert_eq!(client.health().await.expect("health").status, "ok");

    let ready = client.ready().await.expect("ready");
    assert!(ready.is_ok());
    assert_eq!(ready.entries, 3);
    assert_eq!(ready.vectorizer, "tfidf");
    assert_eq!(ready.fingerprint.len(), 16);

    server.shutdown().await;
}

#[tokio::test]
async fn test_query_bands_over_http() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("server");
    let client = TestClient::new(server.url());

    let (response, route) = client
        .query("voces entregam aos domingos")
        .await
        .expect("query");
    assert_eq!(route, "answered");
    assert_eq!(
        response.answer,
        "Sim, entregamos aos domingos das 10h às 16h."
    );
    assert!(response.confidence > 0.60);

    let (response, route) = client.query("entregam domingo?").await.expect("query");
    assert_eq!(route, "clarify");
    assert_eq!(response.answer, askme::CLARIFY_MESSAGE);
    assert!((response.confidence - 0.428_89).abs() < 1e-4);

    let (response, route) = client
        .query("previsão do tempo amanhã")
        .await
        .expect("query");
    assert_eq!(route, "out_of_scope");
    assert_eq!(response.answer, askme::OUT_OF_SCOPE_MESSAGE);
}

#[tokio::test]
async fn test_empty_query_over_http() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("server");
    let client = TestClient::new(server.url());

    for body in [
        serde_json::json!({}),
        serde_json::json!({"q": ""}),
        serde_json::json!({"q": ["horario"]}),
    ] {
        match client.query_raw(body.clone()).await {
            Err(TestClientError::BadRequest(err)) => {
                assert_eq!(err.error, "query vazia");
                assert_eq!(err.code, 400);
            }
            other => panic!("expected 400 for {body}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_parallel_scoring_over_http() {
    let server = spawn_test_server(TestServerConfig {
        parallel_threshold: 0,
        ..Default::default()
    })
    .await
    .expect("server");
    let client = TestClient::new(server.url());

    let (response, route) = client
        .query("qual o horario de funcionamento")
        .await
        .expect("query");
    assert_eq!(route, "answered");
    assert_eq!(response.answer, "Funcionamos das 9h às 18h.");
}

#[tokio::test]
async fn test_malformed_faq_fails_startup() {
    let result = spawn_test_server(TestServerConfig {
        faq_json: r#"{"perguntas": {"1": "a"}, "respostas": {}}"#.to_string(),
        ..Default::default()
    })
    .await;

    assert!(matches!(
        result,
        Err(common::harness::ServerStartupError::StartupFailed(_))
    ));
}
