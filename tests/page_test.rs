mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{StubReply, StubServer};
use prime_search::config::ApiConfig;
use prime_search::{
    ApiClient, ArgInput, BufferSink, ClientError, Endpoint, PrimePage, RequestNumber,
};

fn page(server: &StubServer, raw: &str) -> PrimePage<ArgInput, BufferSink> {
    let client = ApiClient::with_base_url(&server.base_url()).unwrap();
    PrimePage::new(client, ArgInput(raw.to_string()), BufferSink::new())
}

#[tokio::test]
async fn test_nth_prime_end_to_end() {
    let server = StubServer::start([(
        "nth_prime",
        StubReply::ok(r#"{"status":"ok", "result":11}"#),
    )])
    .await;

    let mut page = page(&server, "5");
    let reply = page.get_nth_prime().await.unwrap();

    assert!(reply.is_ok());
    assert_eq!(page.sink().text(), Some("11"));
    assert_eq!(server.bodies(), vec!["n=5"]);
}

#[tokio::test]
async fn test_request_is_form_encoded() {
    let server = StubServer::start([(
        "prime_count",
        StubReply::ok(r#"{"status":"ok","result":4}"#),
    )])
    .await;

    page(&server, "10").get_prime_count().await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, "prime_count");
    assert_eq!(requests[0].body, "n=10");
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
}

#[tokio::test]
async fn test_non_numeric_input_sends_nan() {
    let server = StubServer::start([(
        "nth_prime",
        StubReply::json(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error", "message":"Value for 'n' parameter not a number: \"NaN\""}"#,
        ),
    )])
    .await;

    for raw in ["", "abc", "  ", "-"] {
        page(&server, raw).get_nth_prime().await.unwrap();
    }

    assert_eq!(server.bodies(), vec!["n=NaN"; 4]);
}

#[tokio::test]
async fn test_error_reply_renders_message_even_on_400() {
    let server = StubServer::start([(
        "nth_prime",
        StubReply::json(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error", "message":"Zero is not accepted"}"#,
        ),
    )])
    .await;

    let mut page = page(&server, "0");
    let reply = page.get_nth_prime().await.unwrap();

    assert!(!reply.is_ok());
    assert_eq!(page.sink().text(), Some("Error: Zero is not accepted"));
}

#[tokio::test]
async fn test_results_rendered_exactly() {
    let cases = [
        ("2", "2"),
        ("7919", "7919"),
        (r#""541""#, "541"),
        ("1.5", "1.5"),
        ("2.0", "2"),
        ("null", ""),
        ("[2,3]", "2,3"),
    ];
    for (result, shown) in cases {
        let body = format!(r#"{{"status":"ok","result":{result}}}"#);
        let server = StubServer::start([("nth_prime", StubReply::ok(&body))]).await;

        let mut page = page(&server, "1");
        page.get_nth_prime().await.unwrap();
        assert_eq!(page.sink().text(), Some(shown));
    }
}

#[tokio::test]
async fn test_triggers_only_call_their_own_endpoint() {
    let server = StubServer::start([
        ("nth_prime", StubReply::ok(r#"{"status":"ok","result":29}"#)),
        ("prime_count", StubReply::ok(r#"{"status":"ok","result":10}"#)),
    ])
    .await;

    let mut page = page(&server, "10");
    page.get_nth_prime().await.unwrap();
    assert_eq!(server.endpoints(), vec!["nth_prime"]);
    assert_eq!(page.sink().text(), Some("29"));

    page.get_prime_count().await.unwrap();
    assert_eq!(server.endpoints(), vec!["nth_prime", "prime_count"]);
    assert_eq!(page.sink().text(), Some("10"));
}

#[tokio::test]
async fn test_malformed_json_leaves_sink_untouched() {
    let server = StubServer::start([
        ("nth_prime", StubReply::ok(r#"{"status":"ok","result":3}"#)),
        ("prime_count", StubReply::ok("<html>oops</html>")),
    ])
    .await;

    let mut page = page(&server, "2");
    page.get_nth_prime().await.unwrap();

    let err = page.get_prime_count().await.unwrap_err();
    match err {
        ClientError::Decode { preview, .. } => assert_eq!(preview, "<html>oops</html>"),
        other => panic!("expected decode error, got {other:?}"),
    }
    assert_eq!(page.sink().text(), Some("3"));
}

#[tokio::test]
async fn test_unknown_route_is_a_decode_error() {
    let server = StubServer::start(Vec::<(&str, StubReply)>::new()).await;

    let err = page(&server, "5").get_nth_prime().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::with_base_url(&format!("http://{addr}/api/")).unwrap();
    let mut page = PrimePage::new(client, ArgInput("5".to_string()), BufferSink::new());

    let err = page.get_nth_prime().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
    assert_eq!(page.sink().text(), None);
}

#[tokio::test]
async fn test_configured_timeout() {
    let server = StubServer::start([(
        "nth_prime",
        StubReply::ok(r#"{"status":"ok","result":2}"#).delayed(Duration::from_secs(5)),
    )])
    .await;

    let client = ApiClient::new(&ApiConfig {
        base_url: server.base_url(),
        timeout_secs: Some(1),
    })
    .unwrap();

    let err = client.nth_prime(&RequestNumber::from(1)).await.unwrap_err();
    match err {
        ClientError::Transport { source, .. } => assert!(source.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_strict_mode_sends_nothing_for_nan() {
    let server = StubServer::start([(
        "nth_prime",
        StubReply::ok(r#"{"status":"ok","result":2}"#),
    )])
    .await;

    let mut page = page(&server, "ten").strict_input(true);
    let err = page.trigger(Endpoint::NthPrime).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidInput { .. }));
    assert!(server.requests().is_empty());
    assert_eq!(page.sink().text(), None);
}

#[tokio::test]
async fn test_client_fetch_returns_parsed_reply() {
    let server = StubServer::start([(
        "prime_count",
        StubReply::ok(r#"{"status":"ok","result":168}"#),
    )])
    .await;

    let client = ApiClient::with_base_url(&server.base_url()).unwrap();
    let reply = client.prime_count(&RequestNumber::parse("1000")).await.unwrap();

    assert_eq!(reply.result, Some(serde_json::json!(168)));
    assert_eq!(server.bodies(), vec!["n=1000"]);
}

#[tokio::test]
async fn test_null_reply_leaves_sink_untouched() {
    let server = StubServer::start([
        ("nth_prime", StubReply::ok(r#"{"status":"ok","result":5}"#)),
        ("prime_count", StubReply::ok("null")),
    ])
    .await;

    let mut page = page(&server, "3");
    page.get_nth_prime().await.unwrap();

    let err = page.get_prime_count().await.unwrap_err();
    assert!(matches!(err, ClientError::NullReply { .. }));
    assert_eq!(page.sink().text(), Some("5"));
}

#[tokio::test]
async fn test_non_object_reply_renders_undefined_message() {
    let server = StubServer::start([("nth_prime", StubReply::ok(r#""ok""#))]).await;

    let mut page = page(&server, "3");
    page.get_nth_prime().await.unwrap();
    assert_eq!(page.sink().text(), Some("Error: undefined"));
}
