use hurl_lib::{AuthScheme, ReqwestTransport, RequestExecutor, RequestSpec};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_get_records_wire_headers_and_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get"))
        .and(header("x-trace", "abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-served-by", "mock")
                .set_body_raw(r#"{"a":1}"#, "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(format!("{}/get?q=1", mock_server.uri()));
    spec.header_keys = strings(&["X-Trace", "X-Skipped"]);
    spec.header_vals = strings(&["abc", ""]);

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();

    assert_eq!(exchange.sent_header_lines[0], "GET /get?q=1 HTTP/1.1");
    assert!(exchange.sent_header_lines[1].starts_with("host: 127.0.0.1:"));
    assert!(exchange
        .sent_header_lines
        .iter()
        .any(|line| line == "x-trace: abc"));
    assert!(exchange
        .sent_header_lines
        .iter()
        .any(|line| line.starts_with("user-agent: hurl/")));
    assert!(!exchange
        .sent_header_lines
        .iter()
        .any(|line| line.starts_with("x-skipped")));

    assert!(exchange.response_headers.starts_with("HTTP/1.1 200 OK"));
    assert!(exchange.response_headers.contains("x-served-by: mock"));
    assert_eq!(exchange.content_type.as_deref(), Some("application/json"));
    assert_eq!(exchange.response_body, r#"{"a":1}"#);
}

#[tokio::test]
async fn test_basic_auth_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Basic dTpw"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(mock_server.uri());
    spec.auth = AuthScheme::Basic;
    spec.username = Some("u".to_string());
    spec.password = Some("p".to_string());

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();
    assert!(exchange
        .sent_header_lines
        .contains(&"authorization: Basic dTpw".to_string()));
}

#[tokio::test]
async fn test_post_fields_are_form_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("a=1&b=two+words&a=2"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(format!("{}/submit", mock_server.uri()));
    spec.method = Some("post".to_string());
    spec.param_keys = strings(&["a", "b", "skipped", "a"]);
    spec.param_vals = strings(&["1", "two words", "", "2"]);

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();

    assert_eq!(exchange.outbound_body.echo(), "a=1&b=two words&a=2");
    assert!(exchange
        .sent_header_lines
        .contains(&"content-length: 19".to_string()));
}

#[tokio::test]
async fn test_raw_json_body_is_labelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"hurl"}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(format!("{}/items/1", mock_server.uri()));
    spec.method = Some("PUT".to_string());
    spec.post_body = Some(r#"{"name":"hurl"}"#.to_string());
    spec.param_keys = strings(&["ignored"]);
    spec.param_vals = strings(&["field"]);

    RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_explicit_content_type_is_kept_for_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(mock_server.uri());
    spec.method = Some("POST".to_string());
    spec.post_body = Some("[1, 2]".to_string());
    spec.header_keys = strings(&["Content-Type"]);
    spec.header_vals = strings(&["text/plain"]);

    RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_field_body_keeps_user_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("content-type", "text/plain"))
        .and(body_string("a=1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(mock_server.uri());
    spec.method = Some("POST".to_string());
    spec.header_keys = strings(&["Content-Type"]);
    spec.header_vals = strings(&["text/plain"]);
    spec.param_keys = strings(&["a"]);
    spec.param_vals = strings(&["1"]);

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();
    let content_types: Vec<_> = exchange
        .sent_header_lines
        .iter()
        .filter(|line| line.starts_with("content-type:"))
        .collect();
    assert_eq!(content_types, vec!["content-type: text/plain"]);
}

#[tokio::test]
async fn test_explicit_host_header_is_listed_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("host", "virtual.example"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut spec = RequestSpec::new(mock_server.uri());
    spec.header_keys = strings(&["Host"]);
    spec.header_vals = strings(&["virtual.example"]);

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&spec)
        .await
        .unwrap();
    let hosts: Vec<_> = exchange
        .sent_header_lines
        .iter()
        .filter(|line| line.starts_with("host:"))
        .collect();
    assert_eq!(hosts, vec!["host: virtual.example"]);
}

#[tokio::test]
async fn test_body_is_decoded_with_declared_charset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"caf\xe9".to_vec(), "text/plain; charset=iso-8859-1"),
        )
        .mount(&mock_server)
        .await;

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&RequestSpec::new(mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(exchange.response_body, "café");
}

#[tokio::test]
async fn test_redirects_follow_the_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("arrived"))
        .mount(&mock_server)
        .await;

    let executor = RequestExecutor::new(ReqwestTransport::new());
    let mut spec = RequestSpec::new(format!("{}/old", mock_server.uri()));

    let exchange = executor.execute(&spec).await.unwrap();
    assert!(exchange.response_headers.starts_with("HTTP/1.1 302 Found"));
    assert!(exchange.response_headers.contains("location: /new"));

    spec.follow_redirects = true;
    let exchange = executor.execute(&spec).await.unwrap();
    assert!(exchange.response_headers.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(exchange.response_body, "arrived");
}

#[tokio::test]
async fn test_js_url_overrides_declared_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bundle.js"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[1]", "text/plain"))
        .mount(&mock_server)
        .await;

    let exchange = RequestExecutor::new(ReqwestTransport::new())
        .execute(&RequestSpec::new(format!("{}/bundle.js", mock_server.uri())))
        .await
        .unwrap();
    assert_eq!(exchange.content_type.as_deref(), Some("text/javascript"));
}

#[tokio::test]
async fn test_connection_failure_is_an_execution_error() {
    let err = RequestExecutor::new(ReqwestTransport::new())
        .execute(&RequestSpec::new("http://127.0.0.1:1/"))
        .await
        .unwrap_err();
    assert!(!err.message.is_empty());
}
