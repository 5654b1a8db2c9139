//! Integration tests for `HyperTransport` using wiremock.

use assert2::check;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use consign::{HyperTransport, Method, Transport, TransportFailure, TransportOptions};

fn endpoint(server: &MockServer, path: &str) -> url::Url {
    url::Url::parse(&format!("{}{path}", server.uri())).expect("url")
}

#[tokio::test]
async fn get_request_collects_the_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("pong"),
        )
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::new();
    let response = transport
        .execute(
            Method::Get,
            endpoint(&mock_server, "/ping"),
            TransportOptions::default(),
        )
        .await
        .expect("response");

    check!(response.status() == 200);
    check!(response.text() == "pong");
    check!(response.content_type() == Some("text/plain"));
}

#[tokio::test]
async fn query_options_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pvzlist.php"))
        .and(query_param("cityid", "44"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::new();
    let options = TransportOptions {
        query: vec![("cityid".to_string(), "44".to_string())],
        ..TransportOptions::default()
    };

    let response = transport
        .execute(Method::Get, endpoint(&mock_server, "/pvzlist.php"), options)
        .await
        .expect("response");

    check!(response.is_success());
}

#[tokio::test]
async fn form_options_become_a_urlencoded_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/status_report_h.php"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("xml_request=%3CStatusReport"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::new();
    let options = TransportOptions {
        form: vec![(
            "xml_request".to_string(),
            "<StatusReport/>".to_string(),
        )],
        ..TransportOptions::default()
    };

    let response = transport
        .execute(
            Method::Post,
            endpoint(&mock_server, "/status_report_h.php"),
            options,
        )
        .await
        .expect("response");

    check!(response.is_success());
}

#[tokio::test]
async fn raw_body_and_headers_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/calculator/calculate_price_by_json.php"))
        .and(header("Content-Type", "application/json"))
        .and(body_string_contains(r#""tariffId":1"#))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("{}"),
        )
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::new();
    let options = TransportOptions {
        body: Some(r#"{"tariffId":1}"#.to_string()),
        headers: [("Content-Type".to_string(), "application/json".to_string())]
            .into_iter()
            .collect(),
        ..TransportOptions::default()
    };

    let response = transport
        .execute(
            Method::Post,
            endpoint(&mock_server, "/calculator/calculate_price_by_json.php"),
            options,
        )
        .await
        .expect("response");

    check!(response.is_success());
}

#[tokio::test]
async fn error_status_surfaces_with_the_response_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::new();
    let failure = transport
        .execute(
            Method::Get,
            endpoint(&mock_server, "/broken"),
            TransportOptions::default(),
        )
        .await
        .expect_err("error status");

    let TransportFailure::WithResponse { response, source } = failure else {
        panic!("expected a failure with a readable response");
    };
    check!(response.status() == 500);
    check!(response.text() == "boom");
    check!(source.status() == Some(500));
}

#[tokio::test]
async fn connection_failure_has_no_response() {
    // Nothing listens on this port.
    let transport = HyperTransport::new();
    let failure = transport
        .execute(
            Method::Get,
            url::Url::parse("http://127.0.0.1:9/down").expect("url"),
            TransportOptions::default(),
        )
        .await
        .expect_err("connection failure");

    check!(matches!(failure, TransportFailure::WithoutResponse(_)));
}
