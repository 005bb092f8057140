use httpmock::Method::POST;
use httpmock::{Mock, MockServer, Then, When};
use oopspam_client::config::Config;
use oopspam_client::{OopSpamClient, OopSpamError, SpamDetectionRequest};
use serde_json::{json, Value};

const API_KEY: &str = "test-api-key";

fn config_for(base_url: String) -> Config {
    Config::builder().api_key(API_KEY).base_url(base_url).build()
}

fn client_for(server: &MockServer) -> OopSpamClient {
    OopSpamClient::new(config_for(server.base_url())).unwrap()
}

fn sample_request() -> SpamDetectionRequest {
    SpamDetectionRequest::builder()
        .sender_ip("91.203.67.110")
        .email("testing@example.com")
        .content("Dear Agent, We are a manufacturing company which specializes in supplying Aluminum Rod with Zinc Alloy Rod to customers worldwide, based in Japan, Asia.")
        .check_for_length(true)
        .allowed_languages(vec!["en".to_string()])
        .allowed_countries(vec!["us".to_string(), "ca".to_string()])
        .build()
}

fn sample_request_json() -> Value {
    json!({
        "senderIP": "91.203.67.110",
        "email": "testing@example.com",
        "content": "Dear Agent, We are a manufacturing company which specializes in supplying Aluminum Rod with Zinc Alloy Rod to customers worldwide, based in Japan, Asia.",
        "checkForLength": true,
        "allowedLanguages": ["en"],
        "allowedCountries": ["us", "ca"],
    })
}

fn spam_reply_json() -> Value {
    json!({
        "Score": 4,
        "Details": {
            "isIPBlocked": false,
            "isEmailBlocked": true,
            "isContentSpam": "spam",
            "langMatch": true,
            "countryMatch": false,
            "numberOfSpamWords": 1,
            "spamWords": ["worldwide"],
            "isContentTooShort": false
        }
    })
}

/// Match a POST to `path` carrying both headers every request must send
fn authenticated_post(when: When, path: &str) -> When {
    when.method(POST)
        .path(path)
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
}

// httpmock has separate blocking and async entry points; pick the one
// matching the client flavour under test.

#[maybe_async::sync_impl]
fn start_server() -> MockServer {
    MockServer::start()
}

#[maybe_async::async_impl]
async fn start_server() -> MockServer {
    MockServer::start_async().await
}

#[maybe_async::sync_impl]
fn mock_on<'a, F: FnOnce(When, Then)>(server: &'a MockServer, config: F) -> Mock<'a> {
    server.mock(config)
}

#[maybe_async::async_impl]
async fn mock_on<'a, F: FnOnce(When, Then)>(server: &'a MockServer, config: F) -> Mock<'a> {
    server.mock_async(config).await
}

#[maybe_async::sync_impl]
fn assert_hits(mock: &Mock<'_>, hits: usize) {
    mock.assert_hits(hits);
}

#[maybe_async::async_impl]
async fn assert_hits(mock: &Mock<'_>, hits: usize) {
    mock.assert_hits_async(hits).await;
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn check_spam_sends_exact_fields_and_returns_reply() {
    let server = start_server().await;
    let mock = mock_on(&server, |when, then| {
        authenticated_post(when, "/spamdetection").json_body(sample_request_json());
        then.status(200).json_body(spam_reply_json());
    })
    .await;

    let reply = client_for(&server).check_spam(&sample_request()).await.unwrap();

    assert_hits(&mock, 1).await;
    assert_eq!(reply.score, 4);
    assert!(!reply.details.is_ip_blocked);
    assert!(reply.details.is_email_blocked);
    assert_eq!(reply.details.is_content_spam, "spam");
    assert!(reply.details.lang_match);
    assert!(!reply.details.country_match);
    assert_eq!(reply.details.number_of_spam_words, 1);
    assert_eq!(reply.details.spam_words, vec!["worldwide"]);
    assert!(!reply.details.is_content_too_short);
}

#[cfg(feature = "sync")]
#[test]
fn check_spam_sync_uses_config() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        authenticated_post(when, "/spamdetection");
        then.status(200).json_body(json!({"Score": 0, "Details": {}}));
    });

    let reply = oopspam_client::check_spam_sync(&config_for(server.base_url()), &sample_request()).unwrap();

    mock.assert();
    assert_eq!(reply.score, 0);
    assert!(reply.details.spam_words.is_empty());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn check_spam_async_uses_config() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            authenticated_post(when, "/spamdetection");
            then.status(200).json_body(json!({"Score": 0, "Details": {}}));
        })
        .await;

    let reply = oopspam_client::check_spam_async(&config_for(server.base_url()), &sample_request())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply.score, 0);
    assert!(reply.details.spam_words.is_empty());
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn domain_reputation_not_blocked() {
    let server = start_server().await;
    let mock = mock_on(&server, |when, then| {
        authenticated_post(when, "/reputation/domain").json_body(json!({"domain": "example.com"}));
        then.status(200).json_body(json!({"Blocked": false, "Blocker": []}));
    })
    .await;

    let reply = client_for(&server).check_domain_reputation("example.com").await.unwrap();

    assert_hits(&mock, 1).await;
    assert!(!reply.blocked);
    assert!(reply.blocker.is_empty());
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn report_sends_request_fields_with_correction() {
    let server = start_server().await;
    let mut expected = sample_request_json();
    expected["shouldBeSpam"] = json!(false);
    let mock = mock_on(&server, |when, then| {
        authenticated_post(when, "/spamdetection/report").json_body(expected);
        then.status(200);
    })
    .await;

    client_for(&server).report_spam(&sample_request(), false).await.unwrap();

    assert_hits(&mock, 1).await;
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn report_ignores_non_json_body() {
    let server = start_server().await;
    let mut expected = sample_request_json();
    expected["shouldBeSpam"] = json!(true);
    let mock = mock_on(&server, |when, then| {
        authenticated_post(when, "/spamdetection/report").json_body(expected);
        then.status(200).body("thanks!");
    })
    .await;

    client_for(&server).report_spam(&sample_request(), true).await.unwrap();

    assert_hits(&mock, 1).await;
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn error_statuses_surface_as_api_errors() {
    for status in [401u16, 429, 500] {
        let server = start_server().await;
        mock_on(&server, |when, then| {
            authenticated_post(when, "/spamdetection");
            then.status(status).body("{\"message\":\"nope\"}");
        })
        .await;

        let err = client_for(&server).check_spam(&sample_request()).await.unwrap_err();
        match err {
            OopSpamError::ApiError { status: got, body } => {
                assert_eq!(got, status);
                assert_eq!(body, "{\"message\":\"nope\"}");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn invalid_json_is_decode_error() {
    let server = start_server().await;
    mock_on(&server, |when, then| {
        authenticated_post(when, "/reputation/domain");
        then.status(200).body("<html>oops</html>");
    })
    .await;

    let err = client_for(&server).check_domain_reputation("example.com").await.unwrap_err();
    assert!(matches!(err, OopSpamError::DecodeError(_)));
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = start_server().await;
    let mock = mock_on(&server, |when, then| {
        authenticated_post(when, "/reputation/domain");
        then.status(200).json_body(json!({"Blocked": true, "Blocker": ["spamhaus"]}));
    })
    .await;

    let client = OopSpamClient::new(config_for(format!("{}/", server.base_url()))).unwrap();
    let reply = client.check_domain_reputation("example.com").await.unwrap();

    assert_hits(&mock, 1).await;
    assert!(reply.blocked);
    assert_eq!(reply.blocker, vec!["spamhaus"]);
}

#[maybe_async::test(feature = "sync", async(feature = "async", tokio::test))]
async fn connection_refused_is_network_error() {
    let client = OopSpamClient::new(config_for("http://127.0.0.1:1".to_string())).unwrap();
    let err = client.check_domain_reputation("example.com").await.unwrap_err();
    assert!(matches!(err, OopSpamError::NetworkError(_)));
}

#[cfg(feature = "sync")]
#[test]
fn client_is_shared_between_threads() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        authenticated_post(when, "/reputation/domain");
        then.status(200).json_body(json!({"Blocked": false, "Blocker": null}));
    });

    let client = client_for(&server);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let reply = client.check_domain_reputation("example.com").unwrap();
                assert!(!reply.blocked);
            });
        }
    });

    mock.assert_hits(4);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn client_is_shared_between_tasks() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            authenticated_post(when, "/reputation/domain");
            then.status(200).json_body(json!({"Blocked": false, "Blocker": null}));
        })
        .await;

    let client = client_for(&server);
    let (a, b) = tokio::join!(
        client.check_domain_reputation("example.com"),
        client.check_domain_reputation("example.com"),
    );
    assert!(!a.unwrap().blocked);
    assert!(!b.unwrap().blocked);

    mock.assert_hits_async(2).await;
}
