//! Integration tests for the login handshake against a mock modem
//!
//! Each test stands up a mockito server playing the modem's web interface
//! and drives the real `ModemClient` through the four-step handshake.

use mockito::{Matcher, Server, ServerGuard};
use modlog::adapters::modem::ModemClient;
use modlog::config::schema::{EndpointsConfig, ModemConfig, PatternsConfig};
use modlog::config::secret_string;
use modlog::domain::{ModlogError, ProtocolError};

const LOGIN_FORM_BODY: &str = r#"<html><body>
<form action="/goform/login" method="post">
<input type="hidden" name="webToken" value="1764243698">
<input type="text" name="loginUsername">
<input type="password" name="loginPassword">
</form>
</body></html>"#;

fn modem_config(address: &str) -> ModemConfig {
    ModemConfig {
        address: address.to_string(),
        username: "admin".to_string(),
        password: secret_string("hunter2".to_string()),
        session_cookie_name: "sessionId".to_string(),
        timeout_seconds: 5,
        endpoints: EndpointsConfig {
            login_form: "/login.html".to_string(),
            form_target: "/goform/login".to_string(),
            index: "/index.html".to_string(),
            event_log: "/eventlog.html".to_string(),
        },
        patterns: PatternsConfig {
            web_token: r#"name="webToken" value="(\d+)""#.to_string(),
            event_xml: r"(<docsDevEventTable>[\s\S]*</docsDevEventTable>)".to_string(),
        },
    }
}

async fn mock_login_form(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/login.html")
        .with_status(200)
        .with_body(LOGIN_FORM_BODY)
        .create_async()
        .await
}

#[tokio::test]
async fn test_successful_handshake_returns_session_id() {
    let mut server = Server::new_async().await;

    let form = mock_login_form(&mut server).await;
    let login = server
        .mock("POST", "/goform/login")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("loginUsername".into(), "admin".into()),
            Matcher::UrlEncoded("loginPassword".into(), "hunter2".into()),
            Matcher::UrlEncoded("login".into(), "1".into()),
            Matcher::UrlEncoded("webToken".into(), "1764243698".into()),
        ]))
        .with_status(302)
        .with_header("location", "/index.html")
        .create_async()
        .await;
    let index = server
        .mock("GET", "/index.html")
        .with_status(200)
        .with_header("set-cookie", "sessionId=a81a5b66ee161f897059256a44dff31e")
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let session_id = client.acquire_session().await.unwrap();

    assert_eq!(session_id.as_str(), "a81a5b66ee161f897059256a44dff31e");
    form.assert_async().await;
    login.assert_async().await;
    index.assert_async().await;
}

#[tokio::test]
async fn test_missing_web_token_fails_handshake() {
    let mut server = Server::new_async().await;

    let form = server
        .mock("GET", "/login.html")
        .with_status(200)
        .with_body("<html><body>No token on this page</body></html>")
        .create_async()
        .await;
    // The handshake must stop before ever submitting the form
    let login = server
        .mock("POST", "/goform/login")
        .with_status(302)
        .expect(0)
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let err = client.acquire_session().await.unwrap_err();

    assert!(matches!(
        err,
        ModlogError::Protocol(ProtocolError::MissingWebToken)
    ));
    form.assert_async().await;
    login.assert_async().await;
}

#[tokio::test]
async fn test_non_redirect_login_response_fails_handshake() {
    let mut server = Server::new_async().await;

    let _form = mock_login_form(&mut server).await;
    let _login = server
        .mock("POST", "/goform/login")
        .with_status(200)
        .with_body("<html>Bad password</html>")
        .create_async()
        .await;
    let index = server
        .mock("GET", "/index.html")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let err = client.acquire_session().await.unwrap_err();

    match err {
        ModlogError::Protocol(ProtocolError::InvalidLoginResponse { status }) => {
            assert_eq!(status, 200);
        }
        other => panic!("expected InvalidLoginResponse, got {other:?}"),
    }
    index.assert_async().await;
}

#[tokio::test]
async fn test_missing_session_cookie_fails_handshake() {
    let mut server = Server::new_async().await;

    let _form = mock_login_form(&mut server).await;
    let _login = server
        .mock("POST", "/goform/login")
        .with_status(302)
        .create_async()
        .await;
    let _index = server
        .mock("GET", "/index.html")
        .with_status(200)
        .with_header("set-cookie", "theme=dark")
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let err = client.acquire_session().await.unwrap_err();

    match err {
        ModlogError::Protocol(ProtocolError::MissingSessionId { cookie_name }) => {
            assert_eq!(cookie_name, "sessionId");
        }
        other => panic!("expected MissingSessionId, got {other:?}"),
    }
}

#[tokio::test]
async fn test_last_session_cookie_wins() {
    let mut server = Server::new_async().await;

    let _form = mock_login_form(&mut server).await;
    let _login = server
        .mock("POST", "/goform/login")
        .with_status(302)
        .create_async()
        .await;
    let _index = server
        .mock("GET", "/index.html")
        .with_status(200)
        .with_header("set-cookie", "sessionId=aaa")
        .with_header("set-cookie", "sessionId=bbb")
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let session_id = client.acquire_session().await.unwrap();

    assert_eq!(session_id.as_str(), "bbb");
}

#[tokio::test]
async fn test_fetch_event_log_sends_session_cookie() {
    let mut server = Server::new_async().await;

    let page = server
        .mock("GET", "/eventlog.html")
        .match_header("cookie", "sessionId=abc123")
        .with_status(200)
        .with_body(
            "<html><pre><docsDevEventTable><tr><docsDevEvIndex>1</docsDevEvIndex></tr></docsDevEventTable></pre></html>",
        )
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let session_id = "abc123".parse().unwrap();
    let xml = client.fetch_event_log(&session_id).await.unwrap();

    assert!(xml.starts_with("<docsDevEventTable>"));
    assert!(xml.ends_with("</docsDevEventTable>"));
    page.assert_async().await;
}

#[tokio::test]
async fn test_event_log_without_xml_region_fails() {
    let mut server = Server::new_async().await;

    let _page = server
        .mock("GET", "/eventlog.html")
        .with_status(200)
        .with_body("<html><body>Session expired, please log in.</body></html>")
        .create_async()
        .await;

    let client = ModemClient::new(modem_config(&server.url())).unwrap();
    let session_id = "abc123".parse().unwrap();
    let err = client.fetch_event_log(&session_id).await.unwrap_err();

    assert!(matches!(
        err,
        ModlogError::Protocol(ProtocolError::MissingEventXml)
    ));
}
