//! Modem web interface client
//!
//! This module emulates the multi-step handshake a browser performs against
//! the modem's web server: fetch the login form to obtain a one-time web
//! token, submit the credentials with that token, confirm the login by its
//! redirect status, then pick the session id out of the cookies set on the
//! index page. The same client then replays the session cookie to fetch the
//! event log page.
//!
//! All four requests of a run go through one `reqwest::Client`, so the
//! underlying connection is kept alive across the handshake. Redirects are
//! never followed automatically; the login step inspects the raw 302.

use crate::adapters::modem::extract::extract_capture;
use crate::config::ModemConfig;
use crate::domain::errors::{ModlogError, ProtocolError};
use crate::domain::ids::{SessionId, WebToken};
use crate::domain::result::Result;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{redirect, Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Client for the modem's web administration interface
pub struct ModemClient {
    client: Client,
    config: ModemConfig,
}

impl ModemClient {
    /// Creates a new modem client from configuration
    ///
    /// The HTTP client disables automatic redirects so the login response's
    /// raw status code stays observable, and applies the configured
    /// per-request timeout.
    pub fn new(config: ModemConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| {
                ModlogError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Base address of the modem's web interface
    pub fn address(&self) -> &str {
        &self.config.address
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.address.trim_end_matches('/'), endpoint)
    }

    /// Performs the full login handshake and returns the session id
    ///
    /// The four steps run strictly in order, each consuming the prior
    /// step's artifact:
    /// 1. GET the login form and extract the web token
    /// 2. POST the credentials together with the token
    /// 3. Require the raw 302 redirect status
    /// 4. GET the index page and extract the session cookie
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] when any step's expected artifact is
    /// absent, or [`ModlogError::Io`] on transport failures.
    pub async fn acquire_session(&self) -> Result<SessionId> {
        let web_token = self.fetch_web_token().await?;
        self.login(&web_token).await?;

        let url = self.url(&self.config.endpoints.index);
        tracing::debug!(url = %url, "Fetching index page for session cookie");
        let response = self.client.get(&url).send().await?;

        let cookie_name = &self.config.session_cookie_name;
        let session_id = session_cookie_value(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
            cookie_name,
        )
        .and_then(|value| SessionId::new(value).ok())
        .ok_or_else(|| ProtocolError::MissingSessionId {
            cookie_name: cookie_name.clone(),
        })?;

        tracing::debug!(session_id = %session_id, "Extracted session id");
        Ok(session_id)
    }

    /// Fetches the login form page and extracts the one-time web token
    async fn fetch_web_token(&self) -> Result<WebToken> {
        let url = self.url(&self.config.endpoints.login_form);
        tracing::debug!(url = %url, "Fetching login form");

        let response = self.client.get(&url).send().await?;
        let body = response.text().await?;

        let web_token = extract_capture(&self.config.patterns.web_token, &body)?
            .and_then(|value| WebToken::new(value).ok())
            .ok_or(ProtocolError::MissingWebToken)?;

        tracing::debug!(web_token = %web_token, "Extracted web token");
        Ok(web_token)
    }

    /// Submits the login form and checks for the redirect that signals success
    async fn login(&self, web_token: &WebToken) -> Result<()> {
        let url = self.url(&self.config.endpoints.form_target);
        tracing::debug!(url = %url, "Submitting login form");

        let params = [
            ("loginUsername", self.config.username.as_str()),
            ("loginPassword", self.config.password.expose_secret().as_ref()),
            ("login", "1"),
            ("webToken", web_token.as_str()),
        ];

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();

        if status != StatusCode::FOUND {
            return Err(ProtocolError::InvalidLoginResponse {
                status: status.as_u16(),
            }
            .into());
        }

        tracing::debug!("Login accepted");
        Ok(())
    }

    /// Fetches the event log page with the session cookie and isolates the
    /// embedded XML region
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingEventXml`] when the configured
    /// boundary pattern does not match the page.
    pub async fn fetch_event_log(&self, session_id: &SessionId) -> Result<String> {
        let url = self.url(&self.config.endpoints.event_log);
        let cookie = format!("{}={}", self.config.session_cookie_name, session_id);
        tracing::debug!(url = %url, "Fetching event log page");

        let response = self.client.get(&url).header(COOKIE, cookie).send().await?;
        let body = response.text().await?;

        let xml = extract_capture(&self.config.patterns.event_xml, &body)?
            .ok_or(ProtocolError::MissingEventXml)?;

        tracing::debug!(bytes = xml.len(), "Extracted event log XML region");
        Ok(xml)
    }
}

/// Scans `Set-Cookie` strings for the named cookie, last match winning
///
/// A cookie string is accepted only when splitting on `=` yields exactly two
/// parts and the first equals `name` exactly. Later matches override earlier
/// ones.
fn session_cookie_value<'a>(
    cookies: impl Iterator<Item = &'a str>,
    name: &str,
) -> Option<String> {
    let mut value = None;

    for cookie in cookies {
        let parts: Vec<&str> = cookie.split('=').collect();
        if parts.len() == 2 && parts[0] == name {
            value = Some(parts[1].to_string());
        }
    }

    value
}
