//! Posting a status to Twitter with OAuth 1.0a user credentials.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::AUTHORIZATION;
use sha1::Sha1;
use thiserror::Error;

const TWEET_URL: &str = "https://api.twitter.com/2/tweets";

/// RFC 3986 unreserved characters stay as is; everything else is escaped.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// Errors from posting a status.
#[derive(Error, Debug)]
pub enum PostError {
    /// One or more of the four credentials is empty.
    #[error("twitter API credentials are not configured")]
    MissingCredentials,

    /// The signing key was rejected by HMAC.
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("twitter API responded {0}: {1}")]
    Status(reqwest::StatusCode, String),
}

/// The four OAuth 1.0a values of a Twitter app and user.
#[derive(Clone)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl Credentials {
    /// Build credentials, rejecting any empty value.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Result<Self, PostError> {
        let credentials = Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        };

        let missing = [
            &credentials.consumer_key,
            &credentials.consumer_secret,
            &credentials.access_token,
            &credentials.access_token_secret,
        ]
        .iter()
        .any(|value| value.is_empty());

        if missing {
            return Err(PostError::MissingCredentials);
        }
        Ok(credentials)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Build the OAuth signature base string.
///
/// Parameters are percent-encoded, sorted by key then value, and joined
/// into a single encoded parameter string.
pub fn signature_base(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (encode(key), encode(value)))
        .collect();
    pairs.sort();

    let param_string = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

/// HMAC-SHA1 sign a base string, returning the base64 signature.
pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> Result<String, PostError> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).map_err(|e| PostError::Signing(e.to_string()))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Build the `Authorization` header for a request with no signed body parameters.
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &str,
    nonce: &str,
    timestamp: &str,
) -> Result<String, PostError> {
    let mut oauth = vec![
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let base = signature_base(method, url, &oauth);
    let signature = sign(
        &base,
        &credentials.consumer_secret,
        &credentials.access_token_secret,
    )?;
    oauth.push(("oauth_signature", signature.as_str()));
    oauth.sort();

    let fields = oauth
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {}", fields))
}

/// Post a status on behalf of the authenticated user.
pub async fn post_status(
    client: &reqwest::Client,
    credentials: &Credentials,
    text: &str,
) -> Result<(), PostError> {
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    let timestamp = chrono::Utc::now().timestamp().to_string();
    let header = authorization_header(credentials, "POST", TWEET_URL, &nonce, &timestamp)?;

    let response = client
        .post(TWEET_URL)
        .header(AUTHORIZATION, header)
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(PostError::Status(status, body));
    }

    log::debug!("status posted ({})", status);
    Ok(())
}
