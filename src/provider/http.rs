//! Shared HTTP client and auth utilities.

use std::sync::OnceLock;

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::DeskhandError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Build Basic-auth headers from a raw credential (Jira style).
pub fn basic_headers(credential: &str) -> HeaderMap {
    let token = base64::engine::general_purpose::STANDARD.encode(credential);
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Basic {token}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> DeskhandError {
    match status {
        401 | 403 => DeskhandError::Authentication(body.to_string()),
        _ => DeskhandError::api(status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_headers_carry_the_key() {
        let headers = bearer_headers("sk-test");
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer sk-test"
        );
    }

    #[test]
    fn basic_headers_encode_the_credential() {
        let headers = basic_headers("user@example.com:token");
        let value = headers.get(AUTHORIZATION).unwrap().to_str().unwrap();
        let encoded = value.strip_prefix("Basic ").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, b"user@example.com:token");
    }

    #[test]
    fn unauthorized_status_maps_to_authentication() {
        assert!(matches!(
            status_to_error(401, "nope"),
            DeskhandError::Authentication(_)
        ));
    }

    #[test]
    fn other_statuses_map_to_api_error() {
        match status_to_error(400, "bad request") {
            DeskhandError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad request");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
