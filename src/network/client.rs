//! HTTP client wrapper - executes saved requests and captures responses

use std::collections::BTreeMap;
use std::error::Error as _;
use std::time::{Duration, Instant};

use reqwest::{Method, Url};

use crate::error::ExecuteError;
use crate::models::{ExecutionResult, RequestDefinition};

/// Create an HTTP client with the given request timeout.
///
/// The client owns the connection pool; clone it rather than building a new
/// one per request.
pub fn create_client(timeout: Duration) -> Result<reqwest::Client, ExecuteError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ExecuteError::Network(describe(&e)))
}

/// Build a request from a saved definition. Method, headers and body are sent
/// verbatim; nothing is added.
fn build_request(
    client: &reqwest::Client,
    request: &RequestDefinition,
) -> Result<reqwest::RequestBuilder, ExecuteError> {
    let method = Method::from_bytes(request.method.as_str().as_bytes())
        .map_err(|e| ExecuteError::Network(format!("invalid method: {}", e)))?;
    let url = Url::parse(&request.url)
        .map_err(|e| ExecuteError::Network(format!("invalid URL `{}`: {}", request.url, e)))?;

    let mut req_builder = client.request(method, url);
    for (key, value) in &request.headers {
        req_builder = req_builder.header(key.as_str(), value.as_str());
    }
    if !request.body.is_empty() {
        req_builder = req_builder.body(request.body.clone());
    }

    Ok(req_builder)
}

/// Execute a request once and return the fully drained response.
///
/// `timeout` must match the one the client was built with; it is only used to
/// label a `Timeout` failure.
pub async fn execute_request(
    client: &reqwest::Client,
    request: &RequestDefinition,
    timeout: Duration,
) -> Result<ExecutionResult, ExecuteError> {
    let req_builder = build_request(client, request)?;

    let start = Instant::now();
    let resp = req_builder
        .send()
        .await
        .map_err(|e| map_error(e, timeout))?;
    let duration = start.elapsed();

    let status_code = resp.status().as_u16();
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in resp.headers() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    let body = resp.text().await.map_err(|e| map_error(e, timeout))?;

    Ok(ExecutionResult {
        status_code,
        headers,
        body,
        duration,
        received_at: chrono::Utc::now(),
    })
}

fn map_error(error: reqwest::Error, timeout: Duration) -> ExecuteError {
    if error.is_timeout() {
        return ExecuteError::Timeout(timeout);
    }
    ExecuteError::Network(describe(&error))
}

/// reqwest's top-level message rarely names the cause; append the chain.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}


#[cfg(test)]
mod tests {
    use super::test_server::*;
    use super::*;
    use crate::models::HttpMethod;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_execute_captures_status_headers_and_body() {
        let (base, _rx) = serve_once(ok_response("pong")).await;
        let client = create_client(TIMEOUT).unwrap();
        let request = RequestDefinition::new("ping", HttpMethod::GET, format!("{}/ping", base));

        let result = execute_request(&client, &request, TIMEOUT).await.unwrap();
        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, "pong");
        assert_eq!(result.headers.get("content-type").map(String::as_str), Some("text/plain"));
        assert_eq!(result.headers.get("x-multi").map(String::as_str), Some("a, b"));
    }

    #[tokio::test]
    async fn test_execute_sends_method_headers_and_body() {
        let (base, rx) = serve_once(ok_response("")).await;
        let client = create_client(TIMEOUT).unwrap();
        let request = RequestDefinition::new("create", HttpMethod::POST, format!("{}/items", base))
            .with_header("X-Token", "abc")
            .with_body(r#"{"id":1}"#);

        let result = execute_request(&client, &request, TIMEOUT).await.unwrap();
        assert_eq!(result.status_code, 200);

        let raw = rx.await.unwrap();
        assert!(raw.starts_with("POST /items HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("x-token: abc"));
        assert!(!raw.to_ascii_lowercase().contains("content-type"));
        assert!(raw.ends_with(r#"{"id":1}"#));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let base = unreachable().await;
        let client = create_client(TIMEOUT).unwrap();
        let request = RequestDefinition::new("down", HttpMethod::GET, base);

        let err = execute_request(&client, &request, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, ExecuteError::Network(_)));
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let client = create_client(TIMEOUT).unwrap();
        let request = RequestDefinition::new("bad", HttpMethod::GET, "not a url");

        let err = execute_request(&client, &request, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, ExecuteError::Network(msg) if msg.contains("invalid URL")));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let base = serve_silent().await;
        let timeout = Duration::from_millis(200);
        let client = create_client(timeout).unwrap();
        let request = RequestDefinition::new("slow", HttpMethod::GET, base);

        let err = execute_request(&client, &request, timeout).await.unwrap_err();
        assert_eq!(err, ExecuteError::Timeout(timeout));
    }
}
