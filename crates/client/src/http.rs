//! HTTP transport with the uniform request/response pipeline
//!
//! A thin wrapper over a shared `reqwest::Client` that injects the auth
//! header, applies the per-request timeout, traces every exchange on the
//! debug channel, and routes every response — JSON and multipart alike —
//! through the envelope interpreter. There is no retry, backoff, or
//! rate-limiting here: a failed call surfaces exactly once.

use std::time::Duration;

use habitify_domain::{HabitifyError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{AuthScheme, HabitifyConfig};
use crate::envelope::interpret;
use crate::logging::LogSink;

/// Envelope-aware transport handle.
///
/// The typed resource methods build on the generic verbs here; the handle is
/// public so callers can reach endpoints this crate does not enumerate while
/// keeping the same interpretation pipeline.
#[derive(Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    logger: LogSink,
}

impl HttpTransport {
    pub(crate) fn new(config: &HabitifyConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let auth_value = match config.auth_scheme {
            AuthScheme::Raw => config.api_key.clone(),
            AuthScheme::Bearer => format!("Bearer {}", config.api_key),
        };
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|_| {
                HabitifyError::InvalidArgument("API key is not a valid header value".into())
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &config.extra_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                HabitifyError::InvalidArgument(format!("invalid header name {name:?}: {err}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|err| {
                HabitifyError::InvalidArgument(format!("invalid value for header {name:?}: {err}"))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| HabitifyError::Transport(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            logger: LogSink::new(config.logger.clone()),
        })
    }

    /// Execute a GET request with optional query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.client.get(self.url(path)).query(query);
        self.dispatch(Method::GET, path, query, None, request).await
    }

    /// Execute a DELETE request with optional filter query parameters.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.client.delete(self.url(path)).query(query);
        self.dispatch(Method::DELETE, path, query, None, request).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let payload = to_payload(body)?;
        let request = self.client.post(self.url(path)).json(&payload);
        self.dispatch(Method::POST, path, &[], Some(payload), request).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let payload = to_payload(body)?;
        let request = self.client.put(self.url(path)).json(&payload);
        self.dispatch(Method::PUT, path, &[], Some(payload), request).await
    }

    /// Execute a POST request with a multipart body. The multipart content
    /// type replaces the default JSON content type for this call only.
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let request = self.client.post(self.url(path)).multipart(form);
        self.dispatch(Method::POST, path, &[], Some(Value::String("<multipart>".into())), request)
            .await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        request: RequestBuilder,
    ) -> Result<T> {
        self.logger.debug(&format!(
            "request: {method} {path} query={query:?} body={}",
            body.as_ref().map_or_else(|| "-".to_string(), Value::to_string)
        ));

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let mapped = self.map_send_error(err);
                self.logger.error(&format!("request failed: {method} {path}: {mapped}"));
                return Err(mapped);
            }
        };

        let status = response.status();
        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(err) => {
                let mapped = self.map_send_error(err);
                self.logger.error(&format!("response read failed: {method} {path}: {mapped}"));
                return Err(mapped);
            }
        };

        match interpret::<T>(status.as_u16(), &raw) {
            Ok(payload) => {
                self.logger.debug(&format!("response: {method} {path} status={status} body={raw}"));
                Ok(payload)
            }
            Err(err) => {
                self.logger.error(&format!("response error: {method} {path} status={status}: {err}"));
                Err(err)
            }
        }
    }

    fn map_send_error(&self, err: reqwest::Error) -> HabitifyError {
        if err.is_timeout() {
            HabitifyError::Timeout(self.timeout)
        } else {
            HabitifyError::Transport(err.to_string())
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_payload<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|err| {
        HabitifyError::InvalidArgument(format!("unserializable request body: {err}"))
    })
}
