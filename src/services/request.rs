use std::sync::Arc;

use http::header::{HeaderName, AUTHORIZATION};
use http::{Method, StatusCode};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::service::AuthService;
use crate::error::{ApiError, ApiResult};
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;

/// How the credential is attached to an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// raw token in a custom header, name must be lowercase
    Header(&'static str),
    None,
}

/// Request plumbing shared by every sub-service: auth header, send, status
/// check, JSON decode, metrics.
#[derive(Debug, Clone)]
pub struct ServiceRequester {
    service: &'static str,
    client: Client,
    auth: Option<Arc<AuthService>>,
    base_url: String,
    scheme: AuthScheme,
}

impl ServiceRequester {
    pub fn new(
        service: &'static str,
        client: Client,
        auth: Option<Arc<AuthService>>,
        base_url: &str,
        scheme: AuthScheme,
    ) -> Self {
        Self {
            service,
            client,
            auth,
            base_url: base_url.trim_end_matches('/').to_owned(),
            scheme,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn build(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.url(path));
        let Some(auth) = &self.auth else {
            return request;
        };

        let (header, include_scheme) = match self.scheme {
            AuthScheme::Bearer => (AUTHORIZATION, true),
            AuthScheme::Header(name) => (HeaderName::from_static(name), false),
            AuthScheme::None => return request,
        };
        match auth.get_authorization_value(include_scheme).await {
            Some(value) => request = request.header(header, value),
            None => warn!(service = self.service, "sending request without credential"),
        }
        request
    }

    pub async fn get<T: DeserializeOwned>(&self, operation: &'static str, path: &str) -> ApiResult<T> {
        self.send(operation, Method::GET, path, None::<&()>).await
    }

    /// `get` that also hands back the success status.
    pub async fn get_with_status<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> ApiResult<(StatusCode, T)> {
        let (status, text) = self.exchange(operation, Method::GET, path, None::<&()>).await?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok((status, value)),
            Err(e) => Err(self.record(operation, ApiError::from(e)).await),
        }
    }

    /// Send and decode a JSON response body.
    pub async fn send<T, B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send_raw(operation, method, path, body).await?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => Err(self.record(operation, ApiError::from(e)).await),
        }
    }

    /// Send and return the raw body of a successful response.
    pub async fn send_raw<B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        let (_, text) = self.exchange(operation, method, path, body).await?;
        Ok(text)
    }

    async fn exchange<B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<(StatusCode, String)>
    where
        B: Serialize + ?Sized,
    {
        let metrics = get_metrics().await;
        let start = get_instant();
        metrics.api_requests.with_label_values(&[self.service, operation]).inc();

        let mut request = self.build(method, path).await;
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            if !status.is_success() {
                return Err(ApiError::Status { status, body: text });
            }
            Ok::<_, ApiError>((status, text))
        }
        .await;

        metrics
            .api_duration
            .with_label_values(&[self.service])
            .observe(start.elapsed().as_secs_f64());
        match result {
            Ok(exchanged) => Ok(exchanged),
            Err(e) => Err(self.record(operation, e).await),
        }
    }

    async fn record(&self, operation: &'static str, err: ApiError) -> ApiError {
        debug!(service = self.service, operation, error = %err, status = ?err.status(), "request failed");
        get_metrics()
            .await
            .api_failures
            .with_label_values(&[self.service, operation, err.reason()])
            .inc();
        err
    }
}
