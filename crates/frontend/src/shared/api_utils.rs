//! HTTP client for the admin API.
//!
//! Every call attaches the bearer token of the session it was created from,
//! is aborted after the configured timeout and maps failures to [`ApiError`].
//! A 401 to a call carrying a token comes back as
//! [`ApiError::Unauthenticated`]; reacting to it is up to the caller (see
//! `system::auth::policy`). Without a token it is an ordinary `Http` error.

use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, FormData};

use super::config::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

#[derive(Clone)]
enum Body {
    Empty,
    Json(String),
    Multipart(FormData),
}

#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    bearer: Option<String>,
}

impl ApiClient {
    /// `bearer` is the full `Authorization` value, e.g. `Bearer abc`
    pub fn new(bearer: Option<String>) -> Self {
        Self { bearer }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::Get, path.to_string(), Body::Empty)
            .await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        self.execute(Method::Get, with_query(path, query)?, Body::Empty)
            .await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Post, path.to_string(), json_body(body)?)
            .await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Put, path.to_string(), json_body(body)?)
            .await
    }

    /// POST a JSON body to a path with a query string
    pub async fn post_json_with_query<T, Q, B>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Post, with_query(path, query)?, json_body(body)?)
            .await
    }

    pub async fn put_json_with_query<T, Q, B>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Put, with_query(path, query)?, json_body(body)?)
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        url_path: String,
        form: FormData,
    ) -> Result<T, ApiError> {
        self.execute(Method::Post, url_path, Body::Multipart(form))
            .await
    }

    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        url_path: String,
        form: FormData,
    ) -> Result<T, ApiError> {
        self.execute(Method::Put, url_path, Body::Multipart(form))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url_path: String) -> Result<T, ApiError> {
        self.execute(Method::Delete, url_path, Body::Empty).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Body,
    ) -> Result<T, ApiError> {
        // Only idempotent reads are retried
        let attempts = if method == Method::Get {
            1 + config().retry_attempts
        } else {
            1
        };

        let mut attempt = 1;
        loop {
            match self.send_once(method, &path, body.clone()).await {
                Ok(response) => return read_json(response).await,
                Err(e) if attempt < attempts && e.is_retryable() => {
                    log::warn!("{method:?} {path} failed ({e}), retrying");
                    attempt += 1;
                }
                Err(e) => {
                    log::warn!("{method:?} {path} failed: {e}");
                    return Err(e);
                }
            }
        }
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> Result<Response, ApiError> {
        let url = config().endpoint(path);
        log::debug!("{method:?} {url}");

        let controller =
            AbortController::new().map_err(|_| ApiError::Network("AbortController unavailable".into()))?;
        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(config().request_timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let signal = controller.signal();
        let mut builder = method.builder(&url).abort_signal(Some(&signal));
        if let Some(bearer) = &self.bearer {
            builder = builder.header("Authorization", bearer);
        }

        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
            // The browser sets the multipart boundary itself
            Body::Multipart(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let result = request.send().await;
        drop(timer);

        let response = match result {
            Ok(response) => response,
            Err(_) if timed_out.get() => return Err(ApiError::Timeout),
            Err(e) => return Err(ApiError::Network(e.to_string())),
        };

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(if self.bearer.is_some() {
                ApiError::from_response(status, &text)
            } else {
                ApiError::from_anonymous_response(status, &text)
            })
        }
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_string(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// `path?query` with the query encoded by serde_qs
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{qs}"))
    }
}

/// `path/segment` with the segment percent-encoded
pub fn with_segment(path: &str, segment: &str) -> String {
    format!("{path}/{}", urlencoding::encode(segment))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a multipart body from text fields and optional files
pub fn multipart(
    fields: &[(&str, String)],
    files: &[(&str, web_sys::File)],
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Encode("FormData unavailable".into()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::Encode(format!("cannot add field {name}")))?;
    }
    for (name, file) in files {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| ApiError::Encode(format!("cannot attach file {name}")))?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Paging {
        page: usize,
        limit: usize,
    }

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("/api/v1/admin/orders", &Paging { page: 2, limit: 10 }).unwrap(),
            "/api/v1/admin/orders?page=2&limit=10"
        );
    }

    #[test]
    fn test_with_segment_encodes() {
        assert_eq!(
            with_segment("/api/v1/admin/user", "a b/c"),
            "/api/v1/admin/user/a%20b%2Fc"
        );
    }
}
