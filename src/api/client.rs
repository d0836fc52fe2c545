//! Authenticated HTTP Client
//!
//! Thin wrapper over `gloo_net` requests against the admin API. Attaches the
//! bearer token from the auth holder, and on a 401 clears the session through
//! that holder before rejecting, so the caller's own error handling still
//! runs. The client itself never navigates; the route guard reacts to the
//! cleared session.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthContext;
use crate::config;
use crate::models::UploadResponse;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// Backend rejected the credentials; the session has already been cleared.
    #[error("session expired")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Handle to the admin API, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Api {
    auth: AuthContext,
}

impl Api {
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", config::admin_base(), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth.bearer_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Maps a response to the error taxonomy. Runs the 401 session teardown
    /// exactly once per failed call, before the rejection propagates.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.status() == 401 {
            self.auth.expire();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    /// DELETE carrying a JSON body (the backend expects context with some
    /// profile deletions).
    pub async fn delete_with_body<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    /// Multipart upload of a single image file; returns the hosted URL.
    pub async fn upload(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
        form.append_with_blob("image", file)
            .map_err(|_| ApiError::Network("could not attach file".to_string()))?;

        // No explicit Content-Type: the browser sets the multipart boundary.
        let request = self
            .authorize(Request::post(&self.url("/upload")))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        let uploaded: UploadResponse = self.decode(response).await?;
        uploaded
            .hosted_url()
            .ok_or_else(|| ApiError::Decode("upload response carried no url".to_string()))
    }

    // Global settings live outside the admin base.

    pub async fn get_json_at<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    pub async fn put_json_at<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }
}
