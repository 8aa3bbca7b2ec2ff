// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::time::Duration;

use bytes::Bytes;
use http::Method;
use log::debug;
use mekari_core::{Context, Error, Result};
use serde::Serialize;

use super::config::Config;
use super::credential::Credential;
use super::response::ApiResponse;
use super::sign_request::RequestSigner;

/// Client signs and sends requests to the mekari api.
///
/// Every call performs exactly one exchange: there are no retries and a
/// response with any status is returned as an [`ApiResponse`].
///
/// `Client` is cheap to clone and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    base_url: String,
    timeout: Duration,
    credential: Credential,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client.
    ///
    /// Requests are sent through the [`mekari_core::HttpSend`] configured in `ctx`.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let credential = config.credential()?;

        Ok(Self {
            ctx,
            base_url: config.base_url().to_string(),
            timeout: config.timeout(),
            credential,
            signer: RequestSigner::new(),
        })
    }

    #[cfg(test)]
    fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Sign and send a request.
    ///
    /// - `path` is appended to the base url and signed as is, it must start
    ///   with `/` and may carry a query that is already encoded.
    /// - `payload` is sent as a json body, no body is sent for `None`.
    pub async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&T>,
    ) -> Result<ApiResponse> {
        let body = match payload {
            Some(payload) => serde_json::to_vec(payload)
                .map(Bytes::from)
                .map_err(|e| Error::encode("failed to encode request payload").with_source(e))?,
            None => Bytes::new(),
        };

        if !path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "path {path:?} must start with '/'"
            )));
        }

        let headers = self.signer.sign(&method, path, &self.credential);

        let mut req = http::Request::builder()
            .method(method.clone())
            .uri(format!("{}{path}", self.base_url))
            .body(body)?;
        // The target must reach the transport exactly as signed: the uri
        // parser drops fragments, and the transport refuses targets it would
        // rewrite on the wire.
        if !req
            .uri()
            .path_and_query()
            .is_some_and(|v| v.as_str().ends_with(path))
        {
            return Err(Error::request_invalid(format!(
                "path {path:?} can't be sent verbatim"
            )));
        }
        headers.apply(req.headers_mut())?;

        let resp = tokio::time::timeout(self.timeout, self.ctx.http_send(req))
            .await
            .map_err(|_| {
                Error::transport(format!("request timed out after {:?}", self.timeout))
            })??;

        let (parts, body) = resp.into_parts();
        debug!("{method} {path} got status {}", parts.status);

        ApiResponse::decode(parts.status, &body)
    }

    /// Send a `GET` request without body.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send::<()>(Method::GET, path, None).await
    }

    /// Send a `DELETE` request without body.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    /// Send a `POST` request with a json body.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<ApiResponse> {
        self.send(Method::POST, path, Some(payload)).await
    }

    /// Send a `PUT` request with a json body.
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<ApiResponse> {
        self.send(Method::PUT, path, Some(payload)).await
    }

    /// Send a `PATCH` request with a json body.
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<ApiResponse> {
        self.send(Method::PATCH, path, Some(payload)).await
    }
}
