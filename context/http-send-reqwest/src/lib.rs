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

//! Reqwest-based HTTP client implementation for mekari.
//!
//! This crate provides `ReqwestHttpSend`, an HTTP client that implements
//! the `HttpSend` trait from `mekari_core` using the popular reqwest library.
//!
//! ## Example
//!
//! ```no_run
//! use mekari_core::Context;
//! use mekari_http_send_reqwest::ReqwestHttpSend;
//! use reqwest::Client;
//! use std::time::Duration;
//!
//! let client = Client::builder()
//!     .timeout(Duration::from_secs(30))
//!     .pool_max_idle_per_host(10)
//!     .build()
//!     .expect("client must build");
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! ```
//!
//! `reqwest::Client` keeps a connection pool behind an `Arc`, so one
//! `ReqwestHttpSend` can serve any number of concurrent requests.

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use mekari_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};
use url::Position;

/// ReqwestHttpSend sends requests through a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let target = req
            .uri()
            .path_and_query()
            .map(|v| v.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request").with_source(e)
        })?;

        // `Url` percent-encodes some characters and resolves dot segments.
        // A request whose target would change on the wire is refused.
        let sent = &req.url()[Position::BeforePath..Position::AfterQuery];
        if sent != target {
            return Err(Error::request_invalid(format!(
                "request target {target:?} would be sent as {sent:?}"
            )));
        }
        debug!("sending {} {}", req.method(), req.url());

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to execute request").with_source(e))?;

        let mut builder = http::Response::builder()
            .status(resp.status())
            .version(resp.version());
        if let Some(headers) = builder.headers_mut() {
            *headers = resp.headers().clone();
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;

        Ok(builder.body(body)?)
    }
}
