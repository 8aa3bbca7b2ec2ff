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

use bytes::Bytes;
use http::StatusCode;
use mekari_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Response of one api call.
///
/// The status is returned as is: a 4xx or 5xx response is still an
/// `ApiResponse`, it's up to the caller to decide what it means.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Option<Value>,
}

impl ApiResponse {
    /// Decode a raw response.
    ///
    /// An empty body yields `None`, anything else must be valid json.
    pub(crate) fn decode(status: StatusCode, body: &Bytes) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self { status, body: None });
        }

        let value = serde_json::from_slice(body).map_err(|e| {
            Error::decode("failed to decode response body")
                .with_status(status)
                .with_source(e)
        })?;

        Ok(Self {
            status,
            body: Some(value),
        })
    }

    /// Http status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decoded json body, `None` if the response body was empty.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the response, returning the decoded body.
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Deserialize the body into a typed value.
    ///
    /// An empty body is treated as json `null`, so `Option<T>` and `()` can
    /// accept it.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.body.clone().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| {
            Error::decode("failed to parse response body")
                .with_status(self.status)
                .with_source(e)
        })
    }
}
