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

//! Mekari hmac request signer
use std::fmt::{Debug, Formatter};

use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::header::DATE;
use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::Method;
use log::debug;
use mekari_core::hash::base64_hmac_sha256;
use mekari_core::time::format_http_date;
use mekari_core::time::now;
use mekari_core::time::DateTime;
use mekari_core::utils::Redact;
use mekari_core::Result;

use super::constants::*;
use super::credential::Credential;

/// RequestSigner that implements the mekari hmac authorization.
///
/// The signature covers the `Date` header and the request line only, the
/// body is not part of it.
///
/// - [HMAC Authentication](https://developers.mekari.com/docs/kb/hmac-authentication)
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Build the authentication headers for `method` and `path`.
    ///
    /// `path` must be exactly the path and query that will be sent on the
    /// wire, without the base url.
    pub fn sign(&self, method: &Method, path: &str, cred: &Credential) -> SignedHeaders {
        let now = self.time.unwrap_or_else(now);
        // Formatted once: the signed date and the sent date must be identical.
        let date = format_http_date(now);

        let string_to_sign = string_to_sign(method, path, &date);
        let signature = base64_hmac_sha256(
            cred.client_secret.as_bytes(),
            string_to_sign.as_bytes(),
        );

        let authorization = format!(
            r#"hmac username="{}", algorithm="{HMAC_ALGORITHM}", headers="{HMAC_SIGNED_HEADERS}", signature="{signature}""#,
            cred.client_id
        );

        SignedHeaders {
            authorization,
            date,
        }
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// "date: " + Date + "\n" +
/// Method + " " + PathAndQuery + " HTTP/1.1"
/// ```
pub fn string_to_sign(method: &Method, path: &str, date: &str) -> String {
    let s = format!("date: {date}\n{}", request_line(method, path));

    debug!("string to sign: {}", &s);
    s
}

/// The canonical request line, used only for signing.
///
/// The version is always `HTTP/1.1` whatever protocol is used on the wire.
pub fn request_line(method: &Method, path: &str) -> String {
    format!("{} {path} HTTP/1.1", method.as_str())
}

/// Headers produced by [`RequestSigner::sign`].
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    authorization: String,
    date: String,
}

impl SignedHeaders {
    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Value of the `Date` header, the same string that has been signed.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Value of the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE_JSON
    }

    /// Iterate over `(name, value)` in the order they are sent.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderName, &str)> {
        [
            (AUTHORIZATION, self.authorization()),
            (DATE, self.date()),
            (CONTENT_TYPE, self.content_type()),
        ]
        .into_iter()
    }

    /// Insert all headers into `headers`, replacing existing values.
    ///
    /// `Authorization` is marked sensitive. Fails if the client id can't be
    /// carried by a header value.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        for (name, value) in self.iter() {
            let mut value = HeaderValue::from_str(value)?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        Ok(())
    }
}

impl Debug for SignedHeaders {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("authorization", &Redact::from(&self.authorization))
            .field("date", &self.date)
            .finish()
    }
}
