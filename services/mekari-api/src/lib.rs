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

//! Client for the Mekari API with hmac request signing.
//!
//! ## Example
//!
//! ```no_run
//! use mekari_api::{Client, Config};
//! use mekari_core::{Context, OsEnv};
//! use mekari_http_send_reqwest::ReqwestHttpSend;
//! use serde_json::json;
//!
//! # async fn example() -> mekari_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let client = Client::new(ctx.clone(), Config::new().from_env(&ctx))?;
//!
//! let resp = client
//!     .post("/qontak/chat/v1/broadcasts/whatsapp/direct", &json!({"to_number": "6281xxxx"}))
//!     .await?;
//! if !resp.is_success() {
//!     println!("broadcast rejected: {:?}", resp.body());
//! }
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{request_line, string_to_sign, RequestSigner, SignedHeaders};

mod response;
pub use response::ApiResponse;

mod client;
pub use client::Client;
