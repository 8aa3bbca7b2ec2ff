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

// Env values used in mekari services.
pub const MEKARI_API_BASE_URL: &str = "MEKARI_API_BASE_URL";
pub const MEKARI_API_CLIENT_ID: &str = "MEKARI_API_CLIENT_ID";
pub const MEKARI_API_CLIENT_SECRET: &str = "MEKARI_API_CLIENT_SECRET";

pub const DEFAULT_BASE_URL: &str = "https://api.mekari.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Values of the hmac authorization scheme.
pub const HMAC_ALGORITHM: &str = "hmac-sha256";
pub const HMAC_SIGNED_HEADERS: &str = "date request-line";
pub const CONTENT_TYPE_JSON: &str = "application/json";
