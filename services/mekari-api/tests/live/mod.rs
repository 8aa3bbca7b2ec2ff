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

use std::env;

use anyhow::Result;
use http::StatusCode;
use log::{debug, warn};
use mekari_api::{Client, Config};
use mekari_core::{Context, OsEnv};
use mekari_http_send_reqwest::ReqwestHttpSend;

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("MEKARI_API_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    Some(Client::new(ctx, config).expect("MEKARI_API_CLIENT_ID and MEKARI_API_CLIENT_SECRET must set"))
}

#[tokio::test]
async fn test_signature_is_accepted() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("MEKARI_API_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client
        .get("/qontak/chat/v1/broadcasts/whatsapp?offset=1&limit=1")
        .await?;
    debug!("got response: {:?}", resp);

    // Anything but 401 means the hmac has been verified.
    assert_ne!(StatusCode::UNAUTHORIZED, resp.status());
    Ok(())
}
