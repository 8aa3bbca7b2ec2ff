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

//! Use a tuned reqwest client and inspect how a call failed.

use std::time::Duration;

use anyhow::Result;
use mekari_api::{Client, Config};
use mekari_core::{Context, ErrorKind, OsEnv};
use mekari_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .user_agent("mekari-api-example/1.0")
        .build()?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);
    let config = Config::new()
        .from_env(&ctx)
        .with_timeout(Duration::from_secs(10));
    let client = Client::new(ctx, config)?;

    match client.get("/qontak/chat/v1/integrations?limit=10").await {
        Ok(resp) if resp.is_success() => println!("integrations: {:?}", resp.body()),
        Ok(resp) => println!("api answered {}: {:?}", resp.status(), resp.body()),
        Err(err) if err.is_local() => {
            eprintln!("request was never sent: {err}");
            return Err(err.into());
        }
        Err(err) => match err.kind() {
            ErrorKind::Transport => eprintln!("api unreachable: {err}"),
            ErrorKind::Decode => eprintln!("api answered {:?} with garbage: {err}", err.status()),
            _ => return Err(err.into()),
        },
    }

    Ok(())
}
