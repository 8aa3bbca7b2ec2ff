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

//! Send a Qontak WhatsApp broadcast, then fetch its delivery log.
//!
//! ```shell
//! MEKARI_API_CLIENT_ID=xxx MEKARI_API_CLIENT_SECRET=yyy \
//!     cargo run --example whatsapp_broadcast
//! ```

use std::time::Duration;

use anyhow::{bail, Result};
use http::StatusCode;
use log::info;
use mekari_api::{ApiResponse, Client, Config};
use mekari_core::{Context, OsEnv};
use mekari_http_send_reqwest::ReqwestHttpSend;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct DirectBroadcast<'a> {
    to_number: &'a str,
    to_name: &'a str,
    message_template_id: &'a str,
    channel_integration_id: &'a str,
    language: Language<'a>,
    parameters: Parameters<'a>,
}

#[derive(Serialize)]
struct Language<'a> {
    code: &'a str,
}

#[derive(Serialize)]
struct Parameters<'a> {
    body: Vec<BodyParameter<'a>>,
}

#[derive(Serialize)]
struct BodyParameter<'a> {
    key: &'a str,
    value: &'a str,
    value_text: &'a str,
}

#[derive(Deserialize)]
struct Created {
    data: CreatedData,
}

#[derive(Deserialize)]
struct CreatedData {
    id: String,
}

fn print_response(resp: &ApiResponse) -> Result<()> {
    println!("Status Code: {}", resp.status().as_u16());
    println!("{}", serde_json::to_string_pretty(&resp.body())?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let client = Client::new(ctx.clone(), Config::new().from_env(&ctx))?;

    let payload = DirectBroadcast {
        to_number: "6281xxxx",
        to_name: "Muhamad Iqbal",
        message_template_id: "fbd4da17-a20e-4248-993d-f95566ee10b2",
        channel_integration_id: "a2e9673a-44ac-493d-aac0-51c5a0bfb1a5",
        language: Language { code: "id" },
        parameters: Parameters {
            body: vec![
                BodyParameter {
                    key: "1",
                    value: "customer_name",
                    value_text: "Iqbal",
                },
                BodyParameter {
                    key: "2",
                    value: "link_pdf",
                    value_text: "https://cdn.qontak.com/uploads/message/file/e1380eaa-bae4-4fa7-b6fc-5ae27a7d324f/20241210175811_Invoice_report_for_Fajar_Taufik.pdf",
                },
            ],
        },
    };

    println!("==[ Sending Broadcast (POST) ]==");
    let resp = client
        .post("/qontak/chat/v1/broadcasts/whatsapp/direct", &payload)
        .await?;
    print_response(&resp)?;

    if resp.status() != StatusCode::CREATED {
        bail!("failed to send broadcast");
    }
    let broadcast_id = resp.parse::<Created>()?.data.id;
    if broadcast_id.is_empty() {
        bail!("broadcast id not found in response");
    }
    info!("broadcast {broadcast_id} created");

    println!("\nWaiting 10 seconds before checking log...");
    tokio::time::sleep(Duration::from_secs(10)).await;

    println!("\n==[ Getting Broadcast Log (GET) ]==");
    let resp = client
        .get(&format!(
            "/qontak/chat/v1/broadcasts/{broadcast_id}/whatsapp/log"
        ))
        .await?;
    print_response(&resp)?;

    Ok(())
}
