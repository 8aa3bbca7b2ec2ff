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

use anyhow::Result;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use http::{Method, StatusCode};
use log::debug;
use mekari_api::{Client, Config};
use mekari_core::time::parse_http_date;
use mekari_core::{Context, ErrorKind};
use mekari_http_send_reqwest::ReqwestHttpSend;
use mockito::{Matcher, Request, Server, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;
use sha2::Sha256;
use test_case::test_case;

const SECRET: &str = "topsecret";

fn header<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.header(name).first().and_then(|v| v.to_str().ok())
}

/// Recompute the signature from what has been received, the way the api does.
fn verify_signature(req: &Request) -> bool {
    let (Some(date), Some(authorization)) = (header(req, "date"), header(req, "authorization"))
    else {
        return false;
    };
    if parse_http_date(date).is_err() {
        return false;
    }

    let payload = format!(
        "date: {date}\n{} {} HTTP/1.1",
        req.method(),
        req.path_and_query()
    );
    let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).expect("any key length");
    mac.update(payload.as_bytes());
    let signature = BASE64_STANDARD.encode(mac.finalize().into_bytes());

    let expected = format!(
        r#"hmac username="client_id", algorithm="hmac-sha256", headers="date request-line", signature="{signature}""#
    );
    debug!("expect authorization {expected}, got {authorization}");
    authorization == expected
}

async fn init(secret: &str) -> (ServerGuard, Client) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = Server::new_async().await;
    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let config = Config::new()
        .with_base_url(server.url())
        .with_client_id("client_id")
        .with_client_secret(secret);

    let client = Client::new(ctx, config).expect("config must be valid");
    (server, client)
}

#[tokio::test]
async fn test_echo() -> Result<()> {
    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("POST", "/v1/echo")
        .match_header("content-type", "application/json")
        .match_request(verify_signature)
        .with_status(201)
        .with_body_from_request(|req| req.body().cloned().unwrap_or_default())
        .create_async()
        .await;

    let resp = client
        .send(Method::POST, "/v1/echo", Some(&json!({"a": 1})))
        .await?;
    mock.assert_async().await;

    assert_eq!(StatusCode::CREATED, resp.status());
    assert_eq!(Some(&json!({"a": 1})), resp.body());
    Ok(())
}

#[tokio::test]
async fn test_wrong_secret_is_rejected_by_server() -> Result<()> {
    let (mut server, client) = init("topsecreu").await;
    let mock = server
        .mock("POST", "/v1/echo")
        .match_request(verify_signature)
        .with_status(201)
        .expect(0)
        .create_async()
        .await;

    // Unmatched requests are answered with 501, which is data for the client.
    let status = match client.post("/v1/echo", &json!({"a": 1})).await {
        Ok(resp) => resp.status(),
        Err(err) => err.status().expect("a status must have been received"),
    };
    mock.assert_async().await;

    assert_eq!(StatusCode::NOT_IMPLEMENTED, status);
    Ok(())
}

#[tokio::test]
async fn test_query_is_sent_and_signed_verbatim() -> Result<()> {
    let path = "/qontak/chat/v1/contacts?name=John%20Doe&page=1&sort=-created_at&tags=a,b";

    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("GET", Matcher::Any)
        .match_request(move |req| req.path_and_query() == path && verify_signature(req))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let resp = client.get(path).await?;
    mock.assert_async().await;

    assert_eq!(StatusCode::OK, resp.status());
    assert_eq!(Some(&json!({"data": []})), resp.body());
    Ok(())
}

#[test_case("/v1/echo?q='x'" ; "quote in query")]
#[test_case("/v1/a/./b" ; "dot segment")]
#[test_case("/v1/a/../b" ; "parent segment")]
#[test_case("/v1/{id}" ; "braces in path")]
#[tokio::test]
async fn test_path_rewritten_on_the_wire_is_refused(path: &str) -> Result<()> {
    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client.get(path).await.expect_err("path can't be sent as signed");
    mock.assert_async().await;

    assert_eq!(ErrorKind::RequestInvalid, err.kind());
    assert!(err.is_local());
    assert_eq!(None, err.status());
    Ok(())
}

#[tokio::test]
async fn test_get_sends_no_body() -> Result<()> {
    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("GET", "/qontak/chat/v1/broadcasts/b-1/whatsapp/log")
        .match_body(Matcher::Exact(String::new()))
        .match_request(verify_signature)
        .with_status(200)
        .with_body(r#"{"status":"success","data":[]}"#)
        .create_async()
        .await;

    let resp = client
        .get("/qontak/chat/v1/broadcasts/b-1/whatsapp/log")
        .await?;
    mock.assert_async().await;

    assert!(resp.is_success());
    Ok(())
}

#[tokio::test]
async fn test_empty_body() -> Result<()> {
    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("GET", "/v1/echo")
        .with_status(200)
        .create_async()
        .await;

    let resp = client.get("/v1/echo").await?;
    mock.assert_async().await;

    assert_eq!(StatusCode::OK, resp.status());
    assert_eq!(None, resp.body());
    Ok(())
}

#[tokio::test]
async fn test_body_not_json() -> Result<()> {
    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("GET", "/v1/echo")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client.get("/v1/echo").await.expect_err("body is not json");
    mock.assert_async().await;

    assert_eq!(ErrorKind::Decode, err.kind());
    assert_eq!(Some(StatusCode::OK), err.status());
    Ok(())
}

#[tokio::test]
async fn test_error_status_pass_through() -> Result<()> {
    let (mut server, client) = init(SECRET).await;
    let mock = server
        .mock("POST", "/qontak/chat/v1/broadcasts/whatsapp/direct")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"error","error":{"code":422,"messages":["to_number is invalid"]}}"#)
        .create_async()
        .await;

    let resp = client
        .post(
            "/qontak/chat/v1/broadcasts/whatsapp/direct",
            &json!({"to_number": "6281xxxx"}),
        )
        .await?;
    mock.assert_async().await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, resp.status());
    assert_eq!(
        Some(&json!({"status": "error", "error": {"code": 422, "messages": ["to_number is invalid"]}})),
        resp.body()
    );
    Ok(())
}

#[tokio::test]
async fn test_connection_refused() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?
    };
    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let config = Config::new()
        .with_base_url(format!("http://{addr}"))
        .with_client_id("client_id")
        .with_client_secret(SECRET);
    let client = Client::new(ctx, config)?;

    let err = client.get("/v1/echo").await.expect_err("nothing is listening");
    assert_eq!(ErrorKind::Transport, err.kind());
    Ok(())
}
