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

use crate::{Config, RequestDescriptor, RequestSigner, SignedRequest};
use log::info;
use sigreq_core::time::{now, timestamp_millis};
use sigreq_core::{Context, Result};

/// Requester signs requests with the loaded config and sends them
/// through the context's [`HttpSend`](sigreq_core::HttpSend).
///
/// ```no_run
/// use sigreq_aws_v4::{RequestDescriptor, Requester};
/// use sigreq_core::{Context, OsEnv};
/// use sigreq_http_send_reqwest::ReqwestHttpSend;
///
/// # async fn example() -> sigreq_core::Result<()> {
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_http_send(ReqwestHttpSend::default());
/// let requester = Requester::new(ctx);
///
/// let resp = requester
///     .send(
///         &RequestDescriptor::new("iam")
///             .with_query("Action", "ListUsers")
///             .with_query("Version", "2010-05-08")
///             .with_header("Host", "iam.amazonaws.com"),
///     )
///     .await?;
/// println!("{}", resp.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Requester {
    ctx: Context,
    config: Config,
    signer: RequestSigner,
}

impl Requester {
    /// Create a new requester, config is loaded from the context env.
    pub fn new(ctx: Context) -> Self {
        let config = Config::default().from_env(&ctx);
        Self {
            ctx,
            config,
            signer: RequestSigner::new(),
        }
    }

    /// Use given config. Fields left as `None` are still loaded from env.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config.from_env(&self.ctx);
        self
    }

    /// Replace the signer.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// The config in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sign the request without sending it.
    pub fn sign(&self, req: &RequestDescriptor) -> Result<SignedRequest> {
        self.signer.sign(req, &self.config)
    }

    /// Sign and send the request.
    ///
    /// The response body is returned as is, no retry is performed.
    pub async fn send(&self, req: &RequestDescriptor) -> Result<http::Response<String>> {
        let signed = self.sign(req)?;
        let http_req = signed.to_http_request()?;

        let stamp = timestamp_millis(now());
        info!(
            "Canonical Request #{stamp}:\n{}",
            signed.diagnostics.canonical_request
        );

        let resp = self.ctx.http_send_as_string(http_req).await?;

        let mut msg = format!("Response #{stamp}:\n{}", resp.status().as_u16());
        for (name, value) in resp.headers() {
            msg.push_str(&format!(
                "\n{}: {}",
                name,
                String::from_utf8_lossy(value.as_bytes())
            ));
        }
        msg.push_str(&format!("\n\n{}", resp.body()));
        info!("{msg}");

        Ok(resp)
    }
}
