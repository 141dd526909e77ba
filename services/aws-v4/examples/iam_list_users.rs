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

//! Sign and send an IAM `ListUsers` request.
//!
//! ```shell
//! AWS_REGION=us-east-1 AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... \
//!     RUST_LOG=info cargo run --example iam_list_users
//! ```

use log::info;
use sigreq_aws_v4::{RequestDescriptor, Requester};
use sigreq_core::{Context, OsEnv, Result};
use sigreq_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let requester = Requester::new(ctx);
    info!("loaded config: {:?}", requester.config());

    let req = RequestDescriptor::new("iam")
        .with_query("Action", "ListUsers")
        .with_query("Version", "2010-05-08")
        .with_header("Host", "iam.amazonaws.com");

    let resp = requester.send(&req).await?;
    println!("status: {}", resp.status());
    println!("{}", resp.body());
    Ok(())
}
