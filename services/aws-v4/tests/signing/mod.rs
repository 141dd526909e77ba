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

mod descriptor;
mod special_chars;
mod standard;

use sigreq_aws_v4::{Config, RequestDescriptor, RequestSigner, SignedRequest};

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
pub const AMZ_DATE: &str = "20150830T123600Z";

/// Config holding the published AWS example keys.
pub fn example_config(region: &str) -> Config {
    Config {
        region: Some(region.to_string()),
        access_key_id: Some(ACCESS_KEY.to_string()),
        secret_access_key: Some(SECRET_KEY.to_string()),
    }
}

/// The `ListUsers` request from the AWS documentation.
pub fn list_users() -> RequestDescriptor {
    RequestDescriptor::new("iam")
        .with_query("Action", "ListUsers")
        .with_query("Version", "2010-05-08")
        .with_header("Host", "iam.amazonaws.com")
        .with_header("X-Amz-Date", AMZ_DATE)
}

/// Sign `req` with the example keys.
pub fn sign(req: &RequestDescriptor, region: &str) -> SignedRequest {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new()
        .sign(req, &example_config(region))
        .expect("signing must succeed")
}
