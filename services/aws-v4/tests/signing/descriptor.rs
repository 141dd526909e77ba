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

use super::{sign, AMZ_DATE};
use pretty_assertions::assert_eq;
use sigreq_aws_v4::RequestDescriptor;

#[test]
fn test_sign_descriptor_from_json() {
    let req: RequestDescriptor = serde_json::from_value(serde_json::json!({
        "service": "iam",
        "query": { "Version": "2010-05-08", "Action": "ListUsers" },
        "headers": {
            "Host": "iam.amazonaws.com",
            "X-Amz-Date": AMZ_DATE,
        },
    }))
    .expect("descriptor must be valid");

    let signed = sign(&req, "us-east-1");
    assert_eq!(
        signed.authorization(),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        )
    );
}

#[test]
fn test_descriptor_is_not_modified() {
    let raw = serde_json::json!({
        "method": "POST",
        "service": "sns",
        "headers": { "Host": "sns.us-west-2.amazonaws.com" },
        "payloadParams": { "Action": "ListTopics" },
    });
    let req: RequestDescriptor =
        serde_json::from_value(raw.clone()).expect("descriptor must be valid");

    let _ = sign(&req, "us-west-2");

    let after = serde_json::to_value(&req).expect("descriptor must serialize");
    assert_eq!(after["headers"], raw["headers"]);
    assert_eq!(after["payloadParams"], raw["payloadParams"]);
    assert_eq!(after["payload"], serde_json::Value::Null);
    assert_eq!(after["region"], serde_json::Value::Null);
}
