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

use super::{list_users, sign, AMZ_DATE};
use pretty_assertions::assert_eq;
use sigreq_aws_v4::{canonical_params, RequestDescriptor};
use test_case::test_case;

#[test]
fn test_header_whitespace_is_collapsed() {
    let req = RequestDescriptor::new("iam")
        .with_header("Host", "iam.amazonaws.com")
        .with_header("X-Amz-Date", AMZ_DATE)
        .with_header("My-Header1", "    a   b   c ")
        .with_header("My-Header2", "    \"a   b   c\"");

    let signed = sign(&req, "us-east-1");

    assert_eq!(
        signed.diagnostics.canonical_request,
        "GET\n\
         /\n\
         \n\
         content-type:application/x-www-form-urlencoded; charset=utf-8\n\
         host:iam.amazonaws.com\n\
         my-header1:a b c\n\
         my-header2:\"a b c\"\n\
         x-amz-date:20150830T123600Z\n\
         \n\
         content-type;host;my-header1;my-header2;x-amz-date\n\
         e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        signed.authorization(),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;my-header1;my-header2;x-amz-date, \
             Signature=d3bec441ffacc172f1351dc05faf480fe8793b4ec55d0d77fa2a9576f963e0bc"
        )
    );
}

#[test]
fn test_query_order_does_not_matter() {
    let forward = RequestDescriptor::new("iam")
        .with_query("A", "1")
        .with_query("B", "2");
    let backward = RequestDescriptor::new("iam")
        .with_query("B", "2")
        .with_query("A", "1");

    assert_eq!(canonical_params(&forward.query), "A=1&B=2");
    assert_eq!(canonical_params(&backward.query), "A=1&B=2");
}

#[test]
fn test_lowercase_method_and_encoded_path() {
    let req = RequestDescriptor::new("iam")
        .with_method("post")
        .with_path("/my path/*")
        .with_query("Key*", "a b")
        .with_query("B", "2")
        .with_query("A", "1")
        .with_header("Host", "iam.amazonaws.com")
        .with_header("X-Amz-Date", AMZ_DATE);

    let signed = sign(&req, "us-east-1");

    assert_eq!(
        signed.diagnostics.canonical_request,
        "POST\n\
         /my%20path/*\n\
         A=1&B=2&Key%2A=a%20b\n\
         content-type:application/x-www-form-urlencoded; charset=utf-8\n\
         host:iam.amazonaws.com\n\
         x-amz-date:20150830T123600Z\n\
         \n\
         content-type;host;x-amz-date\n\
         e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        signed.authorization(),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=4ed004bddc29bba877ba407d885a0f7d1735e308055087cf216e6c6fb70d9f59"
        )
    );

    let http_req = signed.to_http_request().expect("must be valid");
    assert_eq!(
        http_req.uri().to_string(),
        "https://iam.amazonaws.com/my%20path/*?A=1&B=2&Key%2A=a%20b"
    );
}

#[test_case("content-type", "text/plain"; "lowercase")]
#[test_case("CONTENT-TYPE", "text/plain"; "uppercase")]
fn test_caller_content_type_is_kept(name: &str, value: &str) {
    let signed = sign(&list_users().with_header(name, value), "us-east-1");

    assert_eq!(signed.request.headers.get("Content-Type"), Some(value));
    assert!(signed
        .diagnostics
        .canonical_request
        .contains("\ncontent-type:text/plain\n"));
    assert_eq!(signed.request.headers.len(), 4);
}

#[test]
fn test_duplicate_headers_last_write_wins() {
    let req = list_users()
        .with_header("X-Custom", "first")
        .with_header("x-custom", "second");

    let signed = sign(&req, "us-east-1");
    let names: Vec<_> = signed.request.headers.iter().map(|(k, _)| k).collect();

    assert!(names.contains(&"x-custom"));
    assert!(!names.contains(&"X-Custom"));
    assert!(signed
        .diagnostics
        .canonical_request
        .contains("\nx-custom:second\n"));
    assert!(!signed.diagnostics.canonical_request.contains("first"));
}
