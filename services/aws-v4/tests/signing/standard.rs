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
use sigreq_aws_v4::{
    calculate_signature, generate_signing_key, Config, Credential, RequestDescriptor,
    RequestSigner, SigningRequest,
};
use sigreq_core::ErrorKind;

const SNS_ARN: &str = "arn:aws:sns:us-west-2:025606354027:app/APNS_SANDBOX/AmazonMobilePush";
const SNS_TOKEN: &str = "395a6f7bf0e87a3f26cbd2e817f12811cd10ca4593d0d9cc7a114c25241949d8";

#[test]
fn test_get_list_users() {
    let signed = sign(&list_users(), "us-east-1");

    assert_eq!(
        signed.diagnostics.canonical_request,
        "GET\n\
         /\n\
         Action=ListUsers&Version=2010-05-08\n\
         content-type:application/x-www-form-urlencoded; charset=utf-8\n\
         host:iam.amazonaws.com\n\
         x-amz-date:20150830T123600Z\n\
         \n\
         content-type;host;x-amz-date\n\
         e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        signed.diagnostics.string_to_sign,
        "AWS4-HMAC-SHA256\n\
         20150830T123600Z\n\
         20150830/us-east-1/iam/aws4_request\n\
         f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
    );
    assert_eq!(
        signed.authorization(),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        )
    );
    assert_eq!(
        signed.endpoint().expect("host exists"),
        "https://iam.amazonaws.com/"
    );

    let headers: Vec<_> = signed.request.headers.iter().map(|(k, _)| k).collect();
    assert_eq!(
        headers,
        vec!["Authorization", "Content-Type", "Host", "X-Amz-Date"]
    );
}

#[test]
fn test_signing_key_of_example() {
    let key = generate_signing_key(super::SECRET_KEY, "20150830", "us-east-1", "iam");

    assert_eq!(
        hex::encode(key),
        "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
    );
}

#[test]
fn test_post_payload_params() {
    let req = RequestDescriptor::new("sns")
        .with_method("POST")
        .with_header("Host", "sns.us-west-2.amazonaws.com")
        .with_header("X-Amz-Date", AMZ_DATE)
        .with_payload_param("Action", "CreatePlatformEndpoint")
        .with_payload_param("PlatformApplicationArn", SNS_ARN)
        .with_payload_param("Token", SNS_TOKEN)
        .with_payload_param("CustomUserData", "UserId%3D27576823");

    let signed = sign(&req, "us-west-2");

    assert_eq!(
        signed.request.payload.as_deref(),
        Some(
            "Action=CreatePlatformEndpoint\
             &CustomUserData=UserId%253D27576823\
             &PlatformApplicationArn=arn%3Aaws%3Asns%3Aus-west-2%3A025606354027%3Aapp%2FAPNS_SANDBOX%2FAmazonMobilePush\
             &Token=395a6f7bf0e87a3f26cbd2e817f12811cd10ca4593d0d9cc7a114c25241949d8"
        )
    );
    assert!(signed
        .diagnostics
        .canonical_request
        .ends_with("\nc2e9605b811aa19fd1eeb691527137ebbe70cb2495b26fd785bfa039b7f0d203"));
    assert_eq!(
        signed.authorization(),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-west-2/sns/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=abcf6e85486eeaa701d77bfccb9fdd2be2302cc12958405add46d12999437f6c"
        )
    );

    let http_req = signed.to_http_request().expect("must be valid");
    assert_eq!(http_req.method(), &http::Method::POST);
    assert_eq!(http_req.uri().to_string(), "https://sns.us-west-2.amazonaws.com/");
    assert_eq!(http_req.body(), signed.request.payload.as_deref().unwrap_or_default().as_bytes());
}

#[test]
fn test_get_ignores_payload() {
    let with_payload = sign(&list_users().with_payload("ignored"), "us-east-1");
    let without_payload = sign(&list_users(), "us-east-1");

    assert!(with_payload
        .diagnostics
        .canonical_request
        .ends_with("\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"));
    assert_eq!(with_payload.authorization(), without_payload.authorization());
}

#[test]
fn test_region_from_request_wins() {
    let signed = sign(&list_users().with_region("eu-west-1"), "us-east-1");

    assert!(signed
        .authorization()
        .expect("authorization exists")
        .contains("/20150830/eu-west-1/iam/aws4_request, "));
}

#[test]
fn test_date_header_is_filled_when_absent() {
    let mut req = list_users();
    if let Some(headers) = req.headers.as_mut() {
        headers.remove("X-Amz-Date");
    }

    let signed = RequestSigner::new()
        .sign(&req, &Config::default())
        .expect("date is filled in by default");
    let amz_date = signed
        .request
        .headers
        .get("x-amz-date")
        .expect("date header exists");
    assert_eq!(amz_date.len(), AMZ_DATE.len());
    assert!(signed
        .authorization()
        .expect("authorization exists")
        .contains(&format!("/{}//iam/aws4_request, ", &amz_date[..8])));
}

#[test]
fn test_calculate_signature_without_date() {
    let err = calculate_signature(&SigningRequest::default(), &Credential::default())
        .expect_err("no date header");
    assert_eq!(err.kind(), ErrorKind::MissingDateHeader);
}
