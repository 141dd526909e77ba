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

//! AWS SigV4 request signer.
//!
//! This crate signs query style AWS requests (IAM, SNS, STS...) with
//! `AWS4-HMAC-SHA256` and can optionally send them through any
//! [`HttpSend`](sigreq_core::HttpSend).
//!
//! ## Example
//!
//! ```
//! use sigreq_aws_v4::{Config, RequestDescriptor, RequestSigner};
//!
//! let config = Config {
//!     region: Some("us-east-1".to_string()),
//!     access_key_id: Some("AKIDEXAMPLE".to_string()),
//!     secret_access_key: Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string()),
//! };
//!
//! let req = RequestDescriptor::new("iam")
//!     .with_query("Action", "ListUsers")
//!     .with_query("Version", "2010-05-08")
//!     .with_header("Host", "iam.amazonaws.com")
//!     .with_header("X-Amz-Date", "20150830T123600Z");
//!
//! let signed = RequestSigner::new().sign(&req, &config).unwrap();
//! assert_eq!(
//!     signed.authorization(),
//!     Some("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
//!           SignedHeaders=content-type;host;x-amz-date, \
//!           Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7")
//! );
//! ```

#![warn(missing_docs)]

mod canonical;
pub use canonical::canonical_params;
pub use canonical::canonical_uri;
pub use canonical::normalize_header_value;
pub use canonical::CanonicalHeaders;
pub use canonical::CanonicalRequest;

mod config;
pub use config::Config;

mod constants;

mod credential;
pub use credential::Credential;

mod headers;
pub use headers::Headers;

mod request;
pub use request::Diagnostics;
pub use request::RequestDescriptor;
pub use request::SignedRequest;
pub use request::SigningRequest;

mod requester;
pub use requester::Requester;

mod sign_request;
pub use sign_request::amz_date;
pub use sign_request::authorization_header_value;
pub use sign_request::calculate_signature;
pub use sign_request::credential_scope;
pub use sign_request::date_stamp;
pub use sign_request::generate_signing_key;
pub use sign_request::hex_signature;
pub use sign_request::string_to_sign;
pub use sign_request::RequestSigner;
pub use sign_request::Signature;
