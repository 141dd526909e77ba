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

//! Canonical forms of the request parts.
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html)

use crate::constants::{
    AWS_QUERY_ENCODE_SET, DEFAULT_PATH, EMPTY_STRING_SHA256, URI_PATH_ENCODE_SET,
};
use crate::{Headers, SigningRequest};
use percent_encoding::utf8_percent_encode;
use sigreq_core::hash::hex_sha256;
use std::fmt::{Display, Formatter};

/// Encode and sort key/value pairs into `k1=v1&k2=v2`.
///
/// Used for both the query string and form encoded bodies. Input is always
/// encoded as a raw string, so a `%` supplied by the caller becomes `%25`.
/// Pairs are ordered by the *encoded* key.
///
/// ```
/// use sigreq_aws_v4::canonical_params;
///
/// assert_eq!(canonical_params([("B", "2"), ("A", "1")]), "A=1&B=2");
/// assert_eq!(canonical_params([("Data", "UserId%3D1")]), "Data=UserId%253D1");
/// ```
pub fn canonical_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k.as_ref(), &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v.as_ref(), &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect();
    // Sort by encoded param name
    pairs.sort();

    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}

/// Encode the request path, an empty path becomes `/`.
pub fn canonical_uri(path: &str) -> String {
    if path.is_empty() {
        return DEFAULT_PATH.to_string();
    }
    utf8_percent_encode(path, &URI_PATH_ENCODE_SET).to_string()
}

/// Trim the value and collapse every whitespace run into a single space.
///
/// Quoted runs are collapsed too, unlike the AWS documentation describes.
/// Servers and SDKs compute it this way.
pub fn normalize_header_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical headers of a request.
///
/// Every header is signed, there is no exclusion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalHeaders {
    /// Sorted lowercase names joined by `;`, e.g. `content-type;host;x-amz-date`.
    pub signed_headers: String,
    /// `name:value\n` lines in the same order.
    pub canonical_block: String,
}

impl CanonicalHeaders {
    /// Build canonical headers from given headers.
    pub fn new(headers: &Headers) -> Self {
        let mut signed_headers = String::with_capacity(64);
        let mut canonical_block = String::with_capacity(256);

        // `Headers` iterates in lowercase name order already.
        for (idx, (name, value)) in headers.iter_lowercase().enumerate() {
            if idx != 0 {
                signed_headers.push(';');
            }
            signed_headers.push_str(name);

            canonical_block.push_str(name);
            canonical_block.push(':');
            canonical_block.push_str(&normalize_header_value(value));
            canonical_block.push('\n');
        }

        Self {
            signed_headers,
            canonical_block,
        }
    }
}

/// The six part canonical request.
///
/// `Display` renders the exact string that gets hashed:
///
/// ```shell
/// GET
/// /
/// Action=ListUsers&Version=2010-05-08
/// content-type:application/x-www-form-urlencoded; charset=utf-8
/// host:iam.amazonaws.com
/// x-amz-date:20150830T123600Z
///
/// content-type;host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest<'a> {
    method: String,
    uri: String,
    query: String,
    headers: &'a CanonicalHeaders,
    payload_hash: String,
}

impl<'a> CanonicalRequest<'a> {
    /// Build the canonical request of `req` with pre-computed canonical headers.
    pub fn new(req: &SigningRequest, headers: &'a CanonicalHeaders) -> Self {
        let method = req.method.to_uppercase();

        // GET always signs the empty body, whatever payload is attached.
        let payload_hash = if method == "GET" {
            EMPTY_STRING_SHA256.to_string()
        } else {
            hex_sha256(req.payload.as_deref().unwrap_or_default().as_bytes())
        };

        Self {
            uri: canonical_uri(&req.path),
            query: canonical_params(&req.query),
            method,
            headers,
            payload_hash,
        }
    }

    /// Hex encoded SHA-256 of the payload that is signed.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Hex encoded SHA-256 of the canonical request string.
    pub fn hash(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        // The block ends with its own newline.
        writeln!(f, "{}", self.headers.canonical_block)?;
        writeln!(f, "{}", self.headers.signed_headers)?;
        f.write_str(&self.payload_hash)
    }
}
