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

use crate::canonical::{canonical_params, CanonicalHeaders, CanonicalRequest};
use crate::constants::*;
use crate::{Config, Credential, Diagnostics, Headers, RequestDescriptor, SignedRequest, SigningRequest};
use log::{debug, warn};
use sigreq_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use sigreq_core::time::{format_iso8601, now, DateTime};
use sigreq_core::{Error, Result};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Signing is synchronous and keeps no state between calls, a single
/// signer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time used for the default `X-Amz-Date`.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Apply defaults to a copy of `req`.
    ///
    /// - method: `GET`
    /// - region: `config.region`
    /// - path: `/`
    /// - payload: encoded from `payload_params` if present
    /// - `Content-Type`: `application/x-www-form-urlencoded; charset=utf-8`
    /// - `X-Amz-Date`: current time
    pub fn resolve(&self, req: &RequestDescriptor, config: &Config) -> SigningRequest {
        let method = non_empty(&req.method).unwrap_or(DEFAULT_METHOD);
        let region = non_empty(&req.region)
            .or_else(|| non_empty(&config.region))
            .unwrap_or_default();
        let path = non_empty(&req.path).unwrap_or(DEFAULT_PATH);

        let payload = match &req.payload_params {
            Some(params) => {
                if req.payload.is_some() {
                    warn!("both payload and payload_params are set, payload is replaced by payload_params");
                }
                Some(canonical_params(params))
            }
            None => req.payload.clone(),
        };

        let mut headers = req.headers.clone().unwrap_or_default();
        // An empty value counts as not supplied.
        if headers.get(CONTENT_TYPE).map_or(true, str::is_empty) {
            headers.insert(DEFAULT_CONTENT_TYPE_NAME, DEFAULT_CONTENT_TYPE);
        }
        if headers.get(X_AMZ_DATE).map_or(true, str::is_empty) {
            let now = self.time.unwrap_or_else(now);
            headers.insert(DEFAULT_X_AMZ_DATE_NAME, format_iso8601(now));
        }

        SigningRequest {
            method: method.to_string(),
            region: region.to_string(),
            service: req.service.clone(),
            path: path.to_string(),
            query: req.query.clone(),
            headers,
            payload,
        }
    }

    /// Sign the request described by `req`.
    ///
    /// `req` is never modified, the returned [`SignedRequest`] carries a
    /// resolved copy with the `Authorization` header attached.
    pub fn sign(&self, req: &RequestDescriptor, config: &Config) -> Result<SignedRequest> {
        let mut signing_req = self.resolve(req, config);
        let signature = calculate_signature(&signing_req, &config.credential())?;

        signing_req
            .headers
            .insert(AUTHORIZATION, signature.authorization);

        Ok(SignedRequest {
            request: signing_req,
            diagnostics: signature.diagnostics,
        })
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|v| !v.is_empty())
}

/// Output of signing a resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Lowercase hex signature.
    pub signature: String,
    /// Value of the `Authorization` header.
    pub authorization: String,
    /// Intermediate strings.
    pub diagnostics: Diagnostics,
}

/// Calculate the signature of a resolved request.
///
/// Every intermediate value is computed exactly once.
pub fn calculate_signature(req: &SigningRequest, cred: &Credential) -> Result<Signature> {
    let amz_date = amz_date(&req.headers)?;
    let date = date_stamp(amz_date);

    let canonical_headers = CanonicalHeaders::new(&req.headers);
    let canonical_request = CanonicalRequest::new(req, &canonical_headers).to_string();
    debug!("calculated canonical request: {canonical_request}");
    let encoded_req = hex_sha256(canonical_request.as_bytes());

    let scope = credential_scope(date, &req.region, &req.service);
    debug!("calculated scope: {scope}");

    let string_to_sign = string_to_sign(amz_date, &scope, &encoded_req);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_access_key, date, &req.region, &req.service);
    let signature = hex_signature(&signing_key, &string_to_sign);

    let authorization = authorization_header_value(
        &cred.access_key_id,
        &scope,
        &canonical_headers.signed_headers,
        &signature,
    );

    Ok(Signature {
        signature,
        authorization,
        diagnostics: Diagnostics {
            canonical_request,
            string_to_sign,
        },
    })
}

/// Look up the `x-amz-date` header under any casing.
pub fn amz_date(headers: &Headers) -> Result<&str> {
    headers
        .get(X_AMZ_DATE)
        .ok_or_else(|| Error::missing_date_header("x-amz-date header is required for signing"))
}

/// Date part of an `x-amz-date` value: `20150830T123600Z` => `20150830`.
pub fn date_stamp(amz_date: &str) -> &str {
    amz_date.split_once('T').map_or(amz_date, |(date, _)| date)
}

/// Scope: `20220313/<region>/<service>/aws4_request`
pub fn credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
    format!("{date_stamp}/{region}/{service}/{AWS4_REQUEST}")
}

/// StringToSign:
///
/// ```shell
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(amz_date: &str, scope: &str, canonical_request_hash: &str) -> String {
    format!("{ALGORITHM}\n{amz_date}\n{scope}\n{canonical_request_hash}")
}

/// Derive the signing key through the HMAC chain.
///
/// Each step feeds its raw bytes as the key of the next one.
pub fn generate_signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

/// Lowercase hex HMAC-SHA256 of the string to sign.
pub fn hex_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex_hmac_sha256(signing_key, string_to_sign.as_bytes())
}

/// Format the `Authorization` header value.
///
/// No validation is done on any part.
pub fn authorization_header_value(
    access_key_id: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!("{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}")
}
