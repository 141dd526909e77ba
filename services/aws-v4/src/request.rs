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

use crate::canonical::{canonical_params, canonical_uri};
use crate::constants::{AUTHORIZATION, HOST};
use crate::Headers;
use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use sigreq_core::{Error, Result};
use std::collections::HashMap;

/// A partially specified request to be signed.
///
/// Every field except `service` may be left out; [`RequestSigner`](crate::RequestSigner)
/// fills in the defaults on its own copy and never touches this value.
///
/// Descriptors can be read from JSON with camelCase keys:
///
/// ```
/// use sigreq_aws_v4::RequestDescriptor;
///
/// let req: RequestDescriptor = serde_json::from_str(r#"{
///     "service": "iam",
///     "query": { "Action": "ListUsers", "Version": "2010-05-08" },
///     "headers": { "Host": "iam.amazonaws.com" }
/// }"#).unwrap();
///
/// assert_eq!(req.service, "iam");
/// assert!(req.method.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestDescriptor {
    /// HTTP method, case-insensitive. Defaults to `GET`.
    pub method: Option<String>,
    /// Region, defaults to the configured region.
    pub region: Option<String>,
    /// Service name used in the credential scope, e.g. `iam`.
    pub service: String,
    /// Request path. Defaults to `/`.
    pub path: Option<String>,
    /// Query parameters, order is irrelevant.
    pub query: HashMap<String, String>,
    /// Request headers.
    pub headers: Option<Headers>,
    /// Raw request body.
    pub payload: Option<String>,
    /// Form parameters that are encoded into the body.
    ///
    /// Takes precedence over `payload`.
    pub payload_params: Option<HashMap<String, String>>,
}

impl RequestDescriptor {
    /// Create a new descriptor for given service.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
            ..Default::default()
        }
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set the path.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name, value);
        self
    }

    /// Set the raw payload.
    pub fn with_payload(mut self, payload: &str) -> Self {
        self.payload = Some(payload.to_string());
        self
    }

    /// Add a form parameter to the payload.
    pub fn with_payload_param(mut self, key: &str, value: &str) -> Self {
        self.payload_params
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }
}

/// A fully resolved request: every default has been applied.
///
/// This is the input the canonicalization functions work on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method as given, uppercased only when signing.
    pub method: String,
    /// Region of the credential scope.
    pub region: String,
    /// Service of the credential scope.
    pub service: String,
    /// Request path, not yet encoded.
    pub path: String,
    /// Query parameters, not yet encoded.
    pub query: HashMap<String, String>,
    /// Request headers.
    pub headers: Headers,
    /// Request body.
    pub payload: Option<String>,
}

/// Intermediate strings captured while signing.
///
/// For diagnostics only; nothing here is sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// The canonical request that was hashed.
    pub canonical_request: String,
    /// The string that was signed.
    pub string_to_sign: String,
}

/// A signed request ready to be handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// The resolved request, headers include `Authorization`.
    pub request: SigningRequest,
    /// Intermediate strings of this signing call.
    pub diagnostics: Diagnostics,
}

impl SignedRequest {
    /// The computed `Authorization` header value.
    pub fn authorization(&self) -> Option<&str> {
        self.request.headers.get(AUTHORIZATION)
    }

    /// Endpoint of this request: `https://<host>/`.
    pub fn endpoint(&self) -> Result<String> {
        Ok(format!("https://{}/", self.host()?))
    }

    fn host(&self) -> Result<&str> {
        self.request
            .headers
            .get(HOST)
            .ok_or_else(|| Error::request_invalid("host header is required to build endpoint"))
    }

    /// Convert into an `http::Request` for [`HttpSend`](sigreq_core::HttpSend).
    ///
    /// The query string is the exact encoded form that was signed.
    pub fn to_http_request(&self) -> Result<http::Request<Bytes>> {
        let req = &self.request;

        let mut uri = format!("https://{}{}", self.host()?, canonical_uri(&req.path));
        if !req.query.is_empty() {
            uri.push('?');
            uri.push_str(&canonical_params(&req.query));
        }

        let method = Method::from_bytes(req.method.to_uppercase().as_bytes())?;
        let body = req.payload.clone().map(Bytes::from).unwrap_or_default();

        let mut http_req = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(body)?;

        let headers = http_req.headers_mut();
        for (name, value) in req.headers.iter() {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let mut value = HeaderValue::from_str(value)?;
            if name == http::header::AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        Ok(http_req)
    }
}
