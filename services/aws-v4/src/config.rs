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

use crate::constants::*;
use crate::Credential;
use sigreq_core::utils::Redact;
use sigreq_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for aws services.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_REGION`
    pub region: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}

impl Config {
    /// Load config from env, fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.region.is_none() {
            self.region = ctx.env_var(AWS_REGION);
        }
        if self.access_key_id.is_none() {
            self.access_key_id = ctx.env_var(AWS_ACCESS_KEY_ID);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = ctx.env_var(AWS_SECRET_ACCESS_KEY);
        }

        self
    }

    /// Build the credential used for signing.
    ///
    /// Missing keys become empty strings.
    pub fn credential(&self) -> Credential {
        Credential {
            access_key_id: self.access_key_id.clone().unwrap_or_default(),
            secret_access_key: self.secret_access_key.clone().unwrap_or_default(),
        }
    }
}
