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

//! Core components shared by the sigreq crates.
//!
//! The signing engine itself is a pure function of its inputs. Everything
//! that touches the outside world is reached through a [`Context`]:
//!
//! - [`Env`]: the property store used to look up region and keys
//! - [`HttpSend`]: the transport that dispatches a signed request
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use sigreq_core::{Context, StaticEnv};
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("AWS_REGION".to_string(), "us-east-1".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("AWS_REGION").as_deref(), Some("us-east-1"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: UTC timestamp helpers
//! - [`utils`]: redaction of sensitive values

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
