// Copyright 2025 Apollo Client Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Connection settings resolution.
//!
//! Flags win over the environment: `--url` over `APOLLO_URL`, `--token` over
//! `APOLLO_TOKEN`.

use anyhow::{bail, Result};
use apollo_client::ClientConfig;
use std::time::Duration;

pub const URL_ENV: &str = "APOLLO_URL";
pub const TOKEN_ENV: &str = "APOLLO_TOKEN";

/// Builds a client configuration from flags and the process environment.
pub fn resolve(url: Option<String>, token: Option<String>, timeout_ms: u64) -> Result<ClientConfig> {
    resolve_with(url, token, timeout_ms, |key| std::env::var(key).ok())
}

/// Like [`resolve`], reading variables through `env`.
pub fn resolve_with(
    url: Option<String>,
    token: Option<String>,
    timeout_ms: u64,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig> {
    let Some(url) = url.or_else(|| env(URL_ENV)) else {
        bail!("no service url: pass --url or set {}", URL_ENV);
    };
    let Some(token) = token.or_else(|| env(TOKEN_ENV)) else {
        bail!("no token: pass --token or set {}", TOKEN_ENV);
    };

    let config = ClientConfig::new(url, token).with_timeout(Duration::from_millis(timeout_ms));
    config.validate()?;
    Ok(config)
}
