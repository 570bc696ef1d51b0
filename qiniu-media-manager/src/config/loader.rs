/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use crate::auth::Credentials;
use crate::config::Builder;
use crate::error::{invalid_config, Error};
use crate::Config;

const ACCESS_KEY_VAR: &str = "QINIU_ACCESS_KEY";
const SECRET_KEY_VAR: &str = "QINIU_SECRET_KEY";
const RS_HOST_VAR: &str = "QINIU_RS_HOST";
const RSF_HOST_VAR: &str = "QINIU_RSF_HOST";
const API_HOST_VAR: &str = "QINIU_API_HOST";

/// Load client [`Config`] from the environment.
///
/// Reads `QINIU_ACCESS_KEY` and `QINIU_SECRET_KEY`, plus the optional host overrides
/// `QINIU_RS_HOST`, `QINIU_RSF_HOST` and `QINIU_API_HOST`.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    credentials: Option<Credentials>,
    rs_host: Option<String>,
    rsf_host: Option<String>,
    api_host: Option<String>,
}

impl ConfigLoader {
    /// Use explicit credentials instead of the environment.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the object management host.
    pub fn rs_host(mut self, host: impl Into<String>) -> Self {
        self.rs_host = Some(host.into());
        self
    }

    /// Override the listing host.
    pub fn rsf_host(mut self, host: impl Into<String>) -> Self {
        self.rsf_host = Some(host.into());
        self
    }

    /// Override the persistent operation host.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Delay between two status polls while waiting on a persistent operation.
    pub fn poll_delay(mut self, delay: Duration) -> Self {
        self.builder = self.builder.poll_delay(delay);
        self
    }

    /// Set an explicit HTTP client to use.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.builder = self.builder.http_client(client);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during loader construction, the override values will be
    /// used. Otherwise, values are taken from the environment, falling back to the defaults.
    pub fn load(self) -> Result<Config, Error> {
        self.load_with(|name| std::env::var(name).ok())
    }

    fn load_with(self, env: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let credentials = match self.credentials {
            Some(credentials) => credentials,
            None => {
                let access_key = env(ACCESS_KEY_VAR)
                    .ok_or_else(|| invalid_config(format!("{ACCESS_KEY_VAR} is not set")))?;
                let secret_key = env(SECRET_KEY_VAR)
                    .ok_or_else(|| invalid_config(format!("{SECRET_KEY_VAR} is not set")))?;
                Credentials::new(access_key, secret_key)
            }
        };

        let mut builder = self.builder.credentials(credentials);
        if let Some(host) = self.rs_host.or_else(|| env(RS_HOST_VAR)) {
            builder = builder.rs_host(host);
        }
        if let Some(host) = self.rsf_host.or_else(|| env(RSF_HOST_VAR)) {
            builder = builder.rsf_host(host);
        }
        if let Some(host) = self.api_host.or_else(|| env(API_HOST_VAR)) {
            builder = builder.api_host(host);
        }

        tracing::debug!(access_key = %builder_access_key(&builder), "loaded client config");
        builder.build()
    }
}

fn builder_access_key(builder: &Builder) -> &str {
    builder
        .credentials
        .as_ref()
        .map(Credentials::access_key)
        .unwrap_or_default()
}
