/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::{invalid_config, Error};

/// Configuration loading from the process environment
pub mod loader;

/// Default host for object management requests (stat, copy, move, delete)
pub const DEFAULT_RS_HOST: &str = "https://rs.qbox.me";

/// Default host for listing requests
pub const DEFAULT_RSF_HOST: &str = "https://rsf.qbox.me";

/// Default host for persistent operation submission and status
pub const DEFAULT_API_HOST: &str = "https://api.qiniu.com";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    credentials: Credentials,
    rs_host: String,
    rsf_host: String,
    api_host: String,
    poll_delay: Duration,
    http_client: reqwest::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The credentials requests are signed with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL of the object management service
    pub fn rs_host(&self) -> &str {
        &self.rs_host
    }

    /// Base URL of the listing service
    pub fn rsf_host(&self) -> &str {
        &self.rsf_host
    }

    /// Base URL of the persistent operation service
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Default delay between two persistent operation status polls
    pub fn poll_delay(&self) -> Duration {
        self.poll_delay
    }

    /// The HTTP client used to send requests
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    credentials: Option<Credentials>,
    rs_host: Option<String>,
    rsf_host: Option<String>,
    api_host: Option<String>,
    poll_delay: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl Builder {
    /// Set the credentials requests are signed with.
    ///
    /// NOTE: Credentials are required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the object management host. Default is [`DEFAULT_RS_HOST`].
    pub fn rs_host(mut self, host: impl Into<String>) -> Self {
        self.rs_host = Some(host.into());
        self
    }

    /// Override the listing host. Default is [`DEFAULT_RSF_HOST`].
    pub fn rsf_host(mut self, host: impl Into<String>) -> Self {
        self.rsf_host = Some(host.into());
        self
    }

    /// Override the persistent operation host. Default is [`DEFAULT_API_HOST`].
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Point every service at the same base URL, e.g. a local mock server.
    pub fn endpoint(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.rs_host(url.clone()).rsf_host(url.clone()).api_host(url)
    }

    /// Delay between two status polls while waiting on a persistent operation.
    ///
    /// Default is 400ms.
    pub fn poll_delay(mut self, delay: Duration) -> Self {
        self.poll_delay = Some(delay);
        self
    }

    /// Set an explicit HTTP client to use.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Result<Config, Error> {
        let credentials = self
            .credentials
            .ok_or_else(|| invalid_config("credentials are required"))?;

        Ok(Config {
            credentials,
            rs_host: trim_host(self.rs_host, DEFAULT_RS_HOST),
            rsf_host: trim_host(self.rsf_host, DEFAULT_RSF_HOST),
            api_host: trim_host(self.api_host, DEFAULT_API_HOST),
            poll_delay: self.poll_delay.unwrap_or(crate::DEFAULT_POLL_DELAY),
            http_client: self.http_client.unwrap_or_default(),
        })
    }
}

fn trim_host(host: Option<String>, default: &str) -> String {
    host.as_deref()
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
