/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::AvconcatInputBuilder;
use crate::error::Error;
use crate::types::PersistentId;

/// Fluent builder for concatenating videos
#[derive(Debug)]
pub struct AvconcatFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: AvconcatInputBuilder,
}

impl AvconcatFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Submit the concatenation and return the persistent operation id
    pub async fn send(self) -> Result<PersistentId, Error> {
        let input = self.inner.build()?;
        crate::operation::avconcat::Avconcat::orchestrate(self.handle, input).await
    }

    /// Set the bucket containing the base video.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the key of the base video.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Append a video URL.
    pub fn url(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.url(input);
        self
    }

    /// Set the video URLs appended after the base video, at most five.
    pub fn set_urls(mut self, input: Option<Vec<String>>) -> Self {
        self.inner = self.inner.set_urls(input);
        self
    }

    /// Video URLs appended after the base video
    pub fn get_urls(&self) -> &Option<Vec<String>> {
        self.inner.get_urls()
    }

    /// Set the bucket the result is saved to.
    pub fn save_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.save_bucket(input);
        self
    }

    /// Set the key the result is saved as.
    pub fn saveas(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.saveas(input);
        self
    }

    /// Concatenation mode
    pub fn mode(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.mode(input);
        self
    }

    /// Output container format
    pub fn format(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.format(input);
        self
    }

    /// Processing pipeline
    pub fn pipeline(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.pipeline(input);
        self
    }

    /// URL notified when processing finishes
    pub fn notify_url(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.notify_url(input);
        self
    }
}

impl crate::operation::avconcat::input::AvconcatInputBuilder {
    /// Submit the concatenation with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<PersistentId, Error> {
        let mut fluent_builder = client.avconcat();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
