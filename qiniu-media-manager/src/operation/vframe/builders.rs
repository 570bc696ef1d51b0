/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::VframeInputBuilder;
use crate::error::Error;
use crate::types::{PersistentId, Rotate};

/// Fluent builder for extracting a frame from a video
#[derive(Debug)]
pub struct VframeFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: VframeInputBuilder,
}

impl VframeFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Submit the frame extraction and return the persistent operation id
    pub async fn send(self) -> Result<PersistentId, Error> {
        let input = self.inner.build()?;
        crate::operation::vframe::Vframe::orchestrate(self.handle, input).await
    }

    /// Set the bucket containing the source video.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the key of the source video.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Set the bucket the frame is saved to.
    pub fn save_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.save_bucket(input);
        self
    }

    /// Set the key the frame is saved as.
    pub fn saveas(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.saveas(input);
        self
    }

    /// Position of the frame in seconds. Default is 0.
    pub fn offset(mut self, input: impl Into<f64>) -> Self {
        self.inner = self.inner.offset(input);
        self
    }

    /// Output width in pixels
    pub fn width(mut self, input: u32) -> Self {
        self.inner = self.inner.width(input);
        self
    }

    /// Output height in pixels
    pub fn height(mut self, input: u32) -> Self {
        self.inner = self.inner.height(input);
        self
    }

    /// Rotation applied to the frame
    pub fn rotate(mut self, input: Rotate) -> Self {
        self.inner = self.inner.rotate(input);
        self
    }

    /// Output image format
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

impl crate::operation::vframe::input::VframeInputBuilder {
    /// Submit the frame extraction with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<PersistentId, Error> {
        let mut fluent_builder = client.vframe();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
