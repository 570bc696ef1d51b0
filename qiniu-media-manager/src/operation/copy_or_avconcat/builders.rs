/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{CopyOrAvconcat, CopyOrAvconcatInputBuilder, CopyOrAvconcatOutput};
use crate::error::Error;

/// Fluent builder for the concatenate-or-copy workflow
#[derive(Debug)]
pub struct CopyOrAvconcatFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CopyOrAvconcatInputBuilder,
}

impl CopyOrAvconcatFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Check the base object and either submit a concatenation or copy the source into place
    pub async fn send(self) -> Result<CopyOrAvconcatOutput, Error> {
        let input = self.inner.build()?;
        CopyOrAvconcat::orchestrate(self.handle, input).await
    }

    /// Set the bucket of the base object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the key of the base object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Set the bucket of the object copied when the base is missing.
    pub fn src_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.src_bucket(input);
        self
    }

    /// Set the key of the object copied when the base is missing.
    pub fn src_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.src_key(input);
        self
    }

    /// Append a video URL used when the base exists.
    pub fn url(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.url(input);
        self
    }

    /// Set the video URLs used when the base exists, at most five.
    pub fn set_urls(mut self, input: Option<Vec<String>>) -> Self {
        self.inner = self.inner.set_urls(input);
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
