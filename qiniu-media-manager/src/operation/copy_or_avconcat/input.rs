/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::operation::avconcat::{DEFAULT_FORMAT, DEFAULT_MODE, DEFAULT_PIPELINE};

/// Input type for the concatenate-or-copy workflow
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CopyOrAvconcatInput {
    /// Bucket of the base object, which is also where the result lands
    pub bucket: String,

    /// Key of the base object, which is also the result key
    pub key: String,

    /// Bucket of the object copied into place when the base is missing
    pub src_bucket: String,

    /// Key of the object copied into place when the base is missing
    pub src_key: String,

    /// URLs of the videos appended when the base exists.
    ///
    /// Only validated when the base exists, the copy branch ignores them.
    pub urls: Option<Vec<String>>,

    /// Concatenation mode
    pub mode: String,

    /// Output container format
    pub format: String,

    /// Processing pipeline
    pub pipeline: String,

    /// URL notified when processing finishes
    pub notify_url: Option<String>,
}

impl CopyOrAvconcatInput {
    /// Creates a new builder-style object to manufacture [`CopyOrAvconcatInput`](crate::operation::copy_or_avconcat::CopyOrAvconcatInput).
    pub fn builder() -> CopyOrAvconcatInputBuilder {
        CopyOrAvconcatInputBuilder::default()
    }
}

/// A builder for [`CopyOrAvconcatInput`](crate::operation::copy_or_avconcat::CopyOrAvconcatInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CopyOrAvconcatInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) src_bucket: Option<String>,
    pub(crate) src_key: Option<String>,
    pub(crate) urls: Option<Vec<String>>,
    pub(crate) mode: Option<String>,
    pub(crate) format: Option<String>,
    pub(crate) pipeline: Option<String>,
    pub(crate) notify_url: Option<String>,
}

impl CopyOrAvconcatInputBuilder {
    /// Set the bucket of the base object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Bucket of the base object
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key of the base object.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the base object
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Set the bucket of the object copied when the base is missing.
    ///
    /// NOTE: A source bucket is required.
    pub fn src_bucket(mut self, input: impl Into<String>) -> Self {
        self.src_bucket = Some(input.into());
        self
    }

    /// Bucket of the object copied when the base is missing
    pub fn get_src_bucket(&self) -> &Option<String> {
        &self.src_bucket
    }

    /// Set the key of the object copied when the base is missing.
    ///
    /// NOTE: A source key is required.
    pub fn src_key(mut self, input: impl Into<String>) -> Self {
        self.src_key = Some(input.into());
        self
    }

    /// Key of the object copied when the base is missing
    pub fn get_src_key(&self) -> &Option<String> {
        &self.src_key
    }

    /// Append a video URL used when the base exists.
    pub fn url(mut self, input: impl Into<String>) -> Self {
        self.urls.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set the video URLs used when the base exists, at most five.
    pub fn set_urls(mut self, input: Option<Vec<String>>) -> Self {
        self.urls = input;
        self
    }

    /// Video URLs used when the base exists
    pub fn get_urls(&self) -> &Option<Vec<String>> {
        &self.urls
    }

    /// Concatenation mode
    pub fn mode(mut self, input: impl Into<String>) -> Self {
        self.mode = Some(input.into());
        self
    }

    /// Output container format
    pub fn format(mut self, input: impl Into<String>) -> Self {
        self.format = Some(input.into());
        self
    }

    /// Processing pipeline
    pub fn pipeline(mut self, input: impl Into<String>) -> Self {
        self.pipeline = Some(input.into());
        self
    }

    /// URL notified when processing finishes
    pub fn notify_url(mut self, input: impl Into<String>) -> Self {
        self.notify_url = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`CopyOrAvconcatInput`](crate::operation::copy_or_avconcat::CopyOrAvconcatInput).
    pub fn build(self) -> Result<CopyOrAvconcatInput, Error> {
        Ok(CopyOrAvconcatInput {
            bucket: error::required(self.bucket, "bucket", "A base bucket is required")?,
            key: error::required(self.key, "key", "A base key is required")?,
            src_bucket: error::required(self.src_bucket, "src_bucket", "A source bucket is required")?,
            src_key: error::required(self.src_key, "src_key", "A source key is required")?,
            urls: self.urls,
            mode: self.mode.unwrap_or_else(|| DEFAULT_MODE.to_owned()),
            format: self.format.unwrap_or_else(|| DEFAULT_FORMAT.to_owned()),
            pipeline: self.pipeline.unwrap_or_else(|| DEFAULT_PIPELINE.to_owned()),
            notify_url: self.notify_url,
        })
    }
}
