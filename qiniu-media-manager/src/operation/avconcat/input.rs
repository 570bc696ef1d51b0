/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::auth::urlsafe_base64;
use crate::error::{self, Error};
use crate::operation::pfop::{build_op, op_save};
use crate::types::Entry;

use super::MAX_CONCAT_URLS;

/// Input type for appending videos to a base video
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AvconcatInput {
    /// Bucket containing the base video
    pub bucket: String,

    /// Key of the base video
    pub key: String,

    /// URLs of the videos appended after the base video, in order
    pub urls: Vec<String>,

    /// Bucket the result is saved to
    pub save_bucket: String,

    /// Key the result is saved as
    pub saveas: String,

    /// Concatenation mode
    pub mode: String,

    /// Output container format
    pub format: String,

    /// Processing pipeline
    pub pipeline: String,

    /// URL notified when processing finishes
    pub notify_url: Option<String>,
}

impl AvconcatInput {
    /// Creates a new builder-style object to manufacture [`AvconcatInput`](crate::operation::avconcat::AvconcatInput).
    pub fn builder() -> AvconcatInputBuilder {
        AvconcatInputBuilder::default()
    }

    /// The fop command this input submits, including its `saveas` target
    pub fn fop(&self) -> String {
        let mut op = build_op("avconcat", Some(&self.mode), &[("format", self.format.clone())]);
        for url in &self.urls {
            op.push('/');
            op.push_str(&urlsafe_base64(url));
        }
        op_save(&op, &Entry::new(self.save_bucket.as_str(), self.saveas.as_str()))
    }
}

/// A builder for [`AvconcatInput`](crate::operation::avconcat::AvconcatInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct AvconcatInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) urls: Option<Vec<String>>,
    pub(crate) save_bucket: Option<String>,
    pub(crate) saveas: Option<String>,
    pub(crate) mode: Option<String>,
    pub(crate) format: Option<String>,
    pub(crate) pipeline: Option<String>,
    pub(crate) notify_url: Option<String>,
}

impl AvconcatInputBuilder {
    /// Set the bucket containing the base video.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Bucket containing the base video
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key of the base video.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the base video
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Append a video URL.
    ///
    /// To override the contents of this collection use [`set_urls`](Self::set_urls)
    pub fn url(mut self, input: impl Into<String>) -> Self {
        self.urls.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set the video URLs appended after the base video, at most five.
    pub fn set_urls(mut self, input: Option<Vec<String>>) -> Self {
        self.urls = input;
        self
    }

    /// Video URLs appended after the base video
    pub fn get_urls(&self) -> &Option<Vec<String>> {
        &self.urls
    }

    /// Set the bucket the result is saved to.
    ///
    /// NOTE: A save bucket is required.
    pub fn save_bucket(mut self, input: impl Into<String>) -> Self {
        self.save_bucket = Some(input.into());
        self
    }

    /// Bucket the result is saved to
    pub fn get_save_bucket(&self) -> &Option<String> {
        &self.save_bucket
    }

    /// Set the key the result is saved as.
    ///
    /// NOTE: A target key is required.
    pub fn saveas(mut self, input: impl Into<String>) -> Self {
        self.saveas = Some(input.into());
        self
    }

    /// Key the result is saved as
    pub fn get_saveas(&self) -> &Option<String> {
        &self.saveas
    }

    /// Concatenation mode. Default is [`DEFAULT_MODE`](crate::operation::avconcat::DEFAULT_MODE).
    pub fn mode(mut self, input: impl Into<String>) -> Self {
        self.mode = Some(input.into());
        self
    }

    /// Concatenation mode
    pub fn set_mode(mut self, input: Option<String>) -> Self {
        self.mode = input;
        self
    }

    /// Concatenation mode
    pub fn get_mode(&self) -> &Option<String> {
        &self.mode
    }

    /// Output container format. Default is [`DEFAULT_FORMAT`](crate::operation::avconcat::DEFAULT_FORMAT).
    pub fn format(mut self, input: impl Into<String>) -> Self {
        self.format = Some(input.into());
        self
    }

    /// Output container format
    pub fn set_format(mut self, input: Option<String>) -> Self {
        self.format = input;
        self
    }

    /// Output container format
    pub fn get_format(&self) -> &Option<String> {
        &self.format
    }

    /// Processing pipeline. Default is [`DEFAULT_PIPELINE`](crate::operation::avconcat::DEFAULT_PIPELINE).
    pub fn pipeline(mut self, input: impl Into<String>) -> Self {
        self.pipeline = Some(input.into());
        self
    }

    /// Processing pipeline
    pub fn set_pipeline(mut self, input: Option<String>) -> Self {
        self.pipeline = input;
        self
    }

    /// Processing pipeline
    pub fn get_pipeline(&self) -> &Option<String> {
        &self.pipeline
    }

    /// URL notified when processing finishes
    pub fn notify_url(mut self, input: impl Into<String>) -> Self {
        self.notify_url = Some(input.into());
        self
    }

    /// URL notified when processing finishes
    pub fn set_notify_url(mut self, input: Option<String>) -> Self {
        self.notify_url = input;
        self
    }

    /// URL notified when processing finishes
    pub fn get_notify_url(&self) -> &Option<String> {
        &self.notify_url
    }

    /// Consumes the builder and constructs an [`AvconcatInput`](crate::operation::avconcat::AvconcatInput).
    pub fn build(self) -> Result<AvconcatInput, Error> {
        let urls = self.urls.unwrap_or_default();
        if urls.is_empty() {
            return Err(error::missing_field("urls", "At least one video to append is required"));
        }
        if urls.len() > MAX_CONCAT_URLS {
            return Err(error::invalid_input(format!(
                "cannot append more than {MAX_CONCAT_URLS} videos, got {}",
                urls.len()
            )));
        }

        Ok(AvconcatInput {
            bucket: error::required(self.bucket, "bucket", "A base bucket is required")?,
            key: error::required(self.key, "key", "A base key is required")?,
            urls,
            save_bucket: error::required(
                self.save_bucket,
                "save_bucket",
                "A bucket to save the result to is required",
            )?,
            saveas: error::required(self.saveas, "saveas", "A key to save the result as is required")?,
            mode: self.mode.unwrap_or_else(|| super::DEFAULT_MODE.to_owned()),
            format: self.format.unwrap_or_else(|| super::DEFAULT_FORMAT.to_owned()),
            pipeline: self
                .pipeline
                .unwrap_or_else(|| super::DEFAULT_PIPELINE.to_owned()),
            notify_url: self.notify_url,
        })
    }
}
