/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::operation::pfop::{build_op, op_save};
use crate::types::{Entry, Rotate};

/// Input type for extracting a single frame of a video
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct VframeInput {
    /// Bucket containing the source video
    pub bucket: String,

    /// Key of the source video
    pub key: String,

    /// Bucket the frame is saved to
    pub save_bucket: String,

    /// Key the frame is saved as
    pub saveas: String,

    /// Position of the frame in seconds
    pub offset: f64,

    /// Output width in pixels
    pub width: Option<u32>,

    /// Output height in pixels
    pub height: Option<u32>,

    /// Rotation applied to the frame
    pub rotate: Option<Rotate>,

    /// Output image format
    pub format: String,

    /// Processing pipeline
    pub pipeline: String,

    /// URL notified when processing finishes
    pub notify_url: Option<String>,
}

impl VframeInput {
    /// Creates a new builder-style object to manufacture [`VframeInput`](crate::operation::vframe::VframeInput).
    pub fn builder() -> VframeInputBuilder {
        VframeInputBuilder::default()
    }

    /// The fop command this input submits, including its `saveas` target
    pub fn fop(&self) -> String {
        let mut args = vec![("offset", self.offset.to_string())];
        if let Some(width) = self.width {
            args.push(("w", width.to_string()));
        }
        if let Some(height) = self.height {
            args.push(("h", height.to_string()));
        }
        if let Some(rotate) = self.rotate {
            args.push(("rotate", rotate.to_string()));
        }
        let op = build_op("vframe", Some(&self.format), &args);
        op_save(&op, &Entry::new(self.save_bucket.as_str(), self.saveas.as_str()))
    }
}

/// A builder for [`VframeInput`](crate::operation::vframe::VframeInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct VframeInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) save_bucket: Option<String>,
    pub(crate) saveas: Option<String>,
    pub(crate) offset: Option<f64>,
    pub(crate) width: Option<u32>,
    pub(crate) height: Option<u32>,
    pub(crate) rotate: Option<Rotate>,
    pub(crate) format: Option<String>,
    pub(crate) pipeline: Option<String>,
    pub(crate) notify_url: Option<String>,
}

impl VframeInputBuilder {
    /// Set the bucket containing the source video.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Bucket containing the source video
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key of the source video.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the source video
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Set the bucket the frame is saved to.
    ///
    /// NOTE: A save bucket is required.
    pub fn save_bucket(mut self, input: impl Into<String>) -> Self {
        self.save_bucket = Some(input.into());
        self
    }

    /// Bucket the frame is saved to
    pub fn get_save_bucket(&self) -> &Option<String> {
        &self.save_bucket
    }

    /// Set the key the frame is saved as.
    ///
    /// NOTE: A target key is required.
    pub fn saveas(mut self, input: impl Into<String>) -> Self {
        self.saveas = Some(input.into());
        self
    }

    /// Key the frame is saved as
    pub fn get_saveas(&self) -> &Option<String> {
        &self.saveas
    }

    /// Position of the frame in seconds. Default is 0.
    pub fn offset(mut self, input: impl Into<f64>) -> Self {
        self.offset = Some(input.into());
        self
    }

    /// Position of the frame in seconds
    pub fn get_offset(&self) -> &Option<f64> {
        &self.offset
    }

    /// Output width in pixels
    pub fn width(mut self, input: u32) -> Self {
        self.width = Some(input);
        self
    }

    /// Output width in pixels
    pub fn set_width(mut self, input: Option<u32>) -> Self {
        self.width = input;
        self
    }

    /// Output width in pixels
    pub fn get_width(&self) -> &Option<u32> {
        &self.width
    }

    /// Output height in pixels
    pub fn height(mut self, input: u32) -> Self {
        self.height = Some(input);
        self
    }

    /// Output height in pixels
    pub fn set_height(mut self, input: Option<u32>) -> Self {
        self.height = input;
        self
    }

    /// Output height in pixels
    pub fn get_height(&self) -> &Option<u32> {
        &self.height
    }

    /// Rotation applied to the frame
    pub fn rotate(mut self, input: Rotate) -> Self {
        self.rotate = Some(input);
        self
    }

    /// Rotation applied to the frame
    pub fn set_rotate(mut self, input: Option<Rotate>) -> Self {
        self.rotate = input;
        self
    }

    /// Rotation applied to the frame
    pub fn get_rotate(&self) -> &Option<Rotate> {
        &self.rotate
    }

    /// Output image format. Default is [`DEFAULT_FORMAT`](crate::operation::vframe::DEFAULT_FORMAT).
    pub fn format(mut self, input: impl Into<String>) -> Self {
        self.format = Some(input.into());
        self
    }

    /// Output image format
    pub fn get_format(&self) -> &Option<String> {
        &self.format
    }

    /// Processing pipeline. Default is [`DEFAULT_PIPELINE`](crate::operation::vframe::DEFAULT_PIPELINE).
    pub fn pipeline(mut self, input: impl Into<String>) -> Self {
        self.pipeline = Some(input.into());
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

    /// Consumes the builder and constructs a [`VframeInput`](crate::operation::vframe::VframeInput).
    pub fn build(self) -> Result<VframeInput, Error> {
        let offset = self.offset.unwrap_or(0.0);
        if !offset.is_finite() || offset < 0.0 {
            return Err(error::invalid_input(format!(
                "offset must be a non-negative number of seconds, got {offset}"
            )));
        }

        Ok(VframeInput {
            bucket: error::required(self.bucket, "bucket", "A source bucket is required")?,
            key: error::required(self.key, "key", "A source key is required")?,
            save_bucket: error::required(
                self.save_bucket,
                "save_bucket",
                "A bucket to save the frame to is required",
            )?,
            saveas: error::required(self.saveas, "saveas", "A key to save the frame as is required")?,
            offset,
            width: self.width,
            height: self.height,
            rotate: self.rotate,
            format: self
                .format
                .unwrap_or_else(|| super::DEFAULT_FORMAT.to_owned()),
            pipeline: self
                .pipeline
                .unwrap_or_else(|| super::DEFAULT_PIPELINE.to_owned()),
            notify_url: self.notify_url,
        })
    }
}
