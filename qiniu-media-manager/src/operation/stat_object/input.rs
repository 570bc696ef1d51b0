/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Input type addressing a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct StatObjectInput {
    /// The bucket containing the object.
    pub bucket: String,

    /// Key of the object
    pub key: String,
}

impl StatObjectInput {
    /// Creates a new builder-style object to manufacture [`StatObjectInput`](crate::operation::stat_object::StatObjectInput).
    pub fn builder() -> StatObjectInputBuilder {
        StatObjectInputBuilder::default()
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`StatObjectInput`](crate::operation::stat_object::StatObjectInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct StatObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl StatObjectInputBuilder {
    /// Set the bucket containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key of the object.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Set the key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`StatObjectInput`](crate::operation::stat_object::StatObjectInput).
    pub fn build(self) -> Result<StatObjectInput, Error> {
        Ok(StatObjectInput {
            bucket: error::required(self.bucket, "bucket", "A bucket is required")?,
            key: error::required(self.key, "key", "A key is required")?,
        })
    }
}
