/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Input type for deleting an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteObjectInput {
    /// The bucket containing the object.
    pub bucket: String,

    /// Key of the object
    pub key: String,
}

impl DeleteObjectInput {
    /// Creates a new builder-style object to manufacture [`DeleteObjectInput`](crate::operation::delete_object::DeleteObjectInput).
    pub fn builder() -> DeleteObjectInputBuilder {
        DeleteObjectInputBuilder::default()
    }
}

/// A builder for [`DeleteObjectInput`](crate::operation::delete_object::DeleteObjectInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl DeleteObjectInputBuilder {
    /// Set the bucket containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
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

    /// Key of the object
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`DeleteObjectInput`](crate::operation::delete_object::DeleteObjectInput).
    pub fn build(self) -> Result<DeleteObjectInput, Error> {
        Ok(DeleteObjectInput {
            bucket: error::required(self.bucket, "bucket", "A bucket is required")?,
            key: error::required(self.key, "key", "A key is required")?,
        })
    }
}
