/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types::Entry;

use super::TransferKind;

/// Input type for copying or moving an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct TransferObjectInput {
    /// Bucket containing the source object
    pub src_bucket: String,

    /// Key of the source object
    pub src_key: String,

    /// Destination bucket
    pub dst_bucket: String,

    /// Destination key
    pub dst_key: String,

    /// Overwrite an existing destination object
    pub force: bool,
}

impl TransferObjectInput {
    /// Creates a new builder-style object to manufacture [`TransferObjectInput`](crate::operation::transfer_object::TransferObjectInput).
    pub fn builder() -> TransferObjectInputBuilder {
        TransferObjectInputBuilder::default()
    }

    /// Management request path for a transfer of `kind`
    pub(crate) fn path(&self, kind: TransferKind) -> String {
        let src = Entry::new(self.src_bucket.as_str(), self.src_key.as_str());
        let dst = Entry::new(self.dst_bucket.as_str(), self.dst_key.as_str());
        format!(
            "/{kind}/{}/{}/force/{}",
            src.encoded(),
            dst.encoded(),
            self.force
        )
    }
}

/// A builder for [`TransferObjectInput`](crate::operation::transfer_object::TransferObjectInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct TransferObjectInputBuilder {
    pub(crate) src_bucket: Option<String>,
    pub(crate) src_key: Option<String>,
    pub(crate) dst_bucket: Option<String>,
    pub(crate) dst_key: Option<String>,
    pub(crate) force: bool,
}

impl TransferObjectInputBuilder {
    /// Set the bucket containing the source object.
    ///
    /// NOTE: A source bucket is required.
    pub fn src_bucket(mut self, input: impl Into<String>) -> Self {
        self.src_bucket = Some(input.into());
        self
    }

    /// Bucket containing the source object
    pub fn get_src_bucket(&self) -> &Option<String> {
        &self.src_bucket
    }

    /// Set the key of the source object.
    ///
    /// NOTE: A source key is required.
    pub fn src_key(mut self, input: impl Into<String>) -> Self {
        self.src_key = Some(input.into());
        self
    }

    /// Key of the source object
    pub fn get_src_key(&self) -> &Option<String> {
        &self.src_key
    }

    /// Set the destination bucket.
    ///
    /// NOTE: A destination bucket is required.
    pub fn dst_bucket(mut self, input: impl Into<String>) -> Self {
        self.dst_bucket = Some(input.into());
        self
    }

    /// Destination bucket
    pub fn get_dst_bucket(&self) -> &Option<String> {
        &self.dst_bucket
    }

    /// Set the destination key.
    ///
    /// NOTE: A destination key is required.
    pub fn dst_key(mut self, input: impl Into<String>) -> Self {
        self.dst_key = Some(input.into());
        self
    }

    /// Destination key
    pub fn get_dst_key(&self) -> &Option<String> {
        &self.dst_key
    }

    /// Overwrite an existing destination object. Default is false.
    pub fn force(mut self, input: bool) -> Self {
        self.force = input;
        self
    }

    /// Overwrite an existing destination object
    pub fn get_force(&self) -> bool {
        self.force
    }

    /// Consumes the builder and constructs a [`TransferObjectInput`](crate::operation::transfer_object::TransferObjectInput).
    pub fn build(self) -> Result<TransferObjectInput, Error> {
        Ok(TransferObjectInput {
            src_bucket: error::required(self.src_bucket, "src_bucket", "A source bucket is required")?,
            src_key: error::required(self.src_key, "src_key", "A source key is required")?,
            dst_bucket: error::required(
                self.dst_bucket,
                "dst_bucket",
                "A destination bucket is required",
            )?,
            dst_key: error::required(self.dst_key, "dst_key", "A destination key is required")?,
            force: self.force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TransferObjectInput;
    use crate::operation::transfer_object::TransferKind;

    #[test]
    fn test_path() {
        let input = TransferObjectInput::builder()
            .src_bucket("bucket")
            .src_key("key")
            .dst_bucket("bucket")
            .dst_key("key")
            .build()
            .unwrap();
        assert_eq!(
            "/copy/YnVja2V0OmtleQ==/YnVja2V0OmtleQ==/force/false",
            input.path(TransferKind::Copy)
        );
    }

    #[test]
    fn test_move_path_with_force() {
        let input = TransferObjectInput::builder()
            .src_bucket("bucket")
            .src_key("key")
            .dst_bucket("bucket")
            .dst_key("key")
            .force(true)
            .build()
            .unwrap();
        assert!(input.path(TransferKind::Move).starts_with("/move/"));
        assert!(input.path(TransferKind::Move).ends_with("/force/true"));
    }

    #[test]
    fn test_missing_destination() {
        let err = TransferObjectInput::builder()
            .src_bucket("bucket")
            .src_key("key")
            .build()
            .unwrap_err();
        assert!(format!("{err:?}").contains("A destination bucket is required"));
    }
}
