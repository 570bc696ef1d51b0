/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Input type for listing the objects of a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ListObjectsInput {
    /// The bucket to list.
    pub bucket: String,

    /// Limit the response to keys that begin with the given prefix
    pub prefix: Option<String>,

    /// Character used to group keys into common prefixes
    pub delimiter: Option<String>,

    /// Maximum number of objects per page
    pub limit: Option<u32>,

    /// Marker to resume listing from
    pub marker: Option<String>,
}

impl ListObjectsInput {
    /// Creates a new builder-style object to manufacture [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
    pub fn builder() -> ListObjectsInputBuilder {
        ListObjectsInputBuilder::default()
    }

    /// The bucket to list.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Character used to group keys into common prefixes
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// Maximum number of objects per page
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Marker to resume listing from
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}

/// A builder for [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) delimiter: Option<String>,
    pub(crate) limit: Option<u32>,
    pub(crate) marker: Option<String>,
}

impl ListObjectsInputBuilder {
    /// Set the bucket to list.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to list.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to list.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Character used to group keys into common prefixes
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.delimiter = Some(input.into());
        self
    }

    /// Character used to group keys into common prefixes
    pub fn set_delimiter(mut self, input: Option<String>) -> Self {
        self.delimiter = input;
        self
    }

    /// Character used to group keys into common prefixes
    pub fn get_delimiter(&self) -> &Option<String> {
        &self.delimiter
    }

    /// Maximum number of objects per page. The service caps this at 1000.
    pub fn limit(mut self, input: u32) -> Self {
        self.limit = Some(input);
        self
    }

    /// Maximum number of objects per page
    pub fn set_limit(mut self, input: Option<u32>) -> Self {
        self.limit = input;
        self
    }

    /// Maximum number of objects per page
    pub fn get_limit(&self) -> &Option<u32> {
        &self.limit
    }

    /// Resume listing from a marker returned by an earlier page
    pub fn marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Resume listing from a marker returned by an earlier page
    pub fn set_marker(mut self, input: Option<String>) -> Self {
        self.marker = input;
        self
    }

    /// Marker to resume listing from
    pub fn get_marker(&self) -> &Option<String> {
        &self.marker
    }

    /// Consumes the builder and constructs a [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
    pub fn build(self) -> Result<ListObjectsInput, Error> {
        let bucket = error::required(self.bucket, "bucket", "A bucket is required")?;
        if self.limit == Some(0) {
            return Err(error::invalid_input("limit must be greater than zero"));
        }

        Ok(ListObjectsInput {
            bucket,
            prefix: self.prefix,
            delimiter: self.delimiter,
            limit: self.limit,
            marker: self.marker.filter(|m| !m.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ListObjectsInput;
    use crate::error::ErrorKind;

    #[test]
    fn test_no_bucket_error() {
        let err = ListObjectsInput::builder().prefix("a/").build().unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert!(format!("{err:?}").contains("A bucket is required"));
    }

    #[test]
    fn test_zero_limit_error() {
        let err = ListObjectsInput::builder()
            .bucket("b")
            .limit(0)
            .build()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
