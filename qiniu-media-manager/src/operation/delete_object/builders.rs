/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{DeleteObject, DeleteObjectInputBuilder};
use crate::error::Error;

/// Fluent builder for deleting an object
#[derive(Debug)]
pub struct DeleteObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteObjectInputBuilder,
}

impl DeleteObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete the object
    pub async fn send(self) -> Result<(), Error> {
        let input = self.inner.build()?;
        DeleteObject::orchestrate(self.handle, input).await
    }

    /// Set the bucket containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the key of the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}
