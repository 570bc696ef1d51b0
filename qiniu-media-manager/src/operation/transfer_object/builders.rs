/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{TransferKind, TransferObject, TransferObjectInputBuilder};
use crate::error::Error;

/// Fluent builder for copying or moving an object
#[derive(Debug)]
pub struct TransferObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    kind: TransferKind,
    inner: TransferObjectInputBuilder,
}

impl TransferObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, kind: TransferKind) -> Self {
        Self {
            handle,
            kind,
            inner: ::std::default::Default::default(),
        }
    }

    /// Execute the copy or move
    pub async fn send(self) -> Result<(), Error> {
        let input = self.inner.build()?;
        TransferObject::orchestrate(self.handle, self.kind, input).await
    }

    /// Whether this builder copies or moves
    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    /// Set the bucket containing the source object.
    pub fn src_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.src_bucket(input);
        self
    }

    /// Set the key of the source object.
    pub fn src_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.src_key(input);
        self
    }

    /// Set the destination bucket.
    pub fn dst_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.dst_bucket(input);
        self
    }

    /// Set the destination key.
    pub fn dst_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.dst_key(input);
        self
    }

    /// Overwrite an existing destination object. Default is false.
    pub fn force(mut self, input: bool) -> Self {
        self.inner = self.inner.force(input);
        self
    }
}
