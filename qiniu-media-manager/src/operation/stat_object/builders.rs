/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{StatObject, StatObjectInputBuilder};
use crate::error::Error;
use crate::types::ObjectStat;

/// Fluent builder for fetching the metadata of an object
#[derive(Debug)]
pub struct StatObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: StatObjectInputBuilder,
}

impl StatObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the object metadata
    pub async fn send(self) -> Result<ObjectStat, Error> {
        let input = self.inner.build()?;
        StatObject::orchestrate(self.handle, input).await
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

/// Fluent builder for checking whether an object exists
#[derive(Debug)]
pub struct FileExistsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: StatObjectInputBuilder,
}

impl FileExistsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Resolve to whether the object exists
    pub async fn send(self) -> Result<bool, Error> {
        let input = self.inner.build()?;
        StatObject::exists(self.handle, input).await
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
