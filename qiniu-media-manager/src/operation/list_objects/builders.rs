/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{ListObjectsInputBuilder, ListObjectsPaginator};
use crate::error::Error;
use crate::types::ListItem;

/// Fluent builder for listing the objects of a bucket
#[derive(Debug)]
pub struct ListObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListObjectsInputBuilder,
}

impl ListObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List every page and return all objects
    pub async fn send(self) -> Result<Vec<ListItem>, Error> {
        let input = self.inner.build()?;
        crate::operation::list_objects::ListObjects::orchestrate(self.handle, input).await
    }

    /// List every page, handing each object to `handler` instead of collecting them.
    ///
    /// Returns the number of objects handled.
    pub async fn for_each_item<F>(self, handler: F) -> Result<u64, Error>
    where
        F: FnMut(ListItem),
    {
        let input = self.inner.build()?;
        crate::operation::list_objects::ListObjects::for_each_item(self.handle, input, handler)
            .await
    }

    /// Page through the listing one request at a time
    pub fn into_paginator(self) -> Result<ListObjectsPaginator, Error> {
        let input = self.inner.build()?;
        Ok(ListObjectsPaginator::new(self.handle, input))
    }

    /// Set the bucket to list.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to list.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to list.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }

    /// Character used to group keys into common prefixes
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.delimiter(input);
        self
    }

    /// Character used to group keys into common prefixes
    pub fn get_delimiter(&self) -> &Option<String> {
        self.inner.get_delimiter()
    }

    /// Maximum number of objects per page
    pub fn limit(mut self, input: u32) -> Self {
        self.inner = self.inner.limit(input);
        self
    }

    /// Maximum number of objects per page
    pub fn set_limit(mut self, input: Option<u32>) -> Self {
        self.inner = self.inner.set_limit(input);
        self
    }

    /// Maximum number of objects per page
    pub fn get_limit(&self) -> &Option<u32> {
        self.inner.get_limit()
    }

    /// Resume listing from a marker returned by an earlier page
    pub fn marker(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.marker(input);
        self
    }

    /// Marker to resume listing from
    pub fn get_marker(&self) -> &Option<String> {
        self.inner.get_marker()
    }
}

impl crate::operation::list_objects::input::ListObjectsInputBuilder {
    /// List every page with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Vec<ListItem>, Error> {
        let mut fluent_builder = client.list_objects();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
