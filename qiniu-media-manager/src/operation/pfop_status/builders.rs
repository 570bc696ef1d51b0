/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{PfopStatusInputBuilder, PfopStatusOperation};
use crate::error::Error;
use crate::types::{PersistentId, PfopStatus};

/// Fluent builder for fetching the status of a persistent operation
#[derive(Debug)]
pub struct PfopStatusFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PfopStatusInputBuilder,
}

impl PfopStatusFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the current status
    pub async fn send(self) -> Result<PfopStatus, Error> {
        let input = self.inner.build()?;
        PfopStatusOperation::orchestrate(self.handle, input).await
    }

    /// Set the persistent operation id.
    pub fn persistent_id(mut self, input: impl Into<PersistentId>) -> Self {
        self.inner = self.inner.persistent_id(input);
        self
    }

    /// Persistent operation id
    pub fn get_persistent_id(&self) -> &Option<PersistentId> {
        self.inner.get_persistent_id()
    }
}
