/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use super::{WaitPfop, WaitPfopInputBuilder};
use crate::error::Error;
use crate::types::{PersistentId, PfopStatus};

/// Fluent builder for waiting on a persistent operation
#[derive(Debug)]
pub struct WaitPfopFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: WaitPfopInputBuilder,
}

impl WaitPfopFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Poll until the operation succeeds or fails.
    ///
    /// Resolves to the final status on success. A failed operation yields an error of kind
    /// [`PfopFailed`](crate::error::ErrorKind::PfopFailed) carrying the last status.
    pub async fn send(self) -> Result<PfopStatus, Error> {
        let input = self.inner.build()?;
        WaitPfop::orchestrate(self.handle, input).await
    }

    /// Set the persistent operation id.
    pub fn persistent_id(mut self, input: impl Into<PersistentId>) -> Self {
        self.inner = self.inner.persistent_id(input);
        self
    }

    /// Fixed delay between two polls. Defaults to the client's configured delay.
    pub fn delay(mut self, input: Duration) -> Self {
        self.inner = self.inner.delay(input);
        self
    }

    /// Give up after `input` polls that all reported the operation pending.
    pub fn max_attempts(mut self, input: u32) -> Self {
        self.inner = self.inner.max_attempts(input);
        self
    }
}
