/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use crate::error::{self, Error};
use crate::types::PersistentId;

/// Input type for waiting on a persistent operation
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct WaitPfopInput {
    /// Persistent operation id
    pub persistent_id: PersistentId,

    /// Delay between polls, the client's configured delay when unset
    pub delay: Option<Duration>,

    /// Give up after this many polls. Unbounded when unset.
    pub max_attempts: Option<u32>,
}

impl WaitPfopInput {
    /// Creates a new builder-style object to manufacture [`WaitPfopInput`](crate::operation::wait_pfop::WaitPfopInput).
    pub fn builder() -> WaitPfopInputBuilder {
        WaitPfopInputBuilder::default()
    }
}

/// A builder for [`WaitPfopInput`](crate::operation::wait_pfop::WaitPfopInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct WaitPfopInputBuilder {
    pub(crate) persistent_id: Option<PersistentId>,
    pub(crate) delay: Option<Duration>,
    pub(crate) max_attempts: Option<u32>,
}

impl WaitPfopInputBuilder {
    /// Set the persistent operation id.
    ///
    /// NOTE: A persistent operation id is required.
    pub fn persistent_id(mut self, input: impl Into<PersistentId>) -> Self {
        self.persistent_id = Some(input.into());
        self
    }

    /// Persistent operation id
    pub fn get_persistent_id(&self) -> &Option<PersistentId> {
        &self.persistent_id
    }

    /// Fixed delay between two polls
    pub fn delay(mut self, input: Duration) -> Self {
        self.delay = Some(input);
        self
    }

    /// Fixed delay between two polls
    pub fn get_delay(&self) -> &Option<Duration> {
        &self.delay
    }

    /// Give up after `input` polls that all reported the operation pending
    pub fn max_attempts(mut self, input: u32) -> Self {
        self.max_attempts = Some(input);
        self
    }

    /// Give up after this many polls. `None` polls forever.
    pub fn set_max_attempts(mut self, input: Option<u32>) -> Self {
        self.max_attempts = input;
        self
    }

    /// Maximum number of polls
    pub fn get_max_attempts(&self) -> &Option<u32> {
        &self.max_attempts
    }

    /// Consumes the builder and constructs a [`WaitPfopInput`](crate::operation::wait_pfop::WaitPfopInput).
    pub fn build(self) -> Result<WaitPfopInput, Error> {
        let persistent_id = error::required(
            self.persistent_id,
            "persistent_id",
            "A persistent operation id is required",
        )?;
        if self.max_attempts == Some(0) {
            return Err(error::invalid_input("max_attempts must be greater than zero"));
        }
        Ok(WaitPfopInput {
            persistent_id,
            delay: self.delay,
            max_attempts: self.max_attempts,
        })
    }
}
