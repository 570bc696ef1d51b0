/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types::PersistentId;

/// Input type for fetching the status of a persistent operation
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PfopStatusInput {
    /// Persistent operation id
    pub persistent_id: PersistentId,
}

impl PfopStatusInput {
    /// Creates a new builder-style object to manufacture [`PfopStatusInput`](crate::operation::pfop_status::PfopStatusInput).
    pub fn builder() -> PfopStatusInputBuilder {
        PfopStatusInputBuilder::default()
    }
}

/// A builder for [`PfopStatusInput`](crate::operation::pfop_status::PfopStatusInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PfopStatusInputBuilder {
    pub(crate) persistent_id: Option<PersistentId>,
}

impl PfopStatusInputBuilder {
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

    /// Consumes the builder and constructs a [`PfopStatusInput`](crate::operation::pfop_status::PfopStatusInput).
    pub fn build(self) -> Result<PfopStatusInput, Error> {
        let persistent_id = error::required(
            self.persistent_id,
            "persistent_id",
            "A persistent operation id is required",
        )?;
        if persistent_id.as_str().is_empty() {
            return Err(error::invalid_input("persistent operation id is empty"));
        }
        Ok(PfopStatusInput { persistent_id })
    }
}
