/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for copying or moving an object
pub use input::{TransferObjectInput, TransferObjectInputBuilder};

use std::fmt;
use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::http;
use crate::types::Entry;

/// Whether the source object is kept after the transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Keep the source object
    Copy,

    /// Remove the source object
    Move,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferKind::Copy => f.write_str("copy"),
            TransferKind::Move => f.write_str("move"),
        }
    }
}

/// Operation struct for copying or moving an object
#[derive(Clone, Default, Debug)]
pub(crate) struct TransferObject;

impl TransferObject {
    /// Execute a single copy or move
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        kind: TransferKind,
        input: TransferObjectInput,
    ) -> Result<(), Error> {
        let path = input.path(kind);
        tracing::debug!(
            source = %Entry::new(input.src_bucket.as_str(), input.src_key.as_str()),
            destination = %Entry::new(input.dst_bucket.as_str(), input.dst_key.as_str()),
            %kind,
            "transfer object"
        );

        let config = &handle.config;
        let response = http::send_signed(config, Method::POST, config.rs_host(), &path, None).await?;
        http::check_status(response).await?;
        Ok(())
    }
}
