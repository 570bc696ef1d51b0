/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for fetching the status of a persistent operation
pub use input::{PfopStatusInput, PfopStatusInputBuilder};

use std::sync::Arc;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::types::{PersistentId, PfopStatus};

/// Operation struct for fetching the status of a persistent operation
#[derive(Clone, Default, Debug)]
pub(crate) struct PfopStatusOperation;

impl PfopStatusOperation {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: PfopStatusInput,
    ) -> Result<PfopStatus, Error> {
        Self::fetch(&handle, &input.persistent_id).await
    }

    /// Single unauthenticated GET of the status endpoint
    pub(crate) async fn fetch(handle: &Handle, id: &PersistentId) -> Result<PfopStatus, Error> {
        let config = &handle.config;
        let url = format!(
            "{}/status/get/prefop?id={}",
            config.api_host(),
            urlencoding::encode(id.as_str())
        );
        let response = config.http_client().get(url).send().await?;
        let status: PfopStatus = http::decode(response).await?;
        tracing::trace!(persistent_id = %id, code = status.code, desc = %status.desc, "fetched pfop status");
        Ok(status)
    }
}
