/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for deleting an object
pub use input::{DeleteObjectInput, DeleteObjectInputBuilder};

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::http;
use crate::types::Entry;

/// Operation struct for deleting an object
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObject;

impl DeleteObject {
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteObjectInput,
    ) -> Result<(), Error> {
        let entry = Entry::new(input.bucket, input.key);
        tracing::debug!(%entry, "delete object");
        let path = format!("/delete/{}", entry.encoded());
        let config = &handle.config;
        let response = http::send_signed(config, Method::POST, config.rs_host(), &path, None).await?;
        http::check_status(response).await?;
        Ok(())
    }
}
