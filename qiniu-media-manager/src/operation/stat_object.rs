/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for addressing a single object
pub use input::{StatObjectInput, StatObjectInputBuilder};

use std::sync::Arc;

use reqwest::Method;

use crate::error::{Error, ErrorKind};
use crate::http;
use crate::types::{Entry, ObjectStat};

/// Operation struct for fetching object metadata
#[derive(Clone, Default, Debug)]
pub(crate) struct StatObject;

impl StatObject {
    /// Fetch the metadata of a single object
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: StatObjectInput,
    ) -> Result<ObjectStat, Error> {
        let entry = Entry::new(input.bucket, input.key);
        let path = format!("/stat/{}", entry.encoded());
        let config = &handle.config;
        let response = http::send_signed(config, Method::POST, config.rs_host(), &path, None).await?;
        http::decode(response).await
    }

    /// Check whether a single object exists
    pub(crate) async fn exists(
        handle: Arc<crate::client::Handle>,
        input: StatObjectInput,
    ) -> Result<bool, Error> {
        let entry = Entry::new(input.bucket.clone(), input.key.clone());
        match Self::orchestrate(handle, input).await {
            Ok(stat) => {
                tracing::info!(%entry, ?stat, "stat object");
                Ok(stat.hash.is_some())
            }
            Err(err) if err.kind() == &ErrorKind::NotFound => {
                tracing::info!(%entry, "object does not exist");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
