/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for video concatenation
pub use input::{AvconcatInput, AvconcatInputBuilder};

use std::sync::Arc;

use crate::error::Error;
use crate::operation::pfop::{self, PfopRequest};
use crate::types::{Entry, PersistentId};

/// Maximum number of videos that can be appended in one operation
pub const MAX_CONCAT_URLS: usize = 5;

/// Default concatenation mode
pub const DEFAULT_MODE: &str = "2";

/// Default output container format
pub const DEFAULT_FORMAT: &str = "mp4";

/// Default processing pipeline
pub const DEFAULT_PIPELINE: &str = "concatevideo";

/// Operation struct for video concatenation
#[derive(Clone, Default, Debug)]
pub(crate) struct Avconcat;

impl Avconcat {
    /// Submit the concatenation as a persistent operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: AvconcatInput,
    ) -> Result<PersistentId, Error> {
        let base = Entry::new(input.bucket.as_str(), input.key.as_str());
        let op = input.fop();
        tracing::debug!(%op, "avconcat");

        pfop::submit(
            &handle,
            PfopRequest {
                source: &base,
                fops: vec![op],
                pipeline: Some(input.pipeline.as_str()),
                notify_url: input.notify_url.as_deref(),
                force: true,
            },
        )
        .await
    }
}
