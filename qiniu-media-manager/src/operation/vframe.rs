/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for video frame extraction
pub use input::{VframeInput, VframeInputBuilder};

use std::sync::Arc;

use crate::error::Error;
use crate::operation::pfop::{self, PfopRequest};
use crate::types::{Entry, PersistentId};

/// Default output image format
pub const DEFAULT_FORMAT: &str = "png";

/// Default processing pipeline
pub const DEFAULT_PIPELINE: &str = "vframe";

/// Operation struct for video frame extraction
#[derive(Clone, Default, Debug)]
pub(crate) struct Vframe;

impl Vframe {
    /// Submit the frame extraction as a persistent operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: VframeInput,
    ) -> Result<PersistentId, Error> {
        let source = Entry::new(input.bucket.as_str(), input.key.as_str());
        let op = input.fop();
        tracing::debug!(%op, "vframe");

        pfop::submit(
            &handle,
            PfopRequest {
                source: &source,
                fops: vec![op],
                pipeline: Some(input.pipeline.as_str()),
                notify_url: input.notify_url.as_deref(),
                force: true,
            },
        )
        .await
    }
}
