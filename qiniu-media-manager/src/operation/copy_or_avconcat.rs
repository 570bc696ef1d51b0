/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for the concatenate-or-copy workflow
pub use input::{CopyOrAvconcatInput, CopyOrAvconcatInputBuilder};

use std::sync::Arc;

use crate::error::Error;
use crate::operation::avconcat::{Avconcat, AvconcatInput};
use crate::operation::stat_object::{StatObject, StatObjectInput};
use crate::operation::transfer_object::{TransferKind, TransferObject, TransferObjectInput};
use crate::types::PersistentId;

/// Which branch of the workflow ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOrAvconcatOutput {
    /// The base object existed and a concatenation was submitted, saving over the base
    Concatenated(PersistentId),

    /// The base object did not exist and the source object was copied into its place
    Copied,
}

/// Operation struct for the concatenate-or-copy workflow
#[derive(Clone, Default, Debug)]
pub(crate) struct CopyOrAvconcat;

impl CopyOrAvconcat {
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CopyOrAvconcatInput,
    ) -> Result<CopyOrAvconcatOutput, Error> {
        let stat = StatObjectInput::builder()
            .bucket(input.bucket.as_str())
            .key(input.key.as_str())
            .build()?;

        if StatObject::exists(handle.clone(), stat).await? {
            tracing::info!(bucket = %input.bucket, key = %input.key, "base exists, concatenating");
            let concat = AvconcatInput::builder()
                .bucket(input.bucket.as_str())
                .key(input.key.as_str())
                .save_bucket(input.bucket.as_str())
                .saveas(input.key.as_str())
                .set_urls(input.urls)
                .mode(input.mode)
                .format(input.format)
                .pipeline(input.pipeline)
                .set_notify_url(input.notify_url)
                .build()?;
            let id = Avconcat::orchestrate(handle, concat).await?;
            Ok(CopyOrAvconcatOutput::Concatenated(id))
        } else {
            tracing::info!(bucket = %input.bucket, key = %input.key, "base missing, copying source");
            let copy = TransferObjectInput::builder()
                .src_bucket(input.src_bucket)
                .src_key(input.src_key)
                .dst_bucket(input.bucket)
                .dst_key(input.key)
                .build()?;
            TransferObject::orchestrate(handle, TransferKind::Copy, copy).await?;
            Ok(CopyOrAvconcatOutput::Copied)
        }
    }
}
