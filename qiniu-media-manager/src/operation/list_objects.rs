/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing the objects of a bucket
pub use input::{ListObjectsInput, ListObjectsInputBuilder};

mod paginator;
pub use paginator::ListObjectsPaginator;

use std::sync::Arc;

use crate::error::Error;
use crate::types::ListItem;

/// Operation struct for listing the objects of a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct ListObjects;

impl ListObjects {
    /// Collect every object across all pages
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListObjectsInput,
    ) -> Result<Vec<ListItem>, Error> {
        let mut items = Vec::new();
        Self::for_each_item(handle, input, |item| items.push(item)).await?;
        Ok(items)
    }

    /// Hand every object across all pages to `handler` as the pages arrive
    pub(crate) async fn for_each_item<F>(
        handle: Arc<crate::client::Handle>,
        input: ListObjectsInput,
        mut handler: F,
    ) -> Result<u64, Error>
    where
        F: FnMut(ListItem),
    {
        let bucket = input.bucket.clone();
        let mut paginator = ListObjectsPaginator::new(handle, input);
        let mut pages: u64 = 0;
        let mut count: u64 = 0;
        while let Some(page) = paginator.next_page().await {
            let page = page?;
            pages += 1;
            for item in page.items {
                count += 1;
                handler(item);
            }
        }
        tracing::debug!(%bucket, pages, count, "listing complete");
        Ok(count)
    }
}
