/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for waiting on a persistent operation
pub use input::{WaitPfopInput, WaitPfopInputBuilder};

use std::sync::Arc;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::operation::pfop_status::PfopStatusOperation;
use crate::types::{PfopState, PfopStatus};

/// Operation struct for waiting on a persistent operation
#[derive(Clone, Default, Debug)]
pub(crate) struct WaitPfop;

impl WaitPfop {
    /// Poll the status endpoint at a fixed delay until code 0 (success) or code 3 (failure).
    ///
    /// Every other code is treated as pending. Without `max_attempts` there is no bound on the
    /// number of polls.
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: WaitPfopInput,
    ) -> Result<PfopStatus, Error> {
        let delay = input.delay.unwrap_or_else(|| handle.config.poll_delay());
        let id = &input.persistent_id;
        let mut attempts: u32 = 0;

        loop {
            let status = PfopStatusOperation::fetch(&handle, id).await?;
            attempts = attempts.saturating_add(1);

            match status.state() {
                PfopState::Succeeded => {
                    tracing::info!(persistent_id = %id, attempts, "persistent operation succeeded");
                    return Ok(status);
                }
                PfopState::Failed => {
                    tracing::info!(persistent_id = %id, attempts, desc = %status.desc, "persistent operation failed");
                    return Err(error::pfop_failed(status));
                }
                PfopState::Pending => {
                    if input.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(error::pfop_timed_out(status, attempts));
                    }
                    tracing::trace!(persistent_id = %id, code = status.code, ?delay, "persistent operation pending");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
