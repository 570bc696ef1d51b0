/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A Qiniu object storage client for media pipelines.
//!
//! The client covers the handful of storage management and media processing calls a
//! video pipeline needs: listing a bucket, checking whether an object exists, submitting
//! persistent operations (frame extraction, concatenation), waiting for them to finish,
//! copy/move/delete, and signing private download URLs.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() -> Result<(), qiniu_media_manager::error::Error> {
//! let config = qiniu_media_manager::from_env().load()?;
//! let client = qiniu_media_manager::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! Extract a frame and wait for the job to finish:
//!
//! ```no_run
//! # async fn example(client: qiniu_media_manager::Client) -> Result<(), qiniu_media_manager::error::Error> {
//! let persistent_id = client
//!     .vframe()
//!     .bucket("videos")
//!     .key("clip.mp4")
//!     .save_bucket("thumbnails")
//!     .saveas("clip.png")
//!     .offset(3)
//!     .send()
//!     .await?;
//!
//! let status = client.wait_pfop().persistent_id(persistent_id).send().await?;
//! println!("{:?}", status.items());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`list_objects`](crate::Client::list_objects) - list the objects of a bucket
//! * [`file_exists`](crate::Client::file_exists) - check whether an object exists
//! * [`vframe`](crate::Client::vframe) - extract a video frame
//! * [`avconcat`](crate::Client::avconcat) - concatenate videos
//! * [`copy_or_avconcat`](crate::Client::copy_or_avconcat) - concatenate onto an existing object or copy it into place
//! * [`wait_pfop`](crate::Client::wait_pfop) - poll a persistent operation until it finishes

/// Default delay between two persistent operation status polls
pub(crate) const DEFAULT_POLL_DELAY: std::time::Duration = std::time::Duration::from_millis(400);

/// Error types emitted by `qiniu-media-manager`
pub mod error;

/// Common types used by `qiniu-media-manager`
pub mod types;

/// Credentials and request signing
pub mod auth;

/// Storage client
pub mod client;

/// Storage and media operations
pub mod operation;

/// Client configuration
pub mod config;

/// HTTP related components and utils
pub(crate) mod http;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
