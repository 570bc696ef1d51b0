/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::Config;

/// Default lifetime of a signed private download URL
pub const DEFAULT_DOWNLOAD_EXPIRY: Duration = Duration::from_secs(3600);

/// Client for Qiniu object storage and media processing.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, HTTP client, credentials
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List every object in a bucket, following the listing marker until the last page.
    ///
    /// Constructs a fluent builder for the
    /// [`ListObjects`](crate::operation::list_objects::builders::ListObjectsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qiniu_media_manager::error::Error;
    ///
    /// async fn list_clips(client: &qiniu_media_manager::Client) -> Result<(), Error> {
    ///     let items = client
    ///         .list_objects()
    ///         .bucket("videos")
    ///         .prefix("clips/")
    ///         .send()
    ///         .await?;
    ///
    ///     for item in items {
    ///         println!("{} {}", item.key, item.fsize);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_objects(&self) -> crate::operation::list_objects::builders::ListObjectsFluentBuilder {
        crate::operation::list_objects::builders::ListObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Fetch the metadata of a single object.
    pub fn stat_object(&self) -> crate::operation::stat_object::builders::StatObjectFluentBuilder {
        crate::operation::stat_object::builders::StatObjectFluentBuilder::new(self.handle.clone())
    }

    /// Check whether an object exists.
    ///
    /// Resolves to `false` when the service reports the object missing, any other failure is
    /// returned as an error.
    pub fn file_exists(&self) -> crate::operation::stat_object::builders::FileExistsFluentBuilder {
        crate::operation::stat_object::builders::FileExistsFluentBuilder::new(self.handle.clone())
    }

    /// Extract a single frame of a video as an image.
    ///
    /// The frame is produced asynchronously by a persistent operation, use
    /// [`wait_pfop`](Self::wait_pfop) with the returned id to wait for it.
    pub fn vframe(&self) -> crate::operation::vframe::builders::VframeFluentBuilder {
        crate::operation::vframe::builders::VframeFluentBuilder::new(self.handle.clone())
    }

    /// Concatenate up to five videos onto a base video.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qiniu_media_manager::error::Error;
    ///
    /// async fn join_parts(client: &qiniu_media_manager::Client) -> Result<(), Error> {
    ///     let id = client
    ///         .avconcat()
    ///         .bucket("videos")
    ///         .key("part-1.mp4")
    ///         .url("http://cdn.example.com/part-2.mp4")
    ///         .url("http://cdn.example.com/part-3.mp4")
    ///         .save_bucket("videos")
    ///         .saveas("full.mp4")
    ///         .send()
    ///         .await?;
    ///
    ///     client.wait_pfop().persistent_id(id).send().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn avconcat(&self) -> crate::operation::avconcat::builders::AvconcatFluentBuilder {
        crate::operation::avconcat::builders::AvconcatFluentBuilder::new(self.handle.clone())
    }

    /// Concatenate videos onto a base object if it exists, otherwise copy a source object
    /// into the base location.
    pub fn copy_or_avconcat(
        &self,
    ) -> crate::operation::copy_or_avconcat::builders::CopyOrAvconcatFluentBuilder {
        crate::operation::copy_or_avconcat::builders::CopyOrAvconcatFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Fetch the current status of a persistent operation.
    pub fn pfop_status(&self) -> crate::operation::pfop_status::builders::PfopStatusFluentBuilder {
        crate::operation::pfop_status::builders::PfopStatusFluentBuilder::new(self.handle.clone())
    }

    /// Poll a persistent operation at a fixed delay until it succeeds or fails.
    ///
    /// Unless a maximum number of attempts is set, polling continues for as long as the
    /// service reports the operation pending.
    pub fn wait_pfop(&self) -> crate::operation::wait_pfop::builders::WaitPfopFluentBuilder {
        crate::operation::wait_pfop::builders::WaitPfopFluentBuilder::new(self.handle.clone())
    }

    /// Copy an object to another bucket and/or key.
    pub fn copy_object(
        &self,
    ) -> crate::operation::transfer_object::builders::TransferObjectFluentBuilder {
        crate::operation::transfer_object::builders::TransferObjectFluentBuilder::new(
            self.handle.clone(),
            crate::operation::transfer_object::TransferKind::Copy,
        )
    }

    /// Move (rename) an object to another bucket and/or key.
    pub fn move_object(
        &self,
    ) -> crate::operation::transfer_object::builders::TransferObjectFluentBuilder {
        crate::operation::transfer_object::builders::TransferObjectFluentBuilder::new(
            self.handle.clone(),
            crate::operation::transfer_object::TransferKind::Move,
        )
    }

    /// Delete an object.
    pub fn delete_object(
        &self,
    ) -> crate::operation::delete_object::builders::DeleteObjectFluentBuilder {
        crate::operation::delete_object::builders::DeleteObjectFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Sign `base_url` for private download, valid for `expires` from now.
    ///
    /// See [`DEFAULT_DOWNLOAD_EXPIRY`] for the conventional lifetime.
    pub fn private_download_url(&self, base_url: &str, expires: Duration) -> String {
        self.handle
            .config
            .credentials()
            .private_download_url(base_url, expires)
    }
}
