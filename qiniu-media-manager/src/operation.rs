/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for listing the objects of a bucket
pub mod list_objects;

/// Types for fetching object metadata and checking object existence
pub mod stat_object;

/// Types for video frame extraction
pub mod vframe;

/// Types for video concatenation
pub mod avconcat;

/// Types for the concatenate-or-copy workflow
pub mod copy_or_avconcat;

/// Types for fetching persistent operation status
pub mod pfop_status;

/// Types for waiting on a persistent operation
pub mod wait_pfop;

/// Types for copying and moving objects
pub mod transfer_object;

/// Types for deleting objects
pub mod delete_object;

/// Persistent operation submission shared by the media operations
pub(crate) mod pfop;
