/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use serde::Deserialize;

use crate::auth::urlsafe_base64;

/// Location of an object: a bucket name and a key within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    bucket: String,
    key: String,
}

impl Entry {
    /// Create a new entry for `key` in `bucket`
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// The bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// URL safe base64 of `bucket:key`, the form used in management request paths and
    /// `saveas` parameters.
    pub fn encoded(&self) -> String {
        urlsafe_base64(format!("{}:{}", self.bucket, self.key))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bucket, self.key)
    }
}

/// A single object returned by listing a bucket.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Object key
    pub key: String,

    /// Content hash (etag)
    #[serde(default)]
    pub hash: String,

    /// Size in bytes
    #[serde(default)]
    pub fsize: i64,

    /// Mime type
    #[serde(default)]
    pub mime_type: String,

    /// Upload time in units of 100 nanoseconds since the Unix epoch
    #[serde(default)]
    pub put_time: i64,

    /// Storage class, 0 standard, 1 infrequent access, 2 archive
    #[serde(default, rename = "type")]
    pub file_type: i32,
}

/// Metadata for a single object
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStat {
    /// Content hash (etag), absent when the service did not resolve the object
    #[serde(default)]
    pub hash: Option<String>,

    /// Size in bytes
    #[serde(default)]
    pub fsize: i64,

    /// Mime type
    #[serde(default)]
    pub mime_type: String,

    /// Upload time in units of 100 nanoseconds since the Unix epoch
    #[serde(default)]
    pub put_time: i64,

    /// Storage class
    #[serde(default, rename = "type")]
    pub file_type: i32,
}

/// One page of a bucket listing
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Marker to request the next page with. Empty or absent on the last page.
    #[serde(default)]
    pub marker: Option<String>,

    /// Objects in this page
    #[serde(default)]
    pub items: Vec<ListItem>,

    /// Common prefixes when a delimiter was given
    #[serde(default)]
    pub common_prefixes: Vec<String>,
}

impl ListPage {
    /// The marker for the next page, or `None` if this is the last page.
    pub fn next_marker(&self) -> Option<&str> {
        self.marker.as_deref().filter(|m| !m.is_empty())
    }
}

/// Identifier of a submitted persistent operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PersistentId(String);

impl PersistentId {
    /// The raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersistentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PersistentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PersistentId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for PersistentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Clockwise rotation applied to an extracted video frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotate {
    /// 90 degrees
    Deg90,

    /// 180 degrees
    Deg180,

    /// 270 degrees
    Deg270,

    /// Follow the rotation recorded in the video metadata
    Auto,
}

impl fmt::Display for Rotate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Rotate::Deg90 => "90",
            Rotate::Deg180 => "180",
            Rotate::Deg270 => "270",
            Rotate::Auto => "auto",
        };
        f.write_str(value)
    }
}

/// Classification of a persistent operation status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PfopState {
    /// Code 0
    Succeeded,

    /// Code 3
    Failed,

    /// Any other code (queued, processing, callback failed, ...). Polling continues.
    Pending,
}

impl PfopState {
    /// Classify a raw status code
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PfopState::Succeeded,
            3 => PfopState::Failed,
            _ => PfopState::Pending,
        }
    }
}

/// Status payload of a persistent operation
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PfopStatus {
    /// Persistent operation id
    #[serde(default)]
    pub id: String,

    /// Overall status code
    pub code: i64,

    /// Human readable description of `code`
    #[serde(default)]
    pub desc: String,

    /// Source key the operation ran against
    #[serde(default)]
    pub input_key: Option<String>,

    /// Source bucket the operation ran against
    #[serde(default)]
    pub input_bucket: Option<String>,

    /// Processing pipeline
    #[serde(default)]
    pub pipeline: Option<String>,

    /// Request id assigned by the service
    #[serde(default)]
    pub reqid: Option<String>,

    /// Per command results
    #[serde(default)]
    pub items: Vec<PfopItem>,
}

impl PfopStatus {
    /// Classification of [`code`](Self::code)
    pub fn state(&self) -> PfopState {
        PfopState::from_code(self.code)
    }

    /// Per command results
    pub fn items(&self) -> &[PfopItem] {
        &self.items
    }
}

/// Result of a single command within a persistent operation
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PfopItem {
    /// The fop command
    #[serde(default)]
    pub cmd: String,

    /// Status code of this command
    #[serde(default)]
    pub code: i64,

    /// Description of `code`
    #[serde(default)]
    pub desc: String,

    /// Error message when the command failed
    #[serde(default)]
    pub error: Option<String>,

    /// Hash of the produced object
    #[serde(default)]
    pub hash: Option<String>,

    /// Key of the produced object
    #[serde(default)]
    pub key: Option<String>,

    /// Whether an existing result was returned instead of reprocessing
    #[serde(default)]
    pub return_old: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_code() {
        assert_eq!(PfopState::Succeeded, PfopState::from_code(0));
        assert_eq!(PfopState::Failed, PfopState::from_code(3));
        for code in [1, 2, 4, -1, 99] {
            assert_eq!(PfopState::Pending, PfopState::from_code(code));
        }
    }

    #[test]
    fn test_entry_encoded() {
        // base64url("bucket:key")
        assert_eq!("YnVja2V0OmtleQ==", Entry::new("bucket", "key").encoded());
    }

    #[test]
    fn test_last_page_marker() {
        let page: ListPage = serde_json::from_str(r#"{"marker":"","items":[]}"#).unwrap();
        assert_eq!(None, page.next_marker());

        let page: ListPage = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert_eq!(None, page.next_marker());

        let page: ListPage = serde_json::from_str(r#"{"marker":"eyJjIjowfQ==","items":[]}"#).unwrap();
        assert_eq!(Some("eyJjIjowfQ=="), page.next_marker());
    }

    #[test]
    fn test_decode_status() {
        let body = r#"{
            "id": "z0.5f0d",
            "pipeline": "0.default",
            "code": 0,
            "desc": "The fop was completed successfully",
            "reqid": "abc",
            "inputBucket": "videos",
            "inputKey": "clip.mp4",
            "items": [{
                "cmd": "vframe/png/offset/0|saveas/dGh1bWJzOmNsaXAucG5n",
                "code": 0,
                "desc": "The fop was completed successfully",
                "hash": "FhP",
                "key": "clip.png",
                "returnOld": 0
            }]
        }"#;
        let status: PfopStatus = serde_json::from_str(body).unwrap();
        assert_eq!(PfopState::Succeeded, status.state());
        assert_eq!(Some("clip.mp4"), status.input_key.as_deref());
        assert_eq!(1, status.items().len());
        assert_eq!(Some("clip.png"), status.items()[0].key.as_deref());
    }
}
