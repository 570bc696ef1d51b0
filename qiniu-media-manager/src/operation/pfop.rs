/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use reqwest::Method;
use serde::Deserialize;

use crate::client::Handle;
use crate::error::Error;
use crate::http;
use crate::types::{Entry, PersistentId};

/// Assemble a fop command: `cmd[/first_arg]/name1/value1/name2/value2...`
pub(crate) fn build_op(cmd: &str, first_arg: Option<&str>, args: &[(&str, String)]) -> String {
    let mut op = String::from(cmd);
    if let Some(first_arg) = first_arg {
        op.push('/');
        op.push_str(first_arg);
    }
    for (name, value) in args {
        op.push('/');
        op.push_str(name);
        op.push('/');
        op.push_str(value);
    }
    op
}

/// Direct the output of `op` to `target`
pub(crate) fn op_save(op: &str, target: &Entry) -> String {
    format!("{op}|saveas/{}", target.encoded())
}

/// A persistent operation submission against a single source object
#[derive(Debug)]
pub(crate) struct PfopRequest<'a> {
    pub(crate) source: &'a Entry,
    pub(crate) fops: Vec<String>,
    pub(crate) pipeline: Option<&'a str>,
    pub(crate) notify_url: Option<&'a str>,
    pub(crate) force: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PfopResponse {
    persistent_id: PersistentId,
}

/// Submit a persistent operation and return its id
pub(crate) async fn submit(handle: &Handle, request: PfopRequest<'_>) -> Result<PersistentId, Error> {
    let fops = request.fops.join(";");
    let form = http::form_encode([
        ("bucket", Some(request.source.bucket())),
        ("key", Some(request.source.key())),
        ("fops", Some(fops.as_str())),
        ("notifyURL", request.notify_url),
        ("force", request.force.then_some("1")),
        ("pipeline", request.pipeline),
    ]);
    tracing::debug!(source = %request.source, %fops, "submitting persistent operation");

    let config = &handle.config;
    let response = http::send_signed(config, Method::POST, config.api_host(), "/pfop/", Some(form)).await?;
    let response: PfopResponse = http::decode(response).await?;
    tracing::debug!(persistent_id = %response.persistent_id, "persistent operation submitted");
    Ok(response.persistent_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_op() {
        let op = build_op(
            "vframe",
            Some("png"),
            &[("offset", "0".to_owned()), ("w", "480".to_owned())],
        );
        assert_eq!("vframe/png/offset/0/w/480", op);
        assert_eq!("avthumb", build_op("avthumb", None, &[]));
    }

    #[test]
    fn test_op_save() {
        let op = op_save("vframe/png/offset/0", &Entry::new("bucket", "key"));
        assert_eq!("vframe/png/offset/0|saveas/YnVja2V0OmtleQ==", op);
    }
}
