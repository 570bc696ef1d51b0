/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{self, Error};
use crate::Config;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body of a failed management call
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Encode `pairs` as `application/x-www-form-urlencoded`, skipping unset values.
pub(crate) fn form_encode<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> String {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Send a management request signed with the client's credentials.
///
/// `path_and_query` is appended to `host` verbatim and is exactly what gets signed.
/// `form` is sent as a form encoded body and is part of the signature.
pub(crate) async fn send_signed(
    config: &Config,
    method: Method,
    host: &str,
    path_and_query: &str,
    form: Option<String>,
) -> Result<Response, Error> {
    let url = format!("{host}{path_and_query}");
    let authorization = config
        .credentials()
        .authorization(path_and_query, form.as_deref());
    tracing::debug!(%method, %url, "sending signed request");

    let mut request = config
        .http_client()
        .request(method, url)
        .header(AUTHORIZATION, authorization)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE);
    if let Some(body) = form {
        request = request.body(body);
    }
    Ok(request.send().await?)
}

/// Turn a non-success response into an [`Error`], reading the service's `error` message.
pub(crate) async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or(text);
    Err(error::from_status(status.as_u16(), message))
}

/// Check the response status and decode the JSON body.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
