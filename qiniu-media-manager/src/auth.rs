/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Access key / secret key credentials and the HMAC-SHA1 tokens derived from them.
//!
//! Token = `access_key:base64url(HMAC-SHA1(secret_key, data))`, padded URL safe alphabet.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// URL safe base64 with padding, the encoding used for entries, `saveas` targets and
/// signatures.
pub fn urlsafe_base64(data: impl AsRef<[u8]>) -> String {
    base64::engine::general_purpose::URL_SAFE.encode(data)
}

/// Access key and secret key pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create credentials from an access key and secret key
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Sign arbitrary data, returning `access_key:signature`
    pub fn sign(&self, data: impl AsRef<[u8]>) -> String {
        let mut mac = Hmac::<Sha1>::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC accepts any key size");
        mac.update(data.as_ref());
        let digest = mac.finalize().into_bytes();
        format!("{}:{}", self.access_key, urlsafe_base64(digest))
    }

    /// Management token for a request to `path_and_query`.
    ///
    /// `form_body` is the request body when it is sent as
    /// `application/x-www-form-urlencoded`, it is part of the signed data in that case only.
    pub fn management_token(&self, path_and_query: &str, form_body: Option<&str>) -> String {
        let mut data = String::with_capacity(path_and_query.len() + 1);
        data.push_str(path_and_query);
        data.push('\n');
        if let Some(body) = form_body {
            data.push_str(body);
        }
        self.sign(data)
    }

    /// Value of the `Authorization` header for a management request
    pub fn authorization(&self, path_and_query: &str, form_body: Option<&str>) -> String {
        format!("QBox {}", self.management_token(path_and_query, form_body))
    }

    /// Sign `base_url` for private download, valid until `deadline` (Unix seconds)
    pub fn private_download_url_with_deadline(&self, base_url: &str, deadline: u64) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        let url = format!("{base_url}{separator}e={deadline}");
        let token = self.sign(&url);
        format!("{url}&token={token}")
    }

    /// Sign `base_url` for private download, valid for `expires` from now
    pub fn private_download_url(&self, base_url: &str, expires: Duration) -> String {
        self.private_download_url_with_deadline(base_url, deadline_after(expires))
    }
}

/// Unix seconds `expires` from now, saturating at `u64::MAX`
fn deadline_after(expires: Duration) -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        .saturating_add(expires.as_secs())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("ak", "secret")
    }

    #[test]
    fn test_sign() {
        assert_eq!("ak:URIFXAX5RPhXVe_FzYlw4ZTp9Fs=", creds().sign("hello"));
    }

    #[test]
    fn test_management_token_without_body() {
        assert_eq!(
            "QBox ak:py58San0kPXV3cT1DruoNqdMYXY=",
            creds().authorization("/stat/YnVja2V0OmtleQ==", None)
        );
    }

    #[test]
    fn test_management_token_signs_form_body() {
        assert_eq!(
            "ak:obTC_Up-ZwYcJ5kJgSLPwZjKIbA=",
            creds().management_token("/pfop/", Some("bucket=videos&key=clip.mp4"))
        );
    }

    #[test]
    fn test_private_download_url() {
        let url = creds().private_download_url_with_deadline("http://example.com/a.png", 1700000000);
        assert_eq!(
            "http://example.com/a.png?e=1700000000&token=ak:93rH5fdo9kYWk3eRkYQpE0P9PZQ=",
            url
        );
    }

    #[test]
    fn test_private_download_url_existing_query() {
        let url = creds().private_download_url_with_deadline("http://example.com/a.png?v=2", 1);
        assert!(url.starts_with("http://example.com/a.png?v=2&e=1&token=ak:"));
    }

    #[test]
    fn test_private_download_url_expiry_saturates() {
        let url = creds().private_download_url("http://e.com/a", Duration::from_secs(u64::MAX));
        let expected = format!("http://e.com/a?e={}&token=", u64::MAX);
        assert!(url.starts_with(&expected), "{url}");
    }

    #[test]
    fn test_deadline_is_in_the_future() {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let deadline = deadline_after(Duration::from_secs(3600));
        assert!(deadline >= now + 3600);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", creds());
        assert!(!debug.contains("secret\""));
        assert!(debug.contains("redacted"));
    }
}
