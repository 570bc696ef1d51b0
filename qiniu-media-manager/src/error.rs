/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::types::PfopStatus;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: walk [`std::error::Error::source`] to display the entire cause chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of client errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Client configuration could not be loaded
    ConfigInvalid,

    /// Listing stopped before the last page was reached
    ListIncomplete,

    /// A persistent operation finished with the failure status code
    PfopFailed(PfopFailed),

    /// A persistent operation was still pending after the configured number of polls
    PfopTimedOut(PfopFailed),

    /// Resource not found (e.g. bucket or key)
    NotFound,

    /// The service answered with a non-success status
    ServiceError(ServiceError),

    /// The request could not be sent or the response could not be read
    HttpError,

    /// The response body could not be decoded
    ResponseInvalid,
}

/// Stores the last status observed for a persistent operation that did not succeed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PfopFailed {
    status: PfopStatus,
}

impl PfopFailed {
    /// The last status payload returned by the status endpoint
    pub fn status(&self) -> &PfopStatus {
        &self.status
    }
}

/// Stores the HTTP status of a failed service call
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceError {
    status: u16,
}

impl ServiceError {
    /// The HTTP status code returned by the service
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the last persistent operation status if this error was caused by a
    /// failed or timed out persistent operation.
    pub fn pfop_status(&self) -> Option<&PfopStatus> {
        match &self.kind {
            ErrorKind::PfopFailed(failed) | ErrorKind::PfopTimedOut(failed) => {
                Some(failed.status())
            }
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::ListIncomplete => write!(f, "listing did not reach the last page"),
            ErrorKind::PfopFailed(failed) => {
                write!(f, "persistent operation {} failed", failed.status.id)
            }
            ErrorKind::PfopTimedOut(failed) => {
                write!(
                    f,
                    "persistent operation {} still pending (code {})",
                    failed.status.id, failed.status.code
                )
            }
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ServiceError(service) => {
                write!(f, "service returned status {}", service.status)
            }
            ErrorKind::HttpError => write!(f, "HTTP error"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::new(ErrorKind::ResponseInvalid, value)
        } else {
            Self::new(ErrorKind::HttpError, value)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::new(ErrorKind::ResponseInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

/// A required operation input field was not set
pub(crate) fn missing_field(field: &'static str, details: &'static str) -> Error {
    invalid_input(format!("{field} was missing: {details}"))
}

/// Take a required builder field, failing with [`ErrorKind::InputInvalid`] when unset
pub(crate) fn required<T>(
    value: Option<T>,
    field: &'static str,
    details: &'static str,
) -> Result<T, Error> {
    value.ok_or_else(|| missing_field(field, details))
}

pub(crate) fn invalid_config<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConfigInvalid, err)
}

pub(crate) fn list_incomplete(marker: &str) -> Error {
    Error::new(
        ErrorKind::ListIncomplete,
        format!("listing made no progress past marker `{marker}`"),
    )
}

pub(crate) fn pfop_failed(status: PfopStatus) -> Error {
    let desc = format!("status code {}: {}", status.code, status.desc);
    Error::new(ErrorKind::PfopFailed(PfopFailed { status }), desc)
}

pub(crate) fn pfop_timed_out(status: PfopStatus, attempts: u32) -> Error {
    Error::new(
        ErrorKind::PfopTimedOut(PfopFailed { status }),
        format!("gave up after {attempts} status polls"),
    )
}

/// Map a non-success HTTP status and the service's `error` message to an [`Error`]
pub(crate) fn from_status(status: u16, message: String) -> Error {
    let kind = match status {
        404 | 612 | 631 => ErrorKind::NotFound,
        _ => ErrorKind::ServiceError(ServiceError { status }),
    };
    Error::new(kind, message)
}
