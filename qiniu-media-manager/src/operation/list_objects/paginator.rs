/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use futures_util::stream::{self, Stream, TryStreamExt};
use reqwest::Method;

use super::ListObjectsInput;
use crate::client::Handle;
use crate::error::{self, Error};
use crate::http;
use crate::types::{ListItem, ListPage};

/// Marker based paginator over the pages of a bucket listing.
#[derive(Debug)]
pub struct ListObjectsPaginator {
    handle: Arc<Handle>,
    input: ListObjectsInput,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { marker: Option<String> },
    Done,
}

impl State {
    fn next_state(self, page: &ListPage) -> Result<State, Error> {
        let prev_marker = match self {
            State::Paginating { marker } => marker,
            State::Done => return Ok(State::Done),
        };

        match page.next_marker() {
            // last page
            None => Ok(State::Done),
            // the service handed back the marker we sent, another request would return the same page
            Some(next) if prev_marker.as_deref() == Some(next) => Err(error::list_incomplete(next)),
            Some(next) => Ok(State::Paginating {
                marker: Some(next.to_owned()),
            }),
        }
    }
}

impl ListObjectsPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListObjectsInput) -> Self {
        let marker = input.marker.to_owned();
        Self {
            handle,
            input,
            state: Some(State::Paginating { marker }),
        }
    }

    /// Fetch the next page, `None` once the last page has been returned.
    ///
    /// After an error the paginator is exhausted.
    pub async fn next_page(&mut self) -> Option<Result<ListPage, Error>> {
        let marker = match self.state.as_ref()? {
            State::Done => return None,
            State::Paginating { marker } => marker.clone(),
        };

        match self.fetch(marker.as_deref()).await {
            Ok(page) => {
                let prev_state = self.state.take()?;
                match prev_state.next_state(&page) {
                    Ok(next_state) => {
                        self.state.replace(next_state);
                        Some(Ok(page))
                    }
                    Err(err) => Some(Err(err)),
                }
            }
            Err(err) => {
                self.state = None;
                Some(Err(err))
            }
        }
    }

    /// Convert into a stream of every object across all pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<ListItem, Error>> {
        stream::try_unfold(self, |mut paginator| async move {
            match paginator.next_page().await {
                Some(Ok(page)) => Ok(Some((page, paginator))),
                Some(Err(err)) => Err(err),
                None => Ok(None),
            }
        })
        .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
    }

    async fn fetch(&self, marker: Option<&str>) -> Result<ListPage, Error> {
        let limit = self.input.limit.map(|l| l.to_string());
        let query = http::form_encode([
            ("bucket", Some(self.input.bucket.as_str())),
            ("prefix", self.input.prefix.as_deref()),
            ("delimiter", self.input.delimiter.as_deref()),
            ("marker", marker),
            ("limit", limit.as_deref()),
        ]);
        let path_and_query = format!("/list?{query}");

        let config = &self.handle.config;
        let response =
            http::send_signed(config, Method::GET, config.rsf_host(), &path_and_query, None).await?;
        let page: ListPage = http::decode(response).await?;
        tracing::trace!(
            bucket = %self.input.bucket,
            items = page.items.len(),
            marker = page.next_marker().unwrap_or_default(),
            "received list page"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::error::ErrorKind;
    use crate::types::ListPage;

    fn page(marker: Option<&str>) -> ListPage {
        ListPage {
            marker: marker.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_state() {
        let start = State::Paginating { marker: None };

        let state2 = start.next_state(&page(Some("m1"))).unwrap();
        assert_eq!(
            state2,
            State::Paginating {
                marker: Some("m1".to_owned())
            }
        );

        let state3 = state2.next_state(&page(Some("m2"))).unwrap();
        assert_eq!(
            state3,
            State::Paginating {
                marker: Some("m2".to_owned())
            }
        );

        let state4 = state3.next_state(&page(Some(""))).unwrap();
        assert_eq!(state4, State::Done);

        assert_eq!(State::Done, state4.next_state(&page(Some("m3"))).unwrap());
    }

    #[test]
    fn test_missing_marker_is_last_page() {
        let start = State::Paginating {
            marker: Some("m1".to_owned()),
        };
        assert_eq!(State::Done, start.next_state(&page(None)).unwrap());
    }

    #[test]
    fn test_repeated_marker_is_incomplete() {
        let start = State::Paginating {
            marker: Some("m1".to_owned()),
        };
        let err = start.next_state(&page(Some("m1"))).unwrap_err();
        assert_eq!(&ErrorKind::ListIncomplete, err.kind());
    }
}
