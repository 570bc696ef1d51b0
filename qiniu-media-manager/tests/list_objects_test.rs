/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use futures_util::TryStreamExt;
use mockito::{Matcher, Mock, ServerGuard};
use qiniu_media_manager::error::ErrorKind;

mod test_utils;
use test_utils::mock_client;

fn item(key: &str) -> String {
    format!(
        r#"{{"key":"{key}","hash":"Fh{key}","fsize":10,"mimeType":"video/mp4","putTime":17000000000000000,"type":0}}"#
    )
}

fn page_body(marker: &str, keys: &[&str]) -> String {
    let items = keys.iter().map(|k| item(k)).collect::<Vec<_>>().join(",");
    format!(r#"{{"marker":"{marker}","items":[{items}],"commonPrefixes":[]}}"#)
}

/// Serve a two page listing of `videos`.
///
/// The second page mock is registered first so that only requests carrying the marker reach it.
async fn two_pages(server: &mut ServerGuard) -> (Mock, Mock) {
    let second = server
        .mock("GET", "/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("bucket".into(), "videos".into()),
            Matcher::UrlEncoded("marker".into(), "m1".into()),
        ]))
        .with_status(200)
        .with_body(page_body("", &["c.mp4"]))
        .expect(1)
        .create_async()
        .await;
    let first = server
        .mock("GET", "/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("bucket".into(), "videos".into()),
            Matcher::UrlEncoded("prefix".into(), "clips/".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .match_header("authorization", Matcher::Regex("^QBox test-ak:".into()))
        .with_status(200)
        .with_body(page_body("m1", &["a.mp4", "b.mp4"]))
        .expect(1)
        .create_async()
        .await;
    (first, second)
}

#[tokio::test]
async fn test_list_objects_follows_marker() {
    let mut server = mockito::Server::new_async().await;
    let (first, second) = two_pages(&mut server).await;

    let client = mock_client(&server);
    let items = client
        .list_objects()
        .bucket("videos")
        .prefix("clips/")
        .limit(2)
        .send()
        .await
        .unwrap();

    let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(vec!["a.mp4", "b.mp4", "c.mp4"], keys);
    assert_eq!("video/mp4", items[0].mime_type);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_list_objects_for_each_item() {
    let mut server = mockito::Server::new_async().await;
    let (first, second) = two_pages(&mut server).await;

    let client = mock_client(&server);
    let mut total_size = 0;
    let count = client
        .list_objects()
        .bucket("videos")
        .prefix("clips/")
        .limit(2)
        .for_each_item(|item| total_size += item.fsize)
        .await
        .unwrap();

    assert_eq!(3, count);
    assert_eq!(30, total_size);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_list_objects_stream() {
    let mut server = mockito::Server::new_async().await;
    let (first, second) = two_pages(&mut server).await;

    let client = mock_client(&server);
    let items: Vec<_> = client
        .list_objects()
        .bucket("videos")
        .prefix("clips/")
        .limit(2)
        .into_paginator()
        .unwrap()
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(3, items.len());
    assert_eq!("c.mp4", items[2].key);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_list_objects_paginator_pages() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = two_pages(&mut server).await;

    let client = mock_client(&server);
    let mut paginator = client
        .list_objects()
        .bucket("videos")
        .prefix("clips/")
        .limit(2)
        .into_paginator()
        .unwrap();

    let page = paginator.next_page().await.unwrap().unwrap();
    assert_eq!(Some("m1"), page.next_marker());
    assert_eq!(2, page.items.len());

    let page = paginator.next_page().await.unwrap().unwrap();
    assert_eq!(None, page.next_marker());
    assert_eq!(1, page.items.len());

    assert!(paginator.next_page().await.is_none());
}

#[tokio::test]
async fn test_list_objects_repeated_marker() {
    let mut server = mockito::Server::new_async().await;
    let stuck = server
        .mock("GET", "/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("bucket".into(), "videos".into()),
            Matcher::UrlEncoded("marker".into(), "m1".into()),
        ]))
        .with_status(200)
        .with_body(page_body("m1", &["b.mp4"]))
        .expect(1)
        .create_async()
        .await;

    let client = mock_client(&server);
    let err = client
        .list_objects()
        .bucket("videos")
        .marker("m1")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ListIncomplete, err.kind());
    stuck.assert_async().await;
}

#[tokio::test]
async fn test_list_objects_service_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/list")
        .match_query(Matcher::Any)
        .with_status(631)
        .with_body(r#"{"error":"no such bucket"}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let err = client.list_objects().bucket("nope").send().await.unwrap_err();
    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[tokio::test]
async fn test_list_objects_requires_bucket() {
    let server = mockito::Server::new_async().await;
    let client = mock_client(&server);
    let err = client.list_objects().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
