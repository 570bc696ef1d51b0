/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use mockito::Matcher;
use qiniu_media_manager::error::ErrorKind;
use qiniu_media_manager::operation::copy_or_avconcat::CopyOrAvconcatOutput;
use qiniu_media_manager::types::PersistentId;

mod test_utils;
use test_utils::mock_client;

// base64url("videos:clip.mp4")
const CLIP_ENTRY: &str = "dmlkZW9zOmNsaXAubXA0";
// base64url("videos:missing.mp4")
const MISSING_ENTRY: &str = "dmlkZW9zOm1pc3NpbmcubXA0";
// base64url("videos:full.mp4")
const FULL_ENTRY: &str = "dmlkZW9zOmZ1bGwubXA0";
// base64url("uploads:part-1.mp4")
const PART_ENTRY: &str = "dXBsb2FkczpwYXJ0LTEubXA0";

const STAT_BODY: &str =
    r#"{"fsize":1048576,"hash":"FhPmWrn","mimeType":"video/mp4","putTime":17000000000000000,"type":0}"#;

#[tokio::test]
async fn test_stat_object() {
    let mut server = mockito::Server::new_async().await;
    let stat = server
        .mock("POST", format!("/stat/{CLIP_ENTRY}").as_str())
        .match_header("authorization", Matcher::Regex("^QBox test-ak:".into()))
        .with_status(200)
        .with_body(STAT_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = mock_client(&server);
    let output = client
        .stat_object()
        .bucket("videos")
        .key("clip.mp4")
        .send()
        .await
        .unwrap();

    assert_eq!(Some("FhPmWrn"), output.hash.as_deref());
    assert_eq!(1048576, output.fsize);
    assert_eq!("video/mp4", output.mime_type);
    stat.assert_async().await;
}

#[tokio::test]
async fn test_file_exists() {
    let mut server = mockito::Server::new_async().await;
    let _found = server
        .mock("POST", format!("/stat/{CLIP_ENTRY}").as_str())
        .with_status(200)
        .with_body(STAT_BODY)
        .create_async()
        .await;
    let _missing = server
        .mock("POST", format!("/stat/{MISSING_ENTRY}").as_str())
        .with_status(612)
        .with_body(r#"{"error":"no such file or directory"}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let exists = client
        .file_exists()
        .bucket("videos")
        .key("clip.mp4")
        .send()
        .await
        .unwrap();
    assert!(exists);

    let exists = client
        .file_exists()
        .bucket("videos")
        .key("missing.mp4")
        .send()
        .await
        .unwrap();
    assert!(!exists);
}

#[tokio::test]
async fn test_file_exists_without_hash() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", format!("/stat/{CLIP_ENTRY}").as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = mock_client(&server);
    let exists = client
        .file_exists()
        .bucket("videos")
        .key("clip.mp4")
        .send()
        .await
        .unwrap();
    assert!(!exists);
}

#[tokio::test]
async fn test_file_exists_propagates_auth_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", format!("/stat/{CLIP_ENTRY}").as_str())
        .with_status(401)
        .with_body(r#"{"error":"bad token"}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let err = client
        .file_exists()
        .bucket("videos")
        .key("clip.mp4")
        .send()
        .await
        .unwrap_err();
    match err.kind() {
        ErrorKind::ServiceError(service) => assert_eq!(401, service.status()),
        other => panic!("unexpected error kind {other:?}"),
    }
    let source = std::error::Error::source(&err).unwrap().to_string();
    assert_eq!("bad token", source);
}

#[tokio::test]
async fn test_copy_move_delete() {
    let mut server = mockito::Server::new_async().await;
    let copy = server
        .mock(
            "POST",
            format!("/copy/{CLIP_ENTRY}/{FULL_ENTRY}/force/false").as_str(),
        )
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let mv = server
        .mock(
            "POST",
            format!("/move/{CLIP_ENTRY}/{FULL_ENTRY}/force/true").as_str(),
        )
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("POST", format!("/delete/{CLIP_ENTRY}").as_str())
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = mock_client(&server);
    client
        .copy_object()
        .src_bucket("videos")
        .src_key("clip.mp4")
        .dst_bucket("videos")
        .dst_key("full.mp4")
        .send()
        .await
        .unwrap();
    client
        .move_object()
        .src_bucket("videos")
        .src_key("clip.mp4")
        .dst_bucket("videos")
        .dst_key("full.mp4")
        .force(true)
        .send()
        .await
        .unwrap();
    client
        .delete_object()
        .bucket("videos")
        .key("clip.mp4")
        .send()
        .await
        .unwrap();

    copy.assert_async().await;
    mv.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_delete_missing_object() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", format!("/delete/{MISSING_ENTRY}").as_str())
        .with_status(612)
        .with_body(r#"{"error":"no such file or directory"}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let err = client
        .delete_object()
        .bucket("videos")
        .key("missing.mp4")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[tokio::test]
async fn test_copy_or_avconcat_concatenates_existing_base() {
    let mut server = mockito::Server::new_async().await;
    let stat = server
        .mock("POST", format!("/stat/{FULL_ENTRY}").as_str())
        .with_status(200)
        .with_body(STAT_BODY)
        .expect(1)
        .create_async()
        .await;
    let pfop = server
        .mock("POST", "/pfop/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("bucket".into(), "videos".into()),
            Matcher::UrlEncoded("key".into(), "full.mp4".into()),
            Matcher::UrlEncoded(
                "fops".into(),
                format!("avconcat/2/format/mp4/YQ==|saveas/{FULL_ENTRY}"),
            ),
        ]))
        .with_status(200)
        .with_body(r#"{"persistentId":"z0.append"}"#)
        .expect(1)
        .create_async()
        .await;
    let copy = server
        .mock("POST", Matcher::Regex("^/copy/".into()))
        .expect(0)
        .create_async()
        .await;

    let client = mock_client(&server);
    let output = client
        .copy_or_avconcat()
        .bucket("videos")
        .key("full.mp4")
        .src_bucket("uploads")
        .src_key("part-1.mp4")
        .url("a")
        .send()
        .await
        .unwrap();

    assert_eq!(
        CopyOrAvconcatOutput::Concatenated(PersistentId::from("z0.append")),
        output
    );
    stat.assert_async().await;
    pfop.assert_async().await;
    copy.assert_async().await;
}

#[tokio::test]
async fn test_copy_or_avconcat_copies_when_base_missing() {
    let mut server = mockito::Server::new_async().await;
    let stat = server
        .mock("POST", format!("/stat/{FULL_ENTRY}").as_str())
        .with_status(612)
        .with_body(r#"{"error":"no such file or directory"}"#)
        .expect(1)
        .create_async()
        .await;
    let copy = server
        .mock(
            "POST",
            format!("/copy/{PART_ENTRY}/{FULL_ENTRY}/force/false").as_str(),
        )
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let pfop = server.mock("POST", "/pfop/").expect(0).create_async().await;

    let client = mock_client(&server);
    let output = client
        .copy_or_avconcat()
        .bucket("videos")
        .key("full.mp4")
        .src_bucket("uploads")
        .src_key("part-1.mp4")
        .url("a")
        .send()
        .await
        .unwrap();

    assert_eq!(CopyOrAvconcatOutput::Copied, output);
    stat.assert_async().await;
    copy.assert_async().await;
    pfop.assert_async().await;
}

#[tokio::test]
async fn test_private_download_url() {
    let server = mockito::Server::new_async().await;
    let client = mock_client(&server);

    let url = client.private_download_url(
        "http://cdn.example.com/clip.mp4",
        Duration::from_secs(3600),
    );

    let (unsigned, token) = url.split_once("&token=").unwrap();
    assert!(unsigned.starts_with("http://cdn.example.com/clip.mp4?e="));
    assert!(token.starts_with("test-ak:"));
    assert_eq!(
        token,
        client.config().credentials().sign(unsigned),
        "token signs the url including its deadline"
    );
}

async fn mock_missing_base_copy(server: &mut mockito::ServerGuard) -> (mockito::Mock, mockito::Mock) {
    let _stat = server
        .mock("POST", format!("/stat/{FULL_ENTRY}").as_str())
        .with_status(612)
        .with_body(r#"{"error":"no such file or directory"}"#)
        .create_async()
        .await;
    let copy = server
        .mock(
            "POST",
            format!("/copy/{PART_ENTRY}/{FULL_ENTRY}/force/false").as_str(),
        )
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let pfop = server.mock("POST", "/pfop/").expect(0).create_async().await;
    (copy, pfop)
}

#[tokio::test]
async fn test_copy_or_avconcat_copies_without_urls() {
    let mut server = mockito::Server::new_async().await;
    let (copy, pfop) = mock_missing_base_copy(&mut server).await;

    let client = mock_client(&server);
    let output = client
        .copy_or_avconcat()
        .bucket("videos")
        .key("full.mp4")
        .src_bucket("uploads")
        .src_key("part-1.mp4")
        .send()
        .await
        .unwrap();

    assert_eq!(CopyOrAvconcatOutput::Copied, output);
    copy.assert_async().await;
    pfop.assert_async().await;
}

#[tokio::test]
async fn test_copy_or_avconcat_copies_ignoring_url_limit() {
    let mut server = mockito::Server::new_async().await;
    let (copy, pfop) = mock_missing_base_copy(&mut server).await;

    let client = mock_client(&server);
    let urls = (0..6).map(|i| format!("http://example.com/{i}.mp4")).collect();
    let output = client
        .copy_or_avconcat()
        .bucket("videos")
        .key("full.mp4")
        .src_bucket("uploads")
        .src_key("part-1.mp4")
        .set_urls(Some(urls))
        .send()
        .await
        .unwrap();

    assert_eq!(CopyOrAvconcatOutput::Copied, output);
    copy.assert_async().await;
    pfop.assert_async().await;
}

#[tokio::test]
async fn test_copy_or_avconcat_existing_base_requires_urls() {
    let mut server = mockito::Server::new_async().await;
    let _stat = server
        .mock("POST", format!("/stat/{FULL_ENTRY}").as_str())
        .with_status(200)
        .with_body(STAT_BODY)
        .create_async()
        .await;
    let pfop = server.mock("POST", "/pfop/").expect(0).create_async().await;

    let client = mock_client(&server);
    let err = client
        .copy_or_avconcat()
        .bucket("videos")
        .key("full.mp4")
        .src_bucket("uploads")
        .src_key("part-1.mp4")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::InputInvalid, err.kind());
    pfop.assert_async().await;
}

#[tokio::test]
async fn test_delete_object_builder_accessors() {
    let server = mockito::Server::new_async().await;
    let client = mock_client(&server);
    let builder = client.delete_object().bucket("videos").key("clip.mp4");
    assert_eq!(&Some("videos".to_owned()), builder.get_bucket());
    assert_eq!(&Some("clip.mp4".to_owned()), builder.get_key());
}
