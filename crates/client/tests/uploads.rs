use httpmock::Method::{DELETE, POST, PUT};
use httpmock::MockServer;

use fabric_client::api::image_store::{UploadChunkRange, UploadFileChunkOptionalParams};
use fabric_client::{ClientError, FabricClient};

fn client(server: &MockServer) -> FabricClient {
    FabricClient::new(reqwest::Client::new(), &server.base_url()).expect("client")
}

#[tokio::test]
async fn chunked_upload_sends_ranges_then_commits() {
    let server = MockServer::start();
    let chunk_mocks: Vec<_> = ["bytes 0-3/10", "bytes 4-7/10", "bytes 8-9/10"]
        .into_iter()
        .map(|range| {
            server.mock(|when, then| {
                when.method(PUT)
                    .path("/ImageStore/pkg/app.sfpkg/$/UploadChunk")
                    .query_param_exists("session-id")
                    .header("content-range", range);
                then.status(200);
            })
        })
        .collect();
    let commit = server.mock(|when, then| {
        when.method(POST)
            .path("/ImageStore/$/CommitUploadSession")
            .query_param_exists("session-id");
        then.status(200);
    });

    client(&server)
        .upload_file_chunked(
            "pkg/app.sfpkg",
            b"0123456789",
            4,
            &UploadFileChunkOptionalParams::default(),
        )
        .await
        .expect("upload");

    for mock in &chunk_mocks {
        mock.assert();
    }
    commit.assert();
}

#[tokio::test]
async fn failed_commit_deletes_the_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/ImageStore/pkg/$/UploadChunk");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(POST).path("/ImageStore/$/CommitUploadSession");
        then.status(500).body("store offline");
    });
    let cleanup = server.mock(|when, then| {
        when.method(DELETE)
            .path("/ImageStore/$/DeleteUploadSession")
            .query_param_exists("session-id");
        then.status(200);
    });

    let err = client(&server)
        .upload_file_chunked("pkg", b"abc", 2, &UploadFileChunkOptionalParams::default())
        .await
        .expect_err("commit fails");

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    cleanup.assert();
}

#[tokio::test]
async fn chunk_length_must_match_range() {
    let server = MockServer::start();
    let range = UploadChunkRange {
        start: 0,
        end: 9,
        total: 10,
    };

    let err = client(&server)
        .upload_file_chunk(
            "pkg",
            uuid::Uuid::new_v4(),
            range,
            vec![0; 4],
            &UploadFileChunkOptionalParams::default(),
        )
        .await
        .expect_err("short chunk");

    assert!(matches!(err, ClientError::InvalidArgument(_)));
}

#[tokio::test]
async fn inverted_or_oversized_ranges_are_rejected() {
    let server = MockServer::start();
    let upload = server.mock(|when, then| {
        when.method(PUT).path("/ImageStore/pkg/$/UploadChunk");
        then.status(200);
    });
    let ranges = [
        UploadChunkRange {
            start: 5,
            end: 3,
            total: 10,
        },
        UploadChunkRange {
            start: 8,
            end: 10,
            total: 10,
        },
    ];

    for range in ranges {
        let err = client(&server)
            .upload_file_chunk(
                "pkg",
                uuid::Uuid::new_v4(),
                range,
                Vec::new(),
                &UploadFileChunkOptionalParams::default(),
            )
            .await
            .expect_err("invalid range");
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
    upload.assert_hits(0);
}
