use common::api::image_store::*;
use reqwest::header::CONTENT_RANGE;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{ClientError, FabricClient, Result};

/// Splits a store-relative path into request segments, dropping empty parts.
fn content_segments<'a>(content_path: &'a str, suffix: &[&'a str]) -> Vec<&'a str> {
    let mut segments = vec!["ImageStore"];
    segments.extend(content_path.split(['/', '\\']).filter(|part| !part.is_empty()));
    segments.extend_from_slice(suffix);
    segments
}

impl FabricClient {
    /// Uploads a whole file in one request. Large packages should go through
    /// [`FabricClient::upload_file_chunked`].
    pub async fn upload_file(
        &self,
        content_path: &str,
        contents: impl Into<reqwest::Body>,
        params: &UploadFileOptionalParams,
    ) -> Result<()> {
        let req = self
            .put(&content_segments(content_path, &[]), "6.0", params)
            .body(contents);
        self.send_empty("upload_file", req).await
    }

    pub async fn get_image_store_content(
        &self,
        content_path: &str,
        params: &GetImageStoreContentOptionalParams,
    ) -> Result<Option<GetImageStoreContentResponse>> {
        let req = self.get(&content_segments(content_path, &[]), "6.2", params);
        self.send_optional_json("get_image_store_content", req).await
    }

    pub async fn delete_image_store_content(
        &self,
        content_path: &str,
        params: &DeleteImageStoreContentOptionalParams,
    ) -> Result<()> {
        let req = self.delete(&content_segments(content_path, &[]), "6.0", params);
        self.send_empty("delete_image_store_content", req).await
    }

    pub async fn get_image_store_root_content(
        &self,
        params: &GetImageStoreRootContentOptionalParams,
    ) -> Result<GetImageStoreRootContentResponse> {
        let req = self.get(&["ImageStore"], "6.0", params);
        self.send_json("get_image_store_root_content", req).await
    }

    pub async fn copy_image_store_content(
        &self,
        description: &ImageStoreCopyDescription,
        params: &CopyImageStoreContentOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["ImageStore", "$", "Copy"], "6.0", params)
            .json(description);
        self.send_empty("copy_image_store_content", req).await
    }

    /// Drops an unfinished upload and the chunks received so far.
    pub async fn delete_image_store_upload_session(
        &self,
        session_id: Uuid,
        params: &DeleteImageStoreUploadSessionOptionalParams,
    ) -> Result<()> {
        let req = self
            .delete(&["ImageStore", "$", "DeleteUploadSession"], "6.0", params)
            .query(&[("session-id", session_id)]);
        self.send_empty("delete_image_store_upload_session", req).await
    }

    /// Assembles the uploaded chunks into the target file. Every byte must
    /// have been received.
    pub async fn commit_image_store_upload_session(
        &self,
        session_id: Uuid,
        params: &CommitImageStoreUploadSessionOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["ImageStore", "$", "CommitUploadSession"], "6.0", params)
            .query(&[("session-id", session_id)]);
        self.send_empty("commit_image_store_upload_session", req).await
    }

    pub async fn get_image_store_upload_session_by_id(
        &self,
        session_id: Uuid,
        params: &GetImageStoreUploadSessionByIdOptionalParams,
    ) -> Result<GetImageStoreUploadSessionResponse> {
        let req = self
            .get(&["ImageStore", "$", "GetUploadSession"], "6.0", params)
            .query(&[("session-id", session_id)]);
        self.send_json("get_image_store_upload_session_by_id", req).await
    }

    pub async fn get_image_store_upload_session_by_path(
        &self,
        content_path: &str,
        params: &GetImageStoreUploadSessionByPathOptionalParams,
    ) -> Result<GetImageStoreUploadSessionResponse> {
        let segments = content_segments(content_path, &["$", "GetUploadSession"]);
        let req = self.get(&segments, "6.0", params);
        self.send_json("get_image_store_upload_session_by_path", req).await
    }

    /// Sends one chunk of an upload session. `chunk` must hold exactly
    /// `range.len()` bytes.
    pub async fn upload_file_chunk(
        &self,
        content_path: &str,
        session_id: Uuid,
        range: UploadChunkRange,
        chunk: Vec<u8>,
        params: &UploadFileChunkOptionalParams,
    ) -> Result<()> {
        if range.is_empty() || range.end >= range.total {
            return Err(ClientError::InvalidArgument(format!(
                "invalid chunk range {}",
                range.content_range()
            )));
        }
        if chunk.len() as u64 != range.len() {
            return Err(ClientError::InvalidArgument(format!(
                "chunk holds {} bytes but range {} covers {}",
                chunk.len(),
                range.content_range(),
                range.len()
            )));
        }
        let segments = content_segments(content_path, &["$", "UploadChunk"]);
        let req = self
            .put(&segments, "6.0", params)
            .query(&[("session-id", session_id)])
            .header(CONTENT_RANGE, range.content_range())
            .body(chunk);
        self.send_empty("upload_file_chunk", req).await
    }

    /// Uploads `contents` through a fresh upload session in chunks of
    /// `chunk_size` bytes and commits it. A failed session is deleted before
    /// the error is returned.
    pub async fn upload_file_chunked(
        &self,
        content_path: &str,
        contents: &[u8],
        chunk_size: u64,
        params: &UploadFileChunkOptionalParams,
    ) -> Result<Uuid> {
        if chunk_size == 0 {
            return Err(ClientError::InvalidArgument(
                "chunk size must be positive".to_string(),
            ));
        }
        let session_id = Uuid::new_v4();
        let total = contents.len() as u64;
        debug!(%session_id, content_path, total, chunk_size, "starting chunked upload");

        let outcome = async {
            for range in UploadChunkRange::split(total, chunk_size) {
                let chunk = contents[range.start as usize..=range.end as usize].to_vec();
                self.upload_file_chunk(content_path, session_id, range, chunk, params)
                    .await?;
            }
            self.commit_image_store_upload_session(session_id, params)
                .await
        }
        .await;

        if let Err(err) = outcome {
            if let Err(cleanup) = self
                .delete_image_store_upload_session(session_id, params)
                .await
            {
                warn!(%session_id, error = %cleanup, "failed to delete upload session");
            }
            return Err(err);
        }
        Ok(session_id)
    }

    pub async fn get_image_store_root_folder_size(
        &self,
        params: &GetImageStoreRootFolderSizeOptionalParams,
    ) -> Result<GetImageStoreRootFolderSizeResponse> {
        let req = self.get(&["ImageStore", "$", "FolderSize"], "6.5", params);
        self.send_json("get_image_store_root_folder_size", req).await
    }

    pub async fn get_image_store_folder_size(
        &self,
        content_path: &str,
        params: &GetImageStoreFolderSizeOptionalParams,
    ) -> Result<GetImageStoreFolderSizeResponse> {
        let segments = content_segments(content_path, &["$", "FolderSize"]);
        let req = self.get(&segments, "6.5", params);
        self.send_json("get_image_store_folder_size", req).await
    }

    /// Disk usage of the image store, split by content kind.
    pub async fn get_image_store_info(
        &self,
        params: &GetImageStoreInfoOptionalParams,
    ) -> Result<GetImageStoreInfoResponse> {
        let req = self.get(&["ImageStore", "$", "Info"], "6.5", params);
        self.send_json("get_image_store_info", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_paths_become_segments() {
        assert_eq!(
            content_segments("pkg/app/ApplicationManifest.xml", &[]),
            ["ImageStore", "pkg", "app", "ApplicationManifest.xml"]
        );
        assert_eq!(
            content_segments("/pkg\\app/", &["$", "FolderSize"]),
            ["ImageStore", "pkg", "app", "$", "FolderSize"]
        );
    }
}
