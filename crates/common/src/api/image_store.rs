//! Image store: content listings, copies, chunked upload sessions and usage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::params::TimeoutOptionalParams;

/// Version of a stored file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FileVersion {
    /// Version number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
    /// Data loss epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_data_loss_number: Option<String>,
    /// Configuration epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_configuration_number: Option<String>,
}

/// A file in the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FileInfo {
    /// Size in bytes, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    /// Version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_version: Option<FileVersion>,
    /// Last modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    /// Path relative to the store root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_relative_path: Option<String>,
}

/// A folder in the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FolderInfo {
    /// Path relative to the store root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_relative_path: Option<String>,
    /// Number of files, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_count: Option<String>,
}

/// Files and folders under a path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ImageStoreContent {
    /// Files.
    #[serde(default)]
    pub store_files: Vec<FileInfo>,
    /// Folders.
    #[serde(default)]
    pub store_folders: Vec<FolderInfo>,
}

/// Body of `copy_image_store_content`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ImageStoreCopyDescription {
    /// Source path.
    pub remote_source: String,
    /// Destination path.
    pub remote_destination: String,
    /// File names to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_files: Vec<String>,
    /// Only copy folders containing a `_.dir` mark file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_mark_file: Option<bool>,
}

/// Byte range still expected by an upload session, inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSessionRange {
    /// First byte, as a decimal string.
    pub start_position: String,
    /// Last byte, as a decimal string.
    pub end_position: String,
}

/// One file being uploaded in chunks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSessionInfo {
    /// Destination path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_relative_path: Option<String>,
    /// Session id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    /// Last modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    /// Total file size, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    /// Ranges not yet received.
    #[serde(default)]
    pub expected_ranges: Vec<UploadSessionRange>,
}

/// Upload sessions matching a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSession {
    /// Sessions.
    #[serde(default)]
    pub upload_sessions: Vec<UploadSessionInfo>,
}

/// Inclusive byte range of one chunk sent with `upload_file_chunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadChunkRange {
    /// First byte.
    pub start: u64,
    /// Last byte.
    pub end: u64,
    /// Size of the whole file.
    pub total: u64,
}

impl UploadChunkRange {
    /// Value of the `Content-Range` header, e.g. `bytes 0-1023/4096`.
    pub fn content_range(&self) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, self.total)
    }

    /// Number of bytes in the chunk; zero for an inverted range.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    /// Whether the chunk is empty; never true for a split range.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Splits a file of `total` bytes into chunks of at most `chunk_size`.
    ///
    /// Yields nothing for an empty file or a zero chunk size.
    pub fn split(total: u64, chunk_size: u64) -> impl Iterator<Item = UploadChunkRange> {
        let step = chunk_size.max(1);
        let count = if chunk_size == 0 { 0 } else { total.div_ceil(step) };
        (0..count).map(move |index| {
            let start = index * step;
            UploadChunkRange {
                start,
                end: (start + step).min(total) - 1,
                total,
            }
        })
    }
}

impl UploadSessionRange {
    /// The expected range as a chunk of a `total`-byte file.
    pub fn to_chunk(&self, total: u64) -> Option<UploadChunkRange> {
        let start = self.start_position.parse().ok()?;
        let end = self.end_position.parse().ok()?;
        (start <= end && end < total).then_some(UploadChunkRange { start, end, total })
    }
}

/// Size of a folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FolderSizeInfo {
    /// Folder path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_relative_path: Option<String>,
    /// Size in bytes, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_size: Option<String>,
}

/// Disk of the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DiskInfo {
    /// Capacity in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    /// Free bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_space: Option<String>,
}

/// Space used by one image store area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UsageInfo {
    /// Bytes used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_space: Option<String>,
    /// Files stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_count: Option<String>,
}

/// Usage of the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ImageStoreInfo {
    /// Disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_info: Option<DiskInfo>,
    /// Store metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by_metadata: Option<UsageInfo>,
    /// Staging area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by_staging: Option<UsageInfo>,
    /// Copied application packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by_copy: Option<UsageInfo>,
    /// Registered application packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by_register: Option<UsageInfo>,
}

/// Optional parameters of `upload_file`.
pub type UploadFileOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_content`.
pub type GetImageStoreContentOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `delete_image_store_content`.
pub type DeleteImageStoreContentOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_root_content`.
pub type GetImageStoreRootContentOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `copy_image_store_content`.
pub type CopyImageStoreContentOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `delete_image_store_upload_session`.
pub type DeleteImageStoreUploadSessionOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `commit_image_store_upload_session`.
pub type CommitImageStoreUploadSessionOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_upload_session_by_id`.
pub type GetImageStoreUploadSessionByIdOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_upload_session_by_path`.
pub type GetImageStoreUploadSessionByPathOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `upload_file_chunk`.
pub type UploadFileChunkOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_root_folder_size`.
pub type GetImageStoreRootFolderSizeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_folder_size`.
pub type GetImageStoreFolderSizeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_image_store_info`.
pub type GetImageStoreInfoOptionalParams = TimeoutOptionalParams;

/// Response of `get_image_store_content`.
pub type GetImageStoreContentResponse = ImageStoreContent;
/// Response of `get_image_store_root_content`.
pub type GetImageStoreRootContentResponse = ImageStoreContent;
/// Response of the upload session queries.
pub type GetImageStoreUploadSessionResponse = UploadSession;
/// Response of `get_image_store_root_folder_size`.
pub type GetImageStoreRootFolderSizeResponse = FolderSizeInfo;
/// Response of `get_image_store_folder_size`.
pub type GetImageStoreFolderSizeResponse = FolderSizeInfo;
/// Response of `get_image_store_info`.
pub type GetImageStoreInfoResponse = ImageStoreInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_range_header_is_inclusive() {
        let chunk = UploadChunkRange {
            start: 0,
            end: 1023,
            total: 4096,
        };
        assert_eq!(chunk.content_range(), "bytes 0-1023/4096");
        assert_eq!(chunk.len(), 1024);
    }

    #[test]
    fn inverted_range_is_empty() {
        let chunk = UploadChunkRange {
            start: 5,
            end: 3,
            total: 10,
        };
        assert!(chunk.is_empty());
        assert_eq!(chunk.len(), 0);
    }

    #[test]
    fn split_covers_the_file_exactly() {
        let chunks: Vec<_> = UploadChunkRange::split(2500, 1000).collect();
        let headers: Vec<_> = chunks.iter().map(UploadChunkRange::content_range).collect();
        assert_eq!(
            headers,
            ["bytes 0-999/2500", "bytes 1000-1999/2500", "bytes 2000-2499/2500"]
        );
        assert_eq!(chunks.iter().map(UploadChunkRange::len).sum::<u64>(), 2500);
        assert_eq!(UploadChunkRange::split(0, 1000).count(), 0);
        assert_eq!(UploadChunkRange::split(10, 0).count(), 0);
    }

    #[test]
    fn expected_ranges_map_to_chunks() {
        let session: UploadSession = serde_json::from_value(json!({
            "UploadSessions": [{
                "StoreRelativePath": "pkg/app.sfpkg",
                "SessionId": "1daae3f5-7fd6-42e9-b1ba-8c05f873994d",
                "FileSize": "4096",
                "ExpectedRanges": [
                    {"StartPosition": "1024", "EndPosition": "4095"},
                    {"StartPosition": "10", "EndPosition": "9000"}
                ]
            }]
        }))
        .expect("decode");
        let info = &session.upload_sessions[0];
        let total: u64 = info.file_size.as_deref().unwrap_or("0").parse().expect("size");
        assert_eq!(
            info.expected_ranges[0].to_chunk(total).map(|c| c.content_range()),
            Some("bytes 1024-4095/4096".to_string())
        );
        assert_eq!(info.expected_ranges[1].to_chunk(total), None);
    }

    #[test]
    fn content_listing_decodes_without_folders() {
        let content: ImageStoreContent = serde_json::from_value(json!({
            "StoreFiles": [{"FileSize": "12", "StoreRelativePath": "a/b.xml"}]
        }))
        .expect("decode");
        assert_eq!(content.store_files.len(), 1);
        assert!(content.store_folders.is_empty());
    }
}
