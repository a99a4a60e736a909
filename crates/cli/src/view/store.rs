use ::common::api::image_store::{FolderSizeInfo, ImageStoreContent};

use super::format::{format_optional_str, format_size, format_timestamp};
use super::table::render_table;

/// Folders first, then files, each with a trailing `/` or its size.
pub fn render_store_content(content: &ImageStoreContent) -> String {
    let mut rows = Vec::with_capacity(content.store_folders.len() + content.store_files.len());
    for folder in &content.store_folders {
        rows.push(vec![
            format!("{}/", format_optional_str(folder.store_relative_path.as_deref())),
            format!("{} files", format_optional_str(folder.file_count.as_deref())),
            "-".to_string(),
        ]);
    }
    for file in &content.store_files {
        rows.push(vec![
            format_optional_str(file.store_relative_path.as_deref()),
            format_size(file.file_size.as_deref()),
            format_timestamp(file.modified_date),
        ]);
    }
    render_table(&["PATH", "SIZE", "MODIFIED"], &rows)
}

pub fn render_folder_sizes(sizes: &[FolderSizeInfo]) -> String {
    let rows = sizes
        .iter()
        .map(|info| {
            vec![
                format_optional_str(info.store_relative_path.as_deref()),
                format_size(info.folder_size.as_deref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["PATH", "SIZE"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn folders_are_listed_before_files() {
        let content: ImageStoreContent = serde_json::from_value(json!({
            "StoreFiles": [{"StoreRelativePath": "Store/manifest.xml", "FileSize": "2048"}],
            "StoreFolders": [{"StoreRelativePath": "Store/ShopType", "FileCount": "12"}]
        }))
        .expect("content");

        let out = render_store_content(&content);
        let rows = out.lines().skip(1).collect::<Vec<_>>();
        assert!(rows[0].starts_with("Store/ShopType/"));
        assert!(rows[0].contains("12 files"));
        assert!(rows[1].contains("2.0Ki"));
    }
}
