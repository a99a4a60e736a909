use super::common::OutputFormatArgs;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CHUNK_SIZE: u64 = 4 * 1024 * 1024;

#[derive(Debug, Subcommand)]
pub enum StoreCommands {
    /// List files and folders at a store path (the root when omitted).
    Ls(StorePathArgs),
    /// Show the size of a store folder (the root when omitted).
    Size(StorePathArgs),
    /// Upload a local file to a store path.
    Upload(StoreUploadArgs),
    /// Delete a file or folder from the store.
    Delete(StoreDeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct StorePathArgs {
    /// Path relative to the store root.
    pub path: Option<String>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct StoreUploadArgs {
    /// Local file to upload.
    pub file: PathBuf,
    /// Destination path relative to the store root.
    pub path: String,
    /// Files larger than this are sent as a chunked upload session.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u64,
}

#[derive(Debug, Clone, Args)]
pub struct StoreDeleteArgs {
    /// Path relative to the store root.
    pub path: String,
}
