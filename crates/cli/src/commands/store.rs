use anyhow::Context;
use tracing::info;

use crate::args::{StoreCommands, StorePathArgs, StoreUploadArgs};
use crate::commands::{CommandContext, require};
use crate::view::print_output;
use crate::view::store::{render_folder_sizes, render_store_content};

pub async fn handle_store(ctx: &CommandContext, command: StoreCommands) -> anyhow::Result<()> {
    match command {
        StoreCommands::Ls(args) => list_content(ctx, args).await?,
        StoreCommands::Size(args) => {
            let size = match args.path.as_deref() {
                None => {
                    ctx.client
                        .get_image_store_root_folder_size(&ctx.timeout())
                        .await?
                }
                Some(path) => {
                    ctx.client
                        .get_image_store_folder_size(path, &ctx.timeout())
                        .await?
                }
            };
            print_output(args.output.mode(), &size, |s| {
                render_folder_sizes(std::slice::from_ref(s))
            })?;
        }
        StoreCommands::Upload(args) => upload(ctx, args).await?,
        StoreCommands::Delete(args) => {
            ctx.client
                .delete_image_store_content(&args.path, &ctx.timeout())
                .await?;
            println!("deleted {}", args.path);
        }
    }
    Ok(())
}

async fn list_content(ctx: &CommandContext, args: StorePathArgs) -> anyhow::Result<()> {
    let content = match args.path.as_deref() {
        None => ctx.client.get_image_store_root_content(&ctx.timeout()).await?,
        Some(path) => {
            let content = ctx
                .client
                .get_image_store_content(path, &ctx.timeout())
                .await?;
            require(content, &format!("image store path '{path}'"))?
        }
    };
    print_output(args.output.mode(), &content, render_store_content)
}

async fn upload(ctx: &CommandContext, args: StoreUploadArgs) -> anyhow::Result<()> {
    let contents = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let size = contents.len() as u64;

    if size <= args.chunk_size {
        ctx.client
            .upload_file(&args.path, contents, &ctx.timeout())
            .await?;
        info!(path = %args.path, size, "uploaded");
    } else {
        let session_id = ctx
            .client
            .upload_file_chunked(&args.path, &contents, args.chunk_size, &ctx.timeout())
            .await?;
        info!(path = %args.path, size, %session_id, "uploaded in chunks");
    }
    println!("uploaded {} to {} ({size} bytes)", args.file.display(), args.path);
    Ok(())
}
