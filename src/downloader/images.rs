//! Image download to the local save directory.

use crate::config::{ExtensionPolicy, SaveConfig};
use crate::error::{Error, Result};
use crate::session::Session;
use crate::types::{DownloadSummary, Post};
use crate::utils::{destination_name, extension_for_content_type, get_unique_path, image_file_name};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Create `save_dir/name` unless it already exists
///
/// Only the last path component is created; `save_dir` itself must exist.
/// Calling this again for the same name is a no-op.
pub async fn ensure_destination(save_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = save_dir.join(name);
    match tokio::fs::create_dir(&dir).await {
        Ok(()) => {
            info!(dir = %dir.display(), "created destination directory");
            Ok(dir)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(dir),
        Err(e) => Err(e.into()),
    }
}

/// Download every resolved image of `post` into its destination directory
///
/// Files are named `<sanitized title>_<index>.<ext>` with a zero-based index
/// over the post's image list. The destination directory is created even
/// when the post has no images. Images that answer anything but 200, or whose
/// host cannot be reached, are skipped and counted; nothing is retried.
///
/// # Errors
/// [`Error::ImagesNotResolved`] if the detail page of `post` was never parsed.
pub async fn download_images(
    session: &Session,
    post: &Post,
    save: &SaveConfig,
) -> Result<DownloadSummary> {
    let Some(images) = post.images.as_deref() else {
        return Err(Error::ImagesNotResolved {
            title: post.title.clone(),
        });
    };

    let mut summary = DownloadSummary::default();
    let dir = ensure_destination(&save.save_dir, &destination_name(post, save.destination)).await?;

    for (index, url) in images.iter().enumerate() {
        let response = match session.get(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "image request failed, skipping");
                summary.skipped += 1;
                continue;
            }
        };
        let status = response.status();
        if status != StatusCode::OK {
            debug!(url = %url, status = status.as_u16(), "image unavailable, skipping");
            summary.skipped += 1;
            continue;
        }

        let extension = match save.extension {
            ExtensionPolicy::Png => "png",
            ExtensionPolicy::ContentType => extension_for_content_type(
                response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok()),
            ),
        };
        let target = dir.join(image_file_name(&post.title, index, extension));
        let Some(target) = get_unique_path(&target, save.file_collision)? else {
            debug!(path = %target.display(), "file exists, skipping");
            summary.skipped += 1;
            continue;
        };

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %url, error = %e, "image body read failed, skipping");
                summary.skipped += 1;
                continue;
            }
        };
        tokio::fs::write(&target, &bytes).await?;
        debug!(url = %url, path = %target.display(), bytes = bytes.len(), "saved image");
        summary.saved.push(target);
    }

    Ok(summary)
}
