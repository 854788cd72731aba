//! Utility functions for naming, paths and selectors

use crate::config::{DestinationKey, FileCollisionAction};
use crate::error::{Error, Result};
use crate::types::Post;
use regex::Regex;
use scraper::Selector;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Maximum number of rename attempts when resolving file collisions
const MAX_RENAME_ATTEMPTS: u32 = 9999;

/// Directory used when a destination key sanitizes to nothing
pub const UNKNOWN_DESTINATION: &str = "unknown";

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| regex(r"\W"));
static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| regex(r"\D"));

// Patterns and selectors below are literals; failing to compile is a bug.
#[allow(clippy::expect_used)]
fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

#[allow(clippy::expect_used)]
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// File stem for a post's images: every non-word character becomes `_`
///
/// The mapping is lossy, so distinct titles can share a stem:
///
/// ```
/// use ptt_dl::utils::sanitize_title;
///
/// assert_eq!(sanitize_title("a/b"), "a_b");
/// assert_eq!(sanitize_title("a b"), "a_b");
/// assert_eq!(sanitize_title("[正妹] 早安"), "_正妹__早安");
/// ```
pub fn sanitize_title(title: &str) -> String {
    NON_WORD.replace_all(title, "_").into_owned()
}

/// Subdirectory name for a post under the given grouping
///
/// Dates keep digits only (`"1/01"` becomes `"101"`), authors keep word
/// characters only. An empty result maps to [`UNKNOWN_DESTINATION`].
pub fn destination_name(post: &Post, key: DestinationKey) -> String {
    let name = match key {
        DestinationKey::Date => NON_DIGIT.replace_all(&post.date, "").into_owned(),
        DestinationKey::Author => NON_WORD.replace_all(&post.author, "").into_owned(),
    };
    if name.is_empty() {
        UNKNOWN_DESTINATION.to_string()
    } else {
        name
    }
}

/// File name of image `index` of a post
pub fn image_file_name(title: &str, index: usize, extension: &str) -> String {
    format!("{}_{}.{}", sanitize_title(title), index, extension)
}

/// Map an image `Content-Type` to a file extension
///
/// Parameters such as `; charset=` are ignored. Unknown types map to `png`.
pub fn extension_for_content_type(content_type: Option<&str>) -> &'static str {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();
    match mime.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "png",
    }
}

/// Decide where an image should be written, handling collisions
///
/// Returns `Ok(None)` when the file exists and the action is
/// [`FileCollisionAction::Skip`]. For `Rename`, the first free name among
/// `stem (1).ext`, `stem (2).ext`, ... is used.
pub fn get_unique_path(path: &Path, action: FileCollisionAction) -> Result<Option<PathBuf>> {
    match action {
        FileCollisionAction::Overwrite => Ok(Some(path.to_path_buf())),
        FileCollisionAction::Skip => {
            if path.exists() {
                Ok(None)
            } else {
                Ok(Some(path.to_path_buf()))
            }
        }
        FileCollisionAction::Rename => {
            if !path.exists() {
                return Ok(Some(path.to_path_buf()));
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
                Error::FileCollision {
                    path: path.to_path_buf(),
                    reason: "cannot extract file stem".to_string(),
                }
            })?;
            let extension = path.extension().and_then(|e| e.to_str());
            let parent = path.parent().unwrap_or_else(|| Path::new(""));

            for i in 1..=MAX_RENAME_ATTEMPTS {
                let new_name = match extension {
                    Some(ext) => format!("{} ({}).{}", stem, i, ext),
                    None => format!("{} ({})", stem, i),
                };
                let new_path = parent.join(new_name);
                if !new_path.exists() {
                    return Ok(Some(new_path));
                }
            }

            Err(Error::FileCollision {
                path: path.to_path_buf(),
                reason: format!(
                    "no free name after {} rename attempts",
                    MAX_RENAME_ATTEMPTS
                ),
            })
        }
    }
}
