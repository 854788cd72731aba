//! Detail page fetching: embedded image discovery

use crate::error::Result;
use crate::session::Session;
use crate::types::{FetchOutcome, Post};
use crate::utils::selector;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

static RICH_CONTENT: LazyLock<Selector> = LazyLock::new(|| selector("div.richcontent"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Fetch a post's detail page and record its image URLs on the post
///
/// On 200 the post's `images` becomes `Some(..)` (possibly empty) and the
/// outcome carries the number of images found. On any other status the error
/// page is not parsed and `images` stays `None`.
pub async fn update_images(session: &Session, post: &mut Post) -> Result<FetchOutcome<usize>> {
    let url = session.site().detail_url(&post.href);
    let response = session.get(&url).await?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!(url = %url, status = status.as_u16(), "detail page unavailable");
        return Ok(FetchOutcome::Unavailable {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let base = Url::parse(&url).ok();
    let images = parse_images(&body, base.as_ref());
    debug!(url = %url, images = images.len(), "parsed detail page");

    let count = images.len();
    post.images = Some(images);
    if count == 0 {
        Ok(FetchOutcome::Empty)
    } else {
        Ok(FetchOutcome::Fetched(count))
    }
}

/// Collect the first image `src` of every rich-content block, in document order
///
/// Absolute sources are kept verbatim. Relative and protocol-relative ones
/// are resolved against `base` when given. Duplicates are kept.
pub fn parse_images(html: &str, base: Option<&Url>) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&RICH_CONTENT)
        .filter_map(|block| block.select(&IMAGE).next())
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| resolve_src(src, base))
        .collect()
}

fn resolve_src(src: &str, base: Option<&Url>) -> String {
    if Url::parse(src).is_ok() {
        return src.to_string();
    }
    base.and_then(|b| b.join(src).ok())
        .map(String::from)
        .unwrap_or_else(|| src.to_string())
}
