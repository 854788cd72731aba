//! Listing page fetching and parsing
//!
//! A listing page holds one `div.r-ent` row per post:
//!
//! ```text
//! <div class="r-ent">
//!   <div class="nrec"><span class="hl f3">99</span></div>
//!   <div class="title"><a href="/bbs/Beauty/M.123.A.html">Test</a></div>
//!   <div class="meta">
//!     <div class="author">alice</div>
//!     <div class="date"> 1/01</div>
//!   </div>
//! </div>
//! ```
//!
//! Rows come back in page order, which is the board's display order rather
//! than strictly chronological.

use crate::coerce::{FieldKind, coerce_element, text_of};
use crate::error::Result;
use crate::session::Session;
use crate::types::{FetchOutcome, Post};
use crate::utils::selector;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

static ENTRY: LazyLock<Selector> = LazyLock::new(|| selector("div.r-ent"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("div.title"));
static SCORE: LazyLock<Selector> = LazyLock::new(|| selector("div.nrec span"));
static AUTHOR: LazyLock<Selector> = LazyLock::new(|| selector("div.author"));
static DATE: LazyLock<Selector> = LazyLock::new(|| selector("div.date"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Fetch a listing page and parse its post rows
///
/// A non-200 answer is reported as [`FetchOutcome::Unavailable`]; a page
/// without rows as [`FetchOutcome::Empty`].
pub async fn fetch_listing(session: &Session, page_url: &str) -> Result<FetchOutcome<Vec<Post>>> {
    let response = session.get(page_url).await?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!(url = %page_url, status = status.as_u16(), "listing page unavailable");
        return Ok(FetchOutcome::Unavailable {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let posts = parse_listing(&body);
    debug!(url = %page_url, posts = posts.len(), "parsed listing page");

    if posts.is_empty() {
        Ok(FetchOutcome::Empty)
    } else {
        Ok(FetchOutcome::Fetched(posts))
    }
}

/// Parse every post row of a listing page, in document order
pub fn parse_listing(html: &str) -> Vec<Post> {
    let document = Html::parse_document(html);
    document.select(&ENTRY).map(parse_entry).collect()
}

fn first<'a>(entry: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    entry.select(sel).next()
}

fn parse_entry(entry: ElementRef<'_>) -> Post {
    // deleted posts keep their row but have no anchor
    let href = first(entry, &ANCHOR)
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    Post {
        title: text_of(first(entry, &TITLE)),
        score: coerce_element(first(entry, &SCORE), FieldKind::Integer),
        author: text_of(first(entry, &AUTHOR)),
        date: text_of(first(entry, &DATE)),
        href,
        images: None,
    }
}
