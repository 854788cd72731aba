//! Core types shared across the pipeline

use std::fmt;
use std::path::PathBuf;

/// A value produced by the field coercer
///
/// Numeric fields widen to [`FieldValue::Text`] when the page shows a
/// non-numeric marker (the board prints `爆` for an overwhelming push count).
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Trimmed text
    Text(String),
    /// Parsed integer
    Integer(i64),
    /// Parsed floating-point number
    Float(f64),
}

impl FieldValue {
    /// The integer, if this value parsed as one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if this value stayed (or fell back to) text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Integer(0)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// One entry of a listing page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Post {
    /// Post title as shown in the listing
    pub title: String,
    /// Push score; an integer, or the board's text marker
    pub score: FieldValue,
    /// Author id
    pub author: String,
    /// Listing date, month/day only (e.g. "1/01")
    pub date: String,
    /// Site-relative link to the detail page; empty for deleted posts
    pub href: String,
    /// Image URLs found on the detail page
    ///
    /// `None` until the detail fetcher has parsed the post page.
    pub images: Option<Vec<String>>,
}

impl Post {
    /// Deleted or moderated posts keep their listing row but lose the link
    pub fn is_deleted(&self) -> bool {
        self.href.is_empty()
    }

    /// Resolved image URLs, empty while unresolved
    pub fn image_urls(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }
}

/// Result of fetching a page that may legitimately be missing
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome<T> {
    /// Page answered 200 and yielded data
    Fetched(T),
    /// Page answered 200 but held nothing of interest
    Empty,
    /// Page answered with a non-200 status
    Unavailable {
        /// HTTP status code returned
        status: u16,
    },
}

impl<T> FetchOutcome<T> {
    /// Whether the page answered with a non-200 status
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchOutcome::Unavailable { .. })
    }

    /// The fetched data, if any
    pub fn into_option(self) -> Option<T> {
        match self {
            FetchOutcome::Fetched(value) => Some(value),
            FetchOutcome::Empty | FetchOutcome::Unavailable { .. } => None,
        }
    }
}

impl<T: Default> FetchOutcome<T> {
    /// The fetched data, or `T::default()` for empty and unavailable pages
    pub fn unwrap_or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

/// What the image downloader did for one post
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Files written, in image order
    pub saved: Vec<PathBuf>,
    /// Images not written (non-200 response or skipped collision)
    pub skipped: usize,
}

/// Totals for a whole driver run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Listing pages that answered 200
    pub pages: usize,
    /// Listing pages that answered with another status
    pub pages_unavailable: usize,
    /// Posts seen across all listing pages
    pub posts: usize,
    /// Posts skipped because they were deleted or their detail page was unavailable
    pub posts_skipped: usize,
    /// Image files written
    pub images_saved: usize,
    /// Images not written
    pub images_skipped: usize,
}

impl RunSummary {
    pub(crate) fn record_download(&mut self, summary: &DownloadSummary) {
        self.images_saved += summary.saved.len();
        self.images_skipped += summary.skipped;
    }
}
