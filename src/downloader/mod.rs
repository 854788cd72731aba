//! Driver loop tying the pipeline together.
//!
//! For every configured listing page, in order: fetch the listing, then for
//! each post fetch its detail page and download its images. One request is
//! in flight at a time and nothing is retried.
//!
//! - [`images`] - Image download to the local save directory

pub mod images;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::detail::update_images;
use crate::error::Result;
use crate::listing::fetch_listing;
use crate::session::Session;
use crate::types::{DownloadSummary, FetchOutcome, Post, RunSummary};
use tracing::{debug, info, warn};

/// Board image downloader bound to one authenticated session
pub struct PttDownloader {
    config: Config,
    session: Session,
}

impl PttDownloader {
    /// Validate `config`, load the board allow-list and confirm the age gate
    ///
    /// # Errors
    /// Fails on invalid configuration, an unreadable or non-matching board
    /// list, or a rejected age confirmation.
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let session = Session::from_config(&config).await?;
        Ok(Self { config, session })
    }

    /// Use an already opened session
    pub fn with_session(config: Config, session: Session) -> Self {
        Self { config, session }
    }

    /// The authenticated session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walk every configured page and download all images found
    pub async fn run(&self) -> Result<RunSummary> {
        tokio::fs::create_dir_all(&self.config.save.save_dir).await?;
        info!(
            board = %self.session.board(),
            start = self.config.pages.start,
            end = self.config.pages.end,
            pages = self.config.pages.page_count(),
            save_dir = %self.config.save.save_dir.display(),
            "starting run"
        );

        let mut summary = RunSummary::default();
        for page in self.config.pages.iter() {
            self.process_page(page, &mut summary).await?;
        }

        info!(
            pages = summary.pages,
            pages_unavailable = summary.pages_unavailable,
            posts = summary.posts,
            posts_skipped = summary.posts_skipped,
            images_saved = summary.images_saved,
            images_skipped = summary.images_skipped,
            "run finished"
        );
        Ok(summary)
    }

    async fn process_page(&self, page: u32, summary: &mut RunSummary) -> Result<()> {
        let url = self
            .config
            .site
            .listing_url(self.session.board(), page);

        let posts = match fetch_listing(&self.session, &url).await? {
            FetchOutcome::Fetched(posts) => posts,
            FetchOutcome::Empty => Vec::new(),
            FetchOutcome::Unavailable { .. } => {
                summary.pages_unavailable += 1;
                return Ok(());
            }
        };
        summary.pages += 1;
        info!(page, posts = posts.len(), "processing listing page");

        for mut post in posts {
            summary.posts += 1;
            match self.process_post(&mut post).await? {
                Some(downloaded) => summary.record_download(&downloaded),
                None => summary.posts_skipped += 1,
            }
        }
        Ok(())
    }

    /// Resolve one post's images and download them
    ///
    /// Returns `None` when the post was skipped: it is deleted (no detail
    /// link) or its detail page did not answer 200.
    pub async fn process_post(&self, post: &mut Post) -> Result<Option<DownloadSummary>> {
        if post.is_deleted() {
            debug!(title = %post.title, "post deleted, skipping");
            return Ok(None);
        }

        if let FetchOutcome::Unavailable { status } = update_images(&self.session, post).await? {
            warn!(title = %post.title, href = %post.href, status, "skipping post");
            return Ok(None);
        }

        let downloaded = images::download_images(&self.session, post, &self.config.save).await?;
        debug!(
            title = %post.title,
            saved = downloaded.saved.len(),
            skipped = downloaded.skipped,
            "post done"
        );
        Ok(Some(downloaded))
    }
}
