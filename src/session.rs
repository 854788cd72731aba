//! Age-gated session
//!
//! Boards flagged as adult-only answer every request with a consent page
//! until the client holds the `over18` cookie. [`Session::open`] submits the
//! consent form once; the returned session is then passed by reference to
//! every fetch for the rest of the run.

use crate::boards::BoardList;
use crate::config::{Config, SiteConfig};
use crate::error::{Error, Result};
use reqwest::StatusCode;
use tracing::{debug, info};

/// Cookie-bearing HTTP client bound to one site
#[derive(Clone, Debug)]
pub struct Session {
    http: reqwest::Client,
    site: SiteConfig,
    board: String,
}

impl Session {
    /// Confirm the age gate for `board` and return the authenticated session
    ///
    /// # Errors
    /// - [`Error::UnknownBoard`] if `board` is not in `boards`
    /// - [`Error::Authentication`] if the confirmation answers anything but 200
    /// - [`Error::Network`] if the request cannot be sent
    pub async fn open(site: &SiteConfig, boards: &BoardList, board: &str) -> Result<Self> {
        let board = boards.validate(board)?;

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(site.user_agent.as_str());
        if let Some(timeout) = site.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let from = SiteConfig::board_index_path(board);
        let response = http
            .post(site.over18_url())
            .form(&[("from", from.as_str()), ("yes", "yes")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Authentication {
                status: status.as_u16(),
            });
        }

        info!(board = %board, origin = %site.origin, "age confirmation accepted");
        Ok(Self {
            http,
            site: site.clone(),
            board: board.to_string(),
        })
    }

    /// Load the allow-list named by `config` and open a session for its board
    pub async fn from_config(config: &Config) -> Result<Self> {
        let boards = BoardList::load(&config.boards_file).await?;
        Self::open(&config.site, &boards, &config.board).await
    }

    /// Board this session was confirmed for
    pub fn board(&self) -> &str {
        &self.board
    }

    /// Site settings the session was opened with
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Issue a GET with the session's cookie and fixed headers
    pub(crate) async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url = %url, "GET");
        Ok(self.http.get(url).send().await?)
    }
}
