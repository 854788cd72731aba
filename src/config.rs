//! Configuration types for ptt-dl
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a configuration that walks board `Beauty` from page 3995 down to
//! 3901 and saves images under `saved/<date>/`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Site addressing and request settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host of the bulletin board (default: "https://www.ptt.cc")
    #[serde(default = "default_origin")]
    pub origin: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (None = wait indefinitely)
    #[serde(default, with = "optional_duration_serde")]
    pub request_timeout: Option<Duration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            user_agent: default_user_agent(),
            request_timeout: None,
        }
    }
}

impl SiteConfig {
    fn base(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// Age-gate confirmation endpoint
    pub fn over18_url(&self) -> String {
        format!("{}/ask/over18", self.base())
    }

    /// Board index path submitted as the `from` field of the age gate
    pub fn board_index_path(board: &str) -> String {
        format!("/bbs/{}/index.html", board)
    }

    /// Absolute URL of listing page `page` of `board`
    pub fn listing_url(&self, board: &str, page: u32) -> String {
        format!("{}/bbs/{}/index{}.html", self.base(), board, page)
    }

    /// Absolute URL for a site-relative detail link
    pub fn detail_url(&self, href: &str) -> String {
        format!("{}{}", self.base(), href)
    }
}

/// Closed range of listing page identifiers
///
/// Walked from `start` toward `end`, both inclusive. The walk descends when
/// `start > end`, which matches how the board numbers its newest pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// First page visited
    pub start: u32,
    /// Last page visited
    pub end: u32,
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            start: 3995,
            end: 3901,
        }
    }
}

impl PageRange {
    /// Page identifiers in visiting order
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32>> {
        if self.start >= self.end {
            Box::new((self.end..=self.start).rev())
        } else {
            Box::new(self.start..=self.end)
        }
    }

    /// Number of pages in the range (never zero)
    pub fn page_count(&self) -> usize {
        (self.start.abs_diff(self.end) as usize) + 1
    }
}

/// Post attribute that picks the download subdirectory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKey {
    /// Group by listing date, digits only (default)
    #[default]
    Date,
    /// Group by author id
    Author,
}

/// How to handle an image whose target file already exists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCollisionAction {
    /// Replace the existing file (default)
    #[default]
    Overwrite,
    /// Append " (1)", " (2)", ... to the file stem until the name is free
    Rename,
    /// Leave the existing file alone and count the image as skipped
    Skip,
}

/// Extension given to saved images
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionPolicy {
    /// Always `.png`, whatever the actual encoding (default)
    #[default]
    Png,
    /// Derive from the response `Content-Type`, falling back to `.png`
    ContentType,
}

/// Where and how images are written
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Base save directory (default: "saved")
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,

    /// Subdirectory grouping
    #[serde(default)]
    pub destination: DestinationKey,

    /// File collision handling
    #[serde(default)]
    pub file_collision: FileCollisionAction,

    /// Saved file extension
    #[serde(default)]
    pub extension: ExtensionPolicy,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            destination: DestinationKey::default(),
            file_collision: FileCollisionAction::default(),
            extension: ExtensionPolicy::default(),
        }
    }
}

/// Main configuration for [`PttDownloader`](crate::PttDownloader)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Site addressing and request settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Board to crawl (must appear in the allow-list)
    #[serde(default = "default_board")]
    pub board: String,

    /// Line-delimited list of allowed board names (default: "boards.txt")
    #[serde(default = "default_boards_file")]
    pub boards_file: PathBuf,

    /// Listing pages to visit
    #[serde(default)]
    pub pages: PageRange,

    /// Image output settings
    #[serde(default)]
    pub save: SaveConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            board: default_board(),
            boards_file: default_boards_file(),
            pages: PageRange::default(),
            save: SaveConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file and validate it
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config(
                format!("cannot read config file {}: {}", path.display(), e),
                "config",
            )
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings that would otherwise fail halfway through a run
    pub fn validate(&self) -> Result<()> {
        let origin = url::Url::parse(&self.site.origin)
            .map_err(|e| Error::config(format!("invalid origin: {}", e), "site.origin"))?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(Error::config(
                format!("unsupported origin scheme '{}'", origin.scheme()),
                "site.origin",
            ));
        }
        if self.board.trim().is_empty() {
            return Err(Error::config("board must not be empty", "board"));
        }
        if self.save.save_dir.as_os_str().is_empty() {
            return Err(Error::config("save_dir must not be empty", "save.save_dir"));
        }
        Ok(())
    }
}

// Default value functions
fn default_origin() -> String {
    "https://www.ptt.cc".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:101.0) Gecko/20100101 Firefox/101.0".to_string()
}

fn default_board() -> String {
    "Beauty".to_string()
}

fn default_boards_file() -> PathBuf {
    PathBuf::from("boards.txt")
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("saved")
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
