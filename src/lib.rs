//! # ptt-dl
//!
//! Image downloader for PTT bulletin board listing pages.
//!
//! The pipeline is linear: confirm the age gate once, then for every listing
//! page fetch its post rows, follow each post to its detail page, collect the
//! embedded images and write them under `saved/<date or author>/`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ptt_dl::{Config, PttDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.board = "Beauty".to_string();
//!     config.pages.start = 3995;
//!     config.pages.end = 3990;
//!
//!     let downloader = PttDownloader::new(config).await?;
//!     let summary = downloader.run().await?;
//!     println!("saved {} images", summary.images_saved);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Board allow-list
pub mod boards;
/// Typed field extraction
pub mod coerce;
/// Configuration types
pub mod config;
/// Detail page image discovery
pub mod detail;
/// Driver loop and image download
pub mod downloader;
/// Error types
pub mod error;
/// Listing page parsing
pub mod listing;
/// Age-gated HTTP session
pub mod session;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use boards::BoardList;
pub use coerce::{FieldKind, coerce};
pub use config::{Config, DestinationKey, ExtensionPolicy, FileCollisionAction, PageRange};
pub use detail::{parse_images, update_images};
pub use downloader::PttDownloader;
pub use downloader::images::download_images;
pub use error::{Error, Result};
pub use listing::{fetch_listing, parse_listing};
pub use session::Session;
pub use types::{DownloadSummary, FetchOutcome, FieldValue, Post, RunSummary};
