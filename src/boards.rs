//! Board allow-list
//!
//! The list is a plain text file with one board name per line. Only the first
//! comma-separated field of each line counts, so a CSV export with extra
//! columns works as-is. Blank lines are ignored.

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Closed set of board identifiers a session may be opened for
#[derive(Clone, Debug, Default)]
pub struct BoardList {
    boards: Vec<String>,
}

impl BoardList {
    /// Read the allow-list from `path`
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config(
                format!("cannot read board list {}: {}", path.display(), e),
                "boards_file",
            )
        })?;
        let list = Self::parse(&content);
        debug!(
            path = %path.display(),
            boards = list.len(),
            "loaded board allow-list"
        );
        Ok(list)
    }

    /// Parse allow-list content, de-duplicated, in file order
    pub fn parse(content: &str) -> Self {
        let mut boards: Vec<String> = Vec::new();
        for line in content.lines() {
            let name = line.split(',').next().unwrap_or("").trim();
            if !name.is_empty() && !boards.iter().any(|b| b == name) {
                boards.push(name.to_string());
            }
        }
        Self { boards }
    }

    /// Whether `board` is allowed
    pub fn contains(&self, board: &str) -> bool {
        self.iter().any(|b| b == board)
    }

    /// Reject boards outside the allow-list
    pub fn validate<'a>(&self, board: &'a str) -> Result<&'a str> {
        if self.contains(board) {
            Ok(board)
        } else {
            Err(Error::UnknownBoard {
                board: board.to_string(),
            })
        }
    }

    /// Get an iterator over board names
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.boards.iter()
    }

    /// Number of allowed boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check if the list allows nothing
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
