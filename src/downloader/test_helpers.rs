//! Shared test helpers for building sessions against a mock site.

use crate::boards::BoardList;
use crate::config::{Config, SiteConfig};
use crate::downloader::PttDownloader;
use crate::session::Session;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const BOARD: &str = "Beauty";

/// Start a mock site whose age gate accepts every confirmation
pub(crate) async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask/over18"))
        .respond_with(ResponseTemplate::new(200).insert_header("Set-Cookie", "over18=1; Path=/"))
        .mount(&server)
        .await;
    server
}

/// Config pointing at `server`, saving under `save_dir`, single page 1
pub(crate) fn test_config(server: &MockServer, save_dir: &std::path::Path) -> Config {
    let mut config = Config {
        site: SiteConfig {
            origin: server.uri(),
            ..Default::default()
        },
        board: BOARD.to_string(),
        ..Default::default()
    };
    config.pages.start = 1;
    config.pages.end = 1;
    config.save.save_dir = save_dir.to_path_buf();
    config
}

/// Open a session on the mock site for [`BOARD`]
pub(crate) async fn open_session(server: &MockServer) -> Session {
    let site = SiteConfig {
        origin: server.uri(),
        ..Default::default()
    };
    Session::open(&site, &BoardList::parse(BOARD), BOARD)
        .await
        .unwrap()
}

/// Downloader with an open session; the save dir is created
pub(crate) async fn create_test_downloader(
    server: &MockServer,
) -> (PttDownloader, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_dir = temp_dir.path().join("saved");
    std::fs::create_dir_all(&save_dir).unwrap();

    let config = test_config(server, &save_dir);
    let session = open_session(server).await;
    (PttDownloader::with_session(config, session), temp_dir)
}

/// Listing HTML with one row per `(title, score, author, date, href)`
pub(crate) fn listing_html(rows: &[(&str, &str, &str, &str, Option<&str>)]) -> String {
    let mut html = String::from(r#"<html><body><div class="r-list-container action-bar-margin bbs-screen">"#);
    for (title, score, author, date, href) in rows {
        let title = match href {
            Some(href) => format!(r#"<a href="{}">{}</a>"#, href, title),
            None => title.to_string(),
        };
        html.push_str(&format!(
            r#"<div class="r-ent">
  <div class="nrec"><span class="hl f3">{score}</span></div>
  <div class="title">{title}</div>
  <div class="meta"><div class="author">{author}</div><div class="date">{date}</div></div>
</div>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}

/// Detail HTML with one rich-content block per image source
pub(crate) fn detail_html(srcs: &[&str]) -> String {
    let mut html = String::from(r#"<html><body><div id="main-content">"#);
    for src in srcs {
        html.push_str(&format!(
            r#"<a href="{src}">{src}</a><div class="richcontent"><img src="{src}" alt=""></div>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}
