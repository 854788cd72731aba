//! Mock board site and HTML fixtures

use std::path::Path;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Listing page shaped like the board's `bbs-screen` markup
pub const LISTING_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>看板 Beauty 文章列表 - 批踢踢實業坊</title></head>
<body>
<div id="main-container">
<div class="r-list-container action-bar-margin bbs-screen">
    <div class="search-bar"></div>
    <div class="r-ent">
        <div class="nrec"><span class="hl f3">99</span></div>
        <div class="title">
            <a href="/bbs/Beauty/M.123.A.html">Test</a>
        </div>
        <div class="meta">
            <div class="author">alice</div>
            <div class="article-menu"></div>
            <div class="date"> 1/01</div>
            <div class="mark"></div>
        </div>
    </div>
    <div class="r-ent">
        <div class="nrec"><span class="hl f1">爆</span></div>
        <div class="title">
            <a href="/bbs/Beauty/M.124.A.html">[正妹] 早安</a>
        </div>
        <div class="meta">
            <div class="author">bob</div>
            <div class="article-menu"></div>
            <div class="date"> 1/02</div>
            <div class="mark"></div>
        </div>
    </div>
    <div class="r-ent">
        <div class="nrec"></div>
        <div class="title">
            (本文已被刪除) [carol]
        </div>
        <div class="meta">
            <div class="author">-</div>
            <div class="article-menu"></div>
            <div class="date"> 1/02</div>
            <div class="mark"></div>
        </div>
    </div>
</div>
</div>
</body></html>"#;

/// Detail page with the given rich-content image sources
pub fn detail_page(srcs: &[String]) -> String {
    let mut body = String::new();
    for src in srcs {
        body.push_str(&format!(
            r#"<a href="{src}" target="_blank" rel="noreferrer noopener nofollow">{src}</a>
<div class="richcontent"><img src="{src}" alt="" /></div>
"#
        ));
    }
    format!(
        r#"<!DOCTYPE html><html><body><div id="main-content" class="bbs-screen bbs-content">
<div class="article-metaline"><span class="article-meta-tag">作者</span></div>
{body}
</div></body></html>"#
    )
}

/// Mock site with the age gate, one listing page, two posts and three images
///
/// Listing and post pages only answer when the `over18` cookie is present.
pub async fn start_board_site() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask/over18"))
        .and(body_string_contains("yes=yes"))
        .respond_with(ResponseTemplate::new(200).insert_header("Set-Cookie", "over18=1; Path=/"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/bbs/Beauty/index3995.html"))
        .and(header("cookie", "over18=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .mount(&server)
        .await;

    let uri = server.uri();
    let first = detail_page(&[format!("{uri}/img/a.jpg"), format!("{uri}/img/missing.jpg")]);
    let second = detail_page(&[format!("{uri}/img/c.jpg")]);
    for (route, page) in [
        ("/bbs/Beauty/M.123.A.html", first),
        ("/bbs/Beauty/M.124.A.html", second),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("cookie", "over18=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page))
            .mount(&server)
            .await;
    }

    for (route, bytes) in [("/img/a.jpg", b"AAAA".as_slice()), ("/img/c.jpg", b"CC".as_slice())] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "image/jpeg")
                    .set_body_bytes(bytes.to_vec()),
            )
            .mount(&server)
            .await;
    }

    server
}

/// Write a board allow-list into `dir` and return its path
pub fn write_boards_file(dir: &Path, boards: &[&str]) -> std::path::PathBuf {
    let path = dir.join("boards.txt");
    std::fs::write(&path, boards.join("\n")).expect("write boards file");
    path
}
