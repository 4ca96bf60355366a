//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use site_keyword_scanner::config::{build_config, Overrides, ScanConfig, SettingsFile};
use site_keyword_scanner::crawler::{scan, Crawler};
use site_keyword_scanner::output::{MatchRecord, MemorySink};
use site_keyword_scanner::url::ContentType;
use std::future::pending;
use std::io::{Cursor, Write};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for the given seed
fn create_test_config(seed: &str, keywords: &[&str], max_depth: u32, max_pages: usize) -> ScanConfig {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
    build_config(
        seed,
        &keywords,
        false,
        SettingsFile::default(),
        Overrides {
            max_depth: Some(max_depth),
            max_pages: Some(max_pages),
            output_directory: None,
        },
    )
    .expect("Failed to build config")
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><head></head><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .mount(server)
        .await;
}

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        String::new(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut kids = Vec::new();
    for (i, text) in pages.iter().enumerate() {
        let page_id = 4 + 2 * i;
        kids.push(format!("{} 0 R", page_id));
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_id + 1
        ));
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }
    objects[1] = format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    );

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
    }

    let xref_offset = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}

fn record(url: String, content_type: ContentType, keyword: &str, occurrences: usize) -> MatchRecord {
    MatchRecord::new(&url, content_type, keyword, occurrences)
}

#[tokio::test]
async fn test_full_crawl_pages_and_document() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<p>Alpha here</p>
           <a href="/b">next page</a>
           <a href="/doc.pdf">report</a>
           <a href="https://elsewhere.example/">outside</a>"#,
    )
    .await;
    mount_page(&mock_server, "/b", "<p>alpha and ALPHA</p>").await;

    // Not a real PDF: extraction fails and yields no text
    Mock::given(method("GET"))
        .and(path("/doc.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-broken".to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), &["alpha"], 2, 10);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Crawl failed");

    assert_eq!(
        crawler.sink().records(),
        &[
            record(format!("{}/", base_url), ContentType::Html, "alpha", 1),
            record(format!("{}/b", base_url), ContentType::Html, "alpha", 2),
        ]
    );
    assert_eq!(report.matches_saved, 2);
    assert_eq!(report.pages_processed, 3);
    assert!(!report.interrupted);

    let state = crawler.state();
    assert!(state.is_visited(&format!("{}/doc.pdf", base_url)));
    assert!(!state.is_visited("https://elsewhere.example/"));
}

#[tokio::test]
async fn test_documents_processed_before_sibling_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/page">page</a><a href="/notes.txt">notes</a><a href="/letter.docx">letter</a>"#,
    )
    .await;
    mount_page(&mock_server, "/page", "<p>alpha</p>").await;

    Mock::given(method("GET"))
        .and(path("/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Plain ALPHA text"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/letter.docx"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(build_docx(&["Dear Alpha,", "alpha regards"])),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), &["alpha"], 2, 10);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    crawler.run(pending::<()>()).await.expect("Crawl failed");
    let sink = crawler.into_sink();

    // Each document went to the front as it was found, so the last one found runs first
    assert_eq!(
        sink.records(),
        &[
            record(format!("{}/letter.docx", base_url), ContentType::Docx, "alpha", 2),
            record(format!("{}/notes.txt", base_url), ContentType::Txt, "alpha", 1),
            record(format!("{}/page", base_url), ContentType::Html, "alpha", 1),
        ]
    );
}

#[tokio::test]
async fn test_linked_pdf_produces_match() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/files/annual.pdf">annual report</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/files/annual.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(build_pdf(&["Alpha results", "More ALPHA"]))
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, &["alpha", "results"], 2, 10);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Crawl failed");

    assert_eq!(report.pages_processed, 2);
    assert_eq!(
        crawler.sink().records(),
        &[
            record(format!("{}/files/annual.pdf", base_url), ContentType::Pdf, "alpha", 2),
            record(format!("{}/files/annual.pdf", base_url), ContentType::Pdf, "results", 1),
        ]
    );
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;

    // Create a chain: / -> level1 -> level2
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/level1">Level 1</a>"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    // At max depth: fetched for text only, links are not followed
    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(html(r#"<a href="/level2">Level 2</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(html("deep"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &["alpha"], 1, 100);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Crawl failed");

    assert_eq!(report.pages_processed, 2);
    assert!(crawler.state().frontier().is_empty());
}

#[tokio::test]
async fn test_crawl_with_page_limit() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/p1">1</a><a href="/p2">2</a><a href="/p3">3</a><a href="/p4">4</a>"#,
    )
    .await;
    mount_page(&mock_server, "/p1", "<p>alpha</p>").await;
    mount_page(&mock_server, "/p2", "<p>alpha</p>").await;

    for page in ["/p3", "/p4"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html("<p>alpha</p>"))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(&mock_server.uri(), &["alpha"], 2, 3);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Crawl failed");

    assert_eq!(report.pages_processed, 3);
    assert_eq!(report.matches_saved, 2);
}

#[tokio::test]
async fn test_urls_are_visited_once() {
    let mock_server = MockServer::start().await;

    // Fetched once for text and once for links
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r##"<a href="/a">a</a><a href="/a/">a slash</a><a href="/a#top">a frag</a><a href="/a?x=1">a query</a>"##,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html(r#"<p>alpha</p><a href="/">home</a>"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &["alpha"], 3, 100);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Crawl failed");

    assert_eq!(report.pages_processed, 2);
    assert_eq!(report.matches_saved, 1);
    assert_eq!(crawler.state().visited_count(), 2);
}

#[tokio::test]
async fn test_failed_fetch_is_not_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/missing">gone</a><a href="/ok">ok</a>"#).await;

    // An HTML URL is requested once for text and once for links
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/ok", "<p>alpha</p>").await;

    let config = create_test_config(&base_url, &["alpha"], 2, 100);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Crawl failed");

    assert_eq!(report.pages_processed, 3);
    assert!(crawler.state().is_visited(&format!("{}/missing", base_url)));
    assert_eq!(
        crawler.sink().records(),
        &[record(format!("{}/ok", base_url), ContentType::Html, "alpha", 1)]
    );
}

#[tokio::test]
async fn test_single_page_mode() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<p>Alpha Beta alpha</p><a href="/next">next</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/next"))
        .respond_with(html("<p>alpha</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&base_url, &["alpha", "beta", "gamma"], 2, 100);
    config.single_page = true;

    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler.run(pending::<()>()).await.expect("Scan failed");

    assert_eq!(report.pages_processed, 1);
    assert_eq!(crawler.state().visited_count(), 1);
    assert_eq!(
        crawler.sink().records(),
        &[
            record(format!("{}/", base_url), ContentType::Html, "alpha", 2),
            record(format!("{}/", base_url), ContentType::Html, "beta", 1),
        ]
    );
}

#[tokio::test]
async fn test_interrupt_keeps_written_matches() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", r#"<p>alpha</p><a href="/slow">slow</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<p>alpha</p>").set_delay(Duration::from_secs(30)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &["alpha"], 2, 100);
    let mut crawler = Crawler::new(&config, MemorySink::new()).expect("Failed to create crawler");
    let report = crawler
        .run(tokio::time::sleep(Duration::from_millis(500)))
        .await
        .expect("Crawl failed");

    assert!(report.interrupted);
    assert_eq!(report.matches_saved, 1);
    assert_eq!(crawler.sink().records().len(), 1);
}

#[tokio::test]
async fn test_scan_writes_csv_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<p>Alpha beta</p><a href="/b">b</a>"#).await;
    mount_page(&mock_server, "/b", "<p>alpha alpha</p>").await;

    let output_dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(&base_url, &["alpha", "beta"], 2, 100);
    config.output.directory = output_dir.path().join("csv").to_string_lossy().into_owned();

    let report = scan(&config, pending::<()>()).await.expect("Scan failed");
    assert_eq!(report.matches_saved, 3);

    let output_path = report.output_path.expect("Missing output path");
    let file_name = output_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("127_0_0_1_"));
    assert!(file_name.contains("_results_"));
    assert!(file_name.ends_with(".csv"));

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        content,
        format!(
            "URL,Type,Keyword,Occurrences\n\
             {base}/,HTML,alpha,1\n\
             {base}/,HTML,beta,1\n\
             {base}/b,HTML,alpha,2\n",
            base = base_url
        )
    );
}

#[tokio::test]
async fn test_scan_without_matches_creates_no_file() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "<p>nothing to see</p>").await;

    let output_dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(&mock_server.uri(), &["alpha"], 2, 100);
    config.output.directory = output_dir.path().to_string_lossy().into_owned();

    let report = scan(&config, pending::<()>()).await.expect("Scan failed");

    assert_eq!(report.matches_saved, 0);
    assert!(!report.output_path.unwrap().exists());
}
