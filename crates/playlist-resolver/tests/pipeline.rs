//! End-to-end tests for the playlist pipeline against mock servers.

use async_trait::async_trait;
use chrono::NaiveDate;
use playlist_resolver::{FetchError, PageResolver, Pipeline, PipelineConfig, PipelineError};
use std::{collections::HashMap, time::Duration};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer, output_path: std::path::PathBuf) -> PipelineConfig {
    PipelineConfig {
        source_url: format!("{}/links.m3u", server.uri()),
        output_path,
        request_delay: Duration::ZERO,
        resolve_timeout: Duration::from_secs(2),
        ..PipelineConfig::default()
    }
}

async fn mount_page(server: &MockServer, page: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_run_writes_resolved_entries() {
    let server = MockServer::start().await;
    let base = server.uri();

    let source = format!(
        "#EXTM3U\n\
         #EXTINF:-1 tvg-id=\"ten1\",Sony Ten 1\n\
         {base}/ten1.php\n\
         #EXTINF:-1,Sony Max\n\
         {base}/max.php\n\
         {base}/gone.php\n\
         {base}/bare.php\n"
    );
    mount_page(&server, "/links.m3u", 200, &source).await;
    mount_page(
        &server,
        "/ten1.php",
        200,
        r#"<script>const channelData = {"m3u8":"https://cdn/ten1.m3u8"};</script>"#,
    )
    .await;
    mount_page(
        &server,
        "/max.php",
        200,
        r#"<script>load({"m3u8":"https:\/\/cdn\/max.m3u8"})</script>"#,
    )
    .await;
    mount_page(&server, "/gone.php", 404, "not found").await;
    mount_page(
        &server,
        "/bare.php",
        200,
        r#"const channelData = {"m3u8":"https://cdn/bare.m3u8"};"#,
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("streams.m3u");
    let pipeline =
        Pipeline::with_client(test_config(&server, output_path.clone()), reqwest::Client::new())
            .unwrap();

    let summary = pipeline.run().await.unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.resolved, 3);
    assert_eq!(summary.output_path, output_path);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("#EXTM3U\n"));
    assert!(written.contains("# Last Updated: "));
    assert!(!written.contains("gone.php"));
    assert!(!written.ends_with('\n'));

    let body: Vec<&str> = written
        .lines()
        .skip_while(|l| !l.starts_with("#EXTINF"))
        .collect();
    assert_eq!(
        body,
        vec![
            "#EXTINF:-1 tvg-id=\"ten1\",Sony Ten 1",
            "https://cdn/ten1.m3u8",
            "#EXTINF:-1,Sony Max",
            "https://cdn/max.m3u8",
            "#EXTINF:-1,Channel 4",
            "https://cdn/bare.m3u8",
        ]
    );
}

#[tokio::test]
async fn test_source_failure_writes_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, "/links.m3u", 500, "").await;

    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("streams.m3u");
    let pipeline =
        Pipeline::with_client(test_config(&server, output_path.clone()), reqwest::Client::new())
            .unwrap();

    let err = pipeline.run().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::SourceFetch(FetchError::Status { status, .. }) if status.as_u16() == 500
    ));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_write_failure() {
    let server = MockServer::start().await;
    mount_page(&server, "/links.m3u", 200, "#EXTM3U\n").await;

    let dir = tempfile::tempdir().unwrap();
    // a directory cannot be overwritten with a file
    let output_path = dir.path().to_path_buf();
    let pipeline =
        Pipeline::with_client(test_config(&server, output_path.clone()), reqwest::Client::new())
            .unwrap();

    let err = pipeline.run().await.unwrap_err();
    assert!(matches!(err, PipelineError::Write { path, .. } if path == output_path));
}

#[tokio::test]
async fn test_run_overwrites_previous_output() {
    let server = MockServer::start().await;
    mount_page(&server, "/links.m3u", 200, "#EXTM3U\n").await;

    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("streams.m3u");
    std::fs::write(&output_path, "stale content that is longer than the new playlist ".repeat(20))
        .unwrap();

    let pipeline =
        Pipeline::with_client(test_config(&server, output_path.clone()), reqwest::Client::new())
            .unwrap();
    let summary = pipeline.run().await.unwrap();
    assert_eq!(summary.total, 0);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("#EXTM3U"));
    assert!(!written.contains("stale content"));
}

/// Resolves from a fixed table without touching the network.
struct TableResolver {
    streams: HashMap<String, String>,
}

impl TableResolver {
    fn new(streams: &[(&str, &str)]) -> Self {
        Self {
            streams: streams
                .iter()
                .map(|(page, stream)| (page.to_string(), stream.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl PageResolver for TableResolver {
    async fn resolve(&self, page_url: &str) -> Option<String> {
        self.streams.get(page_url).cloned()
    }
}

const SOURCE: &str = "#EXTM3U\n\
                      #EXTINF:-1,A\nhttp://pages/a\n\
                      #EXTINF:-1,B\nhttp://pages/b\n\
                      #EXTINF:-1,C\nhttp://pages/c\n\
                      #EXTINF:-1,D\nhttp://pages/d\n";

fn offline_pipeline(request_delay: Duration) -> Pipeline {
    let config = PipelineConfig {
        request_delay,
        ..PipelineConfig::default()
    };
    Pipeline::with_client(config, reqwest::Client::new())
        .unwrap()
        .with_resolver(TableResolver::new(&[
            ("http://pages/a", "https://cdn/a.m3u8"),
            ("http://pages/c", "https://cdn/c.m3u8"),
            ("http://pages/d", "https://cdn/d.m3u8"),
        ]))
}

#[tokio::test]
async fn test_order_preserved_and_failures_dropped() {
    let pipeline = offline_pipeline(Duration::ZERO);
    let generated_at = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let processed = pipeline.process(SOURCE, &generated_at).await;
    assert_eq!(processed.total, 4);
    assert_eq!(processed.resolved, 3);

    let lines: Vec<&str> = processed
        .playlist
        .lines()
        .skip_while(|l| !l.starts_with("#EXTINF"))
        .collect();
    assert_eq!(
        lines,
        vec![
            "#EXTINF:-1,A",
            "https://cdn/a.m3u8",
            "#EXTINF:-1,C",
            "https://cdn/c.m3u8",
            "#EXTINF:-1,D",
            "https://cdn/d.m3u8",
        ]
    );
    assert!(!processed.playlist.contains("http://pages/b"));
}

#[tokio::test]
async fn test_identical_input_identical_output() {
    let pipeline = offline_pipeline(Duration::ZERO);
    let generated_at = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(20, 15, 0)
        .unwrap();

    let first = pipeline.process(SOURCE, &generated_at).await;
    let second = pipeline.process(SOURCE, &generated_at).await;
    assert_eq!(first.playlist, second.playlist);
    assert!(first.playlist.contains("# Last Updated: 2026-03-01 08:15 PM"));
}

#[tokio::test]
async fn test_pause_after_every_attempt() {
    let delay = Duration::from_millis(30);
    let pipeline = offline_pipeline(delay);
    let generated_at = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let started = std::time::Instant::now();
    pipeline.process(SOURCE, &generated_at).await;
    // four attempts, one of them failing, each followed by a pause
    assert!(started.elapsed() >= delay * 4);
}

#[tokio::test]
#[ignore]
async fn test_default_source_integration() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        output_path: dir.path().join("streams.m3u"),
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config).unwrap();
    let summary = pipeline.run().await.unwrap();
    println!("{summary:?}");
    assert!(summary.resolved <= summary.total);
}
