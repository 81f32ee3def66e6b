//! Fallback behaviour against fake sources and a raw TCP server.

use std::time::Duration;

use bazi_core::{BaziChart, BirthInput, ChartOptions, ChartSource, Gender, compute_chart};
use bazi_remote::{
    ChartService, HttpChartSource, RemoteChartSource, RemoteConfig, RemoteError, RemoteResult,
    chart_with_fallback, try_remote_chart,
};
use bazi_tables::HeavenlyStem;
use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn input() -> BirthInput {
    BirthInput {
        birth_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        birth_hour: 12,
        birth_minute: 0,
        longitude: 120.0,
        gender: Gender::Male,
    }
}

fn local_chart() -> BaziChart {
    compute_chart(&input(), &ChartOptions::default()).unwrap()
}

const SHORT: Duration = Duration::from_millis(200);

struct Sleepy;

impl RemoteChartSource for Sleepy {
    async fn fetch_chart(&self, _input: &BirthInput) -> RemoteResult<BaziChart> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(local_chart())
    }
}

struct Failing;

impl RemoteChartSource for Failing {
    async fn fetch_chart(&self, _input: &BirthInput) -> RemoteResult<BaziChart> {
        Err(RemoteError::Status(503))
    }
}

/// Returns a fixed chart.
struct Fixed(BaziChart);

impl RemoteChartSource for Fixed {
    async fn fetch_chart(&self, _input: &BirthInput) -> RemoteResult<BaziChart> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn timeout_falls_back_to_local() {
    let err = try_remote_chart(&Sleepy, &input(), SHORT).await.unwrap_err();
    assert!(matches!(err, RemoteError::Timeout(d) if d == SHORT));

    let chart = chart_with_fallback(Some(&Sleepy), &input(), &ChartOptions::default(), SHORT)
        .await
        .unwrap();
    assert_eq!(chart, local_chart());
    assert_eq!(chart.source, ChartSource::Local);
}

#[tokio::test]
async fn error_falls_back_to_local() {
    let chart = chart_with_fallback(Some(&Failing), &input(), &ChartOptions::default(), SHORT)
        .await
        .unwrap();
    assert_eq!(chart, local_chart());
}

#[tokio::test]
async fn inconsistent_remote_chart_is_rejected() {
    let mut tampered = local_chart();
    tampered.pillars.day.stem = HeavenlyStem::Yi;
    let source = Fixed(tampered);

    let err = try_remote_chart(&source, &input(), SHORT).await.unwrap_err();
    assert!(matches!(err, RemoteError::Inconsistent(_)), "{err}");

    let chart = chart_with_fallback(Some(&source), &input(), &ChartOptions::default(), SHORT)
        .await
        .unwrap();
    assert_eq!(chart, local_chart());
}

#[tokio::test]
async fn good_remote_chart_is_used_as_is() {
    // A different birth, so the result is distinguishable from the local one.
    let other = BirthInput {
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        gender: Gender::Female,
        ..input()
    };
    let remote = compute_chart(&other, &ChartOptions::default()).unwrap();
    let source = Fixed(remote.clone());

    let chart = chart_with_fallback(Some(&source), &input(), &ChartOptions::default(), SHORT)
        .await
        .unwrap();
    assert_eq!(chart.source, ChartSource::Remote);
    assert_eq!(chart.pillars, remote.pillars);
    assert_eq!(chart.gender, Gender::Female);
}

#[tokio::test]
async fn invalid_input_fails_before_remote() {
    let bad = BirthInput {
        birth_hour: 25,
        ..input()
    };
    let source = Fixed(local_chart());
    let err = chart_with_fallback(Some(&source), &bad, &ChartOptions::default(), SHORT)
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("birth_hour"));
}

#[tokio::test]
async fn unsupported_year_fails_before_remote() {
    let early = BirthInput {
        birth_date: NaiveDate::from_ymd_opt(1850, 1, 1).unwrap(),
        ..input()
    };
    let source = Fixed(local_chart());
    let local = compute_chart(&early, &ChartOptions::default()).unwrap_err();
    let remote = chart_with_fallback(Some(&source), &early, &ChartOptions::default(), SHORT)
        .await
        .unwrap_err();
    assert_eq!(remote.field(), Some("birth_date"));
    assert_eq!(remote, local);
}

#[tokio::test]
async fn bad_zone_offset_fails_before_remote() {
    let options = ChartOptions {
        utc_offset_minutes: 100_000,
        ..ChartOptions::default()
    };
    let source = Fixed(local_chart());
    let err = chart_with_fallback(Some(&source), &input(), &options, SHORT)
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("utc_offset_minutes"));
}

#[tokio::test]
async fn disabled_config_never_contacts_remote() {
    let config = RemoteConfig {
        enabled: false,
        endpoint: Some("http://127.0.0.1:9/unused".into()),
        timeout_secs: 1,
    };
    let service = ChartService::from_config(&config, ChartOptions::default()).unwrap();
    assert!(!service.has_remote());
    assert_eq!(service.chart(&input()).await.unwrap(), local_chart());
}

#[test]
fn enabled_config_without_endpoint_is_rejected() {
    let config = RemoteConfig {
        enabled: true,
        ..RemoteConfig::default()
    };
    assert!(matches!(
        HttpChartSource::from_config(&config),
        Err(RemoteError::Config(_))
    ));
}

// --- raw TCP server -------------------------------------------------------

/// Read one HTTP request and return its body.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let len = text[..head_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + len {
                return text[head_end + 4..head_end + 4 + len].to_string();
            }
        }
    }
    String::new()
}

/// Serve one request with `status` and `body`; returns the endpoint URL and
/// a handle yielding the request body.
async fn serve_once(
    status: &'static str,
    body: String,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/bazi", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });
    (url, handle)
}

#[tokio::test]
async fn http_source_posts_user_data_and_decodes_chart() {
    let body = serde_json::json!({ "chart": local_chart() }).to_string();
    let (url, server) = serve_once("200 OK", body).await;
    let source = HttpChartSource::new(url, Duration::from_secs(5)).unwrap();

    let chart = try_remote_chart(&source, &input(), Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(chart.source, ChartSource::Remote);
    assert_eq!(chart.pillars, local_chart().pillars);

    let request: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
    assert_eq!(request["userData"]["birthYear"], 2024);
    assert_eq!(request["userData"]["calendarType"], "solar");
}

#[tokio::test]
async fn http_error_status_falls_back() {
    let (url, _server) = serve_once("500 Internal Server Error", "{}".into()).await;
    let source = HttpChartSource::new(url, Duration::from_secs(5)).unwrap();

    let err = try_remote_chart(&source, &input(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Status(500)), "{err}");
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let (url, _server) = serve_once("200 OK", r#"{"chart":{"pillars":42}}"#.into()).await;
    let source = HttpChartSource::new(url, Duration::from_secs(5)).unwrap();

    let chart = chart_with_fallback(Some(&source), &input(), &ChartOptions::default(), SHORT * 10)
        .await
        .unwrap();
    assert_eq!(chart, local_chart());
}

#[tokio::test]
async fn other_chart_schema_falls_back() {
    let body = serde_json::json!({
        "年柱": { "天干": "甲", "地支": "辰" },
        "ganShen": ["比肩", "食神", "日主", "七杀"],
    })
    .to_string();
    let (url, _server) = serve_once("200 OK", body).await;
    let source = HttpChartSource::new(url, Duration::from_secs(5)).unwrap();

    let err = try_remote_chart(&source, &input(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Payload(_)), "{err}");
}

#[tokio::test]
async fn silent_server_falls_back_within_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/bazi", listener.local_addr().unwrap());
    // Accept and hold connections without ever answering.
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let source = HttpChartSource::new(url, Duration::from_secs(30)).unwrap();
    let service = ChartService::with_source(source, ChartOptions::default(), SHORT);

    let started = std::time::Instant::now();
    let chart = service.chart(&input()).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(chart, local_chart());
    assert_eq!(chart.source, ChartSource::Local);
}
