//! Remote chart sources.

use std::future::Future;
use std::time::Duration;

use bazi_core::{BaziChart, BirthInput};
use reqwest::Client;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::payload::{ChartRequest, ChartResponse};

/// Anything that can produce a chart for a birth from elsewhere.
pub trait RemoteChartSource: Send + Sync {
    fn fetch_chart(
        &self,
        input: &BirthInput,
    ) -> impl Future<Output = RemoteResult<BaziChart>> + Send;
}

/// Chart source backed by an HTTP endpoint.
///
/// Request: `POST` with a JSON [`ChartRequest`] body, i.e.
/// `{"userData": {"calendarType": "solar", "birthYear": .., "birthMonth": ..,
/// "birthDay": .., "birthHour": .., "birthMinute": .., "gender": "male",
/// "longitude": ..}}`.
///
/// Response: a 2xx status with a JSON [`ChartResponse`] body,
/// `{"chart": <BaziChart>}`, where the chart uses the same serde shape
/// `bazi_core` produces (snake_case fields, pinyin enum names). This is the
/// shape a service wrapping this engine returns. Endpoints speaking another
/// schema, such as per-pillar maps keyed by `年柱` / `ganShen`, fail to decode
/// and every call falls back to the local chart.
#[derive(Debug, Clone)]
pub struct HttpChartSource {
    endpoint: String,
    http: Client,
}

impl HttpChartSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> RemoteResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Build from config; `None` when the remote is disabled.
    pub fn from_config(config: &RemoteConfig) -> RemoteResult<Option<Self>> {
        config.validate()?;
        if !config.enabled {
            return Ok(None);
        }
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| RemoteError::Config("enabled remote needs an endpoint".into()))?;
        Self::new(endpoint, config.timeout()).map(Some)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteChartSource for HttpChartSource {
    async fn fetch_chart(&self, input: &BirthInput) -> RemoteResult<BaziChart> {
        let body = ChartRequest::from(input);
        debug!(endpoint = %self.endpoint, "requesting remote chart");

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed: ChartResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.chart)
    }
}
