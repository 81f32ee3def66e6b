//! Remote first, local always.
//!
//! The remote source gets one attempt bounded by a timeout. Its chart is
//! used only if it decodes and passes [`BaziChart::verify`]; any other
//! outcome is logged and the chart is computed locally.

use std::time::Duration;

use bazi_core::{
    BaziChart, BaziError, BirthInput, ChartOptions, ChartSource, compute_chart, validate_birth,
};
use tracing::{info, warn};

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::source::{HttpChartSource, RemoteChartSource};

/// One bounded attempt at a remote chart, tagged [`ChartSource::Remote`].
pub async fn try_remote_chart<S: RemoteChartSource>(
    source: &S,
    input: &BirthInput,
    timeout: Duration,
) -> RemoteResult<BaziChart> {
    let chart = tokio::time::timeout(timeout, source.fetch_chart(input))
        .await
        .map_err(|_| RemoteError::Timeout(timeout))??;
    chart.verify().map_err(RemoteError::Inconsistent)?;
    Ok(BaziChart {
        source: ChartSource::Remote,
        ..chart
    })
}

/// Remote chart if `source` yields a usable one, otherwise the local chart.
///
/// Input is validated before the remote is contacted, so a bad input fails
/// the same way with or without a remote.
pub async fn chart_with_fallback<S: RemoteChartSource>(
    source: Option<&S>,
    input: &BirthInput,
    options: &ChartOptions,
    timeout: Duration,
) -> Result<BaziChart, BaziError> {
    validate_birth(input, options)?;

    if let Some(source) = source {
        match try_remote_chart(source, input, timeout).await {
            Ok(chart) => {
                info!("using remote chart");
                return Ok(chart);
            }
            Err(e) => warn!(error = %e, "remote chart unavailable, computing locally"),
        }
    }

    compute_chart(input, options)
}

/// Chart options plus an optional remote source.
#[derive(Debug, Clone)]
pub struct ChartService<S = HttpChartSource> {
    source: Option<S>,
    options: ChartOptions,
    timeout: Duration,
}

impl ChartService<HttpChartSource> {
    pub fn from_config(remote: &RemoteConfig, options: ChartOptions) -> RemoteResult<Self> {
        Ok(Self {
            source: HttpChartSource::from_config(remote)?,
            options,
            timeout: remote.timeout(),
        })
    }
}

impl<S: RemoteChartSource> ChartService<S> {
    /// Service that never contacts a remote.
    pub fn local(options: ChartOptions) -> Self {
        Self {
            source: None,
            options,
            timeout: Duration::ZERO,
        }
    }

    pub fn with_source(source: S, options: ChartOptions, timeout: Duration) -> Self {
        Self {
            source: Some(source),
            options,
            timeout,
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn has_remote(&self) -> bool {
        self.source.is_some()
    }

    pub async fn chart(&self, input: &BirthInput) -> Result<BaziChart, BaziError> {
        chart_with_fallback(self.source.as_ref(), input, &self.options, self.timeout).await
    }
}
