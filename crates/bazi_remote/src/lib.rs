//! Optional remote chart source with local fallback.
//!
//! The local engine in `bazi_core` is authoritative. A remote service may
//! be consulted first; timeouts, transport errors, bad status codes,
//! undecodable bodies and inconsistent charts all fall back to
//! [`bazi_core::compute_chart`].

pub mod config;
pub mod error;
pub mod fallback;
pub mod payload;
pub mod source;

pub use config::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, RemoteConfig};
pub use error::{RemoteError, RemoteResult};
pub use fallback::{ChartService, chart_with_fallback, try_remote_chart};
pub use payload::{ChartRequest, ChartResponse, UserData};
pub use source::{HttpChartSource, RemoteChartSource};
