use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::config::Config;

/// Governor keyed on the peer address; needs `ConnectInfo<SocketAddr>`.
pub type GlobalGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Per-IP rate limiting, refilled one token every `rate_limit_per_ms`
/// milliseconds up to `rate_limit_burst`. `None` if the numbers are unusable.
pub fn create_global_governor(config: &Config) -> Option<GlobalGovernorLayer> {
    GovernorConfigBuilder::default()
        .per_millisecond(config.rate_limit_per_ms)
        .burst_size(config.rate_limit_burst)
        .finish()
        .map(|governor_config| GovernorLayer::new(Arc::new(governor_config)))
}

/// One line per request with the client address, outcome and latency.
/// Client and server errors log at `warn`.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_success() || response.status().is_redirection() {
        tracing::debug!(client_ip = %addr.ip(), %method, %path, status, elapsed_ms, "request served");
    } else {
        tracing::warn!(client_ip = %addr.ip(), %method, %path, status, elapsed_ms, "request rejected");
    }

    response
}
