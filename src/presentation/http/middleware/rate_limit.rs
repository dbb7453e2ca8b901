// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 30;

type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter shared by every router built in this process.
/// `None` when the quota is rejected by the builder.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<RateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let layer = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .map(GovernorLayer::new);
            if layer.is_none() {
                tracing::error!("invalid rate limit quota, limiter disabled");
            }
            layer
        })
        .clone()
}
