//! Prometheus metrics for the social API.
//!
//! Exposes social-event collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Social write events (follow, unfollow, post_created, post_updated,
    /// post_deleted, comment_created, comment_updated, comment_deleted,
    /// like, unlike).
    pub static ref SOCIAL_EVENTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "social_events_total",
        "Social write events segmented by kind",
        &["event"]
    )
    .expect("failed to register social_events_total");

    /// Notification fan-out outcomes (emitted, suppressed).
    pub static ref NOTIFICATION_FANOUT_TOTAL: IntCounterVec = register_int_counter_vec!(
        "notification_fanout_total",
        "Notification fan-out outcomes segmented by result",
        &["result"]
    )
    .expect("failed to register notification_fanout_total");

    /// Feed page assembly duration.
    pub static ref FEED_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "feed_request_duration_seconds",
        "Feed request duration segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register feed_request_duration_seconds");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

/// Convenience wrappers so call sites stay one line.
pub mod helpers {
    use super::*;

    pub fn record_social_event(event: &str) {
        SOCIAL_EVENTS_TOTAL.with_label_values(&[event]).inc();
    }

    pub fn record_fanout(result: &str) {
        NOTIFICATION_FANOUT_TOTAL.with_label_values(&[result]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_register_once() {
        helpers::record_social_event("follow");
        helpers::record_social_event("follow");
        helpers::record_fanout("suppressed");

        assert!(SOCIAL_EVENTS_TOTAL.with_label_values(&["follow"]).get() >= 2);
    }
}
