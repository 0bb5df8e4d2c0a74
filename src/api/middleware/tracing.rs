//! HTTP request/response tracing middleware.

use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO`-level span per request (method, URI, HTTP version) and
/// logs the response status with latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/users version=HTTP/1.1}: Processing request
/// INFO request{method=POST uri=/users version=HTTP/1.1}: Response 201 Created in 2ms
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
