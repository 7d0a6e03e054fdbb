//! Request tracing middleware.
//!
//! Wraps every request in an `api_request` span carrying method, path and a
//! request id. The id is taken from an incoming `x-request-id` header when
//! present, otherwise generated, and is echoed on the response.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    response::Response,
};
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};
use tracing::{debug, info_span, warn, Instrument, Span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        let request_id = request_id(&req);
        let span = info_span!(
            "api_request",
            http.method = %req.method(),
            http.target = %req.uri().path(),
            request_id = %request_id,
            http.status_code = tracing::field::Empty,
        );

        Box::pin(
            async move {
                let started = Instant::now();
                let mut result = inner.call(req).await;

                if let Ok(response) = &mut result {
                    let status = response.status();
                    Span::current().record("http.status_code", status.as_u16());
                    let elapsed_ms = started.elapsed().as_millis() as u64;
                    if status.is_server_error() {
                        warn!(status = status.as_u16(), elapsed_ms, "Request failed");
                    } else {
                        debug!(status = status.as_u16(), elapsed_ms, "Request completed");
                    }
                    if let Ok(value) = HeaderValue::from_str(&request_id) {
                        response.headers_mut().insert(REQUEST_ID_HEADER, value);
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Incoming `x-request-id` if it is short printable ASCII, else a fresh UUID.
fn request_id<B>(req: &Request<B>) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
