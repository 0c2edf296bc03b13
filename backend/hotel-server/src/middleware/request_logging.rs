use crate::middleware::client_ip;

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log `METHOD uri - IP` for every request, then the status once handled
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client = client_ip(&request);
    let start = Instant::now();

    log::info!("{} {} - {}", method, uri, client);

    let response = next.run(request).await;

    log::debug!(
        "{} {} -> {} in {}ms",
        method,
        uri.path(),
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
