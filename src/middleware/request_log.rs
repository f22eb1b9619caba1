use std::time::Instant;
use axum::{
    middleware::Next,
    response::Response,
    extract::Request,
    body::Body,
};

pub async fn log_requests(
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = started.elapsed();
    if status.is_server_error() {
        tracing::warn!("{} {} -> {} in {:?}", method, path, status, elapsed);
    } else {
        tracing::info!("{} {} -> {} in {:?}", method, path, status, elapsed);
    }

    response
}
