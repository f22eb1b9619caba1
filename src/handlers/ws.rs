use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use crate::app::AppState;
use crate::feed::serve_feed;

pub async fn live_feed(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let source = state.metrics.clone();
    let every = state.config.feed_interval();
    ws.on_upgrade(move |socket| serve_feed(socket, source, every))
}
