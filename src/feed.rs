use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use axum::extract::ws::{Message, WebSocket};
use futures::{Sink, SinkExt, StreamExt};
use tokio::time::MissedTickBehavior;
use crate::errors::{FeedError, FeedResult};
use crate::models::FeedEvent;
use crate::services::MetricsSource;

/// Pushes a `stats_update` event right away and then once per `every`.
///
/// Only returns when the sink refuses a message or an event cannot be encoded.
pub async fn push_metrics<S>(
    sink: &mut S,
    source: &dyn MetricsSource,
    every: Duration,
) -> FeedResult<()>
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    let mut ticker = tokio::time::interval(every.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let event = FeedEvent::stats_update(source.sample());
        let text = serde_json::to_string(&event)?;

        sink.send(Message::Text(text))
            .await
            .map_err(|e| FeedError::Send(e.to_string()))?;

        tracing::trace!("Pushed feed event: {:?}", event.data);
    }
}

// One session per connected client; ends on close, disconnect or send failure.
pub async fn serve_feed(socket: WebSocket, source: Arc<dyn MetricsSource>, every: Duration) {
    tracing::info!("Live feed client connected");

    let (mut sender, mut receiver) = socket.split();

    let inbound = async {
        while let Some(message) = receiver.next().await {
            match message {
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Live feed read error: {}", e);
                    break;
                }
            }
        }
    };

    tokio::select! {
        result = push_metrics(&mut sender, source.as_ref(), every) => {
            if let Err(e) = result {
                tracing::warn!("Live feed stopped: {}", e);
            }
        }
        _ = inbound => {
            tracing::debug!("Live feed client closed the connection");
        }
    }

    if let Err(e) = sender.close().await {
        tracing::debug!("Live feed close failed: {}", e);
    }
    tracing::info!("Live feed client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use tokio::time::timeout;
    use crate::services::RandomMetrics;

    fn parse(message: Message) -> serde_json::Value {
        match message {
            Message::Text(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_first_event_is_immediate() {
        let (tx, mut rx) = mpsc::channel::<Message>(4);
        let source = Arc::new(RandomMetrics::seeded(1));

        let handle = tokio::spawn(async move {
            let mut tx = tx;
            push_metrics(&mut tx, source.as_ref(), Duration::from_secs(60)).await
        });

        let first = timeout(Duration::from_secs(2), rx.next())
            .await
            .expect("no event inside the interval window")
            .unwrap();
        let json = parse(first);
        assert_eq!(json["type"], "stats_update");

        handle.abort();
    }

    #[tokio::test]
    async fn test_events_in_range_and_stop_on_disconnect() {
        let (tx, mut rx) = mpsc::channel::<Message>(4);
        let source = Arc::new(RandomMetrics::seeded(99));

        let handle = tokio::spawn(async move {
            let mut tx = tx;
            push_metrics(&mut tx, source.as_ref(), Duration::from_millis(10)).await
        });

        for _ in 0..3 {
            let message = timeout(Duration::from_secs(2), rx.next()).await.unwrap().unwrap();
            let data = &parse(message)["data"];

            let cpu = data["cpu"].as_u64().unwrap();
            let memory = data["memory"].as_u64().unwrap();
            let disk = data["disk"].as_u64().unwrap();
            assert!((20..=40).contains(&cpu));
            assert!((60..=80).contains(&memory));
            assert!((75..=90).contains(&disk));
            assert!(data["network"].as_str().unwrap().ends_with("M/s"));
        }

        drop(rx);

        let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
        assert!(matches!(result, Err(FeedError::Send(_))));
    }
}
