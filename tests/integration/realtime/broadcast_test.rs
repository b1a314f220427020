//! Live-update fan-out through the HTTP handlers
//!
//! These tests subscribe directly on the registry, so they run without a
//! socket.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

use forum_live::backend::realtime::LiveRegistry;
use forum_live::shared::{LiveEvent, CONNECTED_MESSAGE};

use crate::common::TestApp;

async fn next_event(receiver: &mut UnboundedReceiver<String>) -> Value {
    let frame = timeout(Duration::from_secs(1), receiver.recv())
        .await
        .expect("timed out waiting for event")
        .expect("outbox closed");
    serde_json::from_str(&frame).unwrap()
}

#[tokio::test]
async fn test_connected_ack_goes_to_new_subscriber_only() {
    let registry = LiveRegistry::new();
    let mut first = registry.subscribe();
    let ack = next_event(&mut first.receiver).await;
    assert_eq!(
        ack,
        json!({ "type": "CONNECTED", "payload": { "message": CONNECTED_MESSAGE } })
    );

    let _second = registry.subscribe();
    assert!(first.receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_broadcast_without_subscribers() {
    let registry = LiveRegistry::new();
    assert_eq!(registry.broadcast(&LiveEvent::connected()), 0);
}

#[tokio::test]
async fn test_unregistered_subscriber_misses_event() {
    let registry = LiveRegistry::new();
    let mut subscriptions: Vec<_> = (0..3).map(|_| registry.subscribe()).collect();
    for subscription in subscriptions.iter_mut() {
        next_event(&mut subscription.receiver).await;
    }

    assert!(registry.unregister(subscriptions[1].id));
    assert_eq!(registry.broadcast(&LiveEvent::connected()), 2);

    assert!(subscriptions[0].receiver.try_recv().is_ok());
    assert!(subscriptions[1].receiver.try_recv().is_err());
    assert!(subscriptions[2].receiver.try_recv().is_ok());
}

#[tokio::test]
async fn test_every_mutation_is_broadcast() {
    let app = TestApp::new();
    let mut subscription = app.state.live.subscribe();
    next_event(&mut subscription.receiver).await;

    let question = app.create_question("Live?", "Yes", Some("ws")).await;
    let event = next_event(&mut subscription.receiver).await;
    assert_eq!(event["type"], "NEW_QUESTION");
    assert_eq!(event["payload"]["id"], question);
    assert_eq!(event["payload"]["tags"], "ws");

    let answer = app.create_answer(question, "Indeed").await;
    let event = next_event(&mut subscription.receiver).await;
    assert_eq!(event["type"], "NEW_ANSWER");
    assert_eq!(event["payload"]["questionId"], question);
    assert_eq!(event["payload"]["answer"]["id"], answer);
    assert_eq!(event["payload"]["answer"]["answer_text"], "Indeed");

    app.put(&format!("/api/answers/{}/reaction", answer)).await;
    let event = next_event(&mut subscription.receiver).await;
    assert_eq!(event["type"], "LIKE_ANSWER");
    assert_eq!(event["payload"]["id"], answer);
    assert_eq!(event["payload"]["likes"], 1);
}

#[tokio::test]
async fn test_failed_and_quiet_operations_do_not_broadcast() {
    let app = TestApp::new();
    let question = app.create_question("Q", "D", None).await;
    let answer = app.create_answer(question, "A").await;

    let mut subscription = app.state.live.subscribe();
    next_event(&mut subscription.receiver).await;

    app.post("/api/questions", json!({ "title": "", "description": "" })).await;
    app.post("/api/questions/404/answers", json!({ "answer_text": "orphan" })).await;
    app.put("/api/answers/404/reaction").await;
    app.delete(&format!("/api/answers/{}", answer)).await;
    app.get("/api/questions").await;

    assert!(subscription.receiver.try_recv().is_err());
}
