//! Answer endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_error_body;
use crate::common::TestApp;

#[tokio::test]
async fn test_create_and_list_answers() {
    let app = TestApp::new();
    let question = app.create_question("Q", "D", None).await;
    let other = app.create_question("Other", "D", None).await;

    let first = app.create_answer(question, "first").await;
    let second = app.create_answer(question, "second").await;
    app.create_answer(other, "elsewhere").await;

    let (status, body) = app.get(&format!("/api/questions/{}/answers", question)).await;
    assert_eq!(status, StatusCode::OK);

    let answers = body.as_array().unwrap();
    let ids: Vec<i64> = answers.iter().map(|a| a["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![second, first]);
    assert!(answers.iter().all(|a| a["question_id"] == question));
    assert!(answers.iter().all(|a| a["likes"] == 0));
}

#[tokio::test]
async fn test_answers_for_unknown_question_is_empty() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/questions/55/answers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_answer_errors() {
    let app = TestApp::new();
    let question = app.create_question("Q", "D", None).await;

    let (status, body) = app
        .post("/api/questions/999/answers", json!({ "answer_text": "orphan" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404);

    let (status, _) = app
        .post("/api/questions/nope/answers", json!({ "answer_text": "x" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(&format!("/api/questions/{}/answers", question), json!({ "answer_text": " " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(&format!("/api/questions/{}/answers", question), json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sequential_likes_accumulate() {
    let app = TestApp::new();
    let question = app.create_question("Q", "D", None).await;
    let answer = app.create_answer(question, "likeable").await;

    for expected in 1..=5 {
        let (status, body) = app.put(&format!("/api/answers/{}/reaction", answer)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["likes"], expected);
    }

    let (_, body) = app.get(&format!("/api/questions/{}/answers", question)).await;
    assert_eq!(body[0]["likes"], 5);
}

#[tokio::test]
async fn test_concurrent_likes_sum() {
    let app = TestApp::new();
    let question = app.create_question("Q", "D", None).await;
    let answer = app.create_answer(question, "popular").await;

    let uri = format!("/api/answers/{}/reaction", answer);
    let mut handles = Vec::new();
    for _ in 0..20 {
        let router = app.router.clone();
        let uri = uri.clone();
        handles.push(tokio::spawn(async move {
            use tower::ServiceExt;
            let request = axum::http::Request::put(uri)
                .body(axum::body::Body::empty())
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            successes += 1;
        }
    }

    let (_, body) = app.get(&format!("/api/questions/{}/answers", question)).await;
    assert_eq!(body[0]["likes"], successes);
    assert_eq!(successes, 20);
}

#[tokio::test]
async fn test_like_errors() {
    let app = TestApp::new();

    let (status, body) = app.put("/api/answers/12/reaction").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404);

    let (status, body) = app.put("/api/answers/twelve/reaction").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid answer ID");
}

#[tokio::test]
async fn test_delete_answer() {
    let app = TestApp::new();
    let question = app.create_question("Q", "D", None).await;
    let answer = app.create_answer(question, "short-lived").await;

    let (status, body) = app.delete(&format!("/api/answers/{}", answer)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, body) = app.get(&format!("/api/questions/{}/answers", question)).await;
    assert_eq!(body, json!([]));

    let (status, _) = app.delete(&format!("/api/answers/{}", answer)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_answer() {
    let app = TestApp::new();
    let (status, body) = app.delete("/api/answers/31337").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404);
}

#[tokio::test]
async fn test_missing_question_wins_over_invalid_body() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/questions/999/answers", json!({ "answer_text": "" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Question not found");

    let request = axum::http::Request::post("/api/questions/999/answers")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("not json"))
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
