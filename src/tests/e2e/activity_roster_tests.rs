// Full router scenarios: list, signup and removal against the seeded roster.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use indexmap::IndexMap;
use std::path::PathBuf;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    router(AppState::seeded(), &static_dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, json) = send(app, Request::get("/activities").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json[activity]["participants"].clone()).unwrap()
}

fn sign_up(activity: &str, email: &str) -> Request<Body> {
    Request::post(format!("/activities/{activity}/signup?email={email}"))
        .body(Body::empty())
        .unwrap()
}

fn remove(activity: &str, email: &str) -> Request<Body> {
    Request::delete(format!("/activities/{activity}/participants/{email}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn removing_james_from_basketball_empties_the_roster() {
    let app = app();

    let (status, json) = send(&app, remove("Basketball", "james@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Removed"));
    assert!(message.contains("james@mergington.edu"));

    assert!(participants(&app, "Basketball").await.is_empty());
}

#[tokio::test]
async fn remove_then_sign_up_again_keeps_a_single_entry() {
    let app = app();

    let (status, _) = send(&app, remove("Basketball", "james@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, sign_up("Basketball", "james@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);

    let roster = participants(&app, "Basketball").await;
    assert_eq!(
        roster.iter().filter(|p| *p == "james@mergington.edu").count(),
        1
    );
}

#[tokio::test]
async fn several_students_can_join_the_same_activity() {
    let app = app();
    let emails = [
        "student1@mergington.edu",
        "student2@mergington.edu",
        "student3@mergington.edu",
    ];

    for email in emails {
        let (status, _) = send(&app, sign_up("Soccer", email)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let roster = participants(&app, "Soccer").await;
    assert_eq!(
        roster,
        vec![
            "alex@mergington.edu",
            "marcus@mergington.edu",
            "student1@mergington.edu",
            "student2@mergington.edu",
            "student3@mergington.edu",
        ]
    );
}

#[tokio::test]
async fn removing_one_participant_keeps_newer_signups() {
    let app = app();
    for i in 0..3 {
        let (status, _) = send(&app, sign_up("Basketball", &format!("newplayer{i}@mergington.edu"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = send(&app, remove("Basketball", "james@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);

    let roster = participants(&app, "Basketball").await;
    assert!(!roster.contains(&"james@mergington.edu".to_string()));
    assert_eq!(roster.iter().filter(|p| p.starts_with("newplayer")).count(), 3);
}

#[tokio::test]
async fn duplicate_signup_leaves_the_count_unchanged() {
    let app = app();
    let before = participants(&app, "Art Club").await.len();

    let (status, json) = send(&app, sign_up("Art%20Club", "sarah@mergington.edu")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));

    assert_eq!(participants(&app, "Art Club").await.len(), before);
}

#[tokio::test]
async fn activities_are_listed_in_catalog_order() {
    let app = app();
    let response = app
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let roster: IndexMap<String, serde_json::Value> = serde_json::from_slice(&bytes).unwrap();

    let names: Vec<&str> = roster.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Basketball",
            "Soccer",
            "Art Club",
            "Drama Club",
            "Debate Team",
            "Science Club",
            "Chess Club",
            "Programming Class",
            "Gym Class",
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_signups_over_http_all_succeed() {
    let app = app();
    let requests: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(&app, sign_up("Programming%20Class", &format!("coder{i}@mergington.edu"))).await
            })
        })
        .collect();

    for request in requests {
        let (status, json) = request.await.unwrap();
        assert_eq!(status, StatusCode::OK, "{json}");
    }
    assert_eq!(participants(&app, "Programming Class").await.len(), 102);
}
