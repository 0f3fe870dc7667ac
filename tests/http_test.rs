use reqwest::StatusCode;
use roster::http::{self, AppState};
use roster::lifecycle::RosterSystem;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves a fresh system on an ephemeral port and returns its base URL.
async fn spawn_app() -> String {
    let system = RosterSystem::new(16);
    let state = AppState::new(&system);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(http::serve(listener, state, std::future::pending()));
    format!("http://{addr}")
}

#[tokio::test]
async fn test_student_crud() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/students/"))
        .json(&json!({ "name": "Ana", "age": 12, "grade": "7" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created, json!({ "id": 1, "name": "Ana", "age": 12, "grade": "7" }));

    let response = client
        .put(format!("{base}/students/1"))
        .json(&json!({ "grade": "8" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["grade"], "8");
    assert_eq!(updated["name"], "Ana");

    let listed: Value = client
        .get(format!("{base}/students/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([updated.clone()]));

    let response = client
        .delete(format!("{base}/students/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = response.json().await.unwrap();
    assert_eq!(deleted, updated);

    let response = client.get(format!("{base}/students/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Student not found" }));
}

#[tokio::test]
async fn test_teacher_not_found_on_every_id_route() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let responses = [
        client.get(format!("{base}/teachers/3")).send().await.unwrap(),
        client
            .put(format!("{base}/teachers/3"))
            .json(&json!({ "subject": "Art" }))
            .send()
            .await
            .unwrap(),
        client.delete(format!("{base}/teachers/3")).send().await.unwrap(),
    ];
    for response in responses {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "detail": "Teacher not found" }));
    }
}

#[tokio::test]
async fn test_teacher_create_rejects_incomplete_body() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/teachers/"))
        .json(&json!({ "name": "Bo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = client
        .post(format!("{base}/teachers/"))
        .json(&json!({ "name": "Bo", "subject": "Math", "experience": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_agent_command_replies() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let run = |prompt: &str| {
        client
            .post(format!("{base}/agent/command"))
            .json(&json!({ "prompt": prompt }))
            .send()
    };

    let response = run("add user Ana, 20, F, ana@x.com").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!("Added Ana successfully."));

    let reply: Value = run("get user 1").await.unwrap().json().await.unwrap();
    assert_eq!(
        reply,
        json!({ "id": 1, "name": "Ana", "age": 20, "gender": "f", "email": "ana@x.com" })
    );

    let reply: Value = run("get user 2").await.unwrap().json().await.unwrap();
    assert_eq!(reply, json!({ "message": "User 2 not found." }));

    let reply: Value = run("list users").await.unwrap().json().await.unwrap();
    assert_eq!(reply.as_array().map(Vec::len), Some(1));

    let response = run("do a backflip").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!("Command not recognized."));
}
