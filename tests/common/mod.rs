//! In-process stand-in for the ranking service, shared by the integration tests
#![allow(dead_code)]

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use resume_client::web::ResultsArea;
use resume_client::{ClientConfig, SubmissionClient};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedPart {
    pub field: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct StubService {
    pub upload_calls: AtomicUsize,
    pub match_calls: AtomicUsize,
    pub uploaded: Mutex<Vec<UploadedPart>>,
    pub match_bodies: Mutex<Vec<Value>>,
    pub replies: Mutex<HashMap<String, Value>>,
    pub fail_next: AtomicBool,
    upload_reply: Mutex<Option<(StatusCode, String)>>,
}

impl StubService {
    pub fn reply_to(&self, description: &str, reply: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(description.to_string(), reply);
    }

    /// Answer the next upload with this status and raw body.
    pub fn next_upload_reply(&self, status: StatusCode, body: &str) {
        *self.upload_reply.lock().unwrap() = Some((status, body.to_string()));
    }
}

async fn upload(State(stub): State<Arc<StubService>>, mut multipart: Multipart) -> Response {
    stub.upload_calls.fetch_add(1, Ordering::SeqCst);

    while let Some(field) = multipart.next_field().await.unwrap() {
        let part = UploadedPart {
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            bytes: field.bytes().await.unwrap().to_vec(),
        };
        stub.uploaded.lock().unwrap().push(part);
    }

    if stub.fail_next.swap(false, Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    if let Some((status, body)) = stub.upload_reply.lock().unwrap().take() {
        return (status, body).into_response();
    }

    Json(json!({
        "message": "File uploaded successfully!",
        "name": "Jane Roe",
        "email": "jane@example.com"
    }))
    .into_response()
}

async fn match_candidates(
    State(stub): State<Arc<StubService>>,
    Json(body): Json<Value>,
) -> Response {
    stub.match_calls.fetch_add(1, Ordering::SeqCst);
    let description = body["job_description"].as_str().unwrap_or_default().to_string();
    stub.match_bodies.lock().unwrap().push(body);

    if description.starts_with("slow") {
        tokio::time::sleep(Duration::from_millis(400)).await;
    }

    if stub.fail_next.swap(false, Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "ranker crashed").into_response();
    }

    if description == "malformed" {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let reply = stub
        .replies
        .lock()
        .unwrap()
        .get(&description)
        .cloned()
        .unwrap_or_else(|| json!({ "candidates": [] }));
    Json(reply).into_response()
}

pub async fn spawn_stub() -> (Arc<StubService>, String) {
    let stub = Arc::new(StubService::default());
    let app = Router::new()
        .route("/upload", post(upload))
        .route("/match", post(match_candidates))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (stub, format!("http://{}", addr))
}

pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> SubmissionClient {
    let config = ClientConfig::new(base_url).unwrap().with_timeout(5);
    SubmissionClient::from_config(&config).unwrap()
}

pub fn single_candidate(name: &str, skills: Value, score: f64) -> Value {
    json!({
        "candidates": [{
            "Name": name,
            "Email": "a@x.com",
            "Phone": "123",
            "Skills": skills,
            "Match Score": score
        }]
    })
}

pub fn rendered_names(area: &ResultsArea) -> Vec<String> {
    match area {
        ResultsArea::Rendered(list) => list.blocks.iter().map(|b| b.name.clone()).collect(),
        other => panic!("expected rendered results, got {:?}", other),
    }
}
