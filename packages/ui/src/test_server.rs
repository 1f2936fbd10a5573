//! In-process backend for tests: answers like the booking API and records
//! what it was sent.

use std::sync::{Arc, Mutex};

use api::ApiClient;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Login always issues this token.
pub const TOKEN: &str = "abc";
/// Rejected with 401 on every authenticated route.
pub const STALE_TOKEN: &str = "stale";
/// Answered with 500 on every authenticated route.
pub const BROKEN_TOKEN: &str = "broken";

#[derive(Clone, Default)]
pub struct Recorded {
    authorization: Arc<Mutex<Vec<Option<String>>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
    fn note(&self, headers: &HeaderMap, body: Option<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.authorization.lock().unwrap().push(auth);
        if let Some(body) = body {
            self.bodies.lock().unwrap().push(body);
        }
    }

    pub fn requests(&self) -> usize {
        self.authorization.lock().unwrap().len()
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.authorization.lock().unwrap().last().cloned().flatten()
    }

    pub fn last_body(&self) -> Value {
        self.bodies.lock().unwrap().last().cloned().unwrap()
    }
}

fn bearer_status(headers: &HeaderMap) -> Option<StatusCode> {
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
    match auth {
        None => Some(StatusCode::UNAUTHORIZED),
        Some(value) if value == format!("Bearer {STALE_TOKEN}") => Some(StatusCode::UNAUTHORIZED),
        Some(value) if value == format!("Bearer {BROKEN_TOKEN}") => {
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Some(_) => None,
    }
}

async fn login(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    rec.note(&headers, Some(body));
    Json(json!({ "access_token": TOKEN }))
}

async fn list_bookings(State(rec): State<Recorded>, headers: HeaderMap) -> impl IntoResponse {
    rec.note(&headers, None);
    if let Some(status) = bearer_status(&headers) {
        return (status, Json(json!({ "msg": "rejected" })));
    }
    (
        StatusCode::OK,
        Json(json!([
            { "id": 7, "service": "ICU at Home", "datetime": "2026-01-12T10:00:00", "notes": "" },
            { "id": 3, "service": "Doctor Visit", "datetime": "2026-01-05T18:30:00", "notes": null }
        ])),
    )
}

async fn create_booking(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    rec.note(&headers, Some(body));
    if let Some(status) = bearer_status(&headers) {
        return (status, Json(json!({ "msg": "rejected" })));
    }
    (
        StatusCode::CREATED,
        Json(json!({ "msg": "booking created", "booking_id": 21 })),
    )
}

pub async fn serve() -> (ApiClient, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/login", post(login))
        .route("/bookings", get(list_bookings).post(create_booking))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ApiClient::new(format!("http://{addr}")), recorded)
}
