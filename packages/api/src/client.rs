//! # HTTP client for the booking backend
//!
//! [`ApiClient`] issues exactly one request per call. There are no timeouts,
//! no retries and no cancellation; a hung request simply never resolves.
//!
//! ## Response handling
//!
//! The body is read as text first, then the status decides what it means:
//!
//! | Status | Result |
//! |--------|--------|
//! | 2xx | body decoded into the typed response, [`ApiError::Decode`] if it does not fit |
//! | 401 | [`ApiError::Unauthorized`] |
//! | other | [`ApiError::Status`] with the server's `msg` if the body has one |
//!
//! The bearer token is attached only when the caller has one.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    Booking, BookingReceipt, HealthStatus, LoginRequest, LoginResponse, NewBooking,
    RegistrationReceipt, RegistrationRecord,
};

/// Client for the MAX@Home REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /register`
    pub async fn register(
        &self,
        data: &RegistrationRecord,
    ) -> Result<RegistrationReceipt, ApiError> {
        tracing::debug!(phone = %data.phone, "Registering patient");
        send(self.http.post(self.url("/register")).json(data)).await
    }

    /// `POST /login`. The caller extracts [`LoginResponse::access_token`].
    pub async fn login(&self, phone: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        };
        send(self.http.post(self.url("/login")).json(&body)).await
    }

    /// `GET /bookings` for the user the token belongs to. The list may be empty.
    pub async fn list_bookings(&self, token: Option<&str>) -> Result<Vec<Booking>, ApiError> {
        send(authorized(self.http.get(self.url("/bookings")), token)).await
    }

    /// `POST /bookings`
    pub async fn create_booking(
        &self,
        token: Option<&str>,
        data: &NewBooking,
    ) -> Result<BookingReceipt, ApiError> {
        tracing::debug!(service = %data.service, datetime = %data.datetime, "Creating booking");
        send(authorized(self.http.post(self.url("/bookings")), token).json(data)).await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        send(self.http.get(self.url("/health"))).await
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: server_message(&body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}

/// Extract the backend's `{"msg": "..."}` error text, if the body has one.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("msg")?.as_str().map(str::to_string)
}
