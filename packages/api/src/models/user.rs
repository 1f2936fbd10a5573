//! # Account models: registration and login
//!
//! ## Requests
//!
//! - [`RegistrationRecord`] — `POST /register` body. Write-only: the client sends
//!   it once and keeps nothing, not even the password.
//! - [`LoginRequest`] — `POST /login` body, phone + password.
//!
//! ## Responses
//!
//! - [`RegistrationReceipt`] — `{ "msg": "registered", "user_id": 7 }`. Both
//!   fields are optional so any JSON object the backend sends is accepted.
//! - [`LoginResponse`] — carries the `access_token` the caller stores in the
//!   session, the optional [`LoginUser`] echo, and every other field verbatim
//!   in [`LoginResponse::extra`].

use serde::{Deserialize, Serialize};

/// New patient account as entered on the registration form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub phone: String,
    /// Home address in the service area (Delhi NCR).
    pub address: String,
    pub password: String,
}

/// Body returned by a successful registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Credentials sent to `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// User echo included in the login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    pub phone: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body returned by a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
    /// Any further fields, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_with_user_and_extras() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "access_token": "abc",
            "user": { "id": 7, "phone": "9876543210", "name": "Test Patient" },
            "expires_in": 28800
        }))
        .unwrap();
        assert_eq!(resp.access_token, "abc");
        assert_eq!(resp.user.as_ref().map(|u| u.id), Some(7));
        assert_eq!(resp.extra.get("expires_in"), Some(&json!(28800)));
        assert!(!resp.extra.contains_key("access_token"));
    }

    #[test]
    fn test_login_response_token_only() {
        let resp: LoginResponse = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
        assert_eq!(resp.access_token, "abc");
        assert!(resp.user.is_none());
        assert!(resp.extra.is_empty());
    }

    #[test]
    fn test_login_response_requires_token() {
        let result: Result<LoginResponse, _> =
            serde_json::from_value(json!({ "msg": "invalid credentials" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_registration_record_wire_shape() {
        let record = RegistrationRecord {
            name: "Asha".into(),
            phone: "9876543210".into(),
            address: "Sector 18, Noida".into(),
            password: "secret".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Asha",
                "phone": "9876543210",
                "address": "Sector 18, Noida",
                "password": "secret"
            })
        );
    }
}
