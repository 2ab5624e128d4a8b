//! Admin gate middleware.
//!
//! A shared-secret guard for the scoring view: a fixed username allow-list
//! plus a 4-digit PIN, both carried in request headers. This is a misclick
//! guard, not a security boundary; the PIN comparison is constant-time all
//! the same.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::ErrorResponse;
use crate::config::AdminConfig;

/// Header carrying the admin username.
pub const ADMIN_USER_HEADER: &str = "x-admin-user";

/// Header carrying the admin PIN.
pub const ADMIN_PIN_HEADER: &str = "x-admin-pin";

/// Credentials the gate checks requests against.
#[derive(Debug, Clone)]
pub struct AdminGate {
    allowed_users: Vec<String>,
    pin: Secret<String>,
}

impl AdminGate {
    pub fn new(allowed_users: Vec<String>, pin: impl Into<String>) -> Self {
        Self {
            allowed_users,
            pin: Secret::new(pin.into()),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            allowed_users: config.allowed_users_list(),
            pin: config.pin.clone(),
        }
    }

    fn allows(&self, user: &str, pin: &str) -> bool {
        let user_allowed = self.allowed_users.iter().any(|allowed| allowed == user);
        let pin_matches: bool = pin
            .as_bytes()
            .ct_eq(self.pin.expose_secret().as_bytes())
            .into();
        user_allowed && pin_matches
    }
}

/// Middleware rejecting requests without valid admin credentials.
pub async fn admin_gate(
    State(gate): State<Arc<AdminGate>>,
    request: Request,
    next: Next,
) -> Response {
    let user = header_value(&request, ADMIN_USER_HEADER);
    let pin = header_value(&request, ADMIN_PIN_HEADER);

    match (user, pin) {
        (Some(user), Some(pin)) if gate.allows(user, pin) => next.run(request).await,
        _ => {
            tracing::debug!(path = %request.uri().path(), "Admin gate rejected request");
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Admin credentials required")),
            )
                .into_response()
        }
    }
}

fn header_value<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new(vec!["teacher".to_string(), "admin".to_string()], "4321")
    }

    #[test]
    fn test_allows_listed_user_with_correct_pin() {
        assert!(gate().allows("teacher", "4321"));
    }

    #[test]
    fn test_rejects_wrong_pin() {
        assert!(!gate().allows("teacher", "1234"));
        assert!(!gate().allows("teacher", "432"));
    }

    #[test]
    fn test_rejects_unlisted_user() {
        assert!(!gate().allows("student", "4321"));
    }

    #[test]
    fn test_from_config_uses_allow_list() {
        let gate = AdminGate::from_config(&AdminConfig::default());
        assert!(gate.allows("teacher", "0000"));
        assert!(!gate.allows("intruder", "0000"));
    }
}
