//! HTTP middleware.

mod admin_gate;

pub use admin_gate::{admin_gate, AdminGate, ADMIN_PIN_HEADER, ADMIN_USER_HEADER};
