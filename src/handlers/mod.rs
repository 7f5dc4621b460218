//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates it and makes at most one store call that changes state
//! 3. Returns HTTP response (JSON, status code)

/// Customer CRUD endpoints
pub mod customers;
pub mod extract;
/// 404 / 405 responses for unmatched requests
pub mod fallback;
pub mod health;
