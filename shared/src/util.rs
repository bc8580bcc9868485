//! Shared utility functions

/// Current wall-clock time as Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh opaque entity id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
