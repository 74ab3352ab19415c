//! Remote task service address.

/// Base address of the task service
pub const API_BASE_URL: &str = "http://localhost:8080";

/// Collection endpoint path, used for both listing and creating
pub const TASKS_PATH: &str = "/api/tasks";

pub fn tasks_url() -> String {
    format!("{}{}", API_BASE_URL, TASKS_PATH)
}
