//! Task Endpoints
//!
//! `GET` and `POST` on the task collection.

use crate::config;
use crate::models::{NewTask, Task};
use super::fetch_text;

// ========================
// Payloads
// ========================

pub fn encode_new_task(description: &str) -> Result<String, String> {
    serde_json::to_string(&NewTask { description }).map_err(|e| e.to_string())
}

pub fn decode_task_list(body: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}

pub fn decode_task(body: &str) -> Result<Task, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}

// ========================
// Requests
// ========================

/// Fetch the whole collection in server order
pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let body = fetch_text("GET", &config::tasks_url(), None).await?;
    decode_task_list(&body)
}

/// Create a task; the service assigns its id
pub async fn create_task(description: &str) -> Result<Task, String> {
    let payload = encode_new_task(description)?;
    let body = fetch_text("POST", &config::tasks_url(), Some(&payload)).await?;
    decode_task(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_new_task() {
        assert_eq!(encode_new_task("Walk dog").unwrap(), r#"{"description":"Walk dog"}"#);
    }

    #[test]
    fn test_encode_empty_description_is_sent() {
        assert_eq!(encode_new_task("").unwrap(), r#"{"description":""}"#);
    }

    #[test]
    fn test_encode_escapes_quotes() {
        let body = encode_new_task(r#"say "hi""#).unwrap();
        assert_eq!(body, r#"{"description":"say \"hi\""}"#);
    }

    #[test]
    fn test_decode_task_list() {
        let tasks = decode_task_list(r#"[{"id":1,"description":"Buy milk","done":false}]"#).unwrap();
        assert_eq!(
            tasks,
            vec![Task { id: 1, description: "Buy milk".to_string(), done: false }]
        );
    }

    #[test]
    fn test_decode_keeps_server_order() {
        let tasks = decode_task_list(
            r#"[{"id":9,"description":"b","done":true},{"id":3,"description":"a","done":false}]"#,
        )
        .unwrap();
        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn test_decode_created_task() {
        let task = decode_task(r#"{"id":2,"description":"Walk dog","done":false}"#).unwrap();
        assert_eq!(task.id, 2);
        assert_eq!(task.description, "Walk dog");
    }

    #[test]
    fn test_decode_malformed_body_is_err() {
        assert!(decode_task_list("<html>502 Bad Gateway</html>").is_err());
        assert!(decode_task(r#"{"error":"boom"}"#).is_err());
    }
}
