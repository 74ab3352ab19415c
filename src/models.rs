//! Frontend Models
//!
//! Data structures matching the task service's JSON shapes.

use serde::{Deserialize, Serialize};

/// Task record (matches backend)
///
/// `id` is assigned by the service and never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub done: bool,
}

/// Create payload: `{"description": "..."}`
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub description: &'a str,
}
