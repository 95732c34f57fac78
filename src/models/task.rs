use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Completed,
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub pdf_file: Option<String>,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating an assignment. A record with only a title
/// is a valid, minimal assignment.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub pdf_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
