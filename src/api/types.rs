use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    Assignment, AssignmentStatus, MenuPatch, MessMenuEntry, Profile, ProfilePatch, Role, Todo,
    User,
};

/// Error responses carry a single message field. Internal errors substitute
/// a generic message; the real cause only reaches the logs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub scholar_no: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub scholar_no: String,
    pub role: Role,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            scholar_no: user.scholar_no,
            role: user.role,
        }
    }
}

// ============================================================================
// Assignments
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub pdf_file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub status: AssignmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDto {
    pub id: i64,
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub pdf_file: Option<String>,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Assignment> for AssignmentDto {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id,
            title: a.title,
            due_date: a.due_date,
            pdf_file: a.pdf_file,
            status: a.status,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentsResponse {
    pub assignments: Vec<AssignmentDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub assignment: AssignmentDto,
}

// ============================================================================
// Todos
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoDto {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodosResponse {
    pub todos: Vec<TodoDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    pub todo: TodoDto,
}

// ============================================================================
// Mess menu
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuQuery {
    pub day: Option<String>,
}

pub type UpdateMenuRequest = MenuPatch;

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuResponse {
    pub menu: Option<MessMenuEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuUpdateResponse {
    pub success: bool,
    pub menu: MessMenuEntry,
}

// ============================================================================
// Profile
// ============================================================================

pub type UpdateProfileRequest = ProfilePatch;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    pub success: bool,
    pub profile: Profile,
}
