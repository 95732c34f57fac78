//! Typed client for the StudyEdge API: one method per backend operation,
//! with the session cookie carried automatically between calls.
//!
//! The client owns no state beyond the cookie store; callers re-fetch on
//! every render. See [`view`] for the per-page snapshot helpers.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::{
    AssignmentDto, AssignmentResponse, AssignmentsResponse, CreateAssignmentRequest,
    CreateTodoRequest, ErrorBody, LoginRequest, LoginResponse, MeResponse, MenuResponse,
    MenuUpdateResponse, ProfileResponse, ProfileUpdateResponse, SuccessResponse, TodoDto,
    TodoResponse, TodosResponse, UpdateAssignmentRequest, UpdateTodoRequest, UserDto,
};
use crate::models::{
    AssignmentStatus, DaySelector, MenuPatch, MessDay, MessMenuEntry, Profile, ProfilePatch,
    user::is_valid_scholar_no,
};
use chrono::{DateTime, Utc};

pub mod view;

pub use view::{AssignmentBoard, TodoList};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The session is missing or no longer valid. Distinguished from other
    /// HTTP errors so the UI can route straight to the login view.
    #[error("not authenticated")]
    Unauthorized,

    #[error("server returned {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Rejected locally before any request is made; mirrors the server-side
    /// format check.
    #[error("scholar number must be exactly 11 digits")]
    InvalidScholarNo,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn expect_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map_or_else(|_| status.to_string(), |body| body.error);
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, name: &str, scholar_no: &str) -> Result<UserDto, ClientError> {
        if !is_valid_scholar_no(scholar_no) {
            return Err(ClientError::InvalidScholarNo);
        }

        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest {
                name: name.to_string(),
                scholar_no: scholar_no.to_string(),
            })
            .send()
            .await?;

        let body: LoginResponse = Self::expect_json(response).await?;
        Ok(body.user)
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.http.post(self.url("/auth/logout")).send().await?;
        let _: SuccessResponse = Self::expect_json(response).await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<UserDto, ClientError> {
        let response = self.http.get(self.url("/me")).send().await?;
        let body: MeResponse = Self::expect_json(response).await?;
        Ok(body.user)
    }

    // ------------------------------------------------------------------
    // Assignments
    // ------------------------------------------------------------------

    pub async fn assignments(&self) -> Result<Vec<AssignmentDto>, ClientError> {
        let response = self.http.get(self.url("/assignments")).send().await?;
        let body: AssignmentsResponse = Self::expect_json(response).await?;
        Ok(body.assignments)
    }

    pub async fn create_assignment(
        &self,
        title: &str,
        due_date: Option<DateTime<Utc>>,
        pdf_file: Option<String>,
    ) -> Result<AssignmentDto, ClientError> {
        let response = self
            .http
            .post(self.url("/assignments"))
            .json(&CreateAssignmentRequest {
                title: title.to_string(),
                due_date,
                pdf_file,
            })
            .send()
            .await?;

        let body: AssignmentResponse = Self::expect_json(response).await?;
        Ok(body.assignment)
    }

    pub async fn set_assignment_status(
        &self,
        id: i64,
        status: AssignmentStatus,
    ) -> Result<AssignmentDto, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/assignments/{id}")))
            .json(&UpdateAssignmentRequest { status })
            .send()
            .await?;

        let body: AssignmentResponse = Self::expect_json(response).await?;
        Ok(body.assignment)
    }

    pub async fn delete_assignment(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/assignments/{id}")))
            .send()
            .await?;

        let _: SuccessResponse = Self::expect_json(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Todos
    // ------------------------------------------------------------------

    pub async fn todos(&self) -> Result<Vec<TodoDto>, ClientError> {
        let response = self.http.get(self.url("/todos")).send().await?;
        let body: TodosResponse = Self::expect_json(response).await?;
        Ok(body.todos)
    }

    pub async fn create_todo(&self, title: &str) -> Result<TodoDto, ClientError> {
        let response = self
            .http
            .post(self.url("/todos"))
            .json(&CreateTodoRequest {
                title: title.to_string(),
            })
            .send()
            .await?;

        let body: TodoResponse = Self::expect_json(response).await?;
        Ok(body.todo)
    }

    pub async fn set_todo_completed(
        &self,
        id: i64,
        completed: bool,
    ) -> Result<TodoDto, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/todos/{id}")))
            .json(&UpdateTodoRequest { completed })
            .send()
            .await?;

        let body: TodoResponse = Self::expect_json(response).await?;
        Ok(body.todo)
    }

    pub async fn delete_todo(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;

        let _: SuccessResponse = Self::expect_json(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mess menu
    // ------------------------------------------------------------------

    pub async fn mess_menu(
        &self,
        selector: DaySelector,
    ) -> Result<Option<MessMenuEntry>, ClientError> {
        let day = match selector {
            DaySelector::Today => "today",
            DaySelector::Day(day) => day.as_str(),
        };

        let response = self
            .http
            .get(self.url("/mess-menu"))
            .query(&[("day", day)])
            .send()
            .await?;

        let body: MenuResponse = Self::expect_json(response).await?;
        Ok(body.menu)
    }

    pub async fn update_mess_menu(
        &self,
        day: MessDay,
        patch: MenuPatch,
    ) -> Result<MessMenuEntry, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/mess-menu/{day}")))
            .json(&patch)
            .send()
            .await?;

        let body: MenuUpdateResponse = Self::expect_json(response).await?;
        Ok(body.menu)
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    pub async fn profile(&self) -> Result<Profile, ClientError> {
        let response = self.http.get(self.url("/profile")).send().await?;
        let body: ProfileResponse = Self::expect_json(response).await?;
        Ok(body.profile)
    }

    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<Profile, ClientError> {
        let response = self
            .http
            .patch(self.url("/profile"))
            .json(&patch)
            .send()
            .await?;

        let body: ProfileUpdateResponse = Self::expect_json(response).await?;
        Ok(body.profile)
    }
}
