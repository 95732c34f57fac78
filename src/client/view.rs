//! Per-render view state for the assignment and todo pages.
//!
//! Each struct is a snapshot of one list, refreshed from the API on mount.
//! Status toggles and deletes are optimistic: the snapshot is mutated first
//! and restored from the prior state when the server call fails, so a failed
//! write never leaves phantom state on screen. Creates are not optimistic: a
//! failed create leaves the snapshot untouched and the error surfaces to the
//! caller for resubmission.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::{ApiClient, ClientError};
use crate::api::types::{AssignmentDto, TodoDto};
use crate::models::AssignmentStatus;

#[derive(Debug, Default)]
pub struct AssignmentBoard {
    items: Vec<AssignmentDto>,
}

impl AssignmentBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[AssignmentDto] {
        &self.items
    }

    /// Display ordering: pending before completed, then by due date
    /// ascending. Items without a due date are not comparable by date and
    /// keep their insertion order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&AssignmentDto> {
        let mut items: Vec<&AssignmentDto> = self.items.iter().collect();
        items.sort_by(|a, b| {
            status_rank(a.status)
                .cmp(&status_rank(b.status))
                .then_with(|| cmp_due(a.due_date, b.due_date))
        });
        items
    }

    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        self.items = api.assignments().await?;
        Ok(())
    }

    pub async fn add(
        &mut self,
        api: &ApiClient,
        title: &str,
        due_date: Option<DateTime<Utc>>,
        pdf_file: Option<String>,
    ) -> Result<(), ClientError> {
        let created = api.create_assignment(title, due_date, pdf_file).await?;
        self.items.push(created);
        Ok(())
    }

    /// Optimistically flips the status, then confirms with the server.
    pub async fn toggle(&mut self, api: &ApiClient, id: i64) -> Result<(), ClientError> {
        let snapshot = self.items.clone();

        let Some(item) = self.items.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };

        let next = match item.status {
            AssignmentStatus::Pending => AssignmentStatus::Completed,
            AssignmentStatus::Completed => AssignmentStatus::Pending,
        };
        item.status = next;

        match api.set_assignment_status(id, next).await {
            Ok(confirmed) => {
                if let Some(item) = self.items.iter_mut().find(|a| a.id == id) {
                    *item = confirmed;
                }
                Ok(())
            }
            Err(e) => {
                self.items = snapshot;
                Err(e)
            }
        }
    }

    /// Optimistically removes the item, restoring it when the delete fails.
    pub async fn remove(&mut self, api: &ApiClient, id: i64) -> Result<(), ClientError> {
        let snapshot = self.items.clone();
        self.items.retain(|a| a.id != id);

        match api.delete_assignment(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.items = snapshot;
                Err(e)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<TodoDto>,
}

impl TodoList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[TodoDto] {
        &self.items
    }

    /// Open tasks first, completed at the bottom, insertion order within.
    #[must_use]
    pub fn ordered(&self) -> Vec<&TodoDto> {
        let mut items: Vec<&TodoDto> = self.items.iter().collect();
        items.sort_by_key(|t| t.completed);
        items
    }

    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        self.items = api.todos().await?;
        Ok(())
    }

    pub async fn add(&mut self, api: &ApiClient, title: &str) -> Result<(), ClientError> {
        let created = api.create_todo(title).await?;
        self.items.push(created);
        Ok(())
    }

    pub async fn toggle(&mut self, api: &ApiClient, id: i64) -> Result<(), ClientError> {
        let snapshot = self.items.clone();

        let Some(item) = self.items.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };

        let next = !item.completed;
        item.completed = next;

        match api.set_todo_completed(id, next).await {
            Ok(confirmed) => {
                if let Some(item) = self.items.iter_mut().find(|t| t.id == id) {
                    *item = confirmed;
                }
                Ok(())
            }
            Err(e) => {
                self.items = snapshot;
                Err(e)
            }
        }
    }

    pub async fn remove(&mut self, api: &ApiClient, id: i64) -> Result<(), ClientError> {
        let snapshot = self.items.clone();
        self.items.retain(|t| t.id != id);

        match api.delete_todo(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.items = snapshot;
                Err(e)
            }
        }
    }
}

const fn status_rank(status: AssignmentStatus) -> u8 {
    match status {
        AssignmentStatus::Pending => 0,
        AssignmentStatus::Completed => 1,
    }
}

fn cmp_due(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Undated items have no date to compare; the stable sort keeps
        // their relative order.
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn assignment(id: i64, status: AssignmentStatus, due_day: Option<u32>) -> AssignmentDto {
        AssignmentDto {
            id,
            title: format!("a{id}"),
            due_date: due_day.map(|d| Utc.with_ymd_and_hms(2026, 9, d, 12, 0, 0).unwrap()),
            pdf_file: None,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn pending_sorts_before_completed_then_by_due_date() {
        let board = AssignmentBoard {
            items: vec![
                assignment(1, AssignmentStatus::Completed, Some(1)),
                assignment(2, AssignmentStatus::Pending, Some(20)),
                assignment(3, AssignmentStatus::Pending, Some(5)),
                assignment(4, AssignmentStatus::Pending, None),
            ],
        };

        let ids: Vec<i64> = board.ordered().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn undated_assignments_keep_insertion_order() {
        let board = AssignmentBoard {
            items: vec![
                assignment(1, AssignmentStatus::Pending, None),
                assignment(2, AssignmentStatus::Pending, None),
                assignment(3, AssignmentStatus::Pending, None),
            ],
        };

        let ids: Vec<i64> = board.ordered().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn todos_put_completed_last() {
        let list = TodoList {
            items: vec![
                TodoDto {
                    id: 1,
                    title: "done".to_string(),
                    completed: true,
                    created_at: Utc::now(),
                },
                TodoDto {
                    id: 2,
                    title: "open".to_string(),
                    completed: false,
                    created_at: Utc::now(),
                },
            ],
        };

        let ids: Vec<i64> = list.ordered().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
