use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{
    Assignment, AssignmentStatus, MenuPatch, MessDay, MessMenuEntry, NewAssignment, Profile,
    ProfilePatch, Role, Todo, User,
};

/// Process-wide in-memory data store. Constructed once at startup and
/// injected into every handler through the application state; a restart
/// discards everything.
///
/// All table access goes through a single `RwLock`, and ids are allocated
/// inside the write-locked section, so concurrent creates can never observe
/// the same id.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Tables>>,
}

struct Tables {
    users: Vec<User>,
    assignments: Vec<Assignment>,
    todos: Vec<Todo>,
    menu: Vec<MessMenuEntry>,
    next_user_id: i64,
    next_assignment_id: i64,
    next_todo_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Tables {
                users: Vec::new(),
                assignments: Vec::new(),
                todos: Vec::new(),
                menu: seed_menu(),
                next_user_id: 1,
                next_assignment_id: 1,
                next_todo_id: 1,
            })),
        }
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Idempotent upsert keyed by scholar number: a repeat login updates the
    /// stored name and role but never creates a second record.
    pub async fn login_user(&self, name: &str, scholar_no: &str, role: Role) -> User {
        let mut tables = self.inner.write().await;

        if let Some(user) = tables
            .users
            .iter_mut()
            .find(|u| u.scholar_no == scholar_no)
        {
            user.name = name.to_string();
            user.role = role;
            return user.clone();
        }

        let user = User {
            id: tables.next_user_id,
            name: name.to_string(),
            scholar_no: scholar_no.to_string(),
            role,
            profile: Profile::default(),
            created_at: Utc::now(),
        };
        tables.next_user_id += 1;
        tables.users.push(user.clone());
        user
    }

    pub async fn get_user(&self, id: i64) -> Option<User> {
        let tables = self.inner.read().await;
        tables.users.iter().find(|u| u.id == id).cloned()
    }

    pub async fn update_profile(&self, user_id: i64, patch: ProfilePatch) -> Option<Profile> {
        let mut tables = self.inner.write().await;
        let user = tables.users.iter_mut().find(|u| u.id == user_id)?;
        user.profile.apply(patch);
        Some(user.profile.clone())
    }

    // ------------------------------------------------------------------
    // Assignments
    // ------------------------------------------------------------------

    /// Returns the caller's assignments in insertion order. Display ordering
    /// is the client's concern.
    pub async fn assignments_for(&self, user_id: i64) -> Vec<Assignment> {
        let tables = self.inner.read().await;
        tables
            .assignments
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn create_assignment(&self, user_id: i64, new: NewAssignment) -> Assignment {
        let mut tables = self.inner.write().await;
        let assignment = Assignment {
            id: tables.next_assignment_id,
            user_id,
            title: new.title,
            due_date: new.due_date,
            pdf_file: new.pdf_file,
            status: AssignmentStatus::Pending,
            created_at: Utc::now(),
        };
        tables.next_assignment_id += 1;
        tables.assignments.push(assignment.clone());
        assignment
    }

    /// Full replacement of the status field. Returns `None` when no
    /// assignment with that id is owned by the caller; a foreign-owned id is
    /// indistinguishable from an absent one.
    pub async fn set_assignment_status(
        &self,
        user_id: i64,
        id: i64,
        status: AssignmentStatus,
    ) -> Option<Assignment> {
        let mut tables = self.inner.write().await;
        let assignment = tables
            .assignments
            .iter_mut()
            .find(|a| a.id == id && a.user_id == user_id)?;
        assignment.status = status;
        Some(assignment.clone())
    }

    pub async fn delete_assignment(&self, user_id: i64, id: i64) -> bool {
        let mut tables = self.inner.write().await;
        let before = tables.assignments.len();
        tables
            .assignments
            .retain(|a| !(a.id == id && a.user_id == user_id));
        tables.assignments.len() != before
    }

    // ------------------------------------------------------------------
    // Todos
    // ------------------------------------------------------------------

    pub async fn todos_for(&self, user_id: i64) -> Vec<Todo> {
        let tables = self.inner.read().await;
        tables
            .todos
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn create_todo(&self, user_id: i64, title: &str) -> Todo {
        let mut tables = self.inner.write().await;
        let todo = Todo {
            id: tables.next_todo_id,
            user_id,
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        tables.next_todo_id += 1;
        tables.todos.push(todo.clone());
        todo
    }

    pub async fn set_todo_completed(
        &self,
        user_id: i64,
        id: i64,
        completed: bool,
    ) -> Option<Todo> {
        let mut tables = self.inner.write().await;
        let todo = tables
            .todos
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id)?;
        todo.completed = completed;
        Some(todo.clone())
    }

    pub async fn delete_todo(&self, user_id: i64, id: i64) -> bool {
        let mut tables = self.inner.write().await;
        let before = tables.todos.len();
        tables.todos.retain(|t| !(t.id == id && t.user_id == user_id));
        tables.todos.len() != before
    }

    // ------------------------------------------------------------------
    // Mess menu
    // ------------------------------------------------------------------

    pub async fn menu_for(&self, day: MessDay) -> Option<MessMenuEntry> {
        let tables = self.inner.read().await;
        tables.menu.iter().find(|m| m.day == day).cloned()
    }

    /// Merges the provided fields into the seeded entry for `day`.
    /// Returns `None` when the day matches no seeded entry.
    pub async fn patch_menu(&self, day: MessDay, patch: MenuPatch) -> Option<MessMenuEntry> {
        let mut tables = self.inner.write().await;
        let entry = tables.menu.iter_mut().find(|m| m.day == day)?;
        entry.apply(patch);
        Some(entry.clone())
    }
}

fn seed_menu() -> Vec<MessMenuEntry> {
    let seed = [
        (
            MessDay::Monday,
            "Poha, Tea",
            "Dal, Rice, Roti, Sabzi",
            "Tea, Biscuits",
            "Rajma, Rice, Roti",
        ),
        (
            MessDay::Tuesday,
            "Idli, Sambar, Chutney",
            "Chole, Rice, Roti",
            "Tea, Samosa",
            "Paneer Curry, Roti",
        ),
        (
            MessDay::Wednesday,
            "Upma, Tea",
            "Dal Fry, Rice, Roti",
            "Tea, Mathri",
            "Veg Biryani",
        ),
        (
            MessDay::Thursday,
            "Paratha, Curd, Pickle",
            "Sambar, Rice, Roti",
            "Tea, Bread Pakora",
            "Dal Makhani, Roti",
        ),
        (
            MessDay::Friday,
            "Aloo Puri, Tea",
            "Kadhi, Rice, Roti",
            "Tea, Namkeen",
            "Chicken Curry, Rice",
        ),
        (
            MessDay::Saturday,
            "Sandwich, Tea",
            "Rajma, Rice, Roti",
            "Tea, Cake",
            "Fried Rice, Manchurian",
        ),
        (
            MessDay::Sunday,
            "Dosa, Chutney, Sambhar",
            "Special Thali",
            "Tea, Pakora",
            "Pizza, Pasta",
        ),
    ];

    seed.into_iter()
        .map(|(day, breakfast, lunch, tea, dinner)| MessMenuEntry {
            day,
            breakfast: breakfast.to_string(),
            lunch: lunch.to_string(),
            tea: tea.to_string(),
            dinner: dinner.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_upserts_by_scholar_no() {
        let store = Store::new();

        let first = store.login_user("A", "12345678901", Role::Student).await;
        let second = store.login_user("B", "12345678901", Role::Student).await;

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "B");

        let other = store.login_user("C", "10987654321", Role::Student).await;
        assert_ne!(other.id, first.id);
    }

    #[tokio::test]
    async fn assignments_are_owner_scoped() {
        let store = Store::new();
        let alice = store.login_user("Alice", "11111111111", Role::Student).await;
        let bob = store.login_user("Bob", "22222222222", Role::Student).await;

        let created = store
            .create_assignment(
                alice.id,
                NewAssignment {
                    title: "Math HW".to_string(),
                    due_date: None,
                    pdf_file: None,
                },
            )
            .await;
        assert_eq!(created.status, AssignmentStatus::Pending);

        assert_eq!(store.assignments_for(alice.id).await.len(), 1);
        assert!(store.assignments_for(bob.id).await.is_empty());

        // Bob cannot see or touch Alice's row.
        assert!(
            store
                .set_assignment_status(bob.id, created.id, AssignmentStatus::Completed)
                .await
                .is_none()
        );
        assert!(!store.delete_assignment(bob.id, created.id).await);

        assert!(store.delete_assignment(alice.id, created.id).await);
        assert!(!store.delete_assignment(alice.id, created.id).await);
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_deletion() {
        let store = Store::new();
        let user = store.login_user("A", "12345678901", Role::Student).await;

        let first = store.create_todo(user.id, "one").await;
        assert!(store.delete_todo(user.id, first.id).await);

        let second = store.create_todo(user.id, "two").await;
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Store::new();
        let user = store.login_user("A", "12345678901", Role::Student).await;

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            let user_id = user.id;
            handles.push(tokio::spawn(async move {
                store.create_todo(user_id, &format!("task {i}")).await.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn menu_is_seeded_for_all_seven_days() {
        let store = Store::new();

        for day in MessDay::ALL {
            assert!(store.menu_for(day).await.is_some(), "missing {day}");
        }

        let patched = store
            .patch_menu(
                MessDay::Tuesday,
                MenuPatch {
                    dinner: Some("Paneer Tikka, Roti".to_string()),
                    ..MenuPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.dinner, "Paneer Tikka, Roti");
        assert_eq!(patched.breakfast, "Idli, Sambar, Chutney");
    }
}
