pub mod menu;
pub mod task;
pub mod user;

pub use menu::{DaySelector, MenuPatch, MessDay, MessMenuEntry};
pub use task::{Assignment, AssignmentStatus, NewAssignment, Todo};
pub use user::{Profile, ProfilePatch, Role, User};
