use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The 11-digit student identifier used as the unique login key.
#[must_use]
pub fn is_valid_scholar_no(s: &str) -> bool {
    s.len() == 11 && s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub scholar_no: String,
    pub role: Role,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Persisted per-user profile fields. Every field is optional: a fresh
/// account starts with an empty profile and fills it in over time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub hostel: Option<String>,
    pub section: Option<String>,
    pub gender: Option<String>,
    pub primary_goal: Option<String>,
}

/// Partial profile update. Absent fields keep their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub hostel: Option<String>,
    pub section: Option<String>,
    pub gender: Option<String>,
    pub primary_goal: Option<String>,
}

impl Profile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(semester) = patch.semester {
            self.semester = Some(semester);
        }
        if let Some(branch) = patch.branch {
            self.branch = Some(branch);
        }
        if let Some(hostel) = patch.hostel {
            self.hostel = Some(hostel);
        }
        if let Some(section) = patch.section {
            self.section = Some(section);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        if let Some(primary_goal) = patch.primary_goal {
            self.primary_goal = Some(primary_goal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scholar_no_format() {
        assert!(is_valid_scholar_no("12345678901"));
        assert!(!is_valid_scholar_no("1234567890"));
        assert!(!is_valid_scholar_no("123456789012"));
        assert!(!is_valid_scholar_no("1234567890a"));
        assert!(!is_valid_scholar_no(""));
    }

    #[test]
    fn profile_patch_merges_only_provided_fields() {
        let mut profile = Profile {
            semester: Some("6th".to_string()),
            branch: Some("CSE".to_string()),
            ..Profile::default()
        };

        profile.apply(ProfilePatch {
            hostel: Some("Hostel 4".to_string()),
            ..ProfilePatch::default()
        });

        assert_eq!(profile.semester.as_deref(), Some("6th"));
        assert_eq!(profile.branch.as_deref(), Some("CSE"));
        assert_eq!(profile.hostel.as_deref(), Some("Hostel 4"));
        assert!(profile.gender.is_none());
    }
}
