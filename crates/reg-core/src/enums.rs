//! Roles, letter grades and eligibility reasons.
//!
//! All enums use `snake_case` serialization (letter grades excepted, which
//! serialize as the printed grade, e.g. `"A+"`). `as_str()` gives the form
//! stored in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    SuperAdmin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Whether this role may post marks for any course session.
    #[must_use]
    pub const fn can_update_any_marks(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LetterGrade
// ---------------------------------------------------------------------------

/// Letter grade assigned from a total mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Ineligibility
// ---------------------------------------------------------------------------

/// Why a student was refused a new enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Ineligibility {
    /// The course belongs to another department.
    DepartmentMismatch,
    /// An enrollment already exists for this exact course session.
    AlreadyEnrolledInSession,
    /// A previous attempt passed and no improvement window is open.
    AlreadyPassed,
}

impl Ineligibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepartmentMismatch => "department_mismatch",
            Self::AlreadyEnrolledInSession => "already_enrolled_in_session",
            Self::AlreadyPassed => "already_passed",
        }
    }
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_as_storage_string() {
        for role in [Role::Student, Role::Teacher, Role::Admin, Role::SuperAdmin] {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, serde_json::Value::String(role.as_str().to_string()));
        }
    }

    #[test]
    fn only_admins_update_any_marks() {
        assert!(Role::SuperAdmin.can_update_any_marks());
        assert!(Role::Admin.can_update_any_marks());
        assert!(!Role::Teacher.can_update_any_marks());
        assert!(!Role::Student.can_update_any_marks());
    }

    #[test]
    fn letter_grade_serializes_as_printed_grade() {
        let json = serde_json::to_string(&LetterGrade::AMinus).unwrap();
        assert_eq!(json, "\"A-\"");
        let back: LetterGrade = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(back, LetterGrade::BPlus);
    }
}
