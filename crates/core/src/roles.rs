//! The closed set of user roles and the central authorization predicate.
//!
//! Role names stored in the `users.role` column must match [`Role::as_str`];
//! the `users` table carries a CHECK constraint over the same set.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_HOMEROOM_TEACHER: &str = "homeroom_teacher";
pub const ROLE_TEACHER: &str = "teacher";

/// A user's platform role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    HomeroomTeacher,
    Teacher,
}

impl Role {
    /// Parse a role from its stored name. Unknown names are rejected so a
    /// corrupted or hand-edited row can never widen the role set.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            ROLE_ADMIN => Ok(Self::Admin),
            ROLE_HOMEROOM_TEACHER => Ok(Self::HomeroomTeacher),
            ROLE_TEACHER => Ok(Self::Teacher),
            other => Err(CoreError::Validation(format!("Unknown role '{other}'"))),
        }
    }

    /// The stored name for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::HomeroomTeacher => ROLE_HOMEROOM_TEACHER,
            Self::Teacher => ROLE_TEACHER,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::from_name(&value).map_err(|e| e.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Roles allowed to read records: everyone with a valid session.
pub const READ_ROLES: &[Role] = &[Role::Admin, Role::HomeroomTeacher, Role::Teacher];

/// Roles allowed to create and update records.
pub const WRITE_ROLES: &[Role] = &[Role::Admin, Role::HomeroomTeacher];

/// Roles allowed to delete records.
pub const DELETE_ROLES: &[Role] = &[Role::Admin];

/// Central authorization predicate: is `role` in the allowed set?
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), CoreError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{role}' is not permitted to perform this action"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Role::from_name("admin").unwrap(), Role::Admin);
        assert_eq!(
            Role::from_name("homeroom_teacher").unwrap(),
            Role::HomeroomTeacher
        );
        assert_eq!(Role::from_name("teacher").unwrap(), Role::Teacher);
    }

    #[test]
    fn parse_unknown_role_fails() {
        assert!(Role::from_name("principal").is_err());
        assert!(Role::from_name("").is_err());
        // Display names are not parse names.
        assert!(Role::from_name("Admin").is_err());
    }

    #[test]
    fn role_name_round_trip() {
        for role in [Role::Admin, Role::HomeroomTeacher, Role::Teacher] {
            assert_eq!(Role::from_name(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn authorize_allows_member_of_set() {
        assert!(authorize(Role::Admin, DELETE_ROLES).is_ok());
        assert!(authorize(Role::HomeroomTeacher, WRITE_ROLES).is_ok());
        assert!(authorize(Role::Teacher, READ_ROLES).is_ok());
    }

    #[test]
    fn authorize_rejects_non_member() {
        assert!(authorize(Role::Teacher, WRITE_ROLES).is_err());
        assert!(authorize(Role::HomeroomTeacher, DELETE_ROLES).is_err());
    }
}
