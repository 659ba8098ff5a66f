//! User domain models and parameters.

use crate::model::user::UserDto;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Application user. `role` is `None` until an administrator assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Option<String>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
        }
    }
}

/// Parameters for the create-if-absent user write performed on sign-in.
#[derive(Debug, Clone)]
pub struct EnsureUserParam {
    pub email: String,
    pub name: String,
}

/// Result of the create-if-absent write.
///
/// `AlreadyExists` deliberately carries nothing: the endpoint echoes the
/// submitted payload back unchanged in that case, matching the contract the
/// existing client was built against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureUserOutcome {
    Inserted(User),
    AlreadyExists,
}

/// Parameters for an admin-gated role assignment.
#[derive(Debug, Clone)]
pub struct SetRoleParam {
    pub user_id: i32,
    pub role: String,
}
