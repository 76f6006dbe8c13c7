//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{INVALID_ROLE_MESSAGE, ROLE_ADMIN, ROLE_USER};
use crate::error::DomainError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Wire/storage representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
        }
    }
}

/// Strict parse: only the exact strings `"Admin"` and `"User"` are accepted.
impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_USER => Ok(UserRole::User),
            _ => Err(DomainError::invalid_argument(INVALID_ROLE_MESSAGE)),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity.
///
/// `email` doubles as the username; there is no separate username column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Response for a newly created user.
///
/// `username` carries the stored email and `email` is always `null`; existing
/// clients depend on this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Username the account was created with
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    /// Not populated on creation
    pub email: Option<String>,
    /// Role assigned on creation (always `User`)
    pub role: UserRole,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.email,
            email: None,
            role: user.role,
        }
    }
}

/// User response used by read and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
    /// User role
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Response for a deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteUserResponse {
    #[cfg_attr(feature = "openapi", schema(example = "User successfully deleted"))]
    pub status: String,
}

impl DeleteUserResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
