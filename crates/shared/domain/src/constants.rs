//! Domain-level constants.
//!
//! These constants define business rules and the fixed strings clients rely on.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "User";

/// Administrator role
pub const ROLE_ADMIN: &str = "Admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Check if a role value is valid (exact, case-sensitive match)
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

/// Message returned when a role outside [`VALID_ROLES`] is supplied
pub const INVALID_ROLE_MESSAGE: &str = r#"Invalid role. Allowed values are "Admin" and "User"."#;

// =============================================================================
// Responses
// =============================================================================

/// Status string returned after a successful user deletion
pub const USER_DELETED_STATUS: &str = "User successfully deleted";

/// Message used when a user lookup by id misses
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

// =============================================================================
// Greetings
// =============================================================================

/// Greeting served on `/hello-world`
pub const HELLO_WORLD_MESSAGE: &str = "Hello, World!";

/// Greeting served on `/api/v1/hello`
pub const SAY_HELLO_MESSAGE: &str = "Hello, world!";
