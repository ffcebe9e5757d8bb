//! Role checks for staff- and admin-only endpoints.
//!
//! Clients authenticate with the fixed "client" role; employees carry the
//! name of their role row. Anything that is not a client counts as staff.

use crate::{
    api::models::auth::CurrentUser,
    errors::{Error, Result},
    types::{Operation, Permission, Resource},
};

/// Role name carried by client tokens.
pub const CLIENT_ROLE: &str = "client";

/// Role name with full administrative access.
pub const ADMIN_ROLE: &str = "admin";

impl CurrentUser {
    /// Whether this user is an employee (any non-client role)
    pub fn is_staff(&self) -> bool {
        self.role != CLIENT_ROLE
    }

    /// Whether this user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Require any employee role for the given operation
pub fn require_staff(user: &CurrentUser, resource: Resource, action: Operation) -> Result<()> {
    if user.is_staff() {
        Ok(())
    } else {
        Err(Error::InsufficientPermissions {
            required: Permission::Allow(resource, action),
            action,
            resource: resource.to_string(),
        })
    }
}

/// Require the admin role for the given operation
pub fn require_admin(user: &CurrentUser, resource: Resource, action: Operation) -> Result<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(Error::InsufficientPermissions {
            required: Permission::Role(ADMIN_ROLE),
            action,
            resource: resource.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user_with_role(role: &str) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "who@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_client_is_not_staff() {
        let client = user_with_role(CLIENT_ROLE);
        assert!(!client.is_staff());
        assert!(require_staff(&client, Resource::Products, Operation::CreateAll).is_err());
    }

    #[test]
    fn test_employee_is_staff_but_not_admin() {
        let pharmacist = user_with_role("pharmacist");
        assert!(pharmacist.is_staff());
        assert!(!pharmacist.is_admin());
        assert!(require_staff(&pharmacist, Resource::Products, Operation::CreateAll).is_ok());
        assert!(require_admin(&pharmacist, Resource::Employees, Operation::CreateAll).is_err());
    }

    #[test]
    fn test_admin_passes_both_checks() {
        let admin = user_with_role(ADMIN_ROLE);
        assert!(require_staff(&admin, Resource::Clients, Operation::ReadAll).is_ok());
        assert!(require_admin(&admin, Resource::Roles, Operation::DeleteAll).is_ok());
    }
}
