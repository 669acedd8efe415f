//! Test fixtures and data factories

use projecthub_access::AccessGrant;

/// Factory for grants used across tests
pub struct GrantFactory;

impl GrantFactory {
    /// View, Edit and Delete
    pub fn full(module: &str) -> AccessGrant {
        AccessGrant::new(module, true, true, true)
    }

    /// View only
    pub fn read_only(module: &str) -> AccessGrant {
        AccessGrant::new(module, true, false, false)
    }

    /// No rights
    pub fn none(module: &str) -> AccessGrant {
        AccessGrant::none(module)
    }

    /// Module catalog of a typical tenant
    pub fn catalog() -> Vec<&'static str> {
        vec!["users", "roles", "projects", "solutions", "generate_invoice"]
    }
}
