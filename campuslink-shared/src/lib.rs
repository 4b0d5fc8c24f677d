//! # CampusLink Shared Library
//!
//! This crate contains the domain types shared across the CampusLink API
//! client and the application/controller layer.
//!
//! ## Module Organization
//!
//! - `models`: wire-format entity types (events, teams, posts, jobs, ...)
//! - `roles`: application roles and action gating
//! - `session`: the current-session token store

pub mod models;
pub mod roles;
pub mod session;

/// Current version of the CampusLink shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
