//! # CampusLink Application Layer
//!
//! Service objects and workflow controllers for the CampusLink client.
//! Controllers own per-screen state: every fetched collection loads into its
//! own [`section::Section`] slot, mutations are guarded by row-keyed
//! in-flight tracking, and every controller carries a cancellation token so
//! a superseded load never writes into a torn-down screen.
//!
//! ## Module Organization
//!
//! - `config`: environment configuration
//! - `error`: application-level error type
//! - `section`: load-state slots and the in-flight action tracker
//! - `debounce`: keystroke coalescing for search boxes
//! - `session`: session manager (startup/logout lifecycle)
//! - `roles`: role resolution from `/users/me`
//! - `notify`: in-process toast center
//! - `event_detail`: student-facing event/team workflow
//! - `event_admin`: organizer/admin dashboard workflow
//! - `feed`: home feed (posts, comments, likes, collaboration)
//! - `hire`: internships, applications, startup registration
//! - `profile`: profile management and role-change flows

pub mod config;
pub mod debounce;
pub mod error;
pub mod event_admin;
pub mod event_detail;
pub mod feed;
pub mod hire;
pub mod notify;
pub mod profile;
pub mod roles;
pub mod section;
pub mod session;

pub use error::{AppError, AppResult};

/// Current version of the CampusLink application layer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
