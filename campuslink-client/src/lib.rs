//! # CampusLink API Client
//!
//! Typed client for the CampusLink REST API. The client owns request
//! construction (query encoding, bearer attachment) and response
//! normalization (status mapping, envelope unwrapping); the per-domain
//! modules are one thin function per endpoint with no business logic.
//!
//! ## Module Organization
//!
//! - `client`: the `ApiClient` and request/response normalization rules
//! - `transport`: the `ApiTransport` seam, reqwest transport, mock transport
//! - `error`: the unified `ApiError`
//! - `events`, `feed`, `comments`, `likes`, `hire`, `internships`,
//!   `startups`, `users`, `notifications`: domain endpoint modules

pub mod client;
pub mod error;
pub mod transport;

pub mod comments;
pub mod events;
pub mod feed;
pub mod hire;
pub mod internships;
pub mod likes;
pub mod notifications;
pub mod startups;
pub mod users;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

/// Current version of the CampusLink client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
