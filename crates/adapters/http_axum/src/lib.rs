//! # climahub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`/api/entities`, `/api/services/call`)
//! - Map HTTP requests into application service and integration calls
//!   (driving adapter)
//! - Map application results and [`HubError`](climahub_domain::error::HubError)s
//!   into HTTP responses
//!
//! ## Dependency rule
//! Depends on `climahub-app` (for port traits and services) and
//! `climahub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
