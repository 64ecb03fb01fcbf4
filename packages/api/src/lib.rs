//! # API crate — client for the school activities server
//!
//! The activities board does not own any data: the listing, the participant
//! rosters and every capacity or duplicate check live in an external HTTP
//! server. This crate is the typed edge the web and desktop frontends talk
//! through.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`ActivitiesApi`] trait and its reqwest-backed [`HttpClient`] |
//! | [`config`] | `activities.toml` client settings ([`ClientConfig`]) |
//! | [`error`] | [`ApiError`], the single failure type of every call |
//! | [`models`] | Wire types: [`Activity`], the ordered [`ActivityDirectory`], response bodies |
//!
//! [`MemoryApi`] is an in-memory stand-in for the server used by tests.
//!
//! ## Endpoints consumed
//!
//! - `GET /activities`
//! - `POST /activities/{name}/signup?email=...`
//! - `POST /activities/{name}/unregister?email=...`

pub mod client;
pub mod config;
pub mod error;
pub mod models;

mod memory;
pub use memory::MemoryApi;

pub use client::{ActivitiesApi, HttpClient, Membership};
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::{Activity, ActivityDirectory, ActivityEntry, ErrorBody, MessageResponse};
