//! Clinic Dash Client
//!
//! Async REST client and view loaders for the clinic dashboards. Fetching
//! lives here; the joins, filters and aggregates come from
//! `clinic-dash-core`.
//!
//! # Modules
//!
//! - [`config`]: Base URL, timeouts and token store location
//! - [`session`]: Login state shared with the HTTP adapter
//! - [`store`]: SQLite persistence for the bearer token
//! - [`api`]: One method per backend endpoint, with response normalization
//! - [`sequencer`]: Latest-request-wins tickets
//! - [`views`]: Loaders that fetch, join and aggregate one dashboard view

pub mod api;
pub mod config;
pub mod sequencer;
pub mod session;
pub mod store;
pub mod views;

pub use api::{ApiClient, ApiError, ApiResult, ScheduleQuery, StatisticsKind};
pub use config::{load_config, ClientConfig};
pub use sequencer::{RequestSequencer, Ticket};
pub use session::Session;
pub use store::{MemoryTokenStore, SqliteTokenStore, TokenStore};
pub use views::{LoadError, RefreshOutcome, View, ViewState};
