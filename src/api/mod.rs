//! HTTP access to the roster API.
//!
//! ## Layering
//!
//! - `config`: where the API lives (base URL + cohort path segment)
//! - `transport`: one trait over the three verbs the client needs, plus
//!   the production `ureq` implementation
//! - `client`: the four roster operations, total by contract

pub mod client;
pub mod config;
pub mod transport;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use transport::{ApiError, Transport, UreqTransport};
