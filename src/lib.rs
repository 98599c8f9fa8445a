//! # puppy-bowl
//!
//! Terminal roster client for the Puppy Bowl API.
//!
//! ## How it hangs together
//!
//! - `model`: players, statuses, and the `{ "data": ... }` envelopes
//! - `api`: endpoint config, a swappable HTTP transport, and the four
//!   total roster operations (list, get, create, remove)
//! - `render`: pure data-to-text card and detail rendering
//! - `provider`: the background thread that owns the API client; the UI
//!   talks to it over channels, and every mutation is followed by a
//!   roster refresh
//! - `ui`: app state, the add-player form, and the ratatui front end
//!
//! ## Error posture
//!
//! The client never fails loudly. API trouble degrades to an empty
//! roster or a missing detail, the error goes to the log, and the next
//! refresh gets another chance.

pub mod api;
pub mod model;
pub mod provider;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use crate::api::{ApiClient, ApiConfig, ApiError, Transport, UreqTransport};
pub use crate::model::{NewPlayer, Player, PlayerId, PlayerStatus};
pub use crate::provider::{Command, Update};
pub use crate::ui::App;
