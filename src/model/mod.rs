//! Roster data model.
//!
//! What the API serves and what the add-player form submits, as plain
//! serde types. Nothing in here does IO.

pub mod envelope;
pub mod player;

pub use envelope::{Envelope, PlayerData, PlayersData};
pub use player::{NewPlayer, Player, PlayerId, PlayerStatus};
