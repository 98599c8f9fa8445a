//! Response envelopes.
//!
//! Every endpoint wraps its payload in `{ "data": { ... } }` alongside
//! bookkeeping keys (`success`, `error`) the client does not read.
//! Unknown keys are ignored; a missing or misshapen `data` is a parse
//! error the caller turns into a degraded result.

use serde::Deserialize;

use super::Player;

/// Outer wrapper common to all endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// `data` shape of the collection endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

/// `data` shape of the single-player endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerData {
    pub player: Player,
}
