//! The four roster operations.
//!
//! Every public operation is total: a failure is logged and collapsed to
//! an empty or absent result, so callers never branch on errors and the
//! next refresh simply gets another chance. The fallible versions stay
//! private.

use serde_json::Value;

use crate::model::{Envelope, NewPlayer, Player, PlayerData, PlayerId, PlayersData};

use super::{ApiConfig, ApiError, Transport, UreqTransport};

/// Roster API client over some transport.
pub struct ApiClient<T: Transport = UreqTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<UreqTransport> {
    /// Client over the production HTTP transport.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The endpoint configuration in use.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // === Total operations ===

    /// Fetch the whole roster. Empty on any failure.
    pub fn list_players(&self) -> Vec<Player> {
        match self.try_list_players() {
            Ok(players) => players,
            Err(err) => {
                log::error!("Uh oh, trouble fetching players! {err}");
                Vec::new()
            }
        }
    }

    /// Fetch one player by id. `None` on any failure.
    pub fn get_player(&self, id: PlayerId) -> Option<Player> {
        match self.try_get_player(id) {
            Ok(player) => Some(player),
            Err(err) => {
                log::error!("Oh no, trouble fetching player {id}! {err}");
                None
            }
        }
    }

    /// Create a player from form input.
    ///
    /// Returns the raw response body, `None` on any failure. Callers that
    /// only care about the roster should refresh it afterwards either way.
    pub fn create_player(&self, new_player: &NewPlayer) -> Option<Value> {
        match self.try_create_player(new_player) {
            Ok(body) => Some(body),
            Err(err) => {
                log::error!("Oops, something went wrong with adding that player! {err}");
                None
            }
        }
    }

    /// Delete a player by id. Success and failure look the same to the
    /// caller; the refresh that follows shows the real outcome.
    pub fn remove_player(&self, id: PlayerId) {
        if let Err(err) = self.try_remove_player(id) {
            log::error!("Whoops, trouble removing player {id} from the roster! {err}");
        }
    }

    // === Fallible plumbing ===

    fn try_list_players(&self) -> Result<Vec<Player>, ApiError> {
        let body = self.transport.get_json(&self.config.players_url())?;
        log::debug!("players response: {body}");
        let envelope: Envelope<PlayersData> = serde_json::from_value(body)?;
        Ok(envelope.data.players)
    }

    fn try_get_player(&self, id: PlayerId) -> Result<Player, ApiError> {
        let body = self.transport.get_json(&self.config.player_url(id))?;
        let envelope: Envelope<PlayerData> = serde_json::from_value(body)?;
        Ok(envelope.data.player)
    }

    fn try_create_player(&self, new_player: &NewPlayer) -> Result<Value, ApiError> {
        let body = serde_json::to_value(new_player)?;
        self.transport.post_json(&self.config.players_url(), &body)
    }

    fn try_remove_player(&self, id: PlayerId) -> Result<(), ApiError> {
        self.transport.delete(&self.config.player_url(id))
    }
}
