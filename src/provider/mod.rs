//! Background roster provider.
//!
//! The UI never talks HTTP directly: it sends `Command`s down a channel
//! and applies whatever `Update`s come back. One worker thread owns the
//! `ApiClient`, handles commands in arrival order, and follows every
//! mutation with exactly one roster refresh, so the screen always ends
//! up showing what the server has.

pub mod demo;

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::api::{ApiClient, Transport};
use crate::model::{NewPlayer, Player, PlayerId};

/// Requests the UI sends to the provider.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Re-fetch the whole roster.
    Refresh,
    /// Fetch one player for the detail overlay.
    FetchDetail(PlayerId),
    /// Create a player from form input, then refresh.
    Create(NewPlayer),
    /// Delete a player, then refresh.
    Remove(PlayerId),
}

/// What the provider reports back.
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    /// A fresh roster snapshot; replaces the previous one wholesale.
    Roster(Vec<Player>),
    /// Detail for a single player.
    Detail(Player),
    /// A create attempt finished; the refresh behind it shows the outcome.
    Created,
    /// A remove attempt finished for this player.
    Removed(PlayerId),
}

/// Spawn the provider over a live API client.
///
/// The worker exits when the command channel closes.
pub fn spawn<T>(
    client: ApiClient<T>,
    commands: Receiver<Command>,
    updates: Sender<Update>,
) -> thread::JoinHandle<()>
where
    T: Transport + Send + 'static,
{
    thread::spawn(move || run(&client, &commands, &updates))
}

fn run<T: Transport>(client: &ApiClient<T>, commands: &Receiver<Command>, updates: &Sender<Update>) {
    while let Ok(command) = commands.recv() {
        for update in handle(client, command) {
            if updates.send(update).is_err() {
                return; // UI is gone
            }
        }
    }
}

/// Handle one command, producing updates in the order the UI should
/// apply them.
///
/// Mutations are optimistic: the attempt runs, then a refresh runs
/// unconditionally, whether or not the attempt succeeded.
fn handle<T: Transport>(client: &ApiClient<T>, command: Command) -> Vec<Update> {
    match command {
        Command::Refresh => vec![Update::Roster(client.list_players())],
        Command::FetchDetail(id) => client
            .get_player(id)
            .map(Update::Detail)
            .into_iter()
            .collect(),
        Command::Create(new_player) => {
            if let Some(body) = client.create_player(&new_player) {
                log::debug!("create response: {body}");
            }
            vec![Update::Created, Update::Roster(client.list_players())]
        }
        Command::Remove(id) => {
            client.remove_player(id);
            vec![Update::Removed(id), Update::Roster(client.list_players())]
        }
    }
}
