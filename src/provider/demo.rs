//! Offline roster provider for `--demo` runs and tests.
//!
//! Serves the same command/update protocol as the live provider from a
//! seeded in-memory roster, so the UI cannot tell the difference.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use chrono::Utc;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::model::{NewPlayer, Player, PlayerId, PlayerStatus};

use super::{Command, Update};

const NAMES: &[&str] = &[
    "Biscuit",
    "Waffles",
    "Pepper",
    "Maple",
    "Ziggy",
    "Clementine",
    "Noodle",
    "Tater",
    "Mochi",
    "Banjo",
];

const BREEDS: &[&str] = &[
    "Labrador Retriever",
    "Corgi",
    "Beagle",
    "Great Dane",
    "Dachshund",
    "Border Collie",
    "Pomeranian",
    "Samoyed",
];

/// Starting roster size for a demo run.
pub const DEMO_ROSTER_SIZE: usize = 6;

/// In-memory stand-in for the remote roster.
pub struct DemoRoster {
    players: Vec<Player>,
    next_id: u64,
}

impl DemoRoster {
    /// Seeded roster; the same seed always produces the same pups.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut players = Vec::with_capacity(DEMO_ROSTER_SIZE);
        for i in 0..DEMO_ROSTER_SIZE {
            let id = i as u64 + 1;
            let name = *NAMES.choose(&mut rng).unwrap_or(&NAMES[0]);
            let breed = *BREEDS.choose(&mut rng).unwrap_or(&BREEDS[0]);
            let status = if rng.gen_bool(0.5) {
                PlayerStatus::Field
            } else {
                PlayerStatus::Bench
            };
            players.push(
                Player::new(PlayerId::new(id), name, breed, status)
                    .with_image_url(format!("https://place.dog/300/{}", 200 + id)),
            );
        }
        Self {
            players,
            next_id: DEMO_ROSTER_SIZE as u64 + 1,
        }
    }

    /// Handle one command exactly as the live provider would, including
    /// the refresh after every mutation.
    pub fn handle(&mut self, command: Command) -> Vec<Update> {
        match command {
            Command::Refresh => vec![Update::Roster(self.players.clone())],
            Command::FetchDetail(id) => self
                .players
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .map(Update::Detail)
                .into_iter()
                .collect(),
            Command::Create(new_player) => {
                self.insert(new_player);
                vec![Update::Created, Update::Roster(self.players.clone())]
            }
            Command::Remove(id) => {
                self.players.retain(|p| p.id != id);
                vec![Update::Removed(id), Update::Roster(self.players.clone())]
            }
        }
    }

    fn insert(&mut self, new_player: NewPlayer) {
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        let now = Utc::now().to_rfc3339();

        let mut player = Player::new(id, new_player.name, new_player.breed, new_player.status);
        if !new_player.image_url.is_empty() {
            player.image_url = Some(new_player.image_url);
        }
        player.created_at = Some(now.clone());
        player.updated_at = Some(now);
        self.players.push(player);
    }

    /// Current roster snapshot.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

/// Spawn the demo provider. Exits when the command channel closes.
pub fn spawn_demo(
    seed: u64,
    commands: Receiver<Command>,
    updates: Sender<Update>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut roster = DemoRoster::new(seed);
        while let Ok(command) = commands.recv() {
            for update in roster.handle(command) {
                if updates.send(update).is_err() {
                    return;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_player() -> NewPlayer {
        NewPlayer {
            name: "Rex".to_string(),
            breed: "Pug".to_string(),
            status: PlayerStatus::Field,
            image_url: "https://example.com/rex.jpg".to_string(),
        }
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = DemoRoster::new(11);
        let b = DemoRoster::new(11);
        assert_eq!(a.players(), b.players());
        assert_eq!(a.players().len(), DEMO_ROSTER_SIZE);
    }

    #[test]
    fn test_create_then_fetch_round_trip() {
        let mut roster = DemoRoster::new(1);

        let updates = roster.handle(Command::Create(new_player()));
        assert!(matches!(updates[0], Update::Created));
        let Update::Roster(snapshot) = &updates[1] else {
            panic!("expected a roster snapshot after create");
        };
        assert_eq!(snapshot.len(), DEMO_ROSTER_SIZE + 1);

        let rex = snapshot.last().unwrap();
        assert_eq!(rex.name, "Rex");
        assert_eq!(rex.status, PlayerStatus::Field);
        assert!(rex.created_at.is_some());

        let detail = roster.handle(Command::FetchDetail(rex.id));
        assert!(matches!(&detail[0], Update::Detail(player) if player.id == rex.id));
    }

    #[test]
    fn test_remove_then_refresh_sequence() {
        let mut roster = DemoRoster::new(1);
        let gone = roster.players()[0].id;

        let updates = roster.handle(Command::Remove(gone));
        assert_eq!(updates[0], Update::Removed(gone));
        let Update::Roster(snapshot) = &updates[1] else {
            panic!("expected a roster snapshot after remove");
        };
        assert_eq!(snapshot.len(), DEMO_ROSTER_SIZE - 1);
        assert!(snapshot.iter().all(|p| p.id != gone));
    }

    #[test]
    fn test_detail_of_unknown_player_yields_nothing() {
        let mut roster = DemoRoster::new(1);
        let updates = roster.handle(Command::FetchDetail(PlayerId::new(999)));
        assert!(updates.is_empty());
    }
}
