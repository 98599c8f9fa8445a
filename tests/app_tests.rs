//! App-level flows over the demo provider.
//!
//! Same command/update plumbing the binary wires up, without a terminal:
//! - Startup refresh fills the roster
//! - Add a player end to end (type, submit, refresh, detail)
//! - Remove a player and watch the snapshot shrink
//! - Selection survives snapshot swaps

use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use puppy_bowl::provider::demo::{spawn_demo, DEMO_ROSTER_SIZE};
use puppy_bowl::provider::Update;
use puppy_bowl::ui::{App, Focus};
use puppy_bowl::PlayerStatus;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
}

/// Apply the next `count` provider updates to the app.
fn pump(app: &mut App, updates: &Receiver<Update>, count: usize) {
    for _ in 0..count {
        let update = updates
            .recv_timeout(Duration::from_secs(2))
            .expect("provider update");
        app.apply(update);
    }
}

fn demo_app(seed: u64) -> (App, Receiver<Update>) {
    let (command_tx, command_rx) = channel();
    let (update_tx, update_rx) = channel();
    spawn_demo(seed, command_rx, update_tx);
    (App::new(command_tx), update_rx)
}

/// The startup refresh produces the seeded roster.
#[test]
fn test_startup_refresh_fills_roster() {
    let (mut app, updates) = demo_app(7);
    assert!(app.roster.is_empty());

    app.request_refresh();
    pump(&mut app, &updates, 1);

    assert_eq!(app.roster.len(), DEMO_ROSTER_SIZE);
    assert_eq!(app.selected, 0);
}

/// Fill the form with key events, submit, and find the new player in
/// the refreshed snapshot and in the detail overlay.
#[test]
fn test_add_player_end_to_end() {
    let (mut app, updates) = demo_app(42);
    app.request_refresh();
    pump(&mut app, &updates, 1);

    // Tab into the form, fill it out field by field.
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Form);
    type_str(&mut app, "Rex");
    app.on_key(key(KeyCode::Tab));
    type_str(&mut app, "Pug");
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Char(' '))); // bench -> field
    app.on_key(key(KeyCode::Tab));
    type_str(&mut app, "https://example.com/rex.jpg");
    app.on_key(key(KeyCode::Enter));

    // Values stay put until the attempt completes.
    assert_eq!(app.form.name, "Rex");

    pump(&mut app, &updates, 2); // Created, then the fresh snapshot
    assert_eq!(app.form.name, "", "form clears when the attempt completes");
    assert_eq!(app.roster.len(), DEMO_ROSTER_SIZE + 1);

    let rex = app.roster.last().expect("rex joined the roster").clone();
    assert_eq!(rex.name, "Rex");
    assert_eq!(rex.breed, "Pug");
    assert_eq!(rex.status, PlayerStatus::Field);

    // View details for the newcomer.
    app.focus = Focus::Roster;
    app.selected = app.roster.len() - 1;
    app.on_key(key(KeyCode::Enter));
    pump(&mut app, &updates, 1);

    let detail = app.detail.as_ref().expect("detail overlay is open");
    assert_eq!(detail.id, rex.id);
    assert_eq!(
        detail.image_url.as_deref(),
        Some("https://example.com/rex.jpg")
    );
    assert!(detail.created_at.is_some());
}

/// Removing the selected player shrinks the next snapshot and the
/// selection stays in bounds.
#[test]
fn test_remove_player_end_to_end() {
    let (mut app, updates) = demo_app(3);
    app.request_refresh();
    pump(&mut app, &updates, 1);

    // Select the last card, then remove it.
    app.selected = app.roster.len() - 1;
    let gone = app.roster[app.selected].id;
    app.on_key(key(KeyCode::Char('x')));
    pump(&mut app, &updates, 2); // Removed, then the fresh snapshot

    assert_eq!(app.roster.len(), DEMO_ROSTER_SIZE - 1);
    assert!(app.roster.iter().all(|p| p.id != gone));
    assert_eq!(app.selected, app.roster.len() - 1, "selection clamped");
}

/// Every mutation ends in a snapshot swap, so stale local edits never
/// survive: two refreshes in a row land in arrival order.
#[test]
fn test_snapshots_apply_in_arrival_order() {
    let (mut app, updates) = demo_app(9);

    app.request_refresh();
    app.on_key(key(KeyCode::Char('x'))); // no-op on an empty roster
    app.request_refresh();
    pump(&mut app, &updates, 2);

    assert_eq!(app.roster.len(), DEMO_ROSTER_SIZE);
}

/// The detail overlay closes on the next key without leaking it into
/// the roster pane.
#[test]
fn test_detail_overlay_close_is_inert() {
    let (mut app, updates) = demo_app(5);
    app.request_refresh();
    pump(&mut app, &updates, 1);

    app.on_key(key(KeyCode::Enter));
    pump(&mut app, &updates, 1);
    assert!(app.detail.is_some());

    app.on_key(key(KeyCode::Char('x'))); // closes the overlay, removes nothing
    assert!(app.detail.is_none());
    assert!(
        updates.try_recv().is_err(),
        "closing the overlay sent no command"
    );
    assert_eq!(app.roster.len(), DEMO_ROSTER_SIZE);
}
