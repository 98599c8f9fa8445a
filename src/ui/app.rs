//! Application state: the roster snapshot, selection, focus, the detail
//! overlay, and the status log.
//!
//! `App` owns no IO. It turns key events into provider `Command`s and
//! folds provider `Update`s back into itself; the loop in `ui` drives it.

use std::sync::mpsc::Sender;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::model::{Player, PlayerId};
use crate::provider::{Command, Update};

use super::form::{FormField, PlayerForm};

/// Which pane keystrokes go to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Roster,
    Form,
}

/// Cap on retained status lines.
const STATUS_LOG_CAP: usize = 50;

/// Everything the UI knows.
pub struct App {
    commands: Sender<Command>,
    /// Latest roster snapshot; replaced wholesale on every refresh.
    pub roster: Vec<Player>,
    /// Selected card index into `roster`.
    pub selected: usize,
    pub focus: Focus,
    pub form: PlayerForm,
    /// Player shown in the detail overlay, if any.
    pub detail: Option<Player>,
    /// Recent status lines, newest last.
    pub status_log: Vec<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(commands: Sender<Command>) -> Self {
        Self {
            commands,
            roster: Vec::new(),
            selected: 0,
            focus: Focus::Roster,
            form: PlayerForm::new(),
            detail: None,
            status_log: Vec::new(),
            should_quit: false,
        }
    }

    // === Requests to the provider ===

    /// Ask for a fresh roster snapshot.
    pub fn request_refresh(&mut self) {
        self.send(Command::Refresh);
    }

    /// Ask for the selected player's details.
    pub fn request_detail(&mut self) {
        if let Some(id) = self.selected_id() {
            self.push_log(format!("[INFO] fetching details for player {id}"));
            self.send(Command::FetchDetail(id));
        }
    }

    /// Ask to remove the selected player.
    pub fn request_remove(&mut self) {
        if let Some(id) = self.selected_id() {
            self.push_log(format!("[INFO] removing player {id}"));
            self.send(Command::Remove(id));
        }
    }

    /// Validate the form and submit it.
    pub fn submit_form(&mut self) {
        match self.form.submission() {
            Ok(new_player) => {
                self.push_log(format!("[INFO] adding player {}", new_player.name));
                self.send(Command::Create(new_player));
            }
            Err(reason) => self.push_log(format!("[WARN] form not submitted: {reason}")),
        }
    }

    fn send(&mut self, command: Command) {
        if self.commands.send(command).is_err() {
            self.push_log("[WARN] provider is gone; request dropped".to_string());
        }
    }

    // === Provider updates ===

    /// Fold one provider update into the state.
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::Roster(players) => {
                let count = players.len();
                self.roster = players;
                self.clamp_selection();
                self.push_log(format!("[INFO] roster refreshed ({count} players)"));
            }
            Update::Detail(player) => {
                self.detail = Some(player);
            }
            Update::Created => {
                self.form.reset();
                self.push_log("[INFO] add request finished".to_string());
            }
            Update::Removed(id) => {
                self.push_log(format!("[INFO] remove request finished for player {id}"));
            }
        }
    }

    // === Input ===

    /// Route one key event.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // The detail overlay swallows one key to dismiss itself.
        if self.detail.is_some() {
            self.detail = None;
            return;
        }
        match self.focus {
            Focus::Roster => self.on_roster_key(key.code),
            Focus::Form => self.on_form_key(key.code),
        }
    }

    fn on_roster_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char('v') => self.request_detail(),
            KeyCode::Delete | KeyCode::Char('x') => self.request_remove(),
            KeyCode::Char('r') => {
                self.push_log("[INFO] refreshing roster".to_string());
                self.request_refresh();
            }
            KeyCode::Tab | KeyCode::Char('a') => self.focus = Focus::Form,
            _ => {}
        }
    }

    fn on_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.focus = Focus::Roster,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => {
                if self.form.focus_next() {
                    self.focus = Focus::Roster;
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if self.form.focus_prev() {
                    self.focus = Focus::Roster;
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.form.focus == FormField::Status =>
            {
                self.form.toggle_status();
            }
            KeyCode::Char(c) => self.form.insert_char(c),
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
    }

    // === Selection ===

    /// Id of the selected card, if the roster shows any.
    #[must_use]
    pub fn selected_id(&self) -> Option<PlayerId> {
        self.roster.get(self.selected).map(|p| p.id)
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.roster.len() {
            self.selected += 1;
        }
    }

    /// Keep the selection inside the roster after a snapshot swap.
    fn clamp_selection(&mut self) {
        if self.roster.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.roster.len() {
            self.selected = self.roster.len() - 1;
        }
    }

    // === Status log ===

    /// Append a timestamped status line.
    pub fn push_log(&mut self, line: String) {
        let stamped = format!("{} {}", Local::now().format("%H:%M:%S"), line);
        self.status_log.push(stamped);
        if self.status_log.len() > STATUS_LOG_CAP {
            let overflow = self.status_log.len() - STATUS_LOG_CAP;
            self.status_log.drain(..overflow);
        }
    }

    /// Latest status line, for the footer.
    #[must_use]
    pub fn last_log(&self) -> Option<&str> {
        self.status_log.last().map(String::as_str)
    }
}
