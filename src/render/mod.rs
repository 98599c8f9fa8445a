//! Text rendering of roster data.
//!
//! Pure functions from fetched data to display text. The terminal layer
//! decides where the text goes; nothing in here touches the screen.

pub mod cards;
pub mod details;

pub use cards::{player_card, roster_cards, roster_text, Card, EMPTY_ROSTER_NOTICE, MISSING};
pub use details::{detail_lines, detail_text, team_label};
