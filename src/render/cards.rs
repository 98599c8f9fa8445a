//! Player cards, one per roster entry, in roster order.
//!
//! Rendering is pure and total: the same roster always produces the same
//! cards, missing fields render as placeholders, and an empty roster
//! renders a notice instead of nothing. Each redraw replaces the whole
//! roster view; no per-card state survives.

use crate::model::{Player, PlayerId};

/// Notice shown instead of cards when the roster is empty.
pub const EMPTY_ROSTER_NOTICE: &str = "No players on the roster yet.";

/// Placeholder for optional fields with nothing to show.
pub const MISSING: &str = "-";

/// One rendered roster card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Which player this card shows; drives the per-card actions.
    pub id: PlayerId,
    /// Headline: the player's name.
    pub title: String,
    /// Body lines under the headline.
    pub lines: Vec<String>,
}

impl Card {
    /// The card as plain text: title line, then body lines.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push_str(&self.title);
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// Render a single player card.
#[must_use]
pub fn player_card(player: &Player) -> Card {
    Card {
        id: player.id,
        title: player.name.clone(),
        lines: vec![
            format!("Breed: {}", player.breed),
            format!("Status: {}", player.status),
            format!("Image: {}", player.image_url.as_deref().unwrap_or(MISSING)),
        ],
    }
}

/// Render every player, in the order given.
#[must_use]
pub fn roster_cards(players: &[Player]) -> Vec<Card> {
    players.iter().map(player_card).collect()
}

/// The whole roster as one text block, cards separated by blank lines.
#[must_use]
pub fn roster_text(players: &[Player]) -> String {
    if players.is_empty() {
        return EMPTY_ROSTER_NOTICE.to_string();
    }
    roster_cards(players)
        .iter()
        .map(Card::text)
        .collect::<Vec<_>>()
        .join("\n\n")
}
