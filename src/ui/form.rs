//! The add-player form.
//!
//! Three required text fields and a bench-or-field selector (bench
//! first). Values stay put while a submission is in flight; the form
//! clears once the attempt completes.

use crate::model::{NewPlayer, PlayerStatus};

/// Which form field has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Breed,
    Status,
    ImageUrl,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [FormField; 4] = [Self::Name, Self::Breed, Self::Status, Self::ImageUrl];

    /// Field label as shown on screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Breed => "Breed",
            Self::Status => "Status",
            Self::ImageUrl => "Image URL",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Breed => 1,
            Self::Status => 2,
            Self::ImageUrl => 3,
        }
    }
}

/// Form state. Keystrokes land in whichever field `focus` names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerForm {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
    pub focus: FormField,
}

impl PlayerForm {
    /// Fresh, empty form; the status selector starts on bench.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus forward; `true` when focus wrapped past the last field.
    pub fn focus_next(&mut self) -> bool {
        let next = self.focus.index() + 1;
        if next >= FormField::ALL.len() {
            self.focus = FormField::Name;
            true
        } else {
            self.focus = FormField::ALL[next];
            false
        }
    }

    /// Move focus backward; `true` when focus wrapped past the first field.
    pub fn focus_prev(&mut self) -> bool {
        match self.focus.index() {
            0 => {
                self.focus = FormField::ImageUrl;
                true
            }
            i => {
                self.focus = FormField::ALL[i - 1];
                false
            }
        }
    }

    /// Type a character into the focused field (no-op on the selector).
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Breed => self.breed.push(c),
            FormField::Status => {}
            FormField::ImageUrl => self.image_url.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Breed => {
                self.breed.pop();
            }
            FormField::Status => {}
            FormField::ImageUrl => {
                self.image_url.pop();
            }
        }
    }

    /// Flip the status selector.
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Validate the fields and produce the submission payload.
    ///
    /// Every field is required, and the image URL must at least name an
    /// http(s) scheme. Errors name the offending field.
    pub fn submission(&self) -> Result<NewPlayer, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("name is required".to_string());
        }
        let breed = self.breed.trim();
        if breed.is_empty() {
            return Err("breed is required".to_string());
        }
        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err("image URL is required".to_string());
        }
        if !looks_like_url(image_url) {
            return Err("image URL must start with http:// or https://".to_string());
        }

        Ok(NewPlayer {
            name: name.to_string(),
            breed: breed.to_string(),
            status: self.status,
            image_url: image_url.to_string(),
        })
    }

    /// Clear every field, keeping focus where it was.
    pub fn reset(&mut self) {
        let focus = self.focus;
        *self = Self {
            focus,
            ..Self::default()
        };
    }

    /// Display value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Breed => self.breed.clone(),
            FormField::Status => self.status.to_string(),
            FormField::ImageUrl => self.image_url.clone(),
        }
    }
}

fn looks_like_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
