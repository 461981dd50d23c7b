use std::cmp::min;

use crossterm::event::KeyCode;

use crate::models::Movie;

/// Shown when a non-digit key is pressed on a numbered menu.
pub(crate) const NOT_A_NUMBER: &str = "Enter a number that corresponds with a menu choice!";
/// Shown when a digit outside the menu's range is pressed.
pub(crate) const NOT_AVAILABLE: &str = "Your choice is not available! choose another.";

/// The numbered menus the shell can display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MenuKind {
    Main,
    Edit,
    View,
    Genre,
}

impl MenuKind {
    pub(crate) fn heading(self) -> &'static str {
        match self {
            MenuKind::Main => ":: MAIN MENU ::",
            MenuKind::Edit => ":: EDIT LIBRARY ::",
            MenuKind::View => ":: VIEW LIBRARY ::",
            MenuKind::Genre => ":: SELECT GENRE ::",
        }
    }

    pub(crate) fn options(self) -> &'static [&'static str] {
        match self {
            MenuKind::Main => &[
                ">> Add new movie",
                ">> Edit library",
                ">> View library",
                ">> Instructions",
                "<< Exit",
            ],
            MenuKind::Edit => &[
                ">> Edit movie title",
                ">> Edit genre for title",
                ">> Remove movie",
                ">> Return to MAIN MENU",
            ],
            MenuKind::View => &[
                ">> Search for title",
                ">> Show all sorted by genre",
                ">> Show all sorted by title",
                ">> Show by genre",
                ">> Return to MAIN MENU",
            ],
            MenuKind::Genre => &[
                ">> Action",
                ">> Thriller",
                ">> Horror",
                ">> Drama",
                ">> Comedy",
            ],
        }
    }
}

/// Outcome of feeding one key into a menu.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MenuInput {
    /// Nothing to act on (navigation or an ignored key).
    Idle,
    /// A 1-based option was picked.
    Chosen(usize),
    /// The key was rejected; the menu stays open.
    Invalid(&'static str),
    /// Esc: leave the menu.
    Back,
}

/// Cursor state for a numbered menu.
#[derive(Clone, Debug)]
pub(crate) struct Menu {
    pub(crate) kind: MenuKind,
    pub(crate) selected: usize,
}

impl Menu {
    pub(crate) fn new(kind: MenuKind) -> Self {
        Self { kind, selected: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.kind.options().len()
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        let len = self.len() as isize;
        if len == 0 {
            return;
        }
        self.selected = (self.selected as isize + offset).rem_euclid(len) as usize;
    }

    /// Translate a key press into a menu event. Digits pick an option
    /// directly; arrows move the cursor and Enter picks the highlighted one.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> MenuInput {
        match code {
            KeyCode::Up => {
                self.move_selection(-1);
                MenuInput::Idle
            }
            KeyCode::Down | KeyCode::Tab => {
                self.move_selection(1);
                MenuInput::Idle
            }
            KeyCode::Home => {
                self.selected = 0;
                MenuInput::Idle
            }
            KeyCode::End => {
                self.selected = self.len().saturating_sub(1);
                MenuInput::Idle
            }
            KeyCode::Enter => MenuInput::Chosen(self.selected + 1),
            KeyCode::Esc => MenuInput::Back,
            KeyCode::Char(ch) => match ch.to_digit(10) {
                Some(digit) if (1..=self.len()).contains(&(digit as usize)) => {
                    self.selected = digit as usize - 1;
                    MenuInput::Chosen(digit as usize)
                }
                Some(_) => MenuInput::Invalid(NOT_AVAILABLE),
                None => MenuInput::Invalid(NOT_A_NUMBER),
            },
            _ => MenuInput::Idle,
        }
    }
}

/// A rendered list of movies produced by one of the view options.
pub(crate) struct ResultsScreen {
    pub(crate) heading: String,
    pub(crate) movies: Vec<Movie>,
    pub(crate) selected: usize,
}

impl ResultsScreen {
    pub(crate) fn new(heading: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            heading: heading.into(),
            movies,
            selected: 0,
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.movies.is_empty() {
            self.selected = 0;
            return;
        }
        let max_index = self.movies.len() as isize - 1;
        let next = (self.selected as isize + offset).clamp(0, max_index);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.movies.len().saturating_sub(1);
    }

    /// Index window that keeps the selection visible within `height` rows.
    pub(crate) fn visible_range(&self, height: usize) -> (usize, usize) {
        let len = self.movies.len();
        if height == 0 || len == 0 {
            return (0, 0);
        }
        let start = if self.selected >= height {
            self.selected + 1 - height
        } else {
            0
        };
        (start, min(start + height, len))
    }
}
