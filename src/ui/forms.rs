use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::screens::{Menu, MenuKind};

/// What a free-text prompt is collecting, and therefore what Enter does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PromptPurpose {
    /// Title for a brand-new movie.
    NewTitle,
    /// Full title of the movie to rename.
    PickForRename,
    /// Full title of the movie to re-genre.
    PickForRegenre,
    /// Full title of the movie to remove.
    PickForRemoval,
    /// Replacement title for `current`.
    Rename { current: String },
    /// Substring to search for.
    Search,
}

impl PromptPurpose {
    pub(crate) fn heading(&self) -> &'static str {
        match self {
            PromptPurpose::NewTitle => ":: ADD MOVIE ::",
            PromptPurpose::PickForRename | PromptPurpose::Rename { .. } => ":: EDIT TITLE ::",
            PromptPurpose::PickForRegenre => ":: EDIT GENRE ::",
            PromptPurpose::PickForRemoval => ":: REMOVE MOVIE ::",
            PromptPurpose::Search => ":: SEARCH ::",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            PromptPurpose::NewTitle => "Enter the movie title",
            PromptPurpose::PickForRename | PromptPurpose::PickForRegenre => {
                "Full title of the movie to edit"
            }
            PromptPurpose::PickForRemoval => "Full title of the movie to remove",
            PromptPurpose::Rename { .. } => "Rename to",
            PromptPurpose::Search => "Search for movie",
        }
    }

    pub(crate) fn cancelled_message(&self) -> &'static str {
        match self {
            PromptPurpose::NewTitle => "Add movie cancelled.",
            PromptPurpose::Search => "Search cancelled.",
            _ => "Edit cancelled.",
        }
    }
}

/// Single-line text input shown in a modal.
#[derive(Clone, Debug)]
pub(crate) struct TextForm {
    pub(crate) purpose: PromptPurpose,
    pub(crate) value: String,
}

impl TextForm {
    pub(crate) fn new(purpose: PromptPurpose) -> Self {
        Self {
            purpose,
            value: String::new(),
        }
    }

    /// Seed the input, e.g. with the current title when renaming.
    pub(crate) fn with_value(purpose: PromptPurpose, value: impl Into<String>) -> Self {
        Self {
            purpose,
            value: value.into(),
        }
    }

    /// Append a character, ignoring control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
    }

    pub(crate) fn prefix(&self) -> String {
        format!("{}: ", self.purpose.label())
    }

    /// Render the input line, greying out an empty value.
    pub(crate) fn build_line(&self) -> Line<'static> {
        let (display, style) = if self.value.is_empty() {
            ("<empty>".to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.value.clone(), Style::default().fg(Color::Yellow))
        };
        Line::from(vec![Span::raw(self.prefix()), Span::styled(display, style)])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Where a picked genre goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GenrePurpose {
    /// Tag the movie being created under `title`.
    NewMovie { title: String },
    /// Re-tag the stored movie titled `title`.
    Regenre { title: String },
    /// List every movie with the picked genre.
    Filter,
}

/// Genre submenu shown as a modal over the current screen.
#[derive(Clone, Debug)]
pub(crate) struct GenrePicker {
    pub(crate) purpose: GenrePurpose,
    pub(crate) menu: Menu,
}

impl GenrePicker {
    pub(crate) fn new(purpose: GenrePurpose) -> Self {
        Self {
            purpose,
            menu: Menu::new(MenuKind::Genre),
        }
    }

    pub(crate) fn cancelled_message(&self) -> &'static str {
        match self.purpose {
            GenrePurpose::NewMovie { .. } => "Add movie cancelled.",
            GenrePurpose::Regenre { .. } => "Edit cancelled.",
            GenrePurpose::Filter => "Returning to VIEW LIBRARY.",
        }
    }
}
