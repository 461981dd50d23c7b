use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::library::Library;
use crate::models::{Genre, Movie};

use super::forms::{GenrePicker, GenrePurpose, PromptPurpose, TextForm};
use super::helpers::{centered_rect, menu_lines, movie_lines, surface_error};
use super::screens::{Menu, MenuInput, MenuKind, ResultsScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

const INSTRUCTIONS: &[&str] = &[
    "Enter the number next to the option you want to choose,",
    "or move with the arrow keys and press ENTER.",
    "",
    "When selecting a movie for edit, the full title must be entered.",
    "Selecting a movie is not case sensitive.",
    "",
    "When searching for a movie, the query will be matched to part of",
    "a movie title i.e. man will return Batman.",
    "The search is not case sensitive.",
    "",
    "Press any key to continue to the MAIN MENU.",
];

/// High-level navigation states. Each one owns whatever it needs to draw
/// itself; the library is the only shared state.
enum Screen {
    Instructions,
    Menu(Menu),
    Results(ResultsScreen),
}

/// Modal input layered over the current screen.
enum Mode {
    Normal,
    Prompt(TextForm),
    SelectingGenre(GenrePicker),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Interactive session state: the catalog plus where the user is in the menu
/// tree. Constructed once at startup and owned by the event loop.
pub struct App {
    library: Library,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(library: Library, show_instructions: bool) -> Self {
        let screen = if show_instructions {
            Screen::Instructions
        } else {
            Screen::Menu(Menu::new(MenuKind::Main))
        };
        Self {
            library,
            screen,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Feed one key press into the state machine. Returns `true` when the user
    /// asked to exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Prompt(form) => self.handle_prompt(code, form)?,
            Mode::SelectingGenre(picker) => self.handle_genre_picker(code, picker)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match &mut self.screen {
            Screen::Instructions => {
                self.screen = Screen::Menu(Menu::new(MenuKind::Main));
                Ok(Mode::Normal)
            }
            Screen::Results(results) => {
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Up => results.move_selection(-1),
                    KeyCode::Down => results.move_selection(1),
                    KeyCode::PageUp => results.move_selection(-5),
                    KeyCode::PageDown => results.move_selection(5),
                    KeyCode::Home => results.select_first(),
                    KeyCode::End => results.select_last(),
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                        self.clear_status();
                        self.open_menu(MenuKind::View);
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Screen::Menu(menu) => {
                if code == KeyCode::Char('q') {
                    *exit = true;
                    return Ok(Mode::Normal);
                }
                let kind = menu.kind;
                match menu.handle_key(code) {
                    MenuInput::Idle => Ok(Mode::Normal),
                    MenuInput::Invalid(message) => {
                        tracing::debug!(?code, menu = ?kind, "rejected menu input");
                        self.set_status(message, StatusKind::Error);
                        Ok(Mode::Normal)
                    }
                    MenuInput::Back => {
                        if kind != MenuKind::Main {
                            self.clear_status();
                            self.open_menu(MenuKind::Main);
                        }
                        Ok(Mode::Normal)
                    }
                    MenuInput::Chosen(choice) => {
                        self.clear_status();
                        self.dispatch_menu_choice(kind, choice, exit)
                    }
                }
            }
        }
    }

    fn dispatch_menu_choice(
        &mut self,
        kind: MenuKind,
        choice: usize,
        exit: &mut bool,
    ) -> Result<Mode> {
        tracing::debug!(menu = ?kind, choice, "menu choice");
        let mode = match (kind, choice) {
            (MenuKind::Main, 1) => Mode::Prompt(TextForm::new(PromptPurpose::NewTitle)),
            (MenuKind::Main, 2) => {
                self.open_menu(MenuKind::Edit);
                Mode::Normal
            }
            (MenuKind::Main, 3) => {
                self.open_menu(MenuKind::View);
                Mode::Normal
            }
            (MenuKind::Main, 4) => {
                self.screen = Screen::Instructions;
                Mode::Normal
            }
            (MenuKind::Main, 5) => {
                tracing::info!("closing application");
                *exit = true;
                Mode::Normal
            }
            (MenuKind::Edit, 1) => Mode::Prompt(TextForm::new(PromptPurpose::PickForRename)),
            (MenuKind::Edit, 2) => Mode::Prompt(TextForm::new(PromptPurpose::PickForRegenre)),
            (MenuKind::Edit, 3) => Mode::Prompt(TextForm::new(PromptPurpose::PickForRemoval)),
            (MenuKind::View, 1) => Mode::Prompt(TextForm::new(PromptPurpose::Search)),
            (MenuKind::View, 2) => {
                let movies = self.library.all_by_genre();
                self.show_results("All movies sorted by genre", movies);
                Mode::Normal
            }
            (MenuKind::View, 3) => {
                let movies = self.library.all_by_title().to_vec();
                self.show_results("All movies sorted by title", movies);
                Mode::Normal
            }
            (MenuKind::View, 4) => Mode::SelectingGenre(GenrePicker::new(GenrePurpose::Filter)),
            (MenuKind::Edit, 4) | (MenuKind::View, 5) => {
                self.set_status("Returning to MAIN MENU", StatusKind::Info);
                self.open_menu(MenuKind::Main);
                Mode::Normal
            }
            _ => Mode::Normal,
        };
        Ok(mode)
    }

    fn handle_prompt(&mut self, code: KeyCode, mut form: TextForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status(form.purpose.cancelled_message(), StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Backspace => {
                form.backspace();
                Ok(Mode::Prompt(form))
            }
            KeyCode::Enter => match self.submit_prompt(form) {
                Ok(mode) => Ok(mode),
                Err(err) => {
                    tracing::warn!(error = %err, "prompt rejected");
                    self.set_status(surface_error(&err), StatusKind::Error);
                    Ok(Mode::Normal)
                }
            },
            KeyCode::Char(ch) => {
                form.push_char(ch);
                Ok(Mode::Prompt(form))
            }
            _ => Ok(Mode::Prompt(form)),
        }
    }

    /// Act on a completed prompt. Lookups that find nothing abort the flow
    /// with an error status and drop back to the current menu.
    fn submit_prompt(&mut self, form: TextForm) -> Result<Mode> {
        let TextForm { purpose, value } = form;
        match purpose {
            PromptPurpose::NewTitle => {
                if self.library.has_title(&value) {
                    self.set_status("Movie already added!", StatusKind::Error);
                    return Ok(Mode::Normal);
                }
                if value.is_empty() {
                    self.set_status(
                        "Please enter a movie title to create a movie entry!",
                        StatusKind::Error,
                    );
                    return Ok(Mode::Normal);
                }
                Ok(Mode::SelectingGenre(GenrePicker::new(
                    GenrePurpose::NewMovie { title: value },
                )))
            }
            PromptPurpose::PickForRename => match self.library.find_exact(&value) {
                Some(movie) => {
                    let current = movie.title().to_string();
                    Ok(Mode::Prompt(TextForm::with_value(
                        PromptPurpose::Rename {
                            current: current.clone(),
                        },
                        current,
                    )))
                }
                None => Ok(self.no_such_movie()),
            },
            PromptPurpose::Rename { current } => {
                let renamed = self
                    .library
                    .update(&current, |movie| movie.set_title(value.as_str()))
                    .context("failed to rename movie")?;
                tracing::info!(from = %current, to = %renamed.title(), "renamed movie");
                self.set_status(
                    format!("{current} is now titled {}", renamed.title()),
                    StatusKind::Info,
                );
                Ok(Mode::Normal)
            }
            PromptPurpose::PickForRegenre => match self.library.find_exact(&value) {
                Some(movie) => Ok(Mode::SelectingGenre(GenrePicker::new(
                    GenrePurpose::Regenre {
                        title: movie.title().to_string(),
                    },
                ))),
                None => Ok(self.no_such_movie()),
            },
            PromptPurpose::PickForRemoval => match self.library.find_exact(&value).cloned() {
                Some(movie) => {
                    let removed = self.library.remove(&movie);
                    tracing::info!(title = %movie.title(), removed, "removed movie");
                    self.set_status(
                        format!("{} was successfully removed", movie.title()),
                        StatusKind::Info,
                    );
                    Ok(Mode::Normal)
                }
                None => Ok(self.no_such_movie()),
            },
            PromptPurpose::Search => {
                let matches = self.library.search(&value);
                tracing::debug!(query = %value, hits = matches.len(), "search");
                self.show_results(format!("Search results for \"{value}\""), matches);
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_genre_picker(&mut self, code: KeyCode, mut picker: GenrePicker) -> Result<Mode> {
        match picker.menu.handle_key(code) {
            MenuInput::Idle => Ok(Mode::SelectingGenre(picker)),
            MenuInput::Invalid(message) => {
                self.set_status(message, StatusKind::Error);
                Ok(Mode::SelectingGenre(picker))
            }
            MenuInput::Back => {
                self.set_status(picker.cancelled_message(), StatusKind::Info);
                Ok(Mode::Normal)
            }
            MenuInput::Chosen(choice) => match Genre::from_menu_choice(choice) {
                Some(genre) => {
                    self.clear_status();
                    self.apply_genre(picker.purpose, genre)?;
                    Ok(Mode::Normal)
                }
                None => Ok(Mode::SelectingGenre(picker)),
            },
        }
    }

    fn apply_genre(&mut self, purpose: GenrePurpose, genre: Genre) -> Result<()> {
        let label = genre.label().trim_end();
        match purpose {
            GenrePurpose::NewMovie { title } => {
                self.library.add(Movie::new(title.as_str(), genre));
                tracing::info!(%title, genre = genre.name(), "added movie");
                self.set_status(format!("{title} added to {label}"), StatusKind::Info);
            }
            GenrePurpose::Regenre { title } => {
                if let Err(err) = self
                    .library
                    .update(&title, |movie| movie.set_genre(genre))
                    .context("failed to change genre")
                {
                    self.set_status(surface_error(&err), StatusKind::Error);
                    return Ok(());
                }
                tracing::info!(%title, genre = genre.name(), "changed genre");
                self.set_status(format!("{title} is now added to {label}"), StatusKind::Info);
            }
            GenrePurpose::Filter => {
                let movies = self.library.find_by_genre(genre);
                self.show_results(format!("{label} movies"), movies);
            }
        }
        Ok(())
    }

    fn no_such_movie(&mut self) -> Mode {
        self.set_status("No movie by that name...", StatusKind::Error);
        Mode::Normal
    }

    fn open_menu(&mut self, kind: MenuKind) {
        self.screen = Screen::Menu(Menu::new(kind));
    }

    fn show_results(&mut self, heading: impl Into<String>, movies: Vec<Movie>) {
        self.screen = Screen::Results(ResultsScreen::new(heading, movies));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Instructions => self.draw_instructions(frame, content_area),
            Screen::Menu(menu) => self.draw_menu_screen(frame, content_area, menu),
            Screen::Results(results) => self.draw_results(frame, content_area, results),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Prompt(form) => self.draw_prompt(frame, area, form),
            Mode::SelectingGenre(picker) => self.draw_genre_picker(frame, area, picker),
            Mode::Normal => {}
        }
    }

    fn draw_instructions(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = INSTRUCTIONS.iter().map(|line| Line::from(*line)).collect();
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(":: INSTRUCTIONS ::")
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    /// Menus sit on the left; the edit menu also lists the catalog on the
    /// right, since every edit action asks for a full title.
    fn draw_menu_screen(&self, frame: &mut Frame, area: Rect, menu: &Menu) {
        let menu_block = Block::default()
            .title(menu.kind.heading())
            .borders(Borders::ALL);

        if menu.kind != MenuKind::Edit {
            let paragraph = Paragraph::new(menu_lines(menu)).block(menu_block);
            frame.render_widget(paragraph, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        frame.render_widget(Paragraph::new(menu_lines(menu)).block(menu_block), chunks[0]);

        let catalog = Paragraph::new(movie_lines(self.library.all_by_title())).block(
            Block::default()
                .title(format!("Library ({})", self.library.len()))
                .borders(Borders::ALL),
        );
        frame.render_widget(catalog, chunks[1]);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect, results: &ResultsScreen) {
        let block = Block::default()
            .title(results.heading.clone())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (start, end) = results.visible_range(inner.height as usize);
        let mut lines = movie_lines(&results.movies[start..end]);
        if end > start {
            let highlight = results.selected - start;
            if let Some(line) = lines.get_mut(highlight) {
                *line = line.clone().style(Style::default().fg(Color::Yellow));
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Prompt(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::SelectingGenre(_)) => Line::from(vec![
                Span::styled("[1-5]", key_style),
                Span::raw(" Pick genre   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Instructions, _) => Line::from(vec![
                Span::styled("[Any key]", key_style),
                Span::raw(" Continue"),
            ]),
            (Screen::Results(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Menu(_), _) => Line::from(vec![
                Span::styled("[1-9]", key_style),
                Span::raw(" Choose   "),
                Span::styled("[↑↓ Enter]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_prompt(&self, frame: &mut Frame, area: Rect, form: &TextForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(form.purpose.heading())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            form.build_line(),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to confirm • Esc to cancel",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        let prefix = form.prefix().chars().count() as u16;
        frame.set_cursor_position((inner.x + prefix + form.value_len() as u16, inner.y));
    }

    fn draw_genre_picker(&self, frame: &mut Frame, area: Rect, picker: &GenrePicker) {
        let popup_area = centered_rect(40, 40, area);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(menu_lines(&picker.menu)).block(
            Block::default()
                .title(picker.menu.kind.heading())
                .borders(Borders::ALL),
        );
        frame.render_widget(paragraph, popup_area);
    }
}
