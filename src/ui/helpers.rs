use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Movie;

use super::screens::Menu;

/// Printed in place of an empty movie list.
pub(crate) const NO_MATCH: &str = "No match found!";

/// Build the numbered option lines for a menu, highlighting the cursor.
pub(crate) fn menu_lines(menu: &Menu) -> Vec<Line<'static>> {
    menu.kind
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let text = format!("{}. {}", index + 1, option);
            if index == menu.selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect()
}

/// One rendered line per movie, or the "no match" notice for an empty list.
pub(crate) fn movie_lines(movies: &[Movie]) -> Vec<Line<'static>> {
    if movies.is_empty() {
        return vec![Line::from(Span::styled(
            NO_MATCH,
            Style::default().fg(Color::DarkGray),
        ))];
    }
    movies
        .iter()
        .map(|movie| Line::from(movie.render()))
        .collect()
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;
    use crate::error::LibraryError;
    use crate::models::Genre;
    use crate::ui::screens::MenuKind;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_menu_lines_are_numbered() {
        let lines = menu_lines(&Menu::new(MenuKind::Main));
        assert_eq!(lines.len(), 5);
        assert_eq!(plain(&lines[0]), "1. >> Add new movie");
        assert_eq!(plain(&lines[4]), "5. << Exit");
    }

    #[test]
    fn test_movie_lines_empty_list() {
        let lines = movie_lines(&[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), NO_MATCH);
    }

    #[test]
    fn test_movie_lines_render_each_movie() {
        let lines = movie_lines(&[Movie::new("Heat", Genre::Thriller)]);
        assert_eq!(plain(&lines[0]), "Thriller - Heat");
    }

    #[test]
    fn test_surface_error_prefers_root_cause() {
        let err = Err::<(), _>(LibraryError::NotFound {
            title: "Heat".to_string(),
        })
        .context("failed to rename movie")
        .unwrap_err();
        assert_eq!(
            surface_error(&err),
            "No movie titled \"Heat\" in the library."
        );
    }
}
