//! Domain models that the library owns and the TUI renders. The types stay
//! light-weight data holders so the collection logic in `library` and the
//! presentation code in `ui` can each focus on their own job.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{LibraryError, Result};

/// The closed set of genre tags a movie can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Thriller,
    Horror,
    Drama,
    Comedy,
}

impl Genre {
    /// Every genre in the order the genre picker lists them.
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Thriller,
        Genre::Horror,
        Genre::Drama,
        Genre::Comedy,
    ];

    /// Upper-case tag name. The "by genre" ordering compares these names, so
    /// COMEDY sorts before THRILLER regardless of declaration order.
    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Thriller => "THRILLER",
            Genre::Horror => "HORROR",
            Genre::Drama => "DRAMA",
            Genre::Comedy => "COMEDY",
        }
    }

    /// Fixed-width display label. Every label is eight columns wide so
    /// rendered movie lines align in a list.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action  ",
            Genre::Thriller => "Thriller",
            Genre::Horror => "Horror  ",
            Genre::Drama => "Drama   ",
            Genre::Comedy => "Comedy  ",
        }
    }

    /// Map a 1-based genre menu choice to its tag.
    pub fn from_menu_choice(choice: usize) -> Option<Genre> {
        choice
            .checked_sub(1)
            .and_then(|index| Genre::ALL.get(index).copied())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry.
///
/// Equality is structural over title (case-sensitive) and genre. The type
/// deliberately has no `Ord` impl: its natural order looks at the title only,
/// which would disagree with `Eq`. Use [`Movie::cmp_title`] or
/// [`Movie::cmp_by_genre`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Movie {
    title: String,
    genre: Genre,
}

impl Movie {
    pub fn new(title: impl Into<String>, genre: Genre) -> Self {
        Self {
            title: title.into(),
            genre,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. No validation happens here; uniqueness and
    /// non-emptiness are only checked when a movie is first added.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    /// Compose the `<genre-label> - <title>` line shown in every list.
    pub fn render(&self) -> String {
        format!("{} - {}", self.genre.label(), self.title)
    }

    /// Natural order: ascending by title, case-sensitive, codepoint order.
    pub fn cmp_title(&self, other: &Movie) -> Ordering {
        self.title.cmp(&other.title)
    }

    /// Natural order against a counterpart that may be missing. An absent
    /// counterpart has no defined position, so it is rejected.
    pub fn try_cmp_title(&self, other: Option<&Movie>) -> Result<Ordering> {
        other
            .map(|other| self.cmp_title(other))
            .ok_or(LibraryError::InvalidArgument(
                "cannot compare a movie title against a missing movie",
            ))
    }

    /// Secondary order: genre tag name ascending, then title ignoring case.
    pub fn cmp_by_genre(&self, other: &Movie) -> Ordering {
        self.genre
            .name()
            .cmp(other.genre.name())
            .then_with(|| {
                self.title
                    .to_lowercase()
                    .cmp(&other.title.to_lowercase())
            })
    }
}

impl fmt::Display for Movie {
    /// Same text as [`Movie::render`], so the type drops straight into
    /// Ratatui widgets that take strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.genre.label(), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pads_genre_label() {
        let movie = Movie::new("Alien", Genre::Horror);
        assert_eq!(movie.render(), "Horror   - Alien");
        assert_eq!(movie.to_string(), movie.render());
        assert_eq!(
            Movie::new("Heat", Genre::Thriller).render(),
            "Thriller - Heat"
        );
    }

    #[test]
    fn test_labels_share_width() {
        for genre in Genre::ALL {
            assert_eq!(genre.label().len(), 8, "{genre:?}");
        }
    }

    #[test]
    fn test_from_menu_choice() {
        assert_eq!(Genre::from_menu_choice(1), Some(Genre::Action));
        assert_eq!(Genre::from_menu_choice(5), Some(Genre::Comedy));
        assert_eq!(Genre::from_menu_choice(0), None);
        assert_eq!(Genre::from_menu_choice(6), None);
    }

    #[test]
    fn test_equality_is_case_sensitive_and_checks_genre() {
        let heat = Movie::new("Heat", Genre::Thriller);
        assert_eq!(heat, Movie::new("Heat", Genre::Thriller));
        assert_ne!(heat, Movie::new("heat", Genre::Thriller));
        assert_ne!(heat, Movie::new("Heat", Genre::Drama));
    }

    #[test]
    fn test_cmp_title_is_case_sensitive() {
        let upper = Movie::new("Zodiac", Genre::Thriller);
        let lower = Movie::new("alien", Genre::Horror);
        // Upper-case letters sort before lower-case ones.
        assert_eq!(upper.cmp_title(&lower), Ordering::Less);
        assert_eq!(upper.cmp_title(&upper.clone()), Ordering::Equal);
    }

    #[test]
    fn test_try_cmp_title_rejects_missing_counterpart() {
        let movie = Movie::new("Heat", Genre::Thriller);
        assert!(matches!(
            movie.try_cmp_title(None),
            Err(LibraryError::InvalidArgument(_))
        ));
        let other = Movie::new("Alien", Genre::Horror);
        assert_eq!(movie.try_cmp_title(Some(&other)), Ok(Ordering::Greater));
    }

    #[test]
    fn test_cmp_by_genre_uses_tag_name_then_folded_title() {
        let comedy = Movie::new("Zoolander", Genre::Comedy);
        let thriller = Movie::new("Alien", Genre::Thriller);
        assert_eq!(comedy.cmp_by_genre(&thriller), Ordering::Less);

        let lower = Movie::new("alien", Genre::Horror);
        let upper = Movie::new("Blob", Genre::Horror);
        assert_eq!(lower.cmp_by_genre(&upper), Ordering::Less);
        assert_eq!(lower.cmp_title(&upper), Ordering::Greater);
    }

    #[test]
    fn test_setters_mutate_in_place() {
        let mut movie = Movie::new("Heat", Genre::Thriller);
        movie.set_title("Heat (1995)");
        movie.set_genre(Genre::Drama);
        assert_eq!(movie.title(), "Heat (1995)");
        assert_eq!(movie.genre(), Genre::Drama);
    }
}
