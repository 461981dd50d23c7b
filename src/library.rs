//! In-memory movie collection. The library is the single owner of every
//! `Movie`; callers get borrowed views or owned snapshots, so nothing outside
//! can reorder the backing vector behind its back.
//!
//! The backing vector is kept in natural (case-sensitive title) order after
//! every structural change. Collections are small, so every mutation simply
//! re-sorts and every query is a linear scan.

use std::slice;

use crate::error::{LibraryError, Result};
use crate::models::{Genre, Movie};

/// Case-insensitive title comparison used for duplicate checks and exact
/// lookups.
fn titles_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[derive(Debug, Default, Clone)]
pub struct Library {
    movies: Vec<Movie>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    /// True when some stored title equals `title` ignoring case. Callers
    /// must check this before [`Library::add`], which accepts anything.
    pub fn has_title(&self, title: &str) -> bool {
        self.movies
            .iter()
            .any(|movie| titles_match(movie.title(), title))
    }

    /// Append a movie and restore title order. Duplicates are not rejected
    /// here; the entry flow filters them with [`Library::has_title`].
    pub fn add(&mut self, movie: Movie) {
        self.movies.push(movie);
        self.sort();
    }

    /// Drop every stored movie structurally equal to `movie` and return how
    /// many went away. No match is a silent no-op.
    pub fn remove(&mut self, movie: &Movie) -> usize {
        let before = self.movies.len();
        self.movies.retain(|stored| stored != movie);
        self.sort();
        before - self.movies.len()
    }

    /// Snapshot of every movie tagged `genre`, in title order.
    pub fn find_by_genre(&self, genre: Genre) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.genre() == genre)
            .cloned()
            .collect()
    }

    /// Every movie whose title contains `query` as a literal, case-insensitive
    /// substring, in title order. An empty query matches the whole library.
    pub fn search(&self, query: &str) -> Vec<Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// First movie whose title equals `title` ignoring case.
    pub fn find_exact(&self, title: &str) -> Option<&Movie> {
        self.movies
            .iter()
            .find(|movie| titles_match(movie.title(), title))
    }

    /// Live, mutable handle on the movie matching `title` ignoring case.
    ///
    /// Renaming through this handle does not re-sort the library; the order
    /// is restored by the next structural change. Prefer [`Library::update`]
    /// when the edit should be reflected in [`Library::all_by_title`] at once.
    pub fn find_exact_mut(&mut self, title: &str) -> Option<&mut Movie> {
        self.movies
            .iter_mut()
            .find(|movie| titles_match(movie.title(), title))
    }

    /// Locate a movie by title (ignoring case), edit it in place, then
    /// restore title order. Returns a copy of the edited record.
    pub fn update<F>(&mut self, title: &str, edit: F) -> Result<Movie>
    where
        F: FnOnce(&mut Movie),
    {
        let movie = self
            .find_exact_mut(title)
            .ok_or_else(|| LibraryError::NotFound {
                title: title.to_string(),
            })?;
        edit(movie);
        let updated = movie.clone();
        self.sort();
        Ok(updated)
    }

    /// The live collection in title order. The borrow keeps callers from
    /// mutating the library while they hold the view.
    pub fn all_by_title(&self) -> &[Movie] {
        &self.movies
    }

    /// A fresh copy ordered by genre tag name, then title ignoring case.
    pub fn all_by_genre(&self) -> Vec<Movie> {
        let mut copy = self.movies.clone();
        copy.sort_by(Movie::cmp_by_genre);
        copy
    }

    fn sort(&mut self) {
        self.movies.sort_by(Movie::cmp_title);
    }
}
