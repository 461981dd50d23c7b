//! Property-based tests for the library's ordering and matching rules.

use proptest::prelude::*;

use movie_library::{Genre, Library, Movie};

fn arb_genre() -> impl Strategy<Value = Genre> {
    prop::sample::select(Genre::ALL.to_vec())
}

/// Short titles over a small alphabet so case collisions and substring hits
/// actually happen.
fn arb_title() -> impl Strategy<Value = String> {
    "[aAbBéÉ .*]{0,6}"
}

fn arb_movie() -> impl Strategy<Value = Movie> {
    (arb_title(), arb_genre()).prop_map(|(title, genre)| Movie::new(title, genre))
}

fn library_of(movies: &[Movie]) -> Library {
    let mut library = Library::new();
    for movie in movies {
        library.add(movie.clone());
    }
    library
}

proptest! {
    #[test]
    fn title_order_holds_after_every_add(movies in prop::collection::vec(arb_movie(), 0..20)) {
        let mut library = Library::new();
        for movie in movies {
            library.add(movie);
            let view = library.all_by_title();
            prop_assert!(view.windows(2).all(|pair| pair[0].title() <= pair[1].title()));
        }
    }

    #[test]
    fn has_title_matches_case_folded_titles(
        movies in prop::collection::vec(arb_movie(), 0..12),
        probe in arb_title(),
    ) {
        let library = library_of(&movies);
        let expected = movies
            .iter()
            .any(|movie| movie.title().to_lowercase() == probe.to_lowercase());
        prop_assert_eq!(library.has_title(&probe), expected);
    }

    #[test]
    fn remove_drops_exactly_the_equal_entries(
        movies in prop::collection::vec(arb_movie(), 0..12),
        target in arb_movie(),
    ) {
        let mut library = library_of(&movies);
        let equal = movies.iter().filter(|movie| **movie == target).count();
        let before = library.len();

        prop_assert_eq!(library.remove(&target), equal);
        prop_assert_eq!(library.len(), before - equal);
        prop_assert!(library.iter().all(|movie| *movie != target));
    }

    #[test]
    fn search_returns_every_substring_match(
        movies in prop::collection::vec(arb_movie(), 0..12),
        query in "[aAbBé.*]{0,3}",
    ) {
        let library = library_of(&movies);
        let hits = library.search(&query);
        let needle = query.to_lowercase();
        let expected: Vec<Movie> = library
            .iter()
            .filter(|movie| movie.title().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn search_finds_query_with_flipped_case(
        movies in prop::collection::vec(arb_movie(), 0..8),
        prefix in "[a-z ]{0,4}",
        query in "[a-zA-Z]{1,4}",
        suffix in "[a-z ]{0,4}",
        genre in arb_genre(),
    ) {
        let flipped: String = query
            .chars()
            .map(|ch| {
                if ch.is_ascii_uppercase() {
                    ch.to_ascii_lowercase()
                } else {
                    ch.to_ascii_uppercase()
                }
            })
            .collect();
        let target = Movie::new(format!("{prefix}{flipped}{suffix}"), genre);

        let mut library = library_of(&movies);
        library.add(target.clone());

        prop_assert!(library.search(&query).contains(&target));
        prop_assert!(library.has_title(&target.title().to_ascii_uppercase()));
    }

    #[test]
    fn empty_search_returns_everything(movies in prop::collection::vec(arb_movie(), 0..12)) {
        let library = library_of(&movies);
        prop_assert_eq!(library.search(""), library.all_by_title().to_vec());
    }

    #[test]
    fn genre_view_groups_and_leaves_title_order(movies in prop::collection::vec(arb_movie(), 0..16)) {
        let library = library_of(&movies);
        let by_title = library.all_by_title().to_vec();
        let by_genre = library.all_by_genre();

        prop_assert_eq!(by_genre.len(), by_title.len());
        for pair in by_genre.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.genre().name() <= b.genre().name());
            if a.genre() == b.genre() {
                prop_assert!(a.title().to_lowercase() <= b.title().to_lowercase());
            }
        }
        prop_assert_eq!(library.all_by_title().to_vec(), by_title);
    }

    #[test]
    fn add_then_find_exact_round_trips(movie in arb_movie()) {
        let mut library = Library::new();
        library.add(movie.clone());
        prop_assert_eq!(library.find_exact(movie.title()), Some(&movie));
    }

    #[test]
    fn find_by_genre_is_an_exact_filter(
        movies in prop::collection::vec(arb_movie(), 0..12),
        genre in arb_genre(),
    ) {
        let library = library_of(&movies);
        let found = library.find_by_genre(genre);
        prop_assert!(found.iter().all(|movie| movie.genre() == genre));
        prop_assert_eq!(
            found.len(),
            movies.iter().filter(|movie| movie.genre() == genre).count()
        );
    }
}

fn titles(movies: &[Movie]) -> Vec<String> {
    movies.iter().map(|movie| movie.title().to_string()).collect()
}

#[test]
fn catalog_scenario() {
    let mut library = Library::new();
    library.add(Movie::new("Inception", Genre::Thriller));
    library.add(Movie::new("Amélie", Genre::Comedy));
    library.add(Movie::new("Aliens", Genre::Action));

    assert_eq!(
        titles(library.all_by_title()),
        vec!["Aliens", "Amélie", "Inception"]
    );
    assert_eq!(
        library.all_by_genre(),
        vec![
            Movie::new("Aliens", Genre::Action),
            Movie::new("Amélie", Genre::Comedy),
            Movie::new("Inception", Genre::Thriller),
        ]
    );
    assert_eq!(titles(&library.search("in")), vec!["Inception"]);
    assert!(library.has_title("inception"));

    assert_eq!(library.remove(&Movie::new("Aliens", Genre::Action)), 1);
    assert_eq!(titles(library.all_by_title()), vec!["Amélie", "Inception"]);
}
