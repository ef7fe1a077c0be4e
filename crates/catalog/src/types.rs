//! Core domain types for the movie catalog.

use crate::error::{CatalogError, Result};
use crate::genre::split_genres;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a catalog entry
pub type MovieId = u32;

/// A single movie as loaded from the catalog file.
///
/// `genres` holds the already-split genre list; the raw comma-separated
/// form can be recovered with [`Movie::genre_label`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
    /// Static base rating from the source file. Not clamped: the source
    /// data uses an IMDb-style scale, only synthesized ratings are [1,5].
    pub base_rating: f32,
}

impl Movie {
    /// The display form of the genre list, e.g. `"Action, Adventure"`.
    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }

    /// Case-insensitive genre membership test.
    ///
    /// Matches either an exact split genre or a substring of the joined
    /// label, so a query like "Sci" still finds "Sci-Fi" entries.
    pub fn matches_genre(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.genres.iter().any(|g| g.to_lowercase() == needle)
            || self.genre_label().to_lowercase().contains(&needle)
    }

    /// The first listed genre, used as the similarity anchor.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }
}

/// The static movie table, immutable after load.
///
/// Keeps movies in file order (down-sampling means "first N rows") and
/// maintains two lookup structures: an id map and a lowercase genre index.
#[derive(Debug)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<MovieId, usize>,
    genre_index: HashMap<String, Vec<MovieId>>,
}

impl Catalog {
    /// Build a catalog from parsed movies.
    ///
    /// Errors with [`CatalogError::Empty`] when nothing usable remains.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = HashMap::with_capacity(movies.len());
        let mut genre_index: HashMap<String, Vec<MovieId>> = HashMap::new();

        for (pos, movie) in movies.iter().enumerate() {
            by_id.insert(movie.id, pos);
            for genre in &movie.genres {
                genre_index
                    .entry(genre.to_lowercase())
                    .or_default()
                    .push(movie.id);
            }
        }

        Ok(Self {
            movies,
            by_id,
            genre_index,
        })
    }

    /// Keep only the first `n` rows, rebuilding the indices.
    ///
    /// This is the "movies to analyze" down-sample control.
    pub fn truncate(self, n: usize) -> Result<Self> {
        let mut movies = self.movies;
        movies.truncate(n);
        Self::from_movies(movies)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All movies in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Movies whose split genre list contains `name` (case-insensitive,
    /// exact match against the genre index).
    pub fn movies_in_genre(&self, name: &str) -> &[MovieId] {
        self.genre_index
            .get(&name.trim().to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// First movie whose title contains `query`, case-insensitive.
    pub fn find_by_title(&self, query: &str) -> Option<&Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.movies
            .iter()
            .find(|m| m.title.to_lowercase().contains(&needle))
    }
}

/// Build a [`Movie`] from raw fields, splitting the genre string once.
pub(crate) fn movie_from_raw(id: MovieId, title: &str, genre: &str, base_rating: f32) -> Movie {
    Movie {
        id,
        title: title.trim().to_string(),
        genres: split_genres(genre),
        base_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Movie> {
        vec![
            movie_from_raw(1, "The Quiet Drama", "Drama", 7.9),
            movie_from_raw(2, "Laser Run", "Action, Sci-Fi", 6.4),
            movie_from_raw(3, "Two Tickets", "Comedy, Romance", 5.8),
        ]
    }

    #[test]
    fn test_genre_index_is_case_insensitive() {
        let catalog = Catalog::from_movies(sample()).unwrap();
        assert_eq!(catalog.movies_in_genre("drama"), &[1]);
        assert_eq!(catalog.movies_in_genre("SCI-FI"), &[2]);
        assert!(catalog.movies_in_genre("western").is_empty());
    }

    #[test]
    fn test_matches_genre_substring() {
        let catalog = Catalog::from_movies(sample()).unwrap();
        let laser = catalog.get(2).unwrap();
        assert!(laser.matches_genre("Action"));
        assert!(laser.matches_genre("sci"));
        assert!(!laser.matches_genre("Drama"));
        assert!(!laser.matches_genre(""));
    }

    #[test]
    fn test_truncate_rebuilds_index() {
        let catalog = Catalog::from_movies(sample()).unwrap().truncate(1).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(2).is_none());
        assert!(catalog.movies_in_genre("action").is_empty());
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        assert!(matches!(
            Catalog::from_movies(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_find_by_title() {
        let catalog = Catalog::from_movies(sample()).unwrap();
        assert_eq!(catalog.find_by_title("laser").unwrap().id, 2);
        assert!(catalog.find_by_title("nothing here").is_none());
    }
}
