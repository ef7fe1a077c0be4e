//! CSV reader for the movie catalog.
//!
//! The source file is a flat CSV exported with Latin-1 encoding and
//! inconsistent header names across exports ("MovieID" vs a pandas
//! "Unnamed: 0" index column, "MovieName" vs "Name of movie", and so on).
//! Loading normalizes all of that once:
//! - headers are trimmed and resolved against a fixed alias table,
//! - the rating column is coerced to f32, rows that fail are dropped,
//! - rows with no id column get sequential ids from their position.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie, MovieId, movie_from_raw};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Accepted header spellings, first entry is the canonical name.
const ID_HEADERS: &[&str] = &["MovieID", "Unnamed: 0"];
const TITLE_HEADERS: &[&str] = &["MovieName", "Name of movie"];
const GENRE_HEADERS: &[&str] = &["Genre"];
const RATING_HEADERS: &[&str] = &["BaseRating", "Movie Rating"];

/// Options for [`load_csv`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Keep only the first N usable rows (the "movies to analyze" control)
    pub max_movies: Option<usize>,
}

/// Read a file that may be Latin-1 encoded.
///
/// Latin-1 is a single-byte encoding where each byte maps directly to the
/// same Unicode code point, so the byte-to-char conversion is lossless.
fn read_latin1(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Find the index of the first header matching any accepted spelling.
fn resolve_column(headers: &csv::StringRecord, accepted: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| accepted.iter().any(|a| h.trim() == *a))
}

fn require_column(headers: &csv::StringRecord, accepted: &[&str]) -> Result<usize> {
    resolve_column(headers, accepted).ok_or_else(|| CatalogError::MissingColumn {
        column: accepted[0].to_string(),
        accepted: accepted.join(", "),
    })
}

/// Load and normalize the catalog from a CSV file.
pub fn load_csv(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    debug!(path = %path.display(), "loading movie catalog");

    let content = read_latin1(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let id_col = resolve_column(&headers, ID_HEADERS);
    let title_col = require_column(&headers, TITLE_HEADERS)?;
    let genre_col = require_column(&headers, GENRE_HEADERS)?;
    let rating_col = require_column(&headers, RATING_HEADERS)?;

    let mut movies: Vec<Movie> = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, record) in reader.records().enumerate() {
        // head(N) semantics: stop before the row that would exceed the
        // limit, so a zero-row request loads nothing at all
        if let Some(max) = options.max_movies
            && movies.len() >= max
        {
            break;
        }

        let record = record?;
        let line = row_idx + 2; // 1-based, after the header row

        let Some(parsed) = parse_row(&record, line, id_col, title_col, genre_col, rating_col)
        else {
            skipped += 1;
            continue;
        };

        // Positional fallback when the file has no real id column
        let (id, title, genre, base_rating) = parsed;
        let id = id.unwrap_or(row_idx as MovieId);
        movies.push(movie_from_raw(id, &title, &genre, base_rating));
    }

    if skipped > 0 {
        warn!(skipped, "dropped unusable catalog rows");
    }
    debug!(loaded = movies.len(), "catalog rows normalized");

    Catalog::from_movies(movies)
}

/// Extract one row. Returns None when the row must be dropped
/// (missing field, empty title/genre, or a rating that isn't numeric).
fn parse_row(
    record: &csv::StringRecord,
    line: usize,
    id_col: Option<usize>,
    title_col: usize,
    genre_col: usize,
    rating_col: usize,
) -> Option<(Option<MovieId>, String, String, f32)> {
    let title = record.get(title_col)?.trim();
    let genre = record.get(genre_col)?.trim();
    let rating_raw = record.get(rating_col)?.trim();
    if title.is_empty() || genre.is_empty() {
        return None;
    }

    let base_rating: f32 = match rating_raw.parse() {
        Ok(r) => r,
        Err(_) => {
            warn!(line, value = rating_raw, "non-numeric rating, dropping row");
            return None;
        }
    };

    let id = match id_col {
        Some(col) => {
            let raw = record.get(col)?.trim();
            match raw.parse::<MovieId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(line, value = raw, "non-numeric movie id, dropping row");
                    return None;
                }
            }
        }
        None => None,
    };

    Some((id, title.to_string(), genre.to_string(), base_rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_load_canonical_headers() {
        let path = write_temp(
            "catalog_canonical.csv",
            b"MovieID,MovieName,Genre,BaseRating\n\
              1,The Quiet Drama,Drama,7.9\n\
              2,Laser Run,\"Action, Sci-Fi\",6.4\n",
        );
        let catalog = load_csv(&path, &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        let laser = catalog.get(2).unwrap();
        assert_eq!(laser.genres, vec!["Action", "Sci-Fi"]);
        assert!((laser.base_rating - 6.4).abs() < 1e-6);
    }

    #[test]
    fn test_load_aliased_headers_and_positional_ids() {
        // pandas-style export: unnamed index column plus renamed headers
        let path = write_temp(
            "catalog_aliased.csv",
            b"Name of movie,Genre,Movie Rating\n\
              The Quiet Drama,Drama,7.9\n\
              Laser Run,Action,6.4\n",
        );
        let catalog = load_csv(&path, &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        // Ids fall back to row position
        assert_eq!(catalog.get(0).unwrap().title, "The Quiet Drama");
        assert_eq!(catalog.get(1).unwrap().title, "Laser Run");
    }

    #[test]
    fn test_non_numeric_ratings_are_dropped() {
        let path = write_temp(
            "catalog_coerce.csv",
            b"MovieID,MovieName,Genre,BaseRating\n\
              1,Good Row,Drama,7.9\n\
              2,Bad Row,Drama,not-a-number\n\
              3,Another Good Row,Comedy,5.5\n",
        );
        let catalog = load_csv(&path, &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_max_movies_keeps_head() {
        let path = write_temp(
            "catalog_head.csv",
            b"MovieID,MovieName,Genre,BaseRating\n\
              1,A,Drama,7.0\n\
              2,B,Drama,7.1\n\
              3,C,Drama,7.2\n",
        );
        let options = LoadOptions {
            max_movies: Some(2),
        };
        let catalog = load_csv(&path, &options).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_max_movies_zero_loads_nothing() {
        let path = write_temp(
            "catalog_head_zero.csv",
            b"MovieID,MovieName,Genre,BaseRating\n\
              1,A,Drama,7.0\n\
              2,B,Drama,7.1\n",
        );
        let options = LoadOptions {
            max_movies: Some(0),
        };
        let err = load_csv(&path, &options).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let path = write_temp(
            "catalog_missing.csv",
            b"MovieID,MovieName,BaseRating\n1,A,7.0\n",
        );
        let err = load_csv(&path, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { .. }));
    }

    #[test]
    fn test_latin1_titles_survive() {
        // "Amélie" with an actual Latin-1 0xE9 byte
        let path = write_temp(
            "catalog_latin1.csv",
            b"MovieID,MovieName,Genre,BaseRating\n1,Am\xE9lie,Romance,8.3\n",
        );
        let catalog = load_csv(&path, &LoadOptions::default()).unwrap();
        assert_eq!(catalog.get(1).unwrap().title, "Am\u{e9}lie");
    }
}
