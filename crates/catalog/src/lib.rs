//! # Catalog Crate
//!
//! Loads and normalizes the static movie catalog from a flat CSV file.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **reader**: CSV parsing with header-alias resolution and Latin-1 input
//! - **genre**: The canonical genre-string splitter
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, LoadOptions};
//! use std::path::Path;
//!
//! let options = LoadOptions { max_movies: Some(250) };
//! let catalog = catalog::load_csv(Path::new("data/movies.csv"), &options)?;
//!
//! for id in catalog.movies_in_genre("Drama") {
//!     let movie = catalog.get(*id).unwrap();
//!     println!("{} ({})", movie.title, movie.base_rating);
//! }
//! ```

pub mod error;
pub mod genre;
pub mod reader;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{CatalogError, Result};
pub use genre::split_genres;
pub use reader::{LoadOptions, load_csv};
pub use types::{Catalog, Movie, MovieId};
