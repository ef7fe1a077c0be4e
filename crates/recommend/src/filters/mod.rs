//! Concrete filters for the recommendation pipeline.

mod already_watched;
mod genre_match;
mod rating_floor;

pub use already_watched::AlreadyWatchedFilter;
pub use genre_match::GenreMatchFilter;
pub use rating_floor::RatingFloorFilter;
