//! # Recommend Crate
//!
//! Naive content-based recommendations as a composable filter pipeline.
//!
//! ## Components
//!
//! - **traits**: the [`Filter`] trait every pipeline step implements
//! - **filters**: AlreadyWatched / GenreMatch / RatingFloor
//! - **pipeline**: sequential filter application with debug logging
//! - **profile**: ViewerProfile built from the interaction table
//! - **user_based**: favorite-genre recommendations for a user
//! - **similar**: movies similar to a given title
//!
//! There is no model here. "Recommendation" means genre matching plus
//! filtering plus a sort on the catalog base rating, which is exactly what
//! the dashboards this replaces did.

pub mod filters;
pub mod pipeline;
pub mod profile;
pub mod similar;
pub mod traits;
pub mod types;
pub mod user_based;

pub use filters::{AlreadyWatchedFilter, GenreMatchFilter, RatingFloorFilter};
pub use pipeline::FilterPipeline;
pub use profile::build_viewer_profile;
pub use similar::{SimilarMovies, similar_movies};
pub use traits::Filter;
pub use types::{Candidate, Recommendation, ViewerProfile};
pub use user_based::{UserRecommendations, recommend_for_user};
