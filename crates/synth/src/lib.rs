//! # Synth Crate
//!
//! Fabricates per-user viewing history from the static catalog. The data is
//! synthetic by construction: it exists only to drive the analytics and
//! recommendation layers, and is regenerated (never stored) on every run.
//!
//! ## Components
//!
//! - **profiles**: the hand-authored user-to-genre preference constants
//! - **generator**: seeded sampling + rating/watch-time/date fabrication
//! - **types**: TasteProfile and Interaction records
//!
//! ## Example Usage
//!
//! ```ignore
//! use synth::{HistoryGenerator, default_profiles};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(catalog::load_csv(path, &Default::default())?);
//! let history = HistoryGenerator::new(catalog)
//!     .with_seed(42)
//!     .generate(&default_profiles())?;
//! ```
//!
//! ## Determinism
//!
//! One `StdRng` seeded from the config is threaded through the whole run in
//! profile order. Equal seed, catalog and profiles give equal output.

pub mod generator;
pub mod profiles;
pub mod types;

// Re-export commonly used items
pub use generator::{HistoryGenerator, SynthConfig};
pub use profiles::default_profiles;
pub use types::{Interaction, TasteProfile, UserId};
