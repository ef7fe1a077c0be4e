//! The built-in user preference profiles.

use crate::types::TasteProfile;

/// The default set of five synthetic users and their preferred genres.
///
/// Hand-authored constants; the ordering matters because the history
/// generator walks profiles in order while consuming a seeded RNG.
pub fn default_profiles() -> Vec<TasteProfile> {
    vec![
        TasteProfile::new("U01", &["Drama"]),
        TasteProfile::new("U02", &["Action", "Adventure"]),
        TasteProfile::new("U03", &["Comedy"]),
        TasteProfile::new("U04", &["Thriller", "Mystery"]),
        TasteProfile::new("U05", &["Romance"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles_are_stable() {
        let profiles = default_profiles();
        assert_eq!(profiles.len(), 5);
        assert_eq!(profiles[0].user_id, "U01");
        assert_eq!(profiles[1].preferred_genres, vec!["Action", "Adventure"]);
        assert_eq!(profiles[4].preferred_genres, vec!["Romance"]);
    }
}
