//! # Favorites & Recents Collections
//!
//! Ordered id collections with the rules the UI relies on. Both serialize
//! as plain JSON arrays of board ids, which is exactly what gets persisted.
//!
//! ## Recents: Move-to-Front
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  visit(a) visit(b) visit(a) visit(c) visit(d) visit(e) visit(f)        │
//! │                                                                         │
//! │  [a]                                                                   │
//! │  [b, a]                                                                │
//! │  [a, b]            ← a already present: old entry removed, re-inserted │
//! │  [c, a, b]                                                             │
//! │  [d, c, a, b]                                                          │
//! │  [e, d, c, a, b]                                                       │
//! │  [f, e, d, c, a]   ← capped at 5: b evicted                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Favorites are an insertion-ordered set: adding is idempotent, removing an
//! absent id is a no-op.

use serde::{Deserialize, Serialize};

use crate::MAX_RECENT_BOARDS;

// =============================================================================
// Favorites
// =============================================================================

/// Favorited board ids in the order the user added them. No duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FavoriteIds(Vec<String>);

impl FavoriteIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from stored ids, dropping repeats (first occurrence wins).
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut favorites = FavoriteIds::new();
        for id in ids {
            favorites.insert(id);
        }
        favorites
    }

    /// Appends `id` unless present.
    ///
    /// ## Returns
    /// `true` if the set changed.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Removes `id` if present.
    ///
    /// ## Returns
    /// `true` if the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|f| f != id);
        self.0.len() != before
    }

    /// Flips membership of `id`.
    ///
    /// ## Returns
    /// The new membership: `true` if `id` is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|f| f == id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for FavoriteIds {
    fn from(ids: Vec<String>) -> Self {
        FavoriteIds::from_ids(ids)
    }
}

impl From<FavoriteIds> for Vec<String> {
    fn from(favorites: FavoriteIds) -> Self {
        favorites.0
    }
}

// =============================================================================
// Recents
// =============================================================================

/// Recently viewed board ids, most recent first.
///
/// ## Invariants
/// - At most [`MAX_RECENT_BOARDS`] entries
/// - No duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RecentIds(Vec<String>);

impl RecentIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from stored ids (already most-recent-first), dropping
    /// repeats and anything past the cap.
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut recents: Vec<String> = Vec::with_capacity(MAX_RECENT_BOARDS);
        for id in ids {
            if recents.len() == MAX_RECENT_BOARDS {
                break;
            }
            if !recents.contains(&id) {
                recents.push(id);
            }
        }
        RecentIds(recents)
    }

    /// Moves `id` to the front, removing any earlier occurrence, then
    /// truncates to the cap.
    pub fn visit(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.0.retain(|r| *r != id);
        self.0.insert(0, id);
        self.0.truncate(MAX_RECENT_BOARDS);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|r| r == id)
    }

    /// Most recently visited id.
    pub fn latest(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for RecentIds {
    fn from(ids: Vec<String>) -> Self {
        RecentIds::from_ids(ids)
    }
}

impl From<RecentIds> for Vec<String> {
    fn from(recents: RecentIds) -> Self {
        recents.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_favorite_insert_is_idempotent() {
        let mut once = FavoriteIds::new();
        once.insert("uno");

        let mut twice = FavoriteIds::new();
        assert!(twice.insert("uno"));
        assert!(!twice.insert("uno"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_favorite_remove_absent_is_noop() {
        let mut favorites = FavoriteIds::from_ids(ids(&["uno", "esp32"]));
        assert!(!favorites.remove("pico"));
        assert_eq!(favorites.as_slice(), ids(&["uno", "esp32"]).as_slice());
    }

    #[test]
    fn test_favorite_keeps_insertion_order() {
        let mut favorites = FavoriteIds::new();
        favorites.insert("pico");
        favorites.insert("uno");
        favorites.insert("esp32");
        favorites.remove("uno");
        favorites.insert("uno");

        assert_eq!(favorites.as_slice(), ids(&["pico", "esp32", "uno"]).as_slice());
    }

    #[test]
    fn test_favorite_toggle_twice_restores() {
        let mut favorites = FavoriteIds::new();
        assert!(favorites.toggle("uno"));
        assert!(!favorites.toggle("uno"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_favorite_from_ids_dedupes() {
        let favorites = FavoriteIds::from_ids(ids(&["uno", "esp32", "uno"]));
        assert_eq!(favorites.as_slice(), ids(&["uno", "esp32"]).as_slice());
    }

    #[test]
    fn test_recent_visit_sequence() {
        let mut recents = RecentIds::new();
        for id in ["a", "b", "a", "c", "d", "e", "f"] {
            recents.visit(id);
        }

        assert_eq!(recents.as_slice(), ids(&["f", "e", "d", "c", "a"]).as_slice());
        assert!(!recents.contains("b"));
        assert_eq!(recents.latest(), Some("f"));
    }

    #[test]
    fn test_recent_revisit_moves_to_front() {
        let mut recents = RecentIds::from_ids(ids(&["c", "b", "a"]));
        recents.visit("a");
        assert_eq!(recents.as_slice(), ids(&["a", "c", "b"]).as_slice());
    }

    #[test]
    fn test_recent_from_ids_normalizes_stored_value() {
        let recents = RecentIds::from_ids(ids(&["a", "b", "a", "c", "d", "e", "f", "g"]));
        assert_eq!(recents.as_slice(), ids(&["a", "b", "c", "d", "e"]).as_slice());
    }

    #[test]
    fn test_json_shape_is_plain_array() {
        let favorites = FavoriteIds::from_ids(ids(&["uno", "esp32"]));
        assert_eq!(serde_json::to_string(&favorites).unwrap(), r#"["uno","esp32"]"#);

        let favorites: FavoriteIds = serde_json::from_str(r#"["uno","uno","esp32"]"#).unwrap();
        assert_eq!(favorites.as_slice(), ids(&["uno", "esp32"]).as_slice());

        let recents: RecentIds = serde_json::from_str(r#"["x","x","y"]"#).unwrap();
        assert_eq!(recents.as_slice(), ids(&["x", "y"]).as_slice());
        assert_eq!(serde_json::to_string(&recents).unwrap(), r#"["x","y"]"#);
    }
}
