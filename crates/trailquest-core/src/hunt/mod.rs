//! Treasure hunt types and the progress engine.
//!
//! The catalog of discoverable items is fixed at engine construction; the
//! engine only tracks which items have been found and the resulting score.

mod engine;

pub use engine::HuntEngine;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How hard a treasure is to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

/// A discoverable, point-bearing treasure.
///
/// `found_at` is set exactly when `is_found` transitions false to true and
/// is absent otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuntItem {
    pub id: String,
    pub name: String,
    pub area: String,
    pub difficulty: Difficulty,
    pub points: u32,
    pub description: String,
    #[serde(default)]
    pub is_found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_at: Option<DateTime<Utc>>,
}

impl HuntItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        area: impl Into<String>,
        difficulty: Difficulty,
        points: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area: area.into(),
            difficulty,
            points,
            description: description.into(),
            is_found: false,
            found_at: None,
        }
    }
}

/// The launch catalog of treasures.
pub fn seed_catalog() -> Vec<HuntItem> {
    vec![
        HuntItem::new(
            "ancient-temple-bell",
            "Ancient Temple Bell",
            "Kathmandu Valley",
            Difficulty::Medium,
            150,
            "Find the sacred bell in the ancient temple courtyard",
        ),
        HuntItem::new(
            "prayer-wheel-collection",
            "Prayer Wheel Collection",
            "Pokhara",
            Difficulty::Easy,
            100,
            "Locate the traditional prayer wheels by the lake",
        ),
        HuntItem::new(
            "mountain-view-point",
            "Mountain View Point",
            "Annapurna Circuit",
            Difficulty::Hard,
            300,
            "Reach the secret viewpoint with panoramic mountain views",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_items_start_unfound() {
        let items = seed_catalog();
        assert_eq!(items.len(), 3);
        for item in &items {
            assert!(!item.is_found);
            assert!(item.found_at.is_none());
            assert!(item.points > 0);
        }
    }

    #[test]
    fn seed_catalog_ids_are_unique() {
        let items = seed_catalog();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
