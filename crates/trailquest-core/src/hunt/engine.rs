//! Hunt progress engine.
//!
//! A synchronous state machine over a fixed item catalog. There is no
//! internal timer and no I/O; the simulated scan delay shown in the UI is
//! applied by the caller before invoking `mark_found`.
//!
//! ## State
//!
//! ```text
//! mark_found(id): unfound -> found (at most once per reset)
//! reset():        all found -> unfound, score -> 0
//! ```
//!
//! Unknown ids and repeat finds leave state untouched and return `None`;
//! the catalog is a trusted closed set.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{seed_catalog, HuntItem};
use crate::events::Event;

/// Core hunt engine.
///
/// Holds the item catalog, the set of found ids and the session score.
/// The score is always the sum of points of found items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuntEngine {
    items: Vec<HuntItem>,
    found_items: Vec<String>,
    total_score: u32,
    scanning: bool,
}

impl HuntEngine {
    /// Create an engine over the given catalog, all items unfound.
    pub fn new(mut items: Vec<HuntItem>) -> Self {
        for item in &mut items {
            item.is_found = false;
            item.found_at = None;
        }
        Self {
            items,
            found_items: Vec::new(),
            total_score: 0,
            scanning: false,
        }
    }

    /// Engine over the launch catalog.
    pub fn with_seed_catalog() -> Self {
        Self::new(seed_catalog())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[HuntItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&HuntItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn found_ids(&self) -> &[String] {
        &self.found_items
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn scanning(&self) -> bool {
        self.scanning
    }

    pub fn found_count(&self) -> usize {
        self.found_items.len()
    }

    /// 0.0 .. 100.0 share of the catalog found, recomputed on every read.
    pub fn completion_pct(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.found_items.len() as f64 / self.items.len() as f64 * 100.0
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set the scanning flag. Idempotent: returns `None` if already on.
    pub fn start_scan(&mut self) -> Option<Event> {
        if self.scanning {
            return None;
        }
        self.scanning = true;
        Some(Event::ScanStarted { at: Utc::now() })
    }

    /// Clear the scanning flag. Idempotent: returns `None` if already off.
    pub fn stop_scan(&mut self) -> Option<Event> {
        if !self.scanning {
            return None;
        }
        self.scanning = false;
        Some(Event::ScanStopped { at: Utc::now() })
    }

    /// Mark an item found, stamp it, and credit its points.
    ///
    /// At-most-once: an already-found item or an id not in the catalog
    /// changes nothing and returns `None`.
    pub fn mark_found(&mut self, item_id: &str) -> Option<Event> {
        let item = self.items.iter_mut().find(|i| i.id == item_id)?;
        if item.is_found {
            return None;
        }
        let at = Utc::now();
        item.is_found = true;
        item.found_at = Some(at);
        let id = item.id.clone();
        let name = item.name.clone();
        let points = item.points;

        self.found_items.push(id.clone());
        self.total_score += points;
        Some(Event::TreasureFound {
            item_id: id,
            name,
            points,
            total_score: self.total_score,
            found_count: self.found_items.len(),
            at,
        })
    }

    /// Return every item to its initial unfound state and zero the score.
    pub fn reset(&mut self) -> Event {
        self.found_items.clear();
        self.total_score = 0;
        for item in &mut self.items {
            item.is_found = false;
            item.found_at = None;
        }
        Event::HuntReset { at: Utc::now() }
    }
}

impl Default for HuntEngine {
    fn default() -> Self {
        Self::with_seed_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt::{Difficulty, HuntItem};

    fn abc_catalog() -> Vec<HuntItem> {
        vec![
            HuntItem::new("a", "Alpha", "North", Difficulty::Easy, 100, ""),
            HuntItem::new("b", "Bravo", "East", Difficulty::Medium, 150, ""),
            HuntItem::new("c", "Charlie", "South", Difficulty::Hard, 300, ""),
        ]
    }

    fn score_sum(engine: &HuntEngine) -> u32 {
        engine
            .items()
            .iter()
            .filter(|i| engine.found_ids().contains(&i.id))
            .map(|i| i.points)
            .sum()
    }

    #[test]
    fn mark_found_credits_points_and_stamps() {
        let mut engine = HuntEngine::new(abc_catalog());
        let event = engine.mark_found("b").expect("first find produces event");
        match event {
            Event::TreasureFound {
                points,
                total_score,
                found_count,
                ..
            } => {
                assert_eq!(points, 150);
                assert_eq!(total_score, 150);
                assert_eq!(found_count, 1);
            }
            other => panic!("Expected TreasureFound, got {other:?}"),
        }
        let item = engine.item("b").unwrap();
        assert!(item.is_found);
        assert!(item.found_at.is_some());
    }

    #[test]
    fn mark_found_is_idempotent() {
        let mut engine = HuntEngine::new(abc_catalog());
        assert!(engine.mark_found("b").is_some());
        assert!(engine.mark_found("b").is_none());
        assert_eq!(engine.total_score(), 150);
        assert_eq!(engine.found_ids(), ["b"]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut engine = HuntEngine::new(abc_catalog());
        assert!(engine.mark_found("zzz").is_none());
        assert_eq!(engine.total_score(), 0);
        assert!(engine.found_ids().is_empty());
    }

    #[test]
    fn score_matches_found_items_after_every_step() {
        let mut engine = HuntEngine::new(abc_catalog());
        engine.mark_found("b");
        assert_eq!(engine.total_score(), score_sum(&engine));
        engine.mark_found("b");
        assert_eq!(engine.total_score(), score_sum(&engine));
        engine.mark_found("c");
        assert_eq!(engine.total_score(), 450);
        assert_eq!(engine.total_score(), score_sum(&engine));
        assert_eq!(engine.found_ids(), ["b", "c"]);
        engine.reset();
        assert_eq!(engine.total_score(), 0);
        assert_eq!(engine.total_score(), score_sum(&engine));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = HuntEngine::new(abc_catalog());
        engine.mark_found("a");
        engine.mark_found("c");
        engine.reset();
        assert!(engine.found_ids().is_empty());
        assert_eq!(engine.total_score(), 0);
        for item in engine.items() {
            assert!(!item.is_found);
            assert!(item.found_at.is_none());
        }
    }

    #[test]
    fn refinding_after_reset_reproduces_score() {
        let mut engine = HuntEngine::new(abc_catalog());
        engine.mark_found("b");
        engine.mark_found("c");
        let before = engine.total_score();
        engine.reset();
        engine.mark_found("b");
        engine.mark_found("c");
        assert_eq!(engine.total_score(), before);
    }

    #[test]
    fn unfound_items_have_no_timestamp() {
        let mut engine = HuntEngine::new(abc_catalog());
        engine.mark_found("a");
        for item in engine.items() {
            assert_eq!(item.is_found, item.found_at.is_some());
        }
    }

    #[test]
    fn scan_flags_are_idempotent() {
        let mut engine = HuntEngine::default();
        assert!(engine.start_scan().is_some());
        assert!(engine.start_scan().is_none());
        assert!(engine.scanning());
        assert!(engine.stop_scan().is_some());
        assert!(engine.stop_scan().is_none());
        assert!(!engine.scanning());
    }

    #[test]
    fn completion_pct_is_recomputed() {
        let mut engine = HuntEngine::new(abc_catalog());
        assert_eq!(engine.completion_pct(), 0.0);
        engine.mark_found("a");
        assert!((engine.completion_pct() - 100.0 / 3.0).abs() < 1e-9);
        engine.mark_found("b");
        engine.mark_found("c");
        assert_eq!(engine.completion_pct(), 100.0);
        engine.reset();
        assert_eq!(engine.completion_pct(), 0.0);
    }
}
