//! Leaderboard standings.
//!
//! A read-only ranking derived from player records. Tiers on standings are
//! always derived from the recorded score, and ranks are assigned on read
//! from the score ordering.

use serde::{Deserialize, Serialize};

use crate::account::{Account, Tier};

/// One player's aggregate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub id: String,
    pub name: String,
    pub score: i64,
    pub tier: Tier,
    pub treasures_found: u32,
    /// 0 .. 100 share of the full catalog found.
    pub completion_rate: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

impl PlayerStanding {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        score: i64,
        treasures_found: u32,
        completion_rate: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
            tier: Tier::for_score(score),
            treasures_found,
            completion_rate,
            is_current_user: false,
        }
    }
}

/// A standing paired with its 1-based rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedStanding {
    pub rank: usize,
    #[serde(flatten)]
    pub standing: PlayerStanding,
}

/// Score-ordered player rankings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<PlayerStanding>,
}

impl Leaderboard {
    pub fn new(entries: Vec<PlayerStanding>) -> Self {
        Self { entries }
    }

    /// Demo standings shipped with the product.
    pub fn seed() -> Self {
        let mut entries = vec![
            PlayerStanding::new("alex-chen", "Alex Chen", 15_420, 47, 94),
            PlayerStanding::new("sarah-kumar", "Sarah Kumar", 12_850, 38, 76),
            PlayerStanding::new("mike-johnson", "Mike Johnson", 11_200, 34, 68),
            PlayerStanding::new("emma-wilson", "Emma Wilson", 9_750, 29, 58),
            PlayerStanding::new("john-doe", "John Doe", 8_500, 25, 50),
        ];
        entries[4].is_current_user = true;
        Self::new(entries)
    }

    /// Replace (or insert) the signed-in player's row from their account.
    pub fn record_player(&mut self, account: &Account, treasures_found: u32, completion_rate: u32) {
        self.entries.retain(|e| !e.is_current_user && e.id != account.id);
        let mut standing = PlayerStanding::new(
            account.id.clone(),
            account.name.clone(),
            account.score,
            treasures_found,
            completion_rate,
        );
        standing.is_current_user = true;
        self.entries.push(standing);
    }

    /// Standings sorted by score descending with 1-based ranks. Ties keep
    /// insertion order and still receive distinct ranks.
    pub fn standings(&self) -> Vec<RankedStanding> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, standing)| RankedStanding {
                rank: i + 1,
                standing,
            })
            .collect()
    }

    /// The top `n` standings.
    pub fn top(&self, n: usize) -> Vec<RankedStanding> {
        let mut standings = self.standings();
        standings.truncate(n);
        standings
    }

    /// Rank of a player by id, if present.
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.standings()
            .iter()
            .find(|r| r.standing.id == id)
            .map(|r| r.rank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::seed()
    }
}
