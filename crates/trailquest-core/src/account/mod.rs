//! Account and tier progression.
//!
//! Tier is a pure function of cumulative score over a fixed threshold
//! table, evaluated highest-first. It is recomputed on every score change
//! and never set independently.
//!
//! Sign-in here is the product's mock flow: any name/email pair yields a
//! fresh account. There are no credentials and no server round-trip.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::Event;

/// Player rank derived from cumulative score.
///
/// Variant order is ascending so tiers compare by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Rookie,
    Explorer,
    Adventurer,
    #[serde(rename = "Expert Explorer")]
    ExpertExplorer,
    Legend,
}

/// Threshold table, highest-first. First entry whose threshold does not
/// exceed the score wins.
const TIER_TABLE: [(i64, Tier); 5] = [
    (10_000, Tier::Legend),
    (5_000, Tier::ExpertExplorer),
    (2_000, Tier::Adventurer),
    (500, Tier::Explorer),
    (0, Tier::Rookie),
];

impl Tier {
    /// Map a score to its tier. Total over all of i64; anything below the
    /// Explorer threshold (including negative scores) is Rookie.
    pub fn for_score(score: i64) -> Self {
        for (threshold, tier) in TIER_TABLE {
            if score >= threshold {
                return tier;
            }
        }
        Tier::Rookie
    }

    /// Minimum score that grants this tier.
    pub fn min_score(&self) -> i64 {
        TIER_TABLE
            .iter()
            .find(|(_, t)| t == self)
            .map(|(threshold, _)| *threshold)
            .unwrap_or(0)
    }

    /// The tier above this one, or `None` at Legend.
    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::Rookie => Some(Tier::Explorer),
            Tier::Explorer => Some(Tier::Adventurer),
            Tier::Adventurer => Some(Tier::ExpertExplorer),
            Tier::ExpertExplorer => Some(Tier::Legend),
            Tier::Legend => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Rookie => "Rookie",
            Tier::Explorer => "Explorer",
            Tier::Adventurer => "Adventurer",
            Tier::ExpertExplorer => "Expert Explorer",
            Tier::Legend => "Legend",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Rookie
    }
}

/// Progress from the current tier toward the next threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierProgress {
    pub current: Tier,
    pub next: Option<Tier>,
    pub score: i64,
    /// Points still needed for the next tier; 0 at Legend.
    pub needed: i64,
    /// 0.0 .. 100.0 within the current tier's span; 100.0 at Legend.
    pub pct: f64,
}

impl TierProgress {
    pub fn for_score(score: i64) -> Self {
        let current = Tier::for_score(score);
        let next = current.next();
        match next {
            Some(next_tier) => {
                let floor = current.min_score();
                let span = next_tier.min_score() - floor;
                let into = (score - floor).clamp(0, span);
                Self {
                    current,
                    next,
                    score,
                    needed: next_tier.min_score() - score.min(next_tier.min_score()),
                    pct: into as f64 / span as f64 * 100.0,
                }
            }
            None => Self {
                current,
                next: None,
                score,
                needed: 0,
                pct: 100.0,
            },
        }
    }
}

/// The acting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub score: i64,
    pub tier: Tier,
}

impl Account {
    /// Fresh account at score zero.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            score: 0,
            tier: Tier::Rookie,
        }
    }
}

/// Account engine: mock sign-in session plus score/tier bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountEngine {
    user: Option<Account>,
    is_authenticated: bool,
    loading: bool,
}

impl AccountEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn user(&self) -> Option<&Account> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn score(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.score)
    }

    pub fn tier(&self) -> Option<Tier> {
        self.user.as_ref().map(|u| u.tier)
    }

    pub fn progress(&self) -> Option<TierProgress> {
        self.user.as_ref().map(|u| TierProgress::for_score(u.score))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Flag a sign-in attempt as in flight.
    pub fn login_start(&mut self) {
        self.loading = true;
    }

    /// Complete a sign-in with the given account.
    pub fn login_succeeded(&mut self, account: Account) -> Event {
        let event = Event::SignedIn {
            account_id: account.id.clone(),
            name: account.name.clone(),
            at: Utc::now(),
        };
        self.user = Some(account);
        self.is_authenticated = true;
        self.loading = false;
        event
    }

    /// Clear the in-flight flag after a failed attempt.
    pub fn login_failed(&mut self) {
        self.loading = false;
    }

    /// Drop the session. Returns `None` if nobody is signed in.
    pub fn logout(&mut self) -> Option<Event> {
        if self.user.take().is_none() {
            return None;
        }
        self.is_authenticated = false;
        Some(Event::SignedOut { at: Utc::now() })
    }

    /// Add any delta to the score and recompute the tier.
    ///
    /// Deltas may be negative; there is no floor, so score and tier can
    /// drop. Returns `None` while signed out.
    pub fn add_score(&mut self, delta: i64) -> Option<Event> {
        let user = self.user.as_mut()?;
        let old_tier = user.tier;
        user.score += delta;
        user.tier = Tier::for_score(user.score);
        Some(Event::ScoreChanged {
            delta,
            score: user.score,
            tier: user.tier,
            tier_changed: user.tier != old_tier,
            at: Utc::now(),
        })
    }
}
