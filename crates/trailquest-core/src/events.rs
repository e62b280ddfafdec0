use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::account::Tier;
use crate::booking::BookingStatus;

/// Every state change in the system produces an Event.
/// The rendering layer re-renders from these; commands that do not change
/// state return no event at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ScanStarted {
        at: DateTime<Utc>,
    },
    ScanStopped {
        at: DateTime<Utc>,
    },
    /// A treasure flipped from unfound to found.
    TreasureFound {
        item_id: String,
        name: String,
        points: u32,
        total_score: u32,
        found_count: usize,
        at: DateTime<Utc>,
    },
    /// All finds, timestamps and the session score were cleared.
    HuntReset {
        at: DateTime<Utc>,
    },
    SignedIn {
        account_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    SignedOut {
        at: DateTime<Utc>,
    },
    /// The account score moved; the tier is recomputed with it.
    ScoreChanged {
        delta: i64,
        score: i64,
        tier: Tier,
        tier_changed: bool,
        at: DateTime<Utc>,
    },
    BookingStaged {
        service: String,
        at: DateTime<Utc>,
    },
    BookingDraftCleared {
        at: DateTime<Utc>,
    },
    BookingSubmitted {
        booking_id: String,
        service: String,
        travel_date: NaiveDate,
        party_size: u32,
        at: DateTime<Utc>,
    },
    BookingStatusChanged {
        booking_id: String,
        from: BookingStatus,
        to: BookingStatus,
        at: DateTime<Utc>,
    },
    /// Full read surface in one structure; built on demand, never stored.
    StateSnapshot {
        scanning: bool,
        catalog_size: usize,
        found_count: usize,
        hunt_score: u32,
        completion_pct: f64,
        signed_in: bool,
        account_score: i64,
        tier: Option<Tier>,
        booking_count: usize,
        at: DateTime<Utc>,
    },
}
