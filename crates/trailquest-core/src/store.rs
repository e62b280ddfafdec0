//! Unified state store and command dispatch.
//!
//! The store owns the three engines and the service catalog for the
//! lifetime of a session; mutation happens only through the operations
//! below, and every state change comes back as an [`Event`] for the
//! rendering layer. There are no ambient singletons: callers hold the
//! store and pass it where it is needed.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountEngine};
use crate::booking::{BookingDraft, BookingLedger, BookingStatus};
use crate::catalog::ServiceCatalog;
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::hunt::HuntEngine;

/// A state-changing request from the rendering layer.
///
/// One tagged variant per mutator; the whole surface is serializable so
/// commands can be logged or replayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    StartScan,
    StopScan,
    /// Discover a treasure: marks it found and credits the signed-in
    /// account with the same points.
    MarkFound {
        item_id: String,
    },
    ResetHunt,
    SignIn {
        name: String,
        email: String,
    },
    SignOut,
    AddScore {
        delta: i64,
    },
    StageBooking {
        draft: BookingDraft,
    },
    ClearBookingDraft,
    /// Submit the given draft, or the staged one when `draft` is absent.
    SubmitBooking {
        draft: Option<BookingDraft>,
    },
    UpdateBookingStatus {
        booking_id: String,
        status: BookingStatus,
    },
}

/// The owned session state: hunt, account, bookings and the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelStore {
    hunt: HuntEngine,
    account: AccountEngine,
    bookings: BookingLedger,
    catalog: ServiceCatalog,
}

impl TravelStore {
    pub fn new() -> Self {
        Self {
            hunt: HuntEngine::with_seed_catalog(),
            account: AccountEngine::new(),
            bookings: BookingLedger::new(),
            catalog: ServiceCatalog::seed(),
        }
    }

    // ── Read accessors ───────────────────────────────────────────────

    pub fn hunt(&self) -> &HuntEngine {
        &self.hunt
    }

    pub fn account(&self) -> &AccountEngine {
        &self.account
    }

    pub fn bookings(&self) -> &BookingLedger {
        &self.bookings
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// The full read surface as one event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            scanning: self.hunt.scanning(),
            catalog_size: self.hunt.items().len(),
            found_count: self.hunt.found_count(),
            hunt_score: self.hunt.total_score(),
            completion_pct: self.hunt.completion_pct(),
            signed_in: self.account.is_authenticated(),
            account_score: self.account.score().unwrap_or(0),
            tier: self.account.tier(),
            booking_count: self.bookings.len(),
            at: Utc::now(),
        }
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Discover a treasure: the hunt session and the account score move
    /// together, by the same point value.
    ///
    /// The account credit only happens on an actual find, and only while
    /// signed in; the hunt find itself never requires a session. Unknown
    /// and already-found ids yield no events.
    pub fn discover(&mut self, item_id: &str) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(found) = self.hunt.mark_found(item_id) {
            let points = match &found {
                Event::TreasureFound { points, .. } => *points,
                _ => 0,
            };
            events.push(found);
            if let Some(scored) = self.account.add_score(points as i64) {
                events.push(scored);
            }
        }
        events
    }

    /// Mock sign-in: any name/email pair yields a fresh account.
    pub fn sign_in(&mut self, name: &str, email: &str) -> Event {
        self.account.login_start();
        self.account.login_succeeded(Account::new(name, email))
    }

    /// Apply one command and return the resulting events, oldest first.
    /// An empty list means the command was a benign no-op.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<Event>> {
        let events = match command {
            Command::StartScan => self.hunt.start_scan().into_iter().collect(),
            Command::StopScan => self.hunt.stop_scan().into_iter().collect(),
            Command::MarkFound { item_id } => self.discover(&item_id),
            Command::ResetHunt => vec![self.hunt.reset()],
            Command::SignIn { name, email } => vec![self.sign_in(&name, &email)],
            Command::SignOut => self.account.logout().into_iter().collect(),
            Command::AddScore { delta } => self.account.add_score(delta).into_iter().collect(),
            Command::StageBooking { draft } => vec![self.bookings.stage(draft)],
            Command::ClearBookingDraft => self.bookings.clear_draft().into_iter().collect(),
            Command::SubmitBooking { draft } => {
                let event = match draft {
                    Some(draft) => self.bookings.submit(draft, &self.catalog),
                    None => self.bookings.submit_staged(&self.catalog),
                }
                .map_err(CoreError::Booking)?;
                vec![event]
            }
            Command::UpdateBookingStatus { booking_id, status } => self
                .bookings
                .update_status(&booking_id, status)
                .into_iter()
                .collect(),
        };
        Ok(events)
    }
}

impl Default for TravelStore {
    fn default() -> Self {
        Self::new()
    }
}
