//! Booking ledger.
//!
//! Holds the session's booking records and the staged draft. Submission
//! either appends a complete pending record or changes nothing at all;
//! there is no partial application.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{validate_draft, Booking, BookingDraft, BookingStatus};
use crate::catalog::ServiceCatalog;
use crate::error::BookingError;
use crate::events::Event;

/// In-memory booking records plus the staged "current booking" draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    current: Option<BookingDraft>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn current_draft(&self) -> Option<&BookingDraft> {
        self.current.as_ref()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Stage a draft as the current booking, replacing any previous one.
    pub fn stage(&mut self, draft: BookingDraft) -> Event {
        let event = Event::BookingStaged {
            service: draft.service.clone(),
            at: Utc::now(),
        };
        self.current = Some(draft);
        event
    }

    /// Drop the staged draft. Returns `None` if nothing was staged.
    pub fn clear_draft(&mut self) -> Option<Event> {
        self.current.take()?;
        Some(Event::BookingDraftCleared { at: Utc::now() })
    }

    /// Validate the draft and append it as a pending record.
    ///
    /// On success the staged draft is cleared as well. On validation
    /// failure every offending field is reported and no state changes.
    pub fn submit(
        &mut self,
        draft: BookingDraft,
        catalog: &ServiceCatalog,
    ) -> Result<Event, BookingError> {
        let now = Utc::now();
        validate_draft(&draft, catalog, now.date_naive()).map_err(BookingError::Rejected)?;

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            service: draft.service,
            travel_date: draft.travel_date,
            party_size: draft.party_size,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            status: BookingStatus::Pending,
            created_at: now,
        };
        let event = Event::BookingSubmitted {
            booking_id: booking.id.clone(),
            service: booking.service.clone(),
            travel_date: booking.travel_date,
            party_size: booking.party_size,
            at: now,
        };
        self.bookings.push(booking);
        self.current = None;
        Ok(event)
    }

    /// Submit the staged draft, if any.
    pub fn submit_staged(&mut self, catalog: &ServiceCatalog) -> Result<Event, BookingError> {
        let draft = self.current.clone().ok_or(BookingError::NoDraft)?;
        self.submit(draft, catalog)
    }

    /// Overwrite the status of a record. Unknown ids are a benign no-op.
    pub fn update_status(&mut self, id: &str, status: BookingStatus) -> Option<Event> {
        let booking = self.bookings.iter_mut().find(|b| b.id == id)?;
        let from = booking.status;
        booking.status = status;
        Some(Event::BookingStatusChanged {
            booking_id: booking.id.clone(),
            from,
            to: status,
            at: Utc::now(),
        })
    }
}
