//! # TrailQuest Core Library
//!
//! This library provides the core state logic for the TrailQuest travel
//! platform: the treasure-hunt progress engine, the score-to-tier account
//! engine, and the booking ledger. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary, with any
//! GUI being a thin rendering layer over the same core library.
//!
//! ## Architecture
//!
//! - **Hunt Engine**: an in-memory state machine over a fixed treasure
//!   catalog; finds are at-most-once and the score is always the sum of
//!   found item points
//! - **Account Engine**: cumulative score mapped to a tier label through a
//!   fixed threshold table, recomputed on every change
//! - **Booking Ledger**: field-validated reservation records with a
//!   pending/confirmed/cancelled status lifecycle
//! - **Store**: one owned aggregate consuming tagged [`Command`]s and
//!   emitting [`Event`]s; the rendering layer re-renders from snapshots
//!
//! All operations are synchronous and complete without I/O. The simulated
//! scan delay seen in the product is a presentation concern and lives in
//! the caller, never in these engines.
//!
//! ## Key Components
//!
//! - [`HuntEngine`]: treasure find/score lifecycle
//! - [`AccountEngine`]: sign-in session and tier progression
//! - [`BookingLedger`]: validated reservation records
//! - [`TravelStore`]: unified command dispatch over all three
//! - [`Config`]: presentation-side configuration for the CLI

pub mod account;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod events;
pub mod hunt;
pub mod leaderboard;
pub mod storage;
pub mod store;

pub use account::{Account, AccountEngine, Tier, TierProgress};
pub use booking::{Booking, BookingDraft, BookingLedger, BookingStatus, FieldError};
pub use catalog::{Destination, Quote, RentalVan, ServiceCatalog, VanClass};
pub use error::{BookingError, ConfigError, CoreError, Result};
pub use events::Event;
pub use hunt::{Difficulty, HuntEngine, HuntItem};
pub use leaderboard::{Leaderboard, PlayerStanding};
pub use storage::Config;
pub use store::{Command, TravelStore};
