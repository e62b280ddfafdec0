use chrono::NaiveDate;
use clap::{Args, Subcommand};
use trailquest_core::storage::session;
use trailquest_core::{BookingDraft, BookingError, BookingStatus, Command, CoreError};

#[derive(Subcommand)]
pub enum BookingAction {
    /// List bookable destinations and vans
    Services {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Quote the cost of a service
    Quote {
        /// Service name, e.g. "Everest Base Camp Trek"
        service: String,
        /// Persons for a destination, rental days for a van
        units: u32,
    },
    /// Stage a booking draft without submitting it
    Stage(DraftArgs),
    /// Submit a booking (omit the fields to submit the staged draft)
    Submit {
        #[command(flatten)]
        draft: OptionalDraftArgs,
    },
    /// List submitted bookings
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Overwrite the status of a booking
    SetStatus {
        /// Booking id from `booking list`
        id: String,
        /// pending | confirmed | cancelled
        status: BookingStatus,
    },
}

#[derive(Args)]
pub struct DraftArgs {
    #[arg(long)]
    service: String,
    /// Travel date, YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,
    /// Persons for a destination, rental days for a van
    #[arg(long, default_value = "1")]
    people: u32,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
}

#[derive(Args)]
pub struct OptionalDraftArgs {
    #[arg(long)]
    service: Option<String>,
    /// Travel date, YYYY-MM-DD
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Persons for a destination, rental days for a van
    #[arg(long, default_value = "1")]
    people: u32,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

impl From<DraftArgs> for BookingDraft {
    fn from(args: DraftArgs) -> Self {
        BookingDraft {
            service: args.service,
            travel_date: args.date,
            party_size: args.people,
            name: args.name,
            email: args.email,
            phone: args.phone,
        }
    }
}

impl OptionalDraftArgs {
    /// A full draft when the service was given; `None` means "use the
    /// staged draft". Missing companion fields become empty and are
    /// reported by validation rather than by clap.
    fn into_draft(self) -> Option<BookingDraft> {
        let service = self.service?;
        Some(BookingDraft {
            service,
            travel_date: self
                .date
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
            party_size: self.people,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        })
    }
}

pub fn run(action: BookingAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = session::load()?;

    match action {
        BookingAction::Services { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.catalog())?);
            } else {
                println!("Destinations:");
                for dest in store.catalog().destinations() {
                    println!(
                        "  {:<28} {:<22} Rs {:>7} per person",
                        dest.name, dest.location, dest.price
                    );
                }
                println!("Vans:");
                for van in store.catalog().vans() {
                    println!(
                        "  {:<28} {:<22} Rs {:>7} per day",
                        van.name, van.capacity, van.price_per_day
                    );
                }
            }
        }
        BookingAction::Quote { service, units } => match store.catalog().quote(&service, units) {
            Some(quote) => println!("{}", serde_json::to_string_pretty(&quote)?),
            None => {
                eprintln!("unknown service: {service}");
                std::process::exit(1);
            }
        },
        BookingAction::Stage(args) => {
            for event in store.dispatch(Command::StageBooking {
                draft: args.into(),
            })? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        BookingAction::Submit { draft } => {
            let command = Command::SubmitBooking {
                draft: draft.into_draft(),
            };
            match store.dispatch(command) {
                Ok(events) => {
                    for event in events {
                        println!("{}", serde_json::to_string_pretty(&event)?);
                    }
                }
                Err(CoreError::Booking(BookingError::Rejected(errors))) => {
                    for error in errors {
                        eprintln!("invalid {}: {}", error.field, error.message);
                    }
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        BookingAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.bookings().bookings())?);
            } else {
                for booking in store.bookings().bookings() {
                    println!(
                        "{}  {:<28} {}  x{:<2}  {}",
                        booking.id,
                        booking.service,
                        booking.travel_date,
                        booking.party_size,
                        booking.status
                    );
                }
                println!("{} booking(s)", store.bookings().len());
            }
        }
        BookingAction::SetStatus { id, status } => {
            let events = store.dispatch(Command::UpdateBookingStatus {
                booking_id: id.clone(),
                status,
            })?;
            if events.is_empty() {
                eprintln!("no booking with id {id}");
            }
            for event in events {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }

    session::save(&store)?;
    Ok(())
}
