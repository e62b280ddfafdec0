//! Bookable service catalog.
//!
//! The closed set of services a booking may reference: adventure package
//! destinations and rental vans. The set is fixed at process start; the
//! booking validator checks submitted service names against it, and cost
//! quotes are answered from the listed prices.

use serde::{Deserialize, Serialize};

/// An adventure package destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: String,
    pub duration_days: u32,
    pub difficulty: String,
    /// Price per person, in rupees.
    pub price: u64,
    pub rating: f64,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Comfort class of a rental van.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VanClass {
    Premium,
    Deluxe,
    Standard,
    Economy,
}

/// A rental van.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalVan {
    pub id: String,
    pub name: String,
    pub class: VanClass,
    pub capacity: String,
    pub features: Vec<String>,
    /// Price per rental day, in rupees.
    pub price_per_day: u64,
    pub rating: f64,
    pub description: String,
    pub highlights: Vec<String>,
}

/// A cost quote for a service: unit price times booked units
/// (persons for destinations, rental days for vans).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub service: String,
    pub unit_price: u64,
    pub units: u32,
    pub total: u64,
}

/// The full set of bookable services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCatalog {
    destinations: Vec<Destination>,
    vans: Vec<RentalVan>,
}

impl ServiceCatalog {
    pub fn new(destinations: Vec<Destination>, vans: Vec<RentalVan>) -> Self {
        Self { destinations, vans }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn vans(&self) -> &[RentalVan] {
        &self.vans
    }

    /// Whether a service name refers to a known destination or van.
    pub fn contains(&self, service: &str) -> bool {
        self.destination_by_name(service).is_some() || self.van_by_name(service).is_some()
    }

    pub fn destination_by_name(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    pub fn van_by_name(&self, name: &str) -> Option<&RentalVan> {
        self.vans.iter().find(|v| v.name == name)
    }

    /// Cost quote for `units` of the named service, or `None` for an
    /// unknown service.
    pub fn quote(&self, service: &str, units: u32) -> Option<Quote> {
        let unit_price = if let Some(dest) = self.destination_by_name(service) {
            dest.price
        } else {
            self.van_by_name(service)?.price_per_day
        };
        Some(Quote {
            service: service.to_string(),
            unit_price,
            units,
            total: unit_price * units as u64,
        })
    }

    /// The launch catalog: six destinations, four vans.
    pub fn seed() -> Self {
        let destinations = vec![
            Destination {
                id: "everest-base-camp".into(),
                name: "Everest Base Camp Trek".into(),
                location: "Khumbu Valley".into(),
                duration_days: 14,
                difficulty: "Hard".into(),
                price: 100_000,
                rating: 4.9,
                description:
                    "The ultimate trekking adventure to the base of the world's highest mountain."
                        .into(),
                highlights: vec![
                    "Namche Bazaar".into(),
                    "Tengboche Monastery".into(),
                    "Kala Patthar".into(),
                ],
            },
            Destination {
                id: "annapurna-circuit".into(),
                name: "Annapurna Circuit Trek".into(),
                location: "Annapurna Region".into(),
                duration_days: 12,
                difficulty: "Medium".into(),
                price: 50_000,
                rating: 4.8,
                description: "Classic trek through diverse landscapes and traditional villages."
                    .into(),
                highlights: vec![
                    "Thorong La Pass".into(),
                    "Muktinath Temple".into(),
                    "Poon Hill".into(),
                ],
            },
            Destination {
                id: "chitwan-safari".into(),
                name: "Chitwan Jungle Safari".into(),
                location: "Chitwan National Park".into(),
                duration_days: 3,
                difficulty: "Easy".into(),
                price: 25_700,
                rating: 4.7,
                description: "Wildlife adventure in one of Nepal's premier national parks.".into(),
                highlights: vec![
                    "Rhino Spotting".into(),
                    "Elephant Safari".into(),
                    "Bird Watching".into(),
                ],
            },
            Destination {
                id: "pokhara-adventure".into(),
                name: "Pokhara Adventure Package".into(),
                location: "Pokhara Valley".into(),
                duration_days: 5,
                difficulty: "Easy".into(),
                price: 29_500,
                rating: 4.6,
                description: "Perfect blend of adventure and relaxation by beautiful lakes.".into(),
                highlights: vec![
                    "Phewa Lake".into(),
                    "Paragliding".into(),
                    "Sarangkot Sunrise".into(),
                ],
            },
            Destination {
                id: "langtang-valley".into(),
                name: "Langtang Valley Trek".into(),
                location: "Langtang Region".into(),
                duration_days: 8,
                difficulty: "Medium".into(),
                price: 23_000,
                rating: 4.5,
                description:
                    "Beautiful valley trek with stunning mountain views and Tamang culture.".into(),
                highlights: vec![
                    "Kyanjin Gompa".into(),
                    "Cheese Factory".into(),
                    "Mountain Views".into(),
                ],
            },
            Destination {
                id: "kathmandu-cultural".into(),
                name: "Kathmandu Cultural Tour".into(),
                location: "Kathmandu Valley".into(),
                duration_days: 2,
                difficulty: "Easy".into(),
                price: 15_500,
                rating: 4.4,
                description:
                    "Explore ancient temples, palaces, and UNESCO World Heritage sites.".into(),
                highlights: vec![
                    "Durbar Square".into(),
                    "Swayambhunath".into(),
                    "Boudhanath".into(),
                ],
            },
        ];

        let vans = vec![
            RentalVan {
                id: "premium-van".into(),
                name: "Premium Luxury Van".into(),
                class: VanClass::Premium,
                capacity: "8-10 People".into(),
                features: vec![
                    "AC/Heater".into(),
                    "Leather Seats".into(),
                    "WiFi".into(),
                    "Entertainment System".into(),
                ],
                price_per_day: 15_000,
                rating: 4.9,
                description:
                    "Top-tier luxury van with premium amenities for the ultimate travel experience."
                        .into(),
                highlights: vec![
                    "Premium Sound System".into(),
                    "Panoramic Windows".into(),
                    "Mini Bar".into(),
                ],
            },
            RentalVan {
                id: "deluxe-van".into(),
                name: "Deluxe Comfort Van".into(),
                class: VanClass::Deluxe,
                capacity: "10-12 People".into(),
                features: vec![
                    "AC".into(),
                    "Comfortable Seats".into(),
                    "Music System".into(),
                    "Phone Charging".into(),
                ],
                price_per_day: 10_000,
                rating: 4.7,
                description:
                    "Comfortable deluxe van perfect for group travel with modern amenities.".into(),
                highlights: vec![
                    "Spacious Interior".into(),
                    "Good Sound System".into(),
                    "USB Charging".into(),
                ],
            },
            RentalVan {
                id: "standard-van".into(),
                name: "Standard Travel Van".into(),
                class: VanClass::Standard,
                capacity: "12-15 People".into(),
                features: vec![
                    "Basic AC".into(),
                    "Standard Seats".into(),
                    "Radio".into(),
                    "Storage Space".into(),
                ],
                price_per_day: 7_000,
                rating: 4.4,
                description:
                    "Reliable standard van for budget-conscious travelers without compromising safety."
                        .into(),
                highlights: vec![
                    "Reliable Engine".into(),
                    "Good Mileage".into(),
                    "Spacious".into(),
                ],
            },
            RentalVan {
                id: "economy-van".into(),
                name: "Economy Van".into(),
                class: VanClass::Economy,
                capacity: "15+ People".into(),
                features: vec!["Fan".into(), "Basic Seats".into(), "Radio".into()],
                price_per_day: 4_500,
                rating: 4.0,
                description:
                    "Budget-friendly option for large groups looking for basic transportation."
                        .into(),
                highlights: vec![
                    "Large Capacity".into(),
                    "Budget Friendly".into(),
                    "Basic Comfort".into(),
                ],
            },
        ];

        Self::new(destinations, vans)
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::seed()
    }
}
