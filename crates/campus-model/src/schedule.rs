//! Opening hours and bus schedules.

use serde::Serialize;

/// One mess meal and its serving hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealSlot {
    pub meal: &'static str,
    pub hours: &'static str,
}

/// Whether an outlet is trading this term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutletStatus {
    #[default]
    Open,
    /// Closed for the current (summer) term; `hours` holds the notice.
    ClosedForTerm,
}

/// A shop or food outlet with its hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outlet {
    pub name: &'static str,
    pub hours: &'static str,
    pub status: OutletStatus,
}

impl Outlet {
    pub const fn open(name: &'static str, hours: &'static str) -> Self {
        Self {
            name,
            hours,
            status: OutletStatus::Open,
        }
    }

    pub const fn closed_for_term(name: &'static str) -> Self {
        Self {
            name,
            hours: "Closed for Summer Term",
            status: OutletStatus::ClosedForTerm,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == OutletStatus::ClosedForTerm
    }
}

/// Departure times for a bus route in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusSchedule {
    pub route: &'static str,
    /// Label of the campus terminus (e.g., "BPHC").
    pub campus_stop: &'static str,
    /// Label of the city terminus (e.g., "Secunderabad").
    pub city_stop: &'static str,
    pub from_campus: &'static [&'static str],
    pub from_city: &'static [&'static str],
}

impl BusSchedule {
    /// Longest of the two departure lists.
    pub fn max_departures(&self) -> usize {
        self.from_campus.len().max(self.from_city.len())
    }
}
