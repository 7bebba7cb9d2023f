//! Static campus records for Campus Essentials.
//!
//! Every record in this crate is `'static` and read-only. The GUI renders
//! these tables directly; nothing here is mutated at runtime.
//!
//! # Module Organization
//!
//! - [`geo`]: Geographic point type shared with the map crate
//! - [`location`]: Named campus locations and lookup by id
//! - [`contact`]: Literal phone numbers and named contacts
//! - [`schedule`]: Mess timings, outlet hours and bus schedules
//! - [`menu`]: Weekly mess menu
//! - [`credits`]: Developers and contributors
//! - [`catalog`]: The hardcoded campus data tables

pub mod catalog;
pub mod contact;
pub mod credits;
pub mod geo;
pub mod location;
pub mod menu;
pub mod schedule;

pub use catalog::{
    ALTERNATE_ROUTES, AUTO_DRIVERS, BUS_212, CAMPUS_NAME, CREDITS, LOCATIONS, MESS_TIMINGS,
    OUTLET_PHONES, OUTLETS, WARDEN_CONTACTS, WEEKLY_MENU,
};
pub use contact::{Contact, PhoneNumber};
pub use credits::{Credits, Person};
pub use geo::GeoPoint;
pub use location::{LocationRecord, location_by_id, location_index};
pub use menu::{Meal, MenuDay, menu_for};
pub use schedule::{BusSchedule, MealSlot, Outlet, OutletStatus};
