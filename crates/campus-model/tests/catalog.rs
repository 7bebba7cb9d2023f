//! Tests for the hardcoded campus catalog.

use std::collections::HashSet;

use campus_model::{
    ALTERNATE_ROUTES, AUTO_DRIVERS, BUS_212, CREDITS, LOCATIONS, MESS_TIMINGS, Meal,
    OUTLET_PHONES, OUTLETS, WARDEN_CONTACTS, WEEKLY_MENU, location_by_id,
};
use chrono::Weekday;

#[test]
fn location_ids_are_unique() {
    let ids: HashSet<_> = LOCATIONS.iter().map(|record| record.id).collect();
    assert_eq!(ids.len(), LOCATIONS.len());
}

#[test]
fn first_location_is_default_selection_candidate() {
    assert_eq!(LOCATIONS[0].id, "SAC");
}

#[test]
fn library_record_is_present() {
    let lib = location_by_id("lib").expect("library record");
    assert_eq!(lib.name, "Library");
    insta::assert_snapshot!(lib.point().query_pair(), @"17.545853792704165,78.57150321231636");
}

#[test]
fn bhavans_have_no_description() {
    let without: Vec<_> = LOCATIONS
        .iter()
        .filter(|record| record.description.is_none())
        .map(|record| record.id)
        .collect();
    assert!(without.contains(&"valmiki"));
    assert!(without.contains(&"ganga"));
    assert!(location_by_id("mess1").and_then(|r| r.description).is_some());
}

#[test]
fn coordinates_are_on_campus() {
    for record in LOCATIONS {
        assert!(
            (17.53..17.55).contains(&record.latitude),
            "{} latitude {}",
            record.id,
            record.latitude
        );
        assert!(
            (78.56..78.58).contains(&record.longitude),
            "{} longitude {}",
            record.id,
            record.longitude
        );
    }
}

#[test]
fn phone_literals_are_preserved() {
    assert_eq!(AUTO_DRIVERS.len(), 28);
    assert_eq!(AUTO_DRIVERS[0].as_str(), "96035 11629");
    assert_eq!(AUTO_DRIVERS[18].as_str(), "9951419388");

    let chief = &WARDEN_CONTACTS[0];
    assert_eq!(chief.phone.as_str(), "040-66303629");
    assert_eq!(chief.label, Some("Prof. Phaneendra Kiran C"));
    assert_eq!(WARDEN_CONTACTS[1].phone.tel_uri(), "tel:+91 90102 02882");

    let hotspot = OUTLET_PHONES
        .iter()
        .find(|contact| contact.name == "Hotspot")
        .expect("hotspot phone");
    assert_eq!(hotspot.phone.as_str(), "70133 34805");
}

#[test]
fn mess_timings_cover_three_meals() {
    let meals: Vec<_> = MESS_TIMINGS.iter().map(|slot| slot.meal).collect();
    let expected: Vec<_> = Meal::ALL.iter().map(Meal::label).collect();
    assert_eq!(meals, expected);
}

#[test]
fn closed_outlets_carry_notice() {
    let closed: Vec<_> = OUTLETS.iter().filter(|o| o.is_closed()).collect();
    assert!(!closed.is_empty());
    for outlet in closed {
        assert_eq!(outlet.hours, "Closed for Summer Term");
    }
    let cafeteria = OUTLETS.iter().find(|o| o.name == "Cafeteria").unwrap();
    assert!(!cafeteria.is_closed());
}

#[test]
fn bus_schedule_is_balanced() {
    assert_eq!(BUS_212.from_campus.len(), 5);
    assert_eq!(BUS_212.from_city.len(), 5);
    assert_eq!(BUS_212.max_departures(), 5);
    assert!(ALTERNATE_ROUTES.contains(&"212/702"));
}

#[test]
fn weekly_menu_has_seven_rows_in_order() {
    let days: Vec<_> = WEEKLY_MENU.iter().map(|row| row.day).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
    );
    for row in WEEKLY_MENU {
        for meal in Meal::ALL {
            assert!(row.dishes(meal).count() > 0, "{} {}", row.day, meal.label());
        }
    }
}

#[test]
fn credits_list_developers_and_contributors() {
    assert_eq!(CREDITS.developers.len(), 2);
    assert!(CREDITS.developers.iter().all(|p| p.profile_url.is_some()));
    assert_eq!(CREDITS.contributors.len(), 6);
}

#[test]
fn location_serializes_without_loss() {
    let lib = location_by_id("lib").unwrap();
    let json = serde_json::to_value(lib).expect("serialize location");
    assert_eq!(json["id"], "lib");
    assert_eq!(json["latitude"], 17.545853792704165);
    assert!(json["description"].is_string());
}
