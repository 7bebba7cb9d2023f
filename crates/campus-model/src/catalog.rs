//! The hardcoded campus data tables.
//!
//! These are the only source of content in the application. Strings are
//! reproduced as collected, including inconsistent phone formats and the
//! bhavan records that have no description.

use chrono::Weekday;

use crate::contact::{Contact, PhoneNumber};
use crate::credits::{Credits, Person};
use crate::location::LocationRecord;
use crate::menu::MenuDay;
use crate::schedule::{BusSchedule, MealSlot, Outlet};

/// Campus display name.
pub const CAMPUS_NAME: &str = "BITS Pilani, Hyderabad Campus";

// =============================================================================
// MESS & OUTLETS
// =============================================================================

pub static MESS_TIMINGS: &[MealSlot] = &[
    MealSlot {
        meal: "Breakfast",
        hours: "08:00 AM - 9:30 AM",
    },
    MealSlot {
        meal: "Lunch",
        hours: "12:00 PM - 2:00 PM",
    },
    MealSlot {
        meal: "Dinner",
        hours: "7:30 PM - 09:00 PM",
    },
];

pub static OUTLETS: &[Outlet] = &[
    Outlet::open("Heritage Stationery", "10:00 AM - 7:00 PM (Sunday closed)"),
    Outlet::open("Agarwal Supermarket", "9:00 AM - 9:00 PM"),
    Outlet::open("Sri Sai Laundry", "9:00 AM - 9:00 PM (Monday closed)"),
    Outlet::closed_for_term("Pleasant"),
    Outlet::open("Protein Isle", "04:00 PM - 10:00 PM"),
    Outlet::closed_for_term("Agra Chat"),
    Outlet::open("Tea Time", "9:00 AM - 9:00 PM (Sunday closed)"),
    Outlet::open("Karturi Stationery", "5:00 PM - 8:00 PM"),
    Outlet::open("CP05 VVS Stores", "12:00 PM - 10:00 PM"),
    Outlet::open("Vegetable Shop", "10:30 AM - 9:00 PM"),
    Outlet::open("Amul", "1:00 PM - 10:00 PM"),
    Outlet::open("Vijay Vahini", "12:00 PM - 10:00 PM"),
    Outlet::open("Thickshake", "11:00 AM - 9:00 PM"),
    Outlet::open("Yummpy's", "10:00 AM - 02:00 AM"),
    Outlet::open("Hotspot", "10:00 AM - 12:00 AM"),
    Outlet::closed_for_term("Wich Please and SFC"),
    Outlet::closed_for_term("Nescafe"),
    Outlet::open("Cafeteria", "8:00 AM - 8:00 PM"),
];

pub static OUTLET_PHONES: &[Contact] = &[
    Contact::new("Hotspot", "70133 34805"),
    Contact::new("Yummpy's", "93814 23625"),
];

// =============================================================================
// CONTACTS
// =============================================================================

/// Auto drivers operating at the main gate. Display is 1-indexed.
pub static AUTO_DRIVERS: &[PhoneNumber] = &[
    PhoneNumber::new("96035 11629"),
    PhoneNumber::new("98481 65044"),
    PhoneNumber::new("99484 83171"),
    PhoneNumber::new("90000 92037"),
    PhoneNumber::new("63025 36271"),
    PhoneNumber::new("98664 72092"),
    PhoneNumber::new("99599 78917"),
    PhoneNumber::new("96768 07459"),
    PhoneNumber::new("77023 86068"),
    PhoneNumber::new("95533 75890"),
    PhoneNumber::new("90106 97472"),
    PhoneNumber::new("97055 52391"),
    PhoneNumber::new("95248 76740"),
    PhoneNumber::new("98481 28649"),
    PhoneNumber::new("91775 20097"),
    PhoneNumber::new("80740 12874"),
    PhoneNumber::new("86869 37544"),
    PhoneNumber::new("90107 90411"),
    PhoneNumber::new("9951419388"),
    PhoneNumber::new("9912175784"),
    PhoneNumber::new("6302014403"),
    PhoneNumber::new("9908133959"),
    PhoneNumber::new("9948934098"),
    PhoneNumber::new("9542876740"),
    PhoneNumber::new("9989396607"),
    PhoneNumber::new("9705495353"),
    PhoneNumber::new("6281598329"),
    PhoneNumber::new("7416118766"),
];

pub static WARDEN_CONTACTS: &[Contact] = &[
    Contact::labeled(
        "Chief Warden Office",
        "040-66303629",
        "Prof. Phaneendra Kiran C",
    ),
    Contact::labeled(
        "Chief Warden Mobile",
        "+91 90102 02882",
        "Prof. Phaneendra Kiran C",
    ),
    Contact::labeled(
        "Warden - Krishna Bhavan Office",
        "040-66303632",
        "Prof. Bandhan Bandhu Majumdar",
    ),
    Contact::labeled(
        "Warden - Krishna Bhavan Mobile",
        "+91 90102 00098",
        "Prof. Bandhan Bandhu Majumdar",
    ),
    Contact::labeled(
        "Warden - Ram Bhavan Mobile",
        "+91 90102 02805",
        "Prof. Syed Ershad Ahmed",
    ),
    Contact::labeled(
        "Superintendent - Krishna Bhavan",
        "+91 90102 02854",
        "Mr. Haridas Appu",
    ),
    Contact::labeled(
        "Caretaker - Krishna Bhavan",
        "+91 94926 65896",
        "Mr. Ravinder Reddy",
    ),
    Contact::labeled("Warden - Ganga Bhavan", "040-66303582", "Prof. Ponnalagu R N"),
];

// =============================================================================
// BUSES
// =============================================================================

pub static BUS_212: BusSchedule = BusSchedule {
    route: "212",
    campus_stop: "BPHC",
    city_stop: "Secunderabad",
    from_campus: &["9:00 AM", "10:00 AM", "2:00 PM", "5:00 PM", "6:00 PM"],
    from_city: &["7:50 AM", "8:50 AM", "12:45 PM", "4:00 PM", "5:00 PM"],
};

/// Routes from Secunderabad that pass Thumkunta/Tandoor Junction.
pub static ALTERNATE_ROUTES: &[&str] = &[
    "211A", "211B", "211C", "211DY", "212T", "212/564", "212/567", "212/568", "212/702", "564",
    "567", "568",
];

// =============================================================================
// WEEKLY MENU
// =============================================================================

pub static WEEKLY_MENU: &[MenuDay] = &[
    MenuDay {
        day: Weekday::Mon,
        breakfast: "TEA, COFFEE, IDLY SAMBAR, CHUTNEY, STUFF KULCHA",
        lunch: "RAJMA MASALA, ALOO BHENDI DRY, DAL, ROTI, SAMBAR, WHITE RICE, CURD, SALAD, CHUTNEY, PAPAD/FRYUMS",
        dinner: "TENDLY FRY, TOMATO DAL, VEG KOLAPURI MASOL, RASAM, ROTI, RICE, CURD, PICKLE LADDOO",
    },
    MenuDay {
        day: Weekday::Tue,
        breakfast: "TEA, COFFEE, POHA, CHUTNEY, VADA, SAMBAR",
        lunch: "ALOO MATAR CURRY, ROTI, CABBAGE DRY, DAL FRY, RASAM, WHITE RICE, CURD, CHUTNEY, PAPAD/FRYUMS",
        dinner: "DAL TADKA, BHENDI DRY, BLACK CHANA GRAVY, SAMBAR, SALAD, ROTI, RICE, CURD, PICKLE",
    },
    MenuDay {
        day: Weekday::Wed,
        breakfast: "TEA, COFFEE, ONION UTHAPPAM, ALOO PARATHA, CURD, CHUTNEY, SAMBAR",
        lunch: "PALAK DAL, ROTI, SAMBAR, WHITE RICE, WHITE BATANA CURRY, CARROT BEANS DRY, SALAD, CHUTNEY, CURD",
        dinner: "DAL TADKA, RAJMA MASALA, BOTTLE GOURD DRY, ROTI, RICE, CURD, RASAM, PICKLE BESAN BURFI",
    },
    MenuDay {
        day: Weekday::Thu,
        breakfast: "TEA, COFFEE, RAWA IDLY, SAMBAR, CHUTNEY, AJWAIN PARATHA, VEG KURMA",
        lunch: "TOMATO DAL, ROTI, RASAM, WHITE RICE, TAVA VEG, BLACK CHANA MASALA, SALAD, CHUTNEY, CURD, PAPAD/FRYUMS",
        dinner: "NAVRATNA DAL, SAMBAR, BAIGAN BHARTA DRY, SALAD, ROTI, RICE, CURD, GOBI MASALA, PICKLE",
    },
    MenuDay {
        day: Weekday::Fri,
        breakfast: "TEA, COFFEE, TOMATO BATH, MASALA DOSA, SAMBAR, CHUTNEY",
        lunch: "DAL FRY, ROTI, RASAM, WHITE RICE, KARLA SOYA GRAVY, CABBAGE MUTTER DRY, SALAD, CHUTNEY, CURD, PAPAD/FRYUMS",
        dinner: "ROTI, KADAL VEG DRY, DUM ALOO GRAVY, RASAM, DAL, RICE MOTICHUR LADOO",
    },
    MenuDay {
        day: Weekday::Sat,
        breakfast: "TEA, COFFEE, PORI BHAJI, MIX VEG UTHAPPAM, SAMBAR, CHUTNEY",
        lunch: "DAL, ROTI, SAMBAR, WHITE RICE, SOYA BIN DRY, LOBIYA CURRY, SALAD, CHUTNEY, CURD, PAPAD/FRYUMS",
        dinner: "DAL MAKHANI, ALOO METHI DRY, MANCHURIAN SEMI, SALAD, ROTI, RICE, CURD, RASAM, PICKLE",
    },
    MenuDay {
        day: Weekday::Sun,
        breakfast: "TEA, COFFEE, PESARATTU DOSA, UPMA, CHUTNEY",
        lunch: "GONGURA DAL, ROTI, SAMBAR, WHITE RICE, POTATO GOBI MASALA DRY, KADI, PAKODI, SALAD, CHUTNEY, CURD, PAPAD/FRYUMS",
        dinner: "SOYABIN DRY, DAL TADKA, GREEN PEAS TOMATO MASALA, SALAD, ROTI, RICE, CURD, RASAM ANY KHEER",
    },
];

// =============================================================================
// LOCATIONS
// =============================================================================

const fn place(
    id: &'static str,
    name: &'static str,
    latitude: f64,
    longitude: f64,
    description: &'static str,
) -> LocationRecord {
    LocationRecord {
        id,
        name,
        latitude,
        longitude,
        description: Some(description),
    }
}

const fn bhavan(id: &'static str, name: &'static str, latitude: f64, longitude: f64) -> LocationRecord {
    LocationRecord {
        id,
        name,
        latitude,
        longitude,
        description: None,
    }
}

/// Campus locations shown in the map view. The first record is the default
/// selection.
pub static LOCATIONS: &[LocationRecord] = &[
    place(
        "SAC",
        "SAC",
        17.54090448861708,
        78.57527103665713,
        "The Student Activities Centre (SAC) hosts club rooms, a dance room, gym, and space for practice and meetings. Great place for rehearsals or chilling.",
    ),
    place(
        "mess1",
        "Mess 1",
        17.542382724185554,
        78.57383333595718,
        "Mess 1 is the hotspot on campus. It's where most students eat, meet, and chill after classes. You'll often find music and friends hanging around here.",
    ),
    place(
        "mess2",
        "Mess 2",
        17.5449069215431,
        78.57519539689511,
        "Mess 2 is across the old hockey ground sits Mess 2. It's quieter, more spacious, and a good place if you want a peaceful meal.",
    ),
    place(
        "lib",
        "Library",
        17.545853792704165,
        78.57150321231636,
        "The campus library is a sanctuary for studying or finding reference books. It's open till late and has AC – major bonus during summers.",
    ),
    place(
        "audi",
        "Auditorium",
        17.545513750761355,
        78.57087843149998,
        "The main auditorium for events, talks, and presentations. A key venue for cultural events and academic seminars.",
    ),
    place(
        "cp",
        "Connaught Place",
        17.54203796959397,
        78.57576688860827,
        "Connaught Place is a central hub area on campus, popular for gatherings and social activities.",
    ),
    place(
        "fountain",
        "Fountain",
        17.54688441980337,
        78.57212431161547,
        "A scenic fountain area that's perfect for evening walks and photo sessions. A peaceful spot on campus.",
    ),
    place(
        "ll",
        "Lover's Lane",
        17.546845393115422,
        78.57298386645695,
        "A romantic walkway popular among couples and friends for evening strolls and quiet conversations.",
    ),
    place(
        "rnt",
        "Road Not Taken",
        17.54080249370755,
        78.57403043467615,
        "A scenic pathway that's perfect for contemplative walks and enjoying nature on campus. (The real Lover's Lane IYKYK)",
    ),
    place(
        "swmg",
        "Swimming Pool",
        17.540257034530534,
        78.57677623770725,
        "Campus swimming pool facility for recreation and fitness. A great place to cool off and stay active.",
    ),
    place(
        "rocks",
        "Rock Garden",
        17.5445544074219,
        78.5730200932779,
        "A beautifully landscaped rock garden area, perfect for relaxation and enjoying the natural beauty of campus.",
    ),
    place(
        "direc",
        "Director's Quarter",
        17.542873825568694,
        78.57651452810894,
        "The residential area for the campus director and administrative offices.",
    ),
    place(
        "mc",
        "Medical Centre",
        17.542041484380153,
        78.57645388966053,
        "Campus medical facility providing healthcare services to students and staff. Emergency and routine medical care available.",
    ),
    place(
        "ofg",
        "Old Football Ground",
        17.54359745113174,
        78.57499151300111,
        "Comes alive at night. Great spot for chill, impromptu matches and kicking back with the gang.",
    ),
    place(
        "nfg",
        "New Football Ground",
        17.540979058114377,
        78.57617359351049,
        "The fancier turf where official matches take place during fests. Still open for casual games when it is free; mix of pro vibes and chill scenes.",
    ),
    place(
        "cg",
        "Cricket Ground",
        17.539821974494863,
        78.57731941388154,
        "Classic spot for gully-style cricket or full-blown matches. Always buzzing in the evenings with bat, ball, and banter.",
    ),
    place(
        "vg",
        "Volleyball Ground",
        17.54299589606132,
        78.57538012811001,
        "Classic spot for gully-style cricket or full-blown matches. Always buzzing in the evenings with bat, ball, and banter.",
    ),
    place(
        "nab",
        "New Academic Block / Chess Courtyard",
        17.545894062510076,
        78.5695917200961,
        "New Academic Block is where a forgotten chess courtyard and a lone eatery quietly coexist.",
    ),
    place(
        "oab",
        "Old Academic Block / Library Lawns",
        17.545179101144704,
        78.57116941506344,
        "Old Academic Block is where things actually happen louder busier and way more alive than its newer sleepy sibling.",
    ),
    // Residential bhavans have no description.
    bhavan("valmiki", "Valmiki Bhavan", 17.545872952669946, 78.57470692913476),
    bhavan("gautam", "Gautam Bhavan", 17.541604563227047, 78.5751704189681),
    bhavan(
        "krishnaram",
        "Krishna Bhavan / Ram Bhavan",
        17.542746061934633,
        78.57393606166247,
    ),
    bhavan(
        "gandhibudh",
        "Gandhi Bhavan / Budh Bhavan",
        17.542578448925582,
        78.57427698469752,
    ),
    bhavan("vk", "Vishwakarma Bhavan", 17.54497398734834, 78.57644535482906),
    bhavan("shankar", "Shankar Bhavan", 17.544722406131818, 78.57494826204248),
    bhavan("vyas", "Vyas Bhavan", 17.54450090499368, 78.57535551716839),
    bhavan("malviya", "Malviya Bhavan", 17.540998514798122, 78.57482350258248),
    bhavan("meera", "Meera Bhavan", 17.54163340476832, 78.57402955343612),
    bhavan("ganga", "Ganga Bhavan", 17.541954864432526, 78.57339341827591),
];

// =============================================================================
// CREDITS
// =============================================================================

pub static CREDITS: Credits = Credits {
    developers: &[
        Person {
            name: "Shriniketh Deevanapalli",
            profile_url: Some("https://www.linkedin.com/in/sdeevanapalli"),
        },
        Person {
            name: "Kushagra Singh",
            profile_url: Some("https://www.linkedin.com/in/kushagra-singh47/"),
        },
    ],
    contributors: &[
        "Viswanath Reddy",
        "Shreyas Reddy",
        "Mohammed Abdul Rahman Khan",
        "Harsha Sista",
        "Rohit Dwivedula",
        "Rushabh Musthyala",
    ],
};
