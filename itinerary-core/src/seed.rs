//! Built-in itinerary, used until something valid has been stored.

use chrono::{NaiveDate, NaiveDateTime};

use crate::trip_item::{TripDetails, TripItem};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date out of range")
}

fn at(d: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    d.and_hms_opt(h, min, 0).expect("seed time out of range")
}

struct Leg {
    day: NaiveDate,
    depart: (u32, u32),
    arrive: (u32, u32),
    from: &'static str,
    to: &'static str,
    airline: &'static str,
    flight_no: &'static str,
}

fn flight(leg: Leg) -> TripItem {
    let title = format!("{} {}", leg.airline.split_whitespace().next().unwrap_or(leg.airline), leg.flight_no);
    TripItem::new(
        title,
        TripDetails::Flight {
            start: at(leg.day, leg.depart.0, leg.depart.1),
            end: at(leg.day, leg.arrive.0, leg.arrive.1),
            from: Some(leg.from.to_string()),
            to: Some(leg.to.to_string()),
            airline: Some(leg.airline.to_string()),
            flight_no: Some(leg.flight_no.to_string()),
        },
    )
}

fn stay(title: &str, (start, end): (NaiveDate, NaiveDate), place: &str, address: &str, color: &str) -> TripItem {
    TripItem::new(
        title,
        TripDetails::Stay {
            start,
            end,
            place: Some(place.to_string()),
            address: Some(address.to_string()),
            color: Some(color.to_string()),
        },
    )
}

/// The seed itinerary, in chronological order. Every call returns fresh ids.
pub fn seed_items() -> Vec<TripItem> {
    const ETIHAD_NOTES: &str = "Baggage 25kg | Booking GVALG7";

    vec![
        stay(
            "Airbnb - Khlong Toei",
            (date(2026, 1, 19), date(2026, 1, 22)),
            "Bangkok",
            "Sukhumvit 36, Khet Khlong Toei, Bangkok 10110, Thailand",
            "#4A90E2",
        )
        .with_booking_ref("HM4R535ZR9")
        .with_notes("Check-in 15:00 | Check-out 22.1"),
        flight(Leg {
            day: date(2026, 1, 19),
            depart: (6, 20),
            arrive: (11, 15),
            from: "TLV",
            to: "AUH",
            airline: "Etihad Airways",
            flight_no: "EY610",
        })
        .with_notes(ETIHAD_NOTES),
        flight(Leg {
            day: date(2026, 1, 19),
            depart: (14, 20),
            arrive: (23, 25),
            from: "AUH",
            to: "BKK",
            airline: "Etihad Airways",
            flight_no: "EY400",
        })
        .with_notes(ETIHAD_NOTES),
        stay(
            "Rustic River Boutique",
            (date(2026, 1, 22), date(2026, 1, 23)),
            "Chiang Mai",
            "84/1 Taiwang Road, T.Changmoi, A.Muang Chiang Mai, 50300 Chiang Mai, Thailand",
            "#50C878",
        )
        .with_notes("Check-in 14:00-20:00 | Check-out by 11:30 | Baggage storage"),
        flight(Leg {
            day: date(2026, 1, 22),
            depart: (13, 55),
            arrive: (15, 5),
            from: "DMK",
            to: "CNX",
            airline: "AirAsia",
            flight_no: "FD3433",
        })
        .with_notes("Confirmation: Z7V1RL"),
        stay(
            "Airbnb - cozy 2 storey house, Maehi",
            (date(2026, 1, 23), date(2026, 1, 31)),
            "Pai",
            "170 Moo 5, Maehi, Pai, Maehongson 58130, Thailand",
            "#FF8C42",
        )
        .with_booking_ref("HM5DD8M4SM")
        .with_notes("Check-in 14:00 | Check-out 31.1"),
        stay(
            "Airbnb - Room by the sea",
            (date(2026, 2, 5), date(2026, 2, 23)),
            "Ko Pha-ngan",
            "Ko Pha-ngan Sub-district, Surat Thani 84280, Thailand",
            "#9B59B6",
        )
        .with_booking_ref("HMDEDZHAPY")
        .with_notes("Check-in 12:00 | Check-out 23.2"),
        flight(Leg {
            day: date(2026, 2, 25),
            depart: (14, 40),
            arrive: (19, 5),
            from: "BKK",
            to: "AUH",
            airline: "Etihad Airways",
            flight_no: "EY405",
        })
        .with_notes(ETIHAD_NOTES),
        flight(Leg {
            day: date(2026, 2, 25),
            depart: (21, 50),
            arrive: (23, 40),
            from: "AUH",
            to: "TLV",
            airline: "Etihad Airways",
            flight_no: "EY599",
        })
        .with_notes(ETIHAD_NOTES),
    ]
}
