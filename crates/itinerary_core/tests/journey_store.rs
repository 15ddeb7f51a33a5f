use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use itinerary_core::db::open_db_in_memory;
use itinerary_core::{
    decode_journey, encode_journey, Annotated, Costable, FileAttached, Identified, Journey,
    JourneyRepoError, JourneyRepository, SqliteJourneyRepository, VisaStatus,
};
use rusqlite::params;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Journey with every entity kind and most attributes populated.
fn sample_journey(load_set: &[Journey]) -> Journey {
    let mut journey = Journey::new("Foo Vacation", load_set);
    journey.set_details("Summer **loop**");
    journey.set_cons("long flights");

    let country = journey.add_country("New Zealand");
    country.set_visa(true);
    let visa = country.visa_mut().unwrap();
    visa.set_visa_type("NZeTA");
    visa.set_number("NZ-42");
    visa.set_entry_date(date(1));
    visa.set_exit_date(date(20));
    visa.set_information("apply online");
    visa.set_path_to_file("docs/nzeta.pdf");
    visa.set_cost(2300);

    let wellington = country.add_location("Wellington");
    wellington.set_arrival_date(date(1));
    wellington.set_departure_date(date(5));
    wellington.set_pros("harbour");
    wellington.add_photo("photos/harbour.jpg");

    let stay = wellington.add_accommodation("Harbour Hostel");
    stay.set_address("1 Quay St");
    stay.set_check_in_time(NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    stay.set_check_out_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    stay.set_rating(5);
    wellington.add_accommodation("Backup Motel");

    let walk = wellington.add_activity("Te Papa");
    walk.set_starting_time(at(2, 10, 0));
    walk.set_ending_time(at(2, 13, 0));
    walk.set_ending_address("55 Cable St");
    walk.add_item_to_bring("camera");

    let ticket = wellington.set_departure_ticket();
    ticket.set_transport_mode("ferry");
    ticket.set_transport_provider("Interislander");
    ticket.set_ticket_number("IX-7");
    ticket.set_departure_time(at(5, 9, 0));
    ticket.set_arrival_time(at(5, 12, 30));
    ticket.set_departure_address("Aotea Quay");
    ticket.set_arrival_address("Picton");

    let picton = country.add_location("Picton");
    picton.set_arrival_date(date(5));
    picton.set_departure_date(date(9));

    journey.add_country("Australia").set_visa(false);
    journey.add_country("Vietnam");
    journey
}

#[test]
fn document_round_trip_reconstructs_equal_tree() {
    let journey = sample_journey(&[]);

    let encoded = encode_journey(&journey).unwrap();
    let decoded = decode_journey(&encoded).unwrap();

    assert_eq!(decoded, journey);
}

#[test]
fn save_then_load_preserves_ids_values_and_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteJourneyRepository::try_new(&conn).unwrap();

    let journey = sample_journey(&[]);
    repo.save_journey(&journey).unwrap();

    let loaded = repo.load_journeys().unwrap();
    assert_eq!(loaded.len(), 1);
    let restored = &loaded[0];
    assert_eq!(restored, &journey);

    let countries: Vec<(u32, &str)> = restored
        .countries()
        .iter()
        .map(|country| (country.id(), country.name()))
        .collect();
    assert_eq!(
        countries,
        vec![(1, "New Zealand"), (2, "Australia"), (3, "Vietnam")]
    );

    let nz = restored.country(1).unwrap();
    assert_eq!(nz.length_of_stay(), Ok(8));
    let wellington = nz.location(1).unwrap();
    assert_eq!(wellington.accommodation(2).unwrap().name(), "Backup Motel");
    assert_eq!(
        wellington
            .departure_ticket()
            .unwrap()
            .trip_duration()
            .unwrap()
            .num_minutes(),
        210
    );
    match nz.visa() {
        VisaStatus::Required(visa) => {
            assert_eq!(visa.number(), Some("NZ-42"));
            assert_eq!(visa.path_to_file(), Some("docs/nzeta.pdf"));
        }
        other => panic!("unexpected visa status: {other:?}"),
    }
    assert_eq!(restored.country(2).unwrap().visa(), &VisaStatus::NotNeeded);
    assert_eq!(restored.country(3).unwrap().visa(), &VisaStatus::Unset);
}

#[test]
fn get_journey_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteJourneyRepository::try_new(&conn).unwrap();

    assert!(repo.get_journey(7).unwrap().is_none());
}

#[test]
fn load_orders_by_id_and_save_overwrites_whole_document() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteJourneyRepository::try_new(&conn).unwrap();

    let first = Journey::new("Foo Vacation", &[]);
    repo.save_journey(&first).unwrap();
    let second = Journey::new("Bar Vacation", &repo.load_journeys().unwrap());
    repo.save_journey(&second).unwrap();

    // Two stale copies of journey 1: the later save wins entirely.
    let mut copy_a = repo.get_journey(1).unwrap().unwrap();
    let mut copy_b = repo.get_journey(1).unwrap().unwrap();
    copy_a.add_country("Chile");
    copy_b.add_country("Peru");
    repo.save_journey(&copy_a).unwrap();
    repo.save_journey(&copy_b).unwrap();

    let loaded = repo.load_journeys().unwrap();
    let ids: Vec<u32> = loaded.iter().map(Identified::id).collect();
    assert_eq!(ids, vec![1, 2]);
    let names: Vec<&str> = loaded[0].countries().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Peru"]);
}

#[test]
fn save_rejects_slug_taken_by_other_journey() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteJourneyRepository::try_new(&conn).unwrap();

    let first = Journey::new("Foo Vacation", &[]);
    repo.save_journey(&first).unwrap();
    let clash = Journey::new("FOO VACATION", std::slice::from_ref(&first));

    let err = repo.save_journey(&clash).unwrap_err();
    assert!(matches!(err, JourneyRepoError::SlugConflict(ref slug) if slug == "foo_vacation"));
}

#[test]
fn load_rejects_document_stored_under_wrong_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteJourneyRepository::try_new(&conn).unwrap();
    repo.save_journey(&Journey::new("Foo Vacation", &[])).unwrap();

    conn.execute("UPDATE journeys SET id = ?1 WHERE id = 1;", params![5])
        .unwrap();

    let err = repo.load_journeys().unwrap_err();
    assert!(matches!(err, JourneyRepoError::InvalidData(_)));
}
