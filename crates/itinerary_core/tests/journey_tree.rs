use chrono::{NaiveDate, NaiveTime};
use itinerary_core::{
    next_free_id, Annotated, Costable, FileAttached, Identified, Journey, VisaStatus,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

#[test]
fn journey_ids_are_unique_across_the_load_set() {
    let mut load_set: Vec<Journey> = Vec::new();
    for name in ["Foo Vacation", "Bar Vacation", "Baz Vacation"] {
        let journey = Journey::new(name, &load_set);
        load_set.push(journey);
    }

    let ids: Vec<u32> = load_set.iter().map(Identified::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn journey_id_reuses_lowest_gap_in_load_set() {
    let first = Journey::new("Foo Vacation", &[]);
    let second = Journey::new("Bar Vacation", std::slice::from_ref(&first));
    let third = Journey::new("Baz Vacation", &[first, second]);
    assert_eq!(third.id(), 3);

    // Only journey 3 remains: 1 is free again.
    let fourth = Journey::new("Qux Vacation", std::slice::from_ref(&third));
    assert_eq!(fourth.id(), 1);
}

#[test]
fn sibling_ids_increase_in_allocation_order_per_parent() {
    let mut journey = Journey::new("Foo Vacation", &[]);
    let nz_id = journey.add_country("New Zealand").id();
    let au_id = journey.add_country("Australia").id();
    let vn_id = journey.add_country("Vietnam").id();
    assert_eq!((nz_id, au_id, vn_id), (1, 2, 3));

    // Location ids restart per country.
    let nz = journey.country_mut(nz_id).unwrap();
    assert_eq!(nz.add_location("Wellington").id(), 1);
    assert_eq!(nz.add_location("Auckland").id(), 2);
    let au = journey.country_mut(au_id).unwrap();
    assert_eq!(au.add_location("Sydney").id(), 1);

    let names: Vec<&str> = journey.countries().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["New Zealand", "Australia", "Vietnam"]);
}

#[test]
fn allocator_scans_existing_ids_instead_of_counting() {
    assert_eq!(next_free_id([2, 3, 5]), 1);
    assert_eq!(next_free_id([1, 2, 5]), 3);
}

#[test]
fn location_children_are_appended_with_scoped_ids() {
    let mut journey = Journey::new("Foo Vacation", &[]);
    let location = journey.add_country("Japan").add_location("Kyoto");

    let hostel = location.add_accommodation("Hostel");
    hostel.set_arrival_date(date(1));
    hostel.set_departure_date(date(4));
    hostel.set_check_in_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    hostel.set_booking_service("HostelWorld");
    hostel.set_cost(4500);
    hostel.set_rating(4);
    assert_eq!(hostel.id(), 1);
    // Names are not keys.
    assert_eq!(location.add_accommodation("Hostel").id(), 2);

    let hike = location.add_activity("Fushimi Inari hike");
    hike.add_item_to_bring("water");
    hike.add_item_to_bring("water");
    hike.set_starting_address("Fushimi Inari Taisha");
    assert_eq!(hike.id(), 1);

    location.add_photo("photos/torii.jpg");
    location.add_photo("photos/torii.jpg");

    assert_eq!(location.accommodations().len(), 2);
    let stored = location.accommodation(1).unwrap();
    assert_eq!(stored.booking_service(), Some("HostelWorld"));
    assert_eq!(stored.cost(), Some(4500));
    assert_eq!(stored.rating(), Some(4));
    assert_eq!(stored.check_out_time(), None);
    assert_eq!(location.activity(1).unwrap().to_bring(), ["water", "water"]);
    assert_eq!(location.photos(), ["photos/torii.jpg", "photos/torii.jpg"]);
    assert!(location.activity(2).is_none());
}

#[test]
fn departure_ticket_is_a_replaceable_singleton() {
    let mut journey = Journey::new("Foo Vacation", &[]);
    let location = journey.add_country("Japan").add_location("Kyoto");
    assert!(location.departure_ticket().is_none());

    let ticket = location.set_departure_ticket();
    ticket.set_transport_mode("train");
    ticket.set_path_to_file("tickets/shinkansen.pdf");
    assert_eq!(
        location.departure_ticket().unwrap().transport_mode(),
        Some("train")
    );

    let replaced = location.set_departure_ticket();
    assert_eq!(replaced.transport_mode(), None);
    assert_eq!(replaced.path_to_file(), None);
}

#[test]
fn notes_are_set_and_rendered_per_entity() {
    let mut journey = Journey::new("Foo Vacation", &[]);
    journey.set_details("**Big** trip");
    let country = journey.add_country("Japan");
    country.set_pros("- trains\n- food");
    country.set_visa(false);

    assert_eq!(journey.notes().details(), Some("**Big** trip"));
    assert_eq!(
        journey.notes().rendered_details(),
        "<p><strong>Big</strong> trip</p>\n"
    );
    let country = journey.country(1).unwrap();
    assert_eq!(
        country.notes().rendered_pros(),
        "<ul>\n<li>trains</li>\n<li>food</li>\n</ul>\n"
    );
    assert_eq!(country.notes().rendered_cons(), "");
    assert_eq!(country.visa(), &VisaStatus::NotNeeded);
}
