//! Seed file parsing

use std::io::Cursor;
use transport_optimizer::network::{CityId, TransportSession};
use transport_optimizer::seed::{load_cities, load_routes, parse_cities, parse_routes, SeedReport};

#[test]
fn test_parse_cities_skips_bad_lines() {
    let input = "1 Springfield 30000\n\
                 \n\
                 2 Shelbyville\n\
                 3 Ogdenville lots\n\
                 1 Duplicate 5\n\
                 4   Capital   1200000  \n";
    let mut session = TransportSession::new();

    let report = parse_cities(Cursor::new(input), &mut session);

    assert_eq!(report, SeedReport { loaded: 2, skipped: 3 });
    let names: Vec<&str> = session
        .graph()
        .get_cities()
        .into_iter()
        .map(|city| city.name())
        .collect();
    assert_eq!(names, vec!["Springfield", "Capital"]);
    assert_eq!(
        session.graph().get_city_by_id(CityId(4)).unwrap().population(),
        1_200_000
    );
}

#[test]
fn test_parse_routes_rejects_unknown_cities() {
    let mut session = TransportSession::new();
    parse_cities(Cursor::new("1 A 10\n2 B 20\n3 C 30\n"), &mut session);

    let input = "1 2 10 5\n2 7 4 4\n2 3 x 8\n2 3 20 8\n";
    let report = parse_routes(Cursor::new(input), &mut session);

    assert_eq!(report, SeedReport { loaded: 2, skipped: 2 });
    assert!(session.graph().get_route(CityId(2), CityId(1)).is_some());
    assert!(session.graph().get_route(CityId(3), CityId(2)).is_some());
    assert!(session.graph().get_routes_from_city(CityId(7)).is_err());
    assert_eq!(session.graph().route_count(), 4);
}

#[test]
fn test_load_fixture_files() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
    let mut session = TransportSession::new();

    let cities = load_cities(format!("{}/cities.txt", dir), &mut session).unwrap();
    let routes = load_routes(format!("{}/routes.txt", dir), &mut session).unwrap();

    assert_eq!(cities, SeedReport { loaded: 3, skipped: 0 });
    assert_eq!(routes, SeedReport { loaded: 2, skipped: 1 });

    let path = session.find_shortest_route(CityId(1), CityId(3)).unwrap();
    assert_eq!(path.distance, 30);
}

#[test]
fn test_missing_file_keeps_loaded_cities() {
    let mut session = TransportSession::new();
    parse_cities(Cursor::new("1 A 10\n"), &mut session);

    let error = load_routes("/nonexistent/routes.txt", &mut session).unwrap_err();

    assert!(format!("{:#}", error).contains("/nonexistent/routes.txt"));
    assert_eq!(session.graph().city_count(), 1);
}
