//! Scripted console menu sessions

use std::io::Cursor;
use transport_optimizer::menu::Menu;
use transport_optimizer::network::{CityId, TicketId, TransportSession};

/// X - Y - Z line with distances 10 and 20
fn line_session() -> TransportSession {
    let mut session = TransportSession::new();
    let x = session.add_city("X", 100).unwrap();
    let y = session.add_city("Y", 200).unwrap();
    let z = session.add_city("Z", 300).unwrap();
    session.add_route(x, y, 10, 5).unwrap();
    session.add_route(y, z, 20, 8).unwrap();
    session
}

/// Feeds `script` to a menu over `session` and returns everything it printed
fn run_script(session: &mut TransportSession, script: &str) -> String {
    let mut output = Vec::new();
    Menu::new(session, Cursor::new(script), &mut output)
        .run()
        .expect("menu I/O should not fail");
    String::from_utf8(output).expect("menu output is UTF-8")
}

#[test]
fn test_shortest_route_is_printed_with_names() {
    let mut session = line_session();

    let output = run_script(&mut session, "3\n1\n3\n11\n");

    assert!(output.contains("Available Cities:\n1. X\n2. Y\n3. Z\n"));
    assert!(output.contains("Shortest Route:\nX -> Y -> Z (total 30 km)"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_tokens_may_share_a_line() {
    let mut session = line_session();

    let output = run_script(&mut session, "4 1 2 5 11");

    assert!(output.contains("Ticket booked successfully! Ticket ID: 1, Fare: $100"));
    assert!(output.contains("All booked tickets:\nTicket ID: 1, From: X, To: Y, Fare: $100"));
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn test_booking_without_direct_route_reports_error() {
    let mut session = line_session();

    let output = run_script(&mut session, "4 1 3 11");

    assert!(output.contains("Error: No route found between city 1 and city 3"));
    assert!(session.ledger().is_empty());
}

#[test]
fn test_add_city_and_route() {
    let mut session = line_session();

    let output = run_script(&mut session, "1 W 5000\n2 4 1 7 9\n6\n7\n11\n");

    assert!(output.contains("City added successfully! (ID 4)"));
    assert!(output.contains("Route added successfully!"));
    assert!(output.contains("4. W (Population : 5000)"));
    assert!(output.contains("Routes from W (Population : 5000):\nW to X - 7km in 9 mins"));
    assert_eq!(session.graph().get_route(CityId(1), CityId(4)).unwrap().distance, 7);
}

#[test]
fn test_delete_operations() {
    let mut session = line_session();
    session.book_ticket(CityId(1), CityId(2)).unwrap();
    session.book_ticket(CityId(2), CityId(3)).unwrap();

    let output = run_script(&mut session, "10 1\n10 1\n9 2 3\n8 2\n8 2\n11\n");

    assert!(output.contains("Ticket deleted successfully!"));
    assert!(output.contains("Error: Ticket 1 not found"));
    assert!(output.contains("Route deleted successfully!"));
    assert!(output.contains("City deleted successfully! (1 tickets cancelled)"));
    assert!(output.contains("Error: City 2 not found"));

    assert!(session.ledger().get(TicketId(2)).is_none());
    assert_eq!(session.graph().city_count(), 2);
}

#[test]
fn test_invalid_input_is_reported_and_retried() {
    let mut session = line_session();

    let output = run_script(&mut session, "42\nabc\n6\n11\n");

    assert!(output.contains("Invalid choice!"));
    assert!(output.contains("Invalid input \"abc\", please try again:"));
    assert!(output.contains("3. Z (Population : 300)"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let mut session = line_session();

    let output = run_script(&mut session, "6\n1 Half");

    assert!(output.contains("1. X (Population : 100)"));
    assert!(!output.contains("Goodbye!"));
    assert_eq!(session.graph().city_count(), 3);
}
