//! Interactive command menu
//!
//! Reads whitespace-separated tokens from any buffered reader and writes
//! prompts and results to any writer, so a session can be scripted from tests
//! as easily as driven from a terminal. Failed operations are reported and
//! the menu carries on.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::network::{CityId, NetworkError, TicketId, TransportSession};

/// Whether the menu loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Console menu driving one transport session
pub struct Menu<'a, R, W> {
    session: &'a mut TransportSession,
    input: R,
    output: W,
    /// Tokens read but not consumed yet
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(session: &'a mut TransportSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Runs the menu until the user exits or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let step = self
                .prompt::<u32>("")
                .and_then(|choice| self.dispatch(choice));

            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    writeln!(self.output)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Transport Optimizer Menu:")?;
        writeln!(self.output, "1. Add New City")?;
        writeln!(self.output, "2. Add New Route")?;
        writeln!(self.output, "3. Find Shortest Route")?;
        writeln!(self.output, "4. Book a Ticket")?;
        writeln!(self.output, "5. View All Tickets")?;
        writeln!(self.output, "6. View All Cities")?;
        writeln!(self.output, "7. View All Routes")?;
        writeln!(self.output, "8. Delete a City")?;
        writeln!(self.output, "9. Delete a Route")?;
        writeln!(self.output, "10. Delete a Ticket")?;
        writeln!(self.output, "11. Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()
    }

    fn dispatch(&mut self, choice: u32) -> io::Result<Step> {
        match choice {
            1 => self.add_city()?,
            2 => self.add_route()?,
            3 => self.find_shortest_route()?,
            4 => self.book_ticket()?,
            5 => self.view_tickets()?,
            6 => self.view_cities()?,
            7 => self.view_routes()?,
            8 => self.delete_city()?,
            9 => self.delete_route()?,
            10 => self.delete_ticket()?,
            11 => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Step::Exit);
            }
            _ => writeln!(self.output, "Invalid choice!")?,
        }
        Ok(Step::Continue)
    }

    fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prints `message` (when non-empty) and reads the next token as a `T`,
    /// asking again until one parses
    fn prompt<T: FromStr>(&mut self, message: &str) -> io::Result<T> {
        if !message.is_empty() {
            writeln!(self.output, "{}", message)?;
        }
        loop {
            let token = self.next_token()?;
            match token.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.output, "Invalid input {:?}, please try again:", token)?
                }
            }
        }
    }

    fn report<T>(
        &mut self,
        result: Result<T, NetworkError>,
        success: impl FnOnce(T) -> String,
    ) -> io::Result<()> {
        match result {
            Ok(value) => writeln!(self.output, "{}", success(value)),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn list_available_cities(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available Cities:")?;
        let lines: Vec<String> = self
            .session
            .graph()
            .get_cities()
            .into_iter()
            .map(|city| format!("{}. {}", city.id(), city.name()))
            .collect();
        write_lines(&mut self.output, lines)
    }

    fn prompt_city_pair(&mut self, first: &str, second: &str) -> io::Result<(CityId, CityId)> {
        self.list_available_cities()?;
        let a = self.prompt(&format!("Select {} City ID:", first))?;
        let b = self.prompt(&format!("Select {} City ID:", second))?;
        Ok((CityId(a), CityId(b)))
    }

    fn add_city(&mut self) -> io::Result<()> {
        let name: String = self.prompt("Enter City Name:")?;
        let population: u64 = self.prompt("Enter Population:")?;
        let result = self.session.add_city(name, population);
        self.report(result, |id| format!("City added successfully! (ID {})", id))
    }

    fn add_route(&mut self) -> io::Result<()> {
        let (source, destination) = self.prompt_city_pair("Source", "Destination")?;
        let distance: u32 = self.prompt("Enter Distance (in km):")?;
        let time: u32 = self.prompt("Enter Time (in mins):")?;
        let result = self.session.add_route(source, destination, distance, time);
        self.report(result, |()| "Route added successfully!".to_string())
    }

    fn find_shortest_route(&mut self) -> io::Result<()> {
        let (start, end) = self.prompt_city_pair("Start", "End")?;
        let graph = self.session.graph();
        let result = self.session.find_shortest_route(start, end).map(|path| {
            let names: Vec<&str> = path
                .cities
                .iter()
                .filter_map(|id| graph.get_city_by_id(*id))
                .map(|city| city.name())
                .collect();
            format!("{} (total {} km)", names.join(" -> "), path.distance)
        });
        self.report(result, |route| format!("Shortest Route:\n{}", route))
    }

    fn book_ticket(&mut self) -> io::Result<()> {
        let (source, destination) = self.prompt_city_pair("Start", "End")?;
        let result = self
            .session
            .book_ticket(source, destination)
            .map(|ticket| (ticket.id(), ticket.fare()));
        self.report(result, |(id, fare)| {
            format!("Ticket booked successfully! Ticket ID: {}, Fare: ${}", id, fare)
        })
    }

    fn view_tickets(&mut self) -> io::Result<()> {
        writeln!(self.output, "All booked tickets:")?;
        let lines: Vec<String> = self
            .session
            .list_tickets()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        write_lines(&mut self.output, lines)
    }

    fn view_cities(&mut self) -> io::Result<()> {
        let lines: Vec<String> = self
            .session
            .graph()
            .get_cities()
            .into_iter()
            .map(|city| format!("{}. {}", city.id(), city))
            .collect();
        write_lines(&mut self.output, lines)
    }

    fn view_routes(&mut self) -> io::Result<()> {
        let graph = self.session.graph();
        let mut lines = Vec::new();
        for (city, routes) in graph.routes_by_city() {
            lines.push(format!("Routes from {}:", city));
            lines.extend(routes.iter().map(|route| graph.describe_route(route)));
        }
        write_lines(&mut self.output, lines)
    }

    fn delete_city(&mut self) -> io::Result<()> {
        let id: u32 = self.prompt("Enter City ID to delete:")?;
        let result = self.session.delete_city(CityId(id));
        self.report(result, |removal| {
            format!(
                "City deleted successfully! ({} tickets cancelled)",
                removal.tickets_removed
            )
        })
    }

    fn delete_route(&mut self) -> io::Result<()> {
        let (source, destination) = self.prompt_city_pair("Source", "Destination")?;
        let result = self.session.delete_route(source, destination);
        self.report(result, |removed| match removed {
            0 => "No route existed between those cities.".to_string(),
            _ => "Route deleted successfully!".to_string(),
        })
    }

    fn delete_ticket(&mut self) -> io::Result<()> {
        let id: u64 = self.prompt("Enter Ticket ID to delete:")?;
        let result = self.session.delete_ticket(TicketId(id));
        self.report(result, |_| "Ticket deleted successfully!".to_string())
    }
}

fn write_lines<W: Write>(
    output: &mut W,
    lines: impl IntoIterator<Item = impl Display>,
) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
