//! Seed data loading
//!
//! Reads the two whitespace-delimited startup files:
//!
//! ```text
//! cities.txt   <cityId> <name> <population>
//! routes.txt   <sourceCityId> <destCityId> <distance> <time>
//! ```
//!
//! Bad lines are logged and skipped; they never undo records loaded before them.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::network::{City, CityId, TransportSession};

/// Outcome of loading one seed source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    /// Records registered in the session
    pub loaded: usize,
    /// Lines that were malformed or rejected
    pub skipped: usize,
}

impl SeedReport {
    fn record(&mut self, line_number: usize, line: &str, outcome: Result<()>) {
        match outcome {
            Ok(()) => self.loaded += 1,
            Err(e) => {
                warn!("Skipping line {} ({:?}): {:#}", line_number, line, e);
                self.skipped += 1;
            }
        }
    }
}

fn parse_field<T>(fields: &mut std::str::SplitWhitespace<'_>, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = fields
        .next()
        .with_context(|| format!("missing {}", name))?;
    raw.parse()
        .with_context(|| format!("invalid {} {:?}", name, raw))
}

fn parse_city_line(line: &str) -> Result<City> {
    let mut fields = line.split_whitespace();
    let id: u32 = parse_field(&mut fields, "city id")?;
    let name: String = parse_field(&mut fields, "city name")?;
    let population: u64 = parse_field(&mut fields, "population")?;
    Ok(City::new(CityId(id), name, population))
}

fn parse_route_line(line: &str) -> Result<(CityId, CityId, u32, u32)> {
    let mut fields = line.split_whitespace();
    let source: u32 = parse_field(&mut fields, "source city id")?;
    let destination: u32 = parse_field(&mut fields, "destination city id")?;
    let distance: u32 = parse_field(&mut fields, "distance")?;
    let time: u32 = parse_field(&mut fields, "time")?;
    Ok((CityId(source), CityId(destination), distance, time))
}

/// Registers every city line read from `reader`
pub fn parse_cities<R: BufRead>(reader: R, session: &mut TransportSession) -> SeedReport {
    let mut report = SeedReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Stopped reading cities at line {}: {}", line_number, e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse_city_line(&line)
            .and_then(|city| session.insert_city(city).map_err(Into::into));
        report.record(line_number, &line, outcome);
    }

    report
}

/// Registers every route line read from `reader`
///
/// Routes naming a city that is not registered are rejected.
pub fn parse_routes<R: BufRead>(reader: R, session: &mut TransportSession) -> SeedReport {
    let mut report = SeedReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Stopped reading routes at line {}: {}", line_number, e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse_route_line(&line).and_then(|(source, destination, distance, time)| {
            session
                .add_route(source, destination, distance, time)
                .context("invalid city ID in route data")
        });
        report.record(line_number, &line, outcome);
    }

    report
}

/// Loads cities from a seed file
pub fn load_cities(path: impl AsRef<Path>, session: &mut TransportSession) -> Result<SeedReport> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open cities file {}", path.display()))?;
    let report = parse_cities(BufReader::new(file), session);
    info!(
        "Loaded {} cities from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped
    );
    Ok(report)
}

/// Loads routes from a seed file
pub fn load_routes(path: impl AsRef<Path>, session: &mut TransportSession) -> Result<SeedReport> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open routes file {}", path.display()))?;
    let report = parse_routes(BufReader::new(file), session);
    info!(
        "Loaded {} routes from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped
    );
    Ok(report)
}
