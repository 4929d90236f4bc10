use crate::error::PlaneError;
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

/// Field separator shared by the queue store and the takeoff log.
pub const SEPARATOR: &str = " - ";
const TAKEOFF_MARKER: &str = "Took Off";

/// A plane waiting for the runway. Only constructible through [`Plane::new`],
/// so every value serializes to a line that parses back to itself.
#[derive(Clone, Debug, PartialEq, Eq, Tabled)]
pub struct Plane {
    #[tabled(rename = "Flight")]
    flight_number: String,
    #[tabled(rename = "Airline")]
    airline_name: String,
}

impl Plane {
    pub fn new(flight_number: &str, airline_name: &str) -> Result<Plane, PlaneError> {
        let flight_number = flight_number.trim_end();
        let airline_name = airline_name.trim_end();

        if flight_number.is_empty() {
            return Err(PlaneError::EmptyFlightNumber);
        }
        if airline_name.is_empty() {
            return Err(PlaneError::EmptyAirlineName);
        }
        // The first separator on the line must be the one after the flight number.
        let head = format!("{flight_number}{SEPARATOR}");
        if head.find(SEPARATOR) != Some(flight_number.len()) {
            return Err(PlaneError::SeparatorInFlightNumber(SEPARATOR));
        }
        if flight_number.contains(['\n', '\r']) {
            return Err(PlaneError::LineBreak("flight number"));
        }
        if airline_name.contains(['\n', '\r']) {
            return Err(PlaneError::LineBreak("airline name"));
        }

        Ok(Plane {
            flight_number: flight_number.to_string(),
            airline_name: airline_name.to_string(),
        })
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn airline_name(&self) -> &str {
        &self.airline_name
    }

    /// One record of the queue store: `<flight> - <airline>`.
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.flight_number, SEPARATOR, self.airline_name)
    }

    /// One record of the takeoff log: `<flight> - <airline> - Took Off`.
    pub fn to_takeoff_line(&self) -> String {
        format!("{}{}{}", self.to_line(), SEPARATOR, TAKEOFF_MARKER)
    }

    /// Splits on the first separator. `None` when the separator is missing or
    /// either side does not make a valid plane.
    pub fn parse_line(line: &str) -> Option<Plane> {
        let (flight_number, airline_name) = line.split_once(SEPARATOR)?;
        Plane::new(flight_number, airline_name).ok()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_whitespace_only() {
        let plane = Plane::new("  LO281 \t", "LOT Polish Airlines  ").unwrap();
        assert_eq!("  LO281", plane.flight_number());
        assert_eq!("LOT Polish Airlines", plane.airline_name());
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        assert_eq!(Err(PlaneError::EmptyFlightNumber), Plane::new("   ", "LOT"));
        assert_eq!(Err(PlaneError::EmptyAirlineName), Plane::new("LO281", ""));
        assert_eq!(Err(PlaneError::EmptyAirlineName), Plane::new("LO281", " \t"));
    }

    #[test]
    fn test_new_rejects_unserializable_fields() {
        assert_eq!(
            Err(PlaneError::SeparatorInFlightNumber(SEPARATOR)),
            Plane::new("LO - 281", "LOT")
        );
        assert_eq!(
            Err(PlaneError::SeparatorInFlightNumber(SEPARATOR)),
            Plane::new("LO281 -", "LOT")
        );
        assert_eq!(Err(PlaneError::LineBreak("flight number")), Plane::new("LO\n281", "LOT"));
        assert_eq!(Err(PlaneError::LineBreak("airline name")), Plane::new("LO281", "L\rOT"));
    }

    #[test]
    fn test_airline_may_contain_separator() {
        let plane = Plane::new("BA1", "British - Airways").unwrap();
        assert_eq!("BA1 - British - Airways", plane.to_line());
        assert_eq!(Some(plane), Plane::parse_line("BA1 - British - Airways"));
    }

    #[test]
    fn test_lines() {
        let plane = Plane::new("F1", "A1").unwrap();
        assert_eq!("F1 - A1", plane.to_line());
        assert_eq!("F1 - A1 - Took Off", plane.to_takeoff_line());
        assert_eq!("F1 - A1", plane.to_string());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(Plane::new("F1", "A1").ok(), Plane::parse_line("F1 - A1"));
        assert_eq!(None, Plane::parse_line("F1 A1"));
        assert_eq!(None, Plane::parse_line("F1-A1"));
        assert_eq!(None, Plane::parse_line(""));
        assert_eq!(None, Plane::parse_line("F1 - "));
        assert_eq!(None, Plane::parse_line(" - A1"));
    }
}
