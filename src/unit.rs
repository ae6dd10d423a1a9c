use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const KILOMETERS_PER_MILE: f64 = 1.609344;
pub const NAUTICAL_MILES_PER_MILE: f64 = 0.8684;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Miles,
    Kilometers,
    NauticalMiles,
}

impl DistanceUnit {
    /// Maps the single-letter codes `M`, `K` and `N` (any case) to a unit.
    ///
    /// Anything else falls back to miles.
    pub fn from_code(code: char) -> DistanceUnit {
        match code.to_ascii_uppercase() {
            'K' => DistanceUnit::Kilometers,
            'N' => DistanceUnit::NauticalMiles,
            _ => DistanceUnit::Miles,
        }
    }

    pub fn convert_miles(self, miles: f64) -> f64 {
        match self {
            DistanceUnit::Miles => miles,
            DistanceUnit::Kilometers => miles * KILOMETERS_PER_MILE,
            DistanceUnit::NauticalMiles => miles * NAUTICAL_MILES_PER_MILE,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::NauticalMiles => "nm",
        }
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        DistanceUnit::Miles
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "mi" | "miles" => Ok(DistanceUnit::Miles),
            "k" | "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "n" | "nm" | "nautical-miles" => Ok(DistanceUnit::NauticalMiles),
            _ => Err(Error::UnknownUnit { text: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(DistanceUnit::from_code('k'), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_code('K'), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_code('n'), DistanceUnit::NauticalMiles);
        assert_eq!(DistanceUnit::from_code('M'), DistanceUnit::Miles);
    }

    #[test]
    fn unknown_code_means_miles() {
        assert_eq!(DistanceUnit::from_code('x'), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::from_code(' '), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::default(), DistanceUnit::Miles);
    }

    #[test]
    fn parses_names_and_rejects_typos() {
        assert_eq!("KM".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert_eq!("nautical-miles".parse::<DistanceUnit>().unwrap(), DistanceUnit::NauticalMiles);
        assert_eq!(" mi ".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
        assert!("kms".parse::<DistanceUnit>().is_err());
    }
}
