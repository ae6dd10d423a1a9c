use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::GeoPoint;
use crate::error::Error;

const FIELDS: usize = 4;

/// Which end of the radio link was moving during the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The transmitter stayed put and the receiver drove around.
    ReceiverMoving,
    /// The receiver stayed put and the transmitter drove around.
    TransmitterMoving,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::ReceiverMoving
    }
}

/// One line of a reception log: the transmitter and receiver positions at the
/// time a message got through. A side without a position fix is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reception {
    pub transmitter: Option<GeoPoint>,
    pub receiver: Option<GeoPoint>,
}

impl Reception {
    pub fn fixed(&self, mode: Mode) -> Option<GeoPoint> {
        match mode {
            Mode::ReceiverMoving => self.transmitter,
            Mode::TransmitterMoving => self.receiver,
        }
    }

    pub fn moving(&self, mode: Mode) -> Option<GeoPoint> {
        match mode {
            Mode::ReceiverMoving => self.receiver,
            Mode::TransmitterMoving => self.transmitter,
        }
    }
}

/// Reads `tx_lat,tx_lng,rx_lat,rx_lng` records.
///
/// There is no header line. Blank lines and `#` comments are skipped, fields
/// past the fourth are ignored verbatim (quotes included) and a latitude of
/// exactly `0` means the side had no fix.
pub fn read_receptions<R: Read>(reader: R) -> Result<Vec<Reception>, Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut receptions = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        receptions.push(parse_record(&record)?);
    }

    debug!("Read {} reception records", receptions.len());
    Ok(receptions)
}

fn parse_record(record: &StringRecord) -> Result<Reception, Error> {
    let line = record.position().map_or(0, |pos| pos.line());
    if record.len() < FIELDS {
        return Err(Error::MissingFields { line, found: record.len() });
    }

    let mut values = [0.; FIELDS];
    for (column, value) in values.iter_mut().enumerate() {
        *value = parse_coordinate(&record[column], line, column + 1)?;
    }

    Ok(Reception {
        transmitter: to_fix(values[0], values[1], line),
        receiver: to_fix(values[2], values[3], line),
    })
}

/// Empty fields count as `0`, i.e. no fix. `inf` and `NaN` are rejected.
fn parse_coordinate(text: &str, line: u64, column: usize) -> Result<f64, Error> {
    if text.is_empty() {
        return Ok(0.);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber {
            line,
            column,
            text: text.to_string(),
        }),
    }
}

fn to_fix(latitude: f64, longitude: f64, line: u64) -> Option<GeoPoint> {
    if latitude == 0. {
        return None;
    }

    let point = GeoPoint::new(latitude, longitude);
    if !point.is_valid() {
        warn!("line {}: position {}, {} is out of range", line, latitude, longitude);
    }
    Some(point)
}
