//! Coverage from a recorded GPS track and a raw GDL90 message log.
//!
//! Each uplink message is credited to the first track fix that follows it
//! within the matching tolerance. Fixes with messages are hits, the rest are
//! misses.

use std::io::Read;

use chrono::{DateTime, Duration, Utc};
use csv::{ReaderBuilder, Trim};
use log::{debug, trace, warn};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::GeoPoint;
use crate::error::Error;
use crate::scan::{self, Farthest};
use crate::unit::DistanceUnit;

/// GDL90 frames starting with this are UAT uplink messages.
pub const UPLINK_PREFIX: &str = "7e07";

pub const DEFAULT_TOLERANCE_MS: i64 = 1000;

/// One `<when>` / `<gx:coord>` pair of a KML track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFix {
    pub time: DateTime<Utc>,
    pub position: GeoPoint,
    /// Meters
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub position: GeoPoint,
    pub messages: usize,
}

impl TrackPoint {
    pub fn is_hit(&self) -> bool {
        self.messages > 0
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TrackField {
    When,
    Coord,
}

/// Reads the first `gx:Track` of a KML document.
pub fn read_track_kml(xml: &str) -> Result<Vec<TrackFix>, Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut whens = Vec::new();
    let mut coords = Vec::new();
    let mut in_track = false;
    let mut field = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Track" => in_track = true,
                b"when" if in_track => field = Some(TrackField::When),
                b"coord" if in_track => field = Some(TrackField::Coord),
                _ => {}
            },
            Event::Text(t) => {
                let text = String::from_utf8_lossy(&t).into_owned();
                match field {
                    Some(TrackField::When) => whens.push(text),
                    Some(TrackField::Coord) => coords.push(text),
                    None => {}
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"Track" if in_track => break,
                b"when" | b"coord" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if whens.len() != coords.len() {
        return Err(Error::TrackMismatch { whens: whens.len(), coords: coords.len() });
    }

    let fixes = whens
        .iter()
        .zip(&coords)
        .enumerate()
        .map(|(index, (when, coord))| parse_fix(index, when, coord))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Read {} track fixes", fixes.len());
    Ok(fixes)
}

fn parse_fix(index: usize, when: &str, coord: &str) -> Result<TrackFix, Error> {
    let time = DateTime::parse_from_rfc3339(when)
        .map_err(|_| Error::InvalidTrackFix { index, text: when.to_string() })?
        .with_timezone(&Utc);

    // `gx:coord` is "lng lat alt"
    let values = coord
        .split_whitespace()
        .map(|v| v.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>();

    match values.as_deref() {
        Some([lng, lat, alt]) => Ok(TrackFix {
            time,
            position: GeoPoint::new(*lat, *lng),
            altitude: *alt,
        }),
        _ => Err(Error::InvalidTrackFix { index, text: coord.to_string() }),
    }
}

/// Reads the timestamps of uplink frames from a `seconds,hexframe` message log.
///
/// Comments, lines without a frame and non-uplink frames are skipped.
pub fn read_uplinks<R: Read>(reader: R) -> Result<Vec<DateTime<Utc>>, Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut uplinks = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() < 2 || !record[1].starts_with(UPLINK_PREFIX) {
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        let text = &record[0];
        let time = text
            .parse::<f64>()
            .ok()
            .filter(|ts| ts.is_finite())
            .and_then(|ts| {
                let secs = ts.trunc();
                DateTime::<Utc>::from_timestamp(secs as i64, ((ts - secs) * 1e9) as u32)
            })
            .ok_or_else(|| Error::InvalidTimestamp { line, text: text.to_string() })?;

        uplinks.push(time);
    }

    debug!("Read {} uplink messages", uplinks.len());
    Ok(uplinks)
}

/// Credits every message to the first fix that comes after it by less than
/// `tolerance`. Returns the track points and the number of messages no fix
/// claimed.
pub fn associate(track: &[TrackFix], messages: &[DateTime<Utc>], tolerance: Duration) -> (Vec<TrackPoint>, usize) {
    let mut pending = messages.to_vec();

    let points = track
        .iter()
        .map(|fix| {
            let before = pending.len();
            pending.retain(|ts| !(fix.time > *ts && fix.time - *ts < tolerance));
            TrackPoint { position: fix.position, messages: before - pending.len() }
        })
        .collect();

    if !pending.is_empty() {
        warn!("{} messages could not be matched to a track fix", pending.len());
    }

    (points, pending.len())
}

/// A dot on the map: the position, its label and whether anything was received there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub position: GeoPoint,
    pub messages: usize,
    pub hit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackSurvey {
    pub reference: GeoPoint,
    pub unit: DistanceUnit,
    pub points: Vec<TrackPoint>,
    /// Farthest hit; `index` counts hits only
    pub farthest: Option<Farthest>,
}

impl TrackSurvey {
    pub fn new(points: Vec<TrackPoint>, reference: GeoPoint, unit: DistanceUnit) -> TrackSurvey {
        let hits = points.iter().filter(|p| p.is_hit()).map(|p| p.position).collect::<Vec<_>>();
        debug!("{} of {} track points received messages", hits.len(), points.len());

        let farthest = scan::farthest(&reference, &hits, unit);
        if let Some(f) = &farthest {
            debug!("Farthest hit #{} at {:.2} {}", f.index, f.distance, unit);
        }

        TrackSurvey { reference, unit, points, farthest }
    }

    /// All hits plus every `miss_sampling`-th miss, in track order.
    ///
    /// A sampling of `0` leaves the misses out entirely.
    pub fn dots(&self, miss_sampling: usize) -> Vec<Dot> {
        let mut misses = 0;
        let mut dots = Vec::new();

        for point in &self.points {
            let keep = if point.is_hit() {
                true
            } else {
                misses += 1;
                miss_sampling > 0 && (misses - 1) % miss_sampling == 0
            };

            if keep {
                dots.push(Dot { position: point.position, messages: point.messages, hit: point.is_hit() });
            } else {
                trace!("Dropping miss at {:?}", point.position);
            }
        }

        dots
    }
}
