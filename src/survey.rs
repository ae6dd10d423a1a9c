use log::debug;

use crate::GeoPoint;
use crate::reception::{Mode, Reception};
use crate::scan::{self, Farthest};
use crate::unit::DistanceUnit;

/// Coverage of one reception test: where the fixed end stood, every position
/// of the moving end that received a message, and the farthest of those.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub mode: Mode,
    pub unit: DistanceUnit,
    pub reference: Option<GeoPoint>,
    pub hits: Vec<GeoPoint>,
    pub farthest: Option<Farthest>,
}

impl Survey {
    pub fn new(receptions: &[Reception], mode: Mode, unit: DistanceUnit) -> Survey {
        let reference = receptions.iter().find_map(|r| r.fixed(mode));
        let hits: Vec<GeoPoint> = receptions.iter().filter_map(|r| r.moving(mode)).collect();

        debug!("{:?}: reference {:?}, {} hits", mode, reference, hits.len());

        let farthest = reference.and_then(|reference| scan::farthest(&reference, &hits, unit));
        if let Some(f) = &farthest {
            debug!("Farthest hit #{} at {:.2} {}", f.index, f.distance, unit);
        }

        Survey { mode, unit, reference, hits, farthest }
    }

    /// Short label for the fixed end, as shown on the map marker.
    pub fn reference_label(&self) -> &'static str {
        match self.mode {
            Mode::ReceiverMoving => "TX",
            Mode::TransmitterMoving => "RX",
        }
    }
}
