use log::trace;

use crate::{GeoPoint, Point};
use crate::cosine::distance;
use crate::parallel::opt_par_map;
use crate::unit::DistanceUnit;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Farthest {
    /// Position of the point in the scanned slice
    pub index: usize,
    pub point: GeoPoint,
    pub distance: f64,
}

/// Finds the point farthest from `reference` in a single pass.
///
/// A later point only replaces the current candidate when it is strictly
/// farther, so among equal distances the first one wins. Points whose distance
/// is NaN are never selected.
pub fn farthest<T: Point>(reference: &dyn Point, points: &[T], unit: DistanceUnit) -> Option<Farthest> {
    let mut best: Option<Farthest> = None;

    for (index, point) in points.iter().enumerate() {
        let d = distance(reference, point, unit);
        if d.is_nan() {
            trace!("Skipping point #{} with undefined distance", index);
            continue;
        }

        if best.map_or(true, |b| d > b.distance) {
            trace!("-- New farthest point #{}: {:.3} {}", index, d, unit);
            best = Some(Farthest {
                index,
                point: GeoPoint::new(point.latitude(), point.longitude()),
                distance: d,
            });
        }
    }

    best
}

/// Distance from `reference` to each of `points`, in input order.
pub fn distances<T: Point>(reference: &dyn Point, points: &[T], unit: DistanceUnit) -> Vec<f64> {
    let reference = GeoPoint::new(reference.latitude(), reference.longitude());
    opt_par_map(points, |point| distance(&reference, point, unit))
}
