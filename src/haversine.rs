use crate::Point;
use crate::unit::{DistanceUnit, KILOMETERS_PER_MILE};

const R: f64 = 6371.; // kilometers

/// Great-circle distance via the haversine formula on a sphere of mean earth radius.
///
/// Better conditioned than the law of cosines for very short distances.
pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point, unit: DistanceUnit) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = (fix2.latitude() - fix1.latitude()).to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let a = (delta_phi / 2.).sin().powi(2) +
        phi1.cos() * phi2.cos() * (delta_rho / 2.).sin().powi(2);

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    unit.convert_miles(R * c / KILOMETERS_PER_MILE)
}
