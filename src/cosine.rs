use crate::Point;
use crate::unit::DistanceUnit;

/// Statute miles per degree of arc: 60 nautical miles of 1.1515 statute miles each.
const MILES_PER_DEGREE: f64 = 60. * 1.1515;

/// Great-circle distance between two points using the spherical law of cosines.
///
/// Identical points give exactly `0`. The cosine of the central angle is
/// clamped to `[-1, 1]` so rounding near the poles or antipodes can not push
/// `acos` out of its domain.
pub fn distance(p1: &dyn Point, p2: &dyn Point, unit: DistanceUnit) -> f64 {
    if p1.latitude() == p2.latitude() && p1.longitude() == p2.longitude() {
        return 0.;
    }

    let phi1 = p1.latitude().to_radians();
    let phi2 = p2.latitude().to_radians();
    let theta = (p1.longitude() - p2.longitude()).to_radians();

    let cos_angle = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * theta.cos();
    let angle = cos_angle.clamp(-1., 1.).acos().to_degrees();

    unit.convert_miles(angle * MILES_PER_DEGREE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    #[test]
    fn clamps_rounding_overshoot() {
        // these round to a cosine of 1.0000000000000002
        let p1 = GeoPoint::new(-14.921337227825461, -88.65579938381894);
        let p2 = GeoPoint::new(-14.921337227825461, -88.65579928381895);

        for &unit in &[DistanceUnit::Miles, DistanceUnit::Kilometers, DistanceUnit::NauticalMiles] {
            let d = distance(&p1, &p2, unit);
            assert!(d.is_finite());
            assert!(d >= 0.);
            assert_eq!(d, distance(&p2, &p1, unit));
        }
    }

    #[test]
    fn nan_propagates() {
        let p1 = GeoPoint::new(std::f64::NAN, 0.);
        let p2 = GeoPoint::new(1., 1.);
        assert!(distance(&p1, &p2, DistanceUnit::Kilometers).is_nan());
    }
}
