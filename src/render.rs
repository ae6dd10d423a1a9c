use crate::GeoPoint;
use crate::survey::Survey;
use crate::track::TrackSurvey;

/// Marker in the HTML template that gets replaced by the map script.
pub const PLACEHOLDER: &str = "DATA_HERE";

/// Leaflet page defining `addMarker`, `addDot` and `addMaxDistLine`.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/index.html");

/// Renders the survey as one map call per line.
pub fn map_script(survey: &Survey) -> String {
    let mut s = String::new();

    if let Some(reference) = &survey.reference {
        s.push_str(&format!(
            "addMarker({}, {}, '{}', 'Low');\n",
            reference.latitude,
            reference.longitude,
            survey.reference_label()
        ));
    }

    for hit in &survey.hits {
        s.push_str(&dot(hit, 0, true));
    }

    if let (Some(reference), Some(farthest)) = (&survey.reference, &survey.farthest) {
        s.push_str(&max_dist_line(reference, &farthest.point, farthest.distance));
    }

    s
}

/// Renders a track survey: hit dots labelled with their message count, every
/// `miss_sampling`-th miss, and the line to the farthest hit.
pub fn track_script(survey: &TrackSurvey, miss_sampling: usize) -> String {
    let mut s = String::new();

    for d in survey.dots(miss_sampling) {
        s.push_str(&dot(&d.position, d.messages, d.hit));
    }

    if let Some(farthest) = &survey.farthest {
        s.push_str(&max_dist_line(&survey.reference, &farthest.point, farthest.distance));
    }

    s
}

fn dot(position: &GeoPoint, messages: usize, hit: bool) -> String {
    format!(
        "addDot({},{},'{}', {});\n",
        position.latitude, position.longitude, messages, hit
    )
}

fn max_dist_line(from: &GeoPoint, to: &GeoPoint, distance: f64) -> String {
    format!(
        "addMaxDistLine({}, {}, {}, {}, {:.2});\n",
        from.latitude, from.longitude, to.latitude, to.longitude, distance
    )
}

pub fn splice(template: &str, script: &str) -> String {
    template.replace(PLACEHOLDER, script)
}
