extern crate cfg_if;
extern crate chrono;
extern crate csv;
extern crate failure;
extern crate quick_xml;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod cosine;
pub mod haversine;
pub mod reception;
pub mod render;
pub mod scan;
pub mod survey;
pub mod track;
pub mod unit;

mod error;
mod parallel;
mod point;

pub use crate::cosine::distance;
pub use crate::error::Error;
pub use crate::point::{GeoPoint, Point};
pub use crate::reception::{read_receptions, Mode, Reception};
pub use crate::survey::Survey;
pub use crate::track::TrackSurvey;
pub use crate::unit::DistanceUnit;
