use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "line {}: expected 4 coordinate fields, found {}", line, found)]
    MissingFields { line: u64, found: usize },

    #[fail(display = "line {}, column {}: {:?} is not a number", line, column, text)]
    InvalidNumber { line: u64, column: usize, text: String },

    #[fail(display = "unknown distance unit {:?} (expected mi, km or nm)", text)]
    UnknownUnit { text: String },

    #[fail(display = "line {}: {:?} is not a unix timestamp", line, text)]
    InvalidTimestamp { line: u64, text: String },

    #[fail(display = "track fix #{}: can not parse {:?}", index, text)]
    InvalidTrackFix { index: usize, text: String },

    #[fail(display = "track has {} timestamps but {} coordinates", whens, coords)]
    TrackMismatch { whens: usize, coords: usize },

    #[fail(display = "failed to read log: {}", _0)]
    Csv(#[cause] csv::Error),

    #[fail(display = "failed to read KML: {}", _0)]
    Xml(#[cause] quick_xml::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err)
    }
}
