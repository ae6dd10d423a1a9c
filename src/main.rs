extern crate reception_map;

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Duration;
use clap::Parser;
use failure::{format_err, Error, ResultExt};
use log::{info, warn};

use reception_map::render::{self, DEFAULT_TEMPLATE, PLACEHOLDER};
use reception_map::scan::Farthest;
use reception_map::track::{self, DEFAULT_TOLERANCE_MS};
use reception_map::{read_receptions, DistanceUnit, GeoPoint, Mode, Survey, TrackSurvey};

#[derive(Parser, Debug)]
#[command(name = "reception-map")]
#[command(about = "Plot a reception log on a map and find the longest range at which messages got through.", long_about = None)]
struct Cli {
    /// Reception log with `tx_lat,tx_lng,rx_lat,rx_lng` lines, or `-` for stdin.
    /// With --track, a GDL90 message log of `seconds,hexframe` lines instead.
    log: String,

    /// KML track log of the moving end. Switches to matching GDL90 uplinks against the track.
    #[arg(long)]
    track: Option<PathBuf>,

    /// Position of the fixed end as `lat,lng`. Required with --track.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    reference: Option<GeoPoint>,

    /// Longest gap between a message and the following track fix, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TOLERANCE_MS)]
    tolerance_ms: i64,

    /// With --track, plot only every Nth track point without reception (0 hides them)
    #[arg(long, default_value_t = 10)]
    miss_sampling: usize,

    /// The transmitter was moving and the receiver stayed fixed
    #[arg(long, default_value_t = false)]
    tx_moving: bool,

    /// Unit for the maximum distance (mi, km or nm)
    #[arg(short, long, default_value = "km", value_parser = parse_unit)]
    unit: DistanceUnit,

    /// HTML template containing a DATA_HERE placeholder. Uses a built-in Leaflet page if omitted.
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file. Prints to stdout if omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print only the map script instead of the full page
    #[arg(long, default_value_t = false)]
    script_only: bool,
}

fn parse_unit(s: &str) -> Result<DistanceUnit, String> {
    s.parse::<DistanceUnit>().map_err(|e| e.to_string())
}

fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let mut parts = s.split(',').map(|v| v.trim().parse::<f64>());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(lat)), Some(Ok(lng)), None) => Ok(GeoPoint::new(lat, lng)),
        _ => Err(format!("expected `lat,lng`, got {:?}", s)),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        let mut causes = err.iter_chain();
        if let Some(first) = causes.next() {
            eprintln!("error: {}", first);
        }
        for cause in causes {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input: Box<dyn Read> = if cli.log == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(&cli.log).with_context(|_| format!("opening {}", cli.log))?)
    };

    let script = match &cli.track {
        Some(path) => track_script(cli, path, input)?,
        None => reception_script(cli, input)?,
    };

    let output = if cli.script_only {
        script
    } else {
        let template = match &cli.template {
            Some(path) => fs::read_to_string(path)
                .with_context(|_| format!("reading template {}", path.display()))?,
            None => DEFAULT_TEMPLATE.to_string(),
        };
        if !template.contains(PLACEHOLDER) {
            warn!("Template has no {} placeholder, the map will be empty", PLACEHOLDER);
        }
        render::splice(&template, &script)
    };

    match &cli.out {
        Some(path) => fs::write(path, output)
            .with_context(|_| format!("writing {}", path.display()))?,
        None => io::stdout().write_all(output.as_bytes())?,
    }

    Ok(())
}

fn reception_script(cli: &Cli, input: Box<dyn Read>) -> Result<String, Error> {
    let receptions = read_receptions(input).with_context(|_| format!("parsing {}", cli.log))?;

    let mode = if cli.tx_moving { Mode::TransmitterMoving } else { Mode::ReceiverMoving };
    let survey = Survey::new(&receptions, mode, cli.unit);

    match (&survey.reference, &survey.farthest) {
        (Some(_), Some(farthest)) => log_farthest(farthest, cli.unit),
        (None, _) => warn!("No position fix for the fixed end in {}", cli.log),
        (Some(_), None) => warn!("No position fix for the moving end in {}", cli.log),
    }

    Ok(render::map_script(&survey))
}

fn track_script(cli: &Cli, path: &Path, input: Box<dyn Read>) -> Result<String, Error> {
    let reference = cli
        .reference
        .ok_or_else(|| format_err!("--track needs the fixed position via --reference lat,lng"))?;

    let kml = fs::read_to_string(path).with_context(|_| format!("reading {}", path.display()))?;
    let fixes = track::read_track_kml(&kml).with_context(|_| format!("parsing {}", path.display()))?;
    let uplinks = track::read_uplinks(input).with_context(|_| format!("parsing {}", cli.log))?;

    let (points, unmatched) = track::associate(&fixes, &uplinks, Duration::milliseconds(cli.tolerance_ms));
    info!("{} of {} uplink messages matched the track", uplinks.len() - unmatched, uplinks.len());

    let survey = TrackSurvey::new(points, reference, cli.unit);
    match &survey.farthest {
        Some(farthest) => log_farthest(farthest, cli.unit),
        None => warn!("No track point received any uplink message"),
    }

    Ok(render::track_script(&survey, cli.miss_sampling))
}

fn log_farthest(farthest: &Farthest, unit: DistanceUnit) {
    info!(
        "Max distance {:.2} {} at {}, {}",
        farthest.distance, unit, farthest.point.latitude, farthest.point.longitude
    );
}
