use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use rflink::GeoPoint;
use std::str::FromStr;

/// Inspect the first fresnel zone of a point-to-point radio link.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Link frequency in GHz. Unparseable values are treated as 0.
    #[arg(short, long, default_value = "5.0")]
    pub freq: String,

    /// Map zoom level used for screen projection.
    #[arg(short, long, default_value_t = 12.0)]
    pub zoom: f64,

    /// Number of points sampled along the link.
    #[arg(short, long, default_value_t = 21)]
    pub steps: usize,

    /// Smallest drawn semi-major radius, in pixels.
    #[arg(long, default_value_t = rflink::ellipse::MIN_SEMI_MAJOR_PX)]
    pub min_major_px: f64,

    /// Smallest drawn semi-minor radius, in pixels.
    #[arg(long, default_value_t = rflink::ellipse::MIN_SEMI_MINOR_PX)]
    pub min_minor_px: f64,

    /// Start "lat,lon".
    #[arg(long)]
    pub start: LatLon,

    /// Destination "lat,lon".
    #[arg(long)]
    pub dest: LatLon,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub GeoPoint);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon pair"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(anyhow!("lat,lon out of range: {lat},{lon}"));
        }
        Ok(Self(GeoPoint::new(lat, lon)))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the fresnel zone profile as CSV to stdout.
    Csv,

    /// Print link geometry and screen ellipse as JSON to stdout.
    Json,

    /// Plot the fresnel zone profile to the terminal.
    Plot,

    /// Print the screen ellipse and its SVG transform.
    Ellipse,
}
