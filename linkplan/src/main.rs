mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use geo::coord;
use log::info;
use options::{Cli, Command as CliCmd};
use rflink::{
    compute_link_geometry,
    ellipse::{project_to_screen, EllipseConfig, ScreenEllipse},
    fresnel::FresnelZone,
    math::path_points,
    registry::parse_frequency,
    viewport::WebMercator,
    FresnelGeometry, GeoPoint,
};
use serde::Serialize;
use std::io::Write;
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let Cli {
        freq,
        zoom,
        steps,
        min_major_px,
        min_minor_px,
        start,
        dest,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let freq_ghz = parse_frequency(&freq);
    let config = EllipseConfig::new(min_major_px, min_minor_px)?;
    let geometry = compute_link_geometry(start.0, dest.0, freq_ghz)?;
    info!("{geometry:?}");

    let link = LinkReport {
        start: start.0,
        dest: dest.0,
        freq_ghz,
        geometry,
    };

    match cmd {
        CliCmd::Csv => print_csv(&link, steps)?,
        CliCmd::Json => print_json(&link, &link.ellipse(zoom, &config))?,
        CliCmd::Plot => plot_ascii(&link, steps)?,
        CliCmd::Ellipse => print_ellipse(&link.ellipse(zoom, &config)),
    };
    Ok(())
}

#[derive(Debug, Serialize)]
struct LinkReport {
    start: GeoPoint,
    dest: GeoPoint,
    freq_ghz: f64,
    geometry: FresnelGeometry,
}

impl LinkReport {
    /// Projects the link onto a 1024x768 viewport centered on its
    /// midpoint.
    fn ellipse(&self, zoom: f64, config: &EllipseConfig) -> ScreenEllipse {
        let viewport =
            WebMercator::centered(self.geometry.center, zoom, coord!(x: 1024.0, y: 768.0));
        project_to_screen(&self.geometry, self.start, self.dest, &viewport, config)
    }

    fn zone(&self) -> Result<FresnelZone<f64>, AnyError> {
        Ok(FresnelZone::new(1, self.freq_ghz, self.geometry.length_m)?)
    }
}

/// # Example with gnuplot
///
/// ```sh
/// cargo run -p linkplan -- --start=28.6139,77.2090 --dest=28.7041,77.1025 csv | tr ',' ' ' > ~/.tmp/plot && gnuplot -p -e "plot '~/.tmp/plot' using 1:4 with lines"
/// ```
fn print_csv(link: &LinkReport, steps: usize) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Latitude,Longitude,Fresnel")?;
    for ((distance, fresnel), point) in link
        .zone()?
        .iter(steps)
        .zip(path_points(link.start, link.dest, steps))
    {
        let GeoPoint { lat, lon } = point;
        writeln!(stdout, "{distance},{lat},{lon},{fresnel}")?;
    }
    Ok(())
}

fn plot_ascii(link: &LinkReport, steps: usize) -> Result<(), AnyError> {
    #[allow(clippy::cast_possible_truncation)]
    let plot_data: Vec<(f32, f32)> = link
        .zone()?
        .iter(steps)
        .map(|(distance, radius)| (distance as f32, radius as f32))
        .collect();
    #[allow(clippy::cast_possible_truncation)]
    Chart::new(200, 60, 0.0, link.geometry.length_m as f32)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
    Ok(())
}

fn print_json(link: &LinkReport, ellipse: &ScreenEllipse) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        link: &'a LinkReport,
        ellipse: &'a ScreenEllipse,
    }

    let json = serde_json::to_string(&JsonReport { link, ellipse })?;
    println!("{json}");
    Ok(())
}

fn print_ellipse(ellipse: &ScreenEllipse) {
    println!(
        "center: ({:.1}, {:.1}) px, semi-major: {:.1} px, semi-minor: {:.1} px",
        ellipse.center.x, ellipse.center.y, ellipse.semi_major_px, ellipse.semi_minor_px
    );
    println!("transform: {}", ellipse.to_svg_transform());
}
