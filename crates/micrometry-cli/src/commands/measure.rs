use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use serde::Serialize;

use micrometry_core::calibrate::{Lens, ScaleFactor};
use micrometry_core::geometry::PixelPoint;
use micrometry_core::provider::FileImageProvider;
use micrometry_core::session::MeasureSession;

#[derive(Args)]
pub struct MeasureArgs {
    /// Input image file
    pub file: PathBuf,

    /// First point, in image pixel coordinates ("X,Y")
    #[arg(long, value_parser = parse_point)]
    pub p1: (f64, f64),

    /// Second point, in image pixel coordinates ("X,Y")
    #[arg(long, value_parser = parse_point)]
    pub p2: (f64, f64),

    /// Known real-world distance between the two points (manual calibration)
    #[arg(long, requires = "unit")]
    pub known: Option<f64>,

    /// Unit for the known distance, e.g. "µm"
    #[arg(long, requires = "known")]
    pub unit: Option<String>,

    /// Objective magnification for automatic calibration (4, 10, 40 or 100).
    /// The two points must span the field-of-view diameter.
    #[arg(long, conflicts_with_all = ["known", "unit"])]
    pub lens: Option<u32>,

    /// Save the measurement under this label
    #[arg(long)]
    pub label: Option<String>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_point(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"X,Y\", got \"{s}\""))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X coordinate in \"{s}\""))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y coordinate in \"{s}\""))?;
    Ok((x, y))
}

#[derive(Serialize)]
struct MeasureReport {
    image: String,
    width: u32,
    height: u32,
    pixel_distance: f64,
    scale: Option<ScaleFactor>,
    display: String,
    label: Option<String>,
}

pub fn run(args: &MeasureArgs) -> Result<()> {
    let provider = FileImageProvider::new(&args.file);
    let mut session = MeasureSession::new();
    session.load_image(provider.probe()?);

    for (x, y) in [args.p1, args.p2] {
        let outcome = session.mark_pixel(PixelPoint::new(x, y));
        if !outcome.accepted() {
            bail!("point ({x}, {y}) lies outside the image");
        }
    }

    if let (Some(known), Some(unit)) = (args.known, args.unit.as_deref()) {
        session.calibrate_manual(known, unit)?;
    } else if let Some(magnification) = args.lens {
        let lens = Lens::from_magnification(magnification)
            .ok_or_else(|| anyhow!("no {magnification}x objective in the lens table"))?;
        session.calibrate_automatic(lens)?;
    }

    // Capture the derived values before saving clears the live points.
    let pixel_distance = session
        .measurement()
        .ok_or_else(|| anyhow!("measurement undefined"))?;
    let display = session
        .display()
        .ok_or_else(|| anyhow!("measurement undefined"))?;
    let scale = session.scale().cloned();
    let subject = session
        .subject()
        .ok_or_else(|| anyhow!("no image loaded"))?
        .clone();

    let saved = match args.label.as_deref() {
        Some(label) => Some(session.save_label(label)?),
        None => None,
    };

    if args.json {
        let report = MeasureReport {
            image: subject.uri,
            width: subject.size.width,
            height: subject.size.height,
            pixel_distance,
            scale,
            display,
            label: saved.map(|r| r.label),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Image:       {} ({}x{})",
        subject.uri, subject.size.width, subject.size.height
    );
    println!("Distance:    {pixel_distance:.2} pixels");
    if let Some(ref s) = scale {
        println!("Scale:       {}", s.confirmation());
    }
    println!("Measurement: {display}");
    if let Some(record) = &saved {
        println!(
            "Saved:       \"{}\" ({} label{})",
            record.label,
            session.labels().len(),
            if session.labels().len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
