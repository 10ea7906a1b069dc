//! Binary entrypoint for zoom-viewport.
//!
//! Plays a short session against the in-memory host and prints the resulting
//! zoom geometry. Handy for checking a configuration against real image sizes.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use zoom_viewport::events::ViewportEvent;
use zoom_viewport::geometry::{ImageDimensions, Point, Size};
use zoom_viewport::host::{SimulatedViewport, probe_image_file};
use zoom_viewport::tasks::viewport;
use zoom_viewport::{ViewportConfig, ZoomState, ZoomViewportController};

#[derive(Debug, Parser)]
#[command(name = "zoom-viewport", about = "Zoom geometry for a single-image viewport")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image whose natural size is displayed
    #[arg(long, value_name = "FILE", conflicts_with = "image_size")]
    image: Option<PathBuf>,

    /// Natural image size instead of a file, e.g. 4032x3024
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    image_size: Option<Size>,

    /// Container size, e.g. 390x844
    #[arg(long, value_name = "WxH", value_parser = parse_size, default_value = "390x844")]
    container: Size,

    /// Rotate the container after displaying
    #[arg(long)]
    rotate: bool,

    /// Zoom-toggle tap at this content-space point, e.g. 500,400
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    tap: Option<Point>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn parse_size(raw: &str) -> Result<Size, String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {raw:?}"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok(Size::new(w, h))
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {raw:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("zoom_viewport={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn print_state(label: &str, s: &ZoomState) {
    println!(
        "{label:>8}: scale {:.4} (min {:.4}, max {:.4}) offset ({:.1}, {:.1}) content {:.1}x{:.1} in {}x{}",
        s.current_scale,
        s.min_scale,
        s.max_scale,
        s.content_offset.x,
        s.content_offset.y,
        s.content_size.width,
        s.content_size.height,
        s.bounds.width,
        s.bounds.height,
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = match &cli.config {
        Some(path) => ViewportConfig::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ViewportConfig::default(),
    };

    let image = match (&cli.image, cli.image_size) {
        (Some(path), _) => probe_image_file(path)
            .with_context(|| format!("reading image size from {}", path.display()))?,
        (None, Some(size)) => ImageDimensions::new(size.width, size.height)?,
        (None, None) => bail!("either --image or --image-size is required"),
    };
    info!(
        width = image.width(),
        height = image.height(),
        fit = %cfg.fit_mode,
        "starting session"
    );

    let taps = cfg.zoom_gesture_taps;
    let controller = ZoomViewportController::new(SimulatedViewport::new(cli.container), cfg)
        .context("validating configuration")?;

    let (tx, rx) = mpsc::channel::<ViewportEvent>(8);
    let session = tokio::spawn(viewport::run(rx, controller, CancellationToken::new()));

    tx.send(ViewportEvent::Display(image)).await?;
    if cli.rotate {
        // Hosts announce the rotation before the new bounds arrive.
        tx.send(ViewportEvent::OrientationChanged).await?;
        tx.send(ViewportEvent::Resize(cli.container.rotated()))
            .await?;
    }
    if let Some(location) = cli.tap {
        tx.send(ViewportEvent::Tap { location, taps }).await?;
    }
    drop(tx);

    let controller = session.await.context("viewport task panicked")?;
    print_state("final", &controller.zoom_state());
    Ok(())
}
