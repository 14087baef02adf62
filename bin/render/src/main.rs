//! Paint a grid by sweeping the pointer across every row and save the result
//! as an image.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use etchpad::{Brightness, Config, DrawMode, Grid, GridSize, Point, Session};
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Render a painted sketch grid to a PNG.
#[derive(Parser)]
#[command(name = "etchpad-render")]
#[command(version)]
struct Args {
    /// Configuration file path.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells along each side of the grid (1-100).
    #[arg(short, long)]
    size: Option<GridSize>,

    /// Draw mode: rainbow, black, color or eraser.
    #[arg(short, long)]
    mode: Option<DrawMode>,

    /// Color picker value (#RRGGBB); switches to the color mode.
    #[arg(long)]
    color: Option<String>,

    /// Fixed brightness (0-100). Without it the brightness ramps from 0 on
    /// the top row to 100 on the bottom row.
    #[arg(short, long)]
    brightness: Option<Brightness>,

    /// Seed for the rainbow colors.
    #[arg(long)]
    seed: Option<u64>,

    /// Output image path.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Brightness for a row when ramping from black at the top to white at the
/// bottom.
fn ramp(row: usize, rows: usize) -> etchpad::Result<Brightness> {
    if rows < 2 {
        return Ok(Brightness::NEUTRAL);
    }
    Brightness::new((row * 100 / (rows - 1)) as i32)
}

/// Pointer positions crossing `row` from left to right, two per cell.
fn sweep(grid: &Grid, row: usize) -> impl Iterator<Item = Point> {
    let cell = grid.cell_extent();
    let y = (row as f32 + 0.5) * cell;
    let steps = grid.size().get() * 2;
    (0..steps).map(move |step| Point::new((step as f32 + 0.5) * cell / 2.0, y))
}

fn render(grid: &Grid, session: &Session) -> RgbaImage {
    let side = (grid.extent().round() as u32).max(1);
    let background = session.erase_color();
    let mut img = RgbaImage::from_pixel(side, side, to_pixel(background.to_array()));

    for (index, cell) in grid.cells().enumerate() {
        let Some(rect) = grid.cell_rect(index) else {
            continue;
        };
        let color = cell.unwrap_or(background);

        let x = rect.min_x().round() as i32;
        let y = rect.min_y().round() as i32;
        let width = (rect.max_x().round() as i32 - x).max(1) as u32;
        let height = (rect.max_y().round() as i32 - y).max(1) as u32;

        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, y).of_size(width, height),
            to_pixel(color.to_array()),
        );
    }

    img
}

fn to_pixel([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("could not load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(size) = args.size {
        config.grid_size = size;
    }

    let mut session = Session::new(&config);
    if let Some(mode) = args.mode {
        session.set_draw_mode(mode)?;
    }
    if let Some(hex) = &args.color {
        session.pick_hex(hex)?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut grid = config.grid()?;
    info!(
        grid = %grid.label(),
        mode = %session.draw_mode(),
        "painting"
    );

    let rows = grid.size().get();
    let mut painted = 0;
    for row in 0..rows {
        let brightness = match args.brightness {
            Some(brightness) => brightness,
            None => ramp(row, rows)?,
        };
        session.set_brightness(brightness);

        let points = sweep(&grid, row).collect::<Vec<_>>();
        painted += grid.stroke(points, &session, &mut rng);
    }
    info!(painted, "sweep finished");

    render(&grid, &session)
        .save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;
    info!(path = %args.output.display(), "saved");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_covers_the_slider() {
        assert_eq!(ramp(0, 1).unwrap(), Brightness::NEUTRAL);
        assert_eq!(ramp(0, 16).unwrap(), Brightness::MIN);
        assert_eq!(ramp(15, 16).unwrap(), Brightness::MAX);
        assert_eq!(ramp(5, 11).unwrap().value(), 50);
    }

    #[test]
    fn sweep_enters_every_cell_in_the_row() {
        let config = Config::default();
        let grid = config.grid().unwrap();
        let hits = sweep(&grid, 3)
            .filter_map(|p| grid.hit_test(p))
            .collect::<Vec<_>>();
        assert_eq!(hits.len(), 32);
        assert_eq!(hits.first(), Some(&48));
        assert_eq!(hits.last(), Some(&63));
    }

    #[test]
    fn render_fills_cells() {
        let mut config = Config::default();
        config.grid_size = GridSize::new(2).unwrap();
        let mut grid = config.grid().unwrap();
        let mut session = Session::new(&config);
        session.set_draw_mode(DrawMode::Black).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        grid.paint(1, &session, &mut rng).unwrap();

        let img = render(&grid, &session);
        assert_eq!(img.dimensions(), (640, 640));
        assert_eq!(img.get_pixel(10, 10), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(630, 10), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(630, 630), &Rgba([255, 255, 255, 255]));
    }
}
