//! A square grid of cells that get painted as the pointer enters them.

use std::{fmt, str::FromStr};

use euclid::default::{Point2D, Rect, Size2D};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::{Error, Result, Rgb, Session};

/// A position in the container, in pixels from its top left corner.
pub type Point = Point2D<f32>;

/// The area a cell covers in the container, in pixels.
pub type CellRect = Rect<f32>;

/// The number of cells along each side of the grid, in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub struct GridSize(u8);

impl GridSize {
    /// The smallest grid, a single cell.
    pub const MIN: Self = Self(1);

    /// The largest grid.
    pub const MAX: Self = Self(100);

    /// Create a grid size, failing outside of `1..=100`.
    pub fn new(value: i32) -> Result<Self> {
        if (1..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::out_of_range("grid size", value, 1, 100))
        }
    }

    /// The number of cells along each side.
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<i64> for GridSize {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        i32::try_from(value)
            .map_err(|_| Error::out_of_range("grid size", value as f64, 1, 100))
            .and_then(Self::new)
    }
}

impl FromStr for GridSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The drawing surface: `size * size` cells in row major order laid out in a
/// square container.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: GridSize,
    extent: f32,
    cells: Vec<Option<Rgb>>,
}

impl Grid {
    /// Create a grid with every cell unpainted. `extent` is the length of the
    /// container's sides in pixels.
    pub fn new(size: GridSize, extent: f32) -> Result<Self> {
        if !(extent.is_finite() && extent > 0.0) {
            return Err(Error::out_of_range(
                "container size",
                extent,
                f32::MIN_POSITIVE,
                f32::MAX,
            ));
        }

        Ok(Self {
            size,
            extent,
            cells: vec![None; size.get() * size.get()],
        })
    }

    /// The number of cells along each side.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The length of the container's sides in pixels.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// The total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The length of a cell's sides in pixels.
    pub fn cell_extent(&self) -> f32 {
        self.extent / self.size.get() as f32
    }

    /// Text describing the dimensions, e.g. `16 x 16`.
    pub fn label(&self) -> String {
        format!("{0} x {0}", self.size)
    }

    /// The fill color of a cell, `None` if it is unpainted or out of bounds.
    pub fn cell(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied().flatten()
    }

    /// The fill color of the cell at `row` and `col`.
    pub fn cell_at_position(&self, row: usize, col: usize) -> Option<Rgb> {
        let size = self.size.get();
        if row >= size || col >= size {
            return None;
        }
        self.cell(row * size + col)
    }

    /// Iterate over all cells in row major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Rgb>> + '_ {
        self.cells.iter().copied()
    }

    /// The area covered by a cell.
    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        if index >= self.cells.len() {
            return None;
        }

        let size = self.size.get();
        let cell = self.cell_extent();
        let (row, col) = (index / size, index % size);

        Some(Rect::new(
            Point2D::new(col as f32 * cell, row as f32 * cell),
            Size2D::new(cell, cell),
        ))
    }

    /// The index of the cell under `point`, `None` outside of the container.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let bounds = Rect::new(Point2D::origin(), Size2D::new(self.extent, self.extent));
        if !bounds.contains(point) {
            return None;
        }

        let size = self.size.get();
        let cell = self.cell_extent();
        let col = ((point.x / cell) as usize).min(size - 1);
        let row = ((point.y / cell) as usize).min(size - 1);

        Some(row * size + col)
    }

    /// Paint a single cell with the session's current fill color and return
    /// that color.
    pub fn paint<R: Rng>(&mut self, index: usize, session: &Session, rng: &mut R) -> Result<Rgb> {
        let count = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::CellOutOfBounds { index, count })?;

        let color = session.paint_color(rng);
        trace!(index, %color, mode = %session.draw_mode(), "paint cell");
        *cell = Some(color);

        Ok(color)
    }

    /// Move the pointer along `points`, painting each cell as the pointer
    /// enters it. Staying within a cell paints it once; leaving the container
    /// and coming back in paints the cell entered again. Returns the number of
    /// cells painted.
    pub fn stroke<R: Rng>(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        session: &Session,
        rng: &mut R,
    ) -> usize {
        let mut current = None;
        let mut painted = 0;

        for point in points {
            let hit = self.hit_test(point);
            if let Some(index) = hit {
                if current != Some(index) {
                    let color = session.paint_color(rng);
                    trace!(index, %color, "pointer entered cell");
                    self.cells[index] = Some(color);
                    painted += 1;
                }
            }
            current = hit;
        }

        painted
    }

    /// Reset every cell to unpainted, keeping the size.
    pub fn clear(&mut self) {
        debug!(size = %self.size, "clear grid");
        self.cells.fill(None);
    }

    /// Rebuild the grid with a new size. All cells become unpainted.
    pub fn resize(&mut self, size: GridSize) {
        debug!(from = %self.size, to = %size, "resize grid");
        self.size = size;
        self.cells = vec![None; size.get() * size.get()];
    }
}
